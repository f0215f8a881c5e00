//! The term data model.
//!
//! A [`Term`] is the engine's unit of syntax: either a leaf carrying a
//! literal value or identifier in its symbol's text, or a compound relational
//! structure whose children encode sub-arguments. Builtins follow the engine
//! convention that a candidate atom for an n-ary relation has `n + 1`
//! children: `[oid, arg1, .., argn]`, where the leading slot names the fact
//! instance being derived.

use crate::symbols::Symbol;

/// Syntactic role of a term within its parent atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Positional argument, no named role.
    None,
    /// The object-identifier slot of an atom.
    Oid,
}

/// Semantic kind of the value a term carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// No type information.
    Untyped,
    /// The top of the type order; generated identifiers are typed `Thing`.
    Thing,
    /// A relational atom or object.
    Object,
    /// Integer literal text.
    Integer,
    /// Floating-point literal text.
    Float,
    /// String literal text.
    String,
    /// An object-identifier value.
    Oid,
}

/// A leaf literal/identifier or a compound relational structure.
///
/// Children are owned, so `Clone` produces a structurally identical, fully
/// independent copy. That copy is the duplicate builtins take at the call
/// boundary, so they can never mutate the engine's working terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Interned symbol; for leaves this names the literal value.
    pub symbol: Symbol,
    /// Role within the parent atom.
    pub role: Role,
    /// How the symbol's text should be interpreted.
    pub ty: TypeTag,
    /// Ordered sub-arguments; empty for leaves.
    pub children: Vec<Term>,
    /// Whether this term is a relational atom (head of a derivable fact).
    pub is_atom: bool,
}

impl Term {
    /// A leaf term with no children.
    pub fn leaf(symbol: Symbol, role: Role, ty: TypeTag) -> Term {
        Term { symbol, role, ty, children: Vec::new(), is_atom: false }
    }

    /// A compound term with the given children.
    pub fn compound(symbol: Symbol, role: Role, ty: TypeTag, children: Vec<Term>) -> Term {
        Term { symbol, role, ty, children, is_atom: false }
    }

    /// A relational atom: role-less, typed `Object`, flagged as an atom.
    ///
    /// This is the shape builtins return as the head of a fact clause.
    pub fn atom(symbol: Symbol, children: Vec<Term>) -> Term {
        Term { symbol, role: Role::None, ty: TypeTag::Object, children, is_atom: true }
    }

    /// Returns true when no symbol reachable from this term is a variable.
    pub fn is_ground(&self) -> bool {
        !self.symbol.is_variable() && self.children.iter().all(Term::is_ground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolTable;

    #[test]
    fn groundness_is_recursive() {
        let table = SymbolTable::new();
        let p = table.intern("p");
        let a = Term::leaf(table.intern("a"), Role::None, TypeTag::String);
        let x = Term::leaf(Symbol::variable(0), Role::None, TypeTag::Untyped);

        assert!(a.is_ground());
        assert!(!x.is_ground());

        let ground = Term::atom(p, vec![a.clone(), a.clone()]);
        assert!(ground.is_ground());

        let open = Term::atom(p, vec![a, x]);
        assert!(!open.is_ground());
    }

    #[test]
    fn clone_is_independent() {
        let table = SymbolTable::new();
        let a = Term::leaf(table.intern("a"), Role::None, TypeTag::String);
        let mut atom = Term::atom(table.intern("p"), vec![a]);

        let copy = atom.clone();
        atom.children.push(Term::leaf(table.intern("b"), Role::None, TypeTag::String));

        assert_eq!(copy.children.len(), 1);
        assert_ne!(atom, copy);
    }
}

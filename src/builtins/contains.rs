//! Containment builtin.
//!
//! Calling format: `contains(oid, haystack, needle)`. Satisfied iff
//! `haystack` contains `needle` as a contiguous, case-sensitive substring.
//! The empty needle and self-containment both satisfy the relation.

use crate::builtins::{Builtin, BuiltinFailure, resolve_literal};
use crate::clause::DefiniteClause;
use crate::symbols::{Symbol, SymbolTable};
use crate::term::{Role, Term, TypeTag};

/// Expected child count: the OID slot plus two string arguments.
const CHILDREN: usize = 3;

pub struct ContainsBuiltin {
    symbol: Symbol,
}

impl ContainsBuiltin {
    /// Interns `contains` as the registration symbol.
    pub fn new(symbols: &SymbolTable) -> Self {
        Self { symbol: symbols.intern("contains") }
    }
}

impl Builtin for ContainsBuiltin {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn apply(
        &self,
        symbols: &SymbolTable,
        candidate: &Term,
    ) -> Result<DefiniteClause, BuiltinFailure> {
        if candidate.symbol != self.symbol {
            return Err(BuiltinFailure::SymbolMismatch);
        }
        if candidate.children.len() != CHILDREN {
            return Err(BuiltinFailure::ArityMismatch {
                expected: CHILDREN,
                found: candidate.children.len(),
            });
        }

        let haystack = candidate.children[1].clone();
        let needle = candidate.children[2].clone();

        if !haystack.is_ground() || !needle.is_ground() {
            return Err(BuiltinFailure::UnboundArgument);
        }
        if haystack.ty != TypeTag::String {
            return Err(BuiltinFailure::TypeMismatch { found: haystack.ty });
        }
        if needle.ty != TypeTag::String {
            return Err(BuiltinFailure::TypeMismatch { found: needle.ty });
        }

        let haystack_text = resolve_literal(symbols, &haystack)?;
        let needle_text = resolve_literal(symbols, &needle)?;

        if !haystack_text.contains(&needle_text) {
            return Err(BuiltinFailure::ConstraintUnsatisfied);
        }

        // Deterministic naming: identical argument pairs intern to the
        // identical fact identifier across calls.
        let oid_name = format!("$entail-contains-{haystack_text}-{needle_text}");
        let oid = Term::leaf(symbols.intern(&oid_name), Role::Oid, TypeTag::Thing);

        let atom = Term::atom(self.symbol, vec![oid, haystack, needle]);
        Ok(DefiniteClause::fact(atom))
    }
}

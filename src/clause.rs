//! Definite clauses.

use crate::term::Term;

/// A rule or fact: head atoms implied by a (possibly empty) body of
/// condition atoms.
///
/// Builtins only ever produce the fact form: exactly one head atom and an
/// empty body, an immediately-true derived fact the resolution procedure can
/// consume like any clause-database hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefiniteClause {
    /// Head atoms, in order.
    pub head: Vec<Term>,
    /// Body condition atoms, in order; empty for facts.
    pub body: Vec<Term>,
}

impl DefiniteClause {
    pub fn new(head: Vec<Term>, body: Vec<Term>) -> DefiniteClause {
        DefiniteClause { head, body }
    }

    /// The fact form: a single head atom and no body.
    pub fn fact(atom: Term) -> DefiniteClause {
        DefiniteClause { head: vec![atom], body: Vec::new() }
    }

    /// Returns true when this clause is a fact (non-empty head, empty body).
    pub fn is_fact(&self) -> bool {
        !self.head.is_empty() && self.body.is_empty()
    }
}

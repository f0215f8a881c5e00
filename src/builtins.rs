//! Builtin predicates: contract, failure taxonomy, and dispatch.
//!
//! A *builtin* is a predicate the resolution procedure resolves by direct
//! computation instead of searching stored clauses. The flow for one call:
//!
//! ```text
//! candidate atom ── BuiltinTable::evaluate ──┬─ head symbol not registered ─▶ None
//!                                            │
//!                                            v
//!                                 Builtin::apply (contains.rs / round.rs)
//!                                   - precondition checks, in order
//!                                   - duplicate + inspect arguments
//!                                   - compute, intern fresh OID
//!                                            │
//!                          Ok(fact clause) ──┴── Err(BuiltinFailure) ─▶ None
//! ```
//!
//! Every way a call can fail (wrong symbol, wrong arity, unbound or mistyped
//! arguments, unparseable literals, a relation that does not hold) collapses
//! to an absent result at the engine boundary, so a failed builtin call is
//! logically an unprovable goal, never a fault. The `Result`-returning
//! [`Builtin::apply`] keeps the distinction available for diagnostics;
//! [`Builtin::evaluate`] is the engine-facing form.
//!
//! ## Responsibilities by module
//!
//! - `contains.rs`: case-sensitive substring containment over string leaves.
//! - `round.rs`: nearest-integer rounding over numeric leaves.
//!
//! ## Adding a builtin
//!
//! Implement [`Builtin`] (intern the registration symbol at construction,
//! check preconditions in order, return the fact via [`DefiniteClause::fact`])
//! and install it with [`BuiltinTable::register`].

#[path = "builtins/contains.rs"]
mod contains;
#[path = "builtins/round.rs"]
mod round;


pub use contains::ContainsBuiltin;
pub use round::RoundBuiltin;

use crate::clause::DefiniteClause;
use crate::symbols::{Symbol, SymbolTable};
use crate::term::{Term, TypeTag};
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

/// Why a builtin application produced no result.
///
/// Externally all of these are equivalent to an unprovable goal; the
/// variants exist so surrounding tooling can tell a genuine rejection
/// (`ConstraintUnsatisfied`) from malformed input (`ValueParse`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuiltinFailure {
    /// The candidate's head symbol is not the one this builtin handles.
    #[error("head symbol is not registered to this builtin")]
    SymbolMismatch,

    /// Wrong number of argument slots (counting the leading OID slot).
    #[error("expected {expected} child slots, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// An argument contains an unbound variable.
    #[error("argument is not ground")]
    UnboundArgument,

    /// An argument's type tag is not one this builtin accepts.
    #[error("argument type {found:?} not accepted")]
    TypeMismatch { found: TypeTag },

    /// An argument's literal text does not parse as its type tag promises.
    #[error("literal {text:?} does not parse as its tagged type")]
    ValueParse { text: String },

    /// Inputs are well-formed but the relation does not hold.
    #[error("relation does not hold for these arguments")]
    ConstraintUnsatisfied,
}

/// A predicate resolved by direct computation.
///
/// Implementations are stateless and side-effect-free apart from registry
/// growth when interning fresh identifiers: applying the same builtin to the
/// same candidate twice yields structurally identical results, including the
/// generated OID symbol.
pub trait Builtin: Send + Sync {
    /// The predicate symbol this builtin is registered under.
    fn symbol(&self) -> Symbol;

    /// Apply this builtin to a candidate atom, reporting why it did not
    /// produce a result.
    ///
    /// Arguments are duplicated before inspection; `candidate` is never
    /// mutated regardless of outcome.
    fn apply(
        &self,
        symbols: &SymbolTable,
        candidate: &Term,
    ) -> Result<DefiniteClause, BuiltinFailure>;

    /// Engine-facing form: a derived fact, or `None` when this builtin does
    /// not apply. A `None` is indistinguishable from "no clause matched".
    fn evaluate(&self, symbols: &SymbolTable, candidate: &Term) -> Option<DefiniteClause> {
        match self.apply(symbols, candidate) {
            Ok(clause) => Some(clause),
            Err(reason) => {
                trace!(builtin = self.symbol().id(), %reason, "builtin not applicable");
                None
            }
        }
    }
}

/// Symbol-keyed dispatch table, built once at session start.
///
/// The builtin set is closed for a session: the resolution procedure routes
/// a candidate atom here by head symbol, and a miss means "try other
/// strategies", with no side effects.
#[derive(Default)]
pub struct BuiltinTable {
    entries: HashMap<Symbol, Box<dyn Builtin>>,
}

impl BuiltinTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference builtin set: `contains` and `round`.
    pub fn standard(symbols: &SymbolTable) -> Self {
        let mut table = Self::new();
        table.register(Box::new(ContainsBuiltin::new(symbols)));
        table.register(Box::new(RoundBuiltin::new(symbols)));
        table
    }

    /// Install a builtin under its registration symbol, replacing any
    /// previous entry for that symbol.
    pub fn register(&mut self, builtin: Box<dyn Builtin>) {
        self.entries.insert(builtin.symbol(), builtin);
    }

    /// The builtin registered for `symbol`, if any.
    pub fn get(&self, symbol: Symbol) -> Option<&dyn Builtin> {
        self.entries.get(&symbol).map(Box::as_ref)
    }

    /// Route `candidate` to the builtin registered for its head symbol.
    pub fn evaluate(&self, symbols: &SymbolTable, candidate: &Term) -> Option<DefiniteClause> {
        match self.get(candidate.symbol) {
            Some(builtin) => builtin.evaluate(symbols, candidate),
            None => {
                trace!(head = candidate.symbol.id(), "no builtin registered for head symbol");
                None
            }
        }
    }
}

/// Literal text of a ground leaf argument.
///
/// Symbols allocated by another session have no text in this table; that is
/// reported as a parse failure to keep the taxonomy closed.
fn resolve_literal(symbols: &SymbolTable, term: &Term) -> Result<String, BuiltinFailure> {
    symbols.resolve(term.symbol).ok_or_else(|| BuiltinFailure::ValueParse {
        text: format!("<symbol {}>", term.symbol.id()),
    })
}

impl std::fmt::Debug for BuiltinTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<i32> = self.entries.keys().map(|s| s.id()).collect();
        ids.sort_unstable();
        f.debug_struct("BuiltinTable").field("symbols", &ids).finish()
    }
}

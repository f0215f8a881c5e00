//! Builtin predicate evaluation core for a definite-clause reasoning engine.
//!
//! A resolution procedure that hits a goal like `contains(?o, "hello world",
//! "wor")` can resolve it here by direct computation instead of searching
//! stored clauses:
//!
//! ```
//! use entail::{BuiltinTable, Role, Symbol, SymbolTable, Term, TypeTag};
//!
//! let symbols = SymbolTable::new();
//! let builtins = BuiltinTable::standard(&symbols);
//!
//! let goal = Term::atom(
//!     symbols.intern("contains"),
//!     vec![
//!         Term::leaf(Symbol::variable(0), Role::Oid, TypeTag::Untyped),
//!         Term::leaf(symbols.intern("hello world"), Role::None, TypeTag::String),
//!         Term::leaf(symbols.intern("wor"), Role::None, TypeTag::String),
//!     ],
//! );
//!
//! let fact = builtins.evaluate(&symbols, &goal).expect("relation holds");
//! assert!(fact.is_fact());
//! ```
//!
//! An absent result means "this builtin does not apply" and is treated
//! exactly like clause-search failure; builtins never abort resolution. See
//! [`Builtin`] for the contract and [`BuiltinFailure`] for the taxonomy.

mod builtins;
mod clause;
mod symbols;
mod term;

pub use builtins::{Builtin, BuiltinFailure, BuiltinTable, ContainsBuiltin, RoundBuiltin};
pub use clause::DefiniteClause;
pub use symbols::{Symbol, SymbolTable};
pub use term::{Role, Term, TypeTag};

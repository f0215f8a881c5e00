//! Symbol interning.
//!
//! Every name the engine touches, from predicate symbols to literal values
//! and generated object identifiers, is interned once into a [`SymbolTable`]
//! and handled as a small integer [`Symbol`] afterwards. Equality and dispatch
//! then become integer comparisons, and re-interning the text behind a
//! generated identifier recovers the identical symbol, which is what makes
//! builtin result naming idempotent across calls.
//!
//! ## Session scoping
//!
//! The table is an explicit session object: construct one per reasoning
//! session with [`SymbolTable::new`] and pass it where interning is needed.
//! There is no process-wide table, so tests and concurrent sessions stay
//! isolated and reproducible.
//!
//! ## Concurrency
//!
//! A session may evaluate resolution branches in parallel, so `intern` takes
//! `&self` and is safe under concurrent calls: the first writer wins and
//! every caller converges on the same identifier for the same text. Lookups
//! take a read lock only.

use parking_lot::RwLock;
use std::collections::HashMap;

/// An interned identifier standing for a string.
///
/// Non-negative identifiers are ground symbols allocated by a [`SymbolTable`].
/// Negative identifiers denote unbound variables; they are never allocated by
/// interning and have no entry in any table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(i32);

impl Symbol {
    /// The variable symbol with the given index (0-based).
    ///
    /// Variable identity is per-clause and assigned by whatever constructed
    /// the clause; two variables are the same variable iff their indexes
    /// match.
    pub fn variable(index: u32) -> Symbol {
        Symbol(-1 - index as i32)
    }

    /// Returns true when this symbol denotes an unbound variable.
    pub fn is_variable(self) -> bool {
        self.0 < 0
    }

    /// The raw identifier.
    pub fn id(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Interner {
    ids: HashMap<String, i32>,
    texts: Vec<String>,
}

/// Bidirectional mapping between strings and [`Symbol`]s for one session.
///
/// The table only grows: there is no removal, and an identifier, once
/// assigned, stays stable for the life of the table.
#[derive(Debug, Default)]
pub struct SymbolTable {
    inner: RwLock<Interner>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the existing symbol if it was seen before.
    ///
    /// Safe under concurrent calls: all callers interning the same text get
    /// the same symbol, regardless of interleaving.
    pub fn intern(&self, text: &str) -> Symbol {
        if let Some(&id) = self.inner.read().ids.get(text) {
            return Symbol(id);
        }

        let mut inner = self.inner.write();
        // Re-check under the write lock: another writer may have inserted
        // between our read and write sections.
        if let Some(&id) = inner.ids.get(text) {
            return Symbol(id);
        }
        let id = inner.texts.len() as i32;
        inner.texts.push(text.to_string());
        inner.ids.insert(text.to_string(), id);
        Symbol(id)
    }

    /// The string behind `symbol`, if it was allocated by this table.
    ///
    /// Variables and symbols from other sessions have no text here.
    pub fn resolve(&self, symbol: Symbol) -> Option<String> {
        if symbol.0 < 0 {
            return None;
        }
        self.inner.read().texts.get(symbol.0 as usize).cloned()
    }

    /// Number of interned symbols.
    pub fn len(&self) -> usize {
        self.inner.read().texts.len()
    }

    /// Returns true when nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Rounding builtin.
//!
//! Calling format: `round(oid, output, input)`. Satisfied iff `output` is
//! the integer nearest to the numeric `input`, with half-way values rounded
//! away from zero (`3.5` rounds to `4`, `-3.5` to `-4`). Only the input slot
//! is inspected; the output slot of the candidate may be a variable and is
//! bound by unification against the produced fact.

use crate::builtins::{Builtin, BuiltinFailure, resolve_literal};
use crate::clause::DefiniteClause;
use crate::symbols::{Symbol, SymbolTable};
use crate::term::{Role, Term, TypeTag};

/// Expected child count: the OID slot, the output slot, and one numeric input.
const CHILDREN: usize = 3;

pub struct RoundBuiltin {
    symbol: Symbol,
}

impl RoundBuiltin {
    /// Interns `round` as the registration symbol.
    pub fn new(symbols: &SymbolTable) -> Self {
        Self { symbol: symbols.intern("round") }
    }
}

impl Builtin for RoundBuiltin {
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

        let input = candidate.children[2].clone();

        if !input.is_ground() {
            return Err(BuiltinFailure::UnboundArgument);
        }

        let input_text = resolve_literal(symbols, &input)?;

        let output = match input.ty {
            TypeTag::Integer => {
                // Already integral; validate the literal and pass the symbol
                // through unchanged.
                input_text
                    .parse::<i64>()
                    .map_err(|_| BuiltinFailure::ValueParse { text: input_text.clone() })?;
                Term::leaf(input.symbol, Role::None, TypeTag::Integer)
            }
            TypeTag::Float => {
                let value: f64 = input_text
                    .parse()
                    .map_err(|_| BuiltinFailure::ValueParse { text: input_text.clone() })?;
                // f64::round is round-half-away-from-zero, the tie rule this
                // relation is specified with.
                let rounded = value.round() as i64;
                Term::leaf(
                    symbols.intern(&rounded.to_string()),
                    Role::None,
                    TypeTag::Integer,
                )
            }
            other => return Err(BuiltinFailure::TypeMismatch { found: other }),
        };

        let oid_name = format!("$entail-round-{input_text}");
        let oid = Term::leaf(symbols.intern(&oid_name), Role::Oid, TypeTag::Thing);

        let atom = Term::atom(self.symbol, vec![oid, output, input]);
        Ok(DefiniteClause::fact(atom))
    }
}

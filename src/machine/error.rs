//! Evaluator errors.

use thiserror::Error;

/// Errors raised by the generic finite state machine.
///
/// Offending states and symbols are carried in their `Debug` rendering so
/// the error type stays independent of the machine's type parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// The machine definition violates a structural invariant
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The symbol is not part of the machine's alphabet
    #[error("Invalid symbol: {symbol}")]
    InvalidSymbol { symbol: String },

    /// The transition table has no entry for the current state and symbol
    #[error("No transition defined from state {state} on symbol {symbol}")]
    IncompleteTransition { state: String, symbol: String },
}

impl FsmError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

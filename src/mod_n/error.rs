//! Mod-N synthesis and evaluation errors.

use crate::machine::FsmError;
use thiserror::Error;

/// Errors that can occur when building or running a mod-N machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModNError {
    #[error("Modulus must be positive (got {modulus})")]
    InvalidModulus { modulus: i64 },

    /// The `n x |alphabet|` table does not fit in memory
    #[error("Modulus {modulus} is too large to build a transition table")]
    ModulusTooLarge { modulus: i64 },

    #[error("Alphabet must not be empty")]
    EmptyAlphabet,

    #[error("Input string cannot be empty")]
    EmptyInput,

    /// A symbol of the input is outside the declared alphabet
    #[error("Invalid character {symbol} at position {position} in input string. Valid alphabet: {alphabet}")]
    InvalidCharacter {
        symbol: String,
        position: usize,
        alphabet: String,
    },

    #[error(transparent)]
    Machine(#[from] FsmError),
}

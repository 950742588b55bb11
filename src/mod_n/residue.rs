//! Residue state identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a mod-N machine: the value of the prefix read so far, mod N.
///
/// Displays with the conventional `S<value>` label.
///
/// ```rust
/// use modfsm::mod_n::Residue;
///
/// assert_eq!(Residue::new(3).to_string(), "S3");
/// assert_eq!(Residue::new(3).value(), 3);
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Residue(usize);

impl Residue {
    pub const ZERO: Residue = Residue(0);

    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(self) -> usize {
        self.0
    }

    /// Horner step: `(self * radix + digit) mod modulus`.
    ///
    /// Evaluated in 128-bit arithmetic, which cannot overflow for any
    /// `usize` operands.
    pub(crate) fn advance(self, radix: usize, digit: usize, modulus: usize) -> Self {
        let next = (self.0 as u128 * radix as u128 + digit as u128) % modulus as u128;
        Self(next as usize)
    }
}

impl From<Residue> for usize {
    fn from(residue: Residue) -> Self {
        residue.0
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

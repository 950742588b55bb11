//! Mod-N transition synthesis.
//!
//! Builds, for a modulus `n` and an alphabet `A`, the machine whose state
//! after reading a string is the value of that string mod `n`, reading the
//! symbols as digits in base `|A|`.
//!
//! Digit values come from the alphabet's natural order: the smallest symbol
//! is digit 0, the next is digit 1, and so on. Each state is a [`Residue`]
//! and the table implements the Horner recurrence
//! `next = (residue * |A| + digit) mod n`.
//!
//! # Example
//!
//! ```rust
//! use modfsm::mod_n::{compute_remainder, compute_remainder_binary};
//!
//! assert_eq!(compute_remainder_binary("1101", 3).unwrap(), 1);
//!
//! // D, B, A sorts to A=0, B=1, D=2, so "ABD" is 0*9 + 1*3 + 2 = 5.
//! assert_eq!(compute_remainder("ABD", 3, ['D', 'B', 'A']).unwrap(), 2);
//! ```

mod error;
mod residue;

pub use error::ModNError;
pub use residue::Residue;

use crate::builder::tabulate;
use crate::core::{Observer, Symbol, TracingObserver};
use crate::machine::{FiniteStateMachine, FsmError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, instrument};

/// Alphabet used by [`compute_remainder_binary`].
pub const BINARY_ALPHABET: [char; 2] = ['0', '1'];

/// A synthesized mod-N machine.
pub type ModNMachine<Sy, O = TracingObserver> = FiniteStateMachine<Residue, Sy, O>;

/// Which residues a synthesized machine treats as final.
///
/// Finality only affects [`FiniteStateMachine::is_accepting`]; the
/// remainder computation is the same for every variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acceptance {
    /// Every residue is final, so any successful run accepts.
    #[default]
    AllResidues,
    /// Only residue 0 is final: accepts exactly the multiples of `n`.
    Divisible,
    /// An explicit set of residues. Values `>= n` are rejected at build time.
    Residues(BTreeSet<usize>),
}

impl Acceptance {
    fn final_states(&self, modulus: usize) -> HashSet<Residue> {
        match self {
            Self::AllResidues => (0..modulus).map(Residue::new).collect(),
            Self::Divisible => HashSet::from([Residue::ZERO]),
            Self::Residues(values) => values.iter().copied().map(Residue::new).collect(),
        }
    }
}

/// Digit value of every symbol: its rank in the sorted alphabet.
///
/// Duplicate symbols collapse, so equal sets always produce equal maps.
///
/// ```rust
/// use modfsm::mod_n::digit_values;
///
/// let digits = digit_values(['D', 'B', 'A', 'B']);
/// assert_eq!(digits.into_iter().collect::<Vec<_>>(), vec![('A', 0), ('B', 1), ('D', 2)]);
/// ```
pub fn digit_values<Sy: Symbol>(alphabet: impl IntoIterator<Item = Sy>) -> BTreeMap<Sy, usize> {
    alphabet
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(digit, symbol)| (symbol, digit))
        .collect()
}

/// Build the mod-`n` machine for `alphabet` with every residue final.
pub fn build_mod_n_fsm<Sy: Symbol>(
    n: i64,
    alphabet: impl IntoIterator<Item = Sy>,
) -> Result<ModNMachine<Sy>, ModNError> {
    build_mod_n_fsm_with(n, alphabet, &Acceptance::AllResidues)
}

/// Build the mod-`n` machine for `alphabet` with the given final residues.
///
/// Fails with [`ModNError::InvalidModulus`] if `n <= 0`, with
/// [`ModNError::EmptyAlphabet`] if the alphabet has no symbols and with
/// [`ModNError::ModulusTooLarge`] if the `n x |alphabet|` table cannot be
/// allocated.
#[instrument(level = "debug", skip_all, fields(modulus = n))]
pub fn build_mod_n_fsm_with<Sy: Symbol>(
    n: i64,
    alphabet: impl IntoIterator<Item = Sy>,
    acceptance: &Acceptance,
) -> Result<ModNMachine<Sy>, ModNError> {
    let modulus = positive_modulus(n)?;

    let digits = digit_values(alphabet);
    if digits.is_empty() {
        return Err(ModNError::EmptyAlphabet);
    }
    let radix = digits.len();

    debug!(modulus, radix, ?acceptance, "Building mod-N FSM");

    let too_large = || ModNError::ModulusTooLarge { modulus: n };
    modulus.checked_mul(radix).ok_or_else(too_large)?;
    let mut residues: Vec<Residue> = Vec::new();
    residues.try_reserve_exact(modulus).map_err(|_| too_large())?;
    residues.extend((0..modulus).map(Residue::new));
    let symbols: Vec<Sy> = digits.keys().cloned().collect();
    let table = tabulate(&residues, &symbols, |residue, symbol| {
        residue.advance(radix, digits[symbol], modulus)
    });

    let machine = FiniteStateMachine::new(
        residues.into_iter().collect(),
        symbols.into_iter().collect(),
        Residue::ZERO,
        acceptance.final_states(modulus),
        table,
    )?;

    Ok(machine)
}

fn positive_modulus(n: i64) -> Result<usize, ModNError> {
    if n <= 0 {
        return Err(ModNError::InvalidModulus { modulus: n });
    }
    usize::try_from(n).map_err(|_| ModNError::ModulusTooLarge { modulus: n })
}

/// Check an input against an alphabet before any machine is built.
pub(crate) fn validate_input<Sy: Symbol>(
    input: &[Sy],
    alphabet: &BTreeSet<Sy>,
) -> Result<(), ModNError> {
    if input.is_empty() {
        return Err(ModNError::EmptyInput);
    }

    match input.iter().position(|symbol| !alphabet.contains(symbol)) {
        Some(position) => Err(ModNError::InvalidCharacter {
            symbol: format!("{:?}", input[position]),
            position,
            alphabet: format!("{alphabet:?}"),
        }),
        None => Ok(()),
    }
}

/// Remainder of `input`, read as a base-`|alphabet|` number, modulo `n`.
///
/// Input errors ([`ModNError::EmptyInput`], [`ModNError::InvalidCharacter`])
/// are reported before modulus and alphabet errors.
pub fn remainder_of<Sy: Symbol>(
    input: &[Sy],
    n: i64,
    alphabet: impl IntoIterator<Item = Sy>,
) -> Result<usize, ModNError> {
    let alphabet: BTreeSet<Sy> = alphabet.into_iter().collect();
    validate_input(input, &alphabet)?;

    let mut machine = build_mod_n_fsm(n, alphabet)?;
    Ok(machine.remainder(input)?)
}

/// Remainder of a string over a character alphabet, modulo `n`.
pub fn compute_remainder(
    input: &str,
    n: i64,
    alphabet: impl IntoIterator<Item = char>,
) -> Result<usize, ModNError> {
    let symbols: Vec<char> = input.chars().collect();
    remainder_of(&symbols, n, alphabet)
}

/// Remainder of a binary string modulo `n`.
pub fn compute_remainder_binary(input: &str, n: i64) -> Result<usize, ModNError> {
    compute_remainder(input, n, BINARY_ALPHABET)
}

/// Whether the default machine (all residues final) accepts `input`.
///
/// That is `true` for every input that processes without error.
pub fn accepts(
    input: &str,
    n: i64,
    alphabet: impl IntoIterator<Item = char>,
) -> Result<bool, ModNError> {
    accepts_with(input, n, alphabet, &Acceptance::AllResidues)
}

/// Whether the machine with the given final residues accepts `input`.
pub fn accepts_with(
    input: &str,
    n: i64,
    alphabet: impl IntoIterator<Item = char>,
    acceptance: &Acceptance,
) -> Result<bool, ModNError> {
    let symbols: Vec<char> = input.chars().collect();
    let alphabet: BTreeSet<char> = alphabet.into_iter().collect();
    validate_input(&symbols, &alphabet)?;

    let mut machine = build_mod_n_fsm_with(n, alphabet, acceptance)?;
    machine.process(&symbols)?;
    Ok(machine.is_accepting())
}

impl<Sy: Symbol, O: Observer<Residue, Sy>> FiniteStateMachine<Residue, Sy, O> {
    /// Number of residues, i.e. `n`.
    pub fn modulus(&self) -> usize {
        self.states().len()
    }

    /// Process `input` and decode the final residue.
    pub fn remainder<I>(&mut self, input: I) -> Result<usize, FsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<Sy>,
    {
        self.process(input).map(|residue| residue.value())
    }
}

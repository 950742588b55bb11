//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder for hand-written machines and a
//! helper for tabulating total transition functions.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::FsmBuilder;

use crate::core::State;
use crate::machine::TransitionTable;
use std::collections::HashMap;

/// Tabulate a transition function over every state and symbol.
///
/// The resulting table is total: it has one entry for each pair in
/// `states x alphabet`.
///
/// # Example
///
/// ```
/// use modfsm::builder::tabulate;
///
/// let table = tabulate(&[0u8, 1], &['a', 'b'], |s, _| 1 - *s);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[&0][&'b'], 1);
/// ```
pub fn tabulate<S, Sy, F>(states: &[S], alphabet: &[Sy], mut next: F) -> TransitionTable<S, Sy>
where
    S: State,
    Sy: State,
    F: FnMut(&S, &Sy) -> S,
{
    states
        .iter()
        .map(|state| {
            let row = alphabet
                .iter()
                .map(|symbol| (symbol.clone(), next(state, symbol)))
                .collect::<HashMap<_, _>>();
            (state.clone(), row)
        })
        .collect()
}

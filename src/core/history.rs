//! Per-run transition history.
//!
//! Provides immutable tracking of the steps a machine takes while
//! consuming an input sequence.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single transition.
///
/// # Example
///
/// ```rust
/// use modfsm::core::StateTransition;
///
/// let transition = StateTransition {
///     step: 0,
///     from: "S0",
///     symbol: '1',
///     to: "S1",
/// };
/// assert_eq!(transition.step, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition<S, Sy> {
    /// Zero-based index of the consumed symbol within the run
    pub step: usize,
    /// The state being transitioned from
    pub from: S,
    /// The symbol that drove the transition
    pub symbol: Sy,
    /// The state being transitioned to
    pub to: S,
}

/// Ordered history of transitions within one run.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use modfsm::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition { step: 0, from: 0u8, symbol: 'a', to: 1 })
///     .record(StateTransition { step: 1, from: 1u8, symbol: 'b', to: 2 });
///
/// assert_eq!(history.get_path(), vec![&0, &1, &2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHistory<S, Sy> {
    transitions: Vec<StateTransition<S, Sy>>,
}

impl<S: State, Sy: State> Default for StateHistory<S, Sy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, Sy: State> StateHistory<S, Sy> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, Sy>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    pub(crate) fn push(&mut self, transition: StateTransition<S, Sy>) {
        self.transitions.push(transition);
    }

    pub(crate) fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the starting state, then
    /// the `to` state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Symbols consumed, in order.
    pub fn symbols(&self) -> Vec<&Sy> {
        self.transitions.iter().map(|t| &t.symbol).collect()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, Sy>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

//! Lifecycle observers for state machines.
//!
//! Every machine owns exactly one observer and reports construction,
//! resets, transitions, rejected symbols and completed runs to it.
//! Observers see events but cannot influence the run: swapping one for
//! another never changes the states a machine reaches.

use super::history::{StateHistory, StateTransition};
use super::state::State;
use crate::machine::FsmError;
use tracing::{debug, info, warn};

/// Receives lifecycle events from a [`FiniteStateMachine`](crate::machine::FiniteStateMachine).
///
/// All methods default to doing nothing, so an implementation only
/// overrides the events it cares about.
///
/// # Example
///
/// ```rust
/// use modfsm::core::Observer;
///
/// #[derive(Default)]
/// struct StepCounter(usize);
///
/// impl Observer<u8, char> for StepCounter {
///     fn on_transition(&mut self, _step: usize, _from: &u8, _symbol: &char, _to: &u8) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait Observer<S, Sy> {
    /// The machine was constructed and validated.
    fn on_construct(&mut self, _states: usize, _symbols: usize, _initial: &S) {}

    /// The cursor was moved back to the initial state.
    fn on_reset(&mut self, _initial: &S) {}

    /// A symbol was consumed.
    fn on_transition(&mut self, _step: usize, _from: &S, _symbol: &Sy, _to: &S) {}

    /// A symbol could not be consumed; the run stops here.
    fn on_rejected(&mut self, _step: usize, _state: &S, _symbol: &Sy, _error: &FsmError) {}

    /// A whole input sequence was consumed.
    fn on_complete(&mut self, _final_state: &S, _steps: usize) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<S, Sy> Observer<S, Sy> for NoopObserver {}

/// Observer that emits `tracing` events.
///
/// Construction and completed runs are logged at `info`, resets and
/// individual transitions at `debug`, rejected symbols at `warn`. Whether
/// anything is printed depends entirely on the installed subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingObserver;

impl<S: State, Sy: State> Observer<S, Sy> for TracingObserver {
    fn on_construct(&mut self, states: usize, symbols: usize, initial: &S) {
        info!(states, symbols, initial = ?initial, "FSM initialized");
    }

    fn on_reset(&mut self, initial: &S) {
        debug!(initial = ?initial, "FSM reset to initial state");
    }

    fn on_transition(&mut self, step: usize, from: &S, symbol: &Sy, to: &S) {
        debug!(step, from = ?from, symbol = ?symbol, to = ?to, "Transition");
    }

    fn on_rejected(&mut self, step: usize, state: &S, symbol: &Sy, error: &FsmError) {
        warn!(step, state = ?state, symbol = ?symbol, %error, "Transition rejected");
    }

    fn on_complete(&mut self, final_state: &S, steps: usize) {
        info!(steps, final_state = ?final_state, "Input processed");
    }
}

/// Observer that records the transitions of the most recent run.
///
/// The recorded history is cleared on every reset, so after `process`
/// returns it holds exactly the steps of that input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryObserver<S, Sy> {
    history: StateHistory<S, Sy>,
}

impl<S: State, Sy: State> Default for HistoryObserver<S, Sy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, Sy: State> HistoryObserver<S, Sy> {
    pub fn new() -> Self {
        Self {
            history: StateHistory::new(),
        }
    }

    /// Transitions of the current run.
    pub fn history(&self) -> &StateHistory<S, Sy> {
        &self.history
    }

    pub fn into_history(self) -> StateHistory<S, Sy> {
        self.history
    }
}

impl<S: State, Sy: State> Observer<S, Sy> for HistoryObserver<S, Sy> {
    fn on_reset(&mut self, _initial: &S) {
        self.history.clear();
    }

    fn on_transition(&mut self, step: usize, from: &S, symbol: &Sy, to: &S) {
        self.history.push(StateTransition {
            step,
            from: from.clone(),
            symbol: symbol.clone(),
            to: to.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_observer_records_transitions() {
        let mut observer = HistoryObserver::<u8, char>::new();
        observer.on_reset(&0);
        observer.on_transition(0, &0, &'a', &1);
        observer.on_transition(1, &1, &'b', &2);

        assert_eq!(observer.history().len(), 2);
        assert_eq!(observer.history().get_path(), vec![&0, &1, &2]);
    }

    #[test]
    fn history_observer_clears_on_reset() {
        let mut observer = HistoryObserver::<u8, char>::new();
        observer.on_transition(0, &0, &'a', &1);
        observer.on_reset(&0);

        assert!(observer.history().is_empty());
    }

    #[test]
    fn noop_and_tracing_observers_accept_all_events() {
        let error = FsmError::InvalidSymbol {
            symbol: "'x'".to_string(),
        };

        let mut noop = NoopObserver;
        Observer::<u8, char>::on_construct(&mut noop, 2, 2, &0);
        Observer::<u8, char>::on_rejected(&mut noop, 0, &0, &'x', &error);

        let mut traced = TracingObserver;
        Observer::<u8, char>::on_construct(&mut traced, 2, 2, &0);
        Observer::<u8, char>::on_reset(&mut traced, &0);
        Observer::<u8, char>::on_transition(&mut traced, 0, &0, &'1', &1);
        Observer::<u8, char>::on_rejected(&mut traced, 1, &1, &'x', &error);
        Observer::<u8, char>::on_complete(&mut traced, &1, 1);
    }
}

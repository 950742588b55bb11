//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Observer, State, TracingObserver};
use crate::machine::{FiniteStateMachine, TransitionTable};
use std::collections::{HashMap, HashSet};

/// Builder for constructing state machines with a fluent API.
///
/// States and symbols mentioned by a transition are registered
/// automatically, so a machine can be described by its edges alone.
///
/// # Example
///
/// ```rust
/// use modfsm::builder::FsmBuilder;
///
/// let mut fsm = FsmBuilder::new()
///     .initial("locked")
///     .final_state("open")
///     .transition("locked", 'k', "open")
///     .transition("open", 'k', "locked")
///     .build()
///     .unwrap();
///
/// fsm.process("kkk".chars()).unwrap();
/// assert!(fsm.is_accepting());
/// ```
pub struct FsmBuilder<S: State, Sy: State, O = TracingObserver> {
    states: HashSet<S>,
    alphabet: HashSet<Sy>,
    initial: Option<S>,
    finals: HashSet<S>,
    table: TransitionTable<S, Sy>,
    observer: O,
}

impl<S: State, Sy: State> FsmBuilder<S, Sy, TracingObserver> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
            alphabet: HashSet::new(),
            initial: None,
            finals: HashSet::new(),
            table: HashMap::new(),
            observer: TracingObserver,
        }
    }
}

impl<S: State, Sy: State> Default for FsmBuilder<S, Sy, TracingObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, Sy: State, O: Observer<S, Sy>> FsmBuilder<S, Sy, O> {
    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.states.insert(state.clone());
        self.initial = Some(state);
        self
    }

    /// Declare states, including ones no transition touches.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare symbols, including ones no transition uses.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = Sy>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Mark a state as final.
    ///
    /// The state is not declared implicitly; an undeclared final state is
    /// reported by [`build`](Self::build).
    pub fn final_state(mut self, state: S) -> Self {
        self.finals.insert(state);
        self
    }

    pub fn final_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.finals.extend(states);
        self
    }

    /// Add a single edge. A later edge for the same pair replaces the earlier one.
    pub fn transition(mut self, from: S, symbol: Sy, to: S) -> Self {
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.alphabet.insert(symbol.clone());
        self.table.entry(from).or_default().insert(symbol, to);
        self
    }

    /// Add every edge of an existing table.
    pub fn table(mut self, table: TransitionTable<S, Sy>) -> Self {
        for (from, row) in table {
            for (symbol, to) in row {
                self = self.transition(from.clone(), symbol, to);
            }
        }
        self
    }

    /// Use a different observer for the built machine.
    pub fn observer<O2: Observer<S, Sy>>(self, observer: O2) -> FsmBuilder<S, Sy, O2> {
        FsmBuilder {
            states: self.states,
            alphabet: self.alphabet,
            initial: self.initial,
            finals: self.finals,
            table: self.table,
            observer,
        }
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the definition is invalid.
    pub fn build(self) -> Result<FiniteStateMachine<S, Sy, O>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let machine = FiniteStateMachine::with_parts(
            self.states,
            self.alphabet,
            initial,
            self.finals,
            self.table,
            self.observer,
        )?;

        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HistoryObserver;
    use crate::machine::FsmError;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = FsmBuilder::<Light, char>::new()
            .transition(Light::Red, 't', Light::Green)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_rejects_undeclared_final_state() {
        let result = FsmBuilder::<Light, char>::new()
            .initial(Light::Red)
            .final_state(Light::Yellow)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Machine(FsmError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = FsmBuilder::new()
            .initial(Light::Red)
            .transition(Light::Red, 't', Light::Green)
            .transition(Light::Green, 't', Light::Yellow)
            .transition(Light::Yellow, 't', Light::Red)
            .final_state(Light::Red)
            .build()
            .unwrap();

        assert_eq!(machine.states().len(), 3);
        assert_eq!(machine.alphabet().len(), 1);
        assert_eq!(machine.process("tt".chars()).unwrap(), &Light::Yellow);
        assert!(!machine.is_accepting());
        assert_eq!(machine.process("ttt".chars()).unwrap(), &Light::Red);
        assert!(machine.is_accepting());
    }

    #[test]
    fn declared_symbols_without_edges_are_incomplete() {
        let mut machine = FsmBuilder::new()
            .initial(Light::Red)
            .alphabet(['t', 'x'])
            .transition(Light::Red, 't', Light::Green)
            .build()
            .unwrap();

        assert!(matches!(
            machine.process("x".chars()),
            Err(FsmError::IncompleteTransition { .. })
        ));
    }

    #[test]
    fn table_and_observer_carry_over() {
        let table = HashMap::from([(Light::Red, HashMap::from([('t', Light::Green)]))]);

        let mut machine = FsmBuilder::new()
            .initial(Light::Red)
            .table(table)
            .observer(HistoryObserver::<Light, char>::new())
            .build()
            .unwrap();

        machine.process("t".chars()).unwrap();
        assert_eq!(machine.observer().history().len(), 1);
    }
}

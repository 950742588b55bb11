//! Generic deterministic finite state machine.
//!
//! The machine knows nothing about what its states or symbols mean. It
//! validates its own definition on construction and then moves a single
//! cursor through the transition table, one symbol at a time.

mod error;

pub use error::FsmError;

use crate::core::{Observer, State, TracingObserver};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};

/// Transition table: `table[state][symbol]` is the next state.
pub type TransitionTable<S, Sy> = HashMap<S, HashMap<Sy, S>>;

/// Deterministic finite state machine with a mutable cursor.
///
/// Everything except the cursor (and the observer) is fixed at
/// construction. A machine may be reused for any number of inputs because
/// [`process`](Self::process) always resets first.
///
/// # Example
///
/// ```rust
/// use modfsm::machine::FiniteStateMachine;
/// use std::collections::{HashMap, HashSet};
///
/// // Parity of the number of '1's seen so far.
/// let table = HashMap::from([
///     ("even", HashMap::from([('0', "even"), ('1', "odd")])),
///     ("odd", HashMap::from([('0', "odd"), ('1', "even")])),
/// ]);
///
/// let mut fsm = FiniteStateMachine::new(
///     HashSet::from(["even", "odd"]),
///     HashSet::from(['0', '1']),
///     "even",
///     HashSet::from(["even"]),
///     table,
/// )
/// .unwrap();
///
/// assert_eq!(fsm.process("1011".chars()).unwrap(), &"odd");
/// assert!(!fsm.is_accepting());
/// ```
#[derive(Clone, Debug)]
pub struct FiniteStateMachine<S, Sy, O = TracingObserver> {
    states: HashSet<S>,
    alphabet: HashSet<Sy>,
    initial: S,
    finals: HashSet<S>,
    table: TransitionTable<S, Sy>,
    current: S,
    steps: usize,
    observer: O,
}

impl<S: State, Sy: State> FiniteStateMachine<S, Sy, TracingObserver> {
    /// Create a machine that reports its lifecycle through `tracing`.
    ///
    /// Fails with [`FsmError::InvalidConfiguration`] if `initial` is not one
    /// of `states` or if `finals` is not a subset of `states`. Table coverage
    /// is not checked here; gaps surface as
    /// [`FsmError::IncompleteTransition`] when they are hit.
    pub fn new(
        states: HashSet<S>,
        alphabet: HashSet<Sy>,
        initial: S,
        finals: HashSet<S>,
        table: TransitionTable<S, Sy>,
    ) -> Result<Self, FsmError> {
        Self::with_parts(states, alphabet, initial, finals, table, TracingObserver)
    }
}

impl<S: State, Sy: State, O: Observer<S, Sy>> FiniteStateMachine<S, Sy, O> {
    /// Create a machine with an explicit observer.
    pub fn with_parts(
        states: HashSet<S>,
        alphabet: HashSet<Sy>,
        initial: S,
        finals: HashSet<S>,
        table: TransitionTable<S, Sy>,
        mut observer: O,
    ) -> Result<Self, FsmError> {
        if !states.contains(&initial) {
            return Err(FsmError::invalid_configuration(format!(
                "Initial state {initial:?} must be one of the defined states"
            )));
        }

        if let Some(stray) = finals.iter().find(|s| !states.contains(*s)) {
            return Err(FsmError::invalid_configuration(format!(
                "Final states must be a subset of the states ({stray:?} is not a state)"
            )));
        }

        observer.on_construct(states.len(), alphabet.len(), &initial);

        Ok(Self {
            current: initial.clone(),
            states,
            alphabet,
            initial,
            finals,
            table,
            steps: 0,
            observer,
        })
    }

    /// Replace the observer, keeping the definition and cursor.
    pub fn with_observer<O2: Observer<S, Sy>>(
        self,
        observer: O2,
    ) -> FiniteStateMachine<S, Sy, O2> {
        FiniteStateMachine {
            states: self.states,
            alphabet: self.alphabet,
            initial: self.initial,
            finals: self.finals,
            table: self.table,
            current: self.current,
            steps: self.steps,
            observer,
        }
    }

    /// Move the cursor back to the initial state.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.steps = 0;
        self.observer.on_reset(&self.initial);
    }

    /// Place the cursor on `state` without notifying the observer.
    pub(crate) fn resume_at(&mut self, state: S) {
        self.current = state;
        self.steps = 0;
    }

    /// Consume a single symbol from the current state.
    ///
    /// On failure the cursor is left where it was.
    pub fn transition(&mut self, symbol: &Sy) -> Result<&S, FsmError> {
        match self.lookup(symbol) {
            Ok(next) => {
                self.observer
                    .on_transition(self.steps, &self.current, symbol, &next);
                self.current = next;
                self.steps += 1;
                Ok(&self.current)
            }
            Err(error) => {
                self.observer
                    .on_rejected(self.steps, &self.current, symbol, &error);
                Err(error)
            }
        }
    }

    fn lookup(&self, symbol: &Sy) -> Result<S, FsmError> {
        if !self.alphabet.contains(symbol) {
            return Err(FsmError::InvalidSymbol {
                symbol: format!("{symbol:?}"),
            });
        }

        let next = self
            .next_state(&self.current, symbol)
            .ok_or_else(|| FsmError::IncompleteTransition {
                state: format!("{:?}", self.current),
                symbol: format!("{symbol:?}"),
            })?;

        if !self.states.contains(next) {
            return Err(FsmError::invalid_configuration(format!(
                "Transition target {next:?} is not one of the defined states"
            )));
        }

        Ok(next.clone())
    }

    /// Reset, then consume every symbol of `input` in order.
    ///
    /// Stops at the first failing symbol. An empty input leaves the machine
    /// in its initial state.
    pub fn process<I>(&mut self, input: I) -> Result<&S, FsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<Sy>,
    {
        self.reset();
        for symbol in input {
            self.transition(symbol.borrow())?;
        }
        self.observer.on_complete(&self.current, self.steps);
        Ok(&self.current)
    }

    /// Check whether the cursor sits on a final state (pure).
    pub fn is_accepting(&self) -> bool {
        self.finals.contains(&self.current)
    }

    /// Table lookup without moving the cursor (pure).
    pub fn next_state(&self, state: &S, symbol: &Sy) -> Option<&S> {
        self.table.get(state).and_then(|row| row.get(symbol))
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    pub fn alphabet(&self) -> &HashSet<Sy> {
        &self.alphabet
    }

    pub fn final_states(&self) -> &HashSet<S> {
        &self.finals
    }

    pub fn transition_table(&self) -> &TransitionTable<S, Sy> {
        &self.table
    }

    /// Symbols consumed since the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryObserver, NoopObserver};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Parity {
        Even,
        Odd,
    }

    fn parity_table() -> TransitionTable<Parity, char> {
        HashMap::from([
            (
                Parity::Even,
                HashMap::from([('0', Parity::Even), ('1', Parity::Odd)]),
            ),
            (
                Parity::Odd,
                HashMap::from([('0', Parity::Odd), ('1', Parity::Even)]),
            ),
        ])
    }

    fn parity_machine() -> FiniteStateMachine<Parity, char> {
        FiniteStateMachine::new(
            HashSet::from([Parity::Even, Parity::Odd]),
            HashSet::from(['0', '1']),
            Parity::Even,
            HashSet::from([Parity::Even]),
            parity_table(),
        )
        .unwrap()
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let fsm = parity_machine();
        assert_eq!(fsm.current_state(), &Parity::Even);
        assert_eq!(fsm.initial_state(), &Parity::Even);
        assert_eq!(fsm.steps(), 0);
        assert!(fsm.is_accepting());
    }

    #[test]
    fn rejects_initial_state_outside_states() {
        let result = FiniteStateMachine::new(
            HashSet::from(["S1"]),
            HashSet::from(['0']),
            "S0",
            HashSet::from(["S1"]),
            HashMap::new(),
        );

        assert!(matches!(
            result,
            Err(FsmError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn rejects_final_states_outside_states() {
        let result = FiniteStateMachine::new(
            HashSet::from(["S0"]),
            HashSet::from(['0']),
            "S0",
            HashSet::from(["S0", "S9"]),
            HashMap::new(),
        );

        let err = result.unwrap_err();
        assert!(matches!(err, FsmError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("S9"));
    }

    #[test]
    fn transition_moves_cursor() {
        let mut fsm = parity_machine();
        assert_eq!(fsm.transition(&'1').unwrap(), &Parity::Odd);
        assert_eq!(fsm.transition(&'0').unwrap(), &Parity::Odd);
        assert_eq!(fsm.steps(), 2);
        assert!(!fsm.is_accepting());
    }

    #[test]
    fn transition_rejects_unknown_symbol() {
        let mut fsm = parity_machine();
        fsm.transition(&'1').unwrap();

        let err = fsm.transition(&'x').unwrap_err();

        assert_eq!(
            err,
            FsmError::InvalidSymbol {
                symbol: "'x'".to_string()
            }
        );
        assert_eq!(fsm.current_state(), &Parity::Odd);
    }

    #[test]
    fn missing_entry_is_incomplete_transition() {
        let mut table = parity_table();
        table.get_mut(&Parity::Odd).unwrap().remove(&'1');

        let mut fsm = FiniteStateMachine::new(
            HashSet::from([Parity::Even, Parity::Odd]),
            HashSet::from(['0', '1']),
            Parity::Even,
            HashSet::new(),
            table,
        )
        .unwrap();

        let err = fsm.process("11".chars()).unwrap_err();
        assert!(matches!(err, FsmError::IncompleteTransition { .. }));
        assert_eq!(fsm.current_state(), &Parity::Odd);
    }

    #[test]
    fn target_outside_states_is_rejected() {
        let table = HashMap::from([("a", HashMap::from([('x', "ghost")]))]);
        let mut fsm = FiniteStateMachine::new(
            HashSet::from(["a"]),
            HashSet::from(['x']),
            "a",
            HashSet::new(),
            table,
        )
        .unwrap();

        assert!(matches!(
            fsm.transition(&'x'),
            Err(FsmError::InvalidConfiguration { .. })
        ));
        assert_eq!(fsm.current_state(), &"a");
    }

    #[test]
    fn process_resets_between_runs() {
        let mut fsm = parity_machine();

        assert_eq!(fsm.process("1".chars()).unwrap(), &Parity::Odd);
        assert_eq!(fsm.process("1".chars()).unwrap(), &Parity::Odd);
        assert_eq!(fsm.process("11".chars()).unwrap(), &Parity::Even);
        assert_eq!(fsm.steps(), 2);
    }

    #[test]
    fn process_accepts_borrowed_symbols() {
        let mut fsm = parity_machine();
        let symbols = vec!['1', '1', '1'];
        assert_eq!(fsm.process(&symbols).unwrap(), &Parity::Odd);
    }

    #[test]
    fn empty_input_returns_initial_state() {
        let mut fsm = parity_machine();
        fsm.transition(&'1').unwrap();

        assert_eq!(fsm.process("".chars()).unwrap(), &Parity::Even);
        assert_eq!(fsm.steps(), 0);
    }

    #[test]
    fn process_stops_at_first_error() {
        let mut fsm = parity_machine().with_observer(HistoryObserver::<Parity, char>::new());

        let result = fsm.process("1x1".chars());

        assert!(matches!(result, Err(FsmError::InvalidSymbol { .. })));
        assert_eq!(fsm.observer().history().len(), 1);
        assert_eq!(fsm.current_state(), &Parity::Odd);
    }

    #[test]
    fn final_states_do_not_block_transitions() {
        let mut fsm = parity_machine();
        assert!(fsm.is_accepting());
        assert_eq!(fsm.transition(&'1').unwrap(), &Parity::Odd);
    }

    #[test]
    fn history_observer_sees_each_step() {
        let mut fsm = parity_machine().with_observer(HistoryObserver::<Parity, char>::new());
        fsm.process("101".chars()).unwrap();

        let history = fsm.observer().history();
        assert_eq!(history.len(), 3);
        assert_eq!(
            history.get_path(),
            vec![&Parity::Even, &Parity::Odd, &Parity::Odd, &Parity::Even]
        );

        fsm.process("1".chars()).unwrap();
        assert_eq!(fsm.observer().history().len(), 1);
    }

    #[test]
    fn observer_choice_does_not_change_result() {
        let mut traced = parity_machine();
        let mut silent = parity_machine().with_observer(NoopObserver);

        for input in ["", "0", "1", "0110", "111"] {
            assert_eq!(
                traced.process(input.chars()).unwrap(),
                silent.process(input.chars()).unwrap()
            );
        }
    }

    #[test]
    fn next_state_is_pure_lookup() {
        let fsm = parity_machine();
        assert_eq!(fsm.next_state(&Parity::Odd, &'1'), Some(&Parity::Even));
        assert_eq!(fsm.next_state(&Parity::Odd, &'x'), None);
        assert_eq!(fsm.current_state(), &Parity::Even);
    }
}

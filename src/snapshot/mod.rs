//! Serializable snapshots of state machines.
//!
//! A snapshot holds a machine's full definition plus its cursor, in a
//! canonical order (states, symbols and table entries sorted), so two
//! snapshots of equal machines serialize identically. Observers are not
//! part of a snapshot; a restored machine reports through `tracing`.

use crate::core::{Observer, State, Symbol};
use crate::machine::{FiniteStateMachine, TransitionTable};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One entry of the transition table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry<S, Sy> {
    pub from: S,
    pub symbol: Sy,
    pub to: S,
}

/// Serializable snapshot of a machine.
///
/// # Example
///
/// ```rust
/// use modfsm::mod_n::{build_mod_n_fsm, Residue, BINARY_ALPHABET};
/// use modfsm::snapshot::MachineSnapshot;
///
/// let fsm = build_mod_n_fsm(3, BINARY_ALPHABET).unwrap();
/// let json = MachineSnapshot::capture(&fsm).to_json().unwrap();
///
/// let snapshot = MachineSnapshot::<Residue, char>::from_json(&json).unwrap();
/// let mut restored = snapshot.restore().unwrap();
/// assert_eq!(restored.remainder("1101".chars()).unwrap(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot<S, Sy> {
    /// Snapshot format version
    pub version: u32,

    pub states: Vec<S>,

    pub alphabet: Vec<Sy>,

    pub initial_state: S,

    pub final_states: Vec<S>,

    /// Table entries sorted by source state, then symbol
    pub transitions: Vec<TableEntry<S, Sy>>,

    /// Cursor at capture time
    pub current_state: S,
}

impl<S: State + Ord, Sy: Symbol> MachineSnapshot<S, Sy> {
    /// Capture the definition and cursor of `machine`.
    pub fn capture<O: Observer<S, Sy>>(machine: &FiniteStateMachine<S, Sy, O>) -> Self {
        let mut states: Vec<S> = machine.states().iter().cloned().collect();
        states.sort();

        let mut alphabet: Vec<Sy> = machine.alphabet().iter().cloned().collect();
        alphabet.sort();

        let mut final_states: Vec<S> = machine.final_states().iter().cloned().collect();
        final_states.sort();

        let mut transitions: Vec<TableEntry<S, Sy>> = machine
            .transition_table()
            .iter()
            .flat_map(|(from, row)| {
                row.iter().map(move |(symbol, to)| TableEntry {
                    from: from.clone(),
                    symbol: symbol.clone(),
                    to: to.clone(),
                })
            })
            .collect();
        transitions.sort_by(|a, b| (&a.from, &a.symbol).cmp(&(&b.from, &b.symbol)));

        Self {
            version: SNAPSHOT_VERSION,
            states,
            alphabet,
            initial_state: machine.initial_state().clone(),
            final_states,
            transitions,
            current_state: machine.current_state().clone(),
        }
    }

    /// Rebuild a machine from this snapshot.
    ///
    /// The definition goes through the same validation as
    /// [`FiniteStateMachine::new`], and the cursor must name a state.
    pub fn restore(self) -> Result<FiniteStateMachine<S, Sy>, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let mut table: TransitionTable<S, Sy> = HashMap::new();
        for entry in self.transitions {
            table
                .entry(entry.from)
                .or_default()
                .insert(entry.symbol, entry.to);
        }

        let mut machine = FiniteStateMachine::new(
            self.states.into_iter().collect(),
            self.alphabet.into_iter().collect(),
            self.initial_state,
            self.final_states.into_iter().collect(),
            table,
        )
        .map_err(|e| SnapshotError::ValidationFailed(e.to_string()))?;

        if !machine.states().contains(&self.current_state) {
            return Err(SnapshotError::ValidationFailed(format!(
                "Current state {:?} is not one of the defined states",
                self.current_state
            )));
        }
        machine.resume_at(self.current_state);

        Ok(machine)
    }
}

impl<S: Serialize, Sy: Serialize> MachineSnapshot<S, Sy> {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }
}

impl<S: DeserializeOwned, Sy: DeserializeOwned> MachineSnapshot<S, Sy> {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

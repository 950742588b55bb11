//! modfsm: remainders of string-encoded numbers via finite state machines
//!
//! A string over an alphabet of `k` symbols is read as a base-`k` number,
//! with digit values taken from the alphabet's sorted order. Its remainder
//! modulo `n` is computed by running a synthesized `n`-state machine over
//! the string, one symbol per transition.
//!
//! # Core Concepts
//!
//! - **Machine**: a generic deterministic FSM ([`FiniteStateMachine`]) that
//!   validates its definition and evaluates inputs symbol by symbol
//! - **Synthesizer**: [`mod_n`] builds the residue machine for a modulus and
//!   alphabet
//! - **Observers**: per-machine lifecycle hooks; the default emits `tracing`
//!   events
//! - **Snapshots**: canonical, serde-serializable machine definitions
//!
//! # Example
//!
//! ```rust
//! use modfsm::mod_n::{build_mod_n_fsm, compute_remainder_binary, BINARY_ALPHABET};
//!
//! assert_eq!(compute_remainder_binary("1101", 3).unwrap(), 1);
//!
//! let mut fsm = build_mod_n_fsm(3, BINARY_ALPHABET).unwrap();
//! assert_eq!(fsm.remainder("1111".chars()).unwrap(), 0);
//! assert!(fsm.is_accepting());
//! ```

pub mod builder;
pub mod cli;
pub mod core;
pub mod machine;
pub mod mod_n;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, FsmBuilder};
pub use core::{HistoryObserver, NoopObserver, Observer, State, Symbol, TracingObserver};
pub use machine::{FiniteStateMachine, FsmError, TransitionTable};
pub use mod_n::{
    accepts, build_mod_n_fsm, compute_remainder, compute_remainder_binary, Acceptance, ModNError,
    Residue,
};

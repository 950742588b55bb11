//! Core types shared by every machine.
//!
//! This module contains:
//! - State and symbol identifiers via the `State` and `Symbol` traits
//! - Lifecycle observers (`NoopObserver`, `TracingObserver`, `HistoryObserver`)
//! - Immutable per-run history tracking

mod history;
mod observer;
mod state;

pub use history::{StateHistory, StateTransition};
pub use observer::{HistoryObserver, NoopObserver, Observer, TracingObserver};
pub use state::{State, Symbol};

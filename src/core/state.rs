//! Marker traits for state and symbol identifiers.
//!
//! The evaluator treats both as opaque values. It only needs to clone,
//! compare and hash them, and to print them in diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine state identifiers.
///
/// Implemented automatically for every type meeting the bounds, so plain
/// integers, strings, enums and newtypes all work without boilerplate.
///
/// # Required Traits
///
/// - `Clone`: the machine hands out owned copies of its cursor
/// - `Eq` + `Hash`: states live in hash sets and key the transition table
/// - `Debug`: states appear in errors and log events
///
/// # Example
///
/// ```rust
/// use modfsm::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<Door>();
/// assert_state::<&str>();
/// assert_state::<u32>();
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> State for T {}

/// Trait for input symbols.
///
/// Symbols need everything a state needs plus a total order, which the
/// mod-N synthesizer uses to assign digit values.
pub trait Symbol: State + Ord {}

impl<T: State + Ord> Symbol for T {}

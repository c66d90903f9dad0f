//! Core automaton types.
//!
//! This module contains the pure building blocks of the automaton:
//! - State definitions via the `State` trait and the `state_enum!` macro
//! - The input alphabet (`Symbol`)
//! - Per-run step history
//!
//! Nothing in this module performs I/O or keeps global state.

mod history;
mod macros;
mod state;
mod symbol;

pub use history::{StateHistory, StateTransition};
pub use state::{Classification, State};
pub use symbol::Symbol;

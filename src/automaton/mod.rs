//! The ATM automaton engine.
//!
//! - `AtmState`: the closed state set q0..q13 and its classification
//! - `successor`: the fixed, total transition function
//! - `Automaton`: owns the current state and steps through symbols
//!
//! The engine is synchronous and never fails. Undefined transitions are
//! self-loops reported through `StepResult::Undefined`; deciding what a sink
//! or an unfinished run means is left to the caller.

mod machine;
mod states;
mod table;

pub use machine::{Automaton, StepResult};
pub use states::{AtmState, ACCEPTING_STATE, INITIAL_STATE, SINK_STATES};
pub use table::{successor, transition_table, TableEntry};

//! A deterministic finite automaton modelling the interaction flow of an ATM.
//!
//! The automaton consumes one action at a time (insert card, enter PIN, enter
//! amount, take cash, eject card) and moves through a fixed set of fourteen
//! states. Finishing the transaction lands in the single accepting state;
//! doing things in the wrong order lands in a sink that records which
//! precondition was violated.
//!
//! # Core Concepts
//!
//! - **State**: classification (initial, transient, sink, accepting) is
//!   derived from the `State` trait, never stored
//! - **Automaton**: synchronous engine with `step`, `reset` and
//!   `current_state`; undefined transitions are self-loops
//! - **Driver**: translates action labels, runs a queue, stops on sinks and
//!   reports the outcome
//!
//! # Example
//!
//! ```rust
//! use atm_automaton::{AtmState, Automaton, State, StepResult, Symbol};
//!
//! let mut atm = Automaton::new();
//! assert_eq!(
//!     atm.step(Symbol::InsertCard),
//!     StepResult::Transitioned(AtmState::CardInserted)
//! );
//!
//! // Inserting a second card is a sink.
//! atm.step(Symbol::InsertCard);
//! assert!(atm.current_state().is_sink());
//!
//! // Sinks absorb everything.
//! assert_eq!(
//!     atm.step(Symbol::EjectCard),
//!     StepResult::Undefined(AtmState::CardInsertedTwice)
//! );
//! ```

pub mod automaton;
pub mod config;
pub mod core;
pub mod driver;

// Re-export commonly used types
pub use self::automaton::{
    successor, AtmState, Automaton, StepResult, ACCEPTING_STATE, INITIAL_STATE, SINK_STATES,
};
pub use self::core::{Classification, State, StateHistory, StateTransition, Symbol};

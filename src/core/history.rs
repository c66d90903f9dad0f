//! Trace of the steps taken during the current run.
//!
//! History lives only as long as the run does: the automaton drops it on
//! reset. Nothing here is persisted.

use super::state::State;
use super::symbol::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step: the state before, the symbol consumed, and the
/// state after.
///
/// `defined` is `false` when the table had no entry for the pair and the
/// automaton stayed put.
///
/// # Example
///
/// ```rust
/// use atm_automaton::core::{StateTransition, Symbol};
/// use atm_automaton::AtmState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: AtmState::Idle,
///     symbol: Symbol::InsertCard,
///     to: AtmState::CardInserted,
///     defined: true,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_loop());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the step
    pub from: S,
    /// The symbol consumed
    pub symbol: Symbol,
    /// The state after the step
    pub to: S,
    /// Whether the table defined this (state, symbol) pair
    pub defined: bool,
    /// When the step happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// True when the step left the state unchanged.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of steps.
///
/// History is immutable - `record` returns a new history with the step
/// appended.
///
/// # Example
///
/// ```rust
/// use atm_automaton::core::{StateHistory, StateTransition, Symbol};
/// use atm_automaton::AtmState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: AtmState::Idle,
///         symbol: Symbol::InsertCard,
///         to: AtmState::CardInserted,
///         defined: true,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: AtmState::CardInserted,
///         symbol: Symbol::EnterPin,
///         to: AtmState::PinEntered,
///         defined: true,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(
///     path,
///     vec![&AtmState::Idle, &AtmState::CardInserted, &AtmState::PinEntered]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a step, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a step in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first step followed by the `to`
    /// state of every step. Self-loops appear as repeated states.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Symbols consumed so far, in order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.transitions.iter().map(|t| t.symbol).collect()
    }

    /// Number of steps that hit an undefined transition.
    pub fn undefined_count(&self) -> usize {
        self.transitions.iter().filter(|t| !t.defined).count()
    }

    /// Time between the first and last recorded step.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded steps in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

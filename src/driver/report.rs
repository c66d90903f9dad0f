//! Outcome of a driver run.

use super::error::LabelError;
use crate::automaton::AtmState;
use crate::core::{Classification, State, Symbol};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One symbol fed to the automaton during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Position of the label in the queue
    pub index: usize,
    /// The raw label as the user supplied it
    pub label: String,
    pub symbol: Symbol,
    pub from: AtmState,
    pub to: AtmState,
    /// False when the pair was undefined and the automaton stayed put
    pub defined: bool,
    pub classification: Classification,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Queue consumed and the automaton is in the accepting state
    Accepted,

    /// A sink was reached; the rest of the queue was not fed
    Rejected { state: AtmState },

    /// Queue consumed without reaching the accepting state
    Incomplete { state: AtmState },
}

impl RunOutcome {
    /// Classify the state the automaton stopped in.
    ///
    /// Only the accepting state counts as success; a sink is a rejection and
    /// anything else means the process ended prematurely.
    pub fn from_final_state(state: AtmState) -> Self {
        match state.classification() {
            Classification::Accepting => Self::Accepted,
            Classification::Sink => Self::Rejected { state },
            Classification::Initial | Classification::Transient => Self::Incomplete { state },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// User-facing explanation, specific to the sink that was hit.
    pub fn message(&self) -> String {
        match self {
            Self::Accepted => "Transaction completed successfully".to_string(),
            Self::Rejected { state } => {
                format!("Transaction failed at {}: {}", state, state.description())
            }
            Self::Incomplete { state } => {
                format!(
                    "Process ended prematurely at {}: {}",
                    state,
                    state.description()
                )
            }
        }
    }
}

/// Everything a caller needs to present a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub steps: Vec<StepRecord>,
    /// Labels skipped because they could not be translated
    pub skipped: Vec<LabelError>,
    pub final_state: AtmState,
    pub outcome: RunOutcome,
    /// Labels examined, skipped ones included
    pub consumed: usize,
    /// Labels left unread after an early halt
    pub remaining: usize,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// States visited, starting from the initial state.
    pub fn path(&self) -> Vec<AtmState> {
        let mut path = vec![self.steps.first().map_or(self.final_state, |s| s.from)];
        path.extend(self.steps.iter().map(|s| s.to));
        path
    }
}

//! Driver error types.

use serde::Serialize;
use thiserror::Error;

/// Why a raw action label could not become a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum TranslationError {
    #[error("empty action label")]
    Empty,

    #[error("unrecognized action label '{0}'")]
    UnknownLabel(String),
}

/// A translation failure at a position in the action queue.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("action #{index}: {error}")]
pub struct LabelError {
    /// Zero-based position in the queue
    pub index: usize,
    pub error: TranslationError,
}

/// Errors that stop a run before it starts.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("run rejected, {} unrecognized action label(s): {}", .0.len(), join(.0))]
    UnrecognizedLabels(Vec<LabelError>),
}

fn join(errors: &[LabelError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

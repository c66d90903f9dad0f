//! Driver configuration.
//!
//! Configuration is loaded in the following order (later overrides earlier):
//! 1. Default values
//! 2. YAML config file (if specified via ATM_AUTOMATON_CONFIG or --config)
//! 3. Environment variables

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "ATM_AUTOMATON_CONFIG";

/// What the driver does with an action label it cannot translate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLabelPolicy {
    /// Warn, skip the label and keep feeding the rest of the queue
    #[default]
    Skip,

    /// Reject the whole run before any symbol is consumed
    Abort,
}

impl FromStr for UnknownLabelPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(ConfigError::ValidationError(format!(
                "unknown label policy '{other}', expected 'skip' or 'abort'"
            ))),
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Handling of labels that do not name an ATM action.
    pub unknown_labels: UnknownLabelPolicy,
    /// How long a queued action stays highlighted before it is fed.
    pub highlight_delay_ms: u64,
    /// Pause after each queued action.
    pub pause_delay_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            unknown_labels: UnknownLabelPolicy::Skip,
            highlight_delay_ms: 800,
            pause_delay_ms: 400,
        }
    }
}

impl DriverConfig {
    /// Loads configuration from the file named by `ATM_AUTOMATON_CONFIG`, if
    /// any, then applies environment variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`load`](Self::load), but an explicit `path` takes precedence
    /// over `ATM_AUTOMATON_CONFIG`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => {
                let config = Self::from_file(&path)?;
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            None => Self::default(),
        };
        config.apply_overrides(lookup);
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
        let config: DriverConfig = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;
        Ok(config)
    }

    /// Configuration with no presentation delays.
    pub fn immediate() -> Self {
        Self {
            highlight_delay_ms: 0,
            pause_delay_ms: 0,
            ..Self::default()
        }
    }

    // Unparseable values are logged and the current setting is kept.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(policy) = parse_override(&lookup, "ATM_UNKNOWN_LABELS") {
            self.unknown_labels = policy;
        }
        if let Some(ms) = parse_override(&lookup, "ATM_HIGHLIGHT_MS") {
            self.highlight_delay_ms = ms;
        }
        if let Some(ms) = parse_override(&lookup, "ATM_PAUSE_MS") {
            self.pause_delay_ms = ms;
        }
    }

    /// Saves configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
        Ok(())
    }

    pub fn highlight_delay(&self) -> Duration {
        Duration::from_millis(self.highlight_delay_ms)
    }

    pub fn pause_delay(&self) -> Duration {
        Duration::from_millis(self.pause_delay_ms)
    }
}

fn parse_override<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {1}", path = .0.display())]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file '{path}': {1}", path = .0.display())]
    ParseError(PathBuf, String),

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

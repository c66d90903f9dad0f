//! Core State trait for automaton states.
//!
//! Every state of an automaton implements this trait. Classification is
//! always derived from fixed membership tests, never from a stored flag.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The category a state belongs to.
///
/// Categories are disjoint. A state that is accepting is reported as
/// `Accepting` even when it also re-opens the machine like the initial state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The state a fresh or reset automaton starts in.
    Initial,
    /// Valid intermediate progress.
    Transient,
    /// Absorbing error state. The run has failed.
    Sink,
    /// Terminal success.
    Accepting,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Transient => "transient",
            Self::Sink => "sink",
            Self::Accepting => "accepting",
        }
    }
}

/// Trait for automaton states.
///
/// All methods are pure. States are immutable values describing where the
/// process currently is.
///
/// # Example
///
/// ```rust
/// use atm_automaton::core::{Classification, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Closed,
///     Open,
///     Jammed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn id(&self) -> u8 {
///         match self {
///             Self::Closed => 0,
///             Self::Open => 1,
///             Self::Jammed => 2,
///         }
///     }
///
///     fn is_initial(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
///
///     fn is_sink(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert_eq!(Door::Open.classification(), Classification::Transient);
/// assert_eq!(Door::Jammed.classification(), Classification::Sink);
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Numeric identifier of the state (`q<id>` in diagrams).
    fn id(&self) -> u8;

    /// Check if this is the initial state.
    fn is_initial(&self) -> bool {
        false
    }

    /// Check if this state designates a successfully completed run.
    ///
    /// Default implementation returns `false`.
    fn is_accepting(&self) -> bool {
        false
    }

    /// Check if this is an absorbing error state.
    ///
    /// Default implementation returns `false`.
    fn is_sink(&self) -> bool {
        false
    }

    /// Derive the state's category.
    fn classification(&self) -> Classification {
        if self.is_accepting() {
            Classification::Accepting
        } else if self.is_sink() {
            Classification::Sink
        } else if self.is_initial() {
            Classification::Initial
        } else {
            Classification::Transient
        }
    }

    /// Valid intermediate progress: neither initial, sink nor accepting.
    fn is_transient(&self) -> bool {
        self.classification() == Classification::Transient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Working,
        Done,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Working => "Working",
                Self::Done => "Done",
                Self::Broken => "Broken",
            }
        }

        fn id(&self) -> u8 {
            match self {
                Self::Start => 0,
                Self::Working => 1,
                Self::Done => 2,
                Self::Broken => 3,
            }
        }

        fn is_initial(&self) -> bool {
            matches!(self, Self::Start)
        }

        fn is_accepting(&self) -> bool {
            matches!(self, Self::Done)
        }

        fn is_sink(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn classification_is_derived_from_membership() {
        assert_eq!(TestState::Start.classification(), Classification::Initial);
        assert_eq!(
            TestState::Working.classification(),
            Classification::Transient
        );
        assert_eq!(TestState::Done.classification(), Classification::Accepting);
        assert_eq!(TestState::Broken.classification(), Classification::Sink);
    }

    #[test]
    fn only_intermediate_states_are_transient() {
        assert!(!TestState::Start.is_transient());
        assert!(TestState::Working.is_transient());
        assert!(!TestState::Done.is_transient());
        assert!(!TestState::Broken.is_transient());
    }

    #[test]
    fn default_predicates_are_false() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        struct Bare;

        impl State for Bare {
            fn name(&self) -> &str {
                "Bare"
            }

            fn id(&self) -> u8 {
                0
            }
        }

        assert!(!Bare.is_initial());
        assert!(!Bare.is_accepting());
        assert!(!Bare.is_sink());
        assert_eq!(Bare.classification(), Classification::Transient);
    }

    #[test]
    fn classification_serializes_as_snake_case() {
        let json = serde_json::to_string(&Classification::Accepting).unwrap();
        assert_eq!(json, "\"accepting\"");
        assert_eq!(Classification::Sink.as_str(), "sink");
    }
}

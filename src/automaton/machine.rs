//! The automaton engine: current state plus the fixed transition function.

use super::states::{AtmState, INITIAL_STATE};
use super::table::successor;
use crate::core::{Classification, State, StateHistory, StateTransition, Symbol};
use chrono::Utc;

/// Result of consuming a single symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The table defined the pair; the automaton moved to this state.
    Transitioned(AtmState),

    /// No entry for the pair; the automaton stayed in this state.
    ///
    /// This is a policy event, not a failure.
    Undefined(AtmState),
}

impl StepResult {
    /// The state the automaton is in after the step.
    pub fn state(&self) -> AtmState {
        match self {
            Self::Transitioned(state) | Self::Undefined(state) => *state,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Transitioned(_))
    }
}

/// Deterministic finite automaton for one ATM session.
///
/// Owns its current state and the history of the current run. Each session
/// gets its own instance; there is no shared state between instances.
///
/// # Example
///
/// ```rust
/// use atm_automaton::{AtmState, Automaton, Symbol, ACCEPTING_STATE};
///
/// let mut atm = Automaton::new();
/// for symbol in [
///     Symbol::InsertCard,
///     Symbol::EnterPin,
///     Symbol::EnterAmount,
///     Symbol::TakeCash,
///     Symbol::EjectCard,
/// ] {
///     atm.step(symbol);
/// }
/// assert_eq!(atm.current_state(), ACCEPTING_STATE);
///
/// atm.reset();
/// assert_eq!(atm.current_state(), AtmState::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    current: AtmState,
    history: StateHistory<AtmState>,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// Create an automaton in the initial state with an empty history.
    pub fn new() -> Self {
        Self {
            current: INITIAL_STATE,
            history: StateHistory::new(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> AtmState {
        self.current
    }

    /// Classification of the current state (pure)
    pub fn classification(&self) -> Classification {
        self.current.classification()
    }

    /// Steps taken since construction or the last reset (pure)
    pub fn history(&self) -> &StateHistory<AtmState> {
        &self.history
    }

    /// Consume one symbol.
    ///
    /// On a defined pair the current state is replaced by its successor. On an
    /// undefined pair the state is left unchanged and the event is logged.
    /// Either way a trace record is emitted and appended to the history.
    pub fn step(&mut self, symbol: Symbol) -> StepResult {
        let from = self.current;
        let result = match successor(from, symbol) {
            Some(next) => {
                self.current = next;
                StepResult::Transitioned(next)
            }
            None => {
                tracing::warn!(
                    state = from.id(),
                    symbol = %symbol,
                    "Undefined transition from {} on {}, staying put",
                    from,
                    symbol
                );
                StepResult::Undefined(from)
            }
        };

        tracing::debug!(
            from = from.id(),
            symbol = %symbol,
            to = self.current.id(),
            "step"
        );

        self.history.push(StateTransition {
            from,
            symbol,
            to: self.current,
            defined: result.is_defined(),
            timestamp: Utc::now(),
        });

        result
    }

    /// Force the automaton back to the initial state and drop the history.
    pub fn reset(&mut self) {
        tracing::debug!(from = self.current.id(), "Automaton reset to {}", INITIAL_STATE);
        self.current = INITIAL_STATE;
        self.history = StateHistory::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{ACCEPTING_STATE, SINK_STATES};
    use crate::core::Symbol::*;

    fn run(symbols: &[Symbol]) -> Automaton {
        let mut atm = Automaton::new();
        for &symbol in symbols {
            atm.step(symbol);
        }
        atm
    }

    #[test]
    fn new_automaton_starts_idle() {
        let atm = Automaton::new();
        assert_eq!(atm.current_state(), AtmState::Idle);
        assert_eq!(atm.classification(), Classification::Initial);
        assert!(atm.history().is_empty());
    }

    #[test]
    fn full_transaction_reaches_accepting_state() {
        let atm = run(&[InsertCard, EnterPin, EnterAmount, TakeCash, EjectCard]);

        assert_eq!(atm.current_state(), ACCEPTING_STATE);
        let ids: Vec<u8> = atm.history().get_path().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![0, 1, 3, 6, 9, 13]);
    }

    #[test]
    fn double_insert_reaches_sink() {
        let atm = run(&[InsertCard, InsertCard]);
        assert_eq!(atm.current_state(), AtmState::CardInsertedTwice);
        assert_eq!(atm.classification(), Classification::Sink);
    }

    #[test]
    fn stopping_before_eject_leaves_transient_state() {
        let atm = run(&[InsertCard, EnterPin, EnterAmount, TakeCash]);
        assert_eq!(atm.current_state(), AtmState::CashTaken);
        assert!(atm.current_state().is_transient());
    }

    #[test]
    fn eject_before_taking_cash_can_still_finish() {
        let atm = run(&[InsertCard, EnterPin, EnterAmount, EjectCard, TakeCash]);
        assert_eq!(atm.current_state(), ACCEPTING_STATE);
    }

    #[test]
    fn undefined_transition_stays_put() {
        let mut atm = run(&[EnterPin]);
        assert_eq!(atm.current_state(), AtmState::MissingCard);

        let result = atm.step(InsertCard);
        assert_eq!(result, StepResult::Undefined(AtmState::MissingCard));
        assert_eq!(atm.current_state(), AtmState::MissingCard);
        assert_eq!(atm.history().undefined_count(), 1);
    }

    #[test]
    fn sinks_absorb_every_symbol() {
        for sink in SINK_STATES {
            for symbol in Symbol::ALL {
                let mut atm = Automaton {
                    current: sink,
                    history: StateHistory::new(),
                };
                assert_eq!(atm.step(symbol).state(), sink);
            }
        }
    }

    #[test]
    fn finished_reopens_machine() {
        let mut atm = run(&[InsertCard, EjectCard]);
        assert_eq!(atm.current_state(), AtmState::Finished);

        assert_eq!(
            atm.step(InsertCard),
            StepResult::Transitioned(AtmState::CardInserted)
        );
    }

    #[test]
    fn reset_matches_fresh_automaton() {
        let mut atm = run(&[InsertCard, EnterPin, EnterPin]);
        assert_eq!(atm.current_state(), AtmState::PinEnteredTwice);

        atm.reset();
        let fresh = Automaton::new();
        assert_eq!(atm.current_state(), fresh.current_state());
        assert_eq!(atm.history().len(), fresh.history().len());

        atm.step(InsertCard);
        assert_eq!(atm.current_state(), AtmState::CardInserted);
    }

    #[test]
    fn long_session_keeps_every_step() {
        let mut atm = Automaton::new();
        let cycle = [InsertCard, EnterPin, EnterAmount, TakeCash, EjectCard];
        for _ in 0..2_000 {
            for symbol in cycle {
                atm.step(symbol);
            }
        }

        assert_eq!(atm.current_state(), ACCEPTING_STATE);
        assert_eq!(atm.history().len(), 10_000);
        assert_eq!(atm.history().undefined_count(), 0);
        assert_eq!(atm.history().transitions()[5].from, ACCEPTING_STATE);
    }

    #[test]
    fn history_snapshot_is_unaffected_by_later_steps() {
        let mut atm = run(&[InsertCard]);
        let snapshot = atm.history().clone();
        atm.step(EnterPin);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(atm.history().len(), 2);
    }

    #[test]
    fn step_result_reports_state() {
        assert!(StepResult::Transitioned(AtmState::CardInserted).is_defined());
        assert!(!StepResult::Undefined(AtmState::MissingPin).is_defined());
        assert_eq!(
            StepResult::Undefined(AtmState::MissingPin).state(),
            AtmState::MissingPin
        );
    }
}

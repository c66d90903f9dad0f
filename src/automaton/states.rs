//! The ATM state set and its fixed classification.

crate::state_enum! {
    /// Where the ATM interaction currently is.
    ///
    /// Each sink records *which* precondition was violated so the caller can
    /// tell the user what went wrong.
    pub enum AtmState {
        /// Waiting for a card.
        Idle = 0,
        CardInserted = 1,
        /// Any action other than inserting a card while idle.
        MissingCard = 2,
        PinEntered = 3,
        CardInsertedTwice = 4,
        /// Amount entered before the PIN.
        MissingPin = 5,
        AmountEntered = 6,
        PinEnteredTwice = 7,
        /// Tried to take cash that was never dispensed.
        NoCashDispensed = 8,
        CashTaken = 9,
        /// Card ejected while dispensed cash is still waiting.
        CardEjected = 10,
        AmountEnteredTwice = 11,
        /// Did something other than take the cash after ejecting the card.
        CashNotTaken = 12,
        /// Transaction complete.
        Finished = 13,
    }
    initial: Idle
    accepting: [Finished]
    sink: [
        MissingCard,
        CardInsertedTwice,
        MissingPin,
        PinEnteredTwice,
        NoCashDispensed,
        AmountEnteredTwice,
        CashNotTaken,
    ]
}

/// State of a fresh or reset automaton.
pub const INITIAL_STATE: AtmState = AtmState::Idle;

/// The only state that denotes a validated, complete transaction.
pub const ACCEPTING_STATE: AtmState = AtmState::Finished;

/// Absorbing error states. `CardEjected` (q10) is not one of them: taking
/// the cash from there still finishes the transaction.
pub const SINK_STATES: [AtmState; 7] = [
    AtmState::MissingCard,
    AtmState::CardInsertedTwice,
    AtmState::MissingPin,
    AtmState::PinEnteredTwice,
    AtmState::NoCashDispensed,
    AtmState::AmountEnteredTwice,
    AtmState::CashNotTaken,
];

impl AtmState {
    /// Human-readable description of the state.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Idle => "waiting for a card",
            Self::CardInserted => "card inserted",
            Self::MissingCard => "no card was inserted",
            Self::PinEntered => "PIN entered",
            Self::CardInsertedTwice => "card inserted twice",
            Self::MissingPin => "no PIN was entered",
            Self::AmountEntered => "amount entered",
            Self::PinEnteredTwice => "PIN entered twice",
            Self::NoCashDispensed => "there is no cash to take",
            Self::CashTaken => "cash taken",
            Self::CardEjected => "card ejected",
            Self::AmountEnteredTwice => "amount entered twice",
            Self::CashNotTaken => "the cash must be taken",
            Self::Finished => "transaction finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, State};

    #[test]
    fn ids_cover_zero_to_thirteen() {
        let ids: Vec<u8> = AtmState::ALL.iter().map(State::id).collect();
        assert_eq!(ids, (0..=13).collect::<Vec<u8>>());
        assert_eq!(AtmState::from_id(14), None);
    }

    #[test]
    fn sink_constant_agrees_with_classification() {
        for state in AtmState::ALL {
            assert_eq!(state.is_sink(), SINK_STATES.contains(state), "{state}");
        }
    }

    #[test]
    fn sink_ids_match_reference_set() {
        let mut ids: Vec<u8> = SINK_STATES.iter().map(State::id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 4, 5, 7, 8, 11, 12]);
    }

    #[test]
    fn card_ejected_is_transient() {
        assert_eq!(
            AtmState::CardEjected.classification(),
            Classification::Transient
        );
    }

    #[test]
    fn classification_partitions_states() {
        let transient: Vec<u8> = AtmState::ALL
            .iter()
            .filter(|s| s.is_transient())
            .map(State::id)
            .collect();
        assert_eq!(transient, vec![1, 3, 6, 9, 10]);
        assert_eq!(INITIAL_STATE.classification(), Classification::Initial);
        assert_eq!(ACCEPTING_STATE.classification(), Classification::Accepting);
        assert_eq!(ACCEPTING_STATE.id(), 13);
    }
}

//! The fixed transition function.

use super::states::AtmState;
use crate::core::Symbol;

/// Successor of `state` on `symbol`, or `None` when the pair is undefined.
///
/// Undefined pairs are exactly the rows of the sink states; the automaton
/// treats them as self-loops. q13 mirrors q0 so a finished run can start a
/// new transaction without an explicit reset.
pub const fn successor(state: AtmState, symbol: Symbol) -> Option<AtmState> {
    use AtmState::*;
    use Symbol::*;

    let next = match (state, symbol) {
        (Idle | Finished, InsertCard) => CardInserted,
        (Idle | Finished, EnterPin | EnterAmount | TakeCash | EjectCard) => MissingCard,

        (CardInserted, InsertCard) => CardInsertedTwice,
        (CardInserted, EnterPin) => PinEntered,
        (CardInserted, EnterAmount) => MissingPin,
        (CardInserted, TakeCash) => NoCashDispensed,
        (CardInserted, EjectCard) => Finished,

        (PinEntered | CashTaken, InsertCard) => CardInsertedTwice,
        (PinEntered | CashTaken, EnterPin) => PinEnteredTwice,
        (PinEntered | CashTaken, EnterAmount) => AmountEntered,
        (PinEntered | CashTaken, TakeCash) => NoCashDispensed,
        (PinEntered | CashTaken, EjectCard) => Finished,

        (AmountEntered, InsertCard) => CardInsertedTwice,
        (AmountEntered, EnterPin) => PinEnteredTwice,
        (AmountEntered, EnterAmount) => AmountEnteredTwice,
        (AmountEntered, TakeCash) => CashTaken,
        (AmountEntered, EjectCard) => CardEjected,

        (CardEjected, TakeCash) => Finished,
        (CardEjected, InsertCard | EnterPin | EnterAmount | EjectCard) => CashNotTaken,

        (
            MissingCard | CardInsertedTwice | MissingPin | PinEnteredTwice | NoCashDispensed
            | AmountEnteredTwice | CashNotTaken,
            _,
        ) => return None,
    };
    Some(next)
}

/// One cell of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub state: AtmState,
    pub symbol: Symbol,
    pub next: Option<AtmState>,
}

/// Every (state, symbol) pair with its successor, row by row.
pub fn transition_table() -> impl Iterator<Item = TableEntry> {
    AtmState::ALL.iter().flat_map(|&state| {
        Symbol::ALL.into_iter().map(move |symbol| TableEntry {
            state,
            symbol,
            next: successor(state, symbol),
        })
    })
}

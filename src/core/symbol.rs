//! Input alphabet of the ATM automaton.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of input, corresponding to one real-world ATM action.
///
/// Symbols are plain values. Turning a raw user-facing label into a symbol
/// is the driver's job (see [`crate::driver::translate`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbol {
    /// `a`
    InsertCard,
    /// `b`
    EnterPin,
    /// `c`
    EnterAmount,
    /// `d`
    TakeCash,
    /// `e`
    EjectCard,
}

impl Symbol {
    /// The whole alphabet, in letter order.
    pub const ALL: [Symbol; 5] = [
        Self::InsertCard,
        Self::EnterPin,
        Self::EnterAmount,
        Self::TakeCash,
        Self::EjectCard,
    ];

    /// Single-letter form used in the transition table.
    pub fn letter(&self) -> char {
        match self {
            Self::InsertCard => 'a',
            Self::EnterPin => 'b',
            Self::EnterAmount => 'c',
            Self::TakeCash => 'd',
            Self::EjectCard => 'e',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.letter() == letter.to_ascii_lowercase())
    }

    /// Kebab-case name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCard => "insert-card",
            Self::EnterPin => "enter-pin",
            Self::EnterAmount => "enter-amount",
            Self::TakeCash => "take-cash",
            Self::EjectCard => "eject-card",
        }
    }

    /// Action label shown on the ATM's buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InsertCard => "Insertar tarjeta",
            Self::EnterPin => "Ingresar PIN",
            Self::EnterAmount => "Ingresar cantidad",
            Self::TakeCash => "Tomar dinero",
            Self::EjectCard => "Sacar tarjeta",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_follow_alphabet_order() {
        let letters: String = Symbol::ALL.iter().map(Symbol::letter).collect();
        assert_eq!(letters, "abcde");
    }

    #[test]
    fn from_letter_is_case_insensitive() {
        assert_eq!(Symbol::from_letter('a'), Some(Symbol::InsertCard));
        assert_eq!(Symbol::from_letter('E'), Some(Symbol::EjectCard));
        assert_eq!(Symbol::from_letter('f'), None);
    }

    #[test]
    fn serde_name_matches_name() {
        for symbol in Symbol::ALL {
            let json = serde_json::to_string(&symbol).unwrap();
            assert_eq!(json, format!("\"{}\"", symbol.name()));
        }
    }

    #[test]
    fn display_shows_name_and_letter() {
        assert_eq!(Symbol::TakeCash.to_string(), "take-cash (d)");
    }
}

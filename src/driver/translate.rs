//! Translation of raw action labels into alphabet symbols.
//!
//! Three spellings are recognized, case-insensitively and ignoring
//! surrounding whitespace:
//! - the table letter (`a` .. `e`)
//! - the symbol name (`insert-card`; spaces or underscores also work)
//! - the label printed on the ATM's buttons (`Insertar tarjeta`)
//!
//! Unrecognized labels never reach [`Automaton::step`](crate::Automaton::step).

use super::error::{LabelError, TranslationError};
use crate::core::Symbol;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Translate one raw label.
///
/// # Example
///
/// ```rust
/// use atm_automaton::driver::translate;
/// use atm_automaton::Symbol;
///
/// assert_eq!(translate("Tomar dinero"), Ok(Symbol::TakeCash));
/// assert_eq!(translate(" B "), Ok(Symbol::EnterPin));
/// assert_eq!(translate("eject_card"), Ok(Symbol::EjectCard));
/// assert!(translate("dance").is_err());
/// ```
pub fn translate(label: &str) -> Result<Symbol, TranslationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(TranslationError::Empty);
    }

    let mut chars = trimmed.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        if let Some(symbol) = Symbol::from_letter(letter) {
            return Ok(symbol);
        }
    }

    let normalized = normalize(trimmed);
    Symbol::ALL
        .into_iter()
        .find(|symbol| {
            normalized == symbol.name() || normalized == normalize(symbol.label())
        })
        .ok_or_else(|| TranslationError::UnknownLabel(trimmed.to_string()))
}

/// Translate a whole queue, collecting every failure instead of stopping at
/// the first one.
pub fn translate_all<L: AsRef<str>>(
    labels: &[L],
) -> Validation<Vec<Symbol>, NonEmptyVec<LabelError>> {
    let checks: Vec<Validation<Symbol, NonEmptyVec<LabelError>>> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| match translate(label.as_ref()) {
            Ok(symbol) => Validation::success(symbol),
            Err(error) => Validation::fail(LabelError { index, error }),
        })
        .collect();

    Validation::all_vec(checks)
}

fn normalize(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_translate() {
        assert_eq!(translate("a"), Ok(Symbol::InsertCard));
        assert_eq!(translate("C"), Ok(Symbol::EnterAmount));
        assert_eq!(translate("z"), Err(TranslationError::UnknownLabel("z".into())));
    }

    #[test]
    fn names_translate_in_any_separator_style() {
        assert_eq!(translate("enter-pin"), Ok(Symbol::EnterPin));
        assert_eq!(translate("Enter PIN"), Ok(Symbol::EnterPin));
        assert_eq!(translate("TAKE_CASH"), Ok(Symbol::TakeCash));
    }

    #[test]
    fn button_labels_translate() {
        for symbol in Symbol::ALL {
            assert_eq!(translate(symbol.label()), Ok(symbol));
        }
        assert_eq!(translate("  ingresar   cantidad "), Ok(Symbol::EnterAmount));
    }

    #[test]
    fn blank_label_is_empty_error() {
        assert_eq!(translate("   "), Err(TranslationError::Empty));
    }

    #[test]
    fn translate_all_succeeds_on_clean_queue() {
        let labels = ["a", "Ingresar PIN", "enter-amount", "d", "Sacar tarjeta"];
        match translate_all(&labels) {
            Validation::Success(symbols) => assert_eq!(symbols, Symbol::ALL.to_vec()),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn translate_all_accumulates_every_failure() {
        let labels = ["a", "jump", "b", "", "fly"];
        match translate_all(&labels) {
            Validation::Failure(errors) => {
                let indices: Vec<usize> = errors.iter().map(|e| e.index).collect();
                assert_eq!(indices, vec![1, 3, 4]);
                assert!(errors
                    .iter()
                    .any(|e| e.error == TranslationError::Empty));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}

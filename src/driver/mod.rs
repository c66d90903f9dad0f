//! Reference driver for the ATM automaton.
//!
//! The driver is the "imperative shell" around the engine. It translates raw
//! action labels into symbols, feeds them one at a time, stops on the first
//! sink, and classifies how the run ended.
//!
//! # Key Concepts
//!
//! - **Translation**: labels that do not name an action never reach the
//!   engine; they are skipped or reject the run, per [`UnknownLabelPolicy`]
//! - **Runs**: every run starts from a reset automaton and yields a
//!   [`RunReport`]
//! - **Presentation**: [`Driver::run_presented`] awaits a [`Presenter`]
//!   around every action, one at a time
//!
//! [`UnknownLabelPolicy`]: crate::config::UnknownLabelPolicy

mod error;
mod presenter;
mod report;
mod runner;
mod translate;

pub use error::{DriverError, LabelError, TranslationError};
pub use presenter::{NoopPresenter, PacedPresenter, Presenter};
pub use report::{RunOutcome, RunReport, StepRecord};
pub use runner::Driver;
pub use translate::{translate, translate_all};

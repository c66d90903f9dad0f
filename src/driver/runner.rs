//! The run loop.

use super::error::{DriverError, LabelError};
use super::presenter::Presenter;
use super::report::{RunOutcome, RunReport, StepRecord};
use super::translate::{translate, translate_all};
use crate::automaton::Automaton;
use crate::config::{DriverConfig, UnknownLabelPolicy};
use crate::core::{State, Symbol};
use chrono::{DateTime, Utc};
use std::ops::ControlFlow;
use stillwater::validation::Validation;
use uuid::Uuid;

type Queue = Vec<Result<Symbol, LabelError>>;

/// Feeds queued action labels to an automaton it owns and classifies the
/// result.
///
/// Every run starts from a reset automaton. The run halts as soon as a sink
/// is reached; otherwise the whole queue is consumed and the final state
/// decides between success and an incomplete run.
///
/// # Example
///
/// ```rust
/// use atm_automaton::config::DriverConfig;
/// use atm_automaton::driver::{Driver, RunOutcome};
/// use atm_automaton::AtmState;
///
/// let mut driver = Driver::new(DriverConfig::immediate());
///
/// let report = driver.run(&["a", "b", "c", "d", "e"]).unwrap();
/// assert!(report.is_success());
///
/// let report = driver.run(&["a", "a", "b"]).unwrap();
/// assert_eq!(
///     report.outcome,
///     RunOutcome::Rejected { state: AtmState::CardInsertedTwice }
/// );
/// assert_eq!(report.remaining, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Driver {
    automaton: Automaton,
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            automaton: Automaton::new(),
            config,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The automaton as the last run left it.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Run the queue without presentation.
    pub fn run<L: AsRef<str>>(&mut self, labels: &[L]) -> Result<RunReport, DriverError> {
        let queue = self.begin(labels)?;
        let mut run = RunState::new(labels.len());

        for (index, (label, entry)) in labels.iter().zip(queue).enumerate() {
            match entry {
                Ok(symbol) => {
                    if self.feed(&mut run, index, label.as_ref(), symbol).is_break() {
                        break;
                    }
                }
                Err(skipped) => run.skip(skipped),
            }
        }

        Ok(run.finish(&self.automaton))
    }

    /// Run the queue, awaiting the presenter around every action.
    ///
    /// Produces the same report as [`Driver::run`] for the same queue.
    pub async fn run_presented<L, P>(
        &mut self,
        labels: &[L],
        presenter: &mut P,
    ) -> Result<RunReport, DriverError>
    where
        L: AsRef<str>,
        P: Presenter,
    {
        let queue = self.begin(labels)?;
        let mut run = RunState::new(labels.len());

        for (index, (label, entry)) in labels.iter().zip(queue).enumerate() {
            let label = label.as_ref();
            match entry {
                Ok(symbol) => {
                    presenter.highlight(index, label).await;
                    let flow = self.feed(&mut run, index, label, symbol);
                    if let Some(step) = run.steps.last() {
                        presenter.on_step(step);
                    }
                    if flow.is_break() {
                        break;
                    }
                }
                Err(skipped) => {
                    presenter.on_skip(&skipped);
                    run.skip(skipped);
                }
            }
            presenter.pause().await;
        }

        Ok(run.finish(&self.automaton))
    }

    /// Reset the automaton and translate the queue according to the
    /// unknown-label policy.
    fn begin<L: AsRef<str>>(&mut self, labels: &[L]) -> Result<Queue, DriverError> {
        self.automaton.reset();

        match self.config.unknown_labels {
            UnknownLabelPolicy::Abort => match translate_all(labels) {
                Validation::Success(symbols) => Ok(symbols.into_iter().map(Ok).collect()),
                Validation::Failure(errors) => {
                    let errors: Vec<LabelError> = errors.iter().cloned().collect();
                    tracing::warn!(
                        unrecognized = errors.len(),
                        "Rejecting run with unrecognized action labels"
                    );
                    Err(DriverError::UnrecognizedLabels(errors))
                }
            },
            UnknownLabelPolicy::Skip => Ok(labels
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    translate(label.as_ref()).map_err(|error| LabelError { index, error })
                })
                .collect()),
        }
    }

    fn feed(
        &mut self,
        run: &mut RunState,
        index: usize,
        label: &str,
        symbol: Symbol,
    ) -> ControlFlow<()> {
        let from = self.automaton.current_state();
        let result = self.automaton.step(symbol);
        let to = result.state();

        run.consumed += 1;
        run.steps.push(StepRecord {
            index,
            label: label.to_string(),
            symbol,
            from,
            to,
            defined: result.is_defined(),
            classification: to.classification(),
        });

        if to.is_sink() {
            tracing::info!(
                run_id = %run.run_id,
                state = to.id(),
                remaining = run.total - run.consumed,
                "Sink reached, halting run"
            );
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

struct RunState {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    total: usize,
    consumed: usize,
    steps: Vec<StepRecord>,
    skipped: Vec<LabelError>,
}

impl RunState {
    fn new(total: usize) -> Self {
        let run_id = Uuid::new_v4();
        tracing::info!(%run_id, actions = total, "Starting run");
        Self {
            run_id,
            started_at: Utc::now(),
            total,
            consumed: 0,
            steps: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn skip(&mut self, skipped: LabelError) {
        tracing::warn!(run_id = %self.run_id, "Skipping {}", skipped);
        self.consumed += 1;
        self.skipped.push(skipped);
    }

    fn finish(self, automaton: &Automaton) -> RunReport {
        let final_state = automaton.current_state();
        let outcome = RunOutcome::from_final_state(final_state);
        tracing::info!(
            run_id = %self.run_id,
            final_state = final_state.id(),
            success = outcome.is_success(),
            "Run finished: {}",
            outcome.message()
        );

        RunReport {
            run_id: self.run_id,
            started_at: self.started_at,
            steps: self.steps,
            skipped: self.skipped,
            final_state,
            outcome,
            consumed: self.consumed,
            remaining: self.total - self.consumed,
        }
    }
}

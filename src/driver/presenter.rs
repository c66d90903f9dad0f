//! Presentation seam for paced runs.
//!
//! A presenter reacts to the run as it happens: highlighting the queued
//! action about to be fed, pausing between actions, and observing each step.
//! The driver awaits every presentation effect before moving on, so the
//! engine itself never waits on anything.

use super::error::LabelError;
use super::report::StepRecord;
use crate::config::DriverConfig;
use std::future::Future;
use std::time::Duration;

/// Reacts to a run in progress.
pub trait Presenter {
    /// Called before the action at `index` is fed to the automaton.
    fn highlight(&mut self, index: usize, label: &str) -> impl Future<Output = ()>;

    /// Called after each queued action, skipped ones included.
    fn pause(&mut self) -> impl Future<Output = ()>;

    /// Called with the record of every step, right after it happens.
    fn on_step(&mut self, _step: &StepRecord) {}

    /// Called for every label that could not be translated. The driver has
    /// already logged it.
    fn on_skip(&mut self, _skipped: &LabelError) {}
}

/// Presenter that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    async fn highlight(&mut self, _index: usize, _label: &str) {}

    async fn pause(&mut self) {}
}

/// Presenter that paces the run with timers and traces each step.
#[derive(Debug, Clone, Copy)]
pub struct PacedPresenter {
    highlight: Duration,
    pause: Duration,
}

impl PacedPresenter {
    pub fn new(highlight: Duration, pause: Duration) -> Self {
        Self { highlight, pause }
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(config.highlight_delay(), config.pause_delay())
    }
}

impl Presenter for PacedPresenter {
    async fn highlight(&mut self, index: usize, label: &str) {
        tracing::debug!(index, label, "Highlighting action");
        tokio::time::sleep(self.highlight).await;
    }

    async fn pause(&mut self) {
        tokio::time::sleep(self.pause).await;
    }

    fn on_step(&mut self, step: &StepRecord) {
        tracing::info!(
            "-> '{}' ({}) read, new state: {}",
            step.label,
            step.symbol.letter(),
            step.to
        );
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paced_presenter_uses_configured_delays() {
        let presenter = PacedPresenter::from_config(&DriverConfig::default());
        assert_eq!(presenter.highlight, Duration::from_millis(800));
        assert_eq!(presenter.pause, Duration::from_millis(400));
    }

    #[tokio::test]
    async fn zero_delay_presenter_completes() {
        let mut presenter = PacedPresenter::new(Duration::ZERO, Duration::ZERO);
        presenter.highlight(0, "a").await;
        presenter.pause().await;
    }
}

//! atm-automaton - run ATM action sequences through the automaton.

use atm_automaton::automaton::{transition_table, TableEntry};
use atm_automaton::config::{DriverConfig, UnknownLabelPolicy};
use atm_automaton::driver::{Driver, LabelError, PacedPresenter, Presenter, RunReport, StepRecord};
use atm_automaton::{State, Symbol};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "atm-automaton")]
#[command(about = "Simulate the interaction flow of an ATM with a finite automaton")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a sequence of actions to the automaton
    Run {
        /// YAML config file
        #[arg(short, long, env = "ATM_AUTOMATON_CONFIG")]
        config: Option<PathBuf>,

        /// What to do with unrecognized actions (skip or abort)
        #[arg(long)]
        unknown_labels: Option<UnknownLabelPolicy>,

        /// Pace the run with the configured highlight and pause delays
        #[arg(long, conflicts_with = "json")]
        paced: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,

        /// Actions: letters (a-e), names (insert-card) or button labels
        #[arg(required = true)]
        actions: Vec<String>,
    },

    /// Print the transition table
    Table,

    /// List the recognized actions
    Actions,
}

/// Prints each step as it happens, paced by the wrapped presenter.
struct ConsolePresenter {
    paced: PacedPresenter,
}

impl Presenter for ConsolePresenter {
    async fn highlight(&mut self, index: usize, label: &str) {
        println!("[{index}] {label}");
        self.paced.highlight(index, label).await;
    }

    async fn pause(&mut self) {
        self.paced.pause().await;
    }

    fn on_step(&mut self, step: &StepRecord) {
        println!("    {}", format_step(step));
    }

    fn on_skip(&mut self, skipped: &LabelError) {
        println!("    skipped: {skipped}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            unknown_labels,
            paced,
            json,
            actions,
        } => {
            let mut driver_config = DriverConfig::load_from(config.as_deref())?;
            if let Some(policy) = unknown_labels {
                driver_config.unknown_labels = policy;
            }

            let mut driver = Driver::new(driver_config);
            let report = if paced {
                let mut presenter = ConsolePresenter {
                    paced: PacedPresenter::from_config(driver.config()),
                };
                driver.run_presented(&actions, &mut presenter).await?
            } else {
                driver.run(&actions)?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, !paced);
            }

            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Table => {
            print_table();
            Ok(ExitCode::SUCCESS)
        }

        Commands::Actions => {
            for symbol in Symbol::ALL {
                println!(
                    "{}  {:<13} {}",
                    symbol.letter(),
                    symbol.name(),
                    symbol.label()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn format_step(step: &StepRecord) -> String {
    let marker = if step.defined { "" } else { " (undefined, stayed)" };
    format!(
        "q{} --{}--> q{} [{}]{}",
        step.from.id(),
        step.symbol.letter(),
        step.to.id(),
        step.classification.as_str(),
        marker
    )
}

fn print_report(report: &RunReport, with_steps: bool) {
    if with_steps {
        for step in &report.steps {
            println!("[{}] {:<20} {}", step.index, step.label, format_step(step));
        }
        for skipped in &report.skipped {
            println!("skipped: {skipped}");
        }
    }
    if report.remaining > 0 {
        println!("{} action(s) not processed", report.remaining);
    }
    println!("{}", report.outcome.message());
}

fn print_table() {
    let header: String = Symbol::ALL
        .iter()
        .map(|symbol| format!("{:>5}", symbol.letter()))
        .collect();
    println!("{:<24}{header}  class", "state");

    let entries: Vec<TableEntry> = transition_table().collect();
    for row in entries.chunks(Symbol::ALL.len()) {
        let state = row[0].state;
        let cells: String = row
            .iter()
            .map(|entry| match entry.next {
                Some(next) => format!("{:>5}", next.id()),
                None => format!("{:>5}", "-"),
            })
            .collect();
        println!(
            "{:<24}{cells}  {}",
            state.to_string(),
            state.classification().as_str()
        );
    }
    println!();
    println!("- : undefined, the automaton stays in the same state");
}

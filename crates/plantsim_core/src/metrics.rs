//! Session counters and logging setup.
//!
//! Log output goes to stderr so the game text on stdout stays readable.

use plantsim_data::{GameStatus, RoundOutcome};
use tracing_subscriber::EnvFilter;

/// Running totals for one game session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundMetrics {
    rounds: u64,
    deaths: u64,
    goals_met: u64,
    total_growth: f64,
}

impl RoundMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed round.
    pub fn record_round(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        self.total_growth += outcome.report.growth;
        match outcome.status {
            GameStatus::Dead => {
                self.deaths += 1;
                tracing::info!(
                    round = self.rounds,
                    size = outcome.report.size,
                    reason = %outcome.reason,
                    "Plant died"
                );
            }
            GameStatus::GoalMet => {
                self.goals_met += 1;
                tracing::info!(
                    round = self.rounds,
                    size = outcome.report.size,
                    "Growth goal reached"
                );
            }
            GameStatus::InProgress => {
                tracing::debug!(
                    round = self.rounds,
                    size = outcome.report.size,
                    growth = outcome.report.growth,
                    "Round completed"
                );
            }
        }
    }

    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    #[must_use]
    pub fn goals_met(&self) -> u64 {
        self.goals_met
    }

    /// Sum of growth over every recorded round, in inches.
    #[must_use]
    pub fn total_growth(&self) -> f64 {
        self.total_growth
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over warn.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

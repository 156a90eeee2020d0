use super::resource::PerResource;
use serde::{Deserialize, Serialize};

/// Result of checking the plant's deltas against its tolerance bands.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Alive,
    /// Every violated band, joined in resource order.
    Dead { reason: String },
}

impl Health {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        matches!(self, Health::Alive)
    }

    /// Empty for a living plant.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Health::Alive => "",
            Health::Dead { reason } => reason,
        }
    }
}

/// Game state after a round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Alive, goal not reached yet.
    InProgress,
    /// Alive and at least as tall as the goal.
    GoalMet,
    Dead,
}

impl GameStatus {
    /// Numeric code: `-1` dead, `0` in progress, `1` goal met.
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            GameStatus::Dead => -1,
            GameStatus::InProgress => 0,
            GameStatus::GoalMet => 1,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Snapshot of the plant and the resource pools for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// Plant size in inches.
    pub size: f64,
    pub available: PerResource<f64>,
    /// Growth of the most recent round, zero before the first one.
    pub growth: f64,
    pub consumption: PerResource<f64>,
    /// Available minus needed, as recorded in the most recent round.
    pub delta: PerResource<f64>,
}

/// What a single `update()` hands back to the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub status: GameStatus,
    pub reason: String,
    pub report: StatusReport,
}

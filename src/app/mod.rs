pub mod controller;
pub mod headless;
pub mod help;
pub mod input;

pub use controller::Controller;
pub use headless::{run_plan, Plan, PlannedRound};
pub use input::Prompter;

use crate::model::game::{Game, Progress};
use crate::model::{GameStatus, RoundOutcome};

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    Won,
    Died { reason: String },
    OutOfRounds,
    /// The player left, or input ran out, before the game was decided.
    Quit,
}

/// Turns a round outcome into an ending, advancing the time period when the
/// game goes on.
pub fn settle_round(game: &mut Game, outcome: &RoundOutcome) -> Option<Ending> {
    match outcome.status {
        GameStatus::GoalMet => Some(Ending::Won),
        GameStatus::Dead => Some(Ending::Died {
            reason: outcome.reason.clone(),
        }),
        GameStatus::InProgress => match game.advance_period() {
            Progress::Next => None,
            Progress::OutOfRounds => Some(Ending::OutOfRounds),
        },
    }
}

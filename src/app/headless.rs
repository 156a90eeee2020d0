//! Non-interactive play from a JSON plan.
//!
//! ```json
//! { "rounds": [ { "add": { "water": 100, "light": 10, "nutrients": 5 } },
//!               { "remove": { "light": 2 } } ] }
//! ```
//!
//! Each round's outcome is written as one JSON line.

use super::{settle_round, Ending};
use crate::model::game::{Game, Removal};
use crate::model::{Resource, StatusReport};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlannedRound {
    #[serde(default)]
    pub add: HashMap<Resource, i64>,
    #[serde(default)]
    pub remove: HashMap<Resource, i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub rounds: Vec<PlannedRound>,
}

impl Plan {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse round plan")
    }
}

#[derive(Serialize, Debug)]
struct RoundLine<'a> {
    time_period: i64,
    status: i8,
    reason: &'a str,
    /// Resources that a removal emptied before this round.
    depleted: Vec<Resource>,
    report: &'a StatusReport,
}

/// Plays `plan` against `game`, one planned round per time period.
///
/// Returns [`Ending::Quit`] if the plan runs out before the game is decided.
pub fn run_plan<W: Write>(game: &mut Game, plan: &Plan, out: &mut W) -> Result<Ending> {
    for (index, round) in plan.rounds.iter().enumerate() {
        let time_period = game.time_period();
        let mut depleted = Vec::new();

        // Resource::ALL order keeps runs reproducible regardless of map order.
        for resource in Resource::ALL {
            if let Some(&amount) = round.add.get(&resource) {
                game.add(resource, amount)
                    .with_context(|| format!("Invalid add in planned round {}", index + 1))?;
            }
        }
        for resource in Resource::ALL {
            if let Some(&amount) = round.remove.get(&resource) {
                let removal = game
                    .remove(resource, amount)
                    .with_context(|| format!("Invalid remove in planned round {}", index + 1))?;
                if removal == Removal::Depleted {
                    depleted.push(resource);
                }
            }
        }

        let outcome = game.update();
        let line = RoundLine {
            time_period,
            status: outcome.status.code(),
            reason: &outcome.reason,
            depleted,
            report: &outcome.report,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;

        if let Some(ending) = settle_round(game, &outcome) {
            return Ok(ending);
        }
    }

    tracing::info!(
        rounds = plan.rounds.len(),
        "Plan exhausted before the game was decided"
    );
    Ok(Ending::Quit)
}

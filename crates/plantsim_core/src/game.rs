//! The round simulator.
//!
//! The player fills the resource pools between rounds with [`Game::add`] and
//! [`Game::remove`], then calls [`Game::update`] once to let the plant consume,
//! grow and be judged.

use crate::config::{GameConfig, PlantConfig};
use crate::error::{GameError, Result};
use crate::metrics::RoundMetrics;
use crate::plant::Plant;
use plantsim_data::{GameStatus, PerResource, Resource, RoundOutcome, StatusReport};

/// Effect of a [`Game::remove`] call on the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Applied,
    /// More was removed than available; the pool was clamped to zero.
    Depleted,
}

/// Whether another round fits in the game after an in-progress round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The time period was incremented.
    Next,
    OutOfRounds,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    time_period: i64,
    plant: Plant,
    available: PerResource<f64>,
    last_growth: f64,
    last_consumption: PerResource<f64>,
    metrics: RoundMetrics,
}

impl Game {
    /// Starts a game at time period 1 with empty pools.
    ///
    /// Non-positive limits and an empty name are replaced by defaults.
    pub fn new(config: GameConfig, plant: PlantConfig) -> Self {
        let config = config.normalized();
        tracing::debug!(
            name = %config.name,
            max_time_period = config.max_time_period,
            max_plant_size = config.max_plant_size,
            "Game created"
        );
        Self {
            config,
            time_period: 1,
            plant: Plant::new(&plant),
            available: PerResource::default(),
            last_growth: 0.0,
            last_consumption: PerResource::default(),
            metrics: RoundMetrics::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[must_use]
    pub fn time_period(&self) -> i64 {
        self.time_period
    }

    #[must_use]
    pub fn max_time_period(&self) -> i64 {
        self.config.max_time_period
    }

    /// Size the plant has to reach to win, in inches.
    #[must_use]
    pub fn max_plant_size(&self) -> f64 {
        self.config.max_plant_size
    }

    #[must_use]
    pub fn plant(&self) -> &Plant {
        &self.plant
    }

    #[must_use]
    pub fn available(&self, resource: Resource) -> f64 {
        self.available[resource]
    }

    #[must_use]
    pub fn metrics(&self) -> &RoundMetrics {
        &self.metrics
    }

    pub fn add(&mut self, resource: Resource, amount: i64) -> Result<()> {
        ensure_positive(resource, amount)?;
        self.available[resource] += amount as f64;
        Ok(())
    }

    pub fn remove(&mut self, resource: Resource, amount: i64) -> Result<Removal> {
        ensure_positive(resource, amount)?;
        let remaining = self.available[resource] - amount as f64;
        if remaining < 0.0 {
            tracing::warn!(
                resource = %resource,
                requested = amount,
                available = self.available[resource],
                "Removal exceeded available amount, pool emptied"
            );
            self.available[resource] = 0.0;
            Ok(Removal::Depleted)
        } else {
            self.available[resource] = remaining;
            Ok(Removal::Applied)
        }
    }

    /// Runs one round: consume, grow, deplete pools, judge health, check goal.
    pub fn update(&mut self) -> RoundOutcome {
        let consumed = PerResource::from_fn(|r| self.plant.consumption(r, self.available[r]));
        for resource in Resource::ALL {
            self.plant.record_delta(resource, self.available[resource]);
        }

        let growth = self.plant.growth_increment(&consumed);
        self.plant.grow(growth);

        for resource in Resource::ALL {
            if resource.is_depletable() {
                let remaining = self.available[resource] - consumed[resource];
                self.available[resource] = remaining.max(0.0);
            }
        }

        let health = self.plant.evaluate_health(growth);
        self.last_growth = growth;
        self.last_consumption = consumed;

        let report = self.status_report();
        tracing::debug!(?report, "Round status");

        let status = if !health.is_alive() {
            GameStatus::Dead
        } else if self.plant.size() >= self.config.max_plant_size {
            GameStatus::GoalMet
        } else {
            GameStatus::InProgress
        };

        let outcome = RoundOutcome {
            status,
            reason: health.reason().to_string(),
            report,
        };
        self.metrics.record_round(&outcome);
        outcome
    }

    /// Moves to the next time period if the game still has one left.
    pub fn advance_period(&mut self) -> Progress {
        if self.time_period < self.config.max_time_period {
            self.time_period += 1;
            Progress::Next
        } else {
            tracing::info!(
                time_period = self.time_period,
                "Time period limit reached"
            );
            Progress::OutOfRounds
        }
    }

    #[must_use]
    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            size: self.plant.size(),
            available: self.available,
            growth: self.last_growth,
            consumption: self.last_consumption,
            delta: self.plant.delta_need(),
        }
    }
}

fn ensure_positive(resource: Resource, amount: i64) -> Result<()> {
    if amount > 0 {
        Ok(())
    } else {
        Err(GameError::NonPositiveAmount { resource, amount })
    }
}

//! # Plantsim Core
//!
//! The deterministic model behind the plant growing game.
//!
//! A [`Plant`](plant::Plant) turns the resources it is given into growth and
//! judges its own health against tolerance bands around last round's need. A
//! [`Game`](game::Game) owns the plant and the resource pools the player fills,
//! and runs one round per call to [`Game::update`](game::Game::update).
//!
//! ## Example
//!
//! ```
//! use plantsim_core::config::{GameConfig, PlantConfig};
//! use plantsim_core::game::Game;
//! use plantsim_data::{GameStatus, Resource};
//!
//! let mut game = Game::new(GameConfig::new("Demo", 5, 10.0), PlantConfig::default());
//! game.add(Resource::Water, 100).unwrap();
//! game.add(Resource::Light, 10).unwrap();
//! game.add(Resource::Nutrients, 5).unwrap();
//!
//! let outcome = game.update();
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! assert!(game.plant().size() > 1.9);
//! ```

/// Configuration for plant parameters and game limits
pub mod config;
/// Error types for rejected player actions
pub mod error;
/// Round simulator that owns the plant and the resource pools
pub mod game;
/// Logging setup and per-session round counters
pub mod metrics;
/// Plant growth and health model
pub mod plant;

pub use error::GameError;
pub use game::{Game, Progress, Removal};
pub use metrics::{init_logging, RoundMetrics};
pub use plant::Plant;
pub use plantsim_data::{GameStatus, Health, PerResource, Resource, RoundOutcome, StatusReport};

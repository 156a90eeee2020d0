//! Plain data types shared by the simulation core and its front ends.

pub mod data;

pub use data::report::{GameStatus, Health, RoundOutcome, StatusReport};
pub use data::resource::{PerResource, Resource};

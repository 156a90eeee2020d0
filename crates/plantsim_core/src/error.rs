//! Error types for plantsim_core.
//!
//! Only player actions can fail. A dead plant or an exhausted round budget
//! is a game state, reported through `GameStatus` and `Progress`.

use plantsim_data::Resource;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Add/remove amounts must be strictly positive.
    #[error("{resource} amount must be a positive integer, got {amount}")]
    NonPositiveAmount { resource: Resource, amount: i64 },
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::NonPositiveAmount {
            resource: Resource::Water,
            amount: -4,
        };
        assert_eq!(
            err.to_string(),
            "water amount must be a positive integer, got -4"
        );
    }
}

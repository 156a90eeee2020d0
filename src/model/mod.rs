pub use plantsim_data::{GameStatus, Health, PerResource, Resource, RoundOutcome, StatusReport};
pub mod config {
    pub use plantsim_core::config::*;
}
pub mod plant {
    pub use plantsim_core::plant::*;
}
pub mod game {
    pub use plantsim_core::game::*;
}
pub mod metrics {
    pub use plantsim_core::metrics::*;
}
pub mod error {
    pub use plantsim_core::error::*;
}

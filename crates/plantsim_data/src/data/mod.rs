//! Core data structures for the plant simulation.

pub mod report;
pub mod resource;

//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod harvest;
pub mod schedule;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use harvest::{
    CollectedItem, Discovery, ExportedItem, HarvestSession, OperatorCommand, PollOutcome,
    PollState,
};
pub use schedule::Interval;

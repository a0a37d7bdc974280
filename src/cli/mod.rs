//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, operator input,
//! signal handling, and the harvest runner.

pub mod app;
pub mod args;
pub mod commands;
pub mod config_cmd;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{harvest_options, run_harvest, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, HarvestOptions};
pub use presenter::Presenter;

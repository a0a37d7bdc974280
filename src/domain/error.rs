//! Domain error types

use thiserror::Error;

/// Error when parsing an interval string
#[derive(Debug, Clone, Error)]
#[error("Invalid interval format: \"{input}\". Expected format: <number>ms, <number>s, <number>m, or <number>m<number>s (e.g., 500ms, 1s, 2m30s)")]
pub struct IntervalParseError {
    pub input: String,
}

/// Error when an empty marker is configured for a matcher
#[derive(Debug, Clone, Error)]
#[error("Invalid matcher for '{name}': value must not be empty")]
pub struct InvalidMatcherError {
    pub name: String,
}

/// Error when an operator command cannot be recognised
#[derive(Debug, Clone, Error)]
#[error("Unknown command: \"{input}\". Type 'help' for the list of commands")]
pub struct UnknownCommandError {
    pub input: String,
}

/// Error when serializing captured items
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Failed to serialize export: {0}")]
    SerializeError(String),

    #[error("Failed to write export file: {0}")]
    WriteError(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

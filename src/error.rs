//! Error types.

use thiserror::Error;

/// Error raised by a custom candidate builder.
pub type BuilderError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A custom builder failed; its error is surfaced as-is.
    #[error(transparent)]
    Builder(BuilderError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Settings already registered under name: {0}")]
    DuplicateName(String),
    #[error("No settings registered under name: {0}")]
    NotFound(String),
    #[error("Unknown weak variant check: {0}")]
    UnknownCheck(String),
}

//! Common error types for MediGuide Rust components.

use thiserror::Error;

/// Common error type for MediGuide operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid user input
    #[error("invalid input: {0}")]
    Input(String),
}

impl From<mediguide_core::ConfigError> for Error {
    fn from(err: mediguide_core::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<mediguide_core::AskError> for Error {
    fn from(err: mediguide_core::AskError) -> Self {
        Self::Input(err.to_string())
    }
}

/// Result type alias using MediGuide Error.
pub type Result<T> = std::result::Result<T, Error>;

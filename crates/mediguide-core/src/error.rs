//! Core error types

use thiserror::Error;

/// Invalid reveal configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Inter-fragment delay must be positive
    #[error("fragment delay must be greater than zero")]
    ZeroDelay,

    /// Delay too large to be a human-perceptible stagger
    #[error("fragment delay {delay_ms}ms exceeds maximum of {max_ms}ms")]
    DelayTooLong { delay_ms: u64, max_ms: u64 },
}

/// Invalid question input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskError {
    #[error("please enter a question")]
    EmptyQuestion,
}

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

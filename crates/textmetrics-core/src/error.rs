//! Error types for textmetrics-core.
//!
//! The metric functions themselves are total and never fail. Errors only
//! arise around them: loading configuration and guarding input size.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when accepting text for analysis.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The limit that was exceeded.
        limit: usize,
    },
}

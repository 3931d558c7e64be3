//! Error types for mid-props.

use thiserror::Error;

/// Main error type for mid-props.
#[derive(Debug, Error)]
pub enum PropsError {
    /// A required argument was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Property source could not be turned into a string mapping
    #[error("Property source error: {0}")]
    Source(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

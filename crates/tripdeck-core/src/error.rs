use thiserror::Error;

/// Top-level error type for the Tripdeck system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for
/// TripdeckError` so that the `?` operator works seamlessly across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TripdeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Assistant error: {0}")]
    Assistant(String),

    #[error("Expense error: {0}")]
    Expense(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for TripdeckError {
    fn from(err: toml::de::Error) -> Self {
        TripdeckError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TripdeckError {
    fn from(err: toml::ser::Error) -> Self {
        TripdeckError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TripdeckError {
    fn from(err: serde_json::Error) -> Self {
        TripdeckError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Tripdeck operations.
pub type Result<T> = std::result::Result<T, TripdeckError>;

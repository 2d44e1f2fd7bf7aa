//! Error types for priority evaluation.

use thiserror::Error;

/// Errors raised while building registries or exporting scores.
///
/// Evaluation itself never fails: an absent actor or unknown work type
/// degrades to a neutral score instead of an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriorityError {
    /// A work type could not be resolved, or a configuration is invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A state holds a value outside `[0, 1]` and was exported strictly.
    #[error("invalid state: value {value} is outside [0, 1]")]
    InvalidState {
        /// The offending raw value.
        value: f64,
    },

    /// A strategy was rejected at registration.
    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),
}

/// Result type for priority operations.
pub type PriorityResult<T> = Result<T, PriorityError>;

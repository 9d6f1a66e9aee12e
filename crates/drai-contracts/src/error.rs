//! Error types for the dr-ai services.
//!
//! The confidence aggregator and the response dispatcher are total and never
//! fail. Everything around them that can fail returns `DrAiResult<T>`.

use thiserror::Error;

/// The unified error type for the dr-ai workspace.
#[derive(Debug, Error)]
pub enum DrAiError {
    /// No condition with the requested id exists in the sample dataset.
    #[error("condition not found: {id}")]
    ConditionNotFound { id: String },

    /// A keyword rule table is missing, unreadable or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// An in-memory store could not be accessed (e.g. a poisoned lock).
    #[error("state error: {reason}")]
    StateError { reason: String },
}

/// Convenience alias used throughout the dr-ai crates.
pub type DrAiResult<T> = Result<T, DrAiError>;

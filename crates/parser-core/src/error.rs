//! Error types for interpreter operations.

use thiserror::Error;

/// Errors that can occur while interpreting a message.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The language service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The language service answered, but not with the structure we asked for.
    ///
    /// Distinct from [`Interpretation::NeedsClarification`]: a clarification
    /// is a well-formed answer, a malformed response is not an answer at all.
    ///
    /// [`Interpretation::NeedsClarification`]: crate::Interpretation::NeedsClarification
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The interpretation failed for another reason (API error, etc.).
    #[error("interpretation failed: {0}")]
    ProcessingFailed(String),
}

//! The Interpreter trait definition.

use async_trait::async_trait;

use crate::error::InterpreterError;
use crate::types::Interpretation;

/// A trait for turning one free-text message into a structured entry.
///
/// Implementations range from keyword matchers for tests to full
/// language-model backends. This trait is object-safe and can be used
/// with `Box<dyn Interpreter>`.
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Interpret a raw message.
    ///
    /// # Arguments
    ///
    /// * `text` - The message text exactly as the user sent it.
    ///
    /// # Returns
    ///
    /// An [`Interpretation`] - either a parsed entry ready to store, or a
    /// clarification question to send back - or an error if interpretation
    /// failed outright.
    async fn interpret(&self, text: &str) -> Result<Interpretation, InterpreterError>;

    /// Get a human-readable name for this interpreter implementation.
    fn name(&self) -> &str;

    /// Check if the interpreter is ready to process messages.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

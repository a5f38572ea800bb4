//! Core trait and types for interpreter implementations.
//!
//! This crate provides the shared interface for turning one free-text
//! message into a structured dashboard entry. It defines:
//!
//! - [`Interpreter`] - The trait that all interpreter implementations must implement
//! - [`Interpretation`] / [`ParsedEntry`] - The structured result of one message
//! - [`InterpreterError`] - Error types for interpretation
//! - Category helpers ([`category_emoji`], [`KNOWN_CATEGORIES`])
//!
//! # Example
//!
//! ```rust
//! use parser_core::{Interpretation, Interpreter, InterpreterError, ParsedEntry};
//! use async_trait::async_trait;
//!
//! struct TodoEverything;
//!
//! #[async_trait]
//! impl Interpreter for TodoEverything {
//!     async fn interpret(&self, text: &str) -> Result<Interpretation, InterpreterError> {
//!         Ok(Interpretation::Entry(ParsedEntry {
//!             category: "todos".to_string(),
//!             data: serde_json::json!({ "task": text }),
//!             confidence: None,
//!         }))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TodoEverything"
//!     }
//! }
//! ```

mod error;
mod trait_def;
mod types;

pub use error::InterpreterError;
pub use trait_def::Interpreter;
pub use types::{category_emoji, Interpretation, ParsedEntry, KNOWN_CATEGORIES};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

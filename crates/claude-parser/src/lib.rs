//! Anthropic-based interpreter implementation.
//!
//! This crate provides an [`Interpreter`] implementation that delegates
//! message understanding to the Anthropic Messages API. The model is asked
//! to classify one free-text message into a life-domain category and
//! extract category-specific fields as JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use claude_parser::ClaudeParser;
//! use parser_core::{Interpretation, Interpreter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let parser = ClaudeParser::from_env()?;
//!
//!     match parser.interpret("Spent $47 on dinner").await? {
//!         Interpretation::Entry(entry) => println!("{}: {}", entry.category, entry.data),
//!         Interpretation::NeedsClarification { question } => println!("? {}", question),
//!     }
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod parser;
mod prompt;

pub use config::ClaudeParserConfig;
pub use parser::ClaudeParser;
pub use prompt::{extract_json, parsing_prompt};

// Re-export parser-core types for convenience
pub use parser_core::{
    async_trait, Interpretation, Interpreter, InterpreterError, ParsedEntry,
};

//! Mock interpreter implementations for bot message processing.
//!
//! This crate provides mock implementations of the `Interpreter` trait for
//! testing:
//! - `StaticParser` - Always returns a configured interpretation
//! - `KeywordParser` - Maps keywords to categories, no AI involved
//!
//! For production interpretation, use the `claude-parser` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_parser::{Interpretation, Interpreter, KeywordParser};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_parser::InterpreterError> {
//!     let parser = KeywordParser::new();
//!
//!     match parser.interpret("spent $12 on coffee").await? {
//!         Interpretation::Entry(entry) => assert_eq!(entry.category, "finance"),
//!         _ => unreachable!(),
//!     }
//!     Ok(())
//! }
//! ```

mod keyword;
mod static_parser;

// Re-export parser-core types for convenience
pub use parser_core::{
    async_trait, Interpretation, Interpreter, InterpreterError, ParsedEntry,
};

pub use keyword::KeywordParser;
pub use static_parser::StaticParser;

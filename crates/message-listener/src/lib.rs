//! Message listener utilities for Lifeboard.
//!
//! This crate connects the Telegram update stream to an interpreter and
//! the entry store: each inbound text message is interpreted, stored, and
//! confirmed back to the sender.
//!
//! # Example
//!
//! ```no_run
//! use message_listener::{MessageProcessor, ProcessorConfig};
//! use mock_parser::KeywordParser;
//! use telegram_api::{BotConfig, TelegramClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TelegramClient::connect(BotConfig::new("123:abc")).await?;
//! let db = database::Database::connect("postgres://localhost/lifeboard").await?;
//!
//! let processor = MessageProcessor::with_defaults(client, KeywordParser::new(), db);
//! processor.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod formatting;
mod processor;

pub use processor::{MessageProcessor, ProcessResult, ProcessorConfig, ProcessorError};

// Re-export commonly used types for convenience.
pub use parser_core::{Interpretation, Interpreter, InterpreterError, ParsedEntry};
pub use telegram_api::{Message, TelegramError, Update};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

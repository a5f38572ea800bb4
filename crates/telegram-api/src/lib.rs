//! Telegram Bot API client library.
//!
//! This crate provides a Rust client for the Telegram Bot API over HTTPS.
//! It supports:
//!
//! - Sending messages and chat actions
//! - Receiving updates via long polling (`getUpdates`)
//! - Health checking via `getMe`
//!
//! # Example
//!
//! ```no_run
//! use telegram_api::{BotConfig, TelegramClient};
//!
//! # async fn example() -> Result<(), telegram_api::TelegramError> {
//! // Connect with a bot token from @BotFather
//! let config = BotConfig::new("123456:ABC-DEF");
//! let client = TelegramClient::connect(config).await?;
//!
//! // Send a message
//! let sent = client.send_message(123456789, "Hello!").await?;
//! println!("Sent message id {}", sent.message_id);
//!
//! // Subscribe to incoming updates
//! use futures::StreamExt;
//! let mut updates = telegram_api::subscribe(&client);
//! while let Some(result) = updates.next().await {
//!     match result {
//!         Ok(update) => {
//!             if let Some(msg) = update.message {
//!                 println!("From chat {}: {:?}", msg.chat.id, msg.text);
//!             }
//!         }
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod poll;
pub mod types;

pub use client::TelegramClient;
pub use config::BotConfig;
pub use error::TelegramError;
pub use poll::{subscribe, subscribe_with_config, PollConfig, RetryConfig, UpdateStream};
pub use types::*;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

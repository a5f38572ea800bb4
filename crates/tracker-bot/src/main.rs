//! Lifeboard Telegram bot.
//!
//! Receives free-text messages, interprets them into categorized entries
//! via the Anthropic API, stores them in Postgres, and confirms back to
//! the sender.

mod config;

use claude_parser::ClaudeParser;
use database::Database;
use message_listener::MessageProcessor;
use telegram_api::{BotConfig, TelegramClient};
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Connect to Telegram
    let bot_config = match &config.telegram_api_url {
        Some(url) => BotConfig::with_api_url(url, &config.telegram_bot_token),
        None => BotConfig::new(&config.telegram_bot_token),
    };
    let client = TelegramClient::connect(bot_config).await?;

    // Build the interpreter
    let parser = ClaudeParser::from_env()?;

    // Run until Ctrl+C
    let processor = MessageProcessor::with_defaults(client, parser, db);
    info!("Lifeboard bot is running");
    processor.run_until_stopped().await?;

    info!("Lifeboard bot stopped");
    Ok(())
}

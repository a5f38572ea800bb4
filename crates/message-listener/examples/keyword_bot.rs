//! Run the bot with the keyword parser - no language model required.
//!
//! Useful for exercising the Telegram + database flow end to end.
//!
//! Usage:
//!   TELEGRAM_BOT_TOKEN=... DATABASE_URL=... cargo run --example keyword_bot

use database::Database;
use message_listener::MessageProcessor;
use mock_parser::KeywordParser;
use telegram_api::{BotConfig, TelegramClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let token = std::env::var("TELEGRAM_BOT_TOKEN")?;
    let database_url = std::env::var("DATABASE_URL")?;

    let db = Database::connect(&database_url).await?;
    db.migrate().await?;

    let client = TelegramClient::connect(BotConfig::new(token)).await?;

    let processor = MessageProcessor::with_defaults(client, KeywordParser::new(), db);
    processor.run().await?;

    Ok(())
}

//! Configuration loaded from environment variables.

use std::env;

/// Bot process configuration.
///
/// The interpreter reads its own `ANTHROPIC_*` variables via
/// `ClaudeParserConfig::from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token.
    pub telegram_bot_token: String,
    /// Postgres database URL.
    pub database_url: String,
    /// Override for the Bot API base URL (e.g., a local Bot API server).
    pub telegram_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TELEGRAM_BOT_TOKEN` | Bot token from @BotFather | (required) |
    /// | `DATABASE_URL` | Postgres database URL | (required) |
    /// | `TELEGRAM_API_URL` | Bot API base URL | `https://api.telegram.org` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_bot_token =
            env::var("TELEGRAM_BOT_TOKEN").map_err(|_| ConfigError::MissingBotToken)?;

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();

        Ok(Self {
            telegram_bot_token,
            database_url,
            telegram_api_url,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN environment variable is required")]
    MissingBotToken,

    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,
}

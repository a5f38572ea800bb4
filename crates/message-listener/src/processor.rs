//! Message processor that connects the Telegram update stream to an
//! Interpreter and the entry store.

use std::time::Duration;

use database::{entry, Database, DatabaseError, NewEntry};
use futures::StreamExt;
use parser_core::{Interpretation, Interpreter, InterpreterError};
use telegram_api::{Message, TelegramClient, TelegramError};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::formatting;

/// Default timeout for interpretation (30 seconds).
const DEFAULT_INTERPRETER_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the message processor.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Whether to process group messages.
    pub process_groups: bool,

    /// Whether to process direct messages.
    pub process_direct: bool,

    /// Whether to send a typing chat action while interpreting.
    pub send_typing_indicators: bool,

    /// Timeout for interpretation. If the interpreter takes longer than
    /// this to respond, the request is cancelled and an error returned.
    /// Default: 30 seconds.
    pub interpreter_timeout: Duration,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            process_groups: true,
            process_direct: true,
            send_typing_indicators: true,
            interpreter_timeout: DEFAULT_INTERPRETER_TIMEOUT,
        }
    }
}

/// Errors that can occur during message processing.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Error from the Telegram API.
    #[error("telegram error: {0}")]
    Telegram(#[from] TelegramError),

    /// Error from the interpreter.
    #[error("interpreter error: {0}")]
    Interpreter(#[from] InterpreterError),

    /// Error from the entry store.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// Interpretation timed out.
    #[error("interpretation timed out after {0:?}")]
    Timeout(Duration),

    /// The update stream ended unexpectedly.
    #[error("update stream ended")]
    StreamEnded,
}

/// Result of processing a single message.
#[derive(Debug)]
pub enum ProcessResult {
    /// Message was interpreted, stored, and confirmed.
    Logged {
        user_id: i64,
        category: String,
        entry_id: i64,
    },
    /// Message was ambiguous; a clarification question was sent back.
    Clarification { user_id: i64, question: String },
    /// A bot command was handled.
    CommandHandled { command: String },
    /// Message was skipped (e.g., no text, from a bot).
    Skipped { reason: String },
    /// Error occurred during processing.
    Error(ProcessorError),
}

/// A message processor that receives Telegram messages, interprets them,
/// and stores the result.
pub struct MessageProcessor<I: Interpreter> {
    client: TelegramClient,
    interpreter: I,
    db: Database,
    config: ProcessorConfig,
}

impl<I: Interpreter> MessageProcessor<I> {
    /// Create a new message processor.
    pub fn new(
        client: TelegramClient,
        interpreter: I,
        db: Database,
        config: ProcessorConfig,
    ) -> Self {
        Self {
            client,
            interpreter,
            db,
            config,
        }
    }

    /// Create a processor with default configuration.
    pub fn with_defaults(client: TelegramClient, interpreter: I, db: Database) -> Self {
        Self::new(client, interpreter, db, ProcessorConfig::default())
    }

    /// Get a reference to the interpreter.
    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }

    /// Get a reference to the client.
    pub fn client(&self) -> &TelegramClient {
        &self.client
    }

    /// Process a single message and return the result.
    pub async fn process_message(&self, message: &Message) -> ProcessResult {
        let text = match should_process(&self.config, message) {
            Ok(text) => text.to_string(),
            Err(reason) => {
                debug!("Skipping message: {}", reason);
                return ProcessResult::Skipped { reason };
            }
        };

        // Sender presence was checked in should_process
        let user_id = match message.sender_id() {
            Some(id) => id,
            None => {
                return ProcessResult::Skipped {
                    reason: "no sender".to_string(),
                }
            }
        };
        let chat_id = message.chat.id;

        if message.is_command() {
            return self.handle_command(chat_id, user_id, &text).await;
        }

        info!("Processing message from {}: {}", user_id, text);

        // Show a typing indicator while interpreting
        if self.config.send_typing_indicators {
            if let Err(e) = self.client.send_chat_action(chat_id, "typing").await {
                warn!("Failed to send typing action: {}", e);
            }
        }

        // Interpret with timeout
        let interpretation =
            match timeout(self.config.interpreter_timeout, self.interpreter.interpret(&text)).await
            {
                Ok(Ok(interpretation)) => interpretation,
                Ok(Err(e)) => {
                    error!("Interpreter error for {}: {}", user_id, e);
                    self.reply_best_effort(chat_id, formatting::parse_failure()).await;
                    return ProcessResult::Error(ProcessorError::Interpreter(e));
                }
                Err(_elapsed) => {
                    error!(
                        "Interpretation timed out for {} after {:?}",
                        user_id, self.config.interpreter_timeout
                    );
                    self.reply_best_effort(chat_id, formatting::parse_failure()).await;
                    return ProcessResult::Error(ProcessorError::Timeout(
                        self.config.interpreter_timeout,
                    ));
                }
            };

        let parsed = match interpretation {
            Interpretation::Entry(parsed) => parsed,
            Interpretation::NeedsClarification { question } => {
                debug!("Asking {} for clarification: {}", user_id, question);
                if let Err(e) = self
                    .client
                    .send_message(chat_id, &format!("\u{1F914} {}", question))
                    .await
                {
                    error!("Failed to send clarification to {}: {}", user_id, e);
                    return ProcessResult::Error(ProcessorError::Telegram(e));
                }
                return ProcessResult::Clarification { user_id, question };
            }
        };

        // Store the entry
        let new_entry = NewEntry::new(user_id, parsed.category, parsed.data);
        let stored = match entry::insert_entry(self.db.pool(), &new_entry).await {
            Ok(stored) => stored,
            Err(e) => {
                error!("Failed to store entry for {}: {}", user_id, e);
                self.reply_best_effort(chat_id, formatting::save_failure()).await;
                return ProcessResult::Error(ProcessorError::Database(e));
            }
        };

        // Confirm what was understood
        let confirmation = formatting::confirmation(&stored.category, &stored.data);
        match self.client.send_message(chat_id, &confirmation).await {
            Ok(_) => {
                info!(
                    "Logged entry {} ({}) for {}",
                    stored.id, stored.category, user_id
                );
                ProcessResult::Logged {
                    user_id,
                    category: stored.category,
                    entry_id: stored.id,
                }
            }
            Err(e) => {
                // The entry is stored; only the confirmation failed
                error!("Failed to send confirmation to {}: {}", user_id, e);
                ProcessResult::Error(ProcessorError::Telegram(e))
            }
        }
    }

    /// Handle a bot command.
    async fn handle_command(&self, chat_id: i64, user_id: i64, text: &str) -> ProcessResult {
        // "/stats@my_bot arg" -> "stats"
        let command = text
            .split_whitespace()
            .next()
            .unwrap_or(text)
            .trim_start_matches('/')
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();

        match command.as_str() {
            "start" => {
                if let Err(e) = self.client.send_message(chat_id, formatting::welcome()).await {
                    return ProcessResult::Error(ProcessorError::Telegram(e));
                }
                ProcessResult::CommandHandled { command }
            }
            "stats" => {
                let counts = match entry::count_by_category(self.db.pool(), user_id).await {
                    Ok(counts) => counts,
                    Err(e) => {
                        error!("Failed to load stats for {}: {}", user_id, e);
                        return ProcessResult::Error(ProcessorError::Database(e));
                    }
                };
                let summary = formatting::stats_summary(&counts);
                if let Err(e) = self.client.send_message(chat_id, &summary).await {
                    return ProcessResult::Error(ProcessorError::Telegram(e));
                }
                ProcessResult::CommandHandled { command }
            }
            other => {
                debug!("Ignoring unknown command: /{}", other);
                ProcessResult::Skipped {
                    reason: format!("unknown command: /{}", other),
                }
            }
        }
    }

    /// Send a reply, logging instead of failing if it cannot be delivered.
    async fn reply_best_effort(&self, chat_id: i64, text: &str) {
        if let Err(e) = self.client.send_message(chat_id, text).await {
            warn!("Failed to send reply to chat {}: {}", chat_id, e);
        }
    }

    /// Run the processor, handling updates until the stream ends.
    ///
    /// This method consumes self and runs indefinitely.
    pub async fn run(self) -> Result<(), ProcessorError> {
        info!(
            "Starting message processor with interpreter: {}",
            self.interpreter.name()
        );

        let mut stream = telegram_api::subscribe(&self.client);

        while let Some(result) = stream.next().await {
            match result {
                Ok(update) => {
                    if let Some(ref message) = update.message {
                        let result = self.process_message(message).await;
                        log_result(&result);
                    }
                }
                Err(e) => {
                    error!("Stream error: {}", e);
                    // Continue on stream errors - the poll loop backs off and retries
                }
            }
        }

        warn!("Update stream ended");
        Err(ProcessorError::StreamEnded)
    }

    /// Run the processor with a callback for each processed message.
    ///
    /// The callback receives each ProcessResult, allowing for custom handling.
    pub async fn run_with_callback<F>(self, mut callback: F) -> Result<(), ProcessorError>
    where
        F: FnMut(ProcessResult) + Send,
    {
        info!(
            "Starting message processor with interpreter: {}",
            self.interpreter.name()
        );

        let mut stream = telegram_api::subscribe(&self.client);

        while let Some(result) = stream.next().await {
            match result {
                Ok(update) => {
                    if let Some(ref message) = update.message {
                        callback(self.process_message(message).await);
                    }
                }
                Err(e) => {
                    error!("Stream error: {}", e);
                    callback(ProcessResult::Error(ProcessorError::Telegram(e)));
                }
            }
        }

        warn!("Update stream ended");
        Err(ProcessorError::StreamEnded)
    }

    /// Run the processor with graceful shutdown support.
    ///
    /// This method runs until either:
    /// - The provided shutdown signal completes
    /// - The update stream ends
    pub async fn run_with_shutdown<S>(self, shutdown_signal: S) -> Result<(), ProcessorError>
    where
        S: std::future::Future<Output = ()> + Send,
    {
        info!(
            "Starting message processor with interpreter: {} (graceful shutdown enabled)",
            self.interpreter.name()
        );

        let mut stream = telegram_api::subscribe(&self.client);

        tokio::pin!(shutdown_signal);

        loop {
            tokio::select! {
                biased;

                // Check for shutdown signal first
                () = &mut shutdown_signal => {
                    info!("Shutdown signal received, stopping message processor");
                    return Ok(());
                }

                // Then handle updates
                result = stream.next() => {
                    match result {
                        Some(Ok(update)) => {
                            if let Some(ref message) = update.message {
                                let result = self.process_message(message).await;
                                log_result(&result);
                            }
                        }
                        Some(Err(e)) => {
                            error!("Stream error: {}", e);
                            // Continue on stream errors - the poll loop backs off and retries
                        }
                        None => {
                            warn!("Update stream ended");
                            return Err(ProcessorError::StreamEnded);
                        }
                    }
                }
            }
        }
    }

    /// Run the processor until Ctrl+C is pressed.
    ///
    /// This is a convenience method that wraps [`run_with_shutdown`] with
    /// the default Ctrl+C signal handler.
    ///
    /// [`run_with_shutdown`]: Self::run_with_shutdown
    #[cfg(feature = "signal")]
    pub async fn run_until_stopped(self) -> Result<(), ProcessorError> {
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        };
        self.run_with_shutdown(shutdown).await
    }
}

/// Check if a message should be processed, returning its text.
fn should_process<'m>(config: &ProcessorConfig, message: &'m Message) -> Result<&'m str, String> {
    let sender = message
        .from
        .as_ref()
        .ok_or_else(|| "no sender".to_string())?;

    if sender.is_bot {
        return Err("message from a bot".to_string());
    }

    let text = message
        .text()
        .ok_or_else(|| "no text content".to_string())?;

    let is_private = message.chat.is_private();
    if is_private && !config.process_direct {
        return Err("direct messages disabled".to_string());
    }
    if !is_private && !config.process_groups {
        return Err("group messages disabled".to_string());
    }

    Ok(text)
}

/// Log one processing result at the appropriate level.
fn log_result(result: &ProcessResult) {
    match result {
        ProcessResult::Logged {
            user_id,
            category,
            entry_id,
        } => {
            debug!("Logged entry {} ({}) for {}", entry_id, category, user_id);
        }
        ProcessResult::Clarification { user_id, .. } => {
            debug!("Asked {} for clarification", user_id);
        }
        ProcessResult::CommandHandled { command } => {
            debug!("Handled command /{}", command);
        }
        ProcessResult::Skipped { reason } => {
            debug!("Skipped: {}", reason);
        }
        ProcessResult::Error(e) => {
            // Log but continue processing
            warn!("Error processing message: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telegram_api::{Chat, User};

    fn make_test_message(sender_id: i64, text: &str) -> Message {
        Message {
            message_id: 1,
            from: Some(User {
                id: sender_id,
                is_bot: false,
                first_name: "Test".to_string(),
                username: None,
            }),
            chat: Chat {
                id: sender_id,
                kind: "private".to_string(),
            },
            date: 1234567890,
            text: Some(text.to_string()),
        }
    }

    fn make_group_message(sender_id: i64, text: &str) -> Message {
        Message {
            chat: Chat {
                id: -100200300,
                kind: "supergroup".to_string(),
            },
            ..make_test_message(sender_id, text)
        }
    }

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert!(config.process_groups);
        assert!(config.process_direct);
        assert!(config.send_typing_indicators);
        assert_eq!(config.interpreter_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_should_process_text_message() {
        let config = ProcessorConfig::default();
        let message = make_test_message(1111, "Spent $47 on dinner");
        assert_eq!(should_process(&config, &message), Ok("Spent $47 on dinner"));
    }

    #[test]
    fn test_should_process_skips_bots() {
        let config = ProcessorConfig::default();
        let mut message = make_test_message(1111, "hello");
        message.from.as_mut().unwrap().is_bot = true;

        assert!(should_process(&config, &message).is_err());
    }

    #[test]
    fn test_should_process_skips_non_text() {
        let config = ProcessorConfig::default();
        let mut message = make_test_message(1111, "unused");
        message.text = None;

        assert_eq!(
            should_process(&config, &message),
            Err("no text content".to_string())
        );
    }

    #[test]
    fn test_should_process_group_filtering() {
        let config = ProcessorConfig {
            process_groups: false,
            ..Default::default()
        };

        let group = make_group_message(1111, "hello");
        assert_eq!(
            should_process(&config, &group),
            Err("group messages disabled".to_string())
        );

        // Direct messages still flow
        let direct = make_test_message(1111, "hello");
        assert!(should_process(&config, &direct).is_ok());
    }

    #[test]
    fn test_message_shape_helpers() {
        let message = make_test_message(1111, "Spent $47 on dinner");
        assert_eq!(message.sender_id(), Some(1111));
        assert_eq!(message.text(), Some("Spent $47 on dinner"));
        assert!(!message.is_command());

        let command = make_test_message(1111, "/stats");
        assert!(command.is_command());
    }

    #[test]
    fn test_command_name_extraction() {
        // Mirrors the parsing in handle_command
        let extract = |text: &str| -> String {
            text.split_whitespace()
                .next()
                .unwrap_or(text)
                .trim_start_matches('/')
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string()
        };

        assert_eq!(extract("/start"), "start");
        assert_eq!(extract("/stats@lifeboard_bot"), "stats");
        assert_eq!(extract("/stats extra args"), "stats");
    }
}

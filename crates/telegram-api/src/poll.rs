//! Long-polling update stream.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::stream::{self, Stream};
use tracing::{info, warn};

use crate::error::TelegramError;
use crate::types::Update;
use crate::TelegramClient;

/// Configuration for retrying after transport errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of consecutive retries (None = infinite).
    pub max_retries: Option<u32>,
    /// Initial delay before first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Backoff multiplier for each retry.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: None,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Calculate delay for a given attempt number.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay_ms = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        let delay = Duration::from_millis(delay_ms as u64);
        delay.min(self.max_delay)
    }

    /// Check if we should retry after the given number of attempts.
    pub fn should_retry(&self, attempts: u32) -> bool {
        self.max_retries.map_or(true, |max| attempts < max)
    }
}

/// Configuration for the long-poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Server-side long-poll timeout in seconds.
    pub poll_timeout_secs: u64,
    /// Retry behavior after transport errors.
    pub retry: RetryConfig,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

/// Internal polling state carried between stream steps.
struct PollState {
    client: TelegramClient,
    config: PollConfig,
    /// Next update offset; updates below it are confirmed to the server.
    offset: Option<i64>,
    /// Updates fetched but not yet yielded.
    buffer: VecDeque<Update>,
    /// Consecutive transport failures.
    attempts: u32,
    done: bool,
}

/// A stream of incoming Telegram updates.
///
/// Wraps the `getUpdates` long-poll loop. Each yielded update advances the
/// confirmed offset, so an update is delivered at most once per stream.
/// Transport errors are yielded (after a backoff sleep) and polling
/// continues, until the configured retries are exhausted.
pub struct UpdateStream {
    inner: Pin<Box<dyn Stream<Item = Result<Update, TelegramError>> + Send>>,
}

impl UpdateStream {
    /// Create a new update stream from a TelegramClient.
    pub fn new(client: &TelegramClient) -> Self {
        Self::with_config(client, PollConfig::default())
    }

    /// Create a new update stream with custom poll configuration.
    pub fn with_config(client: &TelegramClient, config: PollConfig) -> Self {
        info!(
            "Starting update long poll (timeout={}s)",
            config.poll_timeout_secs
        );

        let state = PollState {
            client: client.clone(),
            config,
            offset: None,
            buffer: VecDeque::new(),
            attempts: 0,
            done: false,
        };

        let inner = stream::unfold(state, |mut state| async move {
            if state.done {
                return None;
            }

            loop {
                if let Some(update) = state.buffer.pop_front() {
                    state.offset = Some(update.update_id + 1);
                    return Some((Ok(update), state));
                }

                match state
                    .client
                    .get_updates(state.offset, state.config.poll_timeout_secs)
                    .await
                {
                    Ok(updates) => {
                        state.attempts = 0;
                        // An empty batch just means the long poll expired;
                        // loop around and poll again.
                        state.buffer.extend(updates);
                    }
                    Err(e) => {
                        let attempt = state.attempts;
                        state.attempts += 1;

                        if !state.config.retry.should_retry(attempt) {
                            warn!("Update polling giving up after {} attempts", attempt + 1);
                            state.done = true;
                            return Some((Err(e), state));
                        }

                        let delay = state.config.retry.delay_for_attempt(attempt);
                        warn!(
                            "getUpdates failed (attempt {}), retrying in {:?}: {}",
                            attempt + 1,
                            delay,
                            e
                        );
                        tokio::time::sleep(delay).await;
                        return Some((Err(e), state));
                    }
                }
            }
        });

        Self {
            inner: Box::pin(inner),
        }
    }
}

impl Stream for UpdateStream {
    type Item = Result<Update, TelegramError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Create an update stream from a TelegramClient.
pub fn subscribe(client: &TelegramClient) -> UpdateStream {
    UpdateStream::new(client)
}

/// Create an update stream with custom poll configuration.
pub fn subscribe_with_config(client: &TelegramClient, config: PollConfig) -> UpdateStream {
    UpdateStream::with_config(client, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_for_attempt_backoff() {
        let config = RetryConfig::default();

        assert_eq!(config.delay_for_attempt(0), Duration::from_millis(500));
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(1000));
        assert_eq!(config.delay_for_attempt(2), Duration::from_millis(2000));
    }

    #[test]
    fn test_delay_for_attempt_capped() {
        let config = RetryConfig::default();
        // Large attempt numbers hit the cap
        assert_eq!(config.delay_for_attempt(20), Duration::from_secs(30));
    }

    #[test]
    fn test_should_retry_infinite() {
        let config = RetryConfig::default();
        assert!(config.should_retry(0));
        assert!(config.should_retry(1_000_000));
    }

    #[test]
    fn test_should_retry_bounded() {
        let config = RetryConfig {
            max_retries: Some(3),
            ..Default::default()
        };
        assert!(config.should_retry(0));
        assert!(config.should_retry(2));
        assert!(!config.should_retry(3));
    }

    #[test]
    fn test_poll_config_default() {
        let config = PollConfig::default();
        assert_eq!(config.poll_timeout_secs, 30);
        assert!(config.retry.max_retries.is_none());
    }
}

//! Telegram Bot API HTTP client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::BotConfig;
use crate::error::TelegramError;
use crate::types::{
    ApiResponse, ChatActionParams, GetUpdatesParams, Message, SendMessageParams, Update, User,
};

/// Timeout for regular (non-polling) API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Extra headroom on top of the long-poll timeout, so the HTTP request
/// outlives the server-side wait.
const POLL_TIMEOUT_HEADROOM: Duration = Duration::from_secs(10);

/// Client for communicating with the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    config: BotConfig,
    connected: Arc<AtomicBool>,
}

impl TelegramClient {
    /// Connect to the Bot API and verify the token with `getMe`.
    pub async fn connect(config: BotConfig) -> Result<Self, TelegramError> {
        if config.token.is_empty() {
            return Err(TelegramError::Config("bot token is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TelegramError::Http)?;

        let client = Self {
            http,
            config,
            connected: Arc::new(AtomicBool::new(false)),
        };

        // Verify the token with a getMe health check
        let me = client.get_me().await.map_err(|e| {
            debug!("getMe failed during connect: {}", e);
            TelegramError::HealthCheckFailed
        })?;
        client.connected.store(true, Ordering::SeqCst);
        info!(
            "Connected to Telegram Bot API as @{}",
            me.username.as_deref().unwrap_or(&me.first_name)
        );

        Ok(client)
    }

    /// Check if currently connected to the API.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Perform a health check against the API.
    pub async fn health_check(&self) -> Result<bool, TelegramError> {
        match self.get_me().await {
            Ok(_) => {
                self.connected.store(true, Ordering::SeqCst);
                Ok(true)
            }
            Err(e) => {
                self.connected.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    /// Get information about the bot account.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.api_call::<(), _>("getMe", None).await
    }

    /// Send a plain text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, TelegramError> {
        let params = SendMessageParams::text(chat_id, text);
        self.api_call("sendMessage", Some(params)).await
    }

    /// Send a chat action (e.g. a typing indicator) to a chat.
    pub async fn send_chat_action(&self, chat_id: i64, action: &str) -> Result<(), TelegramError> {
        let params = ChatActionParams {
            chat_id,
            action: action.to_string(),
        };
        // sendChatAction returns a bare boolean on success
        let _: bool = self.api_call("sendChatAction", Some(params)).await?;
        Ok(())
    }

    /// Fetch pending updates via long polling.
    ///
    /// Blocks server-side for up to `timeout_secs` when no updates are
    /// pending. Pass the last seen `update_id + 1` as `offset` to confirm
    /// previously fetched updates.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let params = GetUpdatesParams {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["message".to_string()],
        };

        let url = self.config.method_url("getUpdates");
        debug!("getUpdates (offset={:?}, timeout={}s)", offset, timeout_secs);

        // The request timeout must outlive the server-side long poll.
        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(timeout_secs) + POLL_TIMEOUT_HEADROOM)
            .json(&params)
            .send()
            .await
            .map_err(TelegramError::Http)?;

        Self::unwrap_response(response.json().await.map_err(TelegramError::Http)?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Make a Bot API call.
    async fn api_call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<P>,
    ) -> Result<R, TelegramError> {
        let url = self.config.method_url(method);
        debug!("API call: {}", method);

        let mut request = self.http.post(&url);
        if let Some(ref params) = params {
            request = request.json(params);
        }

        let response = request.send().await.map_err(TelegramError::Http)?;

        // The Bot API reports errors in the JSON envelope, with a matching
        // non-2xx status; prefer the envelope's description when present.
        let status = response.status();
        let body = response.text().await.map_err(TelegramError::Http)?;

        match serde_json::from_str::<ApiResponse<R>>(&body) {
            Ok(api_response) => Self::unwrap_response(api_response),
            Err(_) if !status.is_success() => Err(TelegramError::Connection(format!(
                "HTTP {}: {}",
                status, body
            ))),
            Err(e) => Err(TelegramError::Json(e)),
        }
    }

    /// Turn an API response envelope into a result.
    fn unwrap_response<R>(response: ApiResponse<R>) -> Result<R, TelegramError> {
        if !response.ok {
            return Err(TelegramError::Api {
                code: response.error_code.unwrap_or(-1),
                description: response
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        response.result.ok_or_else(|| TelegramError::Api {
            code: -1,
            description: "No result in response".to_string(),
        })
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("config", &self.config)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_response_ok() {
        let response = ApiResponse {
            ok: true,
            result: Some(42i64),
            error_code: None,
            description: None,
        };
        assert_eq!(TelegramClient::unwrap_response(response).unwrap(), 42);
    }

    #[test]
    fn test_unwrap_response_error() {
        let response: ApiResponse<i64> = ApiResponse {
            ok: false,
            result: None,
            error_code: Some(401),
            description: Some("Unauthorized".to_string()),
        };
        let err = TelegramClient::unwrap_response(response).unwrap_err();
        match err {
            TelegramError::Api { code, description } => {
                assert_eq!(code, 401);
                assert_eq!(description, "Unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_response_missing_result() {
        let response: ApiResponse<i64> = ApiResponse {
            ok: true,
            result: None,
            error_code: None,
            description: None,
        };
        assert!(matches!(
            TelegramClient::unwrap_response(response),
            Err(TelegramError::Api { .. })
        ));
    }
}

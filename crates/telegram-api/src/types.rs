//! Telegram Bot API wire types.
//!
//! Only the fields this bot actually uses are modeled; unknown fields in
//! API responses are ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Envelope for every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded.
    pub ok: bool,
    /// The result payload, present when `ok` is true.
    pub result: Option<T>,
    /// Error code, present when `ok` is false.
    pub error_code: Option<i64>,
    /// Human-readable error description, present when `ok` is false.
    pub description: Option<String>,
}

/// An incoming update from `getUpdates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Update {
    /// Monotonically increasing update identifier.
    pub update_id: i64,
    /// New incoming message, if this update carries one.
    #[serde(default)]
    pub message: Option<Message>,
}

/// A Telegram message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    /// Unique message identifier within the chat.
    pub message_id: i64,
    /// Sender of the message. Absent for channel posts.
    #[serde(default)]
    pub from: Option<User>,
    /// Chat the message belongs to.
    pub chat: Chat,
    /// Unix timestamp the message was sent at.
    #[serde(default)]
    pub date: i64,
    /// Text content, for text messages.
    #[serde(default)]
    pub text: Option<String>,
}

impl Message {
    /// Text content of the message, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sender id, if the message has a sender.
    pub fn sender_id(&self) -> Option<i64> {
        self.from.as_ref().map(|user| user.id)
    }

    /// Whether the text starts a bot command ("/start", "/stats", ...).
    pub fn is_command(&self) -> bool {
        self.text().map(|t| t.starts_with('/')).unwrap_or(false)
    }
}

/// A Telegram user or bot account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Whether this account is a bot.
    #[serde(default)]
    pub is_bot: bool,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Username, without the leading @.
    #[serde(default)]
    pub username: Option<String>,
}

/// A Telegram chat (private conversation, group, or channel).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: i64,
    /// Chat type: "private", "group", "supergroup", or "channel".
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Chat {
    /// Whether this is a one-on-one conversation with the bot.
    pub fn is_private(&self) -> bool {
        self.kind == "private"
    }
}

/// Parameters for `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageParams {
    /// Target chat id.
    pub chat_id: i64,
    /// Text to send.
    pub text: String,
}

impl SendMessageParams {
    /// Create send parameters for a plain text message.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
        }
    }
}

/// Parameters for `sendChatAction`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatActionParams {
    /// Target chat id.
    pub chat_id: i64,
    /// Action name, e.g. "typing".
    pub action: String,
}

/// Parameters for `getUpdates`.
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesParams {
    /// Identifier of the first update to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Long-poll timeout in seconds.
    pub timeout: u64,
    /// Update kinds to receive.
    pub allowed_updates: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_with_text() {
        let json = r#"{
            "update_id": 10001,
            "message": {
                "message_id": 1365,
                "from": {"id": 1111, "is_bot": false, "first_name": "Ada"},
                "chat": {"id": 1111, "type": "private"},
                "date": 1441645532,
                "text": "Spent $47 on dinner"
            }
        }"#;

        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 10001);
        let message = update.message.unwrap();
        assert_eq!(message.text(), Some("Spent $47 on dinner"));
        assert_eq!(message.sender_id(), Some(1111));
        assert!(message.chat.is_private());
        assert!(!message.is_command());
    }

    #[test]
    fn test_parse_update_without_message() {
        // Edited messages, polls etc. arrive without a "message" field.
        let json = r#"{"update_id": 10002, "edited_message": {"message_id": 7}}"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn test_command_detection() {
        let message = Message {
            text: Some("/start".to_string()),
            ..Default::default()
        };
        assert!(message.is_command());

        let message = Message {
            text: Some("start".to_string()),
            ..Default::default()
        };
        assert!(!message.is_command());
    }

    #[test]
    fn test_get_updates_params_skip_offset() {
        let params = GetUpdatesParams {
            offset: None,
            timeout: 30,
            allowed_updates: vec!["message".to_string()],
        };
        let encoded = serde_json::to_string(&params).unwrap();
        assert!(!encoded.contains("offset"));
    }
}

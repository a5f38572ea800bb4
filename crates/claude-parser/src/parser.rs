//! ClaudeParser implementation using the Anthropic Messages API.

use std::time::Duration;

use chrono::Utc;
use parser_core::{async_trait, Interpretation, Interpreter, InterpreterError, ParsedEntry};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, ApiMessage, MessagesRequest, MessagesResponse};
use crate::config::ClaudeParserConfig;
use crate::prompt::{extract_json, parsing_prompt};

/// API version header required by the Messages API.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Timeout for one parse request.
const API_TIMEOUT: Duration = Duration::from_secs(30);

/// An interpreter that delegates message understanding to the Anthropic
/// Messages API.
///
/// Each message is sent with the parsing prompt; the model's JSON reply is
/// mapped to an [`Interpretation`]. Replies flagged as needing
/// clarification (or below the configured confidence floor) become
/// clarification questions, and replies that are not the requested JSON
/// structure are malformed-response errors.
pub struct ClaudeParser {
    client: Client,
    config: ClaudeParserConfig,
}

/// The JSON structure the model is asked to return.
#[derive(Debug, Deserialize)]
struct ParserOutput {
    category: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    needs_clarification: bool,
    #[serde(default)]
    clarification_question: Option<String>,
}

impl ClaudeParser {
    /// Create a new ClaudeParser with the given configuration.
    pub fn new(config: ClaudeParserConfig) -> Result<Self, InterpreterError> {
        let client = Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .map_err(|e| {
                InterpreterError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "ClaudeParser initialized with model: {}, min_confidence: {}",
            config.model, config.min_confidence
        );

        Ok(Self { client, config })
    }

    /// Create a ClaudeParser from environment variables.
    ///
    /// See [`ClaudeParserConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, InterpreterError> {
        let config = ClaudeParserConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClaudeParserConfig {
        &self.config
    }

    /// Make a Messages API request.
    async fn messages_request(
        &self,
        messages: Vec<ApiMessage>,
    ) -> Result<MessagesResponse, InterpreterError> {
        let url = format!("{}/v1/messages", self.config.api_url);

        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages,
        };

        debug!("Sending request to Anthropic API: model={}", request.model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| InterpreterError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(InterpreterError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(InterpreterError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: MessagesResponse = response.json().await.map_err(|e| {
            InterpreterError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(ref usage) = completion.usage {
            debug!(
                "Token usage - input: {}, output: {}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(completion)
    }

    /// Map the model's JSON reply to an interpretation.
    fn to_interpretation(&self, raw: &str) -> Result<Interpretation, InterpreterError> {
        let output: ParserOutput = serde_json::from_str(extract_json(raw)).map_err(|e| {
            warn!("Model reply was not the requested JSON: {}", e);
            InterpreterError::MalformedResponse(format!("invalid parse JSON: {}", e))
        })?;

        let below_floor = output
            .confidence
            .map(|c| c < self.config.min_confidence)
            .unwrap_or(false);

        if output.needs_clarification || below_floor {
            let question = output
                .clarification_question
                .unwrap_or_else(|| "Could you provide more details?".to_string());
            return Ok(Interpretation::NeedsClarification { question });
        }

        if output.category.trim().is_empty() {
            return Err(InterpreterError::MalformedResponse(
                "empty category in parse result".to_string(),
            ));
        }

        let data = output.data.ok_or_else(|| {
            InterpreterError::MalformedResponse("missing data in parse result".to_string())
        })?;

        Ok(Interpretation::Entry(ParsedEntry {
            category: output.category,
            data,
            confidence: output.confidence,
        }))
    }
}

#[async_trait]
impl Interpreter for ClaudeParser {
    async fn interpret(&self, text: &str) -> Result<Interpretation, InterpreterError> {
        debug!("Interpreting message: {}", text);

        let current_date = Utc::now().format("%Y-%m-%d").to_string();
        let content = format!("{}\n\nMessage: {}", parsing_prompt(&current_date), text);

        let completion = self.messages_request(vec![ApiMessage::user(content)]).await?;

        let reply = completion.first_text().ok_or_else(|| {
            InterpreterError::MalformedResponse("no text content in response".to_string())
        })?;

        self.to_interpretation(reply)
    }

    fn name(&self) -> &str {
        "ClaudeParser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_parser() -> ClaudeParser {
        let config = ClaudeParserConfig::builder().api_key("test-key").build();
        ClaudeParser::new(config).unwrap()
    }

    #[test]
    fn test_parser_name() {
        assert_eq!(test_parser().name(), "ClaudeParser");
    }

    #[test]
    fn test_to_interpretation_entry() {
        let parser = test_parser();
        let raw = r#"{"category": "finance", "data": {"amount": 47, "description": "dinner"}, "confidence": 0.95, "needs_clarification": false}"#;

        let interp = parser.to_interpretation(raw).unwrap();
        match interp {
            Interpretation::Entry(entry) => {
                assert_eq!(entry.category, "finance");
                assert_eq!(entry.data["amount"], json!(47));
                assert_eq!(entry.confidence, Some(0.95));
            }
            other => panic!("unexpected interpretation: {other:?}"),
        }
    }

    #[test]
    fn test_to_interpretation_fenced_reply() {
        let parser = test_parser();
        let raw = "```json\n{\"category\": \"todos\", \"data\": {\"task\": \"buy milk\"}}\n```";

        let interp = parser.to_interpretation(raw).unwrap();
        assert!(matches!(interp, Interpretation::Entry(_)));
    }

    #[test]
    fn test_to_interpretation_needs_clarification() {
        let parser = test_parser();
        let raw = r#"{"category": "unknown", "needs_clarification": true, "clarification_question": "What did you spend on?"}"#;

        let interp = parser.to_interpretation(raw).unwrap();
        assert_eq!(
            interp,
            Interpretation::NeedsClarification {
                question: "What did you spend on?".to_string()
            }
        );
    }

    #[test]
    fn test_to_interpretation_clarification_default_question() {
        let parser = test_parser();
        let raw = r#"{"category": "unknown", "needs_clarification": true}"#;

        match parser.to_interpretation(raw).unwrap() {
            Interpretation::NeedsClarification { question } => {
                assert_eq!(question, "Could you provide more details?");
            }
            other => panic!("unexpected interpretation: {other:?}"),
        }
    }

    #[test]
    fn test_to_interpretation_low_confidence() {
        let config = ClaudeParserConfig::builder()
            .api_key("test-key")
            .min_confidence(0.8)
            .build();
        let parser = ClaudeParser::new(config).unwrap();

        let raw = r#"{"category": "finance", "data": {"amount": 1}, "confidence": 0.3}"#;
        assert!(matches!(
            parser.to_interpretation(raw).unwrap(),
            Interpretation::NeedsClarification { .. }
        ));
    }

    #[test]
    fn test_to_interpretation_not_json() {
        let parser = test_parser();
        let result = parser.to_interpretation("I couldn't parse that message, sorry!");
        assert!(matches!(
            result,
            Err(InterpreterError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_to_interpretation_missing_data() {
        let parser = test_parser();
        let raw = r#"{"category": "finance"}"#;
        assert!(matches!(
            parser.to_interpretation(raw),
            Err(InterpreterError::MalformedResponse(_))
        ));
    }
}

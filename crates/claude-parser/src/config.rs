//! Configuration for ClaudeParser.

use std::env;

use parser_core::InterpreterError;

/// Configuration for ClaudeParser.
#[derive(Debug, Clone)]
pub struct ClaudeParserConfig {
    /// Anthropic API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for the parse response.
    pub max_tokens: u32,

    /// Confidence floor: a parse below this is treated as needing
    /// clarification. 0.0 disables the check.
    pub min_confidence: f64,
}

impl Default for ClaudeParserConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.anthropic.com".to_string(),
            api_key: String::new(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
            min_confidence: 0.0,
        }
    }
}

impl ClaudeParserConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ANTHROPIC_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `ANTHROPIC_API_URL` - API URL (default: https://api.anthropic.com)
    /// - `ANTHROPIC_MODEL` - Model name (default: claude-sonnet-4-20250514)
    /// - `ANTHROPIC_MAX_TOKENS` - Max tokens (default: 1024)
    /// - `ANTHROPIC_MIN_CONFIDENCE` - Confidence floor (default: 0.0)
    pub fn from_env() -> Result<Self, InterpreterError> {
        let api_key = env::var("ANTHROPIC_API_KEY")
            .map_err(|_| InterpreterError::Configuration("ANTHROPIC_API_KEY not set".to_string()))?;

        let api_url = env::var("ANTHROPIC_API_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com".to_string());

        let model = env::var("ANTHROPIC_MODEL")
            .unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string());

        let max_tokens = env::var("ANTHROPIC_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        let min_confidence = env::var("ANTHROPIC_MIN_CONFIDENCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0);

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
            min_confidence,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> ClaudeParserConfigBuilder {
        ClaudeParserConfigBuilder::default()
    }
}

/// Builder for ClaudeParserConfig.
#[derive(Debug, Default)]
pub struct ClaudeParserConfigBuilder {
    config: ClaudeParserConfig,
}

impl ClaudeParserConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = tokens;
        self
    }

    /// Set the confidence floor.
    pub fn min_confidence(mut self, floor: f64) -> Self {
        self.config.min_confidence = floor;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClaudeParserConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClaudeParserConfig::default();

        assert_eq!(config.api_url, "https://api.anthropic.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.min_confidence, 0.0);
    }

    #[test]
    fn test_builder_all_options() {
        let config = ClaudeParserConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("claude-test")
            .max_tokens(512)
            .min_confidence(0.5)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "claude-test");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.min_confidence, 0.5);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_anthropic_vars() {
            std::env::remove_var("ANTHROPIC_API_KEY");
            std::env::remove_var("ANTHROPIC_API_URL");
            std::env::remove_var("ANTHROPIC_MODEL");
            std::env::remove_var("ANTHROPIC_MAX_TOKENS");
            std::env::remove_var("ANTHROPIC_MIN_CONFIDENCE");
        }

        // Scenario 1: Missing API key should error
        clear_all_anthropic_vars();
        let result = ClaudeParserConfig::from_env();
        assert!(result.is_err());
        match result.unwrap_err() {
            InterpreterError::Configuration(msg) => {
                assert!(msg.contains("ANTHROPIC_API_KEY"));
            }
            _ => panic!("Expected Configuration error"),
        }

        // Scenario 2: Only API key set, defaults used
        clear_all_anthropic_vars();
        std::env::set_var("ANTHROPIC_API_KEY", "test-env-key");

        let config = ClaudeParserConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://api.anthropic.com");
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 1024);

        // Scenario 3: All vars set
        clear_all_anthropic_vars();
        std::env::set_var("ANTHROPIC_API_KEY", "full-test-key");
        std::env::set_var("ANTHROPIC_API_URL", "https://test.api.com");
        std::env::set_var("ANTHROPIC_MODEL", "claude-test-1");
        std::env::set_var("ANTHROPIC_MAX_TOKENS", "2048");
        std::env::set_var("ANTHROPIC_MIN_CONFIDENCE", "0.4");

        let config = ClaudeParserConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "claude-test-1");
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.min_confidence, 0.4);

        // Cleanup
        clear_all_anthropic_vars();
    }
}

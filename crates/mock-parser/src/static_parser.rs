//! Static parser implementation - always returns the same interpretation.

use async_trait::async_trait;
use parser_core::{Interpretation, Interpreter, InterpreterError, ParsedEntry};

/// An interpreter that returns a fixed interpretation for every message.
///
/// Useful for exercising the message flow without any language model.
#[derive(Debug, Clone)]
pub struct StaticParser {
    interpretation: Interpretation,
}

impl StaticParser {
    /// Create a parser that always returns the given interpretation.
    pub fn new(interpretation: Interpretation) -> Self {
        Self { interpretation }
    }

    /// Create a parser that always returns an entry with the given category.
    pub fn entry(category: impl Into<String>, data: serde_json::Value) -> Self {
        Self::new(Interpretation::Entry(ParsedEntry::new(category, data)))
    }

    /// Create a parser that always asks for clarification.
    pub fn clarification(question: impl Into<String>) -> Self {
        Self::new(Interpretation::NeedsClarification {
            question: question.into(),
        })
    }
}

#[async_trait]
impl Interpreter for StaticParser {
    async fn interpret(&self, _text: &str) -> Result<Interpretation, InterpreterError> {
        Ok(self.interpretation.clone())
    }

    fn name(&self) -> &str {
        "StaticParser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_entry() {
        let parser = StaticParser::entry("finance", json!({"amount": 47}));

        let interp = parser.interpret("anything at all").await.unwrap();
        match interp {
            Interpretation::Entry(entry) => {
                assert_eq!(entry.category, "finance");
                assert_eq!(entry.data["amount"], 47);
            }
            other => panic!("unexpected interpretation: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_static_clarification() {
        let parser = StaticParser::clarification("Which category?");

        let interp = parser.interpret("hm").await.unwrap();
        assert_eq!(
            interp,
            Interpretation::NeedsClarification {
                question: "Which category?".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_parser_name() {
        let parser = StaticParser::clarification("?");
        assert_eq!(parser.name(), "StaticParser");
        assert!(parser.is_ready().await);
    }
}

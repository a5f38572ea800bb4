//! Keyword parser implementation - category by keyword match.

use async_trait::async_trait;
use parser_core::{Interpretation, Interpreter, InterpreterError, ParsedEntry};
use serde_json::json;

/// Keyword table: any match assigns the category.
const RULES: &[(&str, &[&str])] = &[
    ("finance", &["spent", "paid", "bought", "$", "bill"]),
    ("fitness", &["workout", "gym", "ran", "squats", "bench"]),
    ("dating", &["date", "match", "coffee with"]),
    ("relationships", &["call mom", "call dad", "friend", "family"]),
    ("trips", &["trip", "flight", "hotel", "travel"]),
    ("todos", &["todo", "remind", "task", "need to"]),
];

/// An interpreter that assigns categories by keyword, with the whole
/// message as the note payload.
///
/// No network, no model - deterministic by construction. Messages that
/// match no rule produce a clarification question, mirroring how the real
/// parser treats unclassifiable input.
#[derive(Debug, Clone, Default)]
pub struct KeywordParser;

impl KeywordParser {
    /// Create a new KeywordParser.
    pub fn new() -> Self {
        Self
    }

    /// Find the category for a message, if any rule matches.
    pub fn match_category(text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(category, _)| *category)
    }
}

#[async_trait]
impl Interpreter for KeywordParser {
    async fn interpret(&self, text: &str) -> Result<Interpretation, InterpreterError> {
        match Self::match_category(text) {
            Some(category) => Ok(Interpretation::Entry(ParsedEntry::new(
                category,
                json!({ "note": text }),
            ))),
            None => Ok(Interpretation::NeedsClarification {
                question: "Which category does that belong to?".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "KeywordParser"
    }
}

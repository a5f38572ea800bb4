//! Interpretation result types and category helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The structured result of interpreting one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Interpretation {
    /// The message was understood and can be stored.
    Entry(ParsedEntry),

    /// The message was too ambiguous to store; ask the user this question.
    NeedsClarification {
        /// Question to send back to the user.
        question: String,
    },
}

/// A parsed entry: the `(category, data)` pair produced from one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEntry {
    /// Life domain this entry belongs to (e.g. "finance", "fitness").
    /// Free text - the set is open-ended, not a closed enum.
    pub category: String,
    /// Category-specific fields extracted from the message.
    pub data: Value,
    /// Model confidence in the parse (0.0 - 1.0), if reported.
    pub confidence: Option<f64>,
}

impl ParsedEntry {
    /// Create a parsed entry with no confidence signal.
    pub fn new(category: impl Into<String>, data: Value) -> Self {
        Self {
            category: category.into(),
            data,
            confidence: None,
        }
    }
}

/// The well-known categories, as suggested to the language service.
///
/// Entries are not restricted to this set; it exists for prompting and
/// display defaults.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "finance",
    "fitness",
    "relationships",
    "dating",
    "trips",
    "todos",
];

/// Emoji used when confirming an entry of the given category.
///
/// Unknown categories get a generic note emoji.
pub fn category_emoji(category: &str) -> &'static str {
    match category {
        "finance" => "\u{1F4B0}",       // 💰
        "fitness" => "\u{1F4AA}",       // 💪
        "relationships" => "\u{1F465}", // 👥
        "dating" => "\u{1F495}",        // 💕
        "trips" => "\u{2708}\u{FE0F}",  // ✈️
        "todos" => "\u{2705}",          // ✅
        _ => "\u{1F4DD}",               // 📝
    }
}

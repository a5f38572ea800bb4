//! Reply texts sent back to the user.
//!
//! Confirmations are short, human-readable summaries of what was stored,
//! built from the category-specific fields the interpreter extracted.

use parser_core::category_emoji;
use serde_json::Value;

/// Welcome text for the /start command.
pub fn welcome() -> &'static str {
    "\u{1F44B} Welcome to your Personal Dashboard Bot!\n\n\
     Just send me messages like:\n\
     \u{2022} 'Spent $50 on groceries'\n\
     \u{2022} 'Workout: bench press 185x5'\n\
     \u{2022} 'Coffee with Alex tomorrow at 3pm'\n\
     \u{2022} 'Tokyo trip April 15-22'\n\n\
     I'll parse them and add to your dashboard!"
}

/// Confirmation text for one stored entry.
pub fn confirmation(category: &str, data: &Value) -> String {
    let emoji = category_emoji(category);
    let summary = match category {
        "finance" => format!(
            "${} - {}",
            field(data, "amount"),
            field(data, "description")
        ),
        "fitness" => {
            let exercise = data
                .get("exercise")
                .and_then(Value::as_str)
                .unwrap_or("workout");
            let mut line = title_case(exercise);
            if let Some(weight) = data.get("weight") {
                line.push_str(&format!(" - {}lbs", render(weight)));
            }
            line
        }
        "dating" => {
            let activity = data
                .get("activity")
                .and_then(Value::as_str)
                .unwrap_or("date");
            format!("{} with {}", title_case(activity), field(data, "person"))
        }
        "trips" => field(data, "destination"),
        _ => serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()),
    };

    format!("{} Logged to {}:\n{}", emoji, category, summary)
}

/// Stats text for the /stats command.
pub fn stats_summary(counts: &[(String, i64)]) -> String {
    if counts.is_empty() {
        return "\u{1F4CA} No entries yet. Send me something to track!".to_string();
    }

    let mut text = String::from("\u{1F4CA} Your Stats:\n\n");
    for (category, count) in counts {
        let noun = if *count == 1 { "entry" } else { "entries" };
        text.push_str(&format!(
            "{} {}: {} {}\n",
            category_emoji(category),
            title_case(category),
            count,
            noun
        ));
    }
    text
}

/// Reply sent when interpretation fails outright.
pub fn parse_failure() -> &'static str {
    "\u{1F914} Sorry, I couldn't make sense of that. Could you rephrase?"
}

/// Reply sent when storing an entry fails.
pub fn save_failure() -> &'static str {
    "\u{274C} Error saving data. Please try again."
}

/// Render a field as display text, empty string if missing.
fn field(data: &Value, key: &str) -> String {
    data.get(key).map(render).unwrap_or_default()
}

/// Render a JSON value without quotes around strings.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Uppercase the first character.
fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

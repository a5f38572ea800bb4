//! The parsing prompt and response extraction helpers.

/// Instructions sent ahead of every message. `{current_date}` is replaced
/// with today's date so relative dates ("tomorrow", "this weekend") can be
/// resolved by the model.
const PARSING_PROMPT: &str = r#"You are a personal dashboard assistant. Parse the user's message and extract structured data.

Identify which category this belongs to:
- finance: spending, income, bills
- fitness: workouts, exercise, health
- relationships: contact with friends/family, reminders
- dating: dates, dating app matches, follow-ups
- trips: travel plans, bookings, itineraries
- todos: tasks, reminders, goals

Return ONLY a JSON object with this structure:
{
  "category": "finance|fitness|relationships|dating|trips|todos",
  "data": {
    // Category-specific fields
  },
  "confidence": 0.0-1.0,
  "needs_clarification": false,
  "clarification_question": "optional question if unclear"
}

Examples:
- "Spent $47 on dinner" -> {"category": "finance", "data": {"type": "expense", "amount": 47, "currency": "USD", "description": "dinner", "date": "2026-02-13"}}
- "Leg day - squats 225x5x3" -> {"category": "fitness", "data": {"type": "workout", "exercise": "squats", "weight": 225, "sets": 3, "reps": 5, "notes": "leg day"}}
- "Coffee date with Sarah tomorrow at 2pm" -> {"category": "dating", "data": {"type": "scheduled_date", "person": "Sarah", "activity": "coffee", "datetime": "2026-02-14T14:00:00"}}
- "Call mom this weekend" -> {"category": "relationships", "data": {"type": "reminder", "person": "mom", "action": "call", "timeframe": "this weekend"}}
- "Tokyo trip April 15-22" -> {"category": "trips", "data": {"destination": "Tokyo", "start_date": "2026-04-15", "end_date": "2026-04-22"}}

Be smart about parsing dates, amounts, and context. Current date is {current_date}."#;

/// Build the parsing prompt for the given date (YYYY-MM-DD).
pub fn parsing_prompt(current_date: &str) -> String {
    PARSING_PROMPT.replace("{current_date}", current_date)
}

/// Extract the JSON payload from a model reply.
///
/// Models sometimes wrap the requested JSON in a markdown code fence;
/// strip it before deserializing.
pub fn extract_json(content: &str) -> &str {
    let content = content.trim();

    if let Some(rest) = content.split_once("```json").map(|(_, rest)| rest) {
        if let Some((inner, _)) = rest.split_once("```") {
            return inner.trim();
        }
    }

    if let Some(rest) = content.split_once("```").map(|(_, rest)| rest) {
        if let Some((inner, _)) = rest.split_once("```") {
            return inner.trim();
        }
    }

    content
}

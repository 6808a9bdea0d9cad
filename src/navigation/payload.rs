//! Serialization of the selected answers carried from the quiz screen to
//! the results screen.
//!
//! The payload is a JSON array whose entries are strings (answered) or
//! `null` (unanswered), e.g. `["Meow-Meow",null,"yellow","Two"]`.

use serde_json::Value;
use tracing::warn;

/// Encode the selected answers as a JSON array of strings and nulls.
pub fn encode_answers(answers: &[Option<String>]) -> String {
    let entries = answers
        .iter()
        .map(|answer| match answer {
            Some(text) => Value::String(text.clone()),
            None => Value::Null,
        })
        .collect();

    Value::Array(entries).to_string()
}

/// Decode a payload produced by [`encode_answers`].
///
/// Never fails: a missing payload, malformed JSON, or any JSON value other
/// than an array decodes to an empty sequence. Array entries that are not
/// strings decode as unanswered.
pub fn decode_answers(payload: Option<&str>) -> Vec<Option<String>> {
    let Some(payload) = payload else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(entries)) => entries
            .into_iter()
            .map(|entry| match entry {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        Ok(other) => {
            warn!(kind = json_kind(&other), "answers payload is not an array, ignoring it");
            Vec::new()
        }
        Err(err) => {
            warn!(error = %err, "malformed answers payload, ignoring it");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Question/answer items and interpretation of generation replies.
//!
//! DESIGN
//! ======
//! The backend's reply shape is loosely defined (it forwards model output),
//! so fields are read with JavaScript-style truthiness: `null`, `false`, `0`
//! and `""` count as absent. Missing item fields default to empty strings.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One generated question with its answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    /// Backend category label, e.g. `"short"`, `"long"`, `"mcq"`.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Interpreted `/generate-questions` or `/generate-from-image` body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReply {
    pub error: Option<String>,
    pub questions: Option<Vec<Question>>,
    pub warning: Option<String>,
}

impl GenerationReply {
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        let error = error_field(body).filter(|v| is_truthy(v)).map(display_value);
        let warning = body.get("warning").filter(|v| is_truthy(v)).map(display_value);
        let questions = body
            .get("questions")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(question_from_value).collect());
        Self { error, questions, warning }
    }
}

/// `error`, or a key that trims to `error` (the backend emits `" error"` when
/// generation fails).
fn error_field(body: &Value) -> Option<&Value> {
    let obj = body.as_object()?;
    obj.get("error")
        .or_else(|| obj.iter().find(|(k, _)| k.trim() == "error").map(|(_, v)| v))
}

fn question_from_value(item: &Value) -> Question {
    Question {
        question: item.get("question").map(display_value).unwrap_or_default(),
        answer: item.get("answer").map(display_value).unwrap_or_default(),
        kind: item.get("type").map(display_value).unwrap_or_default(),
    }
}

/// Render a JSON value the way template-string interpolation would.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

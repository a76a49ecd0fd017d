//! Create/update payload parsing and validation.
//!
//! Bodies are decoded into [`UpsertTodo`] first, then [`validate_upsert`]
//! applies the field rules. Both steps fail with `TodoError::Validation`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TodoError};
use crate::model::TodoId;

/// Message returned when `text` is absent or empty.
pub const EMPTY_TEXT_MSG: &str = "Todo text cannot be empty";

/// Raw create/update body. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpsertTodo {
    #[serde(default)]
    pub text: Option<String>,
    /// Any JSON value; coerced with [`is_truthy`].
    #[serde(default, rename = "isComplete")]
    pub is_complete: Option<Value>,
}

impl UpsertTodo {
    /// Decode a request body. An empty body is an empty payload.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|_| TodoError::Validation("invalid JSON body".into()))
    }
}

/// Payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTodo {
    pub text: String,
    pub is_complete: bool,
}

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` are false,
/// every other value (including `[]` and `{}`) is true.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `text` must be present and non-empty (no trimming); `isComplete` is
/// coerced to a boolean, absent meaning false.
pub fn validate_upsert(payload: UpsertTodo) -> Result<ValidTodo> {
    match payload.text {
        Some(text) if !text.is_empty() => Ok(ValidTodo {
            text,
            is_complete: payload.is_complete.as_ref().map_or(false, is_truthy),
        }),
        _ => Err(TodoError::Validation(EMPTY_TEXT_MSG.into())),
    }
}

/// Parse a path id. Anything that is not an integer matches no record.
pub fn parse_id(raw: &str) -> Result<TodoId> {
    raw.parse::<TodoId>()
        .map_err(|_| TodoError::NotFound(raw.to_string()))
}

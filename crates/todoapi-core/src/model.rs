//! The todo record.

use serde::{Deserialize, Serialize};

/// Store-assigned record id.
pub type TodoId = i64;

/// A persisted todo. Field names on the wire are `id`, `text`, `isComplete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub is_complete: bool,
}

const SEED_TEXTS: [&str; 3] = ["Python auffrischen", "JavaScript üben", "React lernen"];

/// Startup records (ids 1..=3, all open).
pub fn seed_todos() -> Vec<Todo> {
    SEED_TEXTS
        .iter()
        .zip(1..)
        .map(|(text, id)| Todo {
            id,
            text: (*text).to_string(),
            is_complete: false,
        })
        .collect()
}

//! Wire shape of the todo record.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use todoapi_core::{seed_todos, Todo, TodoError};

#[test]
fn todo_uses_camel_case_fields() {
    let todo = Todo {
        id: 7,
        text: "Test".to_string(),
        is_complete: true,
    };
    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json, serde_json::json!({"id": 7, "text": "Test", "isComplete": true}));
}

#[test]
fn seeds_have_ids_one_to_three() {
    let seeds = seed_todos();
    let ids: Vec<_> = seeds.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(seeds.iter().all(|t| !t.is_complete && !t.text.is_empty()));
}

#[test]
fn internal_errors_hide_details() {
    let err = TodoError::Internal("disk I/O error".into());
    assert_eq!(err.public_message(), "Internal Server Error");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

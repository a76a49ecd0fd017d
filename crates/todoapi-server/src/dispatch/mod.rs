//! Todo route handlers.
//!
//! Each handler runs `validate -> store op -> response`; failures are
//! returned as [`ApiError`](crate::error::ApiError) and shaped there.

pub mod todos;

pub use todos::{create_todo, delete_todo, list_todos, update_todo};

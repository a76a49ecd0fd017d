//! todoapi core: transport-agnostic todo model, request validation and the
//! shared error type.
//!
//! This crate defines the domain contracts used by the HTTP server and its
//! stores. It intentionally carries no transport or runtime dependencies so
//! the validation rules can be exercised without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TodoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod validate;

/// Shared result type.
pub use error::{Result, TodoError};
pub use model::{seed_todos, Todo, TodoId};
pub use validate::{is_truthy, parse_id, validate_upsert, UpsertTodo, ValidTodo, EMPTY_TEXT_MSG};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;

use todoapi_core::{parse_id, validate_upsert, Todo, TodoError, UpsertTodo};

use crate::app_state::AppState;
use crate::error::ApiError;

type ApiResult<T> = std::result::Result<T, ApiError>;

pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.store().list().await?;
    tracing::info!(count = todos.len(), "todos listed");
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let input = validate_upsert(UpsertTodo::from_json(&body)?)?;
    let todo = state.store().create(input.text, input.is_complete).await?;
    tracing::info!(id = todo.id, text = %todo.text, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    // Payload first: an invalid body is a 400 even for an unknown id.
    let input = validate_upsert(UpsertTodo::from_json(&body)?)?;
    let id = parse_id(&raw_id)?;

    let is_complete = input.is_complete;
    if !state.store().update(id, input.text, is_complete).await? {
        return Err(TodoError::NotFound(raw_id).into());
    }
    tracing::info!(id, is_complete, "todo updated");
    Ok((StatusCode::OK, "Todo updated"))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    if !state.store().delete(id).await? {
        return Err(TodoError::NotFound(raw_id).into());
    }
    tracing::info!(id, "todo deleted");
    Ok((StatusCode::OK, "Todo deleted"))
}

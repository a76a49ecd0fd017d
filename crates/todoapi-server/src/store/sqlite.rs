//! Embedded relational store (SQLite via rusqlite).
//!
//! A single connection sits behind a mutex. Every statement runs on the
//! blocking pool (`spawn_blocking`), so file I/O never stalls a runtime worker.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use todoapi_core::error::{Result, TodoError};
use todoapi_core::{seed_todos, Todo, TodoId};

use super::TodoStore;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    isComplete BOOLEAN NOT NULL
)";
const SELECT_ALL: &str = "SELECT id, text, isComplete FROM todos ORDER BY id";
const INSERT: &str = "INSERT INTO todos (text, isComplete) VALUES (?1, ?2)";
const UPDATE: &str = "UPDATE todos SET text = ?1, isComplete = ?2 WHERE id = ?3";
const DELETE: &str = "DELETE FROM todos WHERE id = ?1";

fn db_err(e: rusqlite::Error) -> TodoError {
    TodoError::Internal(format!("sqlite: {e}"))
}

pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and make sure the table exists.
    ///
    /// With `seed`, the startup records are inserted when the table is empty,
    /// so reopening a file-backed database does not duplicate them.
    pub fn open(path: &str, seed: bool) -> Result<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .map_err(db_err)?;
        Self::init(conn, seed)
    }

    /// Fresh in-memory database.
    pub fn open_in_memory(seed: bool) -> Result<Self> {
        Self::open(":memory:", seed)
    }

    fn init(conn: Connection, seed: bool) -> Result<Self> {
        conn.execute(CREATE_TABLE, []).map_err(db_err)?;
        tracing::info!("todos table ready");

        if seed {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))
                .map_err(db_err)?;
            if count == 0 {
                for todo in seed_todos() {
                    conn.execute(INSERT, params![todo.text, todo.is_complete])
                        .map_err(db_err)?;
                }
                tracing::info!("seed todos inserted");
            }
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            f(&conn)
        })
        .await
        .map_err(|e| TodoError::Internal(format!("sqlite task failed: {e}")))?
        .map_err(db_err)
    }
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        text: row.get(1)?,
        is_complete: row.get(2)?,
    })
}

#[async_trait]
impl TodoStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_ALL)?;
            let rows = stmt.query_map([], row_to_todo)?;
            let todos = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(todos)
        })
        .await
    }

    async fn create(&self, text: String, is_complete: bool) -> Result<Todo> {
        self.with_conn(move |conn| {
            conn.execute(INSERT, params![text, is_complete])?;
            Ok(Todo {
                id: conn.last_insert_rowid(),
                text,
                is_complete,
            })
        })
        .await
    }

    async fn update(&self, id: TodoId, text: String, is_complete: bool) -> Result<bool> {
        let changed = self
            .with_conn(move |conn| conn.execute(UPDATE, params![text, is_complete, id]))
            .await?;
        Ok(changed > 0)
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let changed = self
            .with_conn(move |conn| conn.execute(DELETE, params![id]))
            .await?;
        Ok(changed > 0)
    }
}

//! Volatile store: an owned list plus id counter behind one lock.

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoapi_core::error::Result;
use todoapi_core::{seed_todos, Todo, TodoId};

use super::TodoStore;

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: TodoId,
}

/// In-process store. Insertion order is list order; ids are never reused.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store; the first id is 1.
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    /// Store holding the three startup records; the next id is 4.
    pub fn seeded() -> Self {
        Self::with_todos(seed_todos())
    }

    /// Start from existing records. The counter begins above the highest id.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { todos, next_id }),
        }
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.inner.read().await.todos.clone())
    }

    async fn create(&self, text: String, is_complete: bool) -> Result<Todo> {
        let mut inner = self.inner.write().await;
        let todo = Todo {
            id: inner.next_id,
            text,
            is_complete,
        };
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, text: String, is_complete: bool) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.text = text;
                todo.is_complete = is_complete;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.todos.iter().position(|t| t.id == id) {
            Some(idx) => {
                // `remove`, not `swap_remove`: list order is insertion order.
                inner.todos.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

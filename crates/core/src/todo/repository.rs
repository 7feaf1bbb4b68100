//! Todo repository trait
//!
//! Defines the interface for todo storage operations.

use async_trait::async_trait;

use super::model::{CreateTodo, Priority, Todo, TodoId, UpdateTodo};
use crate::Result;

/// Repository interface for todo CRUD operations
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List todos in insertion order, narrowed to `filter` when given
    async fn list(&self, filter: Option<Priority>) -> Result<Vec<Todo>>;

    /// Number of live todos
    async fn count(&self) -> Result<usize>;

    /// Create a new todo, assigning it the next id
    async fn create(&self, input: CreateTodo) -> Result<Todo>;

    /// Update an existing todo
    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo>;

    /// Delete a todo by id, returning the removed record
    async fn delete(&self, id: TodoId) -> Result<Todo>;
}

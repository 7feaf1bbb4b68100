//! In-memory todo storage implementation
//!
//! Holds the todo collection and the id counter behind a single lock.
//! There is no persistence: the collection lives and dies with the
//! process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{CreateTodo, Priority, Todo, TodoId, UpdateTodo};
use super::repository::TodoRepository;
use crate::{Error, Result};

/// In-memory todo store
///
/// The store exclusively owns the collection and the id counter. Ids
/// only ever move forward, so a deleted id is never handed out again.
pub struct MemoryTodoStore {
    state: RwLock<StoreState>,
}

struct StoreState {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl MemoryTodoStore {
    /// Create an empty store with the id counter at 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the three sample todos
    ///
    /// Seed records occupy ids 1-3; the counter starts at 4.
    pub fn with_seed_data() -> Self {
        let todos = vec![
            Todo::new(1, "Sample High Priority Task").with_priority(Priority::High),
            Todo::new(2, "Sample Medium Priority Task"),
            Todo::new(3, "Sample Low Priority Task")
                .with_priority(Priority::Low)
                .with_completed(true),
        ];

        Self {
            state: RwLock::new(StoreState {
                todos,
                next_id: 4,
            }),
        }
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_task(task: &str) -> Result<&str> {
    let trimmed = task.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyTask);
    }
    Ok(trimmed)
}

#[async_trait]
impl TodoRepository for MemoryTodoStore {
    async fn list(&self, filter: Option<Priority>) -> Result<Vec<Todo>> {
        let state = self.state.read().await;
        let todos = match filter {
            Some(priority) => state
                .todos
                .iter()
                .filter(|t| t.priority == priority)
                .cloned()
                .collect(),
            None => state.todos.clone(),
        };
        Ok(todos)
    }

    async fn count(&self) -> Result<usize> {
        let state = self.state.read().await;
        Ok(state.todos.len())
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let task = validate_task(&input.task)?.to_string();

        let mut state = self.state.write().await;
        let todo = Todo {
            id: state.next_id,
            task,
            priority: input.priority.unwrap_or_default(),
            completed: false,
        };
        state.next_id += 1;
        state.todos.push(todo.clone());

        tracing::debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo> {
        let mut state = self.state.write().await;
        let todo = state
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TodoNotFound(id))?;

        // Unknown id wins over a bad payload
        let task = validate_task(&input.task)?.to_string();

        todo.task = task;
        if let Some(priority) = input.priority {
            todo.priority = priority;
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }

        tracing::debug!(id, "updated todo");
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<Todo> {
        let mut state = self.state.write().await;
        let index = state
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TodoNotFound(id))?;

        let removed = state.todos.remove(index);
        tracing::debug!(id, "deleted todo");
        Ok(removed)
    }
}

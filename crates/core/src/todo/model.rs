//! Todo model definitions

use serde::{Deserialize, Serialize};

/// Identifier for a todo record.
///
/// Ids are assigned monotonically by the store and never reused,
/// even after the record they named has been deleted.
pub type TodoId = u64;

/// Todo priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Todo {
    /// Create a new todo with the given id and task text
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            priority: Priority::default(),
            completed: false,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the completed flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Input for creating a todo
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub task: String,
    pub priority: Option<Priority>,
}

impl CreateTodo {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Input for updating a todo
///
/// `task` is always replaced; `priority` and `completed` are left
/// untouched when absent.
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub task: String,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            priority: None,
            completed: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

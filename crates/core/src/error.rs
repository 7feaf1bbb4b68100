//! Error types for the core library

use thiserror::Error;

use crate::todo::TodoId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Todo not found: {0}")]
    TodoNotFound(TodoId),

    #[error("Task cannot be empty")]
    EmptyTask,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

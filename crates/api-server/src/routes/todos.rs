//! Todo API endpoints
//!
//! Create, update and delete over the todo store. Responses use the
//! `{success, todo, message}` envelope; form submissions to the create
//! endpoint are answered with a redirect back to the page.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use todo_core::todo::{CreateTodo, Priority, Todo, TodoId, UpdateTodo};
use todo_core::Error as CoreError;

use crate::error::ApiError;
use crate::extract::{JsonOrForm, ResponseFormat};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    // Absent and blank both mean "empty task" to the validator
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub completed: Option<CompletedFlag>,
}

/// `completed` as it arrives on the wire
///
/// JSON callers send a real boolean; form bodies can only send text.
/// Anything that is not a boolean or the strings "true"/"false" is
/// rejected instead of being coerced.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CompletedFlag {
    Bool(bool),
    Text(String),
    Other(serde_json::Value),
}

impl CompletedFlag {
    fn into_bool(self) -> todo_core::Result<bool> {
        match self {
            Self::Bool(value) => Ok(value),
            Self::Text(text) => match text.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(CoreError::InvalidInput(
                    "Completed must be true or false!".to_string(),
                )),
            },
            Self::Other(_) => Err(CoreError::InvalidInput(
                "Completed must be true or false!".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoEnvelope {
    pub success: bool,
    pub todo: Todo,
    pub message: String,
}

impl TodoEnvelope {
    fn new(todo: Todo, message: &str) -> Self {
        Self {
            success: true,
            todo,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /todos - Create a new todo
async fn create_todo(
    State(state): State<AppState>,
    format: ResponseFormat,
    JsonOrForm(req): JsonOrForm<CreateTodoRequest>,
) -> Result<Response, ApiError> {
    let input = CreateTodo {
        task: req.task.unwrap_or_default(),
        priority: req.priority,
    };

    let todo = state.todo_store().create(input).await?;

    Ok(match format {
        ResponseFormat::Json => {
            Json(TodoEnvelope::new(todo, "Task added successfully!")).into_response()
        }
        ResponseFormat::Redirect => Redirect::to("/").into_response(),
    })
}

/// PUT /todos/{id} - Update a todo
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    JsonOrForm(req): JsonOrForm<UpdateTodoRequest>,
) -> Result<Json<TodoEnvelope>, ApiError> {
    let completed = req.completed.map(CompletedFlag::into_bool).transpose()?;

    let input = UpdateTodo {
        task: req.task.unwrap_or_default(),
        priority: req.priority,
        completed,
    };

    let todo = state.todo_store().update(id, input).await?;

    Ok(Json(TodoEnvelope::new(todo, "Task updated successfully!")))
}

/// DELETE /todos/{id} - Delete a todo
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoEnvelope>, ApiError> {
    let todo = state.todo_store().delete(id).await?;

    Ok(Json(TodoEnvelope::new(todo, "Task deleted successfully!")))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
}

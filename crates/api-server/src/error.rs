//! HTTP error mapping
//!
//! Core errors cross the HTTP boundary exactly once, here. Everything
//! the client sees is the `{success: false, message}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use todo_core::Error as CoreError;

/// Envelope returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

/// Core error carried to the edge of a handler
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] CoreError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            CoreError::EmptyTask => {
                (StatusCode::BAD_REQUEST, "Task cannot be empty!".to_string())
            }
            CoreError::TodoNotFound(_) => {
                (StatusCode::NOT_FOUND, "Todo not found!".to_string())
            }
            CoreError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            CoreError::Storage(err) => {
                // Internal detail stays in the logs
                tracing::error!("storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorEnvelope {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

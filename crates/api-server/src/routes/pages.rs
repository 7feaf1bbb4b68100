//! Page endpoints
//!
//! The rendered todo page and the catch-all 404.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use todo_core::todo::Priority;

use crate::error::ApiError;
use crate::render;
use crate::state::AppState;

/// Priority filter from the query string
///
/// `all` is a sentinel meaning "no filter"; it never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn as_priority(self) -> Option<Priority> {
        match self {
            Self::All => None,
            Self::Low => Some(Priority::Low),
            Self::Medium => Some(Priority::Medium),
            Self::High => Some(Priority::High),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub priority: PriorityFilter,
}

/// GET / - Render the todo page with an optional priority filter
async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let todos = state.todo_store().list(query.priority.as_priority()).await?;
    let total_count = state.todo_store().count().await?;

    Ok(Html(render::todo_page(
        &todos,
        query.priority.as_str(),
        total_count,
    )))
}

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render::not_found_page()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

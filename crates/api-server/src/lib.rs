//! HTTP server for the todo list service
//!
//! Exposes the todo store over REST plus a rendered HTML page. The
//! router is assembled here so integration tests can drive it without
//! binding a socket.

pub mod error;
pub mod extract;
pub mod render;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .merge(routes::todos::router())
        .fallback(routes::pages::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

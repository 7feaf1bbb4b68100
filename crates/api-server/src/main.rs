//! Entry point for the todo list server
//!
//! Serves the REST API and the rendered page on a single port.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_server::state::AppState;
use todo_core::todo::{MemoryTodoStore, TodoRepository};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(3000);

    let store = Arc::new(MemoryTodoStore::with_seed_data());
    let seeded = store.count().await.expect("seed count");
    let state = AppState::new(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Todo List Server running on http://localhost:{}", port);
    tracing::info!("Total todos in memory: {}", seeded);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, api_server::app(state))
        .await
        .expect("Server error");
}

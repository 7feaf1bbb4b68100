//! Application state

use std::sync::Arc;

use todo_core::todo::TodoRepository;

/// Shared application state
///
/// Holds the todo store behind the repository trait so tests and a
/// future persistent backend can slot in without touching handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    todo_store: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Create a new AppState with the given todo store
    pub fn new(todo_store: Arc<dyn TodoRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { todo_store }),
        }
    }

    /// Get reference to the todo store
    pub fn todo_store(&self) -> &dyn TodoRepository {
        self.inner.todo_store.as_ref()
    }
}

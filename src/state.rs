//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::db::Database;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// The database service is constructed once at startup and injected here;
/// handlers never reach for process-global state.
pub struct AppState {
    /// Pooled database access (required)
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;

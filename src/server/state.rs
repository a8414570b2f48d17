//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared student store. The
//! state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use std::sync::Arc;

use crate::server::data::StudentStore;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the store sits behind an `Arc`, so every clone shares the same
/// underlying collection handle.
#[derive(Clone)]
pub struct AppState {
    /// Student store used by every handler.
    ///
    /// In production this is the MongoDB-backed `StudentRepository`; tests inject an
    /// in-memory collection instead.
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    /// Creates a new application state around the provided store.
    ///
    /// # Arguments
    /// - `store` - Student store shared by all handlers
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: impl StudentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

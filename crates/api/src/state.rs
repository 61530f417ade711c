use std::sync::Arc;

use movies_store::MovieStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory movie collection.
    pub movies: Arc<MovieStore>,
}

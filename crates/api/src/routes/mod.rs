pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                       list all movies
///
/// /movies                 list (optionally ?genre=), create
/// /movies/{id}            get, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}

//! Handlers for the movie collection.
//!
//! Writes are validated against the movie schema before the store is
//! touched; a failed validation never mutates state.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::Movie;
use movies_core::types::MovieId;
use movies_core::validation::{validate_movie, validate_partial_movie};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::GenreFilterParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Message for `DELETE` on an unknown id. Clients match on this exact text.
pub const DELETE_NOT_FOUND_MESSAGE: &str = "Movie not founded";

pub const DELETED_MESSAGE: &str = "Movie deleted";

fn not_found(id: MovieId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /
///
/// The whole collection.
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.movies.list_all().await)
}

/// GET /movies
///
/// The whole collection, or only the movies tagged with `?genre=`
/// (case-insensitive).
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<GenreFilterParams>,
) -> Json<Vec<Movie>> {
    let movies = match params.genre() {
        Some(genre) => state.movies.filter_by_genre(genre).await,
        None => state.movies.list_all().await,
    };

    Json(movies)
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    match state.movies.find_by_id(&id).await {
        Some(movie) => Ok(Json(movie)),
        None => Err(not_found(id)),
    }
}

/// POST /movies
///
/// Validate a complete movie, assign it a fresh id and append it.
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = body?;
    let new = validate_movie(&body).map_err(CoreError::from)?;

    let movie = state.movies.append(new).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Merge the validated fields over the existing movie. The body is
/// validated before the id is looked up.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Json(body) = body?;
    let patch = validate_partial_movie(&body).map_err(CoreError::from)?;

    let movie = state
        .movies
        .update_by_id(&id, patch)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
///
/// Responds with `Access-Control-Allow-Origin: *` whether or not the movie
/// existed.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> impl IntoResponse {
    let result = if state.movies.remove_by_id(&id).await {
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(Json(MessageResponse {
            message: DELETED_MESSAGE,
        }))
    } else {
        Err(AppError::NotFound(DELETE_NOT_FOUND_MESSAGE))
    };

    ([(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")], result)
}

use movies_core::movie::{Movie, MoviePatch, NewMovie};
use movies_core::types::new_movie_id;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::seed;

/// The movie collection, in insertion order.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across handlers. Every mutation takes the write guard for its
/// whole read-modify-write, so concurrent requests observe each other's
/// effects in a single serial order. Callers only ever receive clones.
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Create a store holding `movies`.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Create a store seeded from the bundled dataset.
    pub fn with_bundled_seed() -> Result<Self, StoreError> {
        let movies = seed::bundled_movies()?;
        tracing::debug!(count = movies.len(), "Loaded bundled movie dataset");
        Ok(Self::new(movies))
    }

    /// Every movie, in collection order.
    pub async fn list_all(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    /// Movies whose genre list contains `genre`, compared case-insensitively.
    pub async fn filter_by_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .filter(|m| m.has_genre(genre))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    /// Assign a fresh id to `new` and append it. Returns the stored record.
    pub async fn append(&self, new: NewMovie) -> Movie {
        let mut movies = self.movies.write().await;

        let mut id = new_movie_id();
        while movies.iter().any(|m| m.id == id) {
            id = new_movie_id();
        }

        let movie = Movie::from_new(id, new);
        movies.push(movie.clone());
        movie
    }

    /// Remove the movie with `id`. Returns `false` if there was none.
    pub async fn remove_by_id(&self, id: &str) -> bool {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Merge `patch` over the movie with `id` in place.
    ///
    /// Returns the merged record, or `None` if no movie has that id.
    pub async fn update_by_id(&self, id: &str, patch: MoviePatch) -> Option<Movie> {
        let mut movies = self.movies.write().await;
        let movie = movies.iter_mut().find(|m| m.id == id)?;
        movie.apply(patch);
        Some(movie.clone())
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

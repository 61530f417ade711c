//! Query parameter types for API handlers.

use serde::Deserialize;

/// `GET /movies?genre=` filter.
#[derive(Debug, Default, Deserialize)]
pub struct GenreFilterParams {
    pub genre: Option<String>,
}

impl GenreFilterParams {
    /// The genre to filter by. An empty value means "no filter".
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}

//! The movie dataset compiled into the binary.

use std::collections::HashSet;

use movies_core::movie::Movie;

use crate::error::StoreError;

const BUNDLED_MOVIES: &str = include_str!("../data/movies.json");

/// Parse the bundled dataset.
pub fn bundled_movies() -> Result<Vec<Movie>, StoreError> {
    parse_movies(BUNDLED_MOVIES)
}

/// Parse a JSON array of movie records, rejecting duplicate ids.
pub fn parse_movies(json: &str) -> Result<Vec<Movie>, StoreError> {
    let movies: Vec<Movie> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(movies.len());
    for movie in &movies {
        if !seen.insert(movie.id.as_str()) {
            return Err(StoreError::DuplicateId(movie.id.clone()));
        }
    }

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let movies = bundled_movies().unwrap();
        assert_eq!(movies.len(), 10);
        assert!(movies.iter().any(|m| m.title == "The Dark Knight"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "a", "title": "One", "year": 2000, "director": "D", "duration": 90,
             "rate": 5, "poster": "https://x.y/1.jpg", "genre": ["Drama"]},
            {"id": "a", "title": "Two", "year": 2001, "director": "D", "duration": 95,
             "rate": 6, "poster": "https://x.y/2.jpg", "genre": ["Comedy"]}
        ]"#;
        let err = parse_movies(json).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn malformed_dataset_is_rejected() {
        let err = parse_movies(r#"[{"id": "a"}]"#).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSeed(_)));
    }
}

/// Movie identifiers are opaque strings (UUID v4 for server-assigned ids).
pub type MovieId = String;

/// Generate a fresh identifier for a newly created movie.
pub fn new_movie_id() -> MovieId {
    uuid::Uuid::new_v4().to_string()
}

//! Movie record and the validated inputs used to create or patch one.

use serde::{Deserialize, Serialize, Serializer};

use crate::genre::Genre;
use crate::types::MovieId;

/// Rating assigned when a new movie is submitted without one.
pub const DEFAULT_RATE: f64 = 5.0;

/// A movie record held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u64,
    #[serde(serialize_with = "serialize_rate")]
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Build a stored record from a validated submission and a fresh id.
    pub fn from_new(id: MovieId, new: NewMovie) -> Self {
        Self {
            id,
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            rate: new.rate,
            poster: new.poster,
            genre: new.genre,
        }
    }

    /// Overlay every field present in `patch`; absent fields are untouched.
    /// The id is never part of a patch.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }

    /// Whether any of this movie's genres equals `query`, ignoring case.
    pub fn has_genre(&self, query: &str) -> bool {
        self.genre.iter().any(|g| g.matches_ignore_case(query))
    }
}

/// A fully validated submission for a new movie (defaults applied).
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u64,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A validated partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u64>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }
}

/// Whole-number ratings go out as JSON integers (`5`, not `5.0`) so a
/// submitted value round-trips unchanged.
fn serialize_rate<S: Serializer>(rate: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if rate.fract() == 0.0 && rate.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*rate as i64)
    } else {
        serializer.serialize_f64(*rate)
    }
}

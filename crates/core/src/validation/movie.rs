//! The movie schema and its two validation entry points.

use serde_json::{Map, Value};

use super::evaluator::{as_integer, evaluate_fields};
use super::rules::{
    Constraint, FieldRule, FieldViolation, Presence, RuleKind, ValidationErrors, ValueKind,
};
use crate::genre::Genre;
use crate::movie::{MoviePatch, NewMovie, DEFAULT_RATE};

/// Wire names accepted in a movie's `genre` array.
pub const GENRE_NAMES: &[&str] = &[
    "Action",
    "Crime",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Horror",
    "Thriller",
    "Sci-Fi",
];

/// Field rules for a movie record, in report order.
pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        kind: ValueKind::String,
        has_default: false,
        constraints: &[Constraint::MinLength(1)],
        required_message: Some("Movie title is required."),
        type_message: Some("Movie title must be a string"),
    },
    FieldRule {
        field: "year",
        kind: ValueKind::Integer,
        has_default: false,
        constraints: &[Constraint::Min(1900.0), Constraint::Max(2024.0)],
        required_message: None,
        type_message: None,
    },
    FieldRule {
        field: "director",
        kind: ValueKind::String,
        has_default: false,
        constraints: &[],
        required_message: None,
        type_message: None,
    },
    FieldRule {
        field: "duration",
        kind: ValueKind::Integer,
        has_default: false,
        constraints: &[Constraint::Positive],
        required_message: None,
        type_message: None,
    },
    FieldRule {
        field: "rate",
        kind: ValueKind::Number,
        has_default: true,
        constraints: &[Constraint::Min(0.0), Constraint::Max(10.0)],
        required_message: None,
        type_message: None,
    },
    FieldRule {
        field: "poster",
        kind: ValueKind::String,
        has_default: false,
        constraints: &[Constraint::Url("Poster must be a valid URL")],
        required_message: None,
        type_message: None,
    },
    FieldRule {
        field: "genre",
        kind: ValueKind::Array,
        has_default: false,
        constraints: &[Constraint::MinItems(1), Constraint::OneOf(GENRE_NAMES)],
        required_message: Some("Movie genre is required."),
        type_message: Some("Movie genre must be an array of enum Genre"),
    },
];

/// Validate a complete movie submission.
///
/// On success the returned [`NewMovie`] has `rate` defaulted when it was
/// omitted. Fields outside the schema are ignored.
pub fn validate_movie(input: &Value) -> Result<NewMovie, ValidationErrors> {
    let data = as_object(input)?;

    let violations = evaluate_fields(MOVIE_RULES, data, Presence::Required);
    if !violations.is_empty() {
        return Err(violations.into());
    }

    let patch = extract(data)?;
    complete(patch).ok_or_else(|| {
        // A required field present in MOVIE_RULES but not read by `extract`.
        ValidationErrors::from(vec![FieldViolation {
            field: "body".to_string(),
            rule: RuleKind::Required,
            message: "Movie is incomplete".to_string(),
            value: None,
        }])
    })
}

/// Validate a partial movie update: every field optional, but any field
/// present must satisfy its rules.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    let data = as_object(input)?;

    let violations = evaluate_fields(MOVIE_RULES, data, Presence::Optional);
    if !violations.is_empty() {
        return Err(violations.into());
    }

    extract(data)
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    input.as_object().ok_or_else(|| {
        ValidationErrors::from(vec![FieldViolation {
            field: "body".to_string(),
            rule: RuleKind::InvalidType,
            message: "Expected object".to_string(),
            value: Some(input.clone()),
        }])
    })
}

/// Pull typed values out of an already-validated record.
///
/// Integers that passed the rule table but do not fit the target field
/// type are reported against that field, never dropped.
fn extract(data: &Map<String, Value>) -> Result<MoviePatch, ValidationErrors> {
    let mut violations = Vec::new();
    let string = |field: &str| data.get(field).and_then(Value::as_str).map(str::to_string);

    let patch = MoviePatch {
        title: string("title"),
        year: narrow_integer(data, "year", &mut violations),
        director: string("director"),
        duration: narrow_integer(data, "duration", &mut violations),
        rate: data.get("rate").and_then(Value::as_f64),
        poster: string("poster"),
        genre: data.get("genre").and_then(Value::as_array).and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().and_then(|s| s.parse::<Genre>().ok()))
                .collect()
        }),
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(violations.into())
    }
}

fn narrow_integer<T: TryFrom<i64>>(
    data: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let value = data.get(field)?;
    let integer = as_integer(value)?;
    match T::try_from(integer) {
        Ok(narrowed) => Some(narrowed),
        Err(_) => {
            violations.push(FieldViolation {
                field: field.to_string(),
                rule: RuleKind::Max,
                message: format!("Number must fit in {}", std::any::type_name::<T>()),
                value: Some(value.clone()),
            });
            None
        }
    }
}

fn complete(patch: MoviePatch) -> Option<NewMovie> {
    Some(NewMovie {
        title: patch.title?,
        year: patch.year?,
        director: patch.director?,
        duration: patch.duration?,
        rate: patch.rate.unwrap_or(DEFAULT_RATE),
        poster: patch.poster?,
        genre: patch.genre?,
    })
}

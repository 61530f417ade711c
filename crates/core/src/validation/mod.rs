//! Movie schema validation.
//!
//! Rules are a declarative per-field table ([`movie::MOVIE_RULES`]); the
//! evaluator checks a JSON record against it and aggregates every
//! violation instead of stopping at the first.

pub mod evaluator;
pub mod movie;
pub mod rules;

pub use movie::{validate_movie, validate_partial_movie};
pub use rules::{FieldViolation, RuleKind, ValidationErrors};

//! Validation rule and result types.

use std::fmt;

use serde::Serialize;

/// The JSON shape a field must have before its constraints are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    /// A number with no fractional part.
    Integer,
    Number,
    Array,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::Array => "array",
        }
    }
}

/// A check applied to a field once its [`ValueKind`] matches.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Minimum string length in characters.
    MinLength(usize),
    /// Inclusive lower bound.
    Min(f64),
    /// Inclusive upper bound.
    Max(f64),
    /// Strictly greater than zero.
    Positive,
    /// Must parse as an absolute URL. Carries the message to report.
    Url(&'static str),
    /// Minimum number of array elements.
    MinItems(usize),
    /// Every array element must be one of these strings.
    OneOf(&'static [&'static str]),
}

/// Declarative rules for one field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: ValueKind,
    /// The field may be omitted even in a full validation (a default exists).
    pub has_default: bool,
    pub constraints: &'static [Constraint],
    /// Message reported when the field is missing.
    pub required_message: Option<&'static str>,
    /// Message reported when the field has the wrong JSON type.
    pub type_message: Option<&'static str>,
}

/// Whether absent fields are violations (create) or allowed (partial update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Which rule a violation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    InvalidType,
    MinLength,
    Min,
    Max,
    Positive,
    Url,
    MinItems,
    InvalidEnum,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: RuleKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Every violation found in one record, in rule-table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Whether any violation is reported against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FieldViolation>> for ValidationErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with {} violation(s)", self.0.len())?;
        for v in &self.0 {
            write!(f, "; {}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

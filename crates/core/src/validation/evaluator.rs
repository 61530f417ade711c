//! Rule evaluator — pure logic over JSON values.

use serde_json::{Map, Value};

use super::rules::{Constraint, FieldRule, FieldViolation, Presence, RuleKind, ValueKind};

/// Evaluate every rule in `rules` against one record.
///
/// Violations are aggregated across all fields. Within a field, a missing
/// value or a type mismatch stops further checks for that field.
pub fn evaluate_fields(
    rules: &[FieldRule],
    data: &Map<String, Value>,
    presence: Presence,
) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    for rule in rules {
        match data.get(rule.field) {
            None => {
                if presence == Presence::Required && !rule.has_default {
                    violations.push(FieldViolation {
                        field: rule.field.to_string(),
                        rule: RuleKind::Required,
                        message: rule.required_message.unwrap_or("Required").to_string(),
                        value: None,
                    });
                }
            }
            Some(value) => evaluate_value(rule, value, &mut violations),
        }
    }

    violations
}

fn evaluate_value(rule: &FieldRule, value: &Value, out: &mut Vec<FieldViolation>) {
    if !kind_matches(rule.kind, value) {
        let message = rule.type_message.map(str::to_string).unwrap_or_else(|| {
            format!(
                "Expected {}, received {}",
                rule.kind.as_str(),
                describe(rule.kind, value)
            )
        });
        out.push(violation(rule.field, RuleKind::InvalidType, message, value));
        return;
    }

    for constraint in rule.constraints {
        evaluate_constraint(rule, constraint, value, out);
    }
}

fn evaluate_constraint(
    rule: &FieldRule,
    constraint: &Constraint,
    value: &Value,
    out: &mut Vec<FieldViolation>,
) {
    match *constraint {
        Constraint::MinLength(min) => {
            if let Some(s) = value.as_str() {
                if s.chars().count() < min {
                    let message = format!("String must contain at least {min} character(s)");
                    out.push(violation(rule.field, RuleKind::MinLength, message, value));
                }
            }
        }
        Constraint::Min(min) => {
            if let Some(n) = value.as_f64() {
                if n < min {
                    let message = format!("Number must be greater than or equal to {min}");
                    out.push(violation(rule.field, RuleKind::Min, message, value));
                }
            }
        }
        Constraint::Max(max) => {
            if let Some(n) = value.as_f64() {
                if n > max {
                    let message = format!("Number must be less than or equal to {max}");
                    out.push(violation(rule.field, RuleKind::Max, message, value));
                }
            }
        }
        Constraint::Positive => {
            if let Some(n) = value.as_f64() {
                if n <= 0.0 {
                    let message = "Number must be greater than 0".to_string();
                    out.push(violation(rule.field, RuleKind::Positive, message, value));
                }
            }
        }
        Constraint::Url(message) => {
            if let Some(s) = value.as_str() {
                if url::Url::parse(s).is_err() {
                    out.push(violation(rule.field, RuleKind::Url, message.to_string(), value));
                }
            }
        }
        Constraint::MinItems(min) => {
            if let Some(items) = value.as_array() {
                if items.len() < min {
                    let message = format!("Array must contain at least {min} element(s)");
                    out.push(violation(rule.field, RuleKind::MinItems, message, value));
                }
            }
        }
        Constraint::OneOf(allowed) => {
            let Some(items) = value.as_array() else {
                return;
            };
            for (index, item) in items.iter().enumerate() {
                let field = format!("{}[{index}]", rule.field);
                match item.as_str() {
                    Some(s) if allowed.contains(&s) => {}
                    Some(s) => {
                        let expected = allowed
                            .iter()
                            .map(|a| format!("'{a}'"))
                            .collect::<Vec<_>>()
                            .join(" | ");
                        let message =
                            format!("Invalid enum value. Expected {expected}, received '{s}'");
                        out.push(violation(&field, RuleKind::InvalidEnum, message, item));
                    }
                    None => {
                        let message = rule.type_message.map(str::to_string).unwrap_or_else(|| {
                            format!("Expected string, received {}", describe(ValueKind::String, item))
                        });
                        out.push(violation(&field, RuleKind::InvalidType, message, item));
                    }
                }
            }
        }
    }
}

fn violation(field: &str, rule: RuleKind, message: String, value: &Value) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        rule,
        message,
        value: Some(value.clone()),
    }
}

fn kind_matches(kind: ValueKind, value: &Value) -> bool {
    match kind {
        ValueKind::String => value.is_string(),
        ValueKind::Integer => as_integer(value).is_some(),
        ValueKind::Number => value.as_f64().is_some_and(f64::is_finite),
        ValueKind::Array => value.is_array(),
    }
}

/// Name the JSON type of `value` for a type-mismatch message.
fn describe(expected: ValueKind, value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) if expected == ValueKind::Integer => "float",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a JSON number as an integer, accepting whole-valued floats (`120.0`).
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = value.as_f64()?;
    // Strict upper bound: i64::MAX as f64 rounds up to 2^63.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

//! Type inference for raw parameter values
//!
//! Values are whitespace-separated token lists. Each token is typed on its
//! own, trying integer, then floating point, then falling back to text, so
//! coercion never fails.

use crate::models::{RawValue, TypedValue};

/// Interpret a single token
pub fn coerce_token(token: &str) -> TypedValue {
    if let Ok(value) = token.parse::<i64>() {
        TypedValue::Integer(value)
    } else if let Ok(value) = token.parse::<f64>() {
        TypedValue::Real(value)
    } else {
        TypedValue::Text(token.to_string())
    }
}

/// Interpret a whitespace-separated string.
///
/// A single token yields its scalar value; anything else, including an
/// empty string, yields a list.
pub fn coerce_str(text: &str) -> TypedValue {
    let mut values: Vec<TypedValue> = text.split_whitespace().map(coerce_token).collect();
    if values.len() == 1 {
        values.swap_remove(0)
    } else {
        TypedValue::List(values)
    }
}

/// Interpret one row of a multi-row array, always as a list
fn coerce_row(row: &str) -> TypedValue {
    TypedValue::List(row.split_whitespace().map(coerce_token).collect())
}

/// Interpret a raw value.
///
/// A single-row sequence collapses to that row. A multi-row sequence
/// becomes a list of rows, each row a list even when it holds one token.
pub fn coerce(raw: &RawValue) -> TypedValue {
    match raw {
        RawValue::Scalar(text) => coerce_str(text),
        RawValue::Sequence(rows) if rows.len() == 1 => coerce_str(&rows[0]),
        RawValue::Sequence(rows) => TypedValue::List(rows.iter().map(|row| coerce_row(row)).collect()),
    }
}

//! Typed access to required parameters

use crate::error::{BrukerError, Result};
use crate::models::{ProjectedParameters, TypedValue};

/// A non-negative integer field such as a count or matrix size
pub fn count_field(params: &ProjectedParameters, key: &str) -> Result<usize> {
    let value = params.require(key)?;
    to_count(key, value)
}

/// First entry of an integer array field
pub fn first_count(params: &ProjectedParameters, key: &str) -> Result<usize> {
    let value = params.require(key)?;
    let first = value
        .tokens()
        .into_iter()
        .next()
        .ok_or_else(|| BrukerError::invalid_field(key, "array is empty"))?;
    to_count(key, first)
}

/// A scalar numeric field
pub fn real_field(params: &ProjectedParameters, key: &str) -> Result<f64> {
    let value = params.require(key)?;
    value
        .as_f64()
        .ok_or_else(|| BrukerError::invalid_field(key, format!("expected a number, found {}", value)))
}

/// Every atomic value of `value` as a float
pub fn real_tokens(key: &str, value: &TypedValue) -> Result<Vec<f64>> {
    value
        .tokens()
        .into_iter()
        .map(|token| {
            token.as_f64().ok_or_else(|| {
                BrukerError::invalid_field(key, format!("expected numbers, found '{}'", token))
            })
        })
        .collect()
}

/// Every atomic value of `value` as an integer; integral reals are accepted
pub fn integer_tokens(key: &str, value: &TypedValue) -> Result<Vec<i64>> {
    value
        .tokens()
        .into_iter()
        .map(|token| {
            as_integral(token).ok_or_else(|| {
                BrukerError::invalid_field(key, format!("expected integers, found '{}'", token))
            })
        })
        .collect()
}

fn as_integral(value: &TypedValue) -> Option<i64> {
    match value {
        TypedValue::Integer(value) => Some(*value),
        TypedValue::Real(value) if value.fract() == 0.0 && value.is_finite() => Some(*value as i64),
        _ => None,
    }
}

fn to_count(key: &str, value: &TypedValue) -> Result<usize> {
    let integer = as_integral(value).ok_or_else(|| {
        BrukerError::invalid_field(key, format!("expected an integer, found {}", value))
    })?;
    usize::try_from(integer)
        .map_err(|_| BrukerError::invalid_field(key, format!("expected a non-negative integer, found {}", integer)))
}

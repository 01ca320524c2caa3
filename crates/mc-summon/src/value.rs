//! Lenient reading of primitives out of parsed JSON.
//!
//! Summon payloads are hand-written and frequently carry NBT literals
//! (`1b`, `5s`, `"16"`) where a JSON boolean or number was meant. These helpers
//! accept those spellings and report a [`FieldErrorKind`] for anything else.

use std::borrow::Cow;

use serde_json::{Map, Number, Value};

use crate::error::FieldErrorKind;

/// Read a boolean (`true`, `1`, `1b`, `"true"` and their negatives).
pub fn as_bool(value: &Value) -> Result<bool, FieldErrorKind> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(number_is_nonzero(n)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1b" | "1" => Ok(true),
            "false" | "0b" | "0" => Ok(false),
            _ => Err(FieldErrorKind::ExpectedBool),
        },
        _ => Err(FieldErrorKind::ExpectedBool),
    }
}

/// Read a 32-bit integer. Fractions are truncated toward zero.
pub fn as_int(value: &Value) -> Result<i32, FieldErrorKind> {
    match value {
        Value::Number(n) => number_to_i32(n),
        Value::String(s) => parse_int_literal(s),
        _ => Err(FieldErrorKind::ExpectedInt),
    }
}

/// Read a primitive as text. Numbers and booleans keep their literal form.
pub fn as_text(value: &Value) -> Result<Cow<'_, str>, FieldErrorKind> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
        _ => Err(FieldErrorKind::ExpectedText),
    }
}

pub fn as_object(value: &Value) -> Result<&Map<String, Value>, FieldErrorKind> {
    value.as_object().ok_or(FieldErrorKind::ExpectedObject)
}

pub fn as_array(value: &Value) -> Result<&Vec<Value>, FieldErrorKind> {
    value.as_array().ok_or(FieldErrorKind::ExpectedArray)
}

/// Drop everything up to and including the first `:` (`minecraft:stone` -> `stone`).
pub fn strip_namespace(id: &str) -> &str {
    id.split_once(':').map_or(id, |(_, rest)| rest)
}

fn number_is_nonzero(n: &Number) -> bool {
    match (n.as_i64(), n.as_u64()) {
        (Some(i), _) => i != 0,
        (None, Some(u)) => u != 0,
        (None, None) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
    }
}

fn number_to_i32(n: &Number) -> Result<i32, FieldErrorKind> {
    let out_of_range = || FieldErrorKind::IntOutOfRange(n.to_string());

    if let Some(i) = n.as_i64() {
        return i32::try_from(i).map_err(|_| out_of_range());
    }
    if n.as_u64().is_some() {
        return Err(out_of_range());
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            let truncated = f.trunc();
            if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
                Err(out_of_range())
            } else {
                Ok(truncated as i32)
            }
        }
        _ => Err(FieldErrorKind::ExpectedInt),
    }
}

/// Parse `"42"`, `"5s"`, `"1b"`, `"10L"` style integer literals.
fn parse_int_literal(s: &str) -> Result<i32, FieldErrorKind> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_suffix(|c: char| matches!(c, 'b' | 'B' | 's' | 'S' | 'l' | 'L' | 'i' | 'I'))
        .unwrap_or(trimmed);
    let wide: i64 = digits.parse().map_err(|_| FieldErrorKind::ExpectedInt)?;
    i32::try_from(wide).map_err(|_| FieldErrorKind::IntOutOfRange(trimmed.to_string()))
}

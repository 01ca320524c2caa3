//! Error types for summon extraction.
//!
//! Two tiers: [`ExtractionError`] aborts a whole extraction call, while
//! [`FieldError`] describes a single field that was skipped and gets collected
//! alongside the operations that did succeed.

use serde::Serialize;
use thiserror::Error;

/// Fatal error: the whole extraction call produced nothing.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at {path}")]
    NotAnObject { path: String },

    #[error("unknown material: {id}")]
    UnknownMaterial { id: String },
}

/// Why a single field could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    #[error("expected an object")]
    ExpectedObject,
    #[error("expected an array")]
    ExpectedArray,
    #[error("expected a boolean")]
    ExpectedBool,
    #[error("expected an integer")]
    ExpectedInt,
    #[error("expected text")]
    ExpectedText,
    #[error("integer out of range: {0}")]
    IntOutOfRange(String),
}

/// A field that was present but had the wrong shape. Its operation is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{path}: {kind}")]
pub struct FieldError {
    /// Dotted path of the field inside the document, e.g. `tag.display.Name`.
    pub path: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(path: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("tag.HideFlags", FieldErrorKind::ExpectedInt);
        assert_eq!(err.to_string(), "tag.HideFlags: expected an integer");
    }

    #[test]
    fn test_unknown_material_display() {
        let err = ExtractionError::UnknownMaterial {
            id: "NOT_A_REAL_MATERIAL".to_string(),
        };
        assert_eq!(err.to_string(), "unknown material: NOT_A_REAL_MATERIAL");
    }
}

//! Mutation error types.

use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while editing a movie record.
///
/// Every variant is a recoverable validation failure: the target record
/// is left untouched and the caller decides what to do next.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("Mutation target is not a record: got {found}")]
    NotARecord { found: String },

    #[error("Invalid field type: expected {expected}, got {found} for {field}")]
    FieldTypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Value out of range: {field} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unsupported genre: {genre}")]
    UnsupportedGenre { genre: String },

    #[error("Missing field: {field}")]
    MissingField { field: String },
}

impl MutationError {
    pub fn not_a_record(found: impl Into<String>) -> Self {
        Self::NotARecord {
            found: found.into(),
        }
    }

    pub fn field_type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::FieldTypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    pub fn unsupported_genre(genre: impl Into<String>) -> Self {
        Self::UnsupportedGenre {
            genre: genre.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

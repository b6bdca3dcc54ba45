//! Query error types.

use thiserror::Error;

/// Result type for record read operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while reading a movie record.
///
/// Readers distinguish an invalid target from an absent field from a
/// wrongly typed field, so callers never need a sentinel value to tell
/// the cases apart.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Query target is not a record: got {found}")]
    NotARecord { found: String },

    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Invalid field type: expected {expected}, got {found} for {field}")]
    FieldTypeMismatch {
        field: String,
        expected: String,
        found: String,
    },
}

impl QueryError {
    pub fn not_a_record(found: impl Into<String>) -> Self {
        Self::NotARecord {
            found: found.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
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
}

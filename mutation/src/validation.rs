//! Shared validation helpers for mutation operations.

use reel_core::{Record, Value};
use tracing::warn;

use crate::error::{MutationError, MutationResult};

/// Lower bound of the rating scale, inclusive.
pub const RATING_MIN: f64 = 0.0;

/// Upper bound of the rating scale, inclusive.
pub const RATING_MAX: f64 = 10.0;

/// Gate a mutation target: every write operation requires a record.
pub fn require_record(target: &mut Value) -> MutationResult<&mut Record> {
    match target {
        Value::Record(record) => Ok(record),
        other => {
            let err = MutationError::not_a_record(other.type_name());
            warn!(target: "reel::mutation", error = %err, "mutation target rejected");
            Err(err)
        }
    }
}

/// Check a rating against the allowed scale. NaN never passes.
pub fn validate_rating(rating: f64) -> MutationResult<()> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        let err = MutationError::out_of_range("rating", rating, RATING_MIN, RATING_MAX);
        warn!(target: "reel::mutation", rating, error = %err, "rating rejected");
        Err(err)
    }
}

//! Rating assignment.

use reel_core::Value;

use crate::error::MutationResult;
use crate::validation::{require_record, validate_rating};

/// Set the rating of a movie record.
///
/// The rating must fall within `[RATING_MIN, RATING_MAX]`, bounds
/// included. On rejection the record is left untouched.
pub fn set_rating(movie: &mut Value, rating: f64) -> MutationResult<()> {
    let record = require_record(movie)?;
    validate_rating(rating)?;
    record.insert("rating", rating);
    Ok(())
}

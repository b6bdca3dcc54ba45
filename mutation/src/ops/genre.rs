//! Genre assignment.

use reel_core::Value;
use tracing::warn;

use crate::error::{MutationError, MutationResult};
use crate::genres::is_allowed_genre;
use crate::validation::require_record;

/// Set the genre of a movie record.
///
/// The genre must be an exact, case-sensitive member of
/// [`crate::ALLOWED_GENRES`]. The genre field is single-valued: a
/// previously set genre is replaced.
pub fn set_genre(movie: &mut Value, genre: &str) -> MutationResult<()> {
    let record = require_record(movie)?;
    if !is_allowed_genre(genre) {
        let err = MutationError::unsupported_genre(genre);
        warn!(target: "reel::mutation", genre, error = %err, "genre rejected");
        return Err(err);
    }
    record.insert("genre", genre);
    Ok(())
}

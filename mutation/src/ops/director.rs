//! Director removal.

use reel_core::Value;
use tracing::warn;

use crate::error::{MutationError, MutationResult};
use crate::validation::require_record;

/// Remove the director field from a movie record.
///
/// Removing an absent field is reported as a missing-field error and
/// leaves the record unchanged; it never panics.
pub fn remove_director(movie: &mut Value) -> MutationResult<()> {
    let record = require_record(movie)?;
    match record.remove("director") {
        Some(_) => Ok(()),
        None => {
            let err = MutationError::missing_field("director");
            warn!(target: "reel::mutation", error = %err, "director removal rejected");
            Err(err)
        }
    }
}

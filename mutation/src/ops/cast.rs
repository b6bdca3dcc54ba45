//! Cast list appends.

use reel_core::{TypeTag, Value};
use tracing::warn;

use crate::error::{MutationError, MutationResult};
use crate::validation::require_record;

/// Append a member to the end of a movie record's cast list.
///
/// The cast field must already exist as a list; a missing list is never
/// created on the caller's behalf. Existing entries keep their order.
pub fn add_cast_member(movie: &mut Value, member: &str) -> MutationResult<()> {
    let record = require_record(movie)?;
    match record.get_mut("cast") {
        Some(Value::List(cast)) => {
            cast.push(Value::from(member));
            Ok(())
        }
        Some(other) => {
            let err = MutationError::field_type_mismatch(
                "cast",
                TypeTag::List.name(),
                other.type_name(),
            );
            warn!(target: "reel::mutation", member, error = %err, "cast append rejected");
            Err(err)
        }
        None => {
            let err = MutationError::missing_field("cast");
            warn!(target: "reel::mutation", member, error = %err, "cast append rejected");
            Err(err)
        }
    }
}

//! Reel Query
//!
//! Type-checked read operations over movie records.
//!
//! Responsibilities:
//! - Read conventional fields behind shallow runtime type checks
//! - Derive simple predicates (classic status, field census)
//! - Report unreadable inputs as structured errors, never as panics

mod error;
mod fields;

pub use error::{QueryError, QueryResult};
pub use fields::{
    field_count, field_names, has_field_of_type, is_classic, release_year, title,
    CLASSIC_CUTOFF_YEAR,
};

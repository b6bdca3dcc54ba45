//! Typed field readers and derived predicates.

use reel_core::{Record, TypeTag, Value};
use tracing::debug;

use crate::error::{QueryError, QueryResult};

/// Movies released before this year count as classics.
pub const CLASSIC_CUTOFF_YEAR: f64 = 2000.0;

fn expect_record(movie: &Value) -> QueryResult<&Record> {
    movie.as_record().ok_or_else(|| {
        let err = QueryError::not_a_record(movie.type_name());
        debug!(target: "reel::query", error = %err, "query target rejected");
        err
    })
}

fn missing(field: &str) -> QueryError {
    let err = QueryError::missing_field(field);
    debug!(target: "reel::query", field, error = %err, "field lookup failed");
    err
}

fn wrong_type(field: &str, expected: TypeTag, found: &Value) -> QueryError {
    let err = QueryError::field_type_mismatch(field, expected.name(), found.type_name());
    debug!(target: "reel::query", field, error = %err, "field lookup failed");
    err
}

/// Returns true if the field is present on the record with the given
/// runtime type.
///
/// Pure predicate: no diagnostics are emitted on any path.
pub fn has_field_of_type(movie: &Value, field: &str, tag: TypeTag) -> bool {
    movie
        .as_record()
        .is_some_and(|record| record.has_field_of_type(field, tag))
}

/// The movie's title.
pub fn title(movie: &Value) -> QueryResult<&str> {
    let record = expect_record(movie)?;
    match record.get("title") {
        Some(Value::String(title)) => Ok(title),
        Some(other) => Err(wrong_type("title", TypeTag::String, other)),
        None => Err(missing("title")),
    }
}

/// The movie's release year.
///
/// A stored year of `0` reads back as `Ok(0.0)` and is distinguishable
/// from a missing year, which is a `MissingField` error.
pub fn release_year(movie: &Value) -> QueryResult<f64> {
    let record = expect_record(movie)?;
    match record.get("year") {
        Some(Value::Number(year)) => Ok(*year),
        Some(other) => Err(wrong_type("year", TypeTag::Number, other)),
        None => Err(missing("year")),
    }
}

/// Returns true if the movie was released before [`CLASSIC_CUTOFF_YEAR`].
///
/// A movie whose year is missing or unreadable never counts as a classic.
pub fn is_classic(movie: &Value) -> bool {
    release_year(movie).is_ok_and(|year| year < CLASSIC_CUTOFF_YEAR)
}

/// The record's field names, in insertion order.
pub fn field_names(movie: &Value) -> QueryResult<Vec<String>> {
    let record = expect_record(movie)?;
    Ok(record.keys().map(str::to_string).collect())
}

/// The number of fields on the record.
pub fn field_count(movie: &Value) -> QueryResult<usize> {
    field_names(movie).map(|names| names.len())
}

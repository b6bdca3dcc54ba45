//! Canned movie records for scenario tests.

use reel_core::{record, Value};

/// A fully populated record: every conventional field present and typed.
pub fn classic_thriller() -> Value {
    Value::Record(record! {
        "title" => "Heat",
        "year" => 1995,
        "rating" => 8.3,
        "genre" => "Action",
        "director" => "Michael Mann",
        "cast" => Value::List(vec!["Al Pacino".into(), "Robert De Niro".into()]),
    })
}

/// A sparse record fresh from intake: title and year only.
pub fn recent_release() -> Value {
    Value::Record(record! {
        "title" => "Soul",
        "year" => 2020,
    })
}

/// A record with no fields at all.
pub fn blank() -> Value {
    Value::Record(record!())
}

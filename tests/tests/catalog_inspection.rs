//! Inspection flows over movie records.
//!
//! Exercises the typed readers against records of every shape: fully
//! populated, sparse, blank, and not records at all.

use reel_core::{record, TypeTag, Value};
use reel_query::{
    field_count, field_names, has_field_of_type, is_classic, release_year, title, QueryError,
};
use reel_tests::fixtures;

mod typed_reads {
    use super::*;

    #[test]
    fn test_reading_a_populated_record() {
        let movie = fixtures::classic_thriller();

        assert_eq!(title(&movie).unwrap(), "Heat");
        assert_eq!(release_year(&movie).unwrap(), 1995.0);
        assert!(is_classic(&movie));

        assert!(has_field_of_type(&movie, "title", TypeTag::String));
        assert!(has_field_of_type(&movie, "rating", TypeTag::Number));
        assert!(has_field_of_type(&movie, "cast", TypeTag::List));
        assert!(!has_field_of_type(&movie, "cast", TypeTag::String));
    }

    #[test]
    fn test_reading_a_recent_release() {
        let movie = fixtures::recent_release();

        assert_eq!(title(&movie).unwrap(), "Soul");
        assert_eq!(release_year(&movie).unwrap(), 2020.0);
        assert!(!is_classic(&movie));
    }

    #[test]
    fn test_readers_report_absent_and_mistyped_fields() {
        let movie = fixtures::blank();
        assert!(matches!(title(&movie), Err(QueryError::MissingField { .. })));
        assert!(matches!(
            release_year(&movie),
            Err(QueryError::MissingField { .. })
        ));

        let mistyped = Value::Record(record! { "title" => 5, "year" => "1995" });
        assert!(matches!(
            title(&mistyped),
            Err(QueryError::FieldTypeMismatch { .. })
        ));
        assert!(matches!(
            release_year(&mistyped),
            Err(QueryError::FieldTypeMismatch { .. })
        ));
    }
}

mod field_census {
    use super::*;

    #[test]
    fn test_names_and_count_agree() {
        let movie = fixtures::classic_thriller();

        let names = field_names(&movie).unwrap();
        assert_eq!(
            names,
            vec!["title", "year", "rating", "genre", "director", "cast"]
        );
        assert_eq!(field_count(&movie).unwrap(), names.len());
    }

    #[test]
    fn test_blank_records_have_no_fields() {
        let movie = fixtures::blank();
        assert!(field_names(&movie).unwrap().is_empty());
        assert_eq!(field_count(&movie).unwrap(), 0);
    }
}

mod invalid_targets {
    use super::*;

    #[test]
    fn test_readers_reject_non_records() {
        for target in [Value::Null, Value::from(7), Value::List(vec![])] {
            assert!(matches!(
                title(&target),
                Err(QueryError::NotARecord { .. })
            ));
            assert!(matches!(
                release_year(&target),
                Err(QueryError::NotARecord { .. })
            ));
            assert!(matches!(
                field_names(&target),
                Err(QueryError::NotARecord { .. })
            ));
            assert!(matches!(
                field_count(&target),
                Err(QueryError::NotARecord { .. })
            ));
            assert!(!is_classic(&target));
            assert!(!has_field_of_type(&target, "title", TypeTag::String));
        }
    }
}

//! Integration tests for matrix/record conversion.

use datafmt_model::{Matrix, MismatchKind, Record, RecordSet, Scalar, TableError};
use datafmt_tabular::{arrays_to_data, data_to_arrays};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn matrix(json: &str) -> Matrix {
    serde_json::from_str(json).expect("parse matrix fixture")
}

fn records(json: &str) -> RecordSet {
    serde_json::from_str(json).expect("parse record fixture")
}

#[test]
fn converts_matrix_to_records() {
    init_tracing();
    let result = arrays_to_data(&matrix(r#"[["id","name"],[1,"Ann"],[2,"Bo"]]"#)).unwrap();
    assert_eq!(result, records(r#"[{"id":1,"name":"Ann"},{"id":2,"name":"Bo"}]"#));
    let first = result.first().unwrap();
    assert_eq!(first.keys().collect::<Vec<_>>(), vec!["id", "name"]);
}

#[test]
fn short_rows_are_padded_with_null() {
    init_tracing();
    let result = arrays_to_data(&matrix(r#"[["a","b","c"],[1]]"#)).unwrap();
    let expected: Record = [
        ("a", Scalar::Number(1.0)),
        ("b", Scalar::Null),
        ("c", Scalar::Null),
    ]
    .into_iter()
    .collect();
    assert_eq!(result.records(), &[expected]);
}

#[test]
fn long_rows_are_rejected() {
    init_tracing();
    let error = arrays_to_data(&matrix(r#"[["id"],[1,2]]"#)).unwrap_err();
    assert_eq!(
        error,
        TableError::ShapeMismatch {
            row: 1,
            expected: 1,
            actual: 2,
        }
    );
}

#[test]
fn header_only_matrix_yields_no_records() {
    let result = arrays_to_data(&matrix(r#"[["id","name"]]"#)).unwrap();
    assert!(result.is_empty());
}

#[test]
fn empty_header_is_rejected() {
    assert_eq!(
        arrays_to_data(&matrix("[[]]")).unwrap_err(),
        TableError::EmptyHeader
    );
    assert_eq!(
        arrays_to_data(&matrix("[]")).unwrap_err(),
        TableError::EmptyHeader
    );
}

#[test]
fn duplicate_header_is_rejected() {
    assert_eq!(
        arrays_to_data(&matrix(r#"[["id","id"],[1,2]]"#)).unwrap_err(),
        TableError::DuplicateField("id".to_string())
    );
}

#[test]
fn non_text_header_is_rejected() {
    assert_eq!(
        arrays_to_data(&matrix(r#"[["id",null]]"#)).unwrap_err(),
        TableError::InvalidHeader { index: 1 }
    );
}

#[test]
fn converts_records_to_matrix() {
    init_tracing();
    let result = data_to_arrays(&records(r#"[{"id":1,"name":"Ann"},{"name":"Bo","id":2}]"#))
        .unwrap();
    assert_eq!(result, matrix(r#"[["id","name"],[1,"Ann"],[2,"Bo"]]"#));
}

#[test]
fn empty_record_set_is_rejected() {
    assert_eq!(
        data_to_arrays(&RecordSet::default()).unwrap_err(),
        TableError::EmptyInput
    );
}

#[test]
fn fieldless_records_are_empty_input() {
    assert_eq!(
        data_to_arrays(&records("[{}]")).unwrap_err(),
        TableError::EmptyInput
    );
    assert_eq!(
        data_to_arrays(&records("[{},{}]")).unwrap_err(),
        TableError::EmptyInput
    );
}

#[test]
fn later_fieldless_record_is_missing_fields() {
    let error = data_to_arrays(&records(r#"[{"a":1},{}]"#)).unwrap_err();
    assert_eq!(
        error,
        TableError::SchemaMismatch {
            record: 1,
            field: "a".to_string(),
            kind: MismatchKind::Missing,
        }
    );
}

#[test]
fn unexpected_field_is_a_schema_mismatch() {
    let error = data_to_arrays(&records(r#"[{"a":1,"b":2},{"a":1,"c":3}]"#)).unwrap_err();
    assert_eq!(
        error,
        TableError::SchemaMismatch {
            record: 1,
            field: "c".to_string(),
            kind: MismatchKind::Unexpected,
        }
    );
}

#[test]
fn missing_field_is_a_schema_mismatch() {
    let error = data_to_arrays(&records(r#"[{"a":1,"b":2},{"a":1}]"#)).unwrap_err();
    assert_eq!(
        error,
        TableError::SchemaMismatch {
            record: 1,
            field: "b".to_string(),
            kind: MismatchKind::Missing,
        }
    );
}

#[test]
fn round_trip_preserves_matrix() {
    let original = matrix(r#"[["flag","n","s","x"],[true,1.5,"a",null],[false,-2,"",null]]"#);
    let back = data_to_arrays(&arrays_to_data(&original).unwrap()).unwrap();
    assert_eq!(back, original);
}

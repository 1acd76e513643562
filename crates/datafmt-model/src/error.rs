use std::fmt;

use thiserror::Error;

/// How a record disagrees with the canonical field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// The record lacks a field the canonical header has.
    Missing,
    /// The record has a field the canonical header does not.
    Unexpected,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is missing"),
            Self::Unexpected => f.write_str("has unexpected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("header row has no fields")]
    EmptyHeader,
    #[error("header field {index} is not a string")]
    InvalidHeader { index: usize },
    #[error("duplicate header field '{0}'")]
    DuplicateField(String),
    #[error("row {row} has {actual} values but the header has {expected} fields")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("record {record} {kind} field '{field}'")]
    SchemaMismatch {
        record: usize,
        field: String,
        kind: MismatchKind,
    },
    #[error("no records to infer a header from")]
    EmptyInput,
    #[error("inconsistent schema: record {record} {kind} field '{field}'")]
    InconsistentSchema {
        record: usize,
        field: String,
        kind: MismatchKind,
    },
    #[error("invalid csv options: {0}")]
    InvalidOptions(String),
}

impl TableError {
    /// Re-tags a converter `SchemaMismatch` as `InconsistentSchema`.
    ///
    /// Other variants pass through unchanged.
    #[must_use]
    pub fn into_inconsistent_schema(self) -> Self {
        match self {
            Self::SchemaMismatch {
                record,
                field,
                kind,
            } => Self::InconsistentSchema {
                record,
                field,
                kind,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid date pattern: {0:?}")]
    InvalidPattern(String),
    #[error("timestamp {0} ms is out of range")]
    TimestampOutOfRange(i64),
}

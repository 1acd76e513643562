//! Scalar formatting helpers.
//!
//! Each function is a small, pure transformation. The outputs are plain
//! strings and numbers that can be stored as [`datafmt_model::Scalar`] cells.

pub mod date;
pub mod duration;
pub mod error;
pub mod number;
pub mod text;

pub use date::{format_date, format_timestamp};
pub use duration::pretty_duration;
pub use error::FormatError;
pub use number::{MAX_DECIMALS, NumberFormat, format_number, round};
pub use text::{camel_case, capitalize};

//! Tabular conversion between matrices and record sets, and CSV serialization.

pub mod convert;
pub mod csv;

pub use crate::convert::{arrays_to_data, data_to_arrays};
pub use crate::csv::{CsvOptions, data_as_csv, matrix_to_csv, records_to_csv};

//! Data formatting helpers.
//!
//! A flat re-export of the workspace crates:
//!
//! - tabular conversion between matrices and record sets
//!   ([`arrays_to_data`], [`data_to_arrays`])
//! - CSV serialization ([`data_as_csv`], [`records_to_csv`], [`matrix_to_csv`])
//! - scalar helpers ([`format_date`], [`format_number`], [`round`],
//!   [`pretty_duration`], [`capitalize`], [`camel_case`])
//!
//! ```
//! use datafmt::{CsvOptions, Matrix, arrays_to_data, records_to_csv};
//!
//! let mut matrix = Matrix::with_header(["id", "name"]);
//! matrix.push_row([datafmt::Scalar::from(1), "Ann".into()]);
//! let records = arrays_to_data(&matrix)?;
//! assert_eq!(records_to_csv(&records, &CsvOptions::default())?, "id,name\n1,Ann");
//! # Ok::<(), datafmt::TableError>(())
//! ```

pub use datafmt_format::{
    FormatError, NumberFormat, camel_case, capitalize, format_date, format_number,
    format_timestamp, pretty_duration, round,
};
pub use datafmt_model::{
    Matrix, MismatchKind, Record, RecordSet, Scalar, TableError, TabularData,
};
pub use datafmt_tabular::{
    CsvOptions, arrays_to_data, data_as_csv, data_to_arrays, matrix_to_csv, records_to_csv,
};

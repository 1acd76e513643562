//! Value model for tabular data: scalars, records, record sets and matrices.

pub mod error;
pub mod matrix;
pub mod record;
pub mod scalar;

pub use error::{MismatchKind, Result, TableError};
pub use matrix::{Matrix, TabularData};
pub use record::{Record, RecordSet};
pub use scalar::{Scalar, render_number};

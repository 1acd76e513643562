//! Positional row representation.

use serde::{Deserialize, Serialize};

use crate::{RecordSet, Scalar};

/// Header row followed by positional data rows.
///
/// The header is stored as ordinary scalars so any JSON array of arrays can
/// be loaded; consumers validate that every header cell is text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<Scalar>>,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<Scalar>>) -> Self {
        Self { rows }
    }

    /// Starts a matrix with the given header names and no data rows.
    pub fn with_header<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header = header
            .into_iter()
            .map(|name| Scalar::Text(name.into()))
            .collect();
        Self { rows: vec![header] }
    }

    pub fn push_row<I, V>(&mut self, row: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn header(&self) -> Option<&[Scalar]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<Scalar>] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Vec<Scalar>> {
        self.rows
    }
}

impl From<Vec<Vec<Scalar>>> for Matrix {
    fn from(rows: Vec<Vec<Scalar>>) -> Self {
        Self::new(rows)
    }
}

/// Input accepted by the CSV serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum TabularData {
    Records(RecordSet),
    Matrix(Matrix),
}

impl From<RecordSet> for TabularData {
    fn from(records: RecordSet) -> Self {
        Self::Records(records)
    }
}

impl From<Matrix> for TabularData {
    fn from(matrix: Matrix) -> Self {
        Self::Matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_rows_skip_header() {
        let mut matrix = Matrix::with_header(["id", "name"]);
        matrix.push_row([Scalar::from(1), Scalar::from("Ann")]);
        assert_eq!(matrix.header().map(<[Scalar]>::len), Some(2));
        assert_eq!(matrix.data_rows().len(), 1);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let matrix = Matrix::default();
        assert!(matrix.header().is_none());
        assert!(matrix.data_rows().is_empty());
    }
}

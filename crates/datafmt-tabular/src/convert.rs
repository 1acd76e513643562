//! Conversion between the positional matrix form and the keyed record form.
//!
//! A matrix carries its field names in row 0; a record set carries them as
//! keys on every record. Both directions validate shape instead of coercing:
//! long rows, duplicate names and records with diverging keys are errors.

use std::collections::HashSet;

use datafmt_model::{Matrix, MismatchKind, Record, RecordSet, Result, Scalar, TableError};
use tracing::{debug, trace};

/// Ordered field names plus a lookup set, borrowed from the input.
#[derive(Debug)]
pub(crate) struct Schema<'a> {
    names: Vec<&'a str>,
    lookup: HashSet<&'a str>,
}

impl<'a> Schema<'a> {
    /// Reads and validates the header row of a matrix.
    pub(crate) fn from_matrix(matrix: &'a Matrix) -> Result<Self> {
        let header = matrix.header().unwrap_or_default();
        if header.is_empty() {
            return Err(TableError::EmptyHeader);
        }
        let mut names = Vec::with_capacity(header.len());
        let mut lookup = HashSet::with_capacity(header.len());
        for (index, cell) in header.iter().enumerate() {
            let name = cell.as_text().ok_or(TableError::InvalidHeader { index })?;
            if !lookup.insert(name) {
                return Err(TableError::DuplicateField(name.to_string()));
            }
            names.push(name);
        }
        Ok(Self { names, lookup })
    }

    /// Takes the first record's keys, in insertion order, as canonical.
    ///
    /// A first record without fields carries no header, same as no records.
    pub(crate) fn from_records(records: &'a RecordSet) -> Result<Self> {
        let first = records
            .first()
            .filter(|record| !record.is_empty())
            .ok_or(TableError::EmptyInput)?;
        let names: Vec<&str> = first.keys().collect();
        let lookup = names.iter().copied().collect();
        Ok(Self { names, lookup })
    }

    pub(crate) fn names(&self) -> &[&'a str] {
        &self.names
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Rejects data rows wider than the header. `row` is 1-based.
    pub(crate) fn check_width(&self, row: usize, values: &[Scalar]) -> Result<()> {
        if values.len() > self.len() {
            return Err(TableError::ShapeMismatch {
                row,
                expected: self.len(),
                actual: values.len(),
            });
        }
        if values.len() < self.len() {
            trace!(
                row,
                missing = self.len() - values.len(),
                "padding short row with nulls"
            );
        }
        Ok(())
    }

    /// Returns the record's values in header order.
    ///
    /// The record's key set must equal the header's key set exactly.
    pub(crate) fn align<'r>(&self, index: usize, record: &'r Record) -> Result<Vec<&'r Scalar>> {
        if let Some(field) = record.keys().find(|key| !self.lookup.contains(key)) {
            return Err(TableError::SchemaMismatch {
                record: index,
                field: field.to_string(),
                kind: MismatchKind::Unexpected,
            });
        }
        self.names
            .iter()
            .map(|name| {
                record.get(name).ok_or_else(|| TableError::SchemaMismatch {
                    record: index,
                    field: (*name).to_string(),
                    kind: MismatchKind::Missing,
                })
            })
            .collect()
    }
}

/// Converts a matrix into one record per data row.
///
/// Short rows are padded with [`Scalar::Null`]; rows longer than the header
/// fail with [`TableError::ShapeMismatch`].
///
/// # Errors
///
/// [`TableError::EmptyHeader`], [`TableError::InvalidHeader`],
/// [`TableError::DuplicateField`] or [`TableError::ShapeMismatch`].
pub fn arrays_to_data(matrix: &Matrix) -> Result<RecordSet> {
    let schema = Schema::from_matrix(matrix)?;
    let mut records = Vec::with_capacity(matrix.data_rows().len());
    for (index, row) in matrix.data_rows().iter().enumerate() {
        schema.check_width(index + 1, row)?;
        let record: Record = schema
            .names()
            .iter()
            .enumerate()
            .map(|(position, name)| (*name, row.get(position).cloned().unwrap_or_default()))
            .collect();
        records.push(record);
    }
    debug!(
        fields = schema.len(),
        rows = records.len(),
        "converted matrix to records"
    );
    Ok(RecordSet::new(records))
}

/// Converts records back into a matrix whose header is the first record's keys.
///
/// # Errors
///
/// [`TableError::EmptyInput`] for an empty record set, and
/// [`TableError::SchemaMismatch`] when a record's keys differ from the first
/// record's.
pub fn data_to_arrays(records: &RecordSet) -> Result<Matrix> {
    let schema = Schema::from_records(records)?;
    let mut rows: Vec<Vec<Scalar>> = Vec::with_capacity(records.len() + 1);
    rows.push(schema.names().iter().map(|name| Scalar::from(*name)).collect());
    for (index, record) in records.iter().enumerate() {
        let values = schema.align(index, record)?;
        rows.push(values.into_iter().cloned().collect());
    }
    debug!(
        fields = schema.len(),
        rows = records.len(),
        "converted records to matrix"
    );
    Ok(Matrix::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<Scalar>>) -> Matrix {
        Matrix::new(rows)
    }

    #[test]
    fn header_rejects_non_text_cells() {
        let input = matrix(vec![vec![Scalar::from("id"), Scalar::from(3)]]);
        assert_eq!(
            Schema::from_matrix(&input).unwrap_err(),
            TableError::InvalidHeader { index: 1 }
        );
    }

    #[test]
    fn missing_header_row_is_empty_header() {
        assert_eq!(
            Schema::from_matrix(&Matrix::default()).unwrap_err(),
            TableError::EmptyHeader
        );
    }

    #[test]
    fn align_reorders_values() {
        let first: Record = [("a", 1), ("b", 2)].into_iter().collect();
        let second: Record = [("b", 4), ("a", 3)].into_iter().collect();
        let records = RecordSet::new(vec![first, second]);
        let schema = Schema::from_records(&records).unwrap();
        let aligned = schema.align(1, &records.records()[1]).unwrap();
        assert_eq!(aligned, vec![&Scalar::Number(3.0), &Scalar::Number(4.0)]);
    }
}

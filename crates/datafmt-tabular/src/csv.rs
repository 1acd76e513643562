//! CSV serialization of record sets and matrices.
//!
//! Output is a single string: an optional header line followed by one line
//! per row, joined by the configured line ending with no trailing separator.
//! A field is quoted when it contains the delimiter, the quote character, a
//! line break or the configured line ending, or when it starts or ends with
//! whitespace. Quote characters inside a quoted field are doubled.

use std::borrow::Cow;

use datafmt_model::{Matrix, RecordSet, Result, Scalar, TableError, TabularData};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::Schema;

/// Serializer configuration.
///
/// Deserializes from camelCase keys; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CsvOptions {
    /// Field separator, `,` by default. May be longer than one character.
    pub delimiter: String,
    /// Separator between lines, `\n` by default.
    pub line_ending: String,
    /// Character used to quote fields, `"` by default.
    pub quote_char: char,
    /// Whether the first line lists the field names.
    pub include_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            line_ending: "\n".to_string(),
            quote_char: '"',
            include_header: true,
        }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    #[must_use]
    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    #[must_use]
    pub fn with_include_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Checks that the options can produce unambiguous output.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidOptions`] for an empty delimiter or line ending,
    /// a delimiter or line ending that contains the quote character, a
    /// delimiter and line ending that overlap, or a line-break quote
    /// character.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(TableError::InvalidOptions(
                "delimiter must not be empty".to_string(),
            ));
        }
        if self.line_ending.is_empty() {
            return Err(TableError::InvalidOptions(
                "line ending must not be empty".to_string(),
            ));
        }
        if self.delimiter.contains(self.quote_char) {
            return Err(TableError::InvalidOptions(format!(
                "delimiter {:?} contains the quote character {:?}",
                self.delimiter, self.quote_char
            )));
        }
        if self.line_ending.contains(self.quote_char) {
            return Err(TableError::InvalidOptions(format!(
                "line ending {:?} contains the quote character {:?}",
                self.line_ending, self.quote_char
            )));
        }
        if self.line_ending.contains(self.delimiter.as_str())
            || self.delimiter.contains(self.line_ending.as_str())
        {
            return Err(TableError::InvalidOptions(format!(
                "delimiter {:?} and line ending {:?} overlap",
                self.delimiter, self.line_ending
            )));
        }
        if matches!(self.quote_char, '\n' | '\r') {
            return Err(TableError::InvalidOptions(format!(
                "quote character {:?} is a line break",
                self.quote_char
            )));
        }
        Ok(())
    }

    fn needs_quotes(&self, field: &str) -> bool {
        field.contains(self.delimiter.as_str())
            || field.contains(self.quote_char)
            || field.contains(['\n', '\r'])
            || field.contains(self.line_ending.as_str())
            || field.starts_with(char::is_whitespace)
            || field.ends_with(char::is_whitespace)
    }

    /// Escapes a single field, borrowing it when no quoting is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use datafmt_tabular::CsvOptions;
    ///
    /// let options = CsvOptions::default();
    /// assert_eq!(options.escape_field("plain"), "plain");
    /// assert_eq!(options.escape_field(r#"A,"B""#), r#""A,""B""""#);
    /// assert_eq!(options.escape_field(" padded"), r#"" padded""#);
    /// ```
    pub fn escape_field<'f>(&self, field: &'f str) -> Cow<'f, str> {
        if !self.needs_quotes(field) {
            return Cow::Borrowed(field);
        }
        let quote = self.quote_char;
        let mut escaped = String::with_capacity(field.len() + 2);
        escaped.push(quote);
        for ch in field.chars() {
            if ch == quote {
                escaped.push(quote);
            }
            escaped.push(ch);
        }
        escaped.push(quote);
        Cow::Owned(escaped)
    }
}

/// Accumulates escaped lines into the output document.
struct LineWriter<'o> {
    options: &'o CsvOptions,
    output: String,
    lines: usize,
}

impl<'o> LineWriter<'o> {
    fn new(options: &'o CsvOptions) -> Self {
        Self {
            options,
            output: String::new(),
            lines: 0,
        }
    }

    fn write_line<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.lines > 0 {
            self.output.push_str(&self.options.line_ending);
        }
        for (position, field) in fields.into_iter().enumerate() {
            if position > 0 {
                self.output.push_str(&self.options.delimiter);
            }
            self.output.push_str(&self.options.escape_field(field.as_ref()));
        }
        self.lines += 1;
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Serializes a record set, using the first record's keys as the header.
///
/// # Errors
///
/// [`TableError::InvalidOptions`], [`TableError::EmptyInput`] for an empty
/// record set, or [`TableError::InconsistentSchema`] when records disagree
/// on their fields.
pub fn records_to_csv(records: &RecordSet, options: &CsvOptions) -> Result<String> {
    options.validate()?;
    let schema = Schema::from_records(records)?;
    let mut writer = LineWriter::new(options);
    if options.include_header {
        writer.write_line(schema.names());
    }
    for (index, record) in records.iter().enumerate() {
        let values = schema
            .align(index, record)
            .map_err(TableError::into_inconsistent_schema)?;
        writer.write_line(values.into_iter().map(Scalar::render));
    }
    debug!(
        fields = schema.len(),
        rows = records.len(),
        header = options.include_header,
        "serialized records as csv"
    );
    Ok(writer.finish())
}

/// Serializes a matrix directly, without building intermediate records.
///
/// Produces the same text as converting with
/// [`arrays_to_data`](crate::arrays_to_data) and calling [`records_to_csv`].
/// A header-only matrix yields just the header line.
///
/// # Errors
///
/// [`TableError::InvalidOptions`], [`TableError::EmptyInput`] for a matrix
/// with no rows, and the header and shape errors of
/// [`arrays_to_data`](crate::arrays_to_data).
pub fn matrix_to_csv(matrix: &Matrix, options: &CsvOptions) -> Result<String> {
    options.validate()?;
    if matrix.is_empty() {
        return Err(TableError::EmptyInput);
    }
    let schema = Schema::from_matrix(matrix)?;
    let mut writer = LineWriter::new(options);
    if options.include_header {
        writer.write_line(schema.names());
    }
    for (index, row) in matrix.data_rows().iter().enumerate() {
        schema.check_width(index + 1, row)?;
        writer.write_line(
            (0..schema.len())
                .map(|position| row.get(position).map(Scalar::render).unwrap_or_default()),
        );
    }
    debug!(
        fields = schema.len(),
        rows = matrix.data_rows().len(),
        header = options.include_header,
        "serialized matrix as csv"
    );
    Ok(writer.finish())
}

/// Serializes either input shape.
///
/// # Errors
///
/// See [`records_to_csv`] and [`matrix_to_csv`].
pub fn data_as_csv(data: &TabularData, options: &CsvOptions) -> Result<String> {
    match data {
        TabularData::Records(records) => records_to_csv(records, options),
        TabularData::Matrix(matrix) => matrix_to_csv(matrix, options),
    }
}

//! Reading delimited records from files or standard input.

use std::io::BufRead;

use rollup::number::Number;

use crate::error::CliError;

/// A non-blank input line split into fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Record {
    /// Line number in the input, starting at 1
    line: usize,
    fields: Vec<String>,
}

impl Record {
    /// Returns the field in the given column.
    pub(crate) fn field(&self, column: usize) -> Result<&str, CliError> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or(CliError::MissingColumn {
                line: self.line,
                column,
            })
    }

    /// Parses the field in the given column as a number.
    pub(crate) fn number(&self, column: usize) -> Result<Number, CliError> {
        self.field(column)?
            .parse::<Number>()
            .map_err(|error| CliError::InvalidValue {
                line: self.line,
                error,
            })
    }
}

/// Reads all records from `reader`.
///
/// Blank lines are skipped, fields are trimmed.
/// If `skip_header` is set, the first line is ignored.
pub(crate) fn read_records<R: BufRead>(
    reader: R,
    delimiter: char,
    skip_header: bool,
) -> Result<Vec<Record>, CliError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        if (skip_header && index == 0) || line.trim().is_empty() {
            continue;
        }

        records.push(Record {
            line: index + 1,
            fields: line
                .split(delimiter)
                .map(|field| field.trim().to_string())
                .collect(),
        });
    }

    log::info!("read {} records", records.len());

    Ok(records)
}

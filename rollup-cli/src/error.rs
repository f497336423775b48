//! This module defines all the errors that can occur while executing rollup-cli.

use rollup::error::AggregateError;
use thiserror::Error;

/// Error that occur during execution of the rollup CLI app
#[derive(Error, Debug)]
pub enum CliError {
    /// Error while reading the input file
    #[error("failed to read \"{filename}\": {error}")]
    IoReading {
        /// Contains the wrapped error
        #[source]
        error: std::io::Error,
        /// Filename which caused the error
        filename: String,
    },
    /// A record is shorter than a requested column index
    #[error("line {line} has no column {column}")]
    MissingColumn {
        /// Line number of the record, starting at 1
        line: usize,
        /// Requested zero-based column index
        column: usize,
    },
    /// A field could not be used as a number
    #[error("line {line}: {error}")]
    InvalidValue {
        /// Line number of the record, starting at 1
        line: usize,
        /// Error from parsing the field
        #[source]
        error: AggregateError,
    },
    /// The command groups its input but no key column was given
    #[error("the {command} command requires --key-column")]
    MissingKeyColumn {
        /// Name of the command
        command: &'static str,
    },
    /// Error resulting from io operations
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Error originating from the aggregation
    #[error(transparent)]
    AggregateError(#[from] AggregateError),
    /// Error while printing the result
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
}

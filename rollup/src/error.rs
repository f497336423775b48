//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for all the possible Errors occurring in this crate
///
/// Any error aborts the fold or grouping pass that raised it,
/// no partial results are reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    /// Checked integer or rational arithmetic left the representable range
    #[error("numeric overflow in {operation}")]
    Overflow {
        /// Operation that overflowed, e.g. "sum aggregate"
        operation: &'static str,
    },
    /// Text could not be interpreted as a [`Number`][crate::number::Number]
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
    /// A key function rejected its input
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl AggregateError {
    /// Convenience constructor for key functions that reject an input.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }
}

//! This crate provides rolling aggregates over in-memory sequences.
//!
//! An [aggregator][aggregates::Aggregator] consumes input values one at a time,
//! keeps a running state and reports a result after it has been finished.
//! The drivers in [fold] and [grouping] feed a sequence through a list of aggregators
//! in a single pass, either as a whole or partitioned by a derived key.
//!
//! ```
//! use rollup::{aggregates::{Count, Extremum, Mean, Sum}, fold::aggregate_values, number::Number};
//!
//! let (count, sum, mean, max) = aggregate_values(
//!     0..10,
//!     (Count::new(), Sum::new(), Mean::new(), Extremum::max()),
//! )
//! .unwrap();
//!
//! assert_eq!(count, Number::from(10));
//! assert_eq!(sum, Some(Number::from(45)));
//! assert_eq!(mean, Some(Number::ratio(9, 2)));
//! assert_eq!(max, Some(9));
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod aggregates;
pub mod error;
pub mod fold;
pub mod grouping;
pub mod number;
pub mod summary;

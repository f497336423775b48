//! Built-in aggregates, which determine how a sequence of input values is reduced to a single output value.
//!
//! Every aggregate implements [`Aggregator`], and so does every tuple, [`Vec`] and [`Box`] of aggregates.
//! This allows passing a whole list of aggregates to the drivers in [`crate::fold`] and [`crate::grouping`].
//!
//! Aggregates operate on a value derived from each input by a key function.
//! The defaults are listed in [`key`].

pub mod aggregator;
pub mod collect;
pub mod count;
pub mod extremum;
pub mod key;
pub mod mean;
pub mod sum;

pub use aggregator::Aggregator;
pub use collect::Collect;
pub use count::Count;
pub use extremum::{Extremum, ExtremumOutput, FromInput, FromKey};
pub use mean::Mean;
pub use sum::Sum;

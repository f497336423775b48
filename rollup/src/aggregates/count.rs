//! Counts the input values.

use std::fmt::Debug;

use crate::{error::AggregateError, number::Number};

use super::{
    aggregator::Aggregator,
    key::{self, KeyFn},
};

/// Running sum of a per-input weight, which is `1` unless a key is given.
///
/// Unlike the other numeric aggregates a count starts at a real zero,
/// so it reports `0` for an empty input.
pub struct Count<I> {
    current_count: Number,
    key: KeyFn<I, Number>,
}

impl<I: 'static> Count<I> {
    /// Creates a count starting at zero that counts every input once.
    pub fn new() -> Self {
        Self {
            current_count: Number::Integer(0),
            key: key::numeric(key::one),
        }
    }

    /// Creates a count that adds `weight(input)` for every input instead of `1`.
    pub fn by_key<K, F>(weight: F) -> Self
    where
        K: Into<Number> + 'static,
        F: Fn(&I) -> K + 'static,
    {
        Self {
            key: key::numeric(weight),
            ..Self::new()
        }
    }

    /// Like [`Count::by_key`], for weights that can fail to be computed.
    pub fn by_try_key<F>(weight: F) -> Self
    where
        F: Fn(&I) -> Result<Number, AggregateError> + 'static,
    {
        Self {
            key: Box::new(weight),
            ..Self::new()
        }
    }

    /// Replaces the initial count of zero.
    pub fn starting_at(mut self, initial: impl Into<Number>) -> Self {
        self.current_count = initial.into();
        self
    }
}

impl<I: 'static> Default for Count<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Debug for Count<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Count")
            .field("current_count", &self.current_count)
            .finish_non_exhaustive()
    }
}

impl<I> Aggregator<I> for Count<I> {
    type Output = Number;

    fn step(&mut self, input: &I) -> Result<(), AggregateError> {
        let weight = (self.key)(input)?;
        self.current_count = self.current_count.checked_add(&weight)?;
        Ok(())
    }

    fn finish(&mut self) {}

    fn value(&self) -> Number {
        self.current_count
    }
}

//! Computes the sum of all input values.

use std::fmt::Debug;

use crate::{error::AggregateError, number::Number};

use super::{
    aggregator::Aggregator,
    key::{self, KeyFn},
};

/// Sum of the key values of all inputs.
///
/// The sum of an empty input is unset (`None`), not zero.
/// The first key value replaces the unset state.
pub struct Sum<I> {
    current_sum: Option<Number>,
    key: KeyFn<I, Number>,
}

impl<I> Sum<I>
where
    I: Clone + Into<Number> + 'static,
{
    /// Creates a sum of the inputs themselves.
    pub fn new() -> Self {
        Self::by_key(|input: &I| input.clone())
    }
}

impl<I: 'static> Sum<I> {
    /// Creates a sum of `key(input)` over all inputs.
    pub fn by_key<K, F>(summand: F) -> Self
    where
        K: Into<Number> + 'static,
        F: Fn(&I) -> K + 'static,
    {
        Self {
            current_sum: None,
            key: key::numeric(summand),
        }
    }

    /// Like [`Sum::by_key`], for key functions that can reject an input.
    pub fn by_try_key<F>(summand: F) -> Self
    where
        F: Fn(&I) -> Result<Number, AggregateError> + 'static,
    {
        Self {
            current_sum: None,
            key: Box::new(summand),
        }
    }

    /// Starts the sum at `initial` instead of the unset state.
    pub fn starting_at(mut self, initial: impl Into<Number>) -> Self {
        self.current_sum = Some(initial.into());
        self
    }
}

impl<I> Default for Sum<I>
where
    I: Clone + Into<Number> + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Debug for Sum<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sum")
            .field("current_sum", &self.current_sum)
            .finish_non_exhaustive()
    }
}

impl<I> Aggregator<I> for Sum<I> {
    type Output = Option<Number>;

    fn step(&mut self, input: &I) -> Result<(), AggregateError> {
        let summand = (self.key)(input)?;
        self.current_sum = Some(match &self.current_sum {
            Some(current_sum) => current_sum.checked_add(&summand)?,
            None => summand,
        });
        Ok(())
    }

    fn finish(&mut self) {}

    fn value(&self) -> Option<Number> {
        self.current_sum
    }
}

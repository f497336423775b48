//! Computes the arithmetic mean of all input values.

use std::fmt::Debug;

use crate::{error::AggregateError, number::Number};

use super::{
    aggregator::Aggregator,
    key::{self, KeyFn},
};

/// Mean of the key values of all inputs.
///
/// While stepping only the running sum and the number of inputs are tracked,
/// the division happens once in [`Aggregator::finish`].
/// Before finishing, [`Aggregator::value`] therefore reports the running sum.
///
/// Integer input yields an exact rational mean, e.g. `9/2` for `0..10`.
pub struct Mean<I> {
    current_value: Option<Number>,
    count: usize,
    finished: bool,
    key: KeyFn<I, Number>,
}

impl<I> Mean<I>
where
    I: Clone + Into<Number> + 'static,
{
    /// Creates the mean of the inputs themselves.
    pub fn new() -> Self {
        Self::by_key(|input: &I| input.clone())
    }
}

impl<I: 'static> Mean<I> {
    /// Creates the mean of `key(input)` over all inputs.
    pub fn by_key<K, F>(summand: F) -> Self
    where
        K: Into<Number> + 'static,
        F: Fn(&I) -> K + 'static,
    {
        Self::from_key_fn(key::numeric(summand))
    }

    /// Like [`Mean::by_key`], for key functions that can reject an input.
    pub fn by_try_key<F>(summand: F) -> Self
    where
        F: Fn(&I) -> Result<Number, AggregateError> + 'static,
    {
        Self::from_key_fn(Box::new(summand))
    }

    fn from_key_fn(key: KeyFn<I, Number>) -> Self {
        Self {
            current_value: None,
            count: 0,
            finished: false,
            key,
        }
    }

    /// Starts the running sum at `initial` instead of the unset state.
    ///
    /// The initial value does not count as an input,
    /// so the mean stays unset if no inputs follow.
    pub fn starting_at(mut self, initial: impl Into<Number>) -> Self {
        self.current_value = Some(initial.into());
        self
    }
}

impl<I> Default for Mean<I>
where
    I: Clone + Into<Number> + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Debug for Mean<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mean")
            .field("current_value", &self.current_value)
            .field("count", &self.count)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<I> Aggregator<I> for Mean<I> {
    type Output = Option<Number>;

    fn step(&mut self, input: &I) -> Result<(), AggregateError> {
        debug_assert!(!self.finished, "mean aggregate stepped after finish");

        let summand = (self.key)(input)?;
        self.current_value = Some(match &self.current_value {
            Some(current_sum) => current_sum.checked_add(&summand)?,
            None => summand,
        });
        self.count += 1;

        Ok(())
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }

        self.finished = true;
        self.current_value = self
            .current_value
            .and_then(|sum| sum.divide_by_count(self.count));
    }

    fn value(&self) -> Option<Number> {
        self.current_value
    }
}

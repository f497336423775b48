//! Collects the key values of all inputs into a list.

use std::{collections::VecDeque, fmt::Debug};

use crate::error::AggregateError;

use super::{
    aggregator::Aggregator,
    key::{self, KeyFn},
};

/// Transformation applied to the collected list when finishing.
type Finisher<K> = Box<dyn Fn(Vec<K>) -> Vec<K>>;

#[derive(Debug)]
enum Collected<K> {
    /// Newest value at the front
    Running(VecDeque<K>),
    Finished(Vec<K>),
}

/// List of the key values of all inputs.
///
/// Values are prepended while stepping, so the running list is in reverse arrival order.
/// Finishing hands that list to the finishing transformation,
/// which by default reverses it back into arrival order.
/// A custom transformation, e.g. sorting, determines the final order instead.
pub struct Collect<I, K = I> {
    collected: Option<Collected<K>>,
    key: KeyFn<I, K>,
    finisher: Finisher<K>,
}

impl<I> Collect<I>
where
    I: Clone + 'static,
{
    /// Creates an aggregate collecting the inputs themselves.
    pub fn new() -> Self {
        Self::by_key(key::identity)
    }
}

impl<I, K> Collect<I, K>
where
    I: 'static,
    K: 'static,
{
    /// Creates an aggregate collecting `key(input)` for every input.
    pub fn by_key<F>(extract: F) -> Self
    where
        F: Fn(&I) -> K + 'static,
    {
        Self {
            collected: None,
            key: key::infallible(extract),
            finisher: Box::new(|mut values: Vec<K>| {
                values.reverse();
                values
            }),
        }
    }

    /// Replaces the finishing transformation.
    ///
    /// The transformation receives the values in reverse arrival order.
    pub fn finishing_with<F>(mut self, finisher: F) -> Self
    where
        F: Fn(Vec<K>) -> Vec<K> + 'static,
    {
        self.finisher = Box::new(finisher);
        self
    }

    /// Starts with `initial` values, which count as having arrived before any input.
    pub fn starting_with(mut self, initial: Vec<K>) -> Self {
        self.collected = Some(Collected::Running(initial.into_iter().rev().collect()));
        self
    }
}

impl<I> Default for Collect<I>
where
    I: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, K: Debug> Debug for Collect<I, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collect")
            .field("collected", &self.collected)
            .finish_non_exhaustive()
    }
}

impl<I, K> Aggregator<I> for Collect<I, K>
where
    K: Clone,
{
    type Output = Option<Vec<K>>;

    fn step(&mut self, input: &I) -> Result<(), AggregateError> {
        debug_assert!(
            !matches!(self.collected, Some(Collected::Finished(_))),
            "collect aggregate stepped after finish"
        );

        let value = (self.key)(input)?;

        match &mut self.collected {
            Some(Collected::Running(values)) => values.push_front(value),
            Some(Collected::Finished(_)) => {}
            None => self.collected = Some(Collected::Running(VecDeque::from([value]))),
        }

        Ok(())
    }

    fn finish(&mut self) {
        self.collected = match self.collected.take() {
            Some(Collected::Running(values)) => {
                Some(Collected::Finished((self.finisher)(Vec::from(values))))
            }
            other => other,
        };
    }

    fn value(&self) -> Option<Vec<K>> {
        match &self.collected {
            Some(Collected::Running(values)) => Some(values.iter().cloned().collect()),
            Some(Collected::Finished(values)) => Some(values.clone()),
            None => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Collect;
    use crate::aggregates::Aggregator;
    use test_log::test;

    fn step_all<A: Aggregator<&'static str>>(aggregator: &mut A, inputs: &[&'static str]) {
        for input in inputs {
            aggregator.step(input).expect("collecting does not fail");
        }
    }

    #[test]
    fn arrival_order() {
        let mut collect = Collect::<&str>::new();
        assert_eq!(collect.value(), None);

        step_all(&mut collect, &["x", "y", "z"]);
        assert_eq!(collect.value(), Some(vec!["z", "y", "x"]));

        collect.finish();
        assert_eq!(collect.value(), Some(vec!["x", "y", "z"]));

        collect.finish();
        assert_eq!(collect.value(), Some(vec!["x", "y", "z"]));
    }

    #[test]
    fn custom_finisher() {
        let sorted = |mut lengths: Vec<usize>| {
            lengths.sort_unstable();
            lengths
        };
        let collect = Collect::<&str, usize>::by_key(|word| word.len());
        let mut collect = collect.finishing_with(sorted);
        step_all(&mut collect, &["three", "one", "four"]);
        collect.finish();
        assert_eq!(collect.value(), Some(vec![3, 4, 5]));
    }

    #[test]
    fn identity_finisher_sees_reverse_order() {
        let mut collect = Collect::<&str>::new().finishing_with(|values| values);
        step_all(&mut collect, &["a", "b"]);
        collect.finish();
        assert_eq!(collect.value(), Some(vec!["b", "a"]));
    }

    #[test]
    fn initial_values_come_first() {
        let mut collect = Collect::<&str>::new().starting_with(vec!["p", "q"]);
        step_all(&mut collect, &["r"]);
        collect.finish();
        assert_eq!(collect.value(), Some(vec!["p", "q", "r"]));
    }
}

//! Computes the minimum or maximum of all input values.
//!
//! Both are the same [`Extremum`] aggregate, which only differs in the comparator.

use std::{fmt::Debug, marker::PhantomData};

use crate::error::AggregateError;

use super::{
    aggregator::Aggregator,
    key::{self, KeyFn},
};

/// Comparator deciding whether a candidate replaces the current extreme value.
///
/// It is always called as `replaces(candidate, current)`.
type Comparator<K> = Box<dyn Fn(&K, &K) -> bool>;

/// Selects what an [`Extremum`] reports as its value.
pub trait ExtremumOutput<I, K> {
    /// Type of the reported value
    type Output;

    /// Computes the reported value from the extreme key value and the input it was derived from.
    fn select(value: Option<&K>, item: Option<&I>) -> Self::Output;
}

/// Report the extreme key value. This is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FromKey;

impl<I, K: Clone> ExtremumOutput<I, K> for FromKey {
    type Output = Option<K>;

    fn select(value: Option<&K>, _item: Option<&I>) -> Option<K> {
        value.cloned()
    }
}

/// Report the input that produced the extreme key value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FromInput;

impl<I: Clone, K> ExtremumOutput<I, K> for FromInput {
    type Output = Option<I>;

    fn select(_value: Option<&K>, item: Option<&I>) -> Option<I> {
        item.cloned()
    }
}

/// Minimum or maximum of the key values of all inputs.
///
/// Besides the extreme key value the aggregate remembers the input it was computed from.
/// A candidate only replaces the current extreme if the comparator says so,
/// hence among inputs with equal keys the first one is kept.
///
/// The output mode `M` is either [`FromKey`] or [`FromInput`].
pub struct Extremum<I, K, M = FromKey> {
    current_value: Option<K>,
    current_item: Option<I>,
    key: KeyFn<I, K>,
    replaces: Comparator<K>,
    output: PhantomData<M>,
}

impl<I> Extremum<I, I>
where
    I: Clone + PartialOrd + 'static,
{
    /// Creates an aggregate computing the smallest input.
    pub fn min() -> Self {
        Self::min_by_key(key::identity)
    }

    /// Creates an aggregate computing the largest input.
    pub fn max() -> Self {
        Self::max_by_key(key::identity)
    }
}

impl<I, K> Extremum<I, K>
where
    I: 'static,
    K: PartialOrd + 'static,
{
    /// Creates an aggregate computing the smallest `key(input)`.
    pub fn min_by_key<F>(key: F) -> Self
    where
        F: Fn(&I) -> K + 'static,
    {
        Self::min_by(key, |candidate, current| candidate < current)
    }

    /// Creates an aggregate computing the largest `key(input)`.
    pub fn max_by_key<F>(key: F) -> Self
    where
        F: Fn(&I) -> K + 'static,
    {
        Self::max_by(key, |candidate, current| candidate > current)
    }
}

impl<I, K> Extremum<I, K>
where
    I: 'static,
    K: 'static,
{
    /// Creates an aggregate computing the smallest `key(input)` according to `less_than`.
    pub fn min_by<F, C>(key: F, less_than: C) -> Self
    where
        F: Fn(&I) -> K + 'static,
        C: Fn(&K, &K) -> bool + 'static,
    {
        Self::with_comparator(key, less_than)
    }

    /// Creates an aggregate computing the largest `key(input)` according to `greater_than`.
    pub fn max_by<F, C>(key: F, greater_than: C) -> Self
    where
        F: Fn(&I) -> K + 'static,
        C: Fn(&K, &K) -> bool + 'static,
    {
        Self::with_comparator(key, greater_than)
    }

    fn with_comparator<F, C>(extract: F, replaces: C) -> Self
    where
        F: Fn(&I) -> K + 'static,
        C: Fn(&K, &K) -> bool + 'static,
    {
        Self {
            current_value: None,
            current_item: None,
            key: key::infallible(extract),
            replaces: Box::new(replaces),
            output: PhantomData,
        }
    }
}

impl<I, K, M> Extremum<I, K, M> {
    /// Starts with `initial` as the extreme key value.
    ///
    /// No input is associated with the initial value,
    /// so in [`FromInput`] mode the aggregate reports `None` until an input replaces it.
    pub fn starting_at(mut self, initial: K) -> Self {
        self.current_value = Some(initial);
        self
    }

    /// Reports the input that produced the extreme key value instead of the key value itself.
    pub fn from_input(self) -> Extremum<I, K, FromInput> {
        Extremum {
            current_value: self.current_value,
            current_item: self.current_item,
            key: self.key,
            replaces: self.replaces,
            output: PhantomData,
        }
    }

    /// Returns the input that produced the current extreme value, independent of the output mode.
    pub fn item(&self) -> Option<&I> {
        self.current_item.as_ref()
    }
}

impl<I: Debug, K: Debug, M> Debug for Extremum<I, K, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extremum")
            .field("current_value", &self.current_value)
            .field("current_item", &self.current_item)
            .finish_non_exhaustive()
    }
}

impl<I, K, M> Aggregator<I> for Extremum<I, K, M>
where
    I: Clone,
    M: ExtremumOutput<I, K>,
{
    type Output = M::Output;

    fn step(&mut self, input: &I) -> Result<(), AggregateError> {
        let candidate = (self.key)(input)?;

        let replace = match &self.current_value {
            Some(current_value) => (self.replaces)(&candidate, current_value),
            None => true,
        };

        if replace {
            self.current_value = Some(candidate);
            self.current_item = Some(input.clone());
        }

        Ok(())
    }

    fn finish(&mut self) {}

    fn value(&self) -> Self::Output {
        M::select(self.current_value.as_ref(), self.current_item.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::Extremum;
    use crate::aggregates::Aggregator;
    use test_log::test;

    fn run<A: Aggregator<(char, i32)>>(mut aggregator: A, inputs: &[(char, i32)]) -> A::Output {
        for input in inputs {
            aggregator.step(input).expect("comparing does not fail");
        }
        aggregator.finish();
        aggregator.value()
    }

    const INPUTS: [(char, i32); 5] = [('a', 3), ('b', 1), ('c', 7), ('d', 1), ('e', 7)];

    #[test]
    fn min_and_max() {
        // tuples compare lexicographically
        assert_eq!(run(Extremum::min(), &INPUTS), Some(('a', 3)));
        assert_eq!(run(Extremum::max(), &INPUTS), Some(('e', 7)));
        assert_eq!(run(Extremum::min(), &[]), None);
    }

    #[test]
    fn ties_keep_the_first_input() {
        let min = Extremum::min_by_key(|input: &(char, i32)| input.1);
        assert_eq!(run(min.from_input(), &INPUTS), Some(('b', 1)));

        let max = Extremum::max_by_key(|input: &(char, i32)| input.1);
        assert_eq!(run(max.from_input(), &INPUTS), Some(('c', 7)));

        let mut max = Extremum::max_by_key(|input: &(char, i32)| input.1);
        for input in &INPUTS {
            max.step(input).expect("comparing does not fail");
        }
        max.finish();
        assert_eq!(max.value(), Some(7));
        assert_eq!(max.item(), Some(&('c', 7)));
    }

    #[test]
    fn custom_comparator_order() {
        // longest name wins, comparator sees (candidate, current)
        let longest = Extremum::<&str, usize>::max_by(
            |name| name.len(),
            |candidate, current| candidate > current,
        );
        let mut longest = longest.from_input();
        for name in ["ada", "grace", "alan", "barbara", "edsger"] {
            longest.step(&name).expect("comparing does not fail");
        }
        longest.finish();
        assert_eq!(longest.value(), Some("barbara"));
    }

    #[test]
    fn initial_value_without_item() {
        let mut min = Extremum::min_by_key(|input: &(char, i32)| input.1).starting_at(0);
        for input in &INPUTS {
            min.step(input).expect("comparing does not fail");
        }
        min.finish();
        assert_eq!(min.value(), Some(0));
        assert_eq!(min.item(), None);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut max = Extremum::max();
        max.step(&4).expect("comparing does not fail");
        max.finish();
        let once = max.value();
        max.finish();
        assert_eq!(max.value(), once);
    }
}

//! Key functions derive the value an aggregate operates on from a raw input value.
//!
//! Defaults used by the built-in aggregates:
//! * [`one`] for [`Count`][super::Count], so that every input is counted once,
//! * the input converted into a [`Number`] for [`Sum`][super::Sum] and [`Mean`][super::Mean],
//! * [`identity`] for [`Extremum`][super::Extremum] and [`Collect`][super::Collect].

use crate::{error::AggregateError, number::Number};

/// Boxed key function as stored by the aggregates.
///
/// Key functions may reject an input, which aborts the aggregation.
pub type KeyFn<I, K> = Box<dyn Fn(&I) -> Result<K, AggregateError>>;

/// Returns a copy of the input.
pub fn identity<I: Clone>(input: &I) -> I {
    input.clone()
}

/// Returns the number `1` for every input.
pub fn one<I>(_input: &I) -> Number {
    Number::Integer(1)
}

/// Boxes a key function which never fails.
pub(crate) fn infallible<I, K, F>(key: F) -> KeyFn<I, K>
where
    I: 'static,
    K: 'static,
    F: Fn(&I) -> K + 'static,
{
    Box::new(move |input| Ok(key(input)))
}

/// Boxes a key function producing anything convertible into a [`Number`].
pub(crate) fn numeric<I, K, F>(key: F) -> KeyFn<I, Number>
where
    I: 'static,
    K: Into<Number> + 'static,
    F: Fn(&I) -> K + 'static,
{
    Box::new(move |input| Ok(key(input).into()))
}

//! Folding a whole sequence through a list of aggregates.

use crate::{aggregates::Aggregator, error::AggregateError};

/// Feeds every input to `aggregators` and finishes them afterwards.
///
/// This is a single pass over `inputs`, so the sequence has to be finite.
/// `aggregators` can be a single aggregate, a tuple, a [`Vec`] or a [`Box`] of aggregates;
/// a list is stepped and finished in list order.
/// Pass [`Count::default()`][crate::aggregates::Count] if you only need the number of inputs.
///
/// The first error raised while stepping aborts the whole pass.
pub fn aggregate<I, T, A>(inputs: T, mut aggregators: A) -> Result<A, AggregateError>
where
    T: IntoIterator<Item = I>,
    A: Aggregator<I>,
{
    let mut input_count: usize = 0;

    for input in inputs {
        aggregators.step(&input)?;
        input_count += 1;
    }

    aggregators.finish();
    log::debug!("aggregated {input_count} inputs");

    Ok(aggregators)
}

/// Like [`aggregate`], but returns the values of the finished aggregates.
pub fn aggregate_values<I, T, A>(inputs: T, aggregators: A) -> Result<A::Output, AggregateError>
where
    T: IntoIterator<Item = I>,
    A: Aggregator<I>,
{
    aggregate(inputs, aggregators).map(|aggregators| aggregators.value())
}

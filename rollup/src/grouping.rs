//! Partitioning a sequence by a derived key and aggregating every partition separately.
//!
//! None of the returned maps has a meaningful iteration order.

use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
};

use crate::{
    aggregates::{Aggregator, Collect},
    error::AggregateError,
};

/// Groups `inputs` by `key` and aggregates every group with its own aggregates.
///
/// The first input of a group creates the group's aggregates by calling `factory`,
/// so `factory` is called exactly once per distinct key.
/// Every input is then stepped through the aggregates of its group, in sequence order.
/// After the pass all aggregates are finished.
///
/// An empty input yields an empty map.
/// The identity key is [`key::identity`][crate::aggregates::key::identity],
/// the counting factory is [`Count::default`][crate::aggregates::Count].
pub fn group<I, T, K, A, F, G>(
    inputs: T,
    mut key: F,
    mut factory: G,
) -> Result<HashMap<K, A>, AggregateError>
where
    T: IntoIterator<Item = I>,
    K: Hash + Eq,
    A: Aggregator<I>,
    F: FnMut(&I) -> K,
    G: FnMut() -> A,
{
    let mut partitions = HashMap::<K, A>::new();

    for input in inputs {
        let partition_count = partitions.len();
        let aggregators = match partitions.entry(key(&input)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::trace!("creating partition {}", partition_count + 1);
                entry.insert(factory())
            }
        };

        aggregators.step(&input)?;
    }

    for aggregators in partitions.values_mut() {
        aggregators.finish();
    }

    log::debug!("grouped inputs into {} partitions", partitions.len());

    Ok(partitions)
}

/// Like [`group`], but returns the values of the finished aggregates of every group.
pub fn group_values<I, T, K, A, F, G>(
    inputs: T,
    key: F,
    factory: G,
) -> Result<HashMap<K, A::Output>, AggregateError>
where
    T: IntoIterator<Item = I>,
    K: Hash + Eq,
    A: Aggregator<I>,
    F: FnMut(&I) -> K,
    G: FnMut() -> A,
{
    Ok(group(inputs, key, factory)?
        .into_iter()
        .map(|(key, aggregators)| (key, aggregators.value()))
        .collect())
}

/// Counts how many inputs fall into every group.
///
/// Equivalent to [`group`] with a single [`Count`][crate::aggregates::Count] per group,
/// but counts directly.
pub fn tally<I, T, K, F>(inputs: T, mut key: F) -> HashMap<K, usize>
where
    T: IntoIterator<Item = I>,
    K: Hash + Eq,
    F: FnMut(&I) -> K,
{
    let mut counts = HashMap::new();

    for input in inputs {
        *counts.entry(key(&input)).or_insert(0) += 1;
    }

    counts
}

/// Collects the inputs of every group, keeping their order.
pub fn gather_by<I, T, K, F>(inputs: T, key: F) -> Result<HashMap<K, Vec<I>>, AggregateError>
where
    I: Clone + 'static,
    T: IntoIterator<Item = I>,
    K: Hash + Eq,
    F: FnMut(&I) -> K,
{
    Ok(group(inputs, key, Collect::new)?
        .into_iter()
        .map(|(key, collect)| (key, collect.value().unwrap_or_default()))
        .collect())
}

/// Like [`gather_by`], but only returns the groups.
///
/// The order of the groups is unspecified.
pub fn gather_by_values<I, T, K, F>(inputs: T, key: F) -> Result<Vec<Vec<I>>, AggregateError>
where
    I: Clone + 'static,
    T: IntoIterator<Item = I>,
    K: Hash + Eq,
    F: FnMut(&I) -> K,
{
    Ok(gather_by(inputs, key)?.into_values().collect())
}

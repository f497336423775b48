//! Quick exploratory summaries: count, minimum, maximum and mean in one pass.

use std::{collections::HashMap, fmt::Display, hash::Hash};

use serde::Serialize;

use crate::{
    aggregates::{Aggregator, Count, Extremum, Mean},
    error::AggregateError,
    fold::aggregate_values,
    grouping::group_values,
    number::Number,
};

/// Count, minimum, maximum and mean of a sequence of numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Number of inputs
    pub count: Number,
    /// Smallest input, unset for an empty sequence
    pub min: Option<Number>,
    /// Largest input, unset for an empty sequence
    pub max: Option<Number>,
    /// Arithmetic mean, unset for an empty sequence
    pub mean: Option<Number>,
}

impl Summary {
    /// Returns the metrics as `(name, value)` pairs in the order count, min, max, mean.
    pub fn entries(&self) -> [(&'static str, Option<Number>); 4] {
        [
            ("count", Some(self.count)),
            ("min", self.min),
            ("max", self.max),
            ("mean", self.mean),
        ]
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut separator = "";
        for (name, value) in self.entries() {
            match value {
                Some(value) => write!(f, "{separator}{name}: {value}")?,
                None => write!(f, "{separator}{name}: -")?,
            }
            separator = ", ";
        }

        Ok(())
    }
}

fn summary_aggregators<I, N, V>(
    value: V,
) -> impl Aggregator<I, Output = (Number, Option<Number>, Option<Number>, Option<Number>)>
where
    I: Clone + 'static,
    N: Into<Number>,
    V: Fn(&I) -> N + Clone + 'static,
{
    let number = move |input: &I| -> Number { value(input).into() };

    (
        Count::new(),
        Extremum::min_by_key(number.clone()),
        Extremum::max_by_key(number.clone()),
        Mean::by_key(number),
    )
}

fn into_summary(
    (count, min, max, mean): (Number, Option<Number>, Option<Number>, Option<Number>),
) -> Summary {
    Summary {
        count,
        min,
        max,
        mean,
    }
}

/// Summarizes a sequence of numbers.
pub fn summarize<I, T>(inputs: T) -> Result<Summary, AggregateError>
where
    I: Clone + Into<Number> + 'static,
    T: IntoIterator<Item = I>,
{
    let aggregators = summary_aggregators(|input: &I| input.clone());
    aggregate_values(inputs, aggregators).map(into_summary)
}

/// Summarizes `value(input)` separately for every group of `inputs`.
///
/// Inputs are grouped by `key` as in [`group`][crate::grouping::group].
pub fn summarize_by<I, T, K, F, N, V>(
    inputs: T,
    key: F,
    value: V,
) -> Result<HashMap<K, Summary>, AggregateError>
where
    I: Clone + 'static,
    T: IntoIterator<Item = I>,
    K: Hash + Eq,
    F: FnMut(&I) -> K,
    N: Into<Number>,
    V: Fn(&I) -> N + Clone + 'static,
{
    let summaries = group_values(inputs, key, || summary_aggregators(value.clone()))?;

    Ok(summaries
        .into_iter()
        .map(|(key, values)| (key, into_summary(values)))
        .collect())
}

use std::collections::HashMap;

use quickcheck_macros::quickcheck;
use rollup::{
    aggregates::{key, Aggregator, Count, Extremum, Mean, Sum},
    fold::{aggregate, aggregate_values},
    grouping::{gather_by, gather_by_values, group_values, tally},
    number::Number,
};

#[quickcheck]
fn count_is_length_plus_initial(inputs: Vec<u8>, initial: i32) -> bool {
    let count = aggregate_values(inputs.clone(), Count::new().starting_at(initial))
        .expect("counting small inputs does not overflow");

    count == Number::from(inputs.len() as i64 + i64::from(initial))
}

#[quickcheck]
fn sum_is_unset_or_total(inputs: Vec<i32>, initial: Option<i32>) -> bool {
    let sum = match initial {
        Some(initial) => Sum::new().starting_at(initial),
        None => Sum::new(),
    };
    let result = aggregate_values(inputs.clone(), sum).expect("i32 inputs do not overflow");

    let total: i64 = inputs.iter().map(|&x| i64::from(x)).sum();
    match (inputs.is_empty(), initial) {
        (true, None) => result.is_none(),
        (_, initial) => result == Some(Number::from(total + i64::from(initial.unwrap_or(0)))),
    }
}

#[quickcheck]
fn mean_is_exact(inputs: Vec<i32>) -> bool {
    let mean = aggregate_values(inputs.clone(), Mean::new()).expect("i32 inputs do not overflow");

    if inputs.is_empty() {
        return mean.is_none();
    }

    let total: i64 = inputs.iter().map(|&x| i64::from(x)).sum();
    mean == Some(Number::ratio(total, inputs.len() as i64))
}

#[quickcheck]
fn finish_is_idempotent(inputs: Vec<i16>) -> bool {
    let mut aggregators = aggregate(
        inputs,
        (Count::new(), Extremum::min(), Extremum::max(), Mean::new()),
    )
    .expect("i16 inputs do not overflow");

    let once = aggregators.value();
    aggregators.finish();
    aggregators.value() == once
}

fn first_with_key(inputs: &[(u8, u32)], key: Option<u8>) -> Option<(u8, u32)> {
    let key = key?;
    inputs.iter().copied().find(|pair| pair.0 % 4 == key)
}

#[quickcheck]
fn extremes_keep_first_occurrence(inputs: Vec<(u8, u32)>) -> bool {
    // keys are taken modulo 4 to force ties
    let key_of = |pair: &(u8, u32)| pair.0 % 4;

    let (min, max) = aggregate_values(
        inputs.clone(),
        (
            Extremum::min_by_key(key_of).from_input(),
            Extremum::max_by_key(key_of).from_input(),
        ),
    )
    .expect("comparing does not fail");

    let expected_min = first_with_key(&inputs, inputs.iter().map(key_of).min());
    let expected_max = first_with_key(&inputs, inputs.iter().map(key_of).max());

    min == expected_min && max == expected_max
}

#[quickcheck]
fn tally_matches_grouped_count(inputs: Vec<u8>) -> bool {
    let modulus = |x: &u8| x % 5;

    let counts = tally(inputs.clone(), modulus);
    let grouped = group_values(inputs, modulus, Count::default).expect("counting does not fail");

    counts.len() == grouped.len()
        && counts
            .iter()
            .all(|(key, count)| grouped[key] == Number::from(*count))
}

#[quickcheck]
fn gather_keeps_sequence_order(inputs: Vec<u16>) -> bool {
    let groups = gather_by(inputs.clone(), |x| x % 7).expect("collecting does not fail");

    groups.iter().all(|(remainder, members)| {
        let expected: Vec<u16> = inputs
            .iter()
            .copied()
            .filter(|x| x % 7 == *remainder)
            .collect();
        *members == expected
    }) && groups.values().map(Vec::len).sum::<usize>() == inputs.len()
}

#[quickcheck]
fn gather_values_are_gather_groups(inputs: Vec<i8>) -> bool {
    let from_map = gather_by(inputs.clone(), |x| x.signum());
    let from_values = gather_by_values(inputs, |x| x.signum());

    let mut from_map: Vec<Vec<i8>> = match from_map {
        Ok(groups) => groups.into_values().collect(),
        Err(_) => return false,
    };
    let mut from_values = match from_values {
        Ok(groups) => groups,
        Err(_) => return false,
    };

    from_map.sort();
    from_values.sort();
    from_map == from_values
}

#[quickcheck]
fn identity_groups_partition_the_input(inputs: Vec<bool>) -> bool {
    let groups = group_values(inputs.clone(), key::identity, Count::default);
    let groups: HashMap<bool, Number> = match groups {
        Ok(groups) => groups,
        Err(_) => return false,
    };

    let mut total = Number::from(0);
    for count in groups.values() {
        match total.checked_add(count) {
            Ok(sum) => total = sum,
            Err(_) => return false,
        }
    }

    groups.len() <= 2
        && groups.values().all(|count| *count > Number::from(0))
        && total == Number::from(inputs.len())
}

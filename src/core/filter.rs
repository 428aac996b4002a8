// src/core/filter.rs
//
// The filter engine: equality filtering over flat records plus derivation of
// the next dimension's candidate values. Stable (dataset order), idempotent,
// and oblivious to flows; the cascade controller supplies the picks.

use std::collections::BTreeSet;

use crate::data::{FilterState, Record};

/// Records matching every pick, in dataset order.
pub fn filter_records<'a>(records: &'a [Record], state: &FilterState) -> Vec<&'a Record> {
    records.iter().filter(|r| state.matches(r)).collect()
}

/// Same selection as row indices, for zero-copy views.
pub fn filter_indices(records: &[Record], state: &FilterState) -> Vec<usize> {
    records.iter().enumerate()
        .filter(|(_, r)| state.matches(r))
        .map(|(ix, _)| ix)
        .collect()
}

/// Distinct values of `dimension`, lexicographically ascending, duplicates
/// removed. Empty/missing field values count as one distinct empty entry;
/// the presentation layer decides what to do with it.
pub fn distinct_sorted_values<'a, I>(records: I, dimension: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let uniq: BTreeSet<&str> = records.into_iter()
        .map(|r| r.field(dimension))
        .collect();
    uniq.into_iter().map(String::from).collect()
}

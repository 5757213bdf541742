//! Occurrence counts for filter-chip labels.
//!
//! Counts are always taken over the full, unfiltered list so chip labels show
//! the global distribution rather than shrinking as filters are applied.

use std::collections::{BTreeMap, BTreeSet};

use crate::filter::Searchable;

#[cfg(test)]
#[path = "tally_test.rs"]
mod tally_test;

/// Key to occurrence count. Keys never map to zero.
pub type Tally = BTreeMap<String, usize>;

/// Count keys across `items`. Each distinct key counts once per item.
pub fn tally_by<'a, T, F, K>(items: &'a [T], mut keys: F) -> Tally
where
    F: FnMut(&'a T) -> K,
    K: IntoIterator,
    K::Item: AsRef<str>,
{
    let mut tally = Tally::new();
    for item in items {
        let distinct = keys(item)
            .into_iter()
            .map(|key| key.as_ref().to_owned())
            .collect::<BTreeSet<_>>();
        for key in distinct {
            *tally.entry(key).or_insert(0) += 1;
        }
    }
    tally
}

#[must_use]
pub fn tally_tags<T: Searchable>(items: &[T]) -> Tally {
    tally_by(items, Searchable::tags)
}

#[must_use]
pub fn tally_kinds<T: Searchable>(items: &[T]) -> Tally {
    tally_by(items, |item| std::iter::once(item.kind_label()))
}

/// Entries ordered by descending count, then ascending key.
#[must_use]
pub fn sorted_by_count(tally: &Tally) -> Vec<(&str, usize)> {
    let mut entries = tally
        .iter()
        .map(|(key, count)| (key.as_str(), *count))
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

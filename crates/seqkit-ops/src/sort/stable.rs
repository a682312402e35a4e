//! Stable sort by a key chain.

use super::keys::SortKeys;

/// Sort `items` by `keys`, keeping input order among equal keys.
///
/// Each key selector runs exactly once per element.
pub(crate) fn sort_stable<T, C>(items: Vec<T>, keys: &C) -> Vec<T>
where
    C: SortKeys<T>,
{
    let mut keyed: Vec<(C::Keys, T)> = items
        .into_iter()
        .map(|item| (keys.extract(&item), item))
        .collect();
    // slice::sort_by is a stable merge sort
    keyed.sort_by(|a, b| keys.compare(&a.0, &b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

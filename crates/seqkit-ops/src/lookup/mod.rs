//! Keyed grouping index.
//!
//! A `Lookup` is built in one eager pass over its source and is read-only
//! afterwards, so it can be shared freely. Groups come back in first-seen-key
//! order, never re-sorted; within a group elements keep source order. A key
//! the policy reports as absent forms its own group like any other key.

mod group_by;
mod grouping;

use std::ops::Index;

use seqkit_core::config::SeqConfig;
use seqkit_core::policy::{EqualityPolicy, NaturalEq};
use seqkit_core::sequence::{Indexed, Sequence};

use crate::index::SlotTable;
use crate::metrics::record_materialized;

pub use group_by::Regroup;
pub use grouping::Grouping;

pub struct Lookup<K, E, P = NaturalEq> {
    policy: P,
    groups: Vec<Grouping<K, E>>,
    table: SlotTable,
}

impl<K, E, P> Lookup<K, E, P>
where
    P: EqualityPolicy<K>,
{
    /// Drain `items` into a new lookup. Each selector runs exactly once per item.
    pub fn build<I, KF, EF>(items: I, key_selector: KF, element_selector: EF, policy: P) -> Self
    where
        I: IntoIterator,
        KF: FnMut(&I::Item) -> K,
        EF: FnMut(I::Item) -> E,
    {
        Self::build_with_config(
            items,
            key_selector,
            element_selector,
            policy,
            &SeqConfig::default(),
        )
    }

    pub fn build_with_config<I, KF, EF>(
        items: I,
        mut key_selector: KF,
        mut element_selector: EF,
        policy: P,
        config: &SeqConfig,
    ) -> Self
    where
        I: IntoIterator,
        KF: FnMut(&I::Item) -> K,
        EF: FnMut(I::Item) -> E,
    {
        let mut lookup = Self {
            policy,
            groups: Vec::new(),
            table: SlotTable::with_capacity(config.index_capacity(None)),
        };
        let mut rows = 0;
        for item in items {
            let key = key_selector(&item);
            lookup.push(key, element_selector(item));
            rows += 1;
        }
        record_materialized("lookup", rows, lookup.groups.len());
        lookup
    }

    /// Index one fresh pass over `source`, sizing the table from its known length.
    pub(crate) fn from_sequence<S, KF, EF>(
        source: &S,
        key_selector: KF,
        element_selector: EF,
        policy: P,
        config: &SeqConfig,
    ) -> Self
    where
        S: Sequence,
        KF: FnMut(&S::Item) -> K,
        EF: FnMut(S::Item) -> E,
    {
        let config = SeqConfig {
            index_capacity_hint: config.index_capacity(source.indexed().map(|view| view.len())),
            ..*config
        };
        Self::build_with_config(source.cursor(), key_selector, element_selector, policy, &config)
    }

    fn push(&mut self, key: K, element: E) {
        let groups = &self.groups;
        let slot = match self.table.locate(&self.policy, &key, |s| groups[s].key()) {
            Ok(slot) => slot,
            Err(vacancy) => {
                let slot = self.groups.len();
                self.groups.push(Grouping::new(key));
                self.table.occupy(vacancy, slot);
                slot
            }
        };
        self.groups[slot].push(element);
    }

    pub(crate) fn slot_of(&self, key: &K) -> Option<usize> {
        let groups = &self.groups;
        self.table
            .locate(&self.policy, key, |s| groups[s].key())
            .ok()
    }

    pub(crate) fn group_at(&self, slot: usize) -> &Grouping<K, E> {
        &self.groups[slot]
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.slot_of(key).is_some()
    }

    /// Elements stored under `key`; empty (not an error) when the key is absent.
    pub fn get(&self, key: &K) -> &[E] {
        self.group(key).map(Grouping::elements).unwrap_or(&[])
    }

    pub fn group(&self, key: &K) -> Option<&Grouping<K, E>> {
        self.slot_of(key).map(|slot| &self.groups[slot])
    }

    /// Groups in first-seen-key order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, E>> {
        self.groups.iter()
    }
}

impl<K, E, P> Lookup<K, E, P> {
    /// Consume the lookup, yielding its groups in first-seen-key order.
    pub fn into_groupings(self) -> Vec<Grouping<K, E>> {
        self.groups
    }
}

impl<K: std::fmt::Debug, E: std::fmt::Debug, P> std::fmt::Debug for Lookup<K, E, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.groups.iter()).finish()
    }
}

impl<'q, K, E, P> Index<&'q K> for Lookup<K, E, P>
where
    P: EqualityPolicy<K>,
{
    type Output = [E];

    fn index(&self, key: &'q K) -> &[E] {
        self.get(key)
    }
}

impl<'l, K, E, P> IntoIterator for &'l Lookup<K, E, P> {
    type Item = &'l Grouping<K, E>;
    type IntoIter = std::slice::Iter<'l, Grouping<K, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<K, E, P> IntoIterator for Lookup<K, E, P> {
    type Item = Grouping<K, E>;
    type IntoIter = std::vec::IntoIter<Grouping<K, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// A lookup is a sequence of its groups.
impl<K: Clone, E: Clone, P> Sequence for Lookup<K, E, P> {
    type Item = Grouping<K, E>;
    type Cursor<'a> = std::iter::Cloned<std::slice::Iter<'a, Grouping<K, E>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.groups.iter().cloned()
    }

    fn indexed(&self) -> Option<&dyn Indexed<Grouping<K, E>>> {
        Some(self)
    }
}

impl<K: Clone, E: Clone, P> Indexed<Grouping<K, E>> for Lookup<K, E, P> {
    fn len(&self) -> usize {
        self.groups.len()
    }

    fn get(&self, index: usize) -> Option<Grouping<K, E>> {
        self.groups.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqkit_core::policy::{nullable, projected};

    #[test]
    fn test_groups_in_first_seen_order() {
        let rows = vec![("b", 1), ("a", 2), ("b", 3), ("c", 4), ("a", 5)];
        let lookup = Lookup::build(rows, |r| r.0, |r| r.1, NaturalEq);
        let keys: Vec<_> = lookup.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(lookup.get(&"b"), &[1, 3]);
        assert_eq!(&lookup[&"a"], &[2, 5]);
        assert!(lookup.get(&"z").is_empty());
        assert!(!lookup.contains_key(&"z"));
    }

    #[test]
    fn test_representative_key_is_first_seen() {
        let words = vec!["Apple", "apple", "APPLE", "pear"];
        let lookup = Lookup::build(
            words,
            |w| w.to_string(),
            |w| w,
            projected(|k: &String| k.to_lowercase()),
        );
        assert_eq!(lookup.len(), 2);
        let first = lookup.iter().next().unwrap();
        assert_eq!(first.key(), "Apple");
        assert_eq!(lookup.get(&"aPPle".to_string()), &["Apple", "apple", "APPLE"]);
    }

    #[test]
    fn test_absent_key_is_own_group() {
        let rows = vec![(Some(1), 'a'), (None, 'b'), (Some(1), 'c'), (None, 'd')];
        let lookup = Lookup::build(rows, |r| r.0, |r| r.1, nullable(NaturalEq));
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get(&None), &['b', 'd']);
        let keys: Vec<_> = lookup.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, vec![Some(1), None]);
    }
}

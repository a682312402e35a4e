//! Policy-driven hash index shared by the lookup and the set operators.
//!
//! `SlotTable` maps keys to dense slot numbers. It does not own keys; callers
//! keep them in their own storage and hand the table a resolver from slot to
//! key. Absent keys (per `EqualityPolicy::is_absent`) bypass hashing and share
//! a single dedicated slot.

use std::collections::HashMap;

use seqkit_core::policy::EqualityPolicy;

/// Where a key that is not in the table would go.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Vacancy {
    Absent,
    Hashed(u64),
}

#[derive(Debug, Default)]
pub(crate) struct SlotTable {
    buckets: HashMap<u64, Vec<usize>>,
    absent: Option<usize>,
}

impl SlotTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: HashMap::with_capacity(capacity),
            absent: None,
        }
    }

    /// Slot of `key`, or where it would be inserted.
    pub(crate) fn locate<'k, K, P>(
        &self,
        policy: &P,
        key: &K,
        stored: impl Fn(usize) -> &'k K,
    ) -> Result<usize, Vacancy>
    where
        K: 'k,
        P: EqualityPolicy<K>,
    {
        if policy.is_absent(key) {
            return self.absent.ok_or(Vacancy::Absent);
        }
        let hash = policy.hash_key(key);
        self.buckets
            .get(&hash)
            .and_then(|bucket| {
                bucket
                    .iter()
                    .copied()
                    .find(|&slot| policy.equals(stored(slot), key))
            })
            .ok_or(Vacancy::Hashed(hash))
    }

    pub(crate) fn occupy(&mut self, vacancy: Vacancy, slot: usize) {
        match vacancy {
            Vacancy::Absent => self.absent = Some(slot),
            Vacancy::Hashed(hash) => self.buckets.entry(hash).or_default().push(slot),
        }
    }

    /// Forget `slot`; later lookups of its key report a vacancy.
    pub(crate) fn release<K, P>(&mut self, policy: &P, key: &K, slot: usize)
    where
        P: EqualityPolicy<K>,
    {
        if policy.is_absent(key) {
            if self.absent == Some(slot) {
                self.absent = None;
            }
            return;
        }
        let hash = policy.hash_key(key);
        if let Some(bucket) = self.buckets.get_mut(&hash) {
            bucket.retain(|&s| s != slot);
            if bucket.is_empty() {
                self.buckets.remove(&hash);
            }
        }
    }
}

/// Set of keys under an equality policy, in first-insertion order.
pub(crate) struct KeySet<K, P> {
    policy: P,
    keys: Vec<K>,
    table: SlotTable,
    live: usize,
}

impl<K, P: EqualityPolicy<K>> KeySet<K, P> {
    pub(crate) fn with_capacity(policy: P, capacity: usize) -> Self {
        Self {
            policy,
            keys: Vec::with_capacity(capacity),
            table: SlotTable::with_capacity(capacity),
            live: 0,
        }
    }

    /// Insert `key`; `true` if it was not present.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let keys = &self.keys;
        match self.table.locate(&self.policy, &key, |slot| &keys[slot]) {
            Ok(_) => false,
            Err(vacancy) => {
                let slot = self.keys.len();
                self.keys.push(key);
                self.table.occupy(vacancy, slot);
                self.live += 1;
                true
            }
        }
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        let keys = &self.keys;
        self.table.locate(&self.policy, key, |slot| &keys[slot]).is_ok()
    }

    /// Remove `key`; `true` if it was present.
    pub(crate) fn remove(&mut self, key: &K) -> bool {
        let keys = &self.keys;
        match self.table.locate(&self.policy, key, |slot| &keys[slot]) {
            Ok(slot) => {
                self.table.release(&self.policy, &self.keys[slot], slot);
                self.live -= 1;
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqkit_core::policy::{by_fn, nullable, NaturalEq};

    #[test]
    fn test_keyset_insert_contains_remove() {
        let mut set = KeySet::with_capacity(NaturalEq, 0);
        assert!(set.insert(3));
        assert!(set.insert(5));
        assert!(!set.insert(3));
        assert!(set.contains(&5));
        assert!(set.remove(&5));
        assert!(!set.remove(&5));
        assert!(!set.contains(&5));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_colliding_hashes_still_distinguish_keys() {
        // Every key hashes to the same bucket.
        let policy = by_fn(|a: &i32, b: &i32| a == b, |_: &i32| 7u64);
        let mut set = KeySet::with_capacity(policy, 4);
        for k in 0..10 {
            assert!(set.insert(k));
        }
        assert!(!set.insert(4));
        assert!(set.remove(&4));
        assert!(set.contains(&9));
        assert!(!set.contains(&4));
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn test_absent_key_has_its_own_slot() {
        let mut set = KeySet::with_capacity(nullable(NaturalEq), 0);
        assert!(set.insert(None));
        assert!(set.insert(Some(0)));
        assert!(!set.insert(None));
        assert!(set.remove(&None));
        assert!(set.insert(None));
        assert_eq!(set.len(), 2);
    }
}

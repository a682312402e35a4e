//! Equality and ordering policies.
//!
//! Hash indexes (grouping, joins, set algebra) never rely on `Eq`/`Hash`
//! directly; they ask an `EqualityPolicy`. Two keys land in the same bucket
//! iff the policy says they are equal, and `hash_key` must agree with `equals`.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Pluggable key equality.
pub trait EqualityPolicy<K: ?Sized> {
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Must return equal hashes for keys that compare equal.
    fn hash_key(&self, key: &K) -> u64;

    /// Absent keys form their own equivalence class and are never hashed.
    fn is_absent(&self, _key: &K) -> bool {
        false
    }
}

/// Natural equality: `Eq` + `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEq;

impl<K: Eq + Hash + ?Sized> EqualityPolicy<K> for NaturalEq {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn hash_key(&self, key: &K) -> u64 {
        hash_one(key)
    }
}

fn hash_one<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut h = DefaultHasher::new();
    key.hash(&mut h);
    h.finish()
}

impl<K: ?Sized, P: EqualityPolicy<K> + ?Sized> EqualityPolicy<K> for &P {
    fn equals(&self, a: &K, b: &K) -> bool {
        (**self).equals(a, b)
    }

    fn hash_key(&self, key: &K) -> u64 {
        (**self).hash_key(key)
    }

    fn is_absent(&self, key: &K) -> bool {
        (**self).is_absent(key)
    }
}

/// Compare keys by a projection, e.g. case-insensitive strings.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedEq<F> {
    project: F,
}

pub fn projected<F>(project: F) -> ProjectedEq<F> {
    ProjectedEq { project }
}

impl<K, F, Q> EqualityPolicy<K> for ProjectedEq<F>
where
    F: Fn(&K) -> Q,
    Q: Eq + Hash,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.project)(a) == (self.project)(b)
    }

    fn hash_key(&self, key: &K) -> u64 {
        hash_one(&(self.project)(key))
    }
}

/// Caller-supplied equality and hash closures.
#[derive(Debug, Clone, Copy)]
pub struct FnEquality<E, H> {
    eq: E,
    hash: H,
}

pub fn by_fn<E, H>(eq: E, hash: H) -> FnEquality<E, H> {
    FnEquality { eq, hash }
}

impl<K, E, H> EqualityPolicy<K> for FnEquality<E, H>
where
    E: Fn(&K, &K) -> bool,
    H: Fn(&K) -> u64,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.eq)(a, b)
    }

    fn hash_key(&self, key: &K) -> u64 {
        (self.hash)(key)
    }
}

/// Optional keys: `None` is the absent sentinel, `Some` keys defer to `P`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<P> {
    inner: P,
}

pub fn nullable<P>(inner: P) -> Nullable<P> {
    Nullable { inner }
}

impl<K, P: EqualityPolicy<K>> EqualityPolicy<Option<K>> for Nullable<P> {
    fn equals(&self, a: &Option<K>, b: &Option<K>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.inner.equals(a, b),
            _ => false,
        }
    }

    fn hash_key(&self, key: &Option<K>) -> u64 {
        // Absent keys never reach the hash path.
        key.as_ref().map_or(0, |k| self.inner.hash_key(k))
    }

    fn is_absent(&self, key: &Option<K>) -> bool {
        key.is_none()
    }
}

/// Pluggable key ordering.
pub trait OrderPolicy<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Natural ordering: `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> OrderPolicy<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> OrderPolicy<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projected_case_insensitive() {
        let p = projected(|s: &String| s.to_lowercase());
        let a = "Hello".to_string();
        let b = "hELLO".to_string();
        assert!(p.equals(&a, &b));
        assert_eq!(p.hash_key(&a), p.hash_key(&b));
    }

    #[test]
    fn test_nullable_absent_branch() {
        let p = nullable(NaturalEq);
        assert!(p.is_absent(&None::<i32>));
        assert!(!p.is_absent(&Some(1)));
        assert!(p.equals(&None::<i32>, &None));
        assert!(!p.equals(&None, &Some(1)));
    }

    #[test]
    fn test_closure_order_policy() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        let (aa, b) = ("aa".to_string(), "b".to_string());
        assert_eq!(OrderPolicy::<String>::compare(&by_len, &aa, &b), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
    }
}

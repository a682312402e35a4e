//! Set algebra under an equality policy: `distinct`, `union`, `intersect`,
//! `except`.
//!
//! `distinct` and `union` grow their "seen" index as output is produced.
//! `intersect` and `except` index the whole second sequence on the first pull,
//! then stream the first one. Encounter order of the first sequence is kept.

use seqkit_core::config::SeqConfig;
use seqkit_core::policy::EqualityPolicy;
use seqkit_core::sequence::Sequence;

use crate::index::KeySet;
use crate::metrics::record_materialized;

fn index_of<'a, S, P>(source: &'a S, policy: &'a P, config: &SeqConfig) -> KeySet<S::Item, &'a P>
where
    S: Sequence,
    P: EqualityPolicy<S::Item>,
{
    let capacity = config.index_capacity(source.indexed().map(|view| view.len()));
    let mut set = KeySet::with_capacity(policy, capacity);
    let mut rows = 0;
    for item in source.cursor() {
        rows += 1;
        set.insert(item);
    }
    record_materialized("set_index", rows, set.len());
    set
}

/// First occurrence of every element.
#[derive(Debug, Clone)]
pub struct Distinct<S, P> {
    source: S,
    policy: P,
    config: SeqConfig,
}

impl<S, P> Distinct<S, P> {
    pub(crate) fn new(source: S, policy: P) -> Self {
        Self {
            source,
            policy,
            config: SeqConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }
}

pub struct DistinctCursor<'a, S: Sequence + 'a, P> {
    inner: S::Cursor<'a>,
    seen: KeySet<S::Item, &'a P>,
}

impl<'a, S, P> Iterator for DistinctCursor<'a, S, P>
where
    S: Sequence + 'a,
    S::Item: Clone,
    P: EqualityPolicy<S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        for item in self.inner.by_ref() {
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }
}

impl<S, P> Sequence for Distinct<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: EqualityPolicy<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = DistinctCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let capacity = self
            .config
            .index_capacity(self.source.indexed().map(|view| view.len()));
        DistinctCursor {
            inner: self.source.cursor(),
            seen: KeySet::with_capacity(&self.policy, capacity),
        }
    }
}

/// Distinct elements of `first` followed by those of `second` not yet seen.
#[derive(Debug, Clone)]
pub struct Union<A, B, P> {
    first: A,
    second: B,
    policy: P,
    config: SeqConfig,
}

impl<A, B, P> Union<A, B, P> {
    pub(crate) fn new(first: A, second: B, policy: P) -> Self {
        Self {
            first,
            second,
            policy,
            config: SeqConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }
}

pub struct UnionCursor<'a, A: Sequence + 'a, B: Sequence + 'a, P> {
    first: Option<A::Cursor<'a>>,
    second: &'a B,
    second_cursor: Option<B::Cursor<'a>>,
    seen: KeySet<A::Item, &'a P>,
}

impl<'a, A, B, P> Iterator for UnionCursor<'a, A, B, P>
where
    A: Sequence + 'a,
    B: Sequence<Item = A::Item> + 'a,
    A::Item: Clone,
    P: EqualityPolicy<A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = self.first.as_mut() {
            for item in first.by_ref() {
                if self.seen.insert(item.clone()) {
                    return Some(item);
                }
            }
            self.first = None;
        }
        let second = self.second;
        let cursor = self.second_cursor.get_or_insert_with(|| second.cursor());
        for item in cursor.by_ref() {
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }
}

impl<A, B, P> Sequence for Union<A, B, P>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    P: EqualityPolicy<A::Item>,
{
    type Item = A::Item;
    type Cursor<'a> = UnionCursor<'a, A, B, P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        UnionCursor {
            first: Some(self.first.cursor()),
            second: &self.second,
            second_cursor: None,
            seen: KeySet::with_capacity(&self.policy, self.config.index_capacity(None)),
        }
    }
}

/// Elements of `first` that also occur in `second`, each at most once.
#[derive(Debug, Clone)]
pub struct Intersect<A, B, P> {
    first: A,
    second: B,
    policy: P,
    config: SeqConfig,
}

impl<A, B, P> Intersect<A, B, P> {
    pub(crate) fn new(first: A, second: B, policy: P) -> Self {
        Self {
            first,
            second,
            policy,
            config: SeqConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }
}

pub struct IntersectCursor<'a, A: Sequence + 'a, B: Sequence + 'a, P> {
    node: &'a Intersect<A, B, P>,
    state: Option<(A::Cursor<'a>, KeySet<A::Item, &'a P>)>,
}

impl<'a, A, B, P> Iterator for IntersectCursor<'a, A, B, P>
where
    A: Sequence + 'a,
    B: Sequence<Item = A::Item> + 'a,
    P: EqualityPolicy<A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let node = self.node;
        let (first, remaining) = self.state.get_or_insert_with(|| {
            let index = index_of(&node.second, &node.policy, &node.config);
            (node.first.cursor(), index)
        });
        // Removing on first match keeps duplicates in `first` from re-matching.
        first.by_ref().find(|item| remaining.remove(item))
    }
}

impl<A, B, P> Sequence for Intersect<A, B, P>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    P: EqualityPolicy<A::Item>,
{
    type Item = A::Item;
    type Cursor<'a> = IntersectCursor<'a, A, B, P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IntersectCursor {
            node: self,
            state: None,
        }
    }
}

/// Elements of `first` that do not occur in `second`. Duplicates in `first`
/// are kept.
#[derive(Debug, Clone)]
pub struct Except<A, B, P> {
    first: A,
    second: B,
    policy: P,
    config: SeqConfig,
}

impl<A, B, P> Except<A, B, P> {
    pub(crate) fn new(first: A, second: B, policy: P) -> Self {
        Self {
            first,
            second,
            policy,
            config: SeqConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }
}

pub struct ExceptCursor<'a, A: Sequence + 'a, B: Sequence + 'a, P> {
    node: &'a Except<A, B, P>,
    state: Option<(A::Cursor<'a>, KeySet<A::Item, &'a P>)>,
}

impl<'a, A, B, P> Iterator for ExceptCursor<'a, A, B, P>
where
    A: Sequence + 'a,
    B: Sequence<Item = A::Item> + 'a,
    P: EqualityPolicy<A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let node = self.node;
        let (first, excluded) = self.state.get_or_insert_with(|| {
            let index = index_of(&node.second, &node.policy, &node.config);
            (node.first.cursor(), index)
        });
        first.by_ref().find(|item| !excluded.contains(item))
    }
}

impl<A, B, P> Sequence for Except<A, B, P>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    P: EqualityPolicy<A::Item>,
{
    type Item = A::Item;
    type Cursor<'a> = ExceptCursor<'a, A, B, P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ExceptCursor {
            node: self,
            state: None,
        }
    }
}

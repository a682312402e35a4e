//! Ordering operators: `order_by` and the `then_by` refinements.
//!
//! An ordered sequence buffers its source on the first pull of each pass and
//! stable-sorts it by the whole key chain, so every `then_by` only breaks ties
//! left by the keys before it.

mod keys;
mod stable;

pub use keys::{KeyOrder, SortKeys, ThenKeys};

use seqkit_core::config::SeqConfig;
use seqkit_core::policy::{NaturalOrder, OrderPolicy};
use seqkit_core::sequence::Sequence;

use crate::metrics::record_materialized;
use stable::sort_stable;

#[derive(Debug, Clone)]
pub struct Ordered<S, C> {
    source: S,
    keys: C,
    config: SeqConfig,
}

impl<S, C> Ordered<S, C> {
    pub(crate) fn new(source: S, keys: C) -> Self {
        Self {
            source,
            keys,
            config: SeqConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }

    fn then<N>(self, next: N) -> Ordered<S, ThenKeys<C, N>> {
        Ordered {
            source: self.source,
            keys: ThenKeys::new(self.keys, next),
            config: self.config,
        }
    }

    /// Break remaining ties by an ascending key.
    pub fn then_by<K, F>(self, selector: F) -> Ordered<S, ThenKeys<C, KeyOrder<F, NaturalOrder>>>
    where
        S: Sequence,
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.then(KeyOrder::new(selector, NaturalOrder, false))
    }

    pub fn then_by_descending<K, F>(
        self,
        selector: F,
    ) -> Ordered<S, ThenKeys<C, KeyOrder<F, NaturalOrder>>>
    where
        S: Sequence,
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.then(KeyOrder::new(selector, NaturalOrder, true))
    }

    pub fn then_by_with<K, F, O>(
        self,
        selector: F,
        order: O,
    ) -> Ordered<S, ThenKeys<C, KeyOrder<F, O>>>
    where
        S: Sequence,
        F: Fn(&S::Item) -> K,
        O: OrderPolicy<K>,
    {
        self.then(KeyOrder::new(selector, order, false))
    }

    pub fn then_by_descending_with<K, F, O>(
        self,
        selector: F,
        order: O,
    ) -> Ordered<S, ThenKeys<C, KeyOrder<F, O>>>
    where
        S: Sequence,
        F: Fn(&S::Item) -> K,
        O: OrderPolicy<K>,
    {
        self.then(KeyOrder::new(selector, order, true))
    }
}

pub struct OrderedCursor<'a, S: Sequence + 'a, C> {
    node: &'a Ordered<S, C>,
    sorted: Option<std::vec::IntoIter<S::Item>>,
}

impl<'a, S, C> Iterator for OrderedCursor<'a, S, C>
where
    S: Sequence + 'a,
    C: SortKeys<S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let node = self.node;
        self.sorted
            .get_or_insert_with(|| {
                let known = node.source.indexed().map(|view| view.len());
                let mut buffer = Vec::with_capacity(node.config.buffer_capacity(known));
                buffer.extend(node.source.cursor());
                record_materialized("order_by", buffer.len(), 0);
                sort_stable(buffer, &node.keys).into_iter()
            })
            .next()
    }
}

impl<S, C> Sequence for Ordered<S, C>
where
    S: Sequence,
    C: SortKeys<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = OrderedCursor<'a, S, C>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        OrderedCursor {
            node: self,
            sorted: None,
        }
    }
}

pub(crate) fn ascending<F, O>(selector: F, order: O) -> KeyOrder<F, O> {
    KeyOrder::new(selector, order, false)
}

pub(crate) fn descending<F, O>(selector: F, order: O) -> KeyOrder<F, O> {
    KeyOrder::new(selector, order, true)
}

//! `SequenceExt`: the chainable operator surface.
//!
//! Operator methods return immediately with a new node that owns `self`; no
//! closure runs and no upstream cursor opens until the node is iterated. Pass
//! `&seq` to keep using a sequence after chaining from it.
//!
//! The grouping methods (`group_by*`, `to_lookup*`) borrow the source and
//! build their `Lookup` in one pass before returning.

use std::hash::Hash;

use seqkit_core::config::SeqConfig;
use seqkit_core::policy::{EqualityPolicy, NaturalEq, NaturalOrder, OrderPolicy};
use seqkit_core::sequence::Sequence;

use crate::combine::{Concat, DefaultIfEmpty, Zip};
use crate::filter::{Filter, SkipWhile, TakeWhile};
use crate::func::{Plain, WithIndex};
use crate::join::{GroupJoin, Join};
use crate::lookup::{Lookup, Regroup};
use crate::map::{FlatMap, FlatMapWith, Map};
use crate::partition::{Skip, Take};
use crate::reverse::Reverse;
use crate::set::{Distinct, Except, Intersect, Union};
use crate::sort::{ascending, descending, KeyOrder, Ordered};

fn identity<T>(item: T) -> T {
    item
}

pub trait SequenceExt: Sequence + Sized {
    /// Elements satisfying `predicate`.
    fn filter<F>(self, predicate: F) -> Filter<Self, Plain<F>>
    where
        F: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, Plain(predicate))
    }

    /// Like `filter`; the predicate also receives the element's position.
    fn filter_indexed<F>(self, predicate: F) -> Filter<Self, WithIndex<F>>
    where
        F: Fn(&Self::Item, usize) -> bool,
    {
        Filter::new(self, WithIndex(predicate))
    }

    fn map<R, F>(self, selector: F) -> Map<Self, Plain<F>>
    where
        F: Fn(Self::Item) -> R,
    {
        Map::new(self, Plain(selector))
    }

    fn map_indexed<R, F>(self, selector: F) -> Map<Self, WithIndex<F>>
    where
        F: Fn(Self::Item, usize) -> R,
    {
        Map::new(self, WithIndex(selector))
    }

    /// Each element projected to a collection, flattened in order.
    fn flat_map<C, F>(self, selector: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Item) -> C,
        C: IntoIterator,
    {
        FlatMap::new(self, selector)
    }

    /// `flat_map` followed by a projection of each (element, sub-element) pair.
    fn flat_map_with<C, R, F, G>(self, collection: F, result: G) -> FlatMapWith<Self, F, G>
    where
        F: Fn(&Self::Item) -> C,
        C: IntoIterator,
        G: Fn(&Self::Item, C::Item) -> R,
    {
        FlatMapWith::new(self, collection, result)
    }

    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Pairwise combination; stops at the end of the shorter sequence.
    fn zip<B, R, F>(self, other: B, result: F) -> Zip<Self, B, F>
    where
        B: Sequence,
        F: Fn(Self::Item, B::Item) -> R,
    {
        Zip::new(self, other, result)
    }

    /// At most `count` leading elements. A non-positive count yields nothing.
    fn take(self, count: isize) -> Take<Self> {
        Take::new(self, count)
    }

    /// All but the first `count` elements. A non-positive count skips nothing.
    fn skip(self, count: isize) -> Skip<Self> {
        Skip::new(self, count)
    }

    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, Plain<F>>
    where
        F: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, Plain(predicate))
    }

    fn take_while_indexed<F>(self, predicate: F) -> TakeWhile<Self, WithIndex<F>>
    where
        F: Fn(&Self::Item, usize) -> bool,
    {
        TakeWhile::new(self, WithIndex(predicate))
    }

    fn skip_while<F>(self, predicate: F) -> SkipWhile<Self, Plain<F>>
    where
        F: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, Plain(predicate))
    }

    fn skip_while_indexed<F>(self, predicate: F) -> SkipWhile<Self, WithIndex<F>>
    where
        F: Fn(&Self::Item, usize) -> bool,
    {
        SkipWhile::new(self, WithIndex(predicate))
    }

    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// The source itself, or `value` once when the source is empty.
    fn default_if_empty(self, value: Self::Item) -> DefaultIfEmpty<Self, Self::Item>
    where
        Self::Item: Clone,
    {
        DefaultIfEmpty::new(self, value)
    }

    fn distinct(self) -> Distinct<Self, NaturalEq>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Distinct::new(self, NaturalEq)
    }

    fn distinct_with<P>(self, policy: P) -> Distinct<Self, P>
    where
        Self::Item: Clone,
        P: EqualityPolicy<Self::Item>,
    {
        Distinct::new(self, policy)
    }

    fn union<B>(self, other: B) -> Union<Self, B, NaturalEq>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Eq + Hash + Clone,
    {
        Union::new(self, other, NaturalEq)
    }

    fn union_with<B, P>(self, other: B, policy: P) -> Union<Self, B, P>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Clone,
        P: EqualityPolicy<Self::Item>,
    {
        Union::new(self, other, policy)
    }

    fn intersect<B>(self, other: B) -> Intersect<Self, B, NaturalEq>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        Intersect::new(self, other, NaturalEq)
    }

    fn intersect_with<B, P>(self, other: B, policy: P) -> Intersect<Self, B, P>
    where
        B: Sequence<Item = Self::Item>,
        P: EqualityPolicy<Self::Item>,
    {
        Intersect::new(self, other, policy)
    }

    fn except<B>(self, other: B) -> Except<Self, B, NaturalEq>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        Except::new(self, other, NaturalEq)
    }

    fn except_with<B, P>(self, other: B, policy: P) -> Except<Self, B, P>
    where
        B: Sequence<Item = Self::Item>,
        P: EqualityPolicy<Self::Item>,
    {
        Except::new(self, other, policy)
    }

    /// Groups of whole elements by key, in first-seen-key order.
    ///
    /// Unlike the other operators this drains the source immediately; the
    /// returned lookup is iterated without touching the source again.
    fn group_by<K, KF>(&self, key_selector: KF) -> Lookup<K, Self::Item, NaturalEq>
    where
        KF: Fn(&Self::Item) -> K,
        K: Eq + Hash,
    {
        self.to_lookup(key_selector)
    }

    fn group_by_with<K, E, KF, EF, P>(
        &self,
        key_selector: KF,
        element_selector: EF,
        policy: P,
    ) -> Lookup<K, E, P>
    where
        KF: Fn(&Self::Item) -> K,
        EF: Fn(Self::Item) -> E,
        P: EqualityPolicy<K>,
    {
        self.to_lookup_with(key_selector, element_selector, policy)
    }

    /// `group_by` with each group folded to one value by `result(key, elements)`.
    ///
    /// Groups are built now; `result` runs per group while the output is pulled.
    fn group_by_result<K, R, KF, RF>(
        &self,
        key_selector: KF,
        result: RF,
    ) -> Map<Lookup<K, Self::Item, NaturalEq>, Regroup<RF>>
    where
        KF: Fn(&Self::Item) -> K,
        K: Eq + Hash,
        RF: Fn(K, Vec<Self::Item>) -> R,
    {
        Map::new(self.group_by(key_selector), Regroup(result))
    }

    /// Build a lookup now, in one pass.
    fn to_lookup<K, KF>(&self, key_selector: KF) -> Lookup<K, Self::Item, NaturalEq>
    where
        KF: Fn(&Self::Item) -> K,
        K: Eq + Hash,
    {
        Lookup::from_sequence(self, key_selector, identity, NaturalEq, &SeqConfig::default())
    }

    fn to_lookup_with<K, E, KF, EF, P>(
        &self,
        key_selector: KF,
        element_selector: EF,
        policy: P,
    ) -> Lookup<K, E, P>
    where
        KF: Fn(&Self::Item) -> K,
        EF: Fn(Self::Item) -> E,
        P: EqualityPolicy<K>,
    {
        Lookup::from_sequence(self, key_selector, element_selector, policy, &SeqConfig::default())
    }

    /// Inner join on equal keys.
    fn join<I, K, R, OK, IK, RF>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Join<Self, I, OK, IK, RF, NaturalEq>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        RF: Fn(&Self::Item, &I::Item) -> R,
        K: Eq + Hash,
    {
        Join::new(self, inner, outer_key, inner_key, result, NaturalEq)
    }

    fn join_with<I, K, R, OK, IK, RF, P>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: RF,
        policy: P,
    ) -> Join<Self, I, OK, IK, RF, P>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        RF: Fn(&Self::Item, &I::Item) -> R,
        P: EqualityPolicy<K>,
    {
        Join::new(self, inner, outer_key, inner_key, result, policy)
    }

    /// One result per outer element with its (possibly empty) matching inner elements.
    fn group_join<I, K, R, OK, IK, RF>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> GroupJoin<Self, I, OK, IK, RF, NaturalEq>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        RF: Fn(Self::Item, &[I::Item]) -> R,
        K: Eq + Hash,
    {
        GroupJoin::new(self, inner, outer_key, inner_key, result, NaturalEq)
    }

    fn group_join_with<I, K, R, OK, IK, RF, P>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: RF,
        policy: P,
    ) -> GroupJoin<Self, I, OK, IK, RF, P>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        RF: Fn(Self::Item, &[I::Item]) -> R,
        P: EqualityPolicy<K>,
    {
        GroupJoin::new(self, inner, outer_key, inner_key, result, policy)
    }

    /// Stable ascending sort by `selector`. Refine with `then_by`.
    fn order_by<K, F>(self, selector: F) -> Ordered<Self, KeyOrder<F, NaturalOrder>>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        Ordered::new(self, ascending(selector, NaturalOrder))
    }

    fn order_by_descending<K, F>(self, selector: F) -> Ordered<Self, KeyOrder<F, NaturalOrder>>
    where
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        Ordered::new(self, descending(selector, NaturalOrder))
    }

    fn order_by_with<K, F, O>(self, selector: F, order: O) -> Ordered<Self, KeyOrder<F, O>>
    where
        F: Fn(&Self::Item) -> K,
        O: OrderPolicy<K>,
    {
        Ordered::new(self, ascending(selector, order))
    }

    fn order_by_descending_with<K, F, O>(
        self,
        selector: F,
        order: O,
    ) -> Ordered<Self, KeyOrder<F, O>>
    where
        F: Fn(&Self::Item) -> K,
        O: OrderPolicy<K>,
    {
        Ordered::new(self, descending(selector, order))
    }
}

impl<S: Sequence> SequenceExt for S {}

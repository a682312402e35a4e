//! `ReduceExt`: terminal reducers as methods.
//!
//! Reducers borrow the sequence, drive one pass (or answer from `Indexed`),
//! and drop their cursor before returning.

use std::collections::HashMap;
use std::hash::Hash;

use seqkit_core::error::Result;
use seqkit_core::policy::{EqualityPolicy, OrderPolicy};
use seqkit_core::sequence::Sequence;

use crate::numeric::{Averageable, Extremum, Summable};
use crate::{arith, collect, count, element, fold, quantify};

pub trait ReduceExt: Sequence + Sized {
    // ---- folds ----

    fn aggregate<F>(&self, func: F) -> Result<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        fold::aggregate(self, func)
    }

    fn aggregate_seeded<A, F>(&self, seed: A, func: F) -> A
    where
        F: Fn(A, Self::Item) -> A,
    {
        fold::aggregate_seeded(self, seed, func)
    }

    fn aggregate_with<A, R, F, G>(&self, seed: A, func: F, result: G) -> R
    where
        F: Fn(A, Self::Item) -> A,
        G: FnOnce(A) -> R,
    {
        fold::aggregate_with(self, seed, func, result)
    }

    fn min_by<O>(&self, order: O) -> Result<Self::Item>
    where
        O: OrderPolicy<Self::Item>,
    {
        fold::min_by(self, order)
    }

    fn max_by<O>(&self, order: O) -> Result<Self::Item>
    where
        O: OrderPolicy<Self::Item>,
    {
        fold::max_by(self, order)
    }

    // ---- counting ----

    fn count(&self) -> Result<u32> {
        count::count(self)
    }

    fn count_where<F>(&self, predicate: F) -> Result<u32>
    where
        F: Fn(&Self::Item) -> bool,
    {
        count::count_where(self, predicate)
    }

    fn long_count(&self) -> Result<u64> {
        count::long_count(self)
    }

    fn long_count_where<F>(&self, predicate: F) -> Result<u64>
    where
        F: Fn(&Self::Item) -> bool,
    {
        count::long_count_where(self, predicate)
    }

    // ---- element access ----

    fn first(&self) -> Result<Self::Item> {
        element::first(self)
    }

    fn first_where<F>(&self, predicate: F) -> Result<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
    {
        element::first_where(self, predicate)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::first_or_default(self)
    }

    fn first_or_default_where<F>(&self, predicate: F) -> Self::Item
    where
        Self::Item: Default,
        F: Fn(&Self::Item) -> bool,
    {
        element::first_or_default_where(self, predicate)
    }

    fn last(&self) -> Result<Self::Item> {
        element::last(self)
    }

    fn last_where<F>(&self, predicate: F) -> Result<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
    {
        element::last_where(self, predicate)
    }

    fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::last_or_default(self)
    }

    fn last_or_default_where<F>(&self, predicate: F) -> Self::Item
    where
        Self::Item: Default,
        F: Fn(&Self::Item) -> bool,
    {
        element::last_or_default_where(self, predicate)
    }

    fn single(&self) -> Result<Self::Item> {
        element::single(self)
    }

    fn single_where<F>(&self, predicate: F) -> Result<Self::Item>
    where
        F: Fn(&Self::Item) -> bool,
    {
        element::single_where(self, predicate)
    }

    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        element::single_or_default(self)
    }

    fn single_or_default_where<F>(&self, predicate: F) -> Result<Self::Item>
    where
        Self::Item: Default,
        F: Fn(&Self::Item) -> bool,
    {
        element::single_or_default_where(self, predicate)
    }

    fn element_at(&self, index: isize) -> Result<Self::Item> {
        element::element_at(self, index)
    }

    fn element_at_or_default(&self, index: isize) -> Self::Item
    where
        Self::Item: Default,
    {
        element::element_at_or_default(self, index)
    }

    // ---- numeric ----

    fn sum<N>(&self) -> Result<N>
    where
        Self: Sequence<Item = N>,
        N: Summable,
    {
        arith::sum(self)
    }

    fn sum_nullable<N>(&self) -> Result<N>
    where
        Self: Sequence<Item = Option<N>>,
        N: Summable,
    {
        arith::sum_nullable(self)
    }

    fn average<N>(&self) -> Result<N::Mean>
    where
        Self: Sequence<Item = N>,
        N: Averageable,
    {
        arith::average(self)
    }

    fn average_nullable<N>(&self) -> Result<N::Mean>
    where
        Self: Sequence<Item = Option<N>>,
        N: Averageable,
    {
        arith::average_nullable(self)
    }

    fn min<N>(&self) -> Result<N>
    where
        Self: Sequence<Item = N>,
        N: Extremum,
    {
        arith::min(self)
    }

    fn max<N>(&self) -> Result<N>
    where
        Self: Sequence<Item = N>,
        N: Extremum,
    {
        arith::max(self)
    }

    fn min_nullable<N>(&self) -> Option<N>
    where
        Self: Sequence<Item = Option<N>>,
        N: Extremum,
    {
        arith::min_nullable(self)
    }

    fn max_nullable<N>(&self) -> Option<N>
    where
        Self: Sequence<Item = Option<N>>,
        N: Extremum,
    {
        arith::max_nullable(self)
    }

    // ---- quantifiers ----

    fn any(&self) -> bool {
        quantify::any(self)
    }

    fn any_where<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Self::Item) -> bool,
    {
        quantify::any_where(self, predicate)
    }

    fn all<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Self::Item) -> bool,
    {
        quantify::all(self, predicate)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        quantify::contains(self, value)
    }

    fn contains_with<P>(&self, value: &Self::Item, policy: P) -> bool
    where
        P: EqualityPolicy<Self::Item>,
    {
        quantify::contains_with(self, value, policy)
    }

    fn sequence_equal<B>(&self, other: &B) -> bool
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        quantify::sequence_equal(self, other)
    }

    fn sequence_equal_with<B, P>(&self, other: &B, policy: P) -> bool
    where
        B: Sequence<Item = Self::Item>,
        P: EqualityPolicy<Self::Item>,
    {
        quantify::sequence_equal_with(self, other, policy)
    }

    // ---- materialization ----

    fn to_vec(&self) -> Vec<Self::Item> {
        collect::to_vec(self)
    }

    fn to_dictionary<K, V, KF, VF>(&self, key_selector: KF, value_selector: VF) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        KF: Fn(&Self::Item) -> K,
        VF: Fn(Self::Item) -> V,
    {
        collect::to_dictionary(self, key_selector, value_selector)
    }
}

impl<S: Sequence> ReduceExt for S {}

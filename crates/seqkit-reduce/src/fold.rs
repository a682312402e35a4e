//! Left folds: `aggregate` and the comparer-based `min_by`/`max_by`.

use std::cmp::Ordering;

use seqkit_core::error::{InvalidOperation, Result};
use seqkit_core::policy::OrderPolicy;
use seqkit_core::sequence::Sequence;

use crate::metrics::failed;

pub(crate) fn fold_first<S, F>(source: &S, func: F, op: &'static str) -> Result<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    source
        .cursor()
        .reduce(func)
        .ok_or_else(|| failed(op, InvalidOperation::NoElements.into()))
}

/// Fold using the first element as the seed. Fails on an empty source.
pub fn aggregate<S, F>(source: &S, func: F) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    fold_first(source, func, "aggregate")
}

pub fn aggregate_seeded<S, A, F>(source: &S, seed: A, func: F) -> A
where
    S: Sequence,
    F: Fn(A, S::Item) -> A,
{
    source.cursor().fold(seed, func)
}

pub fn aggregate_with<S, A, R, F, G>(source: &S, seed: A, func: F, result: G) -> R
where
    S: Sequence,
    F: Fn(A, S::Item) -> A,
    G: FnOnce(A) -> R,
{
    result(aggregate_seeded(source, seed, func))
}

/// Smallest element under `order`; the first one wins ties.
pub fn min_by<S, O>(source: &S, order: O) -> Result<S::Item>
where
    S: Sequence,
    O: OrderPolicy<S::Item>,
{
    fold_first(
        source,
        |best, item| {
            if order.compare(&item, &best) == Ordering::Less {
                item
            } else {
                best
            }
        },
        "min_by",
    )
}

/// Largest element under `order`; the first one wins ties.
pub fn max_by<S, O>(source: &S, order: O) -> Result<S::Item>
where
    S: Sequence,
    O: OrderPolicy<S::Item>,
{
    fold_first(
        source,
        |best, item| {
            if order.compare(&item, &best) == Ordering::Greater {
                item
            } else {
                best
            }
        },
        "max_by",
    )
}

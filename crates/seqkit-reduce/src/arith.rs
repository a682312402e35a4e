//! Numeric reducers over plain and `Option`-wrapped elements.
//!
//! `None` elements count as zero for `sum_nullable` and are skipped by the
//! other nullable reducers.

use seqkit_core::error::{InvalidOperation, Result, SeqError};
use seqkit_core::sequence::Sequence;

use crate::fold::fold_first;
use crate::metrics::failed;
use crate::numeric::{Averageable, Extremum, Summable};

fn add_all<N, I>(mut values: I) -> Result<N>
where
    N: Summable,
    I: Iterator<Item = N>,
{
    values.try_fold(N::ZERO, |acc, item| {
        acc.checked_sum(item)
            .ok_or_else(|| failed("sum", SeqError::overflow("sum")))
    })
}

/// Zero for an empty source.
pub fn sum<S, N>(source: &S) -> Result<N>
where
    S: Sequence<Item = N>,
    N: Summable,
{
    add_all(source.cursor())
}

/// Zero for an empty or all-`None` source, never `None`.
pub fn sum_nullable<S, N>(source: &S) -> Result<N>
where
    S: Sequence<Item = Option<N>>,
    N: Summable,
{
    add_all(source.cursor().flatten())
}

fn mean_of<N, I>(values: I) -> Result<N::Mean>
where
    N: Averageable,
    I: Iterator<Item = N>,
{
    let mut acc = N::ACC_ZERO;
    let mut count: u64 = 0;
    for item in values {
        acc = N::accumulate(acc, item)
            .ok_or_else(|| failed("average", SeqError::overflow("average")))?;
        count += 1;
    }
    if count == 0 {
        return Err(failed("average", InvalidOperation::NoElements.into()));
    }
    Ok(N::mean(acc, count))
}

pub fn average<S, N>(source: &S) -> Result<N::Mean>
where
    S: Sequence<Item = N>,
    N: Averageable,
{
    mean_of(source.cursor())
}

/// Mean of the present values. Fails when there are none.
pub fn average_nullable<S, N>(source: &S) -> Result<N::Mean>
where
    S: Sequence<Item = Option<N>>,
    N: Averageable,
{
    mean_of(source.cursor().flatten())
}

pub fn min<S, N>(source: &S) -> Result<N>
where
    S: Sequence<Item = N>,
    N: Extremum,
{
    fold_first(source, N::min_of, "min")
}

pub fn max<S, N>(source: &S) -> Result<N>
where
    S: Sequence<Item = N>,
    N: Extremum,
{
    fold_first(source, N::max_of, "max")
}

/// Smallest present value; `None` for an empty or all-`None` source.
pub fn min_nullable<S, N>(source: &S) -> Option<N>
where
    S: Sequence<Item = Option<N>>,
    N: Extremum,
{
    source.cursor().flatten().reduce(N::min_of)
}

pub fn max_nullable<S, N>(source: &S) -> Option<N>
where
    S: Sequence<Item = Option<N>>,
    N: Extremum,
{
    source.cursor().flatten().reduce(N::max_of)
}

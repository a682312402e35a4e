//! `count` / `long_count`.
//!
//! Indexed sources answer from their length without opening a cursor.

use seqkit_core::error::{Result, SeqError};
use seqkit_core::sequence::Sequence;

use crate::metrics::failed;

fn scan<S, F, N>(source: &S, predicate: F, op: &'static str) -> Result<N>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
    N: TryFrom<u64>,
{
    let mut seen: u64 = 0;
    for item in source.cursor() {
        if predicate(&item) {
            seen = seen
                .checked_add(1)
                .ok_or_else(|| failed(op, SeqError::overflow(op)))?;
        }
    }
    narrow(seen, op)
}

fn narrow<N: TryFrom<u64>>(seen: u64, op: &'static str) -> Result<N> {
    N::try_from(seen).map_err(|_| failed(op, SeqError::overflow(op)))
}

fn known_len<S: Sequence>(source: &S) -> Option<u64> {
    source.indexed().map(|view| view.len() as u64)
}

pub fn count<S: Sequence>(source: &S) -> Result<u32> {
    match known_len(source) {
        Some(len) => narrow(len, "count"),
        None => scan(source, |_| true, "count"),
    }
}

pub fn count_where<S, F>(source: &S, predicate: F) -> Result<u32>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    scan(source, predicate, "count")
}

pub fn long_count<S: Sequence>(source: &S) -> Result<u64> {
    match known_len(source) {
        Some(len) => Ok(len),
        None => scan(source, |_| true, "long_count"),
    }
}

pub fn long_count_where<S, F>(source: &S, predicate: F) -> Result<u64>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    scan(source, predicate, "long_count")
}

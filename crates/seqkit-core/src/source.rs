//! Leaf sequences: collection-backed, generated, and single-pass sources.

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::error::{Result, SeqError};
use crate::sequence::{Indexed, Sequence};

/// A sequence over an owned collection. Each pass clones the elements out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Source<T> {
    items: Vec<T>,
}

impl<T> Source<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Source<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone> Sequence for Source<T> {
    type Item = T;
    type Cursor<'a> = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }

    fn indexed(&self) -> Option<&dyn Indexed<T>> {
        Some(self)
    }
}

impl<T: Clone> Indexed<T> for Source<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }
}

/// Wrap a vector as a sequence.
pub fn from_vec<T>(items: Vec<T>) -> Source<T> {
    Source::new(items)
}

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSeq {
    start: i32,
    count: i32,
}

/// Validated eagerly: a negative `count`, or a last value past `i32::MAX`, is an
/// invalid argument at call time.
pub fn range(start: i32, count: i32) -> Result<RangeSeq> {
    if count < 0 {
        return Err(SeqError::invalid_argument(
            "count",
            format!("must be non-negative, got {count}"),
        ));
    }
    let last = i64::from(start) + i64::from(count) - 1;
    if last > i64::from(i32::MAX) {
        return Err(SeqError::invalid_argument(
            "count",
            format!("range starting at {start} with {count} values overflows i32"),
        ));
    }
    Ok(RangeSeq { start, count })
}

fn narrow(v: i64) -> i32 {
    // Bounds were checked in `range`.
    v as i32
}

impl Sequence for RangeSeq {
    type Item = i32;
    type Cursor<'a> = std::iter::Map<std::ops::Range<i64>, fn(i64) -> i32>;

    fn cursor(&self) -> Self::Cursor<'_> {
        let start = i64::from(self.start);
        (start..start + i64::from(self.count)).map(narrow as fn(i64) -> i32)
    }

    fn indexed(&self) -> Option<&dyn Indexed<i32>> {
        Some(self)
    }
}

impl Indexed<i32> for RangeSeq {
    fn len(&self) -> usize {
        self.count as usize
    }

    fn get(&self, index: usize) -> Option<i32> {
        if index < self.len() {
            Some(narrow(i64::from(self.start) + index as i64))
        } else {
            None
        }
    }
}

/// One value repeated `count` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    value: T,
    count: usize,
}

pub fn repeat<T>(value: T, count: usize) -> Repeat<T> {
    Repeat { value, count }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor<'a> = std::iter::Take<std::iter::Repeat<T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        std::iter::repeat(self.value.clone()).take(self.count)
    }

    fn indexed(&self) -> Option<&dyn Indexed<T>> {
        Some(self)
    }
}

impl<T: Clone> Indexed<T> for Repeat<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Option<T> {
        (index < self.count).then(|| self.value.clone())
    }
}

/// The empty sequence.
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Copy for Empty<T> {}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor<'a> = std::iter::Empty<T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        std::iter::empty()
    }

    fn indexed(&self) -> Option<&dyn Indexed<T>> {
        Some(self)
    }
}

impl<T> Indexed<T> for Empty<T> {
    fn len(&self) -> usize {
        0
    }

    fn get(&self, _index: usize) -> Option<T> {
        None
    }
}

/// A sequence that calls `factory` for every pass.
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    factory: F,
}

pub fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a> = I::IntoIter
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.factory)().into_iter()
    }
}

/// Wraps an external cursor. The first pass takes it; later passes are empty.
#[derive(Debug)]
pub struct SinglePass<I> {
    inner: RefCell<Option<I>>,
}

pub fn single_pass<I: IntoIterator>(iter: I) -> SinglePass<I::IntoIter> {
    SinglePass {
        inner: RefCell::new(Some(iter.into_iter())),
    }
}

impl<I> SinglePass<I> {
    /// Whether a pass has already claimed the underlying cursor.
    pub fn is_consumed(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

impl<I: Iterator> Sequence for SinglePass<I> {
    type Item = I::Item;
    type Cursor<'a> = std::iter::Flatten<std::option::IntoIter<I>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.inner.borrow_mut().take().into_iter().flatten()
    }
}

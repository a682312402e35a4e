//! Predicate-driven streaming operators: `filter`, `take_while`, `skip_while`.
//!
//! Each predicate runs at most once per upstream element per pass, only while
//! the cursor is pulled. None of these buffer more than the element in hand.

use seqkit_core::sequence::Sequence;

use crate::func::Predicate;

/// Elements for which the predicate holds.
#[derive(Debug, Clone)]
pub struct Filter<S, Q> {
    source: S,
    predicate: Q,
}

impl<S, Q> Filter<S, Q> {
    pub(crate) fn new(source: S, predicate: Q) -> Self {
        Self { source, predicate }
    }
}

pub struct FilterCursor<'a, S: Sequence + 'a, Q> {
    inner: S::Cursor<'a>,
    predicate: &'a Q,
    index: usize,
}

impl<'a, S, Q> Iterator for FilterCursor<'a, S, Q>
where
    S: Sequence + 'a,
    Q: Predicate<S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        for item in self.inner.by_ref() {
            let index = self.index;
            self.index += 1;
            if self.predicate.test(&item, index) {
                return Some(item);
            }
        }
        None
    }
}

impl<S, Q> Sequence for Filter<S, Q>
where
    S: Sequence,
    Q: Predicate<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = FilterCursor<'a, S, Q>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            inner: self.source.cursor(),
            predicate: &self.predicate,
            index: 0,
        }
    }
}

/// Leading elements while the predicate holds.
#[derive(Debug, Clone)]
pub struct TakeWhile<S, Q> {
    source: S,
    predicate: Q,
}

impl<S, Q> TakeWhile<S, Q> {
    pub(crate) fn new(source: S, predicate: Q) -> Self {
        Self { source, predicate }
    }
}

pub struct TakeWhileCursor<'a, S: Sequence + 'a, Q> {
    // Dropped as soon as the predicate first fails.
    inner: Option<S::Cursor<'a>>,
    predicate: &'a Q,
    index: usize,
}

impl<'a, S, Q> Iterator for TakeWhileCursor<'a, S, Q>
where
    S: Sequence + 'a,
    Q: Predicate<S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let item = self.inner.as_mut()?.next();
        match item {
            Some(item) if self.predicate.test(&item, self.index) => {
                self.index += 1;
                Some(item)
            }
            _ => {
                self.inner = None;
                None
            }
        }
    }
}

impl<S, Q> Sequence for TakeWhile<S, Q>
where
    S: Sequence,
    Q: Predicate<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = TakeWhileCursor<'a, S, Q>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeWhileCursor {
            inner: Some(self.source.cursor()),
            predicate: &self.predicate,
            index: 0,
        }
    }
}

/// Everything from the first element for which the predicate fails.
#[derive(Debug, Clone)]
pub struct SkipWhile<S, Q> {
    source: S,
    predicate: Q,
}

impl<S, Q> SkipWhile<S, Q> {
    pub(crate) fn new(source: S, predicate: Q) -> Self {
        Self { source, predicate }
    }
}

pub struct SkipWhileCursor<'a, S: Sequence + 'a, Q> {
    inner: S::Cursor<'a>,
    predicate: &'a Q,
    index: usize,
    skipping: bool,
}

impl<'a, S, Q> Iterator for SkipWhileCursor<'a, S, Q>
where
    S: Sequence + 'a,
    Q: Predicate<S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if !self.skipping {
            return self.inner.next();
        }
        loop {
            let item = self.inner.next()?;
            let index = self.index;
            self.index += 1;
            if !self.predicate.test(&item, index) {
                // The predicate is never consulted again for this pass.
                self.skipping = false;
                return Some(item);
            }
        }
    }
}

impl<S, Q> Sequence for SkipWhile<S, Q>
where
    S: Sequence,
    Q: Predicate<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = SkipWhileCursor<'a, S, Q>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipWhileCursor {
            inner: self.source.cursor(),
            predicate: &self.predicate,
            index: 0,
            skipping: true,
        }
    }
}

//! Count-driven partitioning: `take` and `skip`.

use seqkit_core::sequence::Sequence;

/// At most `count` leading elements. A non-positive count yields nothing and
/// never opens the upstream cursor.
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    count: isize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: isize) -> Self {
        Self { source, count }
    }
}

pub struct TakeCursor<'a, S: Sequence + 'a> {
    inner: Option<S::Cursor<'a>>,
    remaining: usize,
}

impl<'a, S: Sequence + 'a> Iterator for TakeCursor<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            self.inner = None;
            return None;
        }
        match self.inner.as_mut()?.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.inner = None;
                None
            }
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a> = TakeCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let remaining = usize::try_from(self.count).unwrap_or(0);
        TakeCursor {
            inner: (remaining > 0).then(|| self.source.cursor()),
            remaining,
        }
    }
}

/// Everything after the first `count` elements. The skipped prefix is consumed
/// on the first pull, never at construction.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    count: isize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: isize) -> Self {
        Self { source, count }
    }
}

pub struct SkipCursor<'a, S: Sequence + 'a> {
    inner: S::Cursor<'a>,
    pending: usize,
}

impl<'a, S: Sequence + 'a> Iterator for SkipCursor<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            if self.inner.next().is_none() {
                self.pending = 0;
                return None;
            }
        }
        self.inner.next()
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a> = SkipCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipCursor {
            inner: self.source.cursor(),
            pending: usize::try_from(self.count).unwrap_or(0),
        }
    }
}

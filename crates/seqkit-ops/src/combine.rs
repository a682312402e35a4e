//! Operators over two sequences (`concat`, `zip`) and `default_if_empty`.

use seqkit_core::sequence::Sequence;

/// All of `first`, then all of `second`.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

pub struct ConcatCursor<'a, A: Sequence + 'a, B: Sequence + 'a> {
    // Released once exhausted, before `second` is pulled.
    first: Option<A::Cursor<'a>>,
    second: &'a B,
    second_cursor: Option<B::Cursor<'a>>,
}

impl<'a, A, B> Iterator for ConcatCursor<'a, A, B>
where
    A: Sequence + 'a,
    B: Sequence<Item = A::Item> + 'a,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = self.first.as_mut() {
            if let Some(item) = first.next() {
                return Some(item);
            }
            self.first = None;
        }
        // The second pass starts only after the first is exhausted.
        let second = self.second;
        self.second_cursor
            .get_or_insert_with(|| second.cursor())
            .next()
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a> = ConcatCursor<'a, A, B>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: Some(self.first.cursor()),
            second: &self.second,
            second_cursor: None,
        }
    }
}

/// Pairwise combination, stopping at the shorter input.
#[derive(Debug, Clone)]
pub struct Zip<A, B, F> {
    first: A,
    second: B,
    result: F,
}

impl<A, B, F> Zip<A, B, F> {
    pub(crate) fn new(first: A, second: B, result: F) -> Self {
        Self {
            first,
            second,
            result,
        }
    }
}

pub struct ZipCursor<'a, A: Sequence + 'a, B: Sequence + 'a, F> {
    first: Option<A::Cursor<'a>>,
    second: Option<B::Cursor<'a>>,
    result: &'a F,
}

impl<'a, A: Sequence + 'a, B: Sequence + 'a, F> ZipCursor<'a, A, B, F> {
    fn finish(&mut self) {
        self.first = None;
        self.second = None;
    }
}

impl<'a, A, B, F, R> Iterator for ZipCursor<'a, A, B, F>
where
    A: Sequence + 'a,
    B: Sequence + 'a,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let Some(a) = self.first.as_mut().and_then(|c| c.next()) else {
            self.finish();
            return None;
        };
        let Some(b) = self.second.as_mut().and_then(|c| c.next()) else {
            self.finish();
            return None;
        };
        Some((self.result)(a, b))
    }
}

impl<A, B, F, R> Sequence for Zip<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;
    type Cursor<'a> = ZipCursor<'a, A, B, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipCursor {
            first: Some(self.first.cursor()),
            second: Some(self.second.cursor()),
            result: &self.result,
        }
    }
}

/// The source, or a single default element when the source is empty.
#[derive(Debug, Clone)]
pub struct DefaultIfEmpty<S, T> {
    source: S,
    default: T,
}

impl<S, T> DefaultIfEmpty<S, T> {
    pub(crate) fn new(source: S, default: T) -> Self {
        Self { source, default }
    }
}

pub struct DefaultIfEmptyCursor<'a, S: Sequence + 'a> {
    inner: Option<S::Cursor<'a>>,
    default: &'a S::Item,
    started: bool,
}

impl<'a, S> Iterator for DefaultIfEmptyCursor<'a, S>
where
    S: Sequence + 'a,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let item = self.inner.as_mut()?.next();
        if item.is_none() {
            self.inner = None;
            if !self.started {
                self.started = true;
                return Some(self.default.clone());
            }
        }
        self.started = true;
        item
    }
}

impl<S, T> Sequence for DefaultIfEmpty<S, T>
where
    S: Sequence<Item = T>,
    T: Clone,
{
    type Item = T;
    type Cursor<'a> = DefaultIfEmptyCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DefaultIfEmptyCursor {
            inner: Some(self.source.cursor()),
            default: &self.default,
            started: false,
        }
    }
}

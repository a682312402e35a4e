//! Projection operators: `map` and the flattening `flat_map` family.

use seqkit_core::sequence::Sequence;

use crate::func::Selector;

/// One output per upstream element.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

pub struct MapCursor<'a, S: Sequence + 'a, F> {
    inner: S::Cursor<'a>,
    selector: &'a F,
    index: usize,
}

impl<'a, S, F> Iterator for MapCursor<'a, S, F>
where
    S: Sequence + 'a,
    F: Selector<S::Item>,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<F::Output> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some(self.selector.select(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Selector<S::Item>,
{
    type Item = F::Output;
    type Cursor<'a> = MapCursor<'a, S, F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            inner: self.source.cursor(),
            selector: &self.selector,
            index: 0,
        }
    }
}

/// Each upstream element projected to a collection, flattened in order.
#[derive(Debug, Clone)]
pub struct FlatMap<S, F> {
    source: S,
    selector: F,
}

impl<S, F> FlatMap<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

pub struct FlatMapCursor<'a, S: Sequence + 'a, F, C: IntoIterator> {
    inner: S::Cursor<'a>,
    selector: &'a F,
    current: Option<C::IntoIter>,
}

impl<'a, S, F, C> Iterator for FlatMapCursor<'a, S, F, C>
where
    S: Sequence + 'a,
    F: Fn(S::Item) -> C,
    C: IntoIterator,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let outer = self.inner.next()?;
            self.current = Some((self.selector)(outer).into_iter());
        }
    }
}

impl<S, F, C> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> C,
    C: IntoIterator,
{
    type Item = C::Item;
    type Cursor<'a> = FlatMapCursor<'a, S, F, C>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FlatMapCursor {
            inner: self.source.cursor(),
            selector: &self.selector,
            current: None,
        }
    }
}

/// `flat_map` with a result selector that also sees the originating element.
#[derive(Debug, Clone)]
pub struct FlatMapWith<S, F, G> {
    source: S,
    collection: F,
    result: G,
}

impl<S, F, G> FlatMapWith<S, F, G> {
    pub(crate) fn new(source: S, collection: F, result: G) -> Self {
        Self {
            source,
            collection,
            result,
        }
    }
}

pub struct FlatMapWithCursor<'a, S: Sequence + 'a, F, G, C: IntoIterator> {
    inner: S::Cursor<'a>,
    collection: &'a F,
    result: &'a G,
    current: Option<(S::Item, C::IntoIter)>,
}

impl<'a, S, F, G, C, R> Iterator for FlatMapWithCursor<'a, S, F, G, C>
where
    S: Sequence + 'a,
    F: Fn(&S::Item) -> C,
    G: Fn(&S::Item, C::Item) -> R,
    C: IntoIterator,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some((outer, current)) = self.current.as_mut() {
                if let Some(item) = current.next() {
                    return Some((self.result)(&*outer, item));
                }
                self.current = None;
            }
            let outer = self.inner.next()?;
            let current = (self.collection)(&outer).into_iter();
            self.current = Some((outer, current));
        }
    }
}

impl<S, F, G, C, R> Sequence for FlatMapWith<S, F, G>
where
    S: Sequence,
    F: Fn(&S::Item) -> C,
    G: Fn(&S::Item, C::Item) -> R,
    C: IntoIterator,
{
    type Item = R;
    type Cursor<'a> = FlatMapWithCursor<'a, S, F, G, C>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FlatMapWithCursor {
            inner: self.source.cursor(),
            collection: &self.collection,
            result: &self.result,
            current: None,
        }
    }
}

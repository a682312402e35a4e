//! The `Sequence` capability.
//!
//! A sequence is not a container: it is something that can hand out cursors.
//! Operator nodes own their upstream sequences and closures and build their
//! cursors from borrowed state, so a node can be iterated any number of times
//! and never mutates what it wraps.

/// A re-iterable, forward-only source of values.
///
/// Invariants:
/// - Every `cursor()` call starts a fresh pass; two cursors never share position.
/// - Work happens only while a cursor is pulled. Building a cursor is cheap.
/// - Dropping a cursor releases everything it acquired from upstream. This holds
///   for exhaustion, early abandonment and unwinding alike.
pub trait Sequence {
    type Item;

    /// The per-pass iteration state.
    type Cursor<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Begin a new pass over the sequence.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Known size + random access, when the sequence is backed by a collection.
    ///
    /// Reducers query this once and fall back to a scan when it is `None`.
    fn indexed(&self) -> Option<&dyn Indexed<Self::Item>> {
        None
    }
}

/// Random access over a sequence whose size is known in O(1).
pub trait Indexed<T> {
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'s, S> Sequence for &'s S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'s>
    where
        Self: 'a;

    fn cursor(&self) -> S::Cursor<'s> {
        let inner: &'s S = *self;
        inner.cursor()
    }

    fn indexed(&self) -> Option<&dyn Indexed<S::Item>> {
        let inner: &'s S = *self;
        inner.indexed()
    }
}

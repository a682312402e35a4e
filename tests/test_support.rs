//! Shared helpers for integration tests: a sequence that records how it is used.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use seqkit::Sequence;

/// Counters shared between a `Tracked` source and the test that inspects it.
#[derive(Debug, Default)]
pub struct Tally {
    opened: Cell<usize>,
    released: Cell<usize>,
    pulled: Cell<usize>,
}

impl Tally {
    pub fn opened(&self) -> usize {
        self.opened.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    /// Cursors opened but not yet dropped.
    pub fn live(&self) -> usize {
        self.opened() - self.released()
    }
}

/// A re-iterable source over a fixed list that counts cursor opens, drops and
/// element pulls.
pub struct Tracked<T> {
    items: Vec<T>,
    tally: Rc<Tally>,
}

impl<T: Clone> Tracked<T> {
    pub fn new(items: Vec<T>) -> (Self, Rc<Tally>) {
        let tally = Rc::new(Tally::default());
        (
            Self {
                items,
                tally: Rc::clone(&tally),
            },
            tally,
        )
    }
}

pub struct TrackedCursor<'a, T> {
    items: std::slice::Iter<'a, T>,
    tally: &'a Tally,
}

impl<T: Clone> Iterator for TrackedCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.next()?.clone();
        self.tally.pulled.set(self.tally.pulled.get() + 1);
        Some(item)
    }
}

impl<T> Drop for TrackedCursor<'_, T> {
    fn drop(&mut self) {
        self.tally.released.set(self.tally.released.get() + 1);
    }
}

impl<T: Clone> Sequence for Tracked<T> {
    type Item = T;
    type Cursor<'a> = TrackedCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.tally.opened.set(self.tally.opened.get() + 1);
        TrackedCursor {
            items: self.items.iter(),
            tally: &self.tally,
        }
    }
}

pub fn tracked<T: Clone>(items: impl IntoIterator<Item = T>) -> (Tracked<T>, Rc<Tally>) {
    Tracked::new(items.into_iter().collect())
}

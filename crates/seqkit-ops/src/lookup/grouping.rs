//! `Grouping`: one key and the elements that shared it, in source order.

use serde::{Deserialize, Serialize};

use seqkit_core::sequence::{Indexed, Sequence};

/// The key is the first key seen for the equivalence class; the elements
/// keep their relative source order. Immutable once its lookup is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping<K, E> {
    key: K,
    elements: Vec<E>,
}

impl<K, E> Grouping<K, E> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            elements: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, element: E) {
        self.elements.push(element);
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn into_parts(self) -> (K, Vec<E>) {
        (self.key, self.elements)
    }
}

impl<'g, K, E> IntoIterator for &'g Grouping<K, E> {
    type Item = &'g E;
    type IntoIter = std::slice::Iter<'g, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<K, E: Clone> Sequence for Grouping<K, E> {
    type Item = E;
    type Cursor<'a> = std::iter::Cloned<std::slice::Iter<'a, E>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.elements.iter().cloned()
    }

    fn indexed(&self) -> Option<&dyn Indexed<E>> {
        Some(self)
    }
}

impl<K, E: Clone> Indexed<E> for Grouping<K, E> {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> Option<E> {
        self.elements.get(index).cloned()
    }
}

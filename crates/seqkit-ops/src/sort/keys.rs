//! Sort key chains: one `KeyOrder` per `order_by`/`then_by` step.

use std::cmp::Ordering;

use seqkit_core::policy::OrderPolicy;

/// Extracts a composite key from an element and orders two such keys.
pub trait SortKeys<T> {
    type Keys;

    fn extract(&self, item: &T) -> Self::Keys;

    fn compare(&self, a: &Self::Keys, b: &Self::Keys) -> Ordering;
}

/// A single key selector with its order policy and direction.
#[derive(Debug, Clone, Copy)]
pub struct KeyOrder<F, O> {
    selector: F,
    order: O,
    descending: bool,
}

impl<F, O> KeyOrder<F, O> {
    pub(crate) fn new(selector: F, order: O, descending: bool) -> Self {
        Self {
            selector,
            order,
            descending,
        }
    }
}

impl<T, K, F, O> SortKeys<T> for KeyOrder<F, O>
where
    F: Fn(&T) -> K,
    O: OrderPolicy<K>,
{
    type Keys = K;

    fn extract(&self, item: &T) -> K {
        (self.selector)(item)
    }

    fn compare(&self, a: &K, b: &K) -> Ordering {
        let ordering = self.order.compare(a, b);
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// `primary`, with ties broken by `secondary`.
#[derive(Debug, Clone, Copy)]
pub struct ThenKeys<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenKeys<A, B> {
    pub(crate) fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<T, A, B> SortKeys<T> for ThenKeys<A, B>
where
    A: SortKeys<T>,
    B: SortKeys<T>,
{
    type Keys = (A::Keys, B::Keys);

    fn extract(&self, item: &T) -> Self::Keys {
        (self.primary.extract(item), self.secondary.extract(item))
    }

    fn compare(&self, a: &Self::Keys, b: &Self::Keys) -> Ordering {
        self.primary
            .compare(&a.0, &b.0)
            .then_with(|| self.secondary.compare(&a.1, &b.1))
    }
}

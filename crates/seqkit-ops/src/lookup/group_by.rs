//! `group_by` support.
//!
//! Grouping is the one eager operator: `group_by` drains its source into a
//! `Lookup` when it is called, and every later pass walks the groups already
//! built. `Regroup` folds those groups into result values lazily.

use crate::func::Selector;

use super::Grouping;

/// Folds each group into one value with a `(key, elements)` closure.
#[derive(Debug, Clone, Copy)]
pub struct Regroup<F>(pub F);

impl<K, E, R, F> Selector<Grouping<K, E>> for Regroup<F>
where
    F: Fn(K, Vec<E>) -> R,
{
    type Output = R;

    fn select(&self, group: Grouping<K, E>, _index: usize) -> R {
        let (key, elements) = group.into_parts();
        (self.0)(key, elements)
    }
}

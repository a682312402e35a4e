//! Adapters that let one cursor serve both the plain and the index-aware
//! overloads of an operator.
//!
//! The position passed to `WithIndex` closures is the zero-based index of the
//! element in the upstream pass.

/// A predicate over an element and its upstream position.
pub trait Predicate<T> {
    fn test(&self, item: &T, index: usize) -> bool;
}

/// A projection over an element and its upstream position.
pub trait Selector<T> {
    type Output;

    fn select(&self, item: T, index: usize) -> Self::Output;
}

/// Closure that ignores the position.
#[derive(Debug, Clone, Copy)]
pub struct Plain<F>(pub F);

/// Closure that receives the position as its last argument.
#[derive(Debug, Clone, Copy)]
pub struct WithIndex<F>(pub F);

impl<T, F> Predicate<T> for Plain<F>
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T, _index: usize) -> bool {
        (self.0)(item)
    }
}

impl<T, F> Predicate<T> for WithIndex<F>
where
    F: Fn(&T, usize) -> bool,
{
    fn test(&self, item: &T, index: usize) -> bool {
        (self.0)(item, index)
    }
}

impl<T, R, F> Selector<T> for Plain<F>
where
    F: Fn(T) -> R,
{
    type Output = R;

    fn select(&self, item: T, _index: usize) -> R {
        (self.0)(item)
    }
}

impl<T, R, F> Selector<T> for WithIndex<F>
where
    F: Fn(T, usize) -> R,
{
    type Output = R;

    fn select(&self, item: T, index: usize) -> R {
        (self.0)(item, index)
    }
}

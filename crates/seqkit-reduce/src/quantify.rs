//! Quantifiers and comparisons: `any`, `all`, `contains`, `sequence_equal`.

use seqkit_core::policy::EqualityPolicy;
use seqkit_core::sequence::Sequence;

pub fn any<S: Sequence>(source: &S) -> bool {
    match source.indexed() {
        Some(view) => !view.is_empty(),
        None => source.cursor().next().is_some(),
    }
}

pub fn any_where<S, F>(source: &S, predicate: F) -> bool
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    source.cursor().any(|item| predicate(&item))
}

/// True for an empty source.
pub fn all<S, F>(source: &S, predicate: F) -> bool
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    source.cursor().all(|item| predicate(&item))
}

pub fn contains<S>(source: &S, value: &S::Item) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    source.cursor().any(|item| item == *value)
}

pub fn contains_with<S, P>(source: &S, value: &S::Item, policy: P) -> bool
where
    S: Sequence,
    P: EqualityPolicy<S::Item>,
{
    source.cursor().any(|item| policy.equals(&item, value))
}

fn pairwise<A, B, E>(first: &A, second: &B, eq: E) -> bool
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    E: Fn(&A::Item, &A::Item) -> bool,
{
    if let (Some(a), Some(b)) = (first.indexed(), second.indexed()) {
        if a.len() != b.len() {
            return false;
        }
    }
    let mut left = first.cursor();
    let mut right = second.cursor();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if eq(&a, &b) => {}
            _ => return false,
        }
    }
}

/// Pairwise equality; both sequences must end together.
pub fn sequence_equal<A, B>(first: &A, second: &B) -> bool
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq,
{
    pairwise(first, second, |a, b| a == b)
}

pub fn sequence_equal_with<A, B, P>(first: &A, second: &B, policy: P) -> bool
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    P: EqualityPolicy<A::Item>,
{
    pairwise(first, second, |a, b| policy.equals(a, b))
}

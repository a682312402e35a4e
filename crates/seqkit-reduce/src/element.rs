//! Element access: `first`, `last`, `single`, `element_at` and their
//! predicated and defaulting forms.

use seqkit_core::error::{InvalidOperation, Result, SeqError};
use seqkit_core::sequence::Sequence;

use crate::metrics::failed;

pub fn first<S: Sequence>(source: &S) -> Result<S::Item> {
    source
        .cursor()
        .next()
        .ok_or_else(|| failed("first", InvalidOperation::NoElements.into()))
}

pub fn first_where<S, F>(source: &S, predicate: F) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    source
        .cursor()
        .find(|item| predicate(item))
        .ok_or_else(|| failed("first", InvalidOperation::NoMatch.into()))
}

fn last_of<S: Sequence>(source: &S) -> Option<S::Item> {
    match source.indexed() {
        Some(view) if view.is_empty() => None,
        Some(view) => view.get(view.len() - 1),
        None => source.cursor().last(),
    }
}

pub fn last<S: Sequence>(source: &S) -> Result<S::Item> {
    last_of(source).ok_or_else(|| failed("last", InvalidOperation::NoElements.into()))
}

pub fn last_where<S, F>(source: &S, predicate: F) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    source
        .cursor()
        .filter(|item| predicate(item))
        .last()
        .ok_or_else(|| failed("last", InvalidOperation::NoMatch.into()))
}

pub fn first_or_default<S>(source: &S) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    source.cursor().next().unwrap_or_default()
}

pub fn first_or_default_where<S, F>(source: &S, predicate: F) -> S::Item
where
    S: Sequence,
    S::Item: Default,
    F: Fn(&S::Item) -> bool,
{
    source.cursor().find(|item| predicate(item)).unwrap_or_default()
}

pub fn last_or_default<S>(source: &S) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    last_of(source).unwrap_or_default()
}

pub fn last_or_default_where<S, F>(source: &S, predicate: F) -> S::Item
where
    S: Sequence,
    S::Item: Default,
    F: Fn(&S::Item) -> bool,
{
    source
        .cursor()
        .filter(|item| predicate(item))
        .last()
        .unwrap_or_default()
}

enum Matches<T> {
    None,
    One(T),
    Many,
}

/// Scan until a second match shows up.
fn matches<S, F>(source: &S, predicate: F) -> Matches<S::Item>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    let mut found = source.cursor().filter(|item| predicate(item));
    match (found.next(), found.next()) {
        (None, _) => Matches::None,
        (Some(item), None) => Matches::One(item),
        (Some(_), Some(_)) => Matches::Many,
    }
}

pub fn single<S: Sequence>(source: &S) -> Result<S::Item> {
    match matches(source, |_| true) {
        Matches::One(item) => Ok(item),
        Matches::None => Err(failed("single", InvalidOperation::NoElements.into())),
        Matches::Many => Err(failed("single", InvalidOperation::MoreThanOneElement.into())),
    }
}

pub fn single_where<S, F>(source: &S, predicate: F) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool,
{
    match matches(source, predicate) {
        Matches::One(item) => Ok(item),
        Matches::None => Err(failed("single", InvalidOperation::NoMatch.into())),
        Matches::Many => Err(failed("single", InvalidOperation::MoreThanOneMatch.into())),
    }
}

/// The only element, or the default when empty. More than one element is
/// still an error.
pub fn single_or_default<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
{
    match matches(source, |_| true) {
        Matches::One(item) => Ok(item),
        Matches::None => Ok(S::Item::default()),
        Matches::Many => Err(failed(
            "single_or_default",
            InvalidOperation::MoreThanOneElement.into(),
        )),
    }
}

pub fn single_or_default_where<S, F>(source: &S, predicate: F) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
    F: Fn(&S::Item) -> bool,
{
    match matches(source, predicate) {
        Matches::One(item) => Ok(item),
        Matches::None => Ok(S::Item::default()),
        Matches::Many => Err(failed(
            "single_or_default",
            InvalidOperation::MoreThanOneMatch.into(),
        )),
    }
}

fn position(index: isize) -> Option<usize> {
    usize::try_from(index).ok()
}

fn lookup_at<S: Sequence>(source: &S, index: usize) -> Option<S::Item> {
    match source.indexed() {
        Some(view) => view.get(index),
        None => source.cursor().nth(index),
    }
}

/// Element at zero-based `index`; negative or past-the-end is `OutOfRange`.
pub fn element_at<S: Sequence>(source: &S, index: isize) -> Result<S::Item> {
    position(index)
        .and_then(|at| lookup_at(source, at))
        .ok_or_else(|| {
            failed(
                "element_at",
                SeqError::OutOfRange {
                    argument: "index",
                    index,
                },
            )
        })
}

/// Like `element_at`, but any invalid index yields the default.
pub fn element_at_or_default<S>(source: &S, index: isize) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    position(index)
        .and_then(|at| lookup_at(source, at))
        .unwrap_or_default()
}

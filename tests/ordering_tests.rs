//! `order_by` / `then_by`: stable multi-key ordering.

mod test_support;

use std::cell::Cell;

use seqkit::prelude::*;
use test_support::tracked;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    team: &'static str,
    score: u32,
    seq: usize,
}

fn rows() -> Source<Row> {
    let raw = [
        ("blue", 7),
        ("red", 9),
        ("blue", 9),
        ("green", 7),
        ("red", 7),
        ("blue", 7),
    ];
    raw.iter()
        .enumerate()
        .map(|(seq, &(team, score))| Row { team, score, seq })
        .collect()
}

fn seqs<S: Sequence<Item = Row>>(ordered: S) -> Vec<usize> {
    ordered.map(|r| r.seq).to_vec()
}

#[test]
fn test_order_by_is_stable() {
    assert_eq!(seqs(rows().order_by(|r| r.score)), vec![0, 3, 4, 5, 1, 2]);
}

#[test]
fn test_order_by_descending_is_stable() {
    assert_eq!(
        seqs(rows().order_by_descending(|r| r.score)),
        vec![1, 2, 0, 3, 4, 5]
    );
}

#[test]
fn test_then_by_breaks_ties_only() {
    let ordered = rows().order_by(|r| r.team).then_by_descending(|r| r.score);
    assert_eq!(seqs(ordered), vec![2, 0, 5, 3, 1, 4]);

    let ordered = rows()
        .order_by_descending(|r| r.score)
        .then_by(|r| r.team);
    assert_eq!(seqs(ordered), vec![2, 1, 0, 5, 3, 4]);
}

#[test]
fn test_custom_order_policy() {
    let by_len_desc = |a: &&str, b: &&str| b.len().cmp(&a.len());
    let words = from_vec(vec!["bb", "a", "ccc", "dd"]);
    let ordered = (&words)
        .order_by_with(|w| *w, by_len_desc)
        .then_by_with(|w| *w, |a: &&str, b: &&str| a.cmp(b));
    assert_eq!(ordered.to_vec(), vec!["ccc", "bb", "dd", "a"]);

    let reversed = (&words).order_by_descending_with(|w| *w, |a: &&str, b: &&str| a.cmp(b));
    assert_eq!(reversed.to_vec(), vec!["dd", "ccc", "bb", "a"]);
}

#[test]
fn test_ordering_is_deferred_and_buffers_per_pass() {
    let (src, tally) = tracked(vec![3, 1, 2]);
    let calls = Cell::new(0);
    let ordered = src.order_by(|x| {
        calls.set(calls.get() + 1);
        *x
    });
    assert_eq!(tally.opened(), 0);
    assert_eq!(calls.get(), 0);

    assert_eq!(ordered.to_vec(), vec![1, 2, 3]);
    assert_eq!(calls.get(), 3);
    assert_eq!(tally.live(), 0);

    assert_eq!(ordered.first().unwrap(), 1);
    assert_eq!(tally.opened(), 2);
}

#[test]
fn test_sort_on_partial_keys_with_total_order() {
    let values = from_vec(vec![2.5f64, -1.0, 0.0, 10.0]);
    let ordered = values.order_by_with(|v| *v, |a: &f64, b: &f64| a.total_cmp(b));
    assert_eq!(ordered.to_vec(), vec![-1.0, 0.0, 2.5, 10.0]);
}

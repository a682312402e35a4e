//! Inner join and group join.

mod test_support;

use seqkit::prelude::*;
use test_support::tracked;

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: u32,
    name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct Order {
    customer: u32,
    item: &'static str,
}

fn customers() -> Source<Customer> {
    from_vec(vec![
        Customer { id: 1, name: "ada" },
        Customer { id: 2, name: "bea" },
        Customer { id: 3, name: "cy" },
    ])
}

fn orders() -> Source<Order> {
    from_vec(vec![
        Order { customer: 2, item: "lamp" },
        Order { customer: 1, item: "desk" },
        Order { customer: 2, item: "rug" },
        Order { customer: 9, item: "orphan" },
    ])
}

#[test]
fn test_join_follows_outer_then_inner_order() {
    let pairs = customers().join(
        orders(),
        |c| c.id,
        |o| o.customer,
        |c, o| format!("{}:{}", c.name, o.item),
    );
    assert_eq!(pairs.to_vec(), vec!["ada:desk", "bea:lamp", "bea:rug"]);
}

#[test]
fn test_join_builds_inner_index_lazily_once_per_pass() {
    let (outer, tally_outer) = tracked(vec![1, 2, 3]);
    let (inner, tally_inner) = tracked(vec![3, 3, 1]);
    let joined = outer.join(inner, |o| *o, |i| *i, |o, i| o * 10 + i);
    assert_eq!(tally_inner.opened(), 0);

    let mut cursor = joined.cursor();
    assert_eq!(tally_inner.opened(), 0);
    assert_eq!(cursor.next(), Some(11));
    assert_eq!(tally_inner.opened(), 1);
    assert_eq!(tally_inner.live(), 0);
    assert_eq!(cursor.next(), Some(33));
    assert_eq!(cursor.next(), Some(33));
    assert_eq!(cursor.next(), None);
    assert_eq!(tally_outer.live(), 0);
    drop(cursor);

    assert_eq!(joined.count().unwrap(), 3);
    assert_eq!(tally_inner.opened(), 2);
}

#[test]
fn test_group_join_emits_one_row_per_outer() {
    let summary = customers().group_join(
        orders(),
        |c| c.id,
        |o| o.customer,
        |c, matched| (c.name, matched.iter().map(|o| o.item).collect::<Vec<_>>()),
    );
    assert_eq!(
        summary.to_vec(),
        vec![
            ("ada", vec!["desk"]),
            ("bea", vec!["lamp", "rug"]),
            ("cy", vec![]),
        ]
    );
}

#[test]
fn test_join_with_policy() {
    let left = from_vec(vec!["Red", "green"]);
    let right = from_vec(vec!["RED", "red", "blue"]);
    let folded = projected(|s: &String| s.to_lowercase());
    let joined = left.join_with(
        right,
        |l| l.to_string(),
        |r| r.to_string(),
        |l, r| format!("{l}={r}"),
        folded,
    );
    assert_eq!(joined.to_vec(), vec!["Red=RED", "Red=red"]);
}

#[test]
fn test_absent_outer_keys_never_match() {
    let left = from_vec(vec![Some(1), None]);
    let right = from_vec(vec![None, Some(1)]);
    let inner = (&left).join_with(&right, |l| *l, |r| *r, |l, r| (*l, *r), nullable(NaturalEq));
    assert_eq!(inner.to_vec(), vec![(Some(1), Some(1))]);

    let grouped = (&left).group_join_with(
        &right,
        |l| *l,
        |r| *r,
        |l, matched| (l, matched.len()),
        nullable(NaturalEq),
    );
    assert_eq!(grouped.to_vec(), vec![(Some(1), 1), (None, 0)]);
}

#[test]
fn test_join_with_empty_side() {
    let none: Empty<u32> = empty();
    let joined = customers().join(none, |c| c.id, |k| *k, |c, _| c.name);
    assert!(joined.to_vec().is_empty());

    let grouped = customers().group_join(none, |c| c.id, |k| *k, |c, m| (c.id, m.len()));
    assert_eq!(grouped.to_vec(), vec![(1, 0), (2, 0), (3, 0)]);
}

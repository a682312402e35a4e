//! Deferred execution, cursor release and the streaming operators.

mod test_support;

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use seqkit::prelude::*;
use test_support::tracked;

#[test]
fn test_construction_runs_nothing() {
    let (src, tally) = tracked(vec![1, 2, 3, 4]);
    let calls = Cell::new(0);
    let chain = src
        .filter(|x| {
            calls.set(calls.get() + 1);
            x % 2 == 0
        })
        .map(|x| x * 10);

    assert_eq!(tally.opened(), 0);
    assert_eq!(calls.get(), 0);

    assert_eq!(chain.to_vec(), vec![20, 40]);
    assert_eq!(calls.get(), 4);
    assert_eq!(tally.opened(), 1);
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_every_pass_starts_fresh() {
    let (src, tally) = tracked(vec![3, 1, 2]);
    let chain = src.map(|x| x + 1);
    assert_eq!(chain.to_vec(), vec![4, 2, 3]);
    assert_eq!(chain.to_vec(), vec![4, 2, 3]);
    assert_eq!(tally.opened(), 2);
    assert_eq!(tally.live(), 0);

    let mut a = chain.cursor();
    let mut b = chain.cursor();
    assert_eq!(a.next(), Some(4));
    assert_eq!(a.next(), Some(2));
    assert_eq!(b.next(), Some(4));
}

#[test]
fn test_abandoned_cursor_is_released() {
    let (src, tally) = tracked(vec![1, 2, 3, 4, 5]);
    let chain = src.filter(|x| *x > 1);
    let mut cursor = chain.cursor();
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(tally.pulled(), 2);
    assert_eq!(tally.live(), 1);
    drop(cursor);
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_panicking_selector_releases_upstream() {
    let (src, tally) = tracked(vec![1, 2, 3]);
    let chain = src.map(|x| if x == 2 { panic!("selector failed") } else { x });
    let outcome = catch_unwind(AssertUnwindSafe(|| chain.to_vec()));
    assert!(outcome.is_err());
    assert_eq!(tally.opened(), 1);
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_scenario_range_filter_sum() -> seqkit::Result<()> {
    let numbers = range(1, 5)?;
    assert_eq!(numbers.to_vec(), vec![1, 2, 3, 4, 5]);
    let evens = numbers.filter(|x| x % 2 == 0);
    assert_eq!(evens.to_vec(), vec![2, 4]);
    assert_eq!(evens.sum::<i32>()?, 6);
    Ok(())
}

#[test]
fn test_indexed_overloads_see_positions() {
    let letters = from_vec(vec!['a', 'b', 'c', 'd', 'e']);
    assert_eq!(
        (&letters).filter_indexed(|_, i| i % 2 == 0).to_vec(),
        vec!['a', 'c', 'e']
    );
    assert_eq!(
        (&letters).map_indexed(|c, i| format!("{i}{c}")).to_vec(),
        vec!["0a", "1b", "2c", "3d", "4e"]
    );
    assert_eq!(
        (&letters).take_while_indexed(|_, i| i < 2).to_vec(),
        vec!['a', 'b']
    );
    assert_eq!(
        (&letters).skip_while_indexed(|c, i| *c != 'd' && i < 10).to_vec(),
        vec!['d', 'e']
    );
}

#[test]
fn test_take_pulls_only_what_it_yields() {
    let (src, tally) = tracked(1..=5);
    let first_two = src.take(2);
    assert_eq!(first_two.to_vec(), vec![1, 2]);
    assert_eq!(tally.pulled(), 2);
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_non_positive_take_never_opens_source() {
    let (src, tally) = tracked(1..=5);
    let none = (&src).take(0);
    assert!(none.to_vec().is_empty());
    let negative = (&src).take(-3);
    assert!(negative.to_vec().is_empty());
    assert_eq!(tally.opened(), 0);
}

#[test]
fn test_skip_bounds() {
    let items = from_vec(vec![1, 2, 3]);
    assert_eq!((&items).skip(-3).to_vec(), vec![1, 2, 3]);
    assert_eq!((&items).skip(1).to_vec(), vec![2, 3]);
    assert!((&items).skip(10).to_vec().is_empty());
}

#[test]
fn test_take_then_skip_reassembles_source() {
    let items = from_vec(vec![5, 8, 13, 21, 34]);
    for n in 0..7 {
        let rebuilt = (&items).take(n).concat((&items).skip(n));
        assert_eq!(rebuilt.to_vec(), items.as_slice().to_vec(), "n = {n}");
    }
}

#[test]
fn test_take_while_stops_at_first_failure() {
    let (src, tally) = tracked(vec![1, 2, 3, 1, 2]);
    let leading = src.take_while(|x| *x < 3);
    assert_eq!(leading.to_vec(), vec![1, 2]);
    // the failing element is pulled to test it
    assert_eq!(tally.pulled(), 3);
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_skip_while_yields_from_first_failure() {
    let items = from_vec(vec![1, 2, 3, 1, 2]);
    assert_eq!(items.skip_while(|x| *x < 3).to_vec(), vec![3, 1, 2]);
}

#[test]
fn test_concat_opens_second_after_first_is_exhausted() {
    let (a, tally_a) = tracked(vec![1, 2]);
    let (b, tally_b) = tracked(vec![3]);
    let both = a.concat(b);
    let mut cursor = both.cursor();
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(tally_b.opened(), 0);
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(tally_a.live(), 0);
    assert_eq!(tally_b.opened(), 1);
    assert_eq!(cursor.next(), None);
    drop(cursor);
    assert_eq!(tally_b.live(), 0);
}

#[test]
fn test_zip_stops_at_shorter() {
    let (numbers, tally_n) = tracked(vec![1, 2, 3]);
    let (letters, tally_l) = tracked(vec!['a', 'b']);
    let pairs = numbers.zip(letters, |n, c| format!("{n}{c}"));
    assert_eq!(pairs.to_vec(), vec!["1a", "2b"]);
    assert_eq!(tally_n.live(), 0);
    assert_eq!(tally_l.live(), 0);
}

#[test]
fn test_flat_map_flattens_in_order() {
    let counts = from_vec(vec![1usize, 0, 3]);
    let expanded = (&counts).flat_map(|n| vec![n; n]);
    assert_eq!(expanded.to_vec(), vec![1, 3, 3, 3]);

    let words = from_vec(vec!["ab", "c"]);
    let tagged = words.flat_map_with(
        |w| w.chars().collect::<Vec<_>>(),
        |w, c| format!("{w}:{c}"),
    );
    assert_eq!(tagged.to_vec(), vec!["ab:a", "ab:b", "c:c"]);
}

#[test]
fn test_default_if_empty() {
    assert_eq!(empty::<i32>().default_if_empty(7).to_vec(), vec![7]);
    assert_eq!(from_vec(vec![1, 2]).default_if_empty(7).to_vec(), vec![1, 2]);
}

#[test]
fn test_reverse_indexed_and_buffered() {
    let indexed = from_vec(vec![1, 2, 3]);
    assert_eq!(indexed.reverse().to_vec(), vec![3, 2, 1]);

    let (src, tally) = tracked(vec!['x', 'y', 'z']);
    let reversed = src.reverse();
    assert_eq!(tally.opened(), 0);
    assert_eq!(reversed.to_vec(), vec!['z', 'y', 'x']);
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_single_pass_source_is_empty_the_second_time() {
    let once = single_pass(vec![1, 2, 3]);
    assert!(!once.is_consumed());
    assert_eq!((&once).map(|x| x * 2).to_vec(), vec![2, 4, 6]);
    assert!(once.is_consumed());
    assert!(once.to_vec().is_empty());
}

#[test]
fn test_from_fn_reruns_factory_per_pass() {
    let passes = Cell::new(0);
    let generated = from_fn(|| {
        passes.set(passes.get() + 1);
        vec![1, 2]
    });
    assert_eq!(generated.to_vec(), vec![1, 2]);
    assert_eq!(generated.to_vec(), vec![1, 2]);
    assert_eq!(passes.get(), 2);
}

#[test]
fn test_distinct_keeps_first_occurrence() {
    let items = from_vec(vec![3, 1, 3, 2, 1]);
    assert_eq!(items.distinct().to_vec(), vec![3, 1, 2]);
}

#[test]
fn test_distinct_streams_lazily() {
    let (src, tally) = tracked(vec![1, 1, 2, 3]);
    let unique = src.distinct();
    let mut cursor = unique.cursor();
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(tally.pulled(), 1);
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(tally.pulled(), 3);
}

#[test]
fn test_union_intersect_except() {
    let a = from_vec(vec![1, 2, 2, 3, 4]);
    let b = from_vec(vec![4, 5, 2, 6]);
    assert_eq!((&a).union(&b).to_vec(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!((&a).intersect(&b).to_vec(), vec![2, 4]);
    assert_eq!((&a).except(&b).to_vec(), vec![1, 3]);
    assert!((&a).except(&b).intersect(&b).to_vec().is_empty());
}

#[test]
fn test_set_operators_use_policy() {
    let words = from_vec(vec!["Apple", "apple", "Pear", "PEAR", "fig"]);
    let folded = projected(|w: &&str| w.to_lowercase());
    assert_eq!(
        (&words).distinct_with(&folded).to_vec(),
        vec!["Apple", "Pear", "fig"]
    );
    let banned = from_vec(vec!["APPLE"]);
    assert_eq!(
        (&words).except_with(&banned, &folded).to_vec(),
        vec!["Pear", "PEAR", "fig"]
    );
}

#[test]
fn test_intersect_indexes_second_on_first_pull() {
    let (first, tally_first) = tracked(vec![1, 2, 3]);
    let (second, tally_second) = tracked(vec![3, 1]);
    let common = first.intersect(second);
    let mut cursor = common.cursor();
    assert_eq!(tally_second.opened(), 0);
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(tally_second.opened(), 1);
    assert_eq!(tally_second.live(), 0);
    assert_eq!(tally_first.pulled(), 1);
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(cursor.next(), None);
}

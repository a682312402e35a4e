//! Capacity hints change allocation only, never output.

mod test_support;

use seqkit::prelude::*;
use test_support::tracked;

fn hinted() -> SeqConfig {
    SeqConfig {
        index_capacity_hint: 1024,
        buffer_capacity_hint: 3,
    }
}

#[test]
fn test_configured_set_operators_match_defaults() {
    let a = from_vec(vec![5, 1, 5, 2, 9, 1]);
    let b = from_vec(vec![9, 4, 1]);

    assert_eq!(
        (&a).distinct().with_config(hinted()).to_vec(),
        (&a).distinct().to_vec()
    );
    assert_eq!(
        (&a).union(&b).with_config(hinted()).to_vec(),
        (&a).union(&b).to_vec()
    );
    assert_eq!(
        (&a).intersect(&b).with_config(hinted()).to_vec(),
        (&a).intersect(&b).to_vec()
    );
    assert_eq!(
        (&a).except(&b).with_config(hinted()).to_vec(),
        (&a).except(&b).to_vec()
    );
}

#[test]
fn test_configured_buffers_match_defaults() {
    // more elements than the buffer hint, on a source with no known size
    let (src, tally) = tracked(vec![4, 8, 1, 7, 3, 3, 0]);
    let reversed = (&src).reverse().with_config(hinted()).to_vec();
    assert_eq!(reversed, vec![0, 3, 3, 7, 1, 8, 4]);

    let ordered = (&src)
        .order_by_descending(|x| *x)
        .with_config(hinted())
        .then_by(|x| *x)
        .to_vec();
    assert_eq!(ordered, (&src).order_by_descending(|x| *x).to_vec());
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_configured_joins_match_defaults() {
    let outer = from_vec(vec![(1, "a"), (2, "b"), (3, "c")]);
    let inner = from_vec(vec![(2, 20), (1, 10), (2, 21)]);

    let plain = (&outer).join(&inner, |o| o.0, |i| i.0, |o, i| (o.1, i.1));
    let configured = (&outer)
        .join(&inner, |o| o.0, |i| i.0, |o, i| (o.1, i.1))
        .with_config(hinted());
    assert_eq!(configured.to_vec(), plain.to_vec());

    let plain = (&outer).group_join(&inner, |o| o.0, |i| i.0, |o, m| (o.1, m.len()));
    let configured = (&outer)
        .group_join(&inner, |o| o.0, |i| i.0, |o, m| (o.1, m.len()))
        .with_config(hinted());
    assert_eq!(configured.to_vec(), vec![("a", 1), ("b", 2), ("c", 0)]);
    assert_eq!(configured.to_vec(), plain.to_vec());
}

#[test]
fn test_lookup_build_with_config_matches_build() {
    let words = vec!["ox", "yak", "eel", "cat", "gnu", "emu"];
    let plain = Lookup::build(words.clone(), |w| w.len(), |w| w, NaturalEq);
    let configured =
        Lookup::build_with_config(words, |w| w.len(), |w| w, NaturalEq, &hinted());
    assert_eq!(configured.len(), plain.len());
    assert_eq!(configured.get(&3), plain.get(&3));
    assert_eq!(configured.get(&2), &["ox"]);
    assert_eq!(
        configured.into_groupings(),
        plain.into_groupings()
    );
}

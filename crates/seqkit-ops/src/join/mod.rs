//! Join engine: hash joins over the keyed grouping index.
//!
//! Both joins drain the inner sequence into a `Lookup` on the first pull and
//! then stream the outer sequence, so output follows outer order and, within
//! one outer element, inner order. Outer keys the policy reports as absent
//! never match.

mod group;
mod inner;

pub use group::{GroupJoin, GroupJoinCursor};
pub use inner::{Join, JoinCursor};

use seqkit_core::config::SeqConfig;
use seqkit_core::policy::EqualityPolicy;
use seqkit_core::sequence::Sequence;

use crate::lookup::Lookup;

fn index_inner<'a, I, K, IK, P>(
    inner: &'a I,
    inner_key: &'a IK,
    policy: &'a P,
    config: &SeqConfig,
) -> Lookup<K, I::Item, &'a P>
where
    I: Sequence,
    IK: Fn(&I::Item) -> K,
    P: EqualityPolicy<K>,
{
    Lookup::from_sequence(inner, inner_key, |item| item, policy, config)
}

fn match_slot<K, E, P>(lookup: &Lookup<K, E, &P>, policy: &P, key: &K) -> Option<usize>
where
    P: EqualityPolicy<K>,
{
    if policy.is_absent(key) {
        None
    } else {
        lookup.slot_of(key)
    }
}

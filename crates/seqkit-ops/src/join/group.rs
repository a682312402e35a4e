use seqkit_core::config::SeqConfig;
use seqkit_core::policy::EqualityPolicy;
use seqkit_core::sequence::Sequence;

use super::{index_inner, match_slot};
use crate::lookup::Lookup;

/// Group join: exactly one result per outer element, paired with its
/// matching inner elements (possibly none).
#[derive(Debug, Clone)]
pub struct GroupJoin<O, I, OK, IK, RF, P> {
    outer: O,
    inner: I,
    outer_key: OK,
    inner_key: IK,
    result: RF,
    policy: P,
    config: SeqConfig,
}

impl<O, I, OK, IK, RF, P> GroupJoin<O, I, OK, IK, RF, P> {
    pub(crate) fn new(outer: O, inner: I, outer_key: OK, inner_key: IK, result: RF, policy: P) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            result,
            policy,
            config: SeqConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }
}

pub struct GroupJoinCursor<'a, O: Sequence + 'a, I: Sequence + 'a, OK, IK, RF, P, K> {
    node: &'a GroupJoin<O, I, OK, IK, RF, P>,
    state: Option<(Option<O::Cursor<'a>>, Lookup<K, I::Item, &'a P>)>,
}

impl<'a, O, I, K, R, OK, IK, RF, P> Iterator for GroupJoinCursor<'a, O, I, OK, IK, RF, P, K>
where
    O: Sequence + 'a,
    I: Sequence + 'a,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    RF: Fn(O::Item, &[I::Item]) -> R,
    P: EqualityPolicy<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let node = self.node;
        let (outer, lookup) = self.state.get_or_insert_with(|| {
            let lookup = index_inner(&node.inner, &node.inner_key, &node.policy, &node.config);
            (Some(node.outer.cursor()), lookup)
        });
        let Some(item) = outer.as_mut()?.next() else {
            *outer = None;
            return None;
        };
        let key = (node.outer_key)(&item);
        let matched: &[I::Item] = match match_slot(lookup, &node.policy, &key) {
            Some(slot) => lookup.group_at(slot).elements(),
            None => &[],
        };
        Some((node.result)(item, matched))
    }
}

impl<O, I, K, R, OK, IK, RF, P> Sequence for GroupJoin<O, I, OK, IK, RF, P>
where
    O: Sequence,
    I: Sequence,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    RF: Fn(O::Item, &[I::Item]) -> R,
    P: EqualityPolicy<K>,
{
    type Item = R;
    type Cursor<'a> = GroupJoinCursor<'a, O, I, OK, IK, RF, P, K>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        GroupJoinCursor {
            node: self,
            state: None,
        }
    }
}

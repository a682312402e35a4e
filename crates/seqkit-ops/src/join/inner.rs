use seqkit_core::config::SeqConfig;
use seqkit_core::policy::EqualityPolicy;
use seqkit_core::sequence::Sequence;

use super::{index_inner, match_slot};
use crate::lookup::Lookup;

/// Inner join: one result per matching (outer, inner) pair.
#[derive(Debug, Clone)]
pub struct Join<O, I, OK, IK, RF, P> {
    outer: O,
    inner: I,
    outer_key: OK,
    inner_key: IK,
    result: RF,
    policy: P,
    config: SeqConfig,
}

impl<O, I, OK, IK, RF, P> Join<O, I, OK, IK, RF, P> {
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

struct JoinState<'a, O: Sequence + 'a, I: Sequence + 'a, K, P> {
    outer: Option<O::Cursor<'a>>,
    lookup: Lookup<K, I::Item, &'a P>,
    /// Outer element being paired, its group slot and the next inner position.
    current: Option<(O::Item, usize, usize)>,
}

pub struct JoinCursor<'a, O: Sequence + 'a, I: Sequence + 'a, OK, IK, RF, P, K> {
    node: &'a Join<O, I, OK, IK, RF, P>,
    state: Option<JoinState<'a, O, I, K, P>>,
}

impl<'a, O, I, K, R, OK, IK, RF, P> Iterator for JoinCursor<'a, O, I, OK, IK, RF, P, K>
where
    O: Sequence + 'a,
    I: Sequence + 'a,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    RF: Fn(&O::Item, &I::Item) -> R,
    P: EqualityPolicy<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let node = self.node;
        let state = self.state.get_or_insert_with(|| JoinState {
            lookup: index_inner(&node.inner, &node.inner_key, &node.policy, &node.config),
            outer: Some(node.outer.cursor()),
            current: None,
        });
        loop {
            if let Some((item, slot, pos)) = &mut state.current {
                if let Some(matched) = state.lookup.group_at(*slot).elements().get(*pos) {
                    *pos += 1;
                    return Some((node.result)(&*item, matched));
                }
                state.current = None;
            }
            let Some(item) = state.outer.as_mut()?.next() else {
                state.outer = None;
                return None;
            };
            let key = (node.outer_key)(&item);
            if let Some(slot) = match_slot(&state.lookup, &node.policy, &key) {
                state.current = Some((item, slot, 0));
            }
        }
    }
}

impl<O, I, K, R, OK, IK, RF, P> Sequence for Join<O, I, OK, IK, RF, P>
where
    O: Sequence,
    I: Sequence,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    RF: Fn(&O::Item, &I::Item) -> R,
    P: EqualityPolicy<K>,
{
    type Item = R;
    type Cursor<'a> = JoinCursor<'a, O, I, OK, IK, RF, P, K>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        JoinCursor {
            node: self,
            state: None,
        }
    }
}

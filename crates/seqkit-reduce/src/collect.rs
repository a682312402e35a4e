//! Materializing reducers: `to_vec` and `to_dictionary`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use seqkit_core::error::{Result, SeqError};
use seqkit_core::sequence::Sequence;

use crate::metrics::failed;

pub fn to_vec<S: Sequence>(source: &S) -> Vec<S::Item> {
    let mut out = Vec::with_capacity(source.indexed().map_or(0, |view| view.len()));
    out.extend(source.cursor());
    out
}

/// One entry per element; a repeated key is an `InvalidArgument` error.
pub fn to_dictionary<S, K, V, KF, VF>(
    source: &S,
    key_selector: KF,
    value_selector: VF,
) -> Result<HashMap<K, V>>
where
    S: Sequence,
    K: Eq + Hash,
    KF: Fn(&S::Item) -> K,
    VF: Fn(S::Item) -> V,
{
    let mut out = HashMap::with_capacity(source.indexed().map_or(0, |view| view.len()));
    for item in source.cursor() {
        match out.entry(key_selector(&item)) {
            Entry::Occupied(_) => {
                return Err(failed(
                    "to_dictionary",
                    SeqError::invalid_argument("key_selector", "an element with the same key already exists"),
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(value_selector(item));
            }
        }
    }
    Ok(out)
}

//! Convenient re-exports for downstream crates.

pub use crate::config::SeqConfig;
pub use crate::error::{InvalidOperation, Result, SeqError};
pub use crate::policy::{
    by_fn, nullable, projected, EqualityPolicy, FnEquality, NaturalEq, NaturalOrder, Nullable,
    OrderPolicy, ProjectedEq,
};
pub use crate::sequence::{Indexed, Sequence};
pub use crate::source::{
    empty, from_fn, from_vec, range, repeat, single_pass, Empty, FromFn, RangeSeq, Repeat,
    SinglePass, Source,
};

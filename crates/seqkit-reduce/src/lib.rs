#![forbid(unsafe_code)]
//! seqkit-reduce: terminal reducers.
//!
//! Design intent:
//! - Each reducer performs one scan (or answers from `Indexed`) and keeps no
//!   reference to the sequence afterwards.
//! - "Empty source" and "more than one match" are `InvalidOperation` errors,
//!   bad indexes are `OutOfRange`, checked arithmetic failures are `Overflow`.
//! - Reducers are available as free functions per module and as `ReduceExt`
//!   methods.

pub mod arith;
pub mod collect;
pub mod count;
pub mod element;
pub mod fold;
pub mod numeric;
pub mod quantify;
pub mod traits;

mod metrics;

pub use numeric::{Averageable, Extremum, Summable};
pub use traits::ReduceExt;

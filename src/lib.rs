#![forbid(unsafe_code)]
//! seqkit: deferred-execution sequence operators.
//!
//! Build a chain with [`SequenceExt`](seqkit_ops::SequenceExt), then drive it
//! with a reducer from [`ReduceExt`](seqkit_reduce::ReduceExt) or by pulling a
//! `cursor()`. Nothing runs until a cursor is pulled.
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let evens = range(1, 5)?.filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! assert_eq!(evens.sum::<i32>()?, 6);
//! # Ok::<(), seqkit::SeqError>(())
//! ```

pub use seqkit_core::{config, error, policy, sequence, source};
pub use seqkit_ops as ops;
pub use seqkit_reduce as reduce;

pub use seqkit_core::{
    EqualityPolicy, Indexed, InvalidOperation, NaturalEq, NaturalOrder, OrderPolicy, Result,
    SeqConfig, SeqError, Sequence,
};
pub use seqkit_ops::{GroupJoin, Grouping, Join, Lookup, Ordered, SequenceExt};
pub use seqkit_reduce::ReduceExt;

pub mod prelude {
    //! Everything needed to build and reduce a chain.

    pub use seqkit_core::prelude::*;
    pub use seqkit_ops::{Grouping, Lookup, SequenceExt};
    pub use seqkit_reduce::ReduceExt;
}

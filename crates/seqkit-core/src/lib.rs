#![forbid(unsafe_code)]
//! seqkit-core: the sequence capability and everything operators share.
//!
//! Design intent:
//! - A `Sequence` is a re-iterable source; each `cursor()` call starts a fresh,
//!   independent pass and the cursor is released when dropped.
//! - Collection-backed sequences expose `Indexed` (known size + random access)
//!   so reducers can skip the generic scan.
//! - Key matching always goes through an `EqualityPolicy`/`OrderPolicy`; the
//!   natural policies are the defaults.
//! - No operators or reducers live here; see `seqkit-ops` and `seqkit-reduce`.

pub mod config;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod sequence;
pub mod source;

pub use config::SeqConfig;
pub use error::{InvalidOperation, Result, SeqError};
pub use policy::{EqualityPolicy, NaturalEq, NaturalOrder, OrderPolicy};
pub use sequence::{Indexed, Sequence};

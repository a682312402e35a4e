#![forbid(unsafe_code)]
//! seqkit-ops: deferred sequence operators, the keyed grouping index and joins.
//!
//! Design intent:
//! - Operator nodes own their upstream and closures; cursors borrow the node,
//!   so a chain can be iterated any number of times.
//! - Nothing runs at construction, except grouping: `group_by` builds its
//!   `Lookup` before returning. Streaming operators pull one element at a
//!   time; joins, set algebra, reverse and ordering materialize on the first
//!   pull of each pass.
//! - Every upstream cursor is released no later than the cursor holding it.
//!   `take`, `take_while`, `concat`, `zip`, `union` and the joins release it
//!   as soon as they stop pulling from it.
//! - Key matching goes through `EqualityPolicy`/`OrderPolicy`.

pub mod combine;
pub mod filter;
pub mod func;
pub mod join;
pub mod lookup;
pub mod map;
pub mod partition;
pub mod reverse;
pub mod set;
pub mod sort;
pub mod traits;

mod index;
mod metrics;

pub use join::{GroupJoin, Join};
pub use lookup::{Grouping, Lookup};
pub use sort::{Ordered, SortKeys};
pub use traits::SequenceExt;

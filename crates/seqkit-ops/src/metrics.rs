//! Tracing hooks for materialization points.
//!
//! Materializing operators (grouping, joins, set algebra, reverse, ordering)
//! report how much they buffered. Without the `tracing` feature these are no-ops.

#[cfg(feature = "tracing")]
pub(crate) fn record_materialized(op: &'static str, rows: usize, keys: usize) {
    tracing::trace!(op, rows, keys, "materialized");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn record_materialized(_op: &'static str, _rows: usize, _keys: usize) { /* no-op */
}

//! Failure events for reducers.
//!
//! With the `tracing` feature a failing reducer emits one `debug!` event naming
//! the reducer and the error before the error is returned.

use seqkit_core::error::SeqError;

#[cfg(feature = "tracing")]
pub(crate) fn failed(op: &'static str, err: SeqError) -> SeqError {
    tracing::debug!(op, error = %err, "reducer failed");
    err
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn failed(_op: &'static str, err: SeqError) -> SeqError {
    err
}

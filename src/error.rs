//! Error types for the per-invocation handling path.
//!
//! Startup failures (pool, schema, client construction) terminate the
//! process from `main`; everything in this module is invocation-local and
//! must never escape the gateway callback as a panic.

use thiserror::Error;

/// A failure while handling a single command invocation.
///
/// The distinction between `Response` and `Persistence` matters to the
/// handlers: a lost acknowledgment fails the invocation, a lost insert is
/// logged (and reported to the user where the handler still can) without
/// ever taking the process down.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A required option was absent from the invocation.
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),

    /// The transport rejected or failed to deliver the acknowledgment.
    #[error("could not respond to interaction: {0}")]
    Response(#[from] serenity::Error),

    /// The record insert failed. Not retried; the record is lost.
    #[error("could not store record: {0}")]
    Persistence(#[from] sqlx::Error),
}

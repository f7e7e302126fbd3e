//! Error taxonomy for the console. Every variant is recoverable; the UI
//! reports it and returns to an interactive state.

use thiserror::Error;

/// Failures surfaced to the admin as banner notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The entered password did not match the configured secret.
    #[error("incorrect password")]
    AuthFailure,
    /// The collection query failed; the in-memory list is left untouched.
    #[error("failed to load emas: {0}")]
    Fetch(String),
    /// A single update or delete failed; local state reverts to the
    /// pre-attempt shape, drafts and selection included.
    #[error("store mutation failed: {0}")]
    Mutation(String),
    /// One or more deletions in a bulk fan-out failed. Deletes that already
    /// landed remotely are not reconciled here; the notice directs the
    /// admin to refresh.
    #[error(
        "bulk delete failed for {failed} of {total} emas; \
         some may already be gone remotely, refresh to resync"
    )]
    PartialBulkFailure {
        /// Number of sub-deletes that reported failure.
        failed: usize,
        /// Size of the attempted selection.
        total: usize,
    },
}

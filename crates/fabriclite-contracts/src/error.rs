//! Error types for the fabriclite ledger.
//!
//! All fallible operations in the ledger return `FabricResult<T>`.
//! The `NotConnected` and `ContractNotFound` messages are part of the
//! observable contract — API callers match on them — and must not change.

use thiserror::Error;

/// The unified error type for the simulated ledger.
#[derive(Debug, Error)]
pub enum FabricError {
    /// Any operation was attempted while the service is not connected.
    ///
    /// Non-retryable until `initialize()` succeeds. API layers surface this
    /// as a 503-equivalent.
    #[error("Not connected to blockchain network")]
    NotConnected,

    /// An update targeted a contract id that was never created.
    ///
    /// Update is not upsert — only create may insert.
    #[error("Contract {id} not found")]
    ContractNotFound { id: String },

    /// An unexpected failure while applying a ledger mutation.
    ///
    /// The store is left in whatever state the last completed write
    /// produced; mutations are not transactional across the record write
    /// and its audit-log side effect.
    #[error("transaction failed: {reason}")]
    TransactionFailed { reason: String },

    /// An unexpected failure while reading from the ledger.
    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// The ledger store could not be accessed (e.g. a poisoned lock).
    #[error("ledger store error: {reason}")]
    Store { reason: String },
}

/// Convenience alias used throughout the fabriclite crates.
pub type FabricResult<T> = Result<T, FabricError>;

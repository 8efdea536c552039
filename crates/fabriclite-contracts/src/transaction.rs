//! Transaction result and provenance types.
//!
//! `TransactionResult` is what a mutating operation returns to the caller.
//! `TxProvenance` is the generated identity handed to the mutation closure
//! so the record can be stamped before the result is built. Both are
//! transient values — neither is stored on the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The terminal status of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxStatus {
    Success,
    Failed,
}

/// The outcome of one simulated blockchain write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    /// Generated transaction id, `tx_<epochMillis>_<random base36>`.
    pub tx_id: String,
    /// Pseudo-random block number. NOT monotonic across transactions.
    pub block_number: u64,
    /// Wall-clock time the transaction committed (UTC).
    pub timestamp: DateTime<Utc>,
    pub status: TxStatus,
}

/// The generated identity of an in-flight transaction.
///
/// The transaction executor creates one per `execute()` call and passes it
/// to the mutation closure, which stamps the stored record with the same
/// `tx_id` / `block_number` that the caller receives back.
#[derive(Debug, Clone)]
pub struct TxProvenance {
    pub tx_id: String,
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
}

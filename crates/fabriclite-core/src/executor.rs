//! The transaction and query executors.
//!
//! Every ledger touch goes through one of these two, which enforce the
//! shared operation shape:
//!
//!   gate check → simulated latency → act
//!
//! The gate check always happens BEFORE the latency suspension, so a
//! disconnected caller fails fast. For mutations, the id generation happens
//! after the suspension — like a real submit, the transaction identity does
//! not exist until the network round-trip completes.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use fabriclite_contracts::{
    error::FabricResult,
    transaction::{TransactionResult, TxProvenance, TxStatus},
};

use crate::{gate::ConnectionGate, traits::IdGenerator};

/// Wraps a ledger mutation into a simulated blockchain transaction.
///
/// `execute()` runs the full submit sequence and hands the mutation closure
/// a fresh `TxProvenance` so the stored record carries the same identity the
/// caller receives in the `TransactionResult`.
///
/// There is no rollback: a closure error after earlier writes (e.g. an
/// audit side-transaction failing after the record write) leaves the store
/// in whatever state the last completed write produced.
pub struct TransactionExecutor {
    gate: Arc<ConnectionGate>,
    ids: Arc<dyn IdGenerator>,
}

impl TransactionExecutor {
    pub fn new(gate: Arc<ConnectionGate>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { gate, ids }
    }

    /// Submit one transaction.
    ///
    /// 1. Fail with `NotConnected` unless the gate is open.
    /// 2. Suspend for `delay` (the simulated network round-trip).
    /// 3. Generate `tx_id` / `block_number` and a commit timestamp.
    /// 4. Run `apply` with the provenance; any error propagates verbatim
    ///    (this is where `ContractNotFound` surfaces for updates).
    /// 5. Return a `Success` result carrying the same provenance.
    pub async fn execute<F>(&self, delay: Duration, apply: F) -> FabricResult<TransactionResult>
    where
        F: FnOnce(&TxProvenance) -> FabricResult<()>,
    {
        self.gate.ensure_connected()?;

        tokio::time::sleep(delay).await;

        let provenance = TxProvenance {
            tx_id: self.ids.tx_id(),
            block_number: self.ids.block_number(),
            timestamp: Utc::now(),
        };

        debug!(
            tx_id = %provenance.tx_id,
            block_number = provenance.block_number,
            "applying transaction"
        );

        apply(&provenance)?;

        Ok(TransactionResult {
            tx_id: provenance.tx_id,
            block_number: provenance.block_number,
            timestamp: provenance.timestamp,
            status: TxStatus::Success,
        })
    }
}

/// Wraps ledger reads into simulated blockchain queries.
///
/// Reads never fail on absence — the closure expresses "not found" through
/// its return type (`Option`, empty `Vec`). Besides errors from the closure
/// itself (store access failures), the only error a query produces is
/// `NotConnected`.
pub struct QueryExecutor {
    gate: Arc<ConnectionGate>,
}

impl QueryExecutor {
    pub fn new(gate: Arc<ConnectionGate>) -> Self {
        Self { gate }
    }

    /// Run one query: gate check, simulated latency, then the read closure.
    pub async fn run<T, F>(&self, delay: Duration, read: F) -> FabricResult<T>
    where
        F: FnOnce() -> FabricResult<T>,
    {
        self.gate.ensure_connected()?;

        tokio::time::sleep(delay).await;

        read()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

//! In-memory implementation of `ContractStore` and `AuditStore`.
//!
//! `InMemoryLedger` is the reference store standing in for a Hyperledger
//! Fabric network. It keeps two independent keyspaces — contracts and audit
//! logs — behind a single `Mutex`, making it safe to share across tasks via
//! `Arc` while the executors read and write through the trait methods.
//!
//! No eviction, no size bound, no persistence: all data is lost on process
//! restart. Tests must never assume state survives a restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use fabriclite_contracts::{
    audit::AuditLogRecord,
    error::{FabricError, FabricResult},
    record::ContractRecord,
};
use fabriclite_core::traits::{AuditStore, ContractStore};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryLedger`.
///
/// Each keyspace pairs a `HashMap` for lookup with a key-order `Vec` so
/// snapshots iterate in first-insertion order. Replacing a contract keeps
/// its original position; audit records are append-only so their order
/// vector only ever grows.
#[derive(Default)]
struct LedgerState {
    contracts: HashMap<String, ContractRecord>,
    contract_order: Vec<String>,
    audit_logs: HashMap<String, AuditLogRecord>,
    audit_order: Vec<String>,
}

// ── Public store ──────────────────────────────────────────────────────────────

/// An in-memory, insertion-ordered dual-keyspace ledger store.
///
/// # Keyspaces
///
/// Contract ids and audit-log ids live in separate maps: equal id strings
/// never collide across the two record kinds.
///
/// # Thread safety
///
/// All trait methods acquire the internal `Mutex`. Clones of the `Arc`
/// share one store; the process-wide service holds exactly one.
#[derive(Default)]
pub struct InMemoryLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> FabricResult<MutexGuard<'_, LedgerState>> {
        self.state.lock().map_err(|e| FabricError::Store {
            reason: format!("ledger state lock poisoned: {}", e),
        })
    }

    /// Number of contract records currently stored.
    pub fn contract_count(&self) -> FabricResult<usize> {
        Ok(self.lock()?.contracts.len())
    }

    /// Number of audit records currently stored.
    pub fn audit_count(&self) -> FabricResult<usize> {
        Ok(self.lock()?.audit_logs.len())
    }
}

// ── ContractStore impl ────────────────────────────────────────────────────────

impl ContractStore for InMemoryLedger {
    fn contract(&self, id: &str) -> FabricResult<Option<ContractRecord>> {
        Ok(self.lock()?.contracts.get(id).cloned())
    }

    /// Insert or replace under `record.id`.
    ///
    /// A fresh id is appended to the order vector; a replaced id keeps its
    /// original position, so `contracts()` ordering is stable across
    /// updates.
    fn put_contract(&self, record: ContractRecord) -> FabricResult<()> {
        let mut state = self.lock()?;
        let id = record.id.clone();
        if state.contracts.insert(id.clone(), record).is_none() {
            state.contract_order.push(id.clone());
        }
        debug!(contract_id = %id, total = state.contracts.len(), "contract stored");
        Ok(())
    }

    fn contracts(&self) -> FabricResult<Vec<ContractRecord>> {
        let state = self.lock()?;
        Ok(state
            .contract_order
            .iter()
            .filter_map(|id| state.contracts.get(id).cloned())
            .collect())
    }
}

// ── AuditStore impl ───────────────────────────────────────────────────────────

impl AuditStore for InMemoryLedger {
    /// Append one audit record.
    ///
    /// Append-only by convention: the runtime never writes the same audit id
    /// twice, and a duplicate id would replace the stored record without
    /// disturbing its position.
    fn append_audit(&self, record: AuditLogRecord) -> FabricResult<()> {
        let mut state = self.lock()?;
        let id = record.id.clone();
        if state.audit_logs.insert(id.clone(), record).is_none() {
            state.audit_order.push(id.clone());
        }
        debug!(audit_id = %id, total = state.audit_logs.len(), "audit log stored");
        Ok(())
    }

    fn audit_logs(&self) -> FabricResult<Vec<AuditLogRecord>> {
        let state = self.lock()?;
        Ok(state
            .audit_order
            .iter()
            .filter_map(|id| state.audit_logs.get(id).cloned())
            .collect())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

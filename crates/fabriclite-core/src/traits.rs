//! Seam trait definitions for the fabriclite ledger.
//!
//! Three traits define the replaceable parts of the runtime:
//!
//! - `IdGenerator`   — produces transaction ids and block numbers
//! - `ContractStore` — keyed storage of contract records
//! - `AuditStore`    — append-only storage of audit records
//!
//! The executors and the service facade are written against these traits so
//! the in-memory reference implementations can be swapped (e.g. a monotonic
//! id source, or a persistent store) without touching the facade contract.

use fabriclite_contracts::{audit::AuditLogRecord, error::FabricResult, record::ContractRecord};

/// A source of transaction ids and block numbers.
///
/// The reference implementation is pseudo-random: ids embed wall-clock
/// millis plus a random suffix, and block numbers are drawn uniformly from
/// a fixed range with NO monotonicity guarantee. Implementations that need
/// chain-like numbering can provide a sequential source behind this trait.
pub trait IdGenerator: Send + Sync {
    /// Produce a transaction id of the form `tx_<epochMillis>_<suffix>`.
    ///
    /// Uniqueness relies on the random suffix; no collision detection is
    /// performed.
    fn tx_id(&self) -> String;

    /// Produce a block number.
    ///
    /// Successive calls may return smaller values than earlier ones.
    fn block_number(&self) -> u64;
}

/// Keyed storage of contract records.
///
/// Contracts live in their own keyspace — a contract id never collides with
/// an audit-log id even when the strings are equal. Insertion order is
/// preserved across the lifetime of a key: replacing an existing record
/// keeps its original position in `contracts()`.
pub trait ContractStore: Send + Sync {
    /// Return a snapshot of the record for `id`, if present.
    ///
    /// Absence is `Ok(None)` — a normal outcome, not an error. `Err` is
    /// reserved for store access failures (`FabricError::Store`).
    fn contract(&self, id: &str) -> FabricResult<Option<ContractRecord>>;

    /// Insert or replace the record under `record.id`.
    ///
    /// The store never removes records; there is no delete operation.
    fn put_contract(&self, record: ContractRecord) -> FabricResult<()>;

    /// Snapshot of all records in insertion order.
    fn contracts(&self) -> FabricResult<Vec<ContractRecord>>;
}

/// Append-only storage of audit records.
///
/// Records are never mutated or deleted once appended. Iteration order is
/// append order; callers must not re-sort.
pub trait AuditStore: Send + Sync {
    /// Append one audit record.
    fn append_audit(&self, record: AuditLogRecord) -> FabricResult<()>;

    /// Snapshot of all audit records in append order.
    fn audit_logs(&self) -> FabricResult<Vec<AuditLogRecord>>;
}

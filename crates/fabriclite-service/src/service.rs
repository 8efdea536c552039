//! The `FabricService` facade.
//!
//! The single public-facing object of the simulated ledger, composing the
//! connection gate, the two executors, the in-memory store, and the status
//! reporter. One instance is constructed at process startup and shared by
//! reference across all request handlers; state does not survive a restart.
//!
//! Every mutating call additionally issues a nested audit-log transaction,
//! which passes through the same gate check and latency simulation as the
//! primary write. The two writes are NOT atomic: an audit failure after a
//! successful record write leaves the record in place.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Datelike, Utc};
use rand::Rng;
use tracing::{debug, info};

use fabriclite_contracts::{
    audit::{actions, AuditLogDraft, AuditLogRecord},
    error::{FabricError, FabricResult},
    network::NetworkStatus,
    record::{ContractDraft, ContractRecord, ContractUpdate},
    transaction::TransactionResult,
};
use fabriclite_core::{
    traits::{AuditStore, ContractStore, IdGenerator},
    ConnectionGate, LatencyProfile, QueryExecutor, TransactionExecutor,
};
use fabriclite_ledger::{InMemoryLedger, RandomIdGenerator};

use crate::{config::ServiceConfig, status::NetworkStatusReporter};

/// The connection lifecycle of the service.
///
/// `Disconnected` is re-enterable: calling `initialize()` again moves the
/// service back through `Connecting` to `Connected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Uninitialized,
    Connecting,
    Connected,
    Disconnected,
}

/// The simulated blockchain ledger service.
///
/// All operations except `initialize`, `disconnect`, `test_connection`, and
/// `get_network_status` require the service to be connected and fail with
/// `FabricError::NotConnected` otherwise.
pub struct FabricService {
    config: ServiceConfig,
    latency: LatencyProfile,
    phase: Mutex<ConnectionPhase>,
    gate: Arc<ConnectionGate>,
    ledger: Arc<InMemoryLedger>,
    tx: TransactionExecutor,
    query: QueryExecutor,
    reporter: NetworkStatusReporter,
    /// Last millisecond value used in a side-audit id; see `next_audit_millis`.
    audit_clock: AtomicI64,
}

impl FabricService {
    /// Build a service with the pseudo-random id generator of the simulated
    /// network.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_id_generator(config, Arc::new(RandomIdGenerator::new()))
    }

    /// Build a service with a caller-supplied id source.
    ///
    /// This is the swap point for deployments that want monotonic block
    /// numbers, and for tests that need deterministic provenance.
    pub fn with_id_generator(config: ServiceConfig, ids: Arc<dyn IdGenerator>) -> Self {
        let gate = Arc::new(ConnectionGate::new());
        let latency = config.latency.profile();
        Self {
            tx: TransactionExecutor::new(gate.clone(), ids),
            query: QueryExecutor::new(gate.clone()),
            reporter: NetworkStatusReporter::new(),
            phase: Mutex::new(ConnectionPhase::Uninitialized),
            ledger: Arc::new(InMemoryLedger::new()),
            audit_clock: AtomicI64::new(0),
            gate,
            latency,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The current lifecycle phase. Informational; gating uses the
    /// connection flag, not the phase.
    pub fn phase(&self) -> ConnectionPhase {
        *self.phase.lock().expect("phase lock poisoned")
    }

    fn set_phase(&self, phase: ConnectionPhase) {
        *self.phase.lock().expect("phase lock poisoned") = phase;
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// Connect to the simulated network.
    ///
    /// Suspends for the handshake latency, then opens the gate. Always
    /// succeeds today; the fallible signature is kept so a future real
    /// gateway can reject here without changing callers.
    pub async fn initialize(&self) -> FabricResult<()> {
        info!(
            network = %self.config.network.network_name,
            channel = %self.config.network.channel_name,
            "initializing blockchain service"
        );
        self.set_phase(ConnectionPhase::Connecting);

        tokio::time::sleep(self.latency.handshake).await;

        self.gate.connect();
        self.set_phase(ConnectionPhase::Connected);
        info!("blockchain service initialized");
        Ok(())
    }

    /// Close the gate. Unconditional and idempotent.
    pub fn disconnect(&self) {
        self.gate.disconnect();
        self.set_phase(ConnectionPhase::Disconnected);
        info!("disconnected from blockchain network");
    }

    /// Pure read of the connection flag. Never fails.
    pub fn test_connection(&self) -> bool {
        self.gate.is_connected()
    }

    // ── Contract transactions ────────────────────────────────────────────────

    /// Record a new contract on the ledger.
    ///
    /// Stamps `created_at`/`updated_at` and the generated provenance, then
    /// issues the nested `CREATE_CONTRACT` audit transaction attributed to
    /// the draft's `created_by`.
    pub async fn create_contract(&self, draft: ContractDraft) -> FabricResult<TransactionResult> {
        let contract_id = draft.id.clone();
        let created_by = draft.created_by.clone();
        info!(contract_id = %contract_id, "creating contract");

        let result = self
            .tx
            .execute(self.latency.transaction, |prov| {
                let now = Utc::now();
                self.ledger.put_contract(ContractRecord {
                    id: draft.id,
                    title: draft.title,
                    contractor: draft.contractor,
                    value: draft.value,
                    start_date: draft.start_date,
                    end_date: draft.end_date,
                    status: draft.status,
                    created_by: draft.created_by,
                    created_at: now,
                    updated_at: now,
                    tx_id: prov.tx_id.clone(),
                    block_number: prov.block_number,
                })
            })
            .await?;

        self.record_side_audit(
            &contract_id,
            actions::CREATE_CONTRACT,
            &created_by,
            format!("Contract {} created", contract_id),
        )
        .await?;

        info!(contract_id = %contract_id, tx_id = %result.tx_id, "contract created");
        Ok(result)
    }

    /// Apply a partial update to an existing contract.
    ///
    /// Not an upsert: fails with `ContractNotFound` (and leaves the store
    /// untouched) when the id was never created. On success, the merged
    /// record is re-stamped with fresh provenance and `updated_at`, and an
    /// `UPDATE_CONTRACT` audit transaction is issued, attributed to the
    /// record's original creator.
    pub async fn update_contract(
        &self,
        contract_id: &str,
        update: ContractUpdate,
    ) -> FabricResult<TransactionResult> {
        info!(contract_id = %contract_id, "updating contract");

        let mut actor: Option<String> = None;
        let result = self
            .tx
            .execute(self.latency.transaction, |prov| {
                let mut record = self.ledger.contract(contract_id)?.ok_or_else(|| {
                    FabricError::ContractNotFound {
                        id: contract_id.to_string(),
                    }
                })?;

                update.apply(&mut record);
                record.tx_id = prov.tx_id.clone();
                record.block_number = prov.block_number;
                record.updated_at = Utc::now();

                actor = Some(record.created_by.clone());
                self.ledger.put_contract(record)
            })
            .await?;

        // Set on every path where execute() returned Ok.
        let actor = actor.unwrap_or_default();
        self.record_side_audit(
            contract_id,
            actions::UPDATE_CONTRACT,
            &actor,
            format!("Contract {} updated", contract_id),
        )
        .await?;

        info!(contract_id = %contract_id, tx_id = %result.tx_id, "contract updated");
        Ok(result)
    }

    /// A strictly increasing millisecond value for side-audit ids.
    ///
    /// Two mutations of the same entity within one wall-clock millisecond
    /// (possible under a zeroed latency profile) would otherwise produce
    /// identical `audit-{entityId}-{epochMillis}` ids and the second record
    /// would replace the first instead of appending.
    fn next_audit_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        loop {
            let last = self.audit_clock.load(Ordering::SeqCst);
            let candidate = if now > last { now } else { last + 1 };
            if self
                .audit_clock
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return candidate;
            }
        }
    }

    /// The audit side-transaction every contract mutation triggers.
    ///
    /// Goes through `create_audit_log`, so it passes the gate check and the
    /// audit-write latency like any caller-issued audit transaction.
    async fn record_side_audit(
        &self,
        entity_id: &str,
        action: &str,
        user_id: &str,
        details: String,
    ) -> FabricResult<TransactionResult> {
        let now = Utc::now();
        self.create_audit_log(AuditLogDraft {
            id: format!("audit-{}-{}", entity_id, self.next_audit_millis()),
            action: action.to_string(),
            entity_type: "CONTRACT".to_string(),
            entity_id: entity_id.to_string(),
            user_id: user_id.to_string(),
            timestamp: now,
            details,
            ip_address: "127.0.0.1".to_string(),
        })
        .await
    }

    // ── Audit transactions ───────────────────────────────────────────────────

    /// Append an audit record to the ledger.
    pub async fn create_audit_log(&self, draft: AuditLogDraft) -> FabricResult<TransactionResult> {
        debug!(audit_id = %draft.id, action = %draft.action, "creating audit log");

        self.tx
            .execute(self.latency.audit_write, |prov| {
                self.ledger.append_audit(AuditLogRecord::from_draft(
                    draft,
                    prov.tx_id.clone(),
                    prov.block_number,
                    Utc::now(),
                ))
            })
            .await
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Fetch one contract. Absence is `Ok(None)`, not an error.
    pub async fn get_contract(&self, contract_id: &str) -> FabricResult<Option<ContractRecord>> {
        debug!(contract_id = %contract_id, "querying contract");
        self.query
            .run(self.latency.query, || self.ledger.contract(contract_id))
            .await
    }

    /// Snapshot of all contracts in insertion order.
    pub async fn get_all_contracts(&self) -> FabricResult<Vec<ContractRecord>> {
        let contracts = self
            .query
            .run(self.latency.query, || self.ledger.contracts())
            .await?;
        info!(count = contracts.len(), "retrieved contracts");
        Ok(contracts)
    }

    /// Audit logs in insertion order, optionally filtered by entity id.
    ///
    /// No sorting is applied — insertion order IS the contract.
    pub async fn get_audit_logs(
        &self,
        entity_id: Option<&str>,
    ) -> FabricResult<Vec<AuditLogRecord>> {
        let logs = self
            .query
            .run(self.latency.query, || {
                let mut logs = self.ledger.audit_logs()?;
                if let Some(entity_id) = entity_id {
                    logs.retain(|log| log.entity_id == entity_id);
                }
                Ok(logs)
            })
            .await?;
        info!(count = logs.len(), "retrieved audit logs");
        Ok(logs)
    }

    // ── Status & helpers ─────────────────────────────────────────────────────

    /// Synthesized network health snapshot. Never fails and applies no
    /// latency; branches on the gate rather than going through an executor.
    pub fn get_network_status(&self) -> NetworkStatus {
        if !self.gate.is_connected() {
            return NetworkStatus::disconnected(FabricError::NotConnected.to_string());
        }
        self.reporter.snapshot()
    }

    /// Suggest a contract id of the form `HĐ-{year}-{3-digit-sequence}`.
    ///
    /// Purely cosmetic: the sequence is random, collisions across calls are
    /// possible and accepted.
    pub fn generate_contract_id(&self) -> String {
        let year = Utc::now().year();
        let sequence: u32 = rand::thread_rng().gen_range(1..=999);
        format!("HĐ-{}-{:03}", year, sequence)
    }

    /// Abbreviate a transaction hash for display: `8 chars … 8 chars`.
    ///
    /// Hashes of 16 characters or fewer are returned unchanged.
    pub fn format_tx_hash(hash: &str) -> String {
        let chars: Vec<char> = hash.chars().collect();
        if chars.len() <= 16 {
            return hash.to_string();
        }
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 8..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Datelike, NaiveDate, Utc};

    use fabriclite_contracts::{
        error::FabricError,
        network::NetworkStatus,
        record::{ContractDraft, ContractUpdate},
        transaction::TxStatus,
    };
    use fabriclite_ledger::SequentialIdGenerator;

    use crate::config::{LatencyConfig, ServiceConfig};

    use super::{ConnectionPhase, FabricService};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// A zero-latency service, not yet initialized.
    fn make_service() -> FabricService {
        let config = ServiceConfig {
            latency: LatencyConfig::zero(),
            ..ServiceConfig::default()
        };
        FabricService::new(config)
    }

    /// A zero-latency, connected service.
    async fn connected_service() -> FabricService {
        let service = make_service();
        service.initialize().await.unwrap();
        service
    }

    fn make_draft(id: &str) -> ContractDraft {
        ContractDraft {
            id: id.to_string(),
            title: "Test".to_string(),
            contractor: "ABC".to_string(),
            value: 1_000_000.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            status: "active".to_string(),
            created_by: "admin".to_string(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn initialize_connects_and_advances_the_phase() {
        let service = make_service();
        assert_eq!(service.phase(), ConnectionPhase::Uninitialized);
        assert!(!service.test_connection());

        service.initialize().await.unwrap();
        assert_eq!(service.phase(), ConnectionPhase::Connected);
        assert!(service.test_connection());
    }

    #[tokio::test]
    async fn disconnect_is_idempotent_and_reinitialize_reconnects() {
        let service = connected_service().await;

        service.disconnect();
        service.disconnect();
        assert_eq!(service.phase(), ConnectionPhase::Disconnected);
        assert!(!service.test_connection());

        // Disconnected is re-enterable through initialize().
        service.initialize().await.unwrap();
        assert!(service.test_connection());
        service.create_contract(make_draft("HĐ-2024-001")).await.unwrap();
    }

    // ── Create then get ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_then_get_returns_the_stamped_record() {
        let service = connected_service().await;

        let result = service.create_contract(make_draft("HĐ-2024-001")).await.unwrap();
        assert_eq!(result.status, TxStatus::Success);
        assert!(result.tx_id.starts_with("tx_"));
        assert!((12_000..13_000).contains(&result.block_number));

        let record = service.get_contract("HĐ-2024-001").await.unwrap().unwrap();
        assert_eq!(record.id, "HĐ-2024-001");
        assert_eq!(record.title, "Test");
        assert_eq!(record.contractor, "ABC");
        assert_eq!(record.value, 1_000_000.0);
        assert_eq!(record.status, "active");
        // Provenance on the record matches what the caller was told.
        assert_eq!(record.tx_id, result.tx_id);
        assert_eq!(record.block_number, result.block_number);
    }

    // ── Update merge ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn update_merges_and_restamps_provenance() {
        // Deterministic ids so the pre/post provenance comparison cannot
        // collide by chance.
        let config = ServiceConfig {
            latency: LatencyConfig::zero(),
            ..ServiceConfig::default()
        };
        let service =
            FabricService::with_id_generator(config, Arc::new(SequentialIdGenerator::new()));
        service.initialize().await.unwrap();

        service.create_contract(make_draft("HĐ-2024-002")).await.unwrap();
        let before = service.get_contract("HĐ-2024-002").await.unwrap().unwrap();

        service
            .update_contract(
                "HĐ-2024-002",
                ContractUpdate {
                    status: Some("completed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let after = service.get_contract("HĐ-2024-002").await.unwrap().unwrap();
        assert_eq!(after.status, "completed");
        // Untouched fields survive the merge.
        assert_eq!(after.title, before.title);
        assert_eq!(after.contractor, before.contractor);
        assert_eq!(after.value, before.value);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.created_by, before.created_by);
        // Provenance and updated_at are re-stamped.
        assert_ne!(after.tx_id, before.tx_id);
        assert_ne!(after.block_number, before.block_number);
        assert!(after.updated_at >= before.updated_at);
    }

    // ── Update on missing id ──────────────────────────────────────────────────

    #[tokio::test]
    async fn update_of_missing_id_fails_and_leaves_store_unmodified() {
        let service = connected_service().await;

        let result = service
            .update_contract("does-not-exist", ContractUpdate::default())
            .await;

        match result {
            Err(FabricError::ContractNotFound { id }) => assert_eq!(id, "does-not-exist"),
            other => panic!("expected ContractNotFound, got {:?}", other),
        }

        // Update is not upsert, and the failed call left no trace.
        assert!(service.get_all_contracts().await.unwrap().is_empty());
        assert!(service.get_audit_logs(None).await.unwrap().is_empty());
    }

    // ── Audit append-only ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn every_mutation_appends_exactly_one_audit_record() {
        let service = connected_service().await;

        service.create_contract(make_draft("HĐ-2024-003")).await.unwrap();
        let logs = service.get_audit_logs(None).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, "CREATE_CONTRACT");
        assert_eq!(logs[0].user_id, "admin");
        let first_snapshot = serde_json::to_string(&logs[0]).unwrap();

        service
            .update_contract(
                "HĐ-2024-003",
                ContractUpdate {
                    value: Some(2_000_000.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let logs = service.get_audit_logs(None).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[1].action, "UPDATE_CONTRACT");
        // Prior entries are untouched, byte for byte.
        assert_eq!(serde_json::to_string(&logs[0]).unwrap(), first_snapshot);
    }

    // ── Absent get is None ────────────────────────────────────────────────────

    #[tokio::test]
    async fn get_of_absent_id_resolves_to_none() {
        let service = connected_service().await;
        let found = service.get_contract("never-created").await.unwrap();
        assert!(found.is_none());
    }

    // ── Disconnected gating ───────────────────────────────────────────────────

    #[tokio::test]
    async fn disconnected_service_rejects_every_gated_call() {
        let service = connected_service().await;
        service.create_contract(make_draft("HĐ-2024-004")).await.unwrap();
        service.disconnect();

        assert!(matches!(
            service.create_contract(make_draft("HĐ-2024-005")).await,
            Err(FabricError::NotConnected)
        ));
        assert!(matches!(
            service.update_contract("HĐ-2024-004", ContractUpdate::default()).await,
            Err(FabricError::NotConnected)
        ));
        assert!(matches!(
            service.get_contract("HĐ-2024-004").await,
            Err(FabricError::NotConnected)
        ));
        assert!(matches!(
            service.get_all_contracts().await,
            Err(FabricError::NotConnected)
        ));
        assert!(matches!(
            service.get_audit_logs(None).await,
            Err(FabricError::NotConnected)
        ));

        // The two exempt calls still answer.
        assert!(!service.test_connection());
        match service.get_network_status() {
            NetworkStatus::Disconnected(outage) => {
                assert!(!outage.is_connected);
                assert_eq!(outage.error, "Not connected to blockchain network");
            }
            NetworkStatus::Connected(_) => panic!("status must report disconnected"),
        }
    }

    #[tokio::test]
    async fn uninitialized_service_is_gated_too() {
        let service = make_service();
        assert!(matches!(
            service.create_contract(make_draft("HĐ-2024-006")).await,
            Err(FabricError::NotConnected)
        ));
    }

    // ── Entity filter ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn audit_filter_returns_only_the_entity_in_insertion_order() {
        let service = connected_service().await;

        service.create_contract(make_draft("A")).await.unwrap();
        service.create_contract(make_draft("B")).await.unwrap();
        service
            .update_contract(
                "A",
                ContractUpdate {
                    status: Some("completed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let logs_a = service.get_audit_logs(Some("A")).await.unwrap();
        assert_eq!(logs_a.len(), 2);
        assert!(logs_a.iter().all(|log| log.entity_id == "A"));
        assert_eq!(logs_a[0].action, "CREATE_CONTRACT");
        assert_eq!(logs_a[1].action, "UPDATE_CONTRACT");

        let logs_b = service.get_audit_logs(Some("B")).await.unwrap();
        assert_eq!(logs_b.len(), 1);
        assert_eq!(logs_b[0].entity_id, "B");

        // Unfiltered returns everything.
        assert_eq!(service.get_audit_logs(None).await.unwrap().len(), 3);
    }

    // ── End-to-end scenario ──────────────────────────────────────────────────

    #[tokio::test]
    async fn full_contract_scenario() {
        let service = connected_service().await;

        let result = service
            .create_contract(ContractDraft {
                id: "HĐ-2024-099".to_string(),
                title: "Test".to_string(),
                contractor: "ABC".to_string(),
                value: 1_000_000.0,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                status: "active".to_string(),
                created_by: "admin".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.status, TxStatus::Success);
        assert!(result.tx_id.starts_with("tx_"));
        assert!((12_000..13_000).contains(&result.block_number));

        let all = service.get_all_contracts().await.unwrap();
        assert_eq!(
            all.iter().filter(|c| c.id == "HĐ-2024-099").count(),
            1,
            "exactly one record with the created id"
        );

        let logs = service.get_audit_logs(Some("HĐ-2024-099")).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, "CREATE_CONTRACT");
    }

    // ── Cosmetic helpers ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn network_status_when_connected_is_a_full_snapshot() {
        let service = connected_service().await;
        match service.get_network_status() {
            NetworkStatus::Connected(info) => {
                assert!(info.is_connected);
                assert_eq!(info.peers, 4);
            }
            NetworkStatus::Disconnected(_) => panic!("connected service must report connected"),
        }
    }

    #[test]
    fn generate_contract_id_has_the_domain_shape() {
        let service = make_service();
        let id = service.generate_contract_id();

        let year = Utc::now().year();
        let prefix = format!("HĐ-{}-", year);
        assert!(id.starts_with(&prefix), "unexpected id: {}", id);

        let sequence = &id[prefix.len()..];
        assert_eq!(sequence.len(), 3);
        let n: u32 = sequence.parse().unwrap();
        assert!((1..=999).contains(&n));
    }

    #[test]
    fn format_tx_hash_abbreviates_long_hashes_only() {
        assert_eq!(FabricService::format_tx_hash("short_hash"), "short_hash");
        assert_eq!(
            FabricService::format_tx_hash("tx_1704067200000_abc123def"),
            "tx_17040...bc123def"
        );
    }
}

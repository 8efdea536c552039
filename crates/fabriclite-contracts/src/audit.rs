//! Audit log record types.
//!
//! One audit record is written for every mutating operation on the ledger.
//! Records are append-only: never mutated or deleted once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known audit action names.
///
/// `action` is a free-form string on the wire; these constants cover the
/// actions the service itself emits. UI-level actions (e.g.
/// "SAVE_TO_BLOCKCHAIN") arrive through `create_audit_log` callers.
pub mod actions {
    pub const CREATE_CONTRACT: &str = "CREATE_CONTRACT";
    pub const UPDATE_CONTRACT: &str = "UPDATE_CONTRACT";
}

/// Caller input for `create_audit_log`.
///
/// `id` is caller-supplied; the service's own side-transactions follow the
/// `audit-{entityId}-{epochMillis}` convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogDraft {
    pub id: String,
    /// e.g. "CREATE_CONTRACT", "UPDATE_CONTRACT", "SAVE_TO_BLOCKCHAIN".
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
    pub ip_address: String,
}

/// An audit record as stored on the simulated ledger.
///
/// Same fields as the draft plus the ledger provenance stamped by the
/// transaction that recorded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogRecord {
    pub id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
    pub ip_address: String,
    pub tx_id: String,
    pub block_number: u64,
    pub created_at: DateTime<Utc>,
}

impl AuditLogRecord {
    /// Build a stored record from a draft plus provenance fields.
    pub fn from_draft(
        draft: AuditLogDraft,
        tx_id: String,
        block_number: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: draft.id,
            action: draft.action,
            entity_type: draft.entity_type,
            entity_id: draft.entity_id,
            user_id: draft.user_id,
            timestamp: draft.timestamp,
            details: draft.details,
            ip_address: draft.ip_address,
            tx_id,
            block_number,
            created_at,
        }
    }
}

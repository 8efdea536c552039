//! Contract record types.
//!
//! `ContractRecord` is what the ledger stores; `ContractDraft` is the caller
//! input for creation and `ContractUpdate` is the explicit partial-update
//! type applied during updates. The service stamps timestamps and ledger
//! provenance — drafts never carry them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A government contract as stored on the simulated ledger.
///
/// `id` is domain-assigned (e.g. "HĐ-2024-001"), unique across the store,
/// and immutable after creation. Records are never physically removed —
/// there is no delete operation.
///
/// `tx_id` and `block_number` are the ledger provenance stamped by the last
/// transaction that touched this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,
    pub title: String,
    pub contractor: String,
    /// Contract value as a plain number, no minor-unit scaling.
    pub value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-form domain status (e.g. "active", "completed").
    pub status: String,
    /// User identifier of the creator, also used to attribute update audits.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tx_id: String,
    pub block_number: u64,
}

/// Caller input for `create_contract`.
///
/// Timestamps and provenance are intentionally absent: the service stamps
/// `created_at`, `updated_at`, `tx_id`, and `block_number` at commit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDraft {
    pub id: String,
    pub title: String,
    pub contractor: String,
    pub value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub created_by: String,
}

/// A partial update to an existing contract.
///
/// Every field is optional; `None` means "leave unchanged". Field-level
/// optionality is encoded in the type rather than accepting an arbitrary
/// key-value overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ContractUpdate {
    /// Shallow-merge the supplied fields over `record`.
    ///
    /// Does NOT touch `updated_at` or provenance — the transaction executor
    /// re-stamps those separately so the merge stays a pure field overlay.
    pub fn apply(&self, record: &mut ContractRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(contractor) = &self.contractor {
            record.contractor = contractor.clone();
        }
        if let Some(value) = self.value {
            record.value = value;
        }
        if let Some(start_date) = self.start_date {
            record.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            record.end_date = end_date;
        }
        if let Some(status) = &self.status {
            record.status = status.clone();
        }
    }

    /// True when no field is set — applying would be a no-op overlay.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.contractor.is_none()
            && self.value.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
    }
}

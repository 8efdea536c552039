//! Network status snapshot types.
//!
//! The status is cosmetic telemetry for dashboards: randomly synthesized
//! per call and deliberately unrelated to actual ledger contents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A connected-network health snapshot.
///
/// All numeric fields are freshly randomized or fixed constants; none are
/// derived from the ledger store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    /// Always `true` in this variant; kept on the wire so callers can
    /// branch without knowing the enum shape.
    pub is_connected: bool,
    pub block_height: u64,
    pub peers: u32,
    pub channels: u32,
    pub chaincodes: u32,
    pub last_block_time: DateTime<Utc>,
    /// Synthetic health percentage in [95, 100).
    pub network_health: f64,
    /// Synthetic transactions-per-second figure in [200, 300).
    pub transaction_throughput: u64,
}

/// The reduced shape returned while disconnected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkOutage {
    /// Always `false` in this variant.
    pub is_connected: bool,
    pub error: String,
}

/// A synthesized connection/health snapshot.
///
/// Serialized untagged so each variant keeps its own wire shape: the
/// disconnected form is a distinct, smaller object and callers must branch
/// on `isConnected` before reading the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkStatus {
    Connected(NetworkInfo),
    Disconnected(NetworkOutage),
}

impl NetworkStatus {
    /// Build the disconnected shape with the standard error message.
    pub fn disconnected(error: impl Into<String>) -> Self {
        Self::Disconnected(NetworkOutage {
            is_connected: false,
            error: error.into(),
        })
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

//! Service configuration, loaded from TOML.
//!
//! Two tables: `[network]` carries the simulated Fabric connection profile
//! (cosmetic — nothing dials these endpoints), `[latency]` carries the
//! simulated round-trip delays in milliseconds. Both tables and every field
//! are optional; missing values fall back to the defaults of the simulated
//! government-contracts network.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fabriclite_contracts::error::{FabricError, FabricResult};
use fabriclite_core::LatencyProfile;

/// The simulated Fabric network profile.
///
/// These values exist for display and log context only; the ledger is
/// in-memory and never connects to a peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub network_name: String,
    pub channel_name: String,
    pub chaincode_name: String,
    pub msp_id: String,
    pub peer_endpoint: String,
    pub ca_endpoint: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network_name: "government-contracts-network".to_string(),
            channel_name: "contract-management".to_string(),
            chaincode_name: "contract-mgmt".to_string(),
            msp_id: "GovernmentMSP".to_string(),
            peer_endpoint: "localhost:7051".to_string(),
            ca_endpoint: "localhost:7054".to_string(),
        }
    }
}

/// Simulated latency settings in milliseconds.
///
/// Kept as plain integers in TOML; `profile()` converts to the `Duration`
/// based `LatencyProfile` the executors consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub handshake_ms: u64,
    pub transaction_ms: u64,
    pub audit_write_ms: u64,
    pub query_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            handshake_ms: 1000,
            transaction_ms: 1000,
            audit_write_ms: 500,
            query_ms: 500,
        }
    }
}

impl LatencyConfig {
    /// All delays zero. Tests and fast demos use this.
    pub fn zero() -> Self {
        Self {
            handshake_ms: 0,
            transaction_ms: 0,
            audit_write_ms: 0,
            query_ms: 0,
        }
    }

    pub fn profile(&self) -> LatencyProfile {
        use std::time::Duration;
        LatencyProfile {
            handshake: Duration::from_millis(self.handshake_ms),
            transaction: Duration::from_millis(self.transaction_ms),
            audit_write: Duration::from_millis(self.audit_write_ms),
            query: Duration::from_millis(self.query_ms),
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub network: NetworkConfig,
    pub latency: LatencyConfig,
}

impl ServiceConfig {
    /// Parse `s` as TOML configuration.
    ///
    /// Returns `FabricError::Config` if the TOML is malformed or does not
    /// match the expected schema.
    pub fn from_toml_str(s: &str) -> FabricResult<Self> {
        toml::from_str(s).map_err(|e| FabricError::Config {
            reason: format!("failed to parse service config TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> FabricResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FabricError::Config {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

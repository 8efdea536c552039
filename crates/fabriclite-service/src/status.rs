//! The network status reporter.
//!
//! Produces the connected-network health snapshot for dashboards. Every
//! field is either a fixed constant of the simulated topology or freshly
//! randomized per call; none of it is derived from ledger contents, and it
//! must stay that way — this is cosmetic telemetry, not state.

use chrono::Utc;
use rand::Rng;

use fabriclite_contracts::network::{NetworkInfo, NetworkStatus};
use fabriclite_ledger::ids::{BLOCK_BASE, BLOCK_SPAN};

/// Fixed topology of the simulated network.
const PEERS: u32 = 4;
const CHANNELS: u32 = 2;
const CHAINCODES: u32 = 3;

/// Synthesizes connected-network snapshots.
///
/// The reporter is a leaf: it holds no reference to the ledger store, so a
/// status call can never observe (or disturb) record state.
#[derive(Debug, Default)]
pub struct NetworkStatusReporter;

impl NetworkStatusReporter {
    pub fn new() -> Self {
        Self
    }

    /// A freshly randomized connected snapshot.
    ///
    /// Block height shares the transaction block range, health lands in
    /// [95, 100), throughput in [200, 300) tx/s.
    pub fn snapshot(&self) -> NetworkStatus {
        let mut rng = rand::thread_rng();
        NetworkStatus::Connected(NetworkInfo {
            is_connected: true,
            block_height: BLOCK_BASE + rng.gen_range(0..BLOCK_SPAN),
            peers: PEERS,
            channels: CHANNELS,
            chaincodes: CHAINCODES,
            last_block_time: Utc::now(),
            network_health: 95.0 + rng.gen::<f64>() * 5.0,
            transaction_throughput: 200 + rng.gen_range(0..100),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

//! Simulated network latency constants.

use std::time::Duration;

/// The simulated round-trip delays applied by the executors.
///
/// These model network round-trips to a Fabric peer and are real scheduled
/// delays (the executor suspends on them), so callers observing "pending"
/// states behave as they would against a live network. Tests use `zero()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// `initialize()` handshake delay.
    pub handshake: Duration,
    /// Contract create/update transactions.
    pub transaction: Duration,
    /// Audit-log write transactions.
    pub audit_write: Duration,
    /// All read queries.
    pub query: Duration,
}

impl Default for LatencyProfile {
    /// The delays observed in the simulated network: 1s for handshake and
    /// contract transactions, 500ms for audit writes and queries.
    fn default() -> Self {
        Self {
            handshake: Duration::from_millis(1000),
            transaction: Duration::from_millis(1000),
            audit_write: Duration::from_millis(500),
            query: Duration::from_millis(500),
        }
    }
}

impl LatencyProfile {
    /// All delays zero. Intended for tests and demos that must not wait.
    pub fn zero() -> Self {
        Self {
            handshake: Duration::ZERO,
            transaction: Duration::ZERO,
            audit_write: Duration::ZERO,
            query: Duration::ZERO,
        }
    }
}

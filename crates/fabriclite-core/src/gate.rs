//! The connection gate shared between the facade and the executors.

use std::sync::atomic::{AtomicBool, Ordering};

use fabriclite_contracts::error::{FabricError, FabricResult};

/// The single flag that gates every ledger operation.
///
/// Owned by the service facade and shared (via `Arc`) with both executors.
/// `connect()` and `disconnect()` are unconditional and idempotent — there
/// is no handshake state here, only the observable connected/disconnected
/// bit the executors check before acting.
#[derive(Debug, Default)]
pub struct ConnectionGate {
    connected: AtomicBool,
}

impl ConnectionGate {
    /// Create a gate in the disconnected state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&self) {
        self.connected.store(true, Ordering::SeqCst);
    }

    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Fail with `NotConnected` unless the gate is open.
    ///
    /// Every executor call starts here, before any simulated latency.
    pub fn ensure_connected(&self) -> FabricResult<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(FabricError::NotConnected)
        }
    }
}

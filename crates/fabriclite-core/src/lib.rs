//! # fabriclite-core
//!
//! The execution layer of the fabriclite simulated ledger.
//!
//! This crate provides:
//! - The seam traits (`IdGenerator`, `ContractStore`, `AuditStore`)
//! - The `ConnectionGate` shared by the facade and the executors
//! - `TransactionExecutor` / `QueryExecutor`, which wrap every ledger touch
//!   in the gate-check → simulated-latency → act sequence
//! - `LatencyProfile`, the configurable simulated round-trip delays
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fabriclite_core::{ConnectionGate, LatencyProfile, TransactionExecutor};
//! ```

pub mod executor;
pub mod gate;
pub mod latency;
pub mod traits;

pub use executor::{QueryExecutor, TransactionExecutor};
pub use gate::ConnectionGate;
pub use latency::LatencyProfile;

//! # fabriclite-service
//!
//! The public facade of the fabriclite simulated ledger.
//!
//! `FabricService` composes the connection gate, the transaction and query
//! executors, the in-memory ledger store, and the network status reporter
//! into the one object the API layer talks to.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fabriclite_service::{FabricService, ServiceConfig};
//!
//! let service = FabricService::new(ServiceConfig::default());
//! service.initialize().await?;
//! let result = service.create_contract(draft).await?;
//! let record = service.get_contract(&result_id).await?;
//! ```

pub mod config;
pub mod service;
pub mod status;

pub use config::{LatencyConfig, NetworkConfig, ServiceConfig};
pub use service::{ConnectionPhase, FabricService};
pub use status::NetworkStatusReporter;

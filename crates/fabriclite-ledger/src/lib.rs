//! # fabriclite-ledger
//!
//! In-memory storage and identifier generation for the fabriclite
//! simulated ledger.
//!
//! ## Overview
//!
//! `InMemoryLedger` keeps contracts and audit logs in two independent,
//! insertion-ordered keyspaces behind one `Mutex`. `RandomIdGenerator`
//! reproduces the simulated network's pseudo-random transaction ids and
//! block numbers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fabriclite_ledger::{InMemoryLedger, RandomIdGenerator};
//! use fabriclite_core::traits::{ContractStore, IdGenerator};
//!
//! let ledger = InMemoryLedger::new();
//! ledger.put_contract(record)?;
//! let snapshot = ledger.contracts()?;
//! ```

pub mod ids;
pub mod memory;

pub use ids::{RandomIdGenerator, SequentialIdGenerator};
pub use memory::InMemoryLedger;

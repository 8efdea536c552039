//! # fabriclite-contracts
//!
//! Shared types and error taxonomy for the fabriclite simulated ledger.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod audit;
pub mod error;
pub mod network;
pub mod record;
pub mod transaction;

//! `axle-ledger` — in-process ledger harness for the Axle contract.
//!
//! Stands in for the host runtime during development and testing: it
//! owns committed world state, runs one transaction at a time against a
//! fresh write overlay, commits the overlay atomically when the handler
//! succeeds, and discards it (state and event both) when the handler
//! fails. Consensus, ordering, endorsement, and identity are real host
//! concerns and have no counterpart here.
//!
//! - [`Runtime`] — the transaction envelope: `invoke(name, args)`
//! - [`TxState`] — per-transaction `LedgerStub` implementation
//! - [`LedgerConfig`] — world-state resource limits
//! - [`LedgerError`] — harness-level error type

pub mod config;
pub mod error;
pub mod host_impl;
pub mod runtime;

// Re-export key types for convenience
pub use config::LedgerConfig;
pub use error::LedgerError;
pub use host_impl::TxState;
pub use runtime::Runtime;

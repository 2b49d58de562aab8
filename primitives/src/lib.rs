//! `axle-primitives` — foundational types for the Axle vehicle registry.
//!
//! This crate provides the record type, chaincode events, error taxonomy,
//! and the transactional state overlay shared by the contract and the
//! ledger harness.
//!
//! Supports `#![no_std]` for constrained guest targets (use
//! `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod error;
pub mod vehicle;
pub mod event;
pub mod state;

// Re-export commonly used types at the crate root for convenience.
pub use types::{MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::{ContractError, ContractResult, StoreError};
pub use vehicle::Vehicle;
pub use event::{ChaincodeEvent, LogLine};
pub use state::{StateOverlay, OverlayResult};

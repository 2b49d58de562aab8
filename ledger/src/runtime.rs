//! Transaction runtime — the commit/discard envelope around the contract.
//!
//! `Runtime` owns committed world state and the committed event log.
//! Each `invoke` runs exactly one transaction: a fresh session is built
//! over committed state, the handler runs against it, and the session's
//! buffered writes and event are committed atomically on success or
//! discarded on failure. One transaction completes before the next
//! begins; the harness performs no internal concurrency.

use std::collections::BTreeMap;

use axle_contract::dispatch::{lookup, Operation};
use axle_primitives::{ChaincodeEvent, ContractError, LogLine};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::host_impl::TxState;

/// In-process stand-in for the host runtime.
#[derive(Debug, Default)]
pub struct Runtime {
    committed: BTreeMap<String, Vec<u8>>,
    events: Vec<ChaincodeEvent>,
    logs: Vec<LogLine>,
    config: LedgerConfig,
}

impl Runtime {
    /// Create a runtime with empty world state and default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runtime with custom limits.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Seed committed state directly, outside any transaction.
    pub fn seed(&mut self, key: &str, value: &[u8]) {
        self.committed.insert(key.to_string(), value.to_vec());
    }

    /// Committed value for a key.
    pub fn state(&self, key: &str) -> Option<&Vec<u8>> {
        self.committed.get(key)
    }

    /// Committed world state.
    pub fn committed(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.committed
    }

    /// Events committed so far, in transaction order.
    pub fn events(&self) -> &[ChaincodeEvent] {
        &self.events
    }

    /// Debug logs collected across all invocations, including aborted
    /// ones — logging is not consensus-critical and survives aborts.
    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    /// Run one transaction.
    ///
    /// Returns the handler's response payload on success. On failure the
    /// transaction's writes and event are discarded and the contract's
    /// message is surfaced verbatim.
    pub fn invoke(&mut self, name: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        let operation = lookup(name)
            .ok_or_else(|| LedgerError::Aborted(ContractError::UnknownOperation(name.into())))?;
        self.run(operation, args)
    }

    fn run(&mut self, operation: &Operation, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        let mut session = TxState::new(&self.committed, &self.config);
        let outcome = (operation.handler)(&mut session, args);
        let (overlay, event, logs) = session.into_parts();
        self.logs.extend(logs);

        let payload = outcome.map_err(LedgerError::Aborted)?;

        if operation.read_only && !overlay.is_empty() {
            return Err(LedgerError::ReadOnlyViolation {
                op: operation.name.to_string(),
                writes: overlay.len(),
            });
        }

        // Commit: apply buffered sets and tombstoned deletes, then the
        // transaction's event.
        for (key, write) in overlay.drain() {
            match write {
                Some(value) => {
                    self.committed.insert(key, value);
                }
                None => {
                    self.committed.remove(&key);
                }
            }
        }
        if let Some(event) = event {
            self.events.push(event);
        }
        Ok(payload)
    }
}

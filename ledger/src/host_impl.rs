//! Per-transaction session state implementing the contract's stub.
//!
//! `TxState` layers a write overlay over committed state for the
//! duration of one transaction: reads and range scans observe committed
//! state plus this transaction's buffered writes and tombstones. The
//! runtime commits or discards the overlay when the handler returns.

use std::collections::BTreeMap;

use axle_contract::host::{range_snapshot, BufferedCursor, LedgerStub, StateCursor, StateEntry};
use axle_primitives::{ChaincodeEvent, LogLine, OverlayResult, StateOverlay, StoreError};

use crate::config::LedgerConfig;

/// Mutable state for one transaction, created fresh per invocation.
pub struct TxState<'a> {
    /// Committed world state (read-only during the transaction).
    committed: &'a BTreeMap<String, Vec<u8>>,
    /// Resource limits.
    config: &'a LedgerConfig,
    /// Buffered writes for this transaction.
    pub(crate) overlay: StateOverlay,
    /// The transaction's event slot; a later set replaces an earlier one.
    pub(crate) event: Option<ChaincodeEvent>,
    /// Debug log lines collected during the transaction.
    pub(crate) logs: Vec<LogLine>,
}

impl<'a> TxState<'a> {
    /// Create a session over committed state.
    pub fn new(committed: &'a BTreeMap<String, Vec<u8>>, config: &'a LedgerConfig) -> Self {
        Self {
            committed,
            config,
            overlay: StateOverlay::new(),
            event: None,
            logs: Vec::new(),
        }
    }

    /// Tear the session apart for commit or discard.
    pub(crate) fn into_parts(self) -> (StateOverlay, Option<ChaincodeEvent>, Vec<LogLine>) {
        (self.overlay, self.event, self.logs)
    }

    fn check_key(&self, key: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(StoreError::KeyTooLarge { len: key.len() });
        }
        Ok(())
    }
}

impl LedgerStub for TxState<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if key.len() > self.config.max_key_len {
            return Err(StoreError::KeyTooLarge { len: key.len() });
        }
        // Overlay first: reads reflect this transaction's earlier writes.
        match self.overlay.get(key) {
            OverlayResult::Found(value) => Ok(Some(value)),
            OverlayResult::Deleted => Ok(None),
            OverlayResult::NotInOverlay => Ok(self.committed.get(key).cloned()),
        }
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.check_key(key)?;
        if value.len() > self.config.max_value_len {
            return Err(StoreError::ValueTooLarge { len: value.len() });
        }
        self.overlay.set(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_key(key)?;
        self.overlay.delete(key.to_string());
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateCursor>, StoreError> {
        // Committed entries in range, then this transaction's writes
        // applied on top: sets override, tombstones remove.
        let mut merged: BTreeMap<String, Vec<u8>> = range_snapshot(self.committed, start_key, end_key)
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect();
        for (key, write) in self.overlay.writes() {
            let after_start = start_key.is_empty() || key.as_str() >= start_key;
            let before_end = end_key.is_empty() || key.as_str() < end_key;
            if !(after_start && before_end) {
                continue;
            }
            match write {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        let entries = merged
            .into_iter()
            .map(|(key, value)| StateEntry { key, value })
            .collect();
        Ok(Box::new(BufferedCursor::new(entries)))
    }

    fn set_event(&mut self, name: &str, payload: &[u8]) -> Result<(), StoreError> {
        // Last set wins; the transaction carries at most one event.
        self.event = Some(ChaincodeEvent::new(name, payload));
        Ok(())
    }

    fn log(&mut self, level: u32, message: &str) {
        self.logs.push(LogLine {
            level,
            message: message.to_string(),
        });
    }
}

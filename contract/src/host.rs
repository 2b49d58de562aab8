//! Ledger stub trait — abstraction over the host-provided world state.
//!
//! The `LedgerStub` trait decouples the contract from the host runtime.
//! Each method corresponds to one host primitive. The host guarantees
//! that one transaction runs to completion before the next begins, so no
//! locking happens at this layer.
//!
//! - In production: implemented by the host runtime's bridge
//! - In tests: implemented by `MockLedger` (in-memory store)
//! - In the ledger harness: implemented by the per-transaction session

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloc::collections::BTreeMap;
use core::ops::Bound;

use axle_primitives::{
    types::{MAX_KEY_LEN, MAX_VALUE_LEN},
    ChaincodeEvent, LogLine, StoreError,
};

/// One key-value pair yielded by a range cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    /// World-state key.
    pub key: String,
    /// Stored value bytes.
    pub value: Vec<u8>,
}

/// Stateful handle for sequential retrieval of a key range.
///
/// Cursors hold host-side iteration resources and must be released on
/// every exit path, including early returns and errors.
pub trait StateCursor {
    /// Yield the next entry, or `None` when the range is exhausted.
    ///
    /// Calling `next` on a closed cursor is a usage error and returns
    /// `StoreError::CursorClosed`.
    fn next(&mut self) -> Result<Option<StateEntry>, StoreError>;

    /// Release the cursor's resources. Idempotent.
    fn close(&mut self) -> Result<(), StoreError>;
}

/// Abstraction over the host runtime's world-state primitives.
///
/// The contract calls these during a transaction. Implementations are
/// responsible for enforcing key/value size limits.
pub trait LedgerStub {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist. Absence is a normal
    /// result, never an error.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, fully replacing any prior value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is a no-op at this level;
    /// existence preconditions live in the handlers.
    fn delete_state(&mut self, key: &str) -> Result<(), StoreError>;

    /// Acquire a cursor over keys in `[start_key, end_key)`, in
    /// lexicographic key order.
    ///
    /// An empty `end_key` means unbounded above; an empty `start_key`
    /// means unbounded below.
    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateCursor>, StoreError>;

    /// Set the event for the current transaction. A later call replaces
    /// an earlier one; the committed transaction carries at most one.
    fn set_event(&mut self, name: &str, payload: &[u8]) -> Result<(), StoreError>;

    /// Write a debug log line. Not consensus-critical; the host may drop
    /// it, and the contract must never branch on logging.
    fn log(&mut self, level: u32, message: &str);
}

/// Select the entries of a key-ordered map that fall in `[start, end)`,
/// with empty bounds meaning unbounded on that side.
pub fn range_snapshot(
    state: &BTreeMap<String, Vec<u8>>,
    start_key: &str,
    end_key: &str,
) -> Vec<StateEntry> {
    // An inverted range yields nothing (BTreeMap::range would panic).
    if !start_key.is_empty() && !end_key.is_empty() && start_key > end_key {
        return Vec::new();
    }
    let lower: Bound<&str> = if start_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start_key)
    };
    let upper: Bound<&str> = if end_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end_key)
    };
    state
        .range::<str, _>((lower, upper))
        .map(|(key, value)| StateEntry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Cursor over a snapshot of range entries taken at acquisition time.
///
/// The standard `StateCursor` implementation: the backing store collects
/// the matching entries up front and the cursor walks the buffer.
#[derive(Debug)]
pub struct BufferedCursor {
    entries: alloc::vec::IntoIter<StateEntry>,
    closed: bool,
}

impl BufferedCursor {
    /// Wrap a snapshot of entries, assumed already in key order.
    pub fn new(entries: Vec<StateEntry>) -> Self {
        Self {
            entries: entries.into_iter(),
            closed: false,
        }
    }
}

impl StateCursor for BufferedCursor {
    fn next(&mut self) -> Result<Option<StateEntry>, StoreError> {
        if self.closed {
            return Err(StoreError::CursorClosed);
        }
        Ok(self.entries.next())
    }

    fn close(&mut self) -> Result<(), StoreError> {
        self.closed = true;
        Ok(())
    }
}

// ── MockLedger: in-memory stub for unit tests ──

/// In-memory `LedgerStub` for deterministic unit tests.
///
/// Writes go straight to a `BTreeMap` (no overlay). Every `put_state`
/// and `delete_state` call is journaled so tests can assert exactly
/// which writes a handler performed, and every `set_event` call is
/// retained in order.
#[derive(Debug, Clone, Default)]
pub struct MockLedger {
    state: BTreeMap<String, Vec<u8>>,
    puts: Vec<(String, Vec<u8>)>,
    deletes: Vec<String>,
    events: Vec<ChaincodeEvent>,
    logs: Vec<LogLine>,
}

impl MockLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-populated with state.
    pub fn with_state(entries: &[(&str, &[u8])]) -> Self {
        let mut ledger = Self::new();
        for (key, value) in entries {
            ledger.state.insert((*key).to_string(), value.to_vec());
        }
        ledger
    }

    /// Seed a key directly, bypassing the journal.
    pub fn seed(&mut self, key: &str, value: &[u8]) {
        self.state.insert(key.to_string(), value.to_vec());
    }

    /// Current stored value for a key.
    pub fn stored(&self, key: &str) -> Option<&Vec<u8>> {
        self.state.get(key)
    }

    /// All `put_state` calls made so far, in order.
    pub fn puts(&self) -> &[(String, Vec<u8>)] {
        &self.puts
    }

    /// All `delete_state` calls made so far, in order.
    pub fn deletes(&self) -> &[String] {
        &self.deletes
    }

    /// All `set_event` calls made so far, in order.
    pub fn events(&self) -> &[ChaincodeEvent] {
        &self.events
    }

    /// The last event set, if any.
    pub fn last_event(&self) -> Option<&ChaincodeEvent> {
        self.events.last()
    }

    /// Collected log lines.
    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }
}

impl LedgerStub for MockLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if key.len() > MAX_KEY_LEN {
            return Err(StoreError::KeyTooLarge { len: key.len() });
        }
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if key.len() > MAX_KEY_LEN {
            return Err(StoreError::KeyTooLarge { len: key.len() });
        }
        if value.len() > MAX_VALUE_LEN {
            return Err(StoreError::ValueTooLarge { len: value.len() });
        }
        self.state.insert(key.to_string(), value.to_vec());
        self.puts.push((key.to_string(), value.to_vec()));
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        self.state.remove(key);
        self.deletes.push(key.to_string());
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateCursor>, StoreError> {
        let entries = range_snapshot(&self.state, start_key, end_key);
        Ok(Box::new(BufferedCursor::new(entries)))
    }

    fn set_event(&mut self, name: &str, payload: &[u8]) -> Result<(), StoreError> {
        self.events.push(ChaincodeEvent::new(name, payload));
        Ok(())
    }

    fn log(&mut self, level: u32, message: &str) {
        self.logs.push(LogLine {
            level,
            message: message.to_string(),
        });
    }
}

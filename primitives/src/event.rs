//! Chaincode events and debug log lines.

use alloc::string::String;
use alloc::vec::Vec;

/// A named event recorded against a transaction.
///
/// The host primitive is `set_event`: a transaction carries at most one
/// event, and a later set replaces an earlier one. Committed events are
/// delivered to external listeners after the transaction commits;
/// emission never rolls back the state mutation it accompanies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeEvent {
    /// Event name, e.g. `addAsset`.
    pub name: String,
    /// Informational payload bytes.
    pub payload: Vec<u8>,
}

impl ChaincodeEvent {
    /// Create an event from a name and payload.
    pub fn new(name: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }

    /// The payload interpreted as UTF-8, for display and assertions.
    pub fn payload_utf8(&self) -> alloc::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

/// Debug log line emitted by the contract through the host.
///
/// Logs are not consensus-critical; the host may drop them, and the
/// contract must never branch on logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Log level (0=trace, 1=debug, 2=info, 3=warn, 4=error).
    pub level: u32,
    /// Log message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_new() {
        let event = ChaincodeEvent::new("addAsset", b"Created asset 1001".as_slice());
        assert_eq!(event.name, "addAsset");
        assert_eq!(event.payload_utf8(), "Created asset 1001");
    }

    #[test]
    fn test_payload_utf8_lossy() {
        let event = ChaincodeEvent::new("delAsset", vec![0xff, 0xfe]);
        // Invalid UTF-8 degrades to replacement characters, never panics.
        assert_eq!(event.payload_utf8().chars().count(), 2);
    }
}

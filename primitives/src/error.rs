//! Error types for the Axle registry.
//!
//! `StoreError` covers failures of the host-provided world-state
//! primitives. `ContractError` is the taxonomy surfaced by transaction
//! handlers; the host runtime returns these messages verbatim to the
//! submitting client, so the texts are part of the contract's observable
//! surface.

use alloc::string::String;
use core::fmt;

/// Failure of a host-provided world-state primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Empty keys are not addressable in the world state.
    EmptyKey,
    /// The key exceeds the store's key length limit.
    KeyTooLarge { len: usize },
    /// The value exceeds the store's value length limit.
    ValueTooLarge { len: usize },
    /// `next` was called on a cursor after `close`.
    CursorClosed,
    /// The storage backend failed.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "empty world-state key"),
            Self::KeyTooLarge { len } => {
                write!(f, "key of {} bytes exceeds the store's key length limit", len)
            }
            Self::ValueTooLarge { len } => {
                write!(f, "value of {} bytes exceeds the store's value length limit", len)
            }
            Self::CursorClosed => write!(f, "cursor used after close"),
            Self::Backend(msg) => write!(f, "storage backend error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StoreError {}

/// Errors surfaced by the contract's transaction handlers.
///
/// The host aborts the transaction on any of these and discards
/// uncommitted writes; there is no recovery inside the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A create was attempted for an id that already holds a record.
    AlreadyExists(String),
    /// A read, update, or delete referenced an id with no stored record.
    NotFound(String),
    /// A record could not be encoded for storage.
    Serialization(String),
    /// Stored bytes could not be decoded into the record shape.
    Deserialization(String),
    /// The host-supplied string arguments were malformed.
    BadArguments(String),
    /// The invoked operation name is not in the registration table.
    UnknownOperation(String),
    /// A world-state primitive failed underneath the handler.
    Store(StoreError),
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists(id) => write!(f, "The vehicle {} already exists", id),
            Self::NotFound(id) => write!(f, "The vehicle {} does not exist", id),
            Self::Serialization(msg) => write!(f, "record could not be serialized: {}", msg),
            Self::Deserialization(msg) => write!(f, "stored record is malformed: {}", msg),
            Self::BadArguments(msg) => write!(f, "bad arguments: {}", msg),
            Self::UnknownOperation(name) => write!(f, "unknown operation: {}", name),
            Self::Store(err) => write!(f, "world state error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContractError {}

impl From<StoreError> for ContractError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Convenience result type for the contract layer.
pub type ContractResult<T> = core::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_client_facing_messages_verbatim() {
        // These texts are observable by clients and must not drift.
        let err = ContractError::AlreadyExists("1001".to_string());
        assert_eq!(format!("{}", err), "The vehicle 1001 already exists");

        let err = ContractError::NotFound("1003".to_string());
        assert_eq!(format!("{}", err), "The vehicle 1003 does not exist");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::KeyTooLarge { len: 300 };
        let s = format!("{}", err);
        assert!(s.contains("300"));
        assert!(s.contains("key length limit"));

        assert_eq!(format!("{}", StoreError::CursorClosed), "cursor used after close");
    }

    #[test]
    fn test_contract_error_from_store_error() {
        let err: ContractError = StoreError::EmptyKey.into();
        assert_eq!(err, ContractError::Store(StoreError::EmptyKey));
        assert!(format!("{}", err).contains("empty world-state key"));
    }

    #[test]
    fn test_bad_arguments_display() {
        let err = ContractError::BadArguments("expected 6 arguments, got 2".to_string());
        assert_eq!(format!("{}", err), "bad arguments: expected 6 arguments, got 2");
    }
}

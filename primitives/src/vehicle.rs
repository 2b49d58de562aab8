//! The vehicle record — the sole entity stored in the registry.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};

/// A registered vehicle.
///
/// Identity is external: records are stored under a caller-chosen id and
/// the id is not part of the record itself. All fields are set together
/// at creation; there are no partial records.
///
/// The in-process value is a transient view — the world state owns the
/// authoritative byte representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub owner: String,
    pub capacity: u32,
}

impl Vehicle {
    /// Encode the record to its canonical JSON wire form.
    pub fn to_bytes(&self) -> ContractResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| ContractError::Serialization(e.to_string()))
    }

    /// Decode a record from stored bytes.
    ///
    /// Bytes that are not a valid record for this shape surface an
    /// explicit `Deserialization` error rather than a panic or a loose
    /// value.
    pub fn from_bytes(bytes: &[u8]) -> ContractResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| ContractError::Deserialization(e.to_string()))
    }
}

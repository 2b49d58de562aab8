//! Record store accessor — maps vehicle records to and from world-state
//! keys.
//!
//! A pure data-shape contract over the host primitives: no events, no
//! logging, no transaction logic. Handlers compose these with their own
//! preconditions.

use alloc::string::ToString;

use axle_primitives::{ContractError, ContractResult, Vehicle};

use crate::host::LedgerStub;

/// True iff the store holds a non-empty byte value for `id`.
///
/// Absence is a normal `false` result, not an error.
pub fn exists(stub: &dyn LedgerStub, id: &str) -> ContractResult<bool> {
    let data = stub.get_state(id)?;
    Ok(matches!(data, Some(bytes) if !bytes.is_empty()))
}

/// Read and decode the record stored under `id`.
///
/// Fails with `NotFound` when the key is absent or empty, and with
/// `Deserialization` when the stored bytes are not a valid record.
pub fn read(stub: &dyn LedgerStub, id: &str) -> ContractResult<Vehicle> {
    match stub.get_state(id)? {
        Some(bytes) if !bytes.is_empty() => Vehicle::from_bytes(&bytes),
        _ => Err(ContractError::NotFound(id.to_string())),
    }
}

/// Serialize `vehicle` and store it under `id`, replacing any prior value.
pub fn write(stub: &mut dyn LedgerStub, id: &str, vehicle: &Vehicle) -> ContractResult<()> {
    let bytes = vehicle.to_bytes()?;
    stub.put_state(id, &bytes)?;
    Ok(())
}

/// Delete the record under `id`. Callers pre-check existence; at this
/// level deleting an absent key is a store-level no-op.
pub fn remove(stub: &mut dyn LedgerStub, id: &str) -> ContractResult<()> {
    stub.delete_state(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockLedger;
    use alloc::string::String;

    fn sample() -> Vehicle {
        Vehicle {
            name: String::from("Runabout"),
            brand: String::from("Tata"),
            model: String::from("Nano"),
            owner: String::from("asha"),
            capacity: 4,
        }
    }

    #[test]
    fn test_exists_false_for_never_written_key() {
        let ledger = MockLedger::new();
        assert!(!exists(&ledger, "1001").unwrap());
    }

    #[test]
    fn test_exists_false_for_empty_value() {
        let mut ledger = MockLedger::new();
        ledger.seed("1001", b"");
        assert!(!exists(&ledger, "1001").unwrap());
    }

    #[test]
    fn test_write_then_exists_and_read() {
        let mut ledger = MockLedger::new();
        let vehicle = sample();
        write(&mut ledger, "1001", &vehicle).unwrap();

        assert!(exists(&ledger, "1001").unwrap());
        assert_eq!(read(&ledger, "1001").unwrap(), vehicle);
    }

    #[test]
    fn test_read_absent_is_not_found() {
        let ledger = MockLedger::new();
        let err = read(&ledger, "1003").unwrap_err();
        assert_eq!(err, ContractError::NotFound("1003".to_string()));
    }

    #[test]
    fn test_read_malformed_is_deserialization() {
        let mut ledger = MockLedger::new();
        ledger.seed("1001", b"this is not a record");
        let err = read(&ledger, "1001").unwrap_err();
        assert!(matches!(err, ContractError::Deserialization(_)));
    }

    #[test]
    fn test_write_replaces_prior_value() {
        let mut ledger = MockLedger::new();
        let mut vehicle = sample();
        write(&mut ledger, "1001", &vehicle).unwrap();

        vehicle.owner = String::from("bela");
        write(&mut ledger, "1001", &vehicle).unwrap();

        assert_eq!(read(&ledger, "1001").unwrap().owner, "bela");
    }

    #[test]
    fn test_remove_then_absent() {
        let mut ledger = MockLedger::new();
        write(&mut ledger, "1001", &sample()).unwrap();
        remove(&mut ledger, "1001").unwrap();
        assert!(!exists(&ledger, "1001").unwrap());
    }
}

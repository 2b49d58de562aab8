//! Operation dispatch — the explicit registration table mapping host
//! operation names to handlers.
//!
//! The host invokes the contract by operation name with string
//! arguments. Each table entry carries the host-facing name, a read-only
//! flag the host may use to skip endorsement of pure queries, and the
//! handler. Response payloads are JSON bytes: `true`/`false` for the
//! existence check, the record object for reads, the array for the
//! listing, and empty for void mutations.

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use axle_primitives::{ContractError, ContractResult};

use crate::host::LedgerStub;
use crate::transaction;

/// A transaction handler: string args in, JSON payload bytes out.
pub type Handler = fn(&mut dyn LedgerStub, &[&str]) -> ContractResult<Vec<u8>>;

/// One entry in the registration table.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Host-facing operation name.
    pub name: &'static str,
    /// True when the operation performs no state writes.
    pub read_only: bool,
    /// The handler invoked for this operation.
    pub handler: Handler,
}

/// The registration table. Replaces the annotation metadata a host
/// framework would otherwise derive from the contract class.
pub const OPERATIONS: &[Operation] = &[
    Operation {
        name: "vehicleExists",
        read_only: true,
        handler: invoke_exists,
    },
    Operation {
        name: "createVehicle",
        read_only: false,
        handler: invoke_create,
    },
    Operation {
        name: "readVehicle",
        read_only: true,
        handler: invoke_read,
    },
    Operation {
        name: "updateVehicle",
        read_only: false,
        handler: invoke_update,
    },
    Operation {
        name: "deleteVehicle",
        read_only: false,
        handler: invoke_delete,
    },
    Operation {
        name: "getAllVehicles",
        read_only: true,
        handler: invoke_get_all,
    },
];

/// Find a registered operation by its host-facing name.
pub fn lookup(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Dispatch an invocation to its handler.
///
/// Unknown names fail with `UnknownOperation`; argument arity and shape
/// problems fail with `BadArguments` before any handler logic runs.
pub fn handle(stub: &mut dyn LedgerStub, name: &str, args: &[&str]) -> ContractResult<Vec<u8>> {
    let operation = lookup(name).ok_or_else(|| ContractError::UnknownOperation(name.to_string()))?;
    (operation.handler)(stub, args)
}

/// Check arity and view the args as a fixed-size array.
fn expect_args<'a, const N: usize>(args: &[&'a str]) -> ContractResult<[&'a str; N]> {
    if args.len() != N {
        return Err(ContractError::BadArguments(format!(
            "expected {} arguments, got {}",
            N,
            args.len()
        )));
    }
    let mut out = [""; N];
    out.copy_from_slice(args);
    Ok(out)
}

fn to_json_payload<T: serde::Serialize>(value: &T) -> ContractResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| ContractError::Serialization(e.to_string()))
}

fn invoke_exists(stub: &mut dyn LedgerStub, args: &[&str]) -> ContractResult<Vec<u8>> {
    let [id] = expect_args::<1>(args)?;
    let present = transaction::vehicle_exists(stub, id)?;
    to_json_payload(&present)
}

fn invoke_create(stub: &mut dyn LedgerStub, args: &[&str]) -> ContractResult<Vec<u8>> {
    let [id, brand, capacity, model, name, owner] = expect_args::<6>(args)?;
    let capacity: u32 = capacity.parse().map_err(|_| {
        ContractError::BadArguments(format!("capacity must be a non-negative integer, got {:?}", capacity))
    })?;
    transaction::create_vehicle(stub, id, brand, capacity, model, name, owner)?;
    Ok(Vec::new())
}

fn invoke_read(stub: &mut dyn LedgerStub, args: &[&str]) -> ContractResult<Vec<u8>> {
    let [id] = expect_args::<1>(args)?;
    let vehicle = transaction::read_vehicle(stub, id)?;
    to_json_payload(&vehicle)
}

fn invoke_update(stub: &mut dyn LedgerStub, args: &[&str]) -> ContractResult<Vec<u8>> {
    let [id, new_owner] = expect_args::<2>(args)?;
    transaction::update_vehicle(stub, id, new_owner)?;
    Ok(Vec::new())
}

fn invoke_delete(stub: &mut dyn LedgerStub, args: &[&str]) -> ContractResult<Vec<u8>> {
    let [id] = expect_args::<1>(args)?;
    transaction::delete_vehicle(stub, id)?;
    Ok(Vec::new())
}

fn invoke_get_all(stub: &mut dyn LedgerStub, args: &[&str]) -> ContractResult<Vec<u8>> {
    expect_args::<0>(args)?;
    let listed = transaction::get_all_vehicles(stub)?;
    Ok(listed.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockLedger;
    use axle_primitives::Vehicle;

    const CREATE_ARGS: &[&str] = &["1003", "Tata", "4", "Nano", "Runabout", "asha"];

    #[test]
    fn test_table_names_and_flags() {
        let read_only: Vec<(&str, bool)> =
            OPERATIONS.iter().map(|op| (op.name, op.read_only)).collect();
        assert_eq!(
            read_only,
            [
                ("vehicleExists", true),
                ("createVehicle", false),
                ("readVehicle", true),
                ("updateVehicle", false),
                ("deleteVehicle", false),
                ("getAllVehicles", true),
            ]
        );
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert!(lookup("mintVehicle").is_none());
        let mut ledger = MockLedger::new();
        let err = handle(&mut ledger, "mintVehicle", &[]).unwrap_err();
        assert_eq!(err, ContractError::UnknownOperation("mintVehicle".to_string()));
    }

    #[test]
    fn test_exists_payload_is_json_bool() {
        let mut ledger = MockLedger::new();
        assert_eq!(handle(&mut ledger, "vehicleExists", &["1003"]).unwrap(), b"false");

        handle(&mut ledger, "createVehicle", CREATE_ARGS).unwrap();
        assert_eq!(handle(&mut ledger, "vehicleExists", &["1003"]).unwrap(), b"true");
    }

    #[test]
    fn test_create_then_read_roundtrip() {
        let mut ledger = MockLedger::new();
        let payload = handle(&mut ledger, "createVehicle", CREATE_ARGS).unwrap();
        assert!(payload.is_empty());

        let read = handle(&mut ledger, "readVehicle", &["1003"]).unwrap();
        let vehicle = Vehicle::from_bytes(&read).unwrap();
        assert_eq!(vehicle.brand, "Tata");
        assert_eq!(vehicle.capacity, 4);
    }

    #[test]
    fn test_arity_mismatch_is_bad_arguments() {
        let mut ledger = MockLedger::new();
        let err = handle(&mut ledger, "createVehicle", &["1003", "Tata"]).unwrap_err();
        assert!(matches!(err, ContractError::BadArguments(_)));
        assert!(err.to_string().contains("expected 6 arguments, got 2"));
    }

    #[test]
    fn test_non_numeric_capacity_is_bad_arguments() {
        let mut ledger = MockLedger::new();
        let args = &["1003", "Tata", "four", "Nano", "Runabout", "asha"];
        let err = handle(&mut ledger, "createVehicle", args).unwrap_err();
        assert!(matches!(err, ContractError::BadArguments(_)));
        assert!(ledger.puts().is_empty());
    }

    #[test]
    fn test_get_all_takes_no_arguments() {
        let mut ledger = MockLedger::new();
        let err = handle(&mut ledger, "getAllVehicles", &["stray"]).unwrap_err();
        assert!(matches!(err, ContractError::BadArguments(_)));

        let payload = handle(&mut ledger, "getAllVehicles", &[]).unwrap();
        assert_eq!(payload, b"[]");
    }
}

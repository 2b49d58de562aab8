//! Transaction handlers — the operations the host can invoke.
//!
//! Each handler is atomic and stateless between calls: the host runs one
//! transaction to completion before the next begins, and a handler
//! performs at most one logical store mutation, so the world state is
//! never left half-written. Errors propagate to the host, which aborts
//! the transaction and surfaces the message to the client.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use axle_primitives::{
    types::{LOG_DEBUG, LOG_INFO},
    ContractError, ContractResult, Vehicle,
};
use serde_json::Value;

use crate::host::{LedgerStub, StateCursor};
use crate::store;

/// Event set when a record is created.
pub const EVENT_ADD_ASSET: &str = "addAsset";
/// Event set when a record's owner is replaced.
pub const EVENT_UPDATE_ASSET: &str = "updateAsset";
/// Event set when a record is deleted.
pub const EVENT_DEL_ASSET: &str = "delAsset";

/// Lower bound of the listing scan. Keys sorting below this (e.g. `"00"`)
/// are outside the registry's key space and are not listed.
const SCAN_START_KEY: &str = "000";
/// Upper bound of the listing scan; empty means unbounded above.
const SCAN_END_KEY: &str = "";

/// Does a record exist under `id`? Never fails on absence.
pub fn vehicle_exists(stub: &mut dyn LedgerStub, id: &str) -> ContractResult<bool> {
    store::exists(stub, id)
}

/// Create a record under `id` from the supplied fields.
///
/// Fails with `AlreadyExists` if the key already holds a record; in that
/// case nothing is written and no event is set.
pub fn create_vehicle(
    stub: &mut dyn LedgerStub,
    id: &str,
    brand: &str,
    capacity: u32,
    model: &str,
    name: &str,
    owner: &str,
) -> ContractResult<()> {
    if store::exists(stub, id)? {
        return Err(ContractError::AlreadyExists(id.to_string()));
    }
    let vehicle = Vehicle {
        name: name.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        owner: owner.to_string(),
        capacity,
    };
    store::write(stub, id, &vehicle)?;
    // Emission failure does not roll back the mutation.
    let _ = stub.set_event(EVENT_ADD_ASSET, format!("Created asset {}", id).as_bytes());
    stub.log(LOG_INFO, &format!("created vehicle {}", id));
    Ok(())
}

/// Read the record stored under `id`.
pub fn read_vehicle(stub: &mut dyn LedgerStub, id: &str) -> ContractResult<Vehicle> {
    store::read(stub, id)
}

/// Replace the owner of the record under `id`.
///
/// Deliberately narrower than the name suggests: only the `owner` field
/// changes, all other fields are carried over unchanged.
pub fn update_vehicle(
    stub: &mut dyn LedgerStub,
    id: &str,
    new_owner: &str,
) -> ContractResult<()> {
    let mut vehicle = store::read(stub, id)?;
    vehicle.owner = new_owner.to_string();
    store::write(stub, id, &vehicle)?;
    let _ = stub.set_event(EVENT_UPDATE_ASSET, format!("Updated asset {}", id).as_bytes());
    stub.log(LOG_INFO, &format!("updated vehicle {} owner", id));
    Ok(())
}

/// Delete the record under `id`.
pub fn delete_vehicle(stub: &mut dyn LedgerStub, id: &str) -> ContractResult<()> {
    if !store::exists(stub, id)? {
        return Err(ContractError::NotFound(id.to_string()));
    }
    store::remove(stub, id)?;
    let _ = stub.set_event(EVENT_DEL_ASSET, format!("Deleted asset {}", id).as_bytes());
    stub.log(LOG_INFO, &format!("deleted vehicle {}", id));
    Ok(())
}

/// List every record in the registry's key space, in lexicographic key
/// order, as one serialized JSON array.
///
/// Values that do not parse as JSON degrade to opaque strings in the
/// result rather than failing the scan. Entries with empty values are
/// skipped. The whole batch is collected before returning; this is not a
/// stream.
pub fn get_all_vehicles(stub: &mut dyn LedgerStub) -> ContractResult<String> {
    let mut cursor = stub.get_state_by_range(SCAN_START_KEY, SCAN_END_KEY)?;
    // The cursor is released on every path; an iteration error still
    // reaches the close call below.
    let collected = collect_records(cursor.as_mut());
    let closed = cursor.close();
    let records = collected?;
    closed?;

    stub.log(LOG_DEBUG, &format!("listed {} records", records.len()));
    serde_json::to_string(&records).map_err(|e| ContractError::Serialization(e.to_string()))
}

/// Drain a cursor, parsing each value as JSON and falling back to an
/// opaque string for values that are not valid JSON.
fn collect_records(cursor: &mut dyn StateCursor) -> ContractResult<Vec<Value>> {
    let mut records = Vec::new();
    while let Some(entry) = cursor.next()? {
        if entry.value.is_empty() {
            continue;
        }
        let record = match serde_json::from_slice::<Value>(&entry.value) {
            Ok(value) => value,
            Err(_) => Value::String(String::from_utf8_lossy(&entry.value).into_owned()),
        };
        records.push(record);
    }
    Ok(records)
}

//! Shared test helpers for integration tests.
//!
//! Provides runtime factories, argument builders, and payload decoding
//! used across all integration test files.

#![allow(dead_code)]

use axle_ledger::Runtime;
use axle_primitives::Vehicle;

/// A fresh runtime with empty world state.
pub fn runtime() -> Runtime {
    Runtime::new()
}

/// A runtime pre-loaded with two well-known records at `"1001"` and
/// `"1002"`, created through the contract so events and state agree.
pub fn populated_runtime() -> Runtime {
    let mut runtime = Runtime::new();
    runtime
        .invoke("createVehicle", &create_args("1001", "asha"))
        .expect("seed create 1001");
    runtime
        .invoke("createVehicle", &create_args("1002", "bela"))
        .expect("seed create 1002");
    runtime
}

/// Arguments for `createVehicle` with fixed brand/model/name fields.
/// Order: id, brand, capacity, model, name, owner.
pub fn create_args<'a>(id: &'a str, owner: &'a str) -> [&'a str; 6] {
    [id, "Tata", "4", "Nano", "Runabout", owner]
}

/// Decode a `readVehicle` response payload.
pub fn decode_vehicle(payload: &[u8]) -> Vehicle {
    Vehicle::from_bytes(payload).expect("response payload is a vehicle record")
}

/// Decode a `getAllVehicles` response payload into JSON values.
pub fn decode_listing(payload: &[u8]) -> Vec<serde_json::Value> {
    serde_json::from_slice(payload).expect("response payload is a JSON array")
}

/// Decode a `vehicleExists` response payload.
pub fn decode_bool(payload: &[u8]) -> bool {
    serde_json::from_slice(payload).expect("response payload is a JSON bool")
}

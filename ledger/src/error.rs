//! Ledger harness error types.

use axle_primitives::ContractError;

/// Top-level error type for the ledger harness.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    /// The handler failed; the transaction was discarded. The contract's
    /// message is surfaced verbatim, exactly as the host runtime would
    /// return it to the submitting client.
    #[error("{0}")]
    Aborted(#[from] ContractError),

    /// An operation registered as read-only buffered state writes.
    /// The writes are discarded; this signals a registration defect.
    #[error("read-only operation `{op}` buffered {writes} state write(s)")]
    ReadOnlyViolation { op: String, writes: usize },
}

//! Ledger query errors

use thiserror::Error;

/// Errors surfaced by a [`crate::LedgerQuery`] implementation.
///
/// `Unavailable` is the important one: when the store cannot be reached
/// the engine must fail closed. A transient outage is never a license to
/// evaluate rules against an empty history.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("Ledger query failed: {0}")]
    QueryFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

//! Engine errors

use amlguard_ledger::LedgerError;
use thiserror::Error;

/// Errors from the AML engine.
///
/// Rule evaluation, scoring, classification and report rendering are total
/// functions; the only failure modes are bad input, bad configuration, and
/// an unreachable ledger. The last one is deliberately loud: a caller that
/// sees `DataUnavailable` must block the underlying transaction rather
/// than proceed without a risk check.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid transaction input: {0}")]
    Validation(String),

    #[error("Transaction history unavailable, failing closed: {0}")]
    DataUnavailable(#[from] LedgerError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

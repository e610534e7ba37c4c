//! AmlGuard Ledger - the engine's only I/O boundary
//!
//! The AML engine never owns financial state. It reads committed
//! transaction history through the narrow [`LedgerQuery`] contract and
//! nothing else. Persistence, double-entry correctness and transfer
//! atomicity belong to the store behind this trait.
//!
//! # Key Types
//! - `TransactionRecord`: one committed transaction as the engine sees it
//! - `LedgerQuery`: async history query, the substitution seam for a real store
//! - `InMemoryLedger`: reference implementation for tests and embedding
//! - `LedgerError::Unavailable`: the fail-closed signal - callers must
//!   block the transaction, never assume zero activity

pub mod error;
pub mod store;
pub mod transaction;

pub use error::{LedgerError, LedgerResult};
pub use store::{InMemoryLedger, LedgerQuery};
pub use transaction::{TransactionRecord, TransactionStatus};

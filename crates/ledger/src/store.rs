//! The `LedgerQuery` boundary and its in-memory reference implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::transaction::TransactionRecord;

/// Read-side history query against the external transaction store.
///
/// This is the engine's substitution seam: production wires a database or
/// service client behind it, tests wire [`InMemoryLedger`]. Implementations
/// must be idempotent and side-effect free, and must return
/// [`LedgerError::Unavailable`] rather than an empty result when the store
/// cannot be reached.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    /// All of the user's transactions with `created_at` in `[from, to]`,
    /// regardless of settlement status. Callers filter on status.
    async fn transactions_in_range(
        &self,
        user_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> LedgerResult<Vec<TransactionRecord>>;
}

/// In-memory transaction store.
///
/// Used by tests and by embedders that feed history in from elsewhere.
/// Interior mutability so the store can be shared behind an `Arc` while
/// the engine holds it as a `dyn LedgerQuery`.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    by_user: RwLock<HashMap<String, Vec<TransactionRecord>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed transaction
    pub fn record(&self, tx: TransactionRecord) {
        let mut by_user = self.by_user.write().expect("ledger lock poisoned");
        by_user.entry(tx.user_id.clone()).or_default().push(tx);
    }

    /// Number of stored records for a user
    pub fn count_for(&self, user_id: &str) -> usize {
        let by_user = self.by_user.read().expect("ledger lock poisoned");
        by_user.get(user_id).map(Vec::len).unwrap_or(0)
    }
}

#[async_trait]
impl LedgerQuery for InMemoryLedger {
    async fn transactions_in_range(
        &self,
        user_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> LedgerResult<Vec<TransactionRecord>> {
        let by_user = self
            .by_user
            .read()
            .map_err(|e| LedgerError::QueryFailed(e.to_string()))?;

        Ok(by_user
            .get(user_id)
            .map(|txs| {
                txs.iter()
                    .filter(|tx| tx.created_at >= from && tx.created_at <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

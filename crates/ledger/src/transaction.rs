//! Committed transaction records, as the risk engine reads them

use amlguard_core::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settlement state of a committed transaction.
///
/// Only `Completed` transactions count toward activity patterns; failed
/// and pending movements never moved money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Reversed,
}

/// One transaction as projected from the external store.
///
/// This is a read-side view: the engine never writes these, and the
/// double-entry detail (postings, accounts, balances) stays behind the
/// ledger boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Store-assigned transaction id
    pub id: String,
    /// User who initiated the transaction
    pub user_id: String,
    /// Moved amount
    pub amount: Amount,
    /// Settlement state
    pub status: TransactionStatus,
    /// Commit time in the store
    pub created_at: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        amount: Amount,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            amount,
            status: TransactionStatus::Completed,
            created_at,
        }
    }

    /// Whether this record counts toward activity windows
    pub fn is_settled(&self) -> bool {
        self.status == TransactionStatus::Completed
    }
}

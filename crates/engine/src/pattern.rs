//! Trailing-window activity patterns
//!
//! A `TransactionPattern` summarizes a user's settled activity over the
//! trailing 24h/7d/30d windows relative to "now". It is a pure read-side
//! projection: built fresh for each evaluation, never mutated, never
//! persisted.
//!
//! Counts and totals are exclusive of the transaction under evaluation -
//! the pattern describes committed history only. Rules that need the
//! proposed amount add it explicitly.

use std::sync::Arc;

use amlguard_ledger::LedgerQuery;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// Count and total over one trailing window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub count: u32,
    pub total_amount: Decimal,
}

impl WindowSummary {
    /// Average transaction size; zero-count windows average to the total
    /// (i.e. zero), never divide by zero.
    pub fn average_size(&self) -> Decimal {
        self.total_amount / Decimal::from(self.count.max(1))
    }
}

/// A user's settled activity over the trailing 24h/7d/30d windows.
///
/// Windows are nested scans over the same record set, so
/// `last_30d >= last_7d >= last_24h` holds by construction for both
/// counts and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPattern {
    pub user_id: String,
    pub last_24h: WindowSummary,
    pub last_7d: WindowSummary,
    pub last_30d: WindowSummary,
}

impl TransactionPattern {
    /// An all-zero pattern for a user with no settled history
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            last_24h: WindowSummary::default(),
            last_7d: WindowSummary::default(),
            last_30d: WindowSummary::default(),
        }
    }
}

/// Builds `TransactionPattern`s from the external ledger.
///
/// The only component in the engine that performs I/O. Idempotent and
/// side-effect free; a `LedgerError` propagates unchanged so the caller
/// fails closed instead of evaluating rules against phantom-zero history.
pub struct PatternAggregator {
    ledger: Arc<dyn LedgerQuery>,
}

impl PatternAggregator {
    pub fn new(ledger: Arc<dyn LedgerQuery>) -> Self {
        Self { ledger }
    }

    /// Summarize the user's settled activity in the three trailing
    /// windows ending at `as_of`.
    ///
    /// One 30-day ledger query; the 7d and 24h windows are carved out of
    /// the same result set, which also makes the nesting invariant
    /// unconditional.
    pub async fn aggregate(
        &self,
        user_id: &str,
        as_of: DateTime<Utc>,
    ) -> EngineResult<TransactionPattern> {
        let from = as_of - Duration::days(30);
        let records = self
            .ledger
            .transactions_in_range(user_id, from, as_of)
            .await?;

        let day_edge = as_of - Duration::hours(24);
        let week_edge = as_of - Duration::days(7);

        let mut pattern = TransactionPattern::empty(user_id);
        for record in records.iter().filter(|r| r.is_settled()) {
            let amount = record.amount.value();

            pattern.last_30d.count += 1;
            pattern.last_30d.total_amount += amount;

            if record.created_at >= week_edge {
                pattern.last_7d.count += 1;
                pattern.last_7d.total_amount += amount;
            }
            if record.created_at >= day_edge {
                pattern.last_24h.count += 1;
                pattern.last_24h.total_amount += amount;
            }
        }

        tracing::debug!(
            user_id,
            count_24h = pattern.last_24h.count,
            count_7d = pattern.last_7d.count,
            count_30d = pattern.last_30d.count,
            "Aggregated transaction pattern"
        );

        Ok(pattern)
    }
}

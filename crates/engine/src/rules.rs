//! Regulatory rule evaluation
//!
//! Six heuristics over (proposed amount, activity pattern). All applicable
//! rules fire independently in one pass - a single transaction can raise
//! zero to six alerts, and the evaluator never short-circuits.
//!
//! Window counts and totals are exclusive of the proposed transaction;
//! rules that reason about the post-commit state add the proposed amount
//! themselves (the running-total limits below). Count-based rules compare
//! the prior count.

use amlguard_core::Amount;
use chrono::{DateTime, Utc};

use crate::alert::{AlertSeverity, AlertType, AmlAlert};
use crate::config::EngineConfig;
use crate::pattern::TransactionPattern;

/// Stateless rule evaluator.
///
/// Deterministic given a fixed threshold configuration: same amount and
/// pattern, same alerts (up to generated ids).
pub struct RuleEvaluator {
    config: EngineConfig,
}

impl RuleEvaluator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a proposed transaction against all rules.
    ///
    /// `amount` is already validated positive (`Amount::positive` at the
    /// engine entry), so this is a total function. Alerts are returned in
    /// fixed rule order.
    pub fn evaluate(
        &self,
        amount: Amount,
        pattern: &TransactionPattern,
        as_of: DateTime<Utc>,
    ) -> Vec<AmlAlert> {
        let cfg = &self.config;
        let value = amount.value();
        let user_id = pattern.user_id.as_str();
        let mut alerts = Vec::new();

        // Rule: large transaction, severity laddered by size
        if value >= cfg.large_tx_threshold {
            let severity = if value >= cfg.large_tx_critical {
                AlertSeverity::Critical
            } else if value >= cfg.large_tx_high {
                AlertSeverity::High
            } else {
                AlertSeverity::Medium
            };
            alerts.push(
                AmlAlert::new(
                    user_id,
                    AlertType::LargeTransaction,
                    severity,
                    format!("Large transaction of ${value} detected"),
                    as_of,
                )
                .with_amount(value),
            );
        }

        // Rule: 24h running total (prior total + proposed amount)
        let daily_total = pattern.last_24h.total_amount + value;
        if daily_total > cfg.daily_total_limit {
            alerts.push(
                AmlAlert::new(
                    user_id,
                    AlertType::UnusualPattern,
                    AlertSeverity::High,
                    format!(
                        "Daily transaction total of ${daily_total} exceeds ${} limit",
                        cfg.daily_total_limit
                    ),
                    as_of,
                )
                .with_amount(value),
            );
        }

        // Rule: 7d running total
        let weekly_total = pattern.last_7d.total_amount + value;
        if weekly_total > cfg.weekly_total_limit {
            alerts.push(
                AmlAlert::new(
                    user_id,
                    AlertType::UnusualPattern,
                    AlertSeverity::High,
                    format!(
                        "Weekly transaction total of ${weekly_total} exceeds ${} limit",
                        cfg.weekly_total_limit
                    ),
                    as_of,
                )
                .with_amount(value),
            );
        }

        // Rule: 30d running total
        let monthly_total = pattern.last_30d.total_amount + value;
        if monthly_total > cfg.monthly_total_limit {
            alerts.push(
                AmlAlert::new(
                    user_id,
                    AlertType::UnusualPattern,
                    AlertSeverity::Critical,
                    format!(
                        "Monthly transaction total of ${monthly_total} exceeds ${} limit",
                        cfg.monthly_total_limit
                    ),
                    as_of,
                )
                .with_amount(value),
            );
        }

        // Rule: structuring - amount parked just under the reporting
        // threshold, with repeated prior activity in the same day
        if value >= cfg.structuring_floor
            && value < cfg.large_tx_threshold
            && pattern.last_24h.count >= cfg.structuring_min_count
        {
            alerts.push(
                AmlAlert::new(
                    user_id,
                    AlertType::Structuring,
                    AlertSeverity::High,
                    format!(
                        "Possible structuring: ${value} just below ${} reporting threshold \
                         after {} prior transactions in 24 hours",
                        cfg.large_tx_threshold, pattern.last_24h.count
                    ),
                    as_of,
                )
                .with_amount(value),
            );
        }

        // Rule: rapid movement - the proposed transaction would be at
        // least the (count+1)-th in 24 hours
        if pattern.last_24h.count >= cfg.rapid_movement_count {
            alerts.push(
                AmlAlert::new(
                    user_id,
                    AlertType::RapidMovement,
                    AlertSeverity::Medium,
                    format!(
                        "{} transactions in 24 hours including the proposed one",
                        pattern.last_24h.count + 1
                    ),
                    as_of,
                )
                .with_amount(value),
            );
        }

        alerts
    }
}

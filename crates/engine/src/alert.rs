//! Typed AML alerts produced by rule evaluation
//!
//! Alerts are created in `Pending` status; status transitions belong to
//! the case-management workflow downstream, not to the engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Which regulatory heuristic fired
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    LargeTransaction,
    RapidMovement,
    Structuring,
    UnusualPattern,
    HighRiskCountry,
}

/// Alert severity - ordered from lowest to highest
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Case-management state of an alert
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    Pending,
    Reviewed,
    Cleared,
    Reported,
}

/// One alert raised against a proposed transaction.
///
/// The description embeds the computed figures (running totals, counts) so
/// the alert is self-explanatory without re-querying the pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmlAlert {
    pub id: Uuid,
    pub user_id: String,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub description: String,
    pub transaction_id: Option<String>,
    pub amount: Option<Decimal>,
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
}

impl AmlAlert {
    /// Create a fresh alert in `Pending` status
    pub fn new(
        user_id: impl Into<String>,
        alert_type: AlertType,
        severity: AlertSeverity,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            alert_type,
            severity,
            description: description.into(),
            transaction_id: None,
            amount: None,
            timestamp,
            status: AlertStatus::Pending,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_alert_is_pending() {
        let alert = AmlAlert::new(
            "USER-1",
            AlertType::LargeTransaction,
            AlertSeverity::Critical,
            "Large transaction: $60000",
            Utc::now(),
        );
        assert_eq!(alert.status, AlertStatus::Pending);
        assert!(alert.amount.is_none());
        assert!(alert.transaction_id.is_none());
    }

    #[test]
    fn test_alert_ids_unique() {
        let now = Utc::now();
        let a = AmlAlert::new("U", AlertType::Structuring, AlertSeverity::High, "x", now);
        let b = AmlAlert::new("U", AlertType::Structuring, AlertSeverity::High, "x", now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Low < AlertSeverity::Medium);
        assert!(AlertSeverity::Medium < AlertSeverity::High);
        assert!(AlertSeverity::High < AlertSeverity::Critical);
    }

    #[test]
    fn test_type_display_screaming_snake() {
        assert_eq!(AlertType::LargeTransaction.to_string(), "LARGE_TRANSACTION");
        assert_eq!(AlertType::HighRiskCountry.to_string(), "HIGH_RISK_COUNTRY");
        assert_eq!(AlertSeverity::Critical.to_string(), "CRITICAL");
        assert_eq!(AlertStatus::Pending.to_string(), "PENDING");
    }

    #[test]
    fn test_alert_serde() {
        let alert = AmlAlert::new(
            "USER-1",
            AlertType::RapidMovement,
            AlertSeverity::Medium,
            "6 transactions in 24 hours",
            Utc::now(),
        )
        .with_amount(dec!(9500))
        .with_transaction_id("TX-9");

        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("RAPID_MOVEMENT"));
        assert!(json.contains("MEDIUM"));
        assert!(json.contains("TX-9"));

        let parsed: AmlAlert = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, alert);
    }
}

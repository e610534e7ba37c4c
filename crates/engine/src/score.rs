//! Risk scoring, compliance bands and the EDD gate
//!
//! The scorer is an additive model over the 30d volume, 7d frequency,
//! account age and average transaction size, clamped to 0-100. Bands and
//! the EDD decision are pure mappings over the score and pattern.

use amlguard_core::Amount;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::EngineConfig;
use crate::pattern::TransactionPattern;

// Additive contributions; thresholds live in EngineConfig
const VOLUME_CRITICAL_POINTS: u8 = 40;
const VOLUME_HIGH_POINTS: u8 = 25;
const VOLUME_ELEVATED_POINTS: u8 = 15;
const FREQ_CRITICAL_POINTS: u8 = 30;
const FREQ_HIGH_POINTS: u8 = 20;
const FREQ_ELEVATED_POINTS: u8 = 10;
const NEW_ACCOUNT_POINTS: u8 = 20;
const YOUNG_ACCOUNT_POINTS: u8 = 10;
const IRREGULAR_PATTERN_POINTS: u8 = 10;

/// Composite risk score in `[0, 100]`.
///
/// Total over non-negative inputs; the average-size term guards the
/// zero-transaction pattern with `max(count, 1)`.
pub fn risk_score(
    pattern: &TransactionPattern,
    account_age_days: i64,
    config: &EngineConfig,
) -> u8 {
    // Volume tier (30d total)
    let monthly = pattern.last_30d.total_amount;
    let volume_points: u8 = if monthly > config.score_volume_critical {
        VOLUME_CRITICAL_POINTS
    } else if monthly > config.score_volume_high {
        VOLUME_HIGH_POINTS
    } else if monthly > config.score_volume_elevated {
        VOLUME_ELEVATED_POINTS
    } else {
        0
    };

    // Frequency tier (7d count)
    let weekly_count = pattern.last_7d.count;
    let frequency_points: u8 = if weekly_count > config.score_freq_critical {
        FREQ_CRITICAL_POINTS
    } else if weekly_count > config.score_freq_high {
        FREQ_HIGH_POINTS
    } else if weekly_count > config.score_freq_elevated {
        FREQ_ELEVATED_POINTS
    } else {
        0
    };

    // Account age
    let age_points: u8 = if account_age_days < config.new_account_days {
        NEW_ACCOUNT_POINTS
    } else if account_age_days < config.young_account_days {
        YOUNG_ACCOUNT_POINTS
    } else {
        0
    };

    // Pattern irregularity: unusually large average transaction size
    let irregularity_points: u8 = if pattern.last_30d.average_size() > config.irregular_avg_size {
        IRREGULAR_PATTERN_POINTS
    } else {
        0
    };

    let score = u32::from(volume_points)
        + u32::from(frequency_points)
        + u32::from(age_points)
        + u32::from(irregularity_points);

    score.min(100) as u8
}

/// Compliance band for a risk score.
///
/// Bands are evaluated in ascending order, first match wins. Each band
/// carries a fixed advisory message and an opaque display color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Compliant,
    Monitoring,
    ReviewRequired,
    HighRisk,
}

impl ComplianceStatus {
    /// Classify a score against the configured band edges
    pub fn from_score(score: u8, config: &EngineConfig) -> Self {
        if score < config.band_compliant_below {
            ComplianceStatus::Compliant
        } else if score < config.band_monitoring_below {
            ComplianceStatus::Monitoring
        } else if score < config.band_review_below {
            ComplianceStatus::ReviewRequired
        } else {
            ComplianceStatus::HighRisk
        }
    }

    /// Fixed advisory message for compliance officers
    pub fn message(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Account activity within normal parameters",
            ComplianceStatus::Monitoring => "Elevated activity, continue automated monitoring",
            ComplianceStatus::ReviewRequired => "Manual compliance review required",
            ComplianceStatus::HighRisk => "High risk profile, escalate to compliance officer",
        }
    }

    /// Opaque display token; consumers map it to their own palette
    pub fn color_token(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "green",
            ComplianceStatus::Monitoring => "yellow",
            ComplianceStatus::ReviewRequired => "orange",
            ComplianceStatus::HighRisk => "red",
        }
    }
}

/// Outcome of scoring one proposed transaction. Ephemeral, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub status: ComplianceStatus,
    pub requires_edd: bool,
}

impl RiskAssessment {
    /// Score, classify and gate in one step
    pub fn compute(
        amount: Amount,
        pattern: &TransactionPattern,
        account_age_days: i64,
        config: &EngineConfig,
    ) -> Self {
        let score = risk_score(pattern, account_age_days, config);
        Self {
            score,
            status: ComplianceStatus::from_score(score, config),
            requires_edd: requires_edd(amount, pattern, score, config),
        }
    }
}

/// Enhanced-due-diligence gate: a pure OR of independent conditions -
/// any one alone is sufficient.
pub fn requires_edd(
    amount: Amount,
    pattern: &TransactionPattern,
    score: u8,
    config: &EngineConfig,
) -> bool {
    amount.value() >= config.edd_amount_threshold
        || pattern.last_30d.total_amount >= config.edd_monthly_total
        || score >= config.edd_score_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::WindowSummary;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn pattern_30d(count: u32, total: Decimal) -> TransactionPattern {
        let mut pattern = TransactionPattern::empty("USER-1");
        pattern.last_30d = WindowSummary {
            count,
            total_amount: total,
        };
        pattern
    }

    #[test]
    fn test_zero_pattern_old_account_scores_zero() {
        let pattern = TransactionPattern::empty("USER-1");
        assert_eq!(risk_score(&pattern, 365, &config()), 0);
    }

    #[test]
    fn test_zero_pattern_day_zero_account_scores_age_only() {
        // Boundary: age 0, all-zero pattern, score is exactly the
        // new-account contribution
        let pattern = TransactionPattern::empty("USER-1");
        assert_eq!(risk_score(&pattern, 0, &config()), 20);
    }

    #[test]
    fn test_volume_tiers() {
        let cfg = config();
        assert_eq!(risk_score(&pattern_30d(10, dec!(25_000)), 365, &cfg), 0);
        // 26000/10 = 2600 avg, no irregularity; > 25k tier
        assert_eq!(risk_score(&pattern_30d(10, dec!(26_000)), 365, &cfg), 15);
        assert_eq!(risk_score(&pattern_30d(20, dec!(60_000)), 365, &cfg), 25);
        assert_eq!(risk_score(&pattern_30d(30, dec!(120_000)), 365, &cfg), 40);
    }

    #[test]
    fn test_frequency_tiers() {
        let cfg = config();
        let mut pattern = TransactionPattern::empty("USER-1");

        pattern.last_7d.count = 5;
        assert_eq!(risk_score(&pattern, 365, &cfg), 0);
        pattern.last_7d.count = 6;
        assert_eq!(risk_score(&pattern, 365, &cfg), 10);
        pattern.last_7d.count = 11;
        assert_eq!(risk_score(&pattern, 365, &cfg), 20);
        pattern.last_7d.count = 21;
        assert_eq!(risk_score(&pattern, 365, &cfg), 30);
    }

    #[test]
    fn test_account_age_tiers() {
        let cfg = config();
        let pattern = TransactionPattern::empty("USER-1");
        assert_eq!(risk_score(&pattern, 6, &cfg), 20);
        assert_eq!(risk_score(&pattern, 7, &cfg), 10);
        assert_eq!(risk_score(&pattern, 29, &cfg), 10);
        assert_eq!(risk_score(&pattern, 30, &cfg), 0);
    }

    #[test]
    fn test_irregular_average_size() {
        let cfg = config();
        // 4 transactions averaging 5500 - irregular (+10), volume tier 0
        let pattern = pattern_30d(4, dec!(22_000));
        assert_eq!(risk_score(&pattern, 365, &cfg), 10);

        // exactly 5000 average is not irregular
        let pattern = pattern_30d(4, dec!(20_000));
        assert_eq!(risk_score(&pattern, 365, &cfg), 0);
    }

    #[test]
    fn test_score_clamped_at_100() {
        let cfg = config();
        let mut pattern = pattern_30d(100, dec!(1_000_000)); // 40 + irregular 10
        pattern.last_7d.count = 50; // 30
        let score = risk_score(&pattern, 0, &cfg); // age 20
        assert_eq!(score, 100); // 40+30+20+10 = 100, clamp holds the cap
        assert!(score <= 100);
    }

    #[test]
    fn test_score_monotonic_in_monthly_volume() {
        let cfg = config();
        let mut previous = 0;
        for total in [
            dec!(0),
            dec!(10_000),
            dec!(26_000),
            dec!(60_000),
            dec!(120_000),
            dec!(500_000),
        ] {
            let score = risk_score(&pattern_30d(10, total), 365, &cfg);
            assert!(
                score >= previous,
                "score dropped from {previous} to {score} at total {total}"
            );
            previous = score;
        }
    }

    #[test]
    fn test_band_classification_edges() {
        let cfg = config();
        assert_eq!(
            ComplianceStatus::from_score(0, &cfg),
            ComplianceStatus::Compliant
        );
        assert_eq!(
            ComplianceStatus::from_score(29, &cfg),
            ComplianceStatus::Compliant
        );
        assert_eq!(
            ComplianceStatus::from_score(30, &cfg),
            ComplianceStatus::Monitoring
        );
        assert_eq!(
            ComplianceStatus::from_score(49, &cfg),
            ComplianceStatus::Monitoring
        );
        assert_eq!(
            ComplianceStatus::from_score(50, &cfg),
            ComplianceStatus::ReviewRequired
        );
        assert_eq!(
            ComplianceStatus::from_score(69, &cfg),
            ComplianceStatus::ReviewRequired
        );
        assert_eq!(
            ComplianceStatus::from_score(70, &cfg),
            ComplianceStatus::HighRisk
        );
        assert_eq!(
            ComplianceStatus::from_score(100, &cfg),
            ComplianceStatus::HighRisk
        );
    }

    #[test]
    fn test_band_metadata() {
        assert_eq!(ComplianceStatus::HighRisk.color_token(), "red");
        assert!(ComplianceStatus::ReviewRequired.message().contains("review"));
        assert_eq!(ComplianceStatus::HighRisk.to_string(), "HIGH_RISK");
    }

    #[test]
    fn test_edd_each_condition_alone_sufficient() {
        let cfg = config();
        let quiet = TransactionPattern::empty("USER-1");
        let small = Amount::positive(dec!(100)).unwrap();

        // amount alone
        assert!(requires_edd(
            Amount::positive(dec!(50_000)).unwrap(),
            &quiet,
            0,
            &cfg
        ));
        // monthly total alone
        assert!(requires_edd(small, &pattern_30d(50, dec!(100_000)), 0, &cfg));
        // score alone (tautology: any score >= 70 forces EDD)
        for score in [70, 85, 100] {
            assert!(requires_edd(small, &quiet, score, &cfg));
        }
        // none
        assert!(!requires_edd(small, &quiet, 69, &cfg));
    }

    #[test]
    fn test_assessment_compute_fresh_account_scenario() {
        // 60k deposit, 2-day-old account, no prior history.
        // The pattern excludes the in-flight transaction, so volume
        // contributes nothing yet; age contributes 20.
        let cfg = config();
        let amount = Amount::positive(dec!(60_000)).unwrap();
        let assessment =
            RiskAssessment::compute(amount, &TransactionPattern::empty("USER-1"), 2, &cfg);

        assert_eq!(assessment.score, 20);
        assert_eq!(assessment.status, ComplianceStatus::Compliant);
        // amount >= 50k forces EDD regardless of score
        assert!(assessment.requires_edd);
    }
}

//! Engine configuration with configurable thresholds
//!
//! Every regulatory threshold is configurable via file/env, not hardcoded,
//! so jurisdictions can tune limits without recompilation. Defaults match
//! the US BSA/FinCEN-style limits the rule set was designed around.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for the AML engine.
///
/// All thresholds can be overridden via a JSON config file; missing fields
/// fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // === Rule thresholds ===
    /// Large transaction reporting threshold (MEDIUM severity)
    #[serde(default = "default_large_tx_threshold")]
    pub large_tx_threshold: Decimal,

    /// Large transaction HIGH severity escalation
    #[serde(default = "default_large_tx_high")]
    pub large_tx_high: Decimal,

    /// Large transaction CRITICAL severity escalation
    #[serde(default = "default_large_tx_critical")]
    pub large_tx_critical: Decimal,

    /// 24h running-total limit (prior total + proposed amount)
    #[serde(default = "default_daily_total_limit")]
    pub daily_total_limit: Decimal,

    /// 7d running-total limit
    #[serde(default = "default_weekly_total_limit")]
    pub weekly_total_limit: Decimal,

    /// 30d running-total limit
    #[serde(default = "default_monthly_total_limit")]
    pub monthly_total_limit: Decimal,

    /// Lower edge of the structuring band; upper edge is
    /// `large_tx_threshold` (amounts parked just under the reporting line)
    #[serde(default = "default_structuring_floor")]
    pub structuring_floor: Decimal,

    /// Prior 24h transaction count required for a structuring alert
    #[serde(default = "default_structuring_min_count")]
    pub structuring_min_count: u32,

    /// Prior 24h transaction count that counts as rapid movement
    #[serde(default = "default_rapid_movement_count")]
    pub rapid_movement_count: u32,

    // === Scoring tiers ===
    /// 30d volume above this adds the top volume contribution (+40)
    #[serde(default = "default_monthly_total_limit")]
    pub score_volume_critical: Decimal,

    /// 30d volume above this adds +25
    #[serde(default = "default_weekly_total_limit")]
    pub score_volume_high: Decimal,

    /// 30d volume above this adds +15
    #[serde(default = "default_large_tx_high")]
    pub score_volume_elevated: Decimal,

    /// 7d count above this adds +30
    #[serde(default = "default_freq_critical")]
    pub score_freq_critical: u32,

    /// 7d count above this adds +20
    #[serde(default = "default_freq_high")]
    pub score_freq_high: u32,

    /// 7d count above this adds +10
    #[serde(default = "default_freq_elevated")]
    pub score_freq_elevated: u32,

    /// Account age considered brand new (+20), in days
    #[serde(default = "default_new_account_days")]
    pub new_account_days: i64,

    /// Account age considered young (+10), in days
    #[serde(default = "default_young_account_days")]
    pub young_account_days: i64,

    /// Average 30d transaction size above this adds +10
    #[serde(default = "default_irregular_avg_size")]
    pub irregular_avg_size: Decimal,

    // === Compliance bands (ascending, first match wins) ===
    /// Scores below this are COMPLIANT
    #[serde(default = "default_band_compliant")]
    pub band_compliant_below: u8,

    /// Scores below this are MONITORING
    #[serde(default = "default_band_monitoring")]
    pub band_monitoring_below: u8,

    /// Scores below this are REVIEW_REQUIRED; at or above, HIGH_RISK
    #[serde(default = "default_band_review")]
    pub band_review_below: u8,

    // === Enhanced due diligence ===
    /// Single amount at or above this forces EDD
    #[serde(default = "default_large_tx_critical")]
    pub edd_amount_threshold: Decimal,

    /// 30d total at or above this forces EDD
    #[serde(default = "default_monthly_total_limit")]
    pub edd_monthly_total: Decimal,

    /// Risk score at or above this forces EDD
    #[serde(default = "default_band_review")]
    pub edd_score_threshold: u8,
}

// Default value functions for serde
fn default_large_tx_threshold() -> Decimal {
    Decimal::new(10_000, 0)
}

fn default_large_tx_high() -> Decimal {
    Decimal::new(25_000, 0)
}

fn default_large_tx_critical() -> Decimal {
    Decimal::new(50_000, 0)
}

fn default_daily_total_limit() -> Decimal {
    Decimal::new(15_000, 0)
}

fn default_weekly_total_limit() -> Decimal {
    Decimal::new(50_000, 0)
}

fn default_monthly_total_limit() -> Decimal {
    Decimal::new(100_000, 0)
}

fn default_structuring_floor() -> Decimal {
    Decimal::new(9_000, 0)
}

fn default_structuring_min_count() -> u32 {
    2
}

fn default_rapid_movement_count() -> u32 {
    5
}

fn default_freq_critical() -> u32 {
    20
}

fn default_freq_high() -> u32 {
    10
}

fn default_freq_elevated() -> u32 {
    5
}

fn default_new_account_days() -> i64 {
    7
}

fn default_young_account_days() -> i64 {
    30
}

fn default_irregular_avg_size() -> Decimal {
    Decimal::new(5_000, 0)
}

fn default_band_compliant() -> u8 {
    30
}

fn default_band_monitoring() -> u8 {
    50
}

fn default_band_review() -> u8 {
    70
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            large_tx_threshold: default_large_tx_threshold(),
            large_tx_high: default_large_tx_high(),
            large_tx_critical: default_large_tx_critical(),
            daily_total_limit: default_daily_total_limit(),
            weekly_total_limit: default_weekly_total_limit(),
            monthly_total_limit: default_monthly_total_limit(),
            structuring_floor: default_structuring_floor(),
            structuring_min_count: default_structuring_min_count(),
            rapid_movement_count: default_rapid_movement_count(),
            score_volume_critical: default_monthly_total_limit(),
            score_volume_high: default_weekly_total_limit(),
            score_volume_elevated: default_large_tx_high(),
            score_freq_critical: default_freq_critical(),
            score_freq_high: default_freq_high(),
            score_freq_elevated: default_freq_elevated(),
            new_account_days: default_new_account_days(),
            young_account_days: default_young_account_days(),
            irregular_avg_size: default_irregular_avg_size(),
            band_compliant_below: default_band_compliant(),
            band_monitoring_below: default_band_monitoring(),
            band_review_below: default_band_review(),
            edd_amount_threshold: default_large_tx_critical(),
            edd_monthly_total: default_monthly_total_limit(),
            edd_score_threshold: default_band_review(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file, then validate it.
    pub fn from_file(path: &std::path::Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Configuration(format!("read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| EngineError::Configuration(format!("parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the threshold set.
    ///
    /// A config that parses but has inverted bands would misclassify every
    /// transaction, so inconsistencies are rejected at load time.
    pub fn validate(&self) -> EngineResult<()> {
        let positive = [
            ("large_tx_threshold", self.large_tx_threshold),
            ("large_tx_high", self.large_tx_high),
            ("large_tx_critical", self.large_tx_critical),
            ("daily_total_limit", self.daily_total_limit),
            ("weekly_total_limit", self.weekly_total_limit),
            ("monthly_total_limit", self.monthly_total_limit),
            ("structuring_floor", self.structuring_floor),
            ("irregular_avg_size", self.irregular_avg_size),
            ("edd_amount_threshold", self.edd_amount_threshold),
            ("edd_monthly_total", self.edd_monthly_total),
        ];
        for (name, value) in positive {
            if value <= Decimal::ZERO {
                return Err(EngineError::Configuration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.structuring_floor < self.large_tx_threshold
            && self.large_tx_threshold < self.large_tx_high
            && self.large_tx_high < self.large_tx_critical)
        {
            return Err(EngineError::Configuration(format!(
                "large-transaction ladder must ascend: {} < {} < {} < {}",
                self.structuring_floor,
                self.large_tx_threshold,
                self.large_tx_high,
                self.large_tx_critical
            )));
        }

        if !(self.band_compliant_below < self.band_monitoring_below
            && self.band_monitoring_below < self.band_review_below
            && self.band_review_below <= 100)
        {
            return Err(EngineError::Configuration(format!(
                "compliance bands must ascend within 0..=100: {} < {} < {}",
                self.band_compliant_below, self.band_monitoring_below, self.band_review_below
            )));
        }

        if !(self.score_freq_elevated < self.score_freq_high
            && self.score_freq_high < self.score_freq_critical)
        {
            return Err(EngineError::Configuration(format!(
                "frequency tiers must ascend: {} < {} < {}",
                self.score_freq_elevated, self.score_freq_high, self.score_freq_critical
            )));
        }

        if !(self.score_volume_elevated < self.score_volume_high
            && self.score_volume_high < self.score_volume_critical)
        {
            return Err(EngineError::Configuration(format!(
                "volume tiers must ascend: {} < {} < {}",
                self.score_volume_elevated, self.score_volume_high, self.score_volume_critical
            )));
        }

        if self.edd_score_threshold > 100 {
            return Err(EngineError::Configuration(format!(
                "edd_score_threshold must be within 0..=100, got {}",
                self.edd_score_threshold
            )));
        }

        if self.new_account_days >= self.young_account_days {
            return Err(EngineError::Configuration(format!(
                "new_account_days ({}) must be below young_account_days ({})",
                self.new_account_days, self.young_account_days
            )));
        }

        Ok(())
    }
}

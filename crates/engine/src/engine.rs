//! AML engine orchestrator
//!
//! Runs the full evaluation flow for one proposed transaction:
//! aggregate history, validate the amount, evaluate rules, score, classify
//! and gate EDD. The engine writes nothing - alerts and assessments go
//! back to the caller, which owns persistence and the evaluate-then-commit
//! ordering.
//!
//! Two transactions for the same user evaluated concurrently each see a
//! pattern excluding the other's in-flight amount. Integrations must
//! serialize evaluate-then-commit per account (per-account lock or
//! single-writer queue); the engine itself is stateless and cannot.

use std::sync::Arc;

use amlguard_core::{Amount, SubjectInfo};
use amlguard_ledger::LedgerQuery;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::alert::{AlertSeverity, AlertType, AmlAlert};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::pattern::{PatternAggregator, TransactionPattern};
use crate::report::SarReport;
use crate::rules::RuleEvaluator;
use crate::score::RiskAssessment;
use crate::screening::{KeywordScreener, PepResult, ScreeningProvider, WatchlistResult};

/// Everything the engine concluded about one proposed transaction
#[derive(Debug, Clone)]
pub struct TransactionCheck {
    /// The history the decision was based on
    pub pattern: TransactionPattern,
    /// Alerts raised by the rule set, in rule order
    pub alerts: Vec<AmlAlert>,
    /// Composite score, band, and EDD gate
    pub assessment: RiskAssessment,
}

/// Outcome of onboarding/periodic subject screening
#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    pub watchlist: WatchlistResult,
    pub pep: PepResult,
    /// Raised when the subject resides in a high-risk jurisdiction
    pub alert: Option<AmlAlert>,
}

/// The AML transaction risk engine.
///
/// Stateless over its explicit inputs; safe to share and to invoke
/// concurrently for different users. The ledger read is the only I/O.
pub struct AmlEngine {
    aggregator: PatternAggregator,
    evaluator: RuleEvaluator,
    screener: Box<dyn ScreeningProvider>,
}

impl AmlEngine {
    /// Create an engine over a ledger with the given threshold config.
    ///
    /// The config is validated up front; an inconsistent threshold set is
    /// a `Configuration` error here, not a misclassification later.
    pub fn new(config: EngineConfig, ledger: Arc<dyn LedgerQuery>) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            aggregator: PatternAggregator::new(ledger),
            evaluator: RuleEvaluator::new(config),
            screener: Box::new(KeywordScreener::new()),
        })
    }

    /// Substitute a real screening provider
    pub fn with_screener(mut self, screener: Box<dyn ScreeningProvider>) -> Self {
        self.screener = screener;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        self.evaluator.config()
    }

    /// Evaluate a proposed transaction as of `now`.
    pub async fn check_transaction(
        &self,
        user_id: &str,
        amount: Decimal,
        account_age_days: i64,
    ) -> EngineResult<TransactionCheck> {
        self.check_transaction_at(user_id, amount, account_age_days, Utc::now())
            .await
    }

    /// Evaluate a proposed transaction as of an explicit timestamp.
    ///
    /// Fails with `Validation` on a non-positive amount and with
    /// `DataUnavailable` when the ledger cannot be reached; the caller
    /// must block the transaction in both cases.
    pub async fn check_transaction_at(
        &self,
        user_id: &str,
        amount: Decimal,
        account_age_days: i64,
        as_of: DateTime<Utc>,
    ) -> EngineResult<TransactionCheck> {
        let amount = Amount::positive(amount)
            .map_err(|e| EngineError::Validation(e.to_string()))?;

        let pattern = self.aggregator.aggregate(user_id, as_of).await?;

        let alerts = self.evaluator.evaluate(amount, &pattern, as_of);
        for alert in &alerts {
            tracing::warn!(
                user_id,
                alert_type = %alert.alert_type,
                severity = %alert.severity,
                description = %alert.description,
                "AML rule triggered"
            );
        }

        let assessment =
            RiskAssessment::compute(amount, &pattern, account_age_days, self.config());
        tracing::info!(
            user_id,
            amount = %amount,
            score = assessment.score,
            status = %assessment.status,
            requires_edd = assessment.requires_edd,
            alerts = alerts.len(),
            "Transaction risk check complete"
        );

        Ok(TransactionCheck {
            pattern,
            alerts,
            assessment,
        })
    }

    /// Screen a subject at onboarding or on a review cycle.
    ///
    /// A watchlist hit additionally raises a `HIGH_RISK_COUNTRY` alert so
    /// the case-management flow picks it up like any rule alert.
    pub fn screen_subject(
        &self,
        user_id: &str,
        full_name: &str,
        country: &str,
        occupation: &str,
    ) -> ScreeningOutcome {
        let watchlist = self.screener.screen_watchlist(full_name, country);
        let pep = self.screener.screen_pep(full_name, occupation);

        let alert = watchlist.is_on_watchlist.then(|| {
            AmlAlert::new(
                user_id,
                AlertType::HighRiskCountry,
                AlertSeverity::High,
                watchlist
                    .reason
                    .clone()
                    .unwrap_or_else(|| format!("High-risk jurisdiction: {country}")),
                Utc::now(),
            )
        });

        ScreeningOutcome {
            watchlist,
            pep,
            alert,
        }
    }

    /// Assemble a suspicious-activity report for a set of alerts.
    ///
    /// `generated_at` is explicit so repeated calls with equal inputs are
    /// byte-identical; pass `Utc::now()` when filing.
    pub fn sar_report(
        &self,
        user_id: &str,
        subject: SubjectInfo,
        alerts: Vec<AmlAlert>,
        generated_at: DateTime<Utc>,
    ) -> SarReport {
        SarReport::build(user_id, subject, alerts, generated_at)
    }
}

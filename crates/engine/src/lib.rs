//! AmlGuard Engine - AML transaction risk engine
//!
//! Given a proposed transaction and a user's committed history, classify
//! the transaction against regulatory heuristics, score the user's risk,
//! decide whether enhanced due diligence is required, and render formal
//! suspicious-activity reports.
//!
//! ## Data flow
//!
//! ```text
//! LedgerQuery (external store)
//!       │
//!       ▼
//! PatternAggregator ──► TransactionPattern
//!       │                      │
//!       │             ┌────────┴─────────┐
//!       │             ▼                  ▼
//!       │       RuleEvaluator       risk_score
//!       │             │             ┌────┴─────┐
//!       │             ▼             ▼          ▼
//!       │        Vec<AmlAlert>  ComplianceStatus  requires_edd
//!       │             │
//!       │             ▼
//!       │         SarReport
//! ```
//!
//! Watchlist/PEP screening sits outside the per-transaction flow; it runs
//! at onboarding or on a review schedule through [`ScreeningProvider`].
//!
//! ## Key Components
//!
//! - [`config::EngineConfig`] - Configurable thresholds (not hardcoded)
//! - [`pattern::PatternAggregator`] - Trailing 24h/7d/30d activity windows
//! - [`rules::RuleEvaluator`] - Regulatory heuristics producing typed alerts
//! - [`score`] - Additive 0-100 risk score, status bands, EDD gate
//! - [`screening::KeywordScreener`] - Placeholder watchlist/PEP matcher
//! - [`report::SarReport`] - Deterministic SAR rendering
//! - [`engine::AmlEngine`] - Orchestrator over the whole flow

pub mod alert;
pub mod config;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod report;
pub mod rules;
pub mod score;
pub mod screening;

pub use alert::{AlertSeverity, AlertStatus, AlertType, AmlAlert};
pub use config::EngineConfig;
pub use engine::{AmlEngine, ScreeningOutcome, TransactionCheck};
pub use error::{EngineError, EngineResult};
pub use pattern::{PatternAggregator, TransactionPattern, WindowSummary};
pub use report::SarReport;
pub use rules::RuleEvaluator;
pub use score::{requires_edd, risk_score, ComplianceStatus, RiskAssessment};
pub use screening::{KeywordScreener, PepResult, ScreeningProvider, WatchlistResult};

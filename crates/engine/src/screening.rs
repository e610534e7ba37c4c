//! Watchlist and PEP screening
//!
//! Keyword matchers standing in for an authoritative sanctions/PEP data
//! provider. The [`ScreeningProvider`] trait is the part that matters:
//! production substitutes a real provider behind it without touching any
//! caller. Screening runs at onboarding or on a review schedule, not per
//! transaction.

use serde::{Deserialize, Serialize};

/// Outcome of a sanctions/jurisdiction screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistResult {
    pub is_on_watchlist: bool,
    pub list_name: Option<String>,
    pub reason: Option<String>,
}

impl WatchlistResult {
    pub fn clear() -> Self {
        Self {
            is_on_watchlist: false,
            list_name: None,
            reason: None,
        }
    }

    pub fn hit(list_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            is_on_watchlist: true,
            list_name: Some(list_name.into()),
            reason: Some(reason.into()),
        }
    }
}

/// Outcome of a politically-exposed-person screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PepResult {
    pub is_pep: bool,
    pub reason: Option<String>,
}

impl PepResult {
    pub fn clear() -> Self {
        Self {
            is_pep: false,
            reason: None,
        }
    }

    pub fn hit(reason: impl Into<String>) -> Self {
        Self {
            is_pep: true,
            reason: Some(reason.into()),
        }
    }
}

/// Screening contract.
///
/// Inputs and output shapes are fixed so a real screening provider can be
/// swapped in; the engine never depends on how matches are produced.
pub trait ScreeningProvider: Send + Sync {
    /// Screen a subject's country of residence against sanctioned /
    /// high-risk jurisdictions.
    fn screen_watchlist(&self, full_name: &str, country: &str) -> WatchlistResult;

    /// Screen a subject's occupation for politically-sensitive roles.
    fn screen_pep(&self, full_name: &str, occupation: &str) -> PepResult;
}

/// Built-in keyword screener.
///
/// Case-insensitive substring match against fixed jurisdiction and role
/// keyword lists. An explicit placeholder for provider integration.
#[derive(Debug, Default)]
pub struct KeywordScreener;

/// FATF-style high-risk and sanctioned jurisdictions
const HIGH_RISK_JURISDICTIONS: &[&str] = &[
    "iran",
    "north korea",
    "syria",
    "cuba",
    "myanmar",
    "afghanistan",
    "yemen",
    "venezuela",
    "russia",
    "belarus",
];

/// Role keywords that indicate a politically exposed person
const PEP_ROLE_KEYWORDS: &[&str] = &[
    "minister",
    "senator",
    "governor",
    "ambassador",
    "president",
    "parliament",
    "judge",
    "general",
    "diplomat",
    "mayor",
];

impl KeywordScreener {
    pub fn new() -> Self {
        Self
    }
}

impl ScreeningProvider for KeywordScreener {
    fn screen_watchlist(&self, full_name: &str, country: &str) -> WatchlistResult {
        let haystack = country.to_lowercase();
        for jurisdiction in HIGH_RISK_JURISDICTIONS {
            if haystack.contains(jurisdiction) {
                tracing::warn!(
                    subject = full_name,
                    country,
                    jurisdiction,
                    "Watchlist screening hit"
                );
                return WatchlistResult::hit(
                    "High-Risk Jurisdiction",
                    format!("Country of residence matches high-risk jurisdiction: {country}"),
                );
            }
        }
        WatchlistResult::clear()
    }

    fn screen_pep(&self, full_name: &str, occupation: &str) -> PepResult {
        let haystack = occupation.to_lowercase();
        for keyword in PEP_ROLE_KEYWORDS {
            if haystack.contains(keyword) {
                tracing::warn!(subject = full_name, occupation, keyword, "PEP screening hit");
                return PepResult::hit(format!(
                    "Occupation indicates politically exposed person: {occupation}"
                ));
            }
        }
        PepResult::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_country_hit() {
        let screener = KeywordScreener::new();
        let result = screener.screen_watchlist("Ali Hosseini", "Iran");

        assert!(result.is_on_watchlist);
        assert_eq!(result.list_name.as_deref(), Some("High-Risk Jurisdiction"));
        assert!(result.reason.unwrap().contains("Iran"));
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let screener = KeywordScreener::new();
        assert!(
            screener
                .screen_watchlist("X", "Islamic Republic of IRAN")
                .is_on_watchlist
        );
        assert!(screener.screen_watchlist("X", "north KOREA").is_on_watchlist);
    }

    #[test]
    fn test_safe_country_clear() {
        let screener = KeywordScreener::new();
        let result = screener.screen_watchlist("Jane Roe", "Portugal");
        assert!(!result.is_on_watchlist);
        assert!(result.list_name.is_none());
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_pep_occupation_hit() {
        let screener = KeywordScreener::new();
        let result = screener.screen_pep("Jane Roe", "Deputy Finance Minister");

        assert!(result.is_pep);
        assert!(result.reason.unwrap().contains("Deputy Finance Minister"));
    }

    #[test]
    fn test_pep_ordinary_occupation_clear() {
        let screener = KeywordScreener::new();
        assert!(!screener.screen_pep("Jane Roe", "Software Engineer").is_pep);
    }

    #[test]
    fn test_provider_is_object_safe() {
        // The trait must stay usable behind a pointer so a real provider
        // can be substituted without changing callers
        let provider: Box<dyn ScreeningProvider> = Box::new(KeywordScreener::new());
        assert!(provider.screen_watchlist("X", "Syria").is_on_watchlist);
    }
}

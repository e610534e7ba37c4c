//! Suspicious Activity Report rendering
//!
//! Fixed-section text document: header, subject identity block,
//! enumerated alerts, summary counts. Rendering is a pure function of the
//! inputs - the generation timestamp is supplied by the caller, so equal
//! inputs produce byte-identical output (golden-test friendly).
//! Persistence of the rendered report is the caller's responsibility.

use std::fmt::Write;

use amlguard_core::SubjectInfo;
use chrono::{DateTime, Utc};

use crate::alert::{AlertSeverity, AmlAlert};

const RULE: &str = "==============================================================";
const SECTION: &str = "--------------------------------------------------------------";

/// A suspicious-activity report ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SarReport {
    pub user_id: String,
    pub subject: SubjectInfo,
    pub alerts: Vec<AmlAlert>,
    pub generated_at: DateTime<Utc>,
}

impl SarReport {
    pub fn build(
        user_id: impl Into<String>,
        subject: SubjectInfo,
        alerts: Vec<AmlAlert>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            subject,
            alerts,
            generated_at,
        }
    }

    /// Render the report as fixed-structure text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Infallible: fmt::Write on String never errors
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{RULE}")?;
        writeln!(out, "SUSPICIOUS ACTIVITY REPORT")?;
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(out, "Subject user ID: {}", self.user_id)?;
        writeln!(out)?;

        writeln!(out, "SUBJECT INFORMATION")?;
        writeln!(out, "{SECTION}")?;
        writeln!(out, "Full name: {}", self.subject.full_name)?;
        writeln!(out, "Email:     {}", self.subject.email)?;
        if let Some(address) = &self.subject.address {
            writeln!(out, "Address:   {address}")?;
        }
        if let Some(id_number) = &self.subject.id_number {
            writeln!(out, "ID number: {id_number}")?;
        }
        writeln!(out)?;

        writeln!(out, "ALERTS ({})", self.alerts.len())?;
        writeln!(out, "{SECTION}")?;
        for (i, alert) in self.alerts.iter().enumerate() {
            writeln!(
                out,
                "{}. [{}] {}",
                i + 1,
                alert.severity,
                alert.alert_type
            )?;
            writeln!(out, "   Description: {}", alert.description)?;
            if let Some(amount) = alert.amount {
                writeln!(out, "   Amount:      ${amount}")?;
            }
            writeln!(
                out,
                "   Raised at:   {}",
                alert.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            )?;
            writeln!(out, "   Status:      {}", alert.status)?;
        }
        writeln!(out)?;

        let critical = self.count_severity(AlertSeverity::Critical);
        let high = self.count_severity(AlertSeverity::High);
        writeln!(out, "SUMMARY")?;
        writeln!(out, "{SECTION}")?;
        writeln!(out, "Total alerts:    {}", self.alerts.len())?;
        writeln!(out, "Critical alerts: {critical}")?;
        writeln!(out, "High alerts:     {high}")?;
        writeln!(out, "{RULE}")?;

        Ok(())
    }

    fn count_severity(&self, severity: AlertSeverity) -> usize {
        self.alerts.iter().filter(|a| a.severity == severity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertType, AmlAlert};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap()
    }

    fn sample_report() -> SarReport {
        let at = fixed_time();
        let alerts = vec![
            AmlAlert::new(
                "USER-7",
                AlertType::LargeTransaction,
                AlertSeverity::Critical,
                "Large transaction of $60000 detected",
                at,
            )
            .with_amount(dec!(60_000)),
            AmlAlert::new(
                "USER-7",
                AlertType::Structuring,
                AlertSeverity::High,
                "Possible structuring: $9500 just below $10000 reporting threshold",
                at,
            )
            .with_amount(dec!(9_500)),
        ];
        let subject = SubjectInfo::new("Jane Roe", "jane@example.com")
            .with_address("1 Main St, Springfield")
            .with_id_number("ID-99213");
        SarReport::build("USER-7", subject, alerts, at)
    }

    #[test]
    fn test_sections_present() {
        let text = sample_report().render();

        assert!(text.contains("SUSPICIOUS ACTIVITY REPORT"));
        assert!(text.contains("Generated: 2024-03-15 12:30:00 UTC"));
        assert!(text.contains("Subject user ID: USER-7"));
        assert!(text.contains("Full name: Jane Roe"));
        assert!(text.contains("ID number: ID-99213"));
        assert!(text.contains("ALERTS (2)"));
        assert!(text.contains("1. [CRITICAL] LARGE_TRANSACTION"));
        assert!(text.contains("2. [HIGH] STRUCTURING"));
        assert!(text.contains("Amount:      $60000"));
        assert!(text.contains("Status:      PENDING"));
        assert!(text.contains("Total alerts:    2"));
        assert!(text.contains("Critical alerts: 1"));
        assert!(text.contains("High alerts:     1"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        assert_eq!(report.render(), report.render());

        // and across equal but separately-built values
        let again = sample_report();
        // ids differ (generated), so compare everything the renderer uses
        // by rendering with the ids removed from the equation: the render
        // output does not include alert ids at all
        assert_eq!(report.render(), again.render());
    }

    #[test]
    fn test_optional_subject_fields_omitted() {
        let report = SarReport::build(
            "USER-8",
            SubjectInfo::new("John Doe", "john@example.com"),
            Vec::new(),
            fixed_time(),
        );
        let text = report.render();

        assert!(!text.contains("Address:"));
        assert!(!text.contains("ID number:"));
        assert!(text.contains("ALERTS (0)"));
        assert!(text.contains("Total alerts:    0"));
    }
}

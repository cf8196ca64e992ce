//! # Screening Report
//!
//! Renders one [`ScreeningOutcome`] into a self-contained JSON document for
//! the compliance file: customer information with the identifier masked,
//! summary counts, match details, risk factors, recommendations and a
//! disclaimer.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kyc_core::{
    CustomerRecord, IdentifierKind, KycError, MatchType, RiskLevel, ScreeningDisposition,
    ScreeningRunId,
};
use kyc_match::MatchVerdict;
use kyc_risk::{RiskSignal, SignalDetail};

use crate::orchestrator::ScreeningOutcome;

/// Report type label.
pub const REPORT_TYPE: &str = "KYC_SCREENING_REPORT";

/// Report format version.
pub const REPORT_VERSION: &str = "1.0";

/// Exact matches listed by name in the recommendations.
const LISTED_EXACT_MATCHES: usize = 3;

const DISCLAIMER: &str = "This report is generated automatically for compliance screening \
purposes. Final decisions should be made by authorized personnel.";

/// Customer block of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSection {
    /// Customer code.
    pub customer_code: String,
    /// Primary-script full name.
    pub full_name: String,
    /// Nationality code.
    pub nationality: String,
    /// Date of birth as supplied.
    pub date_of_birth: Option<String>,
    /// Masked identifier.
    pub identifier: String,
    /// Identifier kind.
    pub identifier_kind: IdentifierKind,
    /// Occupation.
    pub occupation: Option<String>,
}

/// Summary block of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Candidates evaluated.
    pub candidates_evaluated: usize,
    /// Retained matches.
    pub total_matches: usize,
    /// EXACT matches.
    pub exact_matches: usize,
    /// PARTIAL matches.
    pub partial_matches: usize,
    /// Highest retained match score.
    pub highest_match_score: Option<f64>,
    /// Clamped risk score.
    pub risk_score: u32,
    /// Risk level.
    pub risk_level: RiskLevel,
    /// Final disposition.
    pub disposition: ScreeningDisposition,
}

/// Risk block of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSection {
    /// Fired factors in evaluation order.
    pub risk_factors: Vec<String>,
    /// Per-signal counts and penalties.
    pub details: BTreeMap<RiskSignal, SignalDetail>,
    /// Data-quality warnings.
    pub warnings: Vec<String>,
}

/// Complete screening report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// `SCR-YYYYMMDD-HHMMSS` of the generation time.
    pub report_id: String,
    /// Report type label.
    pub report_type: String,
    /// Report format version.
    pub version: String,
    /// Screening run the report describes.
    pub screening_id: ScreeningRunId,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
    /// Customer information.
    pub customer: CustomerSection,
    /// Summary.
    pub summary: ReportSummary,
    /// Retained verdicts.
    pub matches: Vec<MatchVerdict>,
    /// Risk assessment.
    pub risk: RiskSection,
    /// Recommended actions.
    pub recommendations: Vec<String>,
    /// Disclaimer.
    pub disclaimer: String,
}

impl ScreeningReport {
    /// Build the report for `outcome`.
    pub fn build(
        customer: &CustomerRecord,
        outcome: &ScreeningOutcome,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let assessment = &outcome.assessment;
        Self {
            report_id: report_id(generated_at),
            report_type: REPORT_TYPE.to_string(),
            version: REPORT_VERSION.to_string(),
            screening_id: outcome.run_id,
            generated_at,
            customer: CustomerSection {
                customer_code: customer.customer_code.clone(),
                full_name: customer.full_name.clone(),
                nationality: customer.nationality.clone(),
                date_of_birth: customer.date_of_birth.clone(),
                identifier: customer.masked_identifier(),
                identifier_kind: customer.identifier_kind,
                occupation: customer.occupation.clone(),
            },
            summary: ReportSummary {
                candidates_evaluated: outcome.candidates_evaluated,
                total_matches: outcome.verdicts.len(),
                exact_matches: outcome.count(MatchType::Exact),
                partial_matches: outcome.count(MatchType::Partial),
                highest_match_score: outcome.highest_match_score(),
                risk_score: assessment.risk_score,
                risk_level: assessment.risk_level,
                disposition: outcome.disposition,
            },
            matches: outcome.verdicts.clone(),
            risk: RiskSection {
                risk_factors: assessment.risk_factors.clone(),
                details: assessment.details.clone(),
                warnings: assessment.warnings.clone(),
            },
            recommendations: recommendations(
                &outcome.verdicts,
                assessment.risk_level,
                assessment.inconclusive,
            ),
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, KycError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty-printed JSON to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), KycError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?)?;
        tracing::info!(report = %self.report_id, path = %path.display(), "wrote screening report");
        Ok(())
    }
}

/// `SCR-YYYYMMDD-HHMMSS` for `at`.
pub fn report_id(at: DateTime<Utc>) -> String {
    format!("SCR-{}", at.format("%Y%m%d-%H%M%S"))
}

/// Recommended actions for a set of retained verdicts and a risk level.
/// `inconclusive` marks a customer name that could not be screened.
pub fn recommendations(
    verdicts: &[MatchVerdict],
    risk_level: RiskLevel,
    inconclusive: bool,
) -> Vec<String> {
    let mut out = Vec::new();

    if verdicts.is_empty() && inconclusive {
        out.push("Customer name could not be screened - manual name check required".to_string());
    } else if verdicts.is_empty() {
        out.push("No sanctions matches found - proceed with standard onboarding".to_string());
    } else {
        out.push("Sanctions matches detected - immediate review required".to_string());

        let exact: Vec<&MatchVerdict> = verdicts
            .iter()
            .filter(|v| v.match_type == MatchType::Exact)
            .collect();
        if !exact.is_empty() {
            out.push("REJECT customer - exact matches with sanctioned entities".to_string());
            for v in exact.iter().take(LISTED_EXACT_MATCHES) {
                out.push(format!("  - {} ({})", v.entry_name, v.list_source));
            }
        }

        if verdicts.iter().any(|v| v.match_type == MatchType::Partial) {
            out.push("Enhanced due diligence required - partial matches found".to_string());
        }
    }

    match risk_level {
        RiskLevel::High | RiskLevel::Critical => {
            out.push("Request additional verification documents".to_string());
            out.push("Schedule monthly monitoring for the first 6 months".to_string());
            out.push("Escalate to a senior compliance officer for review".to_string());
        }
        RiskLevel::Medium => {
            out.push("Conduct additional verification checks".to_string());
            out.push("Schedule quarterly review".to_string());
        }
        RiskLevel::Low | RiskLevel::VeryLow => {
            out.push("Standard monitoring procedures applicable".to_string());
        }
    }

    out.push("Ensure all customer documents are properly archived".to_string());
    out.push("Schedule next review based on risk level".to_string());
    out
}

//! # Risk Aggregator — Additive Customer Risk Scoring
//!
//! Combines independent risk signals into a bounded score and a level.
//!
//! ## Signals
//!
//! Evaluated in this order; each fired signal adds its penalty, one factor
//! line, and a detail entry:
//!
//! | Signal                        | Penalty                        |
//! |-------------------------------|--------------------------------|
//! | PEP occupation                | `pep_penalty`                  |
//! | High-risk nationality         | `high_risk_country_penalty`    |
//! | EXACT match (per verdict)     | `sanction_match_penalty`       |
//! | PARTIAL match (per verdict)   | `partial_match_penalty`        |
//! | Age above `age_risk_threshold`| 15                             |
//! | Low-cardinality identifier    | `unusual_id_penalty`           |
//! | All-zero identifier           | 20                             |
//!
//! Match penalties compound without limit; the total is clamped to
//! `[0, max_risk_score]` only at the end. Data-quality findings (an
//! unparseable birth date, a failed identifier check, a medium-risk
//! nationality) are reported as warnings and add nothing.
//!
//! A customer name that normalizes to nothing (`"Mr."`, `"..."`) cannot be
//! compared with any entry. The assessment is then marked `inconclusive`
//! and carries [`UNSCREENABLE_NAME_WARNING`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kyc_core::temporal::{age_on, parse_birth_date, today};
use kyc_core::{CustomerRecord, MatchType, RiskLevel, ScreeningConfig};
use kyc_match::{normalize_latin, MatchVerdict};

use crate::signals::{pep_indicator, IdentifierAnomaly, RiskSignal};

/// Penalty for a customer older than the age threshold.
pub const AGE_PENALTY: u32 = 15;

/// Penalty for an identifier made only of zeros.
pub const ZERO_IDENTIFIER_PENALTY: u32 = 20;

/// Warning recorded when the customer name is empty after normalization.
pub const UNSCREENABLE_NAME_WARNING: &str =
    "Customer name is empty after normalization; screening inconclusive";

/// How often a signal fired and what it added in total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalDetail {
    /// Number of times the signal fired.
    pub count: u32,
    /// Total penalty contributed.
    pub penalty: u32,
}

/// Aggregated risk of one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Score clamped to `[0, max_risk_score]`.
    pub risk_score: u32,
    /// Sum of penalties before clamping.
    pub raw_score: u32,
    /// Level derived from `risk_score`.
    pub risk_level: RiskLevel,
    /// One line per fired signal, in evaluation order.
    pub risk_factors: Vec<String>,
    /// Fired signals with their counts and penalties.
    pub details: BTreeMap<RiskSignal, SignalDetail>,
    /// Age in whole years, when the birth date parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Data-quality notes that added no penalty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// The customer name could not be screened.
    #[serde(default)]
    pub inconclusive: bool,
}

impl RiskAssessment {
    /// Whether `signal` fired.
    pub fn fired(&self, signal: RiskSignal) -> bool {
        self.details.contains_key(&signal)
    }
}

/// Running total while signals are evaluated.
#[derive(Default)]
struct Tally {
    raw: u32,
    factors: Vec<String>,
    details: BTreeMap<RiskSignal, SignalDetail>,
    warnings: Vec<String>,
}

impl Tally {
    fn fire(&mut self, signal: RiskSignal, penalty: u32, factor: String) {
        tracing::debug!(?signal, penalty, "risk signal fired");
        self.raw = self.raw.saturating_add(penalty);
        self.factors.push(factor);
        let detail = self.details.entry(signal).or_default();
        detail.count += 1;
        detail.penalty = detail.penalty.saturating_add(penalty);
    }

    fn warn(&mut self, warning: String) {
        tracing::warn!(%warning, "risk input degraded");
        self.warnings.push(warning);
    }
}

/// Stateless aggregator parameterized by the screening configuration.
#[derive(Debug, Clone, Copy)]
pub struct RiskAggregator<'a> {
    config: &'a ScreeningConfig,
}

impl<'a> RiskAggregator<'a> {
    /// Create an aggregator over `config`.
    pub fn new(config: &'a ScreeningConfig) -> Self {
        Self { config }
    }

    /// Score `customer` and its retained `verdicts`, computing age as of
    /// today (UTC).
    pub fn aggregate(
        &self,
        customer: &CustomerRecord,
        verdicts: &[MatchVerdict],
    ) -> RiskAssessment {
        self.aggregate_as_of(customer, verdicts, today())
    }

    /// Score `customer` and its retained `verdicts`, computing age as of
    /// `as_of`.
    pub fn aggregate_as_of(
        &self,
        customer: &CustomerRecord,
        verdicts: &[MatchVerdict],
        as_of: NaiveDate,
    ) -> RiskAssessment {
        let scoring = &self.config.risk_scoring;
        let mut tally = Tally::default();

        let inconclusive = normalize_latin(&customer.full_name).is_empty();
        if inconclusive {
            tally.warn(UNSCREENABLE_NAME_WARNING.to_string());
        }

        if pep_indicator(customer, self.config).is_some() {
            tally.fire(
                RiskSignal::Pep,
                scoring.pep_penalty,
                "PEP - Politically Exposed Person".to_string(),
            );
        }

        let nationality = customer.nationality.trim().to_ascii_uppercase();
        if self.config.is_high_risk_country(&nationality) {
            tally.fire(
                RiskSignal::HighRiskJurisdiction,
                scoring.high_risk_country_penalty,
                format!("High-risk country: {nationality}"),
            );
        } else if self.config.is_medium_risk_country(&nationality) {
            tally.warn(format!("Medium-risk country: {nationality}"));
        }

        for verdict in verdicts {
            match verdict.match_type {
                MatchType::Exact => tally.fire(
                    RiskSignal::ExactMatch,
                    scoring.sanction_match_penalty,
                    format!("Exact sanction match: {}", verdict.entry_name),
                ),
                MatchType::Partial => tally.fire(
                    RiskSignal::PartialMatch,
                    scoring.partial_match_penalty,
                    format!("Partial sanction match: {}", verdict.entry_name),
                ),
                MatchType::NoMatch => {}
            }
        }

        let age = match customer.date_of_birth.as_deref().map(str::trim) {
            Some(dob) if !dob.is_empty() => match parse_birth_date(dob) {
                Some(birth) => age_on(birth, as_of),
                None => {
                    tally.warn(format!("Unrecognized date of birth: {dob:?}"));
                    None
                }
            },
            _ => None,
        };
        if let Some(age) = age.filter(|a| *a > scoring.age_risk_threshold) {
            tally.fire(RiskSignal::Age, AGE_PENALTY, format!("High age risk: {age} years"));
        }

        let anomaly = IdentifierAnomaly::detect(&customer.identifier);
        if anomaly.low_cardinality {
            tally.fire(
                RiskSignal::LowCardinalityIdentifier,
                scoring.unusual_id_penalty,
                "Suspicious ID number pattern".to_string(),
            );
        }
        if anomaly.all_zeros {
            tally.fire(
                RiskSignal::ZeroIdentifier,
                ZERO_IDENTIFIER_PENALTY,
                "ID number contains only zeros".to_string(),
            );
        }

        if customer.identifier_verified == Some(false) {
            tally.warn(format!(
                "Identifier {} failed external verification",
                customer.masked_identifier()
            ));
        }

        let risk_score = tally.raw.min(scoring.max_risk_score);
        let risk_level = RiskLevel::from_score(risk_score);

        tracing::debug!(
            customer = %customer.customer_code,
            raw_score = tally.raw,
            risk_score,
            risk_level = %risk_level,
            "risk aggregated"
        );

        RiskAssessment {
            risk_score,
            raw_score: tally.raw,
            risk_level,
            risk_factors: tally.factors,
            details: tally.details,
            age,
            warnings: tally.warnings,
            inconclusive,
        }
    }
}

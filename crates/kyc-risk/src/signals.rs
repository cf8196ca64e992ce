//! Signal detectors that look at a customer record in isolation.

use serde::{Deserialize, Serialize};

use kyc_core::{CustomerRecord, ScreeningConfig};

/// Maximum distinct characters for an identifier to count as low-cardinality.
pub const LOW_CARDINALITY_MAX_DISTINCT: usize = 3;

/// Which signal fired, in the fixed order of evaluation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskSignal {
    /// Occupation carries a PEP indicator.
    Pep,
    /// Nationality is on the high-risk list.
    HighRiskJurisdiction,
    /// EXACT watchlist match.
    ExactMatch,
    /// PARTIAL watchlist match.
    PartialMatch,
    /// Age above the configured threshold.
    Age,
    /// Identifier made of very few distinct characters.
    LowCardinalityIdentifier,
    /// Identifier made only of zeros.
    ZeroIdentifier,
}

/// Suspicious patterns in an identifier value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierAnomaly {
    /// Three or fewer distinct characters.
    pub low_cardinality: bool,
    /// Only zeros.
    pub all_zeros: bool,
}

impl IdentifierAnomaly {
    /// Inspect `value` after stripping formatting (anything that is not a
    /// letter or digit). A value with nothing left is not anomalous.
    pub fn detect(value: &str) -> Self {
        let mut chars: Vec<char> = value.chars().filter(|c| c.is_alphanumeric()).collect();
        if chars.is_empty() {
            return Self::default();
        }
        let all_zeros = chars.iter().all(|c| *c == '0');
        chars.sort_unstable();
        chars.dedup();
        Self {
            low_cardinality: chars.len() <= LOW_CARDINALITY_MAX_DISTINCT,
            all_zeros,
        }
    }
}

/// PEP indicator found in the customer's occupation, if any.
pub fn pep_indicator<'c>(
    customer: &CustomerRecord,
    config: &'c ScreeningConfig,
) -> Option<&'c str> {
    config.pep_indicator_in(customer.occupation.as_deref()?)
}

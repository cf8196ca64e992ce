//! # Screening Configuration
//!
//! The configuration bundle consumed by every scoring stage: match
//! thresholds, the DOB bonus, PEP indicator terms, jurisdiction lists and the
//! risk penalty table.
//!
//! ## Design
//!
//! Every field has a default, so a YAML document only needs to name the keys
//! it overrides. Loading validates the result; the scoring stages themselves
//! assume a valid bundle and never re-check it. The orchestrator holds the
//! bundle behind an `Arc`, so one value is shared read-only by every
//! concurrent screening.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default minimum name score for a candidate to count as a match.
pub const DEFAULT_NAME_MATCH_THRESHOLD: f64 = 85.0;

/// Default minimum name score for an EXACT classification.
pub const DEFAULT_EXACT_MATCH_CUTOFF: f64 = 95.0;

/// Default bonus added to the match score when birth dates agree.
pub const DEFAULT_DOB_MATCH_BONUS: f64 = 20.0;

/// Default cap on candidates retrieved from a watchlist snapshot.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 50;

const PEP_INDICATORS: &[&str] = &[
    // political office
    "minister",
    "president",
    "prime minister",
    "senator",
    "congress",
    "parliament",
    "ambassador",
    "governor",
    "mayor",
    "diplomat",
    "secretary",
    "commissioner",
    // military rank
    "general",
    "colonel",
    "major",
    "captain",
    "admiral",
    "marshal",
    // royalty
    "king",
    "queen",
    "prince",
    "princess",
    "emir",
    "sultan",
    "sheikh",
    "royal",
    // judiciary
    "judge",
    "justice",
    "magistrate",
    "prosecutor",
    // oversight agencies
    "director",
    "controller",
    "auditor",
];

const HIGH_RISK_COUNTRIES: &[&str] = &[
    "AF", "IR", "KP", "SY", "YE", "SD", "SO", "IQ", "LY", "VE", "CU", "RU", "BY", "MM", "ER", "ZW",
];

const MEDIUM_RISK_COUNTRIES: &[&str] =
    &["PK", "NG", "ET", "CD", "TZ", "KE", "UG", "GH", "CI", "CM"];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// How the evaluator reduces name comparisons to a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameScoring {
    /// Plain sequence ratio.
    #[default]
    Ratio,
    /// Maximum of plain, partial and token-sort ratios.
    Fuzzy,
}

/// Penalty table for the risk aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskScoringConfig {
    /// Added when the occupation carries a PEP indicator.
    pub pep_penalty: u32,
    /// Added when the nationality is on the high-risk list.
    pub high_risk_country_penalty: u32,
    /// Added per EXACT match.
    pub sanction_match_penalty: u32,
    /// Added per PARTIAL match.
    pub partial_match_penalty: u32,
    /// Ages strictly above this add the age penalty.
    pub age_risk_threshold: u32,
    /// Added for a low-cardinality identifier.
    pub unusual_id_penalty: u32,
    /// Ceiling of the clamped risk score.
    pub max_risk_score: u32,
}

impl Default for RiskScoringConfig {
    fn default() -> Self {
        Self {
            pep_penalty: 30,
            high_risk_country_penalty: 25,
            sanction_match_penalty: 100,
            partial_match_penalty: 50,
            age_risk_threshold: 70,
            unusual_id_penalty: 20,
            max_risk_score: 100,
        }
    }
}

/// Complete screening configuration bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Minimum name score for a match (inclusive).
    pub name_match_threshold: f64,
    /// Minimum name score for an EXACT match (inclusive).
    pub exact_match_cutoff: f64,
    /// Bonus added to the match score when birth dates agree.
    pub dob_match_bonus: f64,
    /// Name score reduction.
    pub name_scoring: NameScoring,
    /// Lowercase occupation terms marking a politically exposed person.
    pub pep_indicators: Vec<String>,
    /// Nationalities that add the jurisdiction penalty.
    pub high_risk_countries: Vec<String>,
    /// Nationalities reported as a warning only.
    pub medium_risk_countries: Vec<String>,
    /// Maximum candidates retrieved per screening.
    pub candidate_limit: usize,
    /// Risk penalty table.
    pub risk_scoring: RiskScoringConfig,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            name_match_threshold: DEFAULT_NAME_MATCH_THRESHOLD,
            exact_match_cutoff: DEFAULT_EXACT_MATCH_CUTOFF,
            dob_match_bonus: DEFAULT_DOB_MATCH_BONUS,
            name_scoring: NameScoring::default(),
            pep_indicators: owned(PEP_INDICATORS),
            high_risk_countries: owned(HIGH_RISK_COUNTRIES),
            medium_risk_countries: owned(MEDIUM_RISK_COUNTRIES),
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            risk_scoring: RiskScoringConfig::default(),
        }
    }
}

impl ScreeningConfig {
    /// Parse a YAML document and validate the result.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded screening configuration");
        Ok(config)
    }

    /// Render the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the invariants the scoring stages rely on.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ThresholdOutOfRange`] for a threshold outside `[0, 100]`.
    /// - [`ConfigError::CutoffBelowThreshold`] if the EXACT cutoff is below
    ///   the match threshold.
    /// - [`ConfigError::ZeroMaxRiskScore`] if the score ceiling is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("name_match_threshold", self.name_match_threshold),
            ("exact_match_cutoff", self.exact_match_cutoff),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { key, value });
            }
        }
        if self.exact_match_cutoff < self.name_match_threshold {
            return Err(ConfigError::CutoffBelowThreshold {
                cutoff: self.exact_match_cutoff,
                threshold: self.name_match_threshold,
            });
        }
        if self.risk_scoring.max_risk_score == 0 {
            return Err(ConfigError::ZeroMaxRiskScore);
        }
        Ok(())
    }

    /// First PEP indicator contained in `occupation` (case-insensitive
    /// substring search), if any.
    pub fn pep_indicator_in(&self, occupation: &str) -> Option<&str> {
        let text = occupation.to_lowercase();
        if text.trim().is_empty() {
            return None;
        }
        self.pep_indicators
            .iter()
            .map(String::as_str)
            .find(|term| !term.is_empty() && text.contains(&term.to_lowercase()))
    }

    /// Whether `nationality` is on the high-risk list.
    pub fn is_high_risk_country(&self, nationality: &str) -> bool {
        contains_code(&self.high_risk_countries, nationality)
    }

    /// Whether `nationality` is on the medium-risk list.
    pub fn is_medium_risk_country(&self, nationality: &str) -> bool {
        contains_code(&self.medium_risk_countries, nationality)
    }
}

fn contains_code(list: &[String], code: &str) -> bool {
    let code = code.trim();
    !code.is_empty() && list.iter().any(|c| c.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let c = ScreeningConfig::default();
        assert_eq!(c.name_match_threshold, 85.0);
        assert_eq!(c.exact_match_cutoff, 95.0);
        assert_eq!(c.dob_match_bonus, 20.0);
        assert_eq!(c.name_scoring, NameScoring::Ratio);
        assert_eq!(c.candidate_limit, 50);
        assert_eq!(c.risk_scoring.pep_penalty, 30);
        assert_eq!(c.risk_scoring.high_risk_country_penalty, 25);
        assert_eq!(c.risk_scoring.sanction_match_penalty, 100);
        assert_eq!(c.risk_scoring.partial_match_penalty, 50);
        assert_eq!(c.risk_scoring.age_risk_threshold, 70);
        assert_eq!(c.risk_scoring.unusual_id_penalty, 20);
        assert_eq!(c.risk_scoring.max_risk_score, 100);
        assert_eq!(c.high_risk_countries.len(), 16);
        assert_eq!(c.medium_risk_countries.len(), 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "name_match_threshold: 80\nrisk_scoring:\n  pep_penalty: 40\n";
        let c = ScreeningConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(c.name_match_threshold, 80.0);
        assert_eq!(c.exact_match_cutoff, 95.0);
        assert_eq!(c.risk_scoring.pep_penalty, 40);
        assert_eq!(c.risk_scoring.partial_match_penalty, 50);
        assert!(c.is_high_risk_country("SY"));
    }

    #[test]
    fn name_scoring_parses_lowercase() {
        let c = ScreeningConfig::from_yaml_str("name_scoring: fuzzy\n").unwrap();
        assert_eq!(c.name_scoring, NameScoring::Fuzzy);
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        let c = ScreeningConfig {
            name_match_threshold: 120.0,
            ..ScreeningConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::ThresholdOutOfRange { key: "name_match_threshold", .. })
        ));
        let c = ScreeningConfig {
            exact_match_cutoff: f64::NAN,
            ..ScreeningConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_cutoff_below_threshold() {
        let c = ScreeningConfig {
            name_match_threshold: 90.0,
            exact_match_cutoff: 80.0,
            ..ScreeningConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::CutoffBelowThreshold { .. })));
    }

    #[test]
    fn validate_rejects_zero_ceiling() {
        let yaml = "risk_scoring:\n  max_risk_score: 0\n";
        assert!(matches!(
            ScreeningConfig::from_yaml_str(yaml),
            Err(ConfigError::ZeroMaxRiskScore)
        ));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        assert!(matches!(
            ScreeningConfig::from_yaml_str("name_match_threshold: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "candidate_limit: 10").unwrap();
        let c = ScreeningConfig::load(file.path()).unwrap();
        assert_eq!(c.candidate_limit, 10);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert!(matches!(ScreeningConfig::load(missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn yaml_output_parses_back() {
        let c = ScreeningConfig::default();
        let yaml = c.to_yaml().unwrap();
        assert_eq!(ScreeningConfig::from_yaml_str(&yaml).unwrap(), c);
    }

    #[test]
    fn pep_indicator_substring_case_insensitive() {
        let c = ScreeningConfig::default();
        assert_eq!(c.pep_indicator_in("Minister of Finance"), Some("minister"));
        assert!(c.pep_indicator_in("Deputy DIRECTOR").is_some());
        assert_eq!(c.pep_indicator_in("Accountant"), None);
        assert_eq!(c.pep_indicator_in(""), None);
    }

    #[test]
    fn country_lists_ignore_case_and_blank() {
        let c = ScreeningConfig::default();
        assert!(c.is_high_risk_country("sy"));
        assert!(!c.is_high_risk_country("EG"));
        assert!(!c.is_high_risk_country(""));
        assert!(c.is_medium_risk_country("NG"));
    }
}

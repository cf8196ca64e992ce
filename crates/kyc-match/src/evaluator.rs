//! # Match Evaluator — One Customer Against One Watchlist Entry
//!
//! Produces a [`MatchVerdict`] for a single customer/entry pair.
//!
//! ## Scoring
//!
//! 1. The customer's full name, the entry's primary name and each alias are
//!    normalized with the Latin-script rules.
//! 2. The name score is the best score of the customer name against the
//!    primary name or any alias. The configured [`NameScoring`] selects the
//!    plain ratio or the combined fuzzy score.
//! 3. The name score is classified: at or above the EXACT cutoff is EXACT,
//!    at or above the match threshold is PARTIAL, anything lower is
//!    NO_MATCH.
//! 4. When both records carry a birth date and the dates agree, the DOB
//!    bonus is added to the match score. The bonus never changes the
//!    classification from step 3.
//! 5. The match score is clamped to `[0, 100]`.
//!
//! Nationality agreement and the secondary-script name score are recorded
//! alongside but do not affect the score.
//!
//! Each evaluation reads only its own pair, so entries can be evaluated in
//! any order or in parallel.

use serde::{Deserialize, Serialize};

use kyc_core::{
    birth_dates_match, CustomerRecord, EntryRiskLevel, ListSource, MatchType, NameScoring,
    ScreeningConfig, WatchlistEntry,
};

use crate::normalize::{normalize_arabic, normalize_latin};
use crate::similarity::{fuzzy_score, ratio};

/// Result of comparing one customer with one watchlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchVerdict {
    /// Whether the classification counts as a match.
    pub is_match: bool,
    /// EXACT, PARTIAL or NO_MATCH.
    pub match_type: MatchType,
    /// Name score plus DOB bonus, clamped to `[0, 100]`.
    pub match_score: f64,
    /// Best name score before the bonus.
    pub name_score: f64,
    /// Both birth dates present and equal.
    pub dob_match: bool,
    /// Both nationalities present and equal.
    pub nationality_match: bool,
    /// Secondary-script name score, when both sides carry such a name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_name_score: Option<f64>,
    /// Matched entry identifier.
    pub entry_id: String,
    /// Matched entry display name.
    pub entry_name: String,
    /// Issuing authority of the matched entry.
    pub list_source: ListSource,
    /// Risk level declared on the matched entry.
    pub entry_risk_level: EntryRiskLevel,
}

/// Stateless evaluator parameterized by the screening configuration.
#[derive(Debug, Clone, Copy)]
pub struct MatchEvaluator<'a> {
    config: &'a ScreeningConfig,
}

impl<'a> MatchEvaluator<'a> {
    /// Create an evaluator over `config`.
    pub fn new(config: &'a ScreeningConfig) -> Self {
        Self { config }
    }

    /// Compare `customer` with `entry`.
    pub fn evaluate(&self, customer: &CustomerRecord, entry: &WatchlistEntry) -> MatchVerdict {
        let customer_name = normalize_latin(&customer.full_name);
        if customer_name.is_empty() {
            tracing::warn!(
                customer = %customer.customer_code,
                "customer name is empty after normalization"
            );
        }

        let name_score = if customer_name.is_empty() {
            0.0
        } else {
            entry
                .names()
                .map(|name| self.score_names(&customer_name, &normalize_latin(name)))
                .fold(0.0_f64, f64::max)
        };

        let match_type = MatchType::classify(
            name_score,
            self.config.name_match_threshold,
            self.config.exact_match_cutoff,
        );

        let dob_match = match (
            non_blank(customer.date_of_birth.as_deref()),
            non_blank(entry.date_of_birth.as_deref()),
        ) {
            (Some(a), Some(b)) => birth_dates_match(a, b),
            _ => false,
        };

        let mut score = name_score;
        if dob_match {
            score += self.config.dob_match_bonus;
        }

        let nationality_match = match (
            non_blank(Some(customer.nationality.as_str())),
            non_blank(entry.nationality.as_deref()),
        ) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        };

        let verdict = MatchVerdict {
            is_match: match_type.is_match(),
            match_type,
            match_score: score.clamp(0.0, 100.0),
            name_score,
            dob_match,
            nationality_match,
            secondary_name_score: secondary_name_score(customer, entry),
            entry_id: entry.entry_id.clone(),
            entry_name: entry.name.clone(),
            list_source: entry.list_source,
            entry_risk_level: entry.risk_level,
        };

        tracing::debug!(
            entry = %verdict.entry_id,
            match_type = %verdict.match_type,
            name_score = verdict.name_score,
            match_score = verdict.match_score,
            dob_match,
            nationality_match,
            "evaluated watchlist candidate"
        );

        verdict
    }

    fn score_names(&self, customer_name: &str, entry_name: &str) -> f64 {
        match self.config.name_scoring {
            NameScoring::Ratio => ratio(customer_name, entry_name),
            NameScoring::Fuzzy => fuzzy_score(customer_name, entry_name),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn secondary_name_score(customer: &CustomerRecord, entry: &WatchlistEntry) -> Option<f64> {
    let customer_name = normalize_arabic(non_blank(customer.secondary_name.as_deref())?);
    if customer_name.is_empty() {
        return None;
    }
    entry
        .secondary_names()
        .map(normalize_arabic)
        .filter(|n| !n.is_empty())
        .map(|n| ratio(&customer_name, &n))
        .reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyc_core::IdentifierKind;

    fn customer(name: &str) -> CustomerRecord {
        CustomerRecord::new("CUST-1", name, "EG")
            .with_identifier("A12345678", IdentifierKind::Passport)
    }

    fn entry(name: &str) -> WatchlistEntry {
        WatchlistEntry::new("E-1", ListSource::Ofac, name).with_nationality("EG")
    }

    #[test]
    fn identical_names_are_exact() {
        let config = ScreeningConfig::default();
        let v = MatchEvaluator::new(&config)
            .evaluate(&customer("Ahmed Ali Al-Masri"), &entry("Ahmed Ali Al-Masri"));
        assert!(v.is_match);
        assert_eq!(v.match_type, MatchType::Exact);
        assert_eq!(v.name_score, 100.0);
        assert_eq!(v.match_score, 100.0);
        assert!(v.nationality_match);
        assert!(!v.dob_match);
        assert_eq!(v.entry_name, "Ahmed Ali Al-Masri");
        assert_eq!(v.list_source, ListSource::Ofac);
        assert_eq!(v.entry_risk_level, EntryRiskLevel::High);
    }

    #[test]
    fn score_at_threshold_is_partial() {
        let config = ScreeningConfig::default();
        let v = MatchEvaluator::new(&config)
            .evaluate(&customer("abcdefghijklmnopqrst"), &entry("abcdefghijklmnopqxyz"));
        assert_eq!(v.name_score, 85.0);
        assert_eq!(v.match_type, MatchType::Partial);
        assert!(v.is_match);
    }

    #[test]
    fn score_at_cutoff_is_exact() {
        let config = ScreeningConfig::default();
        let v = MatchEvaluator::new(&config)
            .evaluate(&customer("abcdefghijklmnopqrst"), &entry("abcdefghijklmnopqrsx"));
        assert_eq!(v.name_score, 95.0);
        assert_eq!(v.match_type, MatchType::Exact);
    }

    #[test]
    fn below_threshold_is_no_match() {
        let config = ScreeningConfig::default();
        let v =
            MatchEvaluator::new(&config).evaluate(&customer("John Smith"), &entry("Ivan Petrov"));
        assert!(!v.is_match);
        assert_eq!(v.match_type, MatchType::NoMatch);
    }

    #[test]
    fn alias_can_carry_the_match() {
        let config = ScreeningConfig::default();
        let e = entry("Ivan Petrov").with_alias("Ahmed Al-Masri");
        let v = MatchEvaluator::new(&config).evaluate(&customer("Ahmed Al Masri"), &e);
        assert_eq!(v.name_score, 100.0);
        assert_eq!(v.entry_name, "Ivan Petrov");
    }

    #[test]
    fn dob_bonus_raises_score_but_not_classification() {
        let config = ScreeningConfig::default();
        let c = customer("abcdefghijklmnopqrst").with_date_of_birth("1980-05-15");
        let e = entry("abcdefghijklmnopqxyz").with_date_of_birth("15/05/1980");
        let v = MatchEvaluator::new(&config).evaluate(&c, &e);
        assert!(v.dob_match);
        assert_eq!(v.name_score, 85.0);
        assert_eq!(v.match_type, MatchType::Partial);
        assert_eq!(v.match_score, 100.0);
    }

    #[test]
    fn dob_bonus_on_no_match_does_not_make_a_match() {
        let config = ScreeningConfig::default();
        let c = customer("John Smith").with_date_of_birth("1970-08-30");
        let e = entry("Ivan Petrov").with_date_of_birth("1970-08-30");
        let v = MatchEvaluator::new(&config).evaluate(&c, &e);
        assert!(v.dob_match);
        assert!(!v.is_match);
        assert_eq!(v.match_score, (v.name_score + 20.0).min(100.0));
    }

    #[test]
    fn missing_dob_on_either_side_is_no_dob_match() {
        let config = ScreeningConfig::default();
        let c = customer("Ahmed Ali").with_date_of_birth("1980-05-15");
        let v = MatchEvaluator::new(&config).evaluate(&c, &entry("Ahmed Ali"));
        assert!(!v.dob_match);
    }

    #[test]
    fn nationality_requires_both_sides() {
        let config = ScreeningConfig::default();
        let mut e = entry("Ahmed Ali");
        e.nationality = None;
        let v = MatchEvaluator::new(&config).evaluate(&customer("Ahmed Ali"), &e);
        assert!(!v.nationality_match);

        let e = entry("Ahmed Ali").with_nationality("eg");
        let v = MatchEvaluator::new(&config).evaluate(&customer("Ahmed Ali"), &e);
        assert!(v.nationality_match);
    }

    #[test]
    fn empty_customer_name_scores_zero() {
        let config = ScreeningConfig::default();
        let v = MatchEvaluator::new(&config).evaluate(&customer("Mr."), &entry("Mr."));
        assert_eq!(v.name_score, 0.0);
        assert!(!v.is_match);
    }

    #[test]
    fn empty_entry_name_scores_zero() {
        let config = ScreeningConfig::default();
        let v = MatchEvaluator::new(&config).evaluate(&customer("Ahmed Ali"), &entry("  "));
        assert_eq!(v.name_score, 0.0);
        assert_eq!(v.match_type, MatchType::NoMatch);
    }

    #[test]
    fn fuzzy_scoring_matches_reordered_names() {
        let ratio_config = ScreeningConfig::default();
        let fuzzy_config = ScreeningConfig {
            name_scoring: NameScoring::Fuzzy,
            ..ScreeningConfig::default()
        };
        let c = customer("Hassan Mohamed");
        let e = entry("Mohamed Hassan");
        assert!(!MatchEvaluator::new(&ratio_config).evaluate(&c, &e).is_match);
        let v = MatchEvaluator::new(&fuzzy_config).evaluate(&c, &e);
        assert_eq!(v.match_type, MatchType::Exact);
    }

    #[test]
    fn secondary_name_score_is_informational() {
        let config = ScreeningConfig::default();
        let c = customer("John Smith").with_secondary_name("أحمد علي");
        let mut e = entry("Ivan Petrov");
        e.secondary_name = Some("احمد علي".into());
        let v = MatchEvaluator::new(&config).evaluate(&c, &e);
        assert_eq!(v.secondary_name_score, Some(100.0));
        assert!(!v.is_match);

        let v = MatchEvaluator::new(&config).evaluate(&customer("John Smith"), &e);
        assert_eq!(v.secondary_name_score, None);
    }

    #[test]
    fn verdict_serializes_with_wire_labels() {
        let config = ScreeningConfig::default();
        let v = MatchEvaluator::new(&config).evaluate(&customer("Ahmed Ali"), &entry("Ahmed Ali"));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["match_type"], "EXACT");
        assert_eq!(json["list_source"], "OFAC");
        assert_eq!(json["entry_risk_level"], "HIGH");
        assert!(json.get("secondary_name_score").is_none());
    }
}

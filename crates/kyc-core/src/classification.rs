//! # Classifications — Ordinal Labels Shared by Every Stage
//!
//! Defines the closed label sets that flow between the match evaluator, the
//! risk aggregator and the orchestrator. Each enum is the single definition
//! used across the workspace, so every `match` on it is exhaustive.
//!
//! All labels serialize as SCREAMING_SNAKE_CASE strings (`"CLEAR_WITH_WARNING"`,
//! `"VERY_LOW"`, `"OFAC"`) and parse back through [`std::str::FromStr`],
//! rejecting unknown labels.
//!
//! ## Ordering
//!
//! [`EntryRiskLevel`] and [`RiskLevel`] derive `Ord` in declaration order,
//! lowest risk first, so `max()` over a collection yields the most severe.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Implements `as_str`, `Display` and `FromStr` for a unit-only enum from a
/// single variant/label table, keeping the three in lockstep.
macro_rules! labelled_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Returns the wire label for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($label => Ok($ty::$variant),)+
                    _ => Err(ValidationError::UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Watchlist-side labels
// ---------------------------------------------------------------------------

/// Risk level declared by the issuing authority on a watchlist entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryRiskLevel {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High. The default for entries that do not declare a level.
    #[default]
    High,
    /// Critical.
    Critical,
}

labelled_enum!(EntryRiskLevel, "entry risk level", {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
    Critical => "CRITICAL",
});

/// Issuing authority of a watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListSource {
    /// Office of Foreign Assets Control (US Treasury).
    Ofac,
    /// United Nations Security Council.
    Un,
    /// European Union Consolidated List.
    Eu,
    /// UK Office of Financial Sanctions Implementation.
    Uk,
    /// Australian Department of Foreign Affairs and Trade.
    Au,
    /// Canadian Office of the Superintendent of Financial Institutions.
    Ca,
    /// Any other issuer.
    Other,
}

labelled_enum!(ListSource, "list source", {
    Ofac => "OFAC",
    Un => "UN",
    Eu => "EU",
    Uk => "UK",
    Au => "AU",
    Ca => "CA",
    Other => "OTHER",
});

impl ListSource {
    /// Full name of the issuing authority.
    pub fn authority(&self) -> &'static str {
        match self {
            Self::Ofac => "Office of Foreign Assets Control (US Treasury)",
            Self::Un => "United Nations Security Council",
            Self::Eu => "European Union Consolidated List",
            Self::Uk => "UK Office of Financial Sanctions Implementation",
            Self::Au => "Australian Department of Foreign Affairs and Trade",
            Self::Ca => "Canadian Office of the Superintendent of Financial Institutions",
            Self::Other => "Other issuing authority",
        }
    }
}

/// Kind of listed party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListType {
    /// Natural person.
    #[default]
    Individual,
    /// Organization or group.
    Entity,
    /// Vessel.
    Vessel,
    /// Aircraft.
    Aircraft,
}

labelled_enum!(ListType, "list type", {
    Individual => "INDIVIDUAL",
    Entity => "ENTITY",
    Vessel => "VESSEL",
    Aircraft => "AIRCRAFT",
});

// ---------------------------------------------------------------------------
// Customer-side labels
// ---------------------------------------------------------------------------

/// Legal form of the screened customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    /// Natural person.
    #[default]
    Individual,
    /// Company.
    Corporate,
    /// Partnership.
    Partnership,
    /// Trust.
    Trust,
}

labelled_enum!(CustomerType, "customer type", {
    Individual => "INDIVIDUAL",
    Corporate => "CORPORATE",
    Partnership => "PARTNERSHIP",
    Trust => "TRUST",
});

/// Kind of identity document supplied with a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentifierKind {
    /// National identity number (14-digit, century-coded).
    NationalId,
    /// Passport number.
    #[default]
    Passport,
    /// Driver's license number.
    DriversLicense,
    /// Residence permit number.
    ResidencePermit,
    /// Any other document.
    Other,
}

labelled_enum!(IdentifierKind, "identifier kind", {
    NationalId => "NATIONAL_ID",
    Passport => "PASSPORT",
    DriversLicense => "DRIVERS_LICENSE",
    ResidencePermit => "RESIDENCE_PERMIT",
    Other => "OTHER",
});

// ---------------------------------------------------------------------------
// Engine outputs
// ---------------------------------------------------------------------------

/// Classification of one customer/entry comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    /// Name score at or above the EXACT cutoff.
    Exact,
    /// Name score in `[name_match_threshold, exact_match_cutoff)`.
    Partial,
    /// Name score below the match threshold.
    NoMatch,
}

labelled_enum!(MatchType, "match type", {
    Exact => "EXACT",
    Partial => "PARTIAL",
    NoMatch => "NO_MATCH",
});

impl MatchType {
    /// Classify a pre-bonus name score.
    ///
    /// Both boundaries are inclusive: a score equal to `threshold` is
    /// PARTIAL, a score equal to `exact_cutoff` is EXACT.
    pub fn classify(name_score: f64, threshold: f64, exact_cutoff: f64) -> Self {
        if name_score >= threshold {
            if name_score >= exact_cutoff {
                Self::Exact
            } else {
                Self::Partial
            }
        } else {
            Self::NoMatch
        }
    }

    /// Whether this classification counts as a match.
    pub fn is_match(self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// Aggregated customer risk level derived from the bounded risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Score below 20.
    VeryLow,
    /// Score 20..40.
    Low,
    /// Score 40..60.
    Medium,
    /// Score 60..80.
    High,
    /// Score 80 and above.
    Critical,
}

labelled_enum!(RiskLevel, "risk level", {
    VeryLow => "VERY_LOW",
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
    Critical => "CRITICAL",
});

impl RiskLevel {
    /// Map a clamped risk score onto its level (`score >= bound`).
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Critical,
            60..=79 => Self::High,
            40..=59 => Self::Medium,
            20..=39 => Self::Low,
            _ => Self::VeryLow,
        }
    }

    /// HIGH or CRITICAL.
    pub fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

/// Terminal outcome of one screening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningDisposition {
    /// No retained match and no elevated risk.
    Clear,
    /// Only partial matches, risk below HIGH.
    ClearWithWarning,
    /// Elevated risk level without an exact match.
    ReviewRequired,
    /// At least one exact match.
    Rejected,
    /// Awaiting a manual decision. Never produced by the automatic rule.
    Pending,
}

labelled_enum!(ScreeningDisposition, "screening disposition", {
    Clear => "CLEAR",
    ClearWithWarning => "CLEAR_WITH_WARNING",
    ReviewRequired => "REVIEW_REQUIRED",
    Rejected => "REJECTED",
    Pending => "PENDING",
});

impl ScreeningDisposition {
    /// Whether onboarding may proceed without a compliance decision.
    pub fn allows_onboarding(self) -> bool {
        matches!(self, Self::Clear | Self::ClearWithWarning)
    }
}

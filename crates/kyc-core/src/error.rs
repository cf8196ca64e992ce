//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the screening workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Configuration errors name the offending key and the rejected value.
//! - Validation errors carry the raw input so callers can report it back.
//! - The scoring path never produces these errors: normalization, similarity,
//!   match evaluation and risk aggregation are infallible and degrade to
//!   "no contribution" on malformed input.

use thiserror::Error;

/// Top-level error type for the screening workspace.
#[derive(Error, Debug)]
pub enum KycError {
    /// Configuration bundle rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Record or identifier validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error in the screening configuration bundle.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A percentage threshold lies outside `[0, 100]`.
    #[error("{key} must be within [0, 100], got {value}")]
    ThresholdOutOfRange {
        /// Configuration key.
        key: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The EXACT cutoff sits below the match threshold, leaving no PARTIAL band.
    #[error("exact_match_cutoff ({cutoff}) must not be below name_match_threshold ({threshold})")]
    CutoffBelowThreshold {
        /// Configured EXACT cutoff.
        cutoff: f64,
        /// Configured name match threshold.
        threshold: f64,
    },

    /// The risk score ceiling is zero.
    #[error("risk_scoring.max_risk_score must be greater than zero")]
    ZeroMaxRiskScore,

    /// YAML could not be parsed into a configuration.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration file could not be read.
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Error validating a record field or identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country code is not a two-letter uppercase ISO code.
    #[error("invalid nationality code (must be 2-letter ISO code): {0:?}")]
    InvalidCountryCode(String),

    /// National identifier failed a structural rule.
    #[error("invalid national identifier {value:?}: {reason}")]
    InvalidNationalId {
        /// Masked identifier value.
        value: String,
        /// Which rule failed.
        reason: &'static str,
    },

    /// Passport number failed the format rules.
    #[error("invalid passport number {value:?}: {reason}")]
    InvalidPassportNumber {
        /// Masked identifier value.
        value: String,
        /// Which rule failed.
        reason: &'static str,
    },

    /// Generic identifier shorter than the minimum length.
    #[error("identifier too short: {0:?}")]
    IdentifierTooShort(String),

    /// A required record field is empty or absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A classification label did not match any known variant.
    #[error("unknown {kind} label: {value:?}")]
    UnknownLabel {
        /// The classification being parsed.
        kind: &'static str,
        /// The rejected label.
        value: String,
    },
}

//! # kyc-core — Foundational Types for Customer Screening
//!
//! The leaf crate of the screening workspace. It defines the records the
//! engine reads, the labels it produces, and the configuration bundle every
//! stage consumes. Every other crate depends on `kyc-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Structured records.** Customer and watchlist data are typed structs
//!    with explicit optionality, never loosely keyed maps.
//!
//! 2. **One enum per label set.** Match types, risk levels and dispositions
//!    are defined once here, so every consumer matches exhaustively.
//!
//! 3. **Validated identifiers.** Country codes, national identifiers and
//!    passport numbers are newtypes whose constructors enforce their format.
//!
//! 4. **Lenient dates.** Birth dates stay as supplied text and are parsed on
//!    demand; an unparseable date means "no contribution", not a failure.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kyc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod classification;
pub mod config;
pub mod error;
pub mod identity;
pub mod record;
pub mod temporal;

pub use classification::{
    CustomerType, EntryRiskLevel, IdentifierKind, ListSource, ListType, MatchType, RiskLevel,
    ScreeningDisposition,
};
pub use config::{NameScoring, RiskScoringConfig, ScreeningConfig};
pub use error::{ConfigError, KycError, ValidationError};
pub use identity::{
    mask_identifier, validate_identifier, CountryCode, NationalId, PassportNumber, ScreeningRunId,
};
pub use record::{CustomerRecord, CustomerValidation, Gender, WatchlistEntry};
pub use temporal::{age_on, birth_dates_match, parse_birth_date};

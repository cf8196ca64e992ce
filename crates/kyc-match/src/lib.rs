//! # kyc-match — Name Matching for Watchlist Screening
//!
//! Turns a customer/entry pair into a classified [`MatchVerdict`]:
//!
//! - [`normalize`]: script-aware name canonicalization.
//! - [`similarity`]: plain, partial and token-sort similarity on a 0–100
//!   scale.
//! - [`evaluator`]: per-entry evaluation with DOB and nationality
//!   comparison.
//!
//! Everything here is infallible and free of shared mutable state.
//! Malformed input scores zero and is logged, so one bad candidate never
//! stops a screening.

pub mod evaluator;
pub mod normalize;
pub mod similarity;

pub use evaluator::{MatchEvaluator, MatchVerdict};
pub use normalize::{normalize, normalize_arabic, normalize_latin, Script};
pub use similarity::{
    fuzzy_match, fuzzy_score, partial_ratio, ratio, similarity, token_sort_ratio,
};

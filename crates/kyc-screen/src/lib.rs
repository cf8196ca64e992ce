//! # kyc-screen — Screening Runs
//!
//! Ties matching and risk aggregation into complete screening runs.
//!
//! ## Modules
//!
//! - [`orchestrator`]: evaluate candidates, aggregate risk, decide the
//!   disposition.
//! - [`watchlist`]: immutable watchlist snapshots with name search, and an
//!   atomically swapped store for refreshes between runs.
//! - [`sample`]: a small demonstration watchlist.
//! - [`report`]: the JSON screening report.
//!
//! ## Concurrency
//!
//! A run is synchronous and reads only its inputs, the shared
//! `Arc<ScreeningConfig>` and a pinned snapshot. Independent customers can
//! be screened on separate threads with no locking.

pub mod orchestrator;
pub mod report;
pub mod sample;
pub mod watchlist;

pub use orchestrator::{decide_disposition, ScreeningOrchestrator, ScreeningOutcome};
pub use report::ScreeningReport;
pub use sample::sample_watchlist;
pub use watchlist::{WatchlistSnapshot, WatchlistStore};

//! # kyc-cli — Screening Command-Line Interface
//!
//! Provides the `kyc` binary. Each subcommand lives in its own module with a
//! clap `Args` struct and a `run_*` handler returning the process exit code.
//!
//! ## Subcommands
//!
//! - `kyc screen`: validate a customer, screen it, optionally write a report.
//! - `kyc watchlist search`: name search over a watchlist.
//! - `kyc validate-id`: check an identifier against its document rules.
//! - `kyc config show`: print the effective configuration.
//!
//! ```bash
//! kyc --config screening.yaml screen --customer customer.json --report out.json
//! kyc watchlist search "al masri" --limit 5
//! kyc validate-id 28005151234567 --kind national-id
//! ```
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | CLEAR / CLEAR_WITH_WARNING, or the command succeeded |
//! | 1 | IO, parse or configuration failure |
//! | 2 | Customer record or identifier failed validation |
//! | 3 | REVIEW_REQUIRED / REJECTED / PENDING |

pub mod config;
pub mod identity;
pub mod screen;
pub mod watchlist;

use std::path::Path;

use anyhow::{Context, Result};

use kyc_core::ScreeningConfig;
use kyc_screen::{sample_watchlist, WatchlistSnapshot};

/// Success, or a disposition that allows onboarding.
pub const EXIT_OK: u8 = 0;

/// Input failed validation.
pub const EXIT_INVALID: u8 = 2;

/// Disposition that blocks automatic onboarding.
pub const EXIT_ATTENTION: u8 = 3;

/// Load the configuration from `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ScreeningConfig> {
    match path {
        Some(path) => ScreeningConfig::load(path)
            .with_context(|| format!("failed to load configuration: {}", path.display())),
        None => Ok(ScreeningConfig::default()),
    }
}

/// Load a watchlist JSON file, or the demonstration list when none is given.
pub fn load_watchlist(path: Option<&Path>) -> Result<WatchlistSnapshot> {
    match path {
        Some(path) => WatchlistSnapshot::load_json(path)
            .with_context(|| format!("failed to load watchlist: {}", path.display())),
        None => {
            tracing::info!("no watchlist given; using the demonstration list");
            Ok(WatchlistSnapshot::new(sample_watchlist(), 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.name_match_threshold, 85.0);
    }

    #[test]
    fn load_config_reads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screening.yaml");
        std::fs::write(&path, "name_match_threshold: 80\ncandidate_limit: 5\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.name_match_threshold, 80.0);
        assert_eq!(config.candidate_limit, 5);
    }

    #[test]
    fn load_config_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }

    #[test]
    fn load_config_rejects_invalid_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "name_match_threshold: 90\nexact_match_cutoff: 80\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn load_watchlist_falls_back_to_sample() {
        let snapshot = load_watchlist(None).unwrap();
        assert_eq!(snapshot.len(), 5);
    }

    #[test]
    fn load_watchlist_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(
            &path,
            r#"[{"entry_id": "K1", "list_source": "CA", "name": "Some Body"}]"#,
        )
        .unwrap();
        let snapshot = load_watchlist(Some(&path)).unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}

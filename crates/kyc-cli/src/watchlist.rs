//! # Watchlist — `kyc watchlist`

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use kyc_core::ScreeningConfig;

use crate::{load_watchlist, EXIT_OK};

/// Arguments for `kyc watchlist`.
#[derive(Args, Debug)]
pub struct WatchlistArgs {
    #[command(subcommand)]
    pub command: WatchlistCommand,
}

/// Watchlist subcommands.
#[derive(Subcommand, Debug)]
pub enum WatchlistCommand {
    /// Search entry names, aliases and secondary-script names.
    Search {
        /// Search term; normalized before matching.
        term: String,

        /// Watchlist (JSON array of entries). Defaults to the demonstration list.
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Maximum number of results. Defaults to the configured candidate limit.
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Execute `kyc watchlist`.
pub fn run_watchlist(args: &WatchlistArgs, config: &ScreeningConfig) -> Result<u8> {
    match &args.command {
        WatchlistCommand::Search {
            term,
            watchlist,
            limit,
        } => run_search(term, watchlist.as_deref(), resolve_limit(*limit, config)),
    }
}

/// The `--limit` value, or the configured candidate limit when omitted.
pub fn resolve_limit(requested: Option<usize>, config: &ScreeningConfig) -> usize {
    requested.unwrap_or(config.candidate_limit)
}

fn run_search(term: &str, watchlist: Option<&Path>, limit: usize) -> Result<u8> {
    let snapshot = load_watchlist(watchlist)?;
    let hits = snapshot.search(term, limit);

    for entry in &hits {
        println!(
            "  {:<10} {:<5} {:<9} {}",
            entry.entry_id,
            entry.list_source.as_str(),
            entry.risk_level.as_str(),
            entry.name
        );
    }
    println!();
    println!("Total: {} of {} entries", hits.len(), snapshot.len());
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(term: &str, watchlist: Option<PathBuf>, limit: Option<usize>) -> WatchlistArgs {
        WatchlistArgs {
            command: WatchlistCommand::Search {
                term: term.into(),
                watchlist,
                limit,
            },
        }
    }

    #[test]
    fn search_sample_list() {
        let args = search("petrov", None, Some(10));
        assert_eq!(run_watchlist(&args, &ScreeningConfig::default()).unwrap(), EXIT_OK);
    }

    #[test]
    fn search_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = search("petrov", Some(dir.path().join("absent.json")), None);
        assert!(run_watchlist(&args, &ScreeningConfig::default()).is_err());
    }

    #[test]
    fn omitted_limit_follows_configuration() {
        let config = ScreeningConfig {
            candidate_limit: 7,
            ..ScreeningConfig::default()
        };
        assert_eq!(resolve_limit(None, &config), 7);
        assert_eq!(resolve_limit(Some(2), &config), 2);
        assert_eq!(
            resolve_limit(None, &ScreeningConfig::default()),
            ScreeningConfig::default().candidate_limit
        );
    }
}

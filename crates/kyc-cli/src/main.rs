//! # kyc CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, loads the
//! configuration and dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kyc_cli::config::{run_config, ConfigArgs};
use kyc_cli::identity::{run_validate_id, ValidateIdArgs};
use kyc_cli::load_config;
use kyc_cli::screen::{run_screen, ScreenArgs};
use kyc_cli::watchlist::{run_watchlist, WatchlistArgs};

/// KYC screening: sanctions matching and risk scoring for customer records.
#[derive(Parser, Debug)]
#[command(name = "kyc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Screening configuration (YAML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Screen a customer record against a watchlist.
    Screen(ScreenArgs),

    /// Watchlist operations.
    Watchlist(WatchlistArgs),

    /// Validate an identity document number.
    #[command(name = "validate-id")]
    ValidateId(ValidateIdArgs),

    /// Inspect the screening configuration.
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Screen(args) => run_screen(&args, config),
        Commands::Watchlist(args) => run_watchlist(&args, &config),
        Commands::ValidateId(args) => run_validate_id(&args),
        Commands::Config(args) => run_config(&args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

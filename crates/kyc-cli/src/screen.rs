//! # Screen — `kyc screen`
//!
//! Reads a customer record from JSON, validates it, screens it against a
//! watchlist and prints a summary. With `--report`, the full JSON screening
//! report is written as well.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use kyc_core::{CustomerRecord, ScreeningConfig, ScreeningDisposition};
use kyc_screen::{ScreeningOrchestrator, ScreeningOutcome, ScreeningReport};

use crate::{load_watchlist, EXIT_ATTENTION, EXIT_INVALID, EXIT_OK};

/// Arguments for `kyc screen`.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Customer record (JSON object).
    #[arg(long)]
    pub customer: PathBuf,

    /// Watchlist (JSON array of entries). Defaults to the demonstration list.
    #[arg(long)]
    pub watchlist: Option<PathBuf>,

    /// Write the JSON screening report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Execute `kyc screen`.
pub fn run_screen(args: &ScreenArgs, config: ScreeningConfig) -> Result<u8> {
    let customer = read_customer(&args.customer)?;

    let validation = customer.validate(&config);
    for warning in &validation.warnings {
        println!("  warning: {warning}");
    }
    if !validation.is_valid() {
        for error in &validation.errors {
            println!("  error:   {error}");
        }
        tracing::warn!(
            customer = %customer.customer_code,
            errors = validation.errors.len(),
            "customer record rejected"
        );
        return Ok(EXIT_INVALID);
    }

    let snapshot = load_watchlist(args.watchlist.as_deref())?;
    let orchestrator = ScreeningOrchestrator::new(Arc::new(config));
    let outcome = orchestrator.screen(&customer, &snapshot);

    print_summary(&customer, &outcome);

    if let Some(path) = &args.report {
        let report = ScreeningReport::build(&customer, &outcome, chrono::Utc::now());
        report
            .write_json(path)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        println!("  report:      {}", path.display());
    }

    Ok(exit_code(outcome.disposition))
}

fn read_customer(path: &Path) -> Result<CustomerRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read customer record: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse customer record: {}", path.display()))
}

fn print_summary(customer: &CustomerRecord, outcome: &ScreeningOutcome) {
    let assessment = &outcome.assessment;
    println!("  customer:    {} ({})", customer.full_name, customer.customer_code);
    println!("  candidates:  {}", outcome.candidates_evaluated);
    println!("  matches:     {}", outcome.verdicts.len());
    for verdict in &outcome.verdicts {
        println!(
            "    {:<8} {:>6.2}  {} [{}]",
            verdict.match_type.as_str(),
            verdict.match_score,
            verdict.entry_name,
            verdict.list_source
        );
    }
    println!(
        "  risk:        {} ({})",
        assessment.risk_score, assessment.risk_level
    );
    for factor in &assessment.risk_factors {
        println!("    - {factor}");
    }
    println!("  disposition: {}", outcome.disposition);
}

/// Exit code for a disposition.
pub fn exit_code(disposition: ScreeningDisposition) -> u8 {
    match disposition {
        ScreeningDisposition::Clear | ScreeningDisposition::ClearWithWarning => EXIT_OK,
        ScreeningDisposition::ReviewRequired
        | ScreeningDisposition::Rejected
        | ScreeningDisposition::Pending => EXIT_ATTENTION,
    }
}

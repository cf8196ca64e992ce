//! # Screening Orchestrator
//!
//! Sequences one screening run: evaluate every candidate, keep the matches,
//! aggregate risk, decide the disposition.
//!
//! ## Disposition
//!
//! Evaluated in order, first rule wins:
//!
//! 1. No retained match: CLEAR, or CLEAR_WITH_WARNING when the customer
//!    name could not be screened.
//! 2. Any EXACT match: REJECTED, whatever the risk level.
//! 3. Risk level HIGH or CRITICAL: REVIEW_REQUIRED.
//! 4. Any PARTIAL match: CLEAR_WITH_WARNING.
//! 5. Otherwise: CLEAR.
//!
//! [`ScreeningOrchestrator::run`] performs no I/O and works on the
//! candidates it is given. [`ScreeningOrchestrator::screen`] first
//! retrieves candidates from a watchlist snapshot by the customer's name.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kyc_core::temporal::today;
use kyc_core::{
    CustomerRecord, MatchType, ScreeningConfig, ScreeningDisposition, ScreeningRunId,
    WatchlistEntry,
};
use kyc_match::{MatchEvaluator, MatchVerdict};
use kyc_risk::{RiskAggregator, RiskAssessment};

use crate::watchlist::WatchlistSnapshot;

/// Everything one screening run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    /// Identifier of this run.
    pub run_id: ScreeningRunId,
    /// Number of candidates evaluated.
    pub candidates_evaluated: usize,
    /// Retained verdicts; NO_MATCH verdicts are dropped.
    pub verdicts: Vec<MatchVerdict>,
    /// Aggregated risk.
    pub assessment: RiskAssessment,
    /// Final outcome.
    pub disposition: ScreeningDisposition,
}

impl ScreeningOutcome {
    /// Retained verdicts of the given type.
    pub fn count(&self, match_type: MatchType) -> usize {
        self.verdicts
            .iter()
            .filter(|v| v.match_type == match_type)
            .count()
    }

    /// Highest retained match score, if any match was retained.
    pub fn highest_match_score(&self) -> Option<f64> {
        self.verdicts.iter().map(|v| v.match_score).reduce(f64::max)
    }
}

/// Runs screenings against a shared, read-only configuration.
#[derive(Debug, Clone)]
pub struct ScreeningOrchestrator {
    config: Arc<ScreeningConfig>,
}

impl ScreeningOrchestrator {
    /// Create an orchestrator. The configuration is assumed valid; see
    /// [`ScreeningConfig::validate`].
    pub fn new(config: Arc<ScreeningConfig>) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Screen `customer` against `candidates`.
    pub fn run(
        &self,
        customer: &CustomerRecord,
        candidates: &[WatchlistEntry],
    ) -> ScreeningOutcome {
        self.run_as_of(customer, candidates, today())
    }

    /// Screen `customer` against `candidates`, computing age as of `as_of`.
    pub fn run_as_of(
        &self,
        customer: &CustomerRecord,
        candidates: &[WatchlistEntry],
        as_of: NaiveDate,
    ) -> ScreeningOutcome {
        self.evaluate(customer, candidates.iter(), as_of)
    }

    /// Retrieve candidates from `snapshot` by the customer's primary name,
    /// capped at the configured candidate limit, then screen against them.
    pub fn screen(
        &self,
        customer: &CustomerRecord,
        snapshot: &WatchlistSnapshot,
    ) -> ScreeningOutcome {
        let candidates = snapshot.search(&customer.full_name, self.config.candidate_limit);
        tracing::debug!(
            customer = %customer.customer_code,
            candidates = candidates.len(),
            watchlist_version = snapshot.version(),
            "retrieved candidates"
        );
        self.evaluate(customer, candidates, today())
    }

    fn evaluate<'e>(
        &self,
        customer: &CustomerRecord,
        candidates: impl IntoIterator<Item = &'e WatchlistEntry>,
        as_of: NaiveDate,
    ) -> ScreeningOutcome {
        let run_id = ScreeningRunId::new();
        let evaluator = MatchEvaluator::new(&self.config);

        let mut candidates_evaluated = 0;
        let mut verdicts = Vec::new();
        for entry in candidates {
            candidates_evaluated += 1;
            let verdict = evaluator.evaluate(customer, entry);
            if verdict.is_match {
                verdicts.push(verdict);
            }
        }

        let assessment =
            RiskAggregator::new(&self.config).aggregate_as_of(customer, &verdicts, as_of);
        let disposition = decide_disposition(&verdicts, &assessment);

        tracing::info!(
            run = %run_id,
            customer = %customer.customer_code,
            candidates = candidates_evaluated,
            matches = verdicts.len(),
            risk_score = assessment.risk_score,
            risk_level = %assessment.risk_level,
            disposition = %disposition,
            "screening complete"
        );

        ScreeningOutcome {
            run_id,
            candidates_evaluated,
            verdicts,
            assessment,
            disposition,
        }
    }
}

/// Derive the disposition from retained verdicts and the risk assessment.
pub fn decide_disposition(
    verdicts: &[MatchVerdict],
    assessment: &RiskAssessment,
) -> ScreeningDisposition {
    if verdicts.is_empty() {
        if assessment.inconclusive {
            return ScreeningDisposition::ClearWithWarning;
        }
        return ScreeningDisposition::Clear;
    }
    if verdicts.iter().any(|v| v.match_type == MatchType::Exact) {
        return ScreeningDisposition::Rejected;
    }
    if assessment.risk_level.is_elevated() {
        return ScreeningDisposition::ReviewRequired;
    }
    if verdicts.iter().any(|v| v.match_type == MatchType::Partial) {
        return ScreeningDisposition::ClearWithWarning;
    }
    ScreeningDisposition::Clear
}

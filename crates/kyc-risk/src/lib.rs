//! # kyc-risk — Customer Risk Aggregation
//!
//! Deterministic, additive risk scoring over a customer record and its
//! retained match verdicts. See [`aggregator`] for the signal table.

pub mod aggregator;
pub mod signals;

pub use aggregator::{
    RiskAggregator, RiskAssessment, SignalDetail, UNSCREENABLE_NAME_WARNING,
};
pub use signals::{IdentifierAnomaly, RiskSignal};

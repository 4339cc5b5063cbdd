//! Result aggregation and reporting.
//!
//! Collects per-check records during a run and produces summaries, the list
//! of failures, and the host-facing verdict.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::value::Value;
use crate::DqError;

/// Outcome of a single executed check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Query ran and returned the expected value
    Pass { actual: Value, duration_ms: u64 },
    /// Query ran but returned a different value
    Mismatch { actual: Value, duration_ms: u64 },
    /// Query could not be executed or returned no rows
    Error { message: String, duration_ms: u64 },
}

impl CheckOutcome {
    /// A mismatch and an execution error both count as failed
    pub fn is_failure(&self) -> bool {
        !matches!(self, CheckOutcome::Pass { .. })
    }
}

/// Record of one executed check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckRecord {
    /// Optional label from the check spec
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Query text (the identity used in failure reporting)
    pub query: String,
    /// Expected value from the check spec
    pub expected: Value,
    /// What happened
    pub outcome: CheckOutcome,
}

/// A failed check: the (query, expected, actual-or-error) triple carried by
/// the aggregate failure error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckFailure {
    pub query: String,
    pub expected: Value,
    /// Actual value on mismatch, None when the query itself failed
    pub actual: Option<Value>,
    /// Execution error message when the query itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.actual, &self.error) {
            (Some(actual), _) => write!(
                f,
                "{}: expected {}, got {}",
                self.query, self.expected, actual
            ),
            (None, Some(error)) => {
                write!(f, "{}: expected {}, error: {}", self.query, self.expected, error)
            }
            (None, None) => write!(f, "{}: expected {}", self.query, self.expected),
        }
    }
}

/// Summary statistics for a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub passed: u32,
    pub failed: u32,
    pub errored: u32,
    pub total: u32,
    pub total_duration_ms: u64,
}

/// Report for one run: every check record, in list order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub timestamp: u64,
    pub records: Vec<CheckRecord>,
    pub total_duration_ms: u64,
}

impl RunReport {
    /// Build a report from collected records
    pub fn new(records: Vec<CheckRecord>, total_duration_ms: u64) -> Self {
        RunReport {
            timestamp: unix_timestamp(),
            records,
            total_duration_ms,
        }
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        summary.total_duration_ms = self.total_duration_ms;

        for record in &self.records {
            summary.total += 1;
            match &record.outcome {
                CheckOutcome::Pass { .. } => summary.passed += 1,
                CheckOutcome::Mismatch { .. } => summary.failed += 1,
                CheckOutcome::Error { .. } => summary.errored += 1,
            }
        }

        summary
    }

    /// True if any check mismatched or errored
    pub fn has_failures(&self) -> bool {
        self.records.iter().any(|r| r.outcome.is_failure())
    }

    /// Failed checks in list order
    pub fn failures(&self) -> Vec<CheckFailure> {
        self.records
            .iter()
            .filter_map(|record| match &record.outcome {
                CheckOutcome::Pass { .. } => None,
                CheckOutcome::Mismatch { actual, .. } => Some(CheckFailure {
                    query: record.query.clone(),
                    expected: record.expected.clone(),
                    actual: Some(actual.clone()),
                    error: None,
                }),
                CheckOutcome::Error { message, .. } => Some(CheckFailure {
                    query: record.query.clone(),
                    expected: record.expected.clone(),
                    actual: None,
                    error: Some(message.clone()),
                }),
            })
            .collect()
    }

    /// The host-facing verdict: success, or one aggregate error carrying
    /// every failure from this run.
    pub fn verdict(&self) -> Result<(), DqError> {
        if self.has_failures() {
            Err(DqError::QualityCheckFailure {
                failures: self.failures(),
            })
        } else {
            Ok(())
        }
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

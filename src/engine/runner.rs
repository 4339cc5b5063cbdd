//! Check execution.
//!
//! The runner is a strictly sequential evaluate-all loop: every check in the
//! list runs before pass/fail is decided, so one run surfaces every
//! violation at once. Per-check query errors are caught at the point of
//! occurrence and recorded as failed checks; they never abort the loop and
//! never count as a pass. An empty check list is a successful no-op.
//!
//! Retries, per-query timeouts and cancellation are the caller's concern.

use std::time::Instant;

use log::{debug, error, info, warn};

use crate::connection::QueryExecutor;
use crate::engine::report::{CheckOutcome, CheckRecord, RunReport};
use crate::CheckSpec;

/// Runs an ordered list of checks against one borrowed connection.
pub struct CheckRunner<'a> {
    executor: &'a mut dyn QueryExecutor,
}

impl<'a> CheckRunner<'a> {
    /// Borrow a connection for the duration of one run
    pub fn new(executor: &'a mut dyn QueryExecutor) -> Self {
        CheckRunner { executor }
    }

    /// Execute every check in list order and report the outcome of each.
    ///
    /// The check list is immutable for the duration of the run. The returned
    /// report always holds one record per check; use
    /// [`RunReport::verdict`](crate::engine::report::RunReport::verdict) to
    /// collapse it into the aggregate pass/fail result.
    pub fn run(&mut self, checks: &[CheckSpec]) -> RunReport {
        if checks.is_empty() {
            info!("no data quality checks configured, nothing to run");
            return RunReport::new(Vec::new(), 0);
        }

        let start = Instant::now();
        let mut records = Vec::with_capacity(checks.len());

        for check in checks {
            records.push(self.evaluate(check));
        }

        let report = RunReport::new(records, start.elapsed().as_millis() as u64);
        let summary = report.summary();

        if report.has_failures() {
            error!(
                "{} of {} data quality checks failed",
                summary.failed + summary.errored,
                summary.total
            );
            for failure in report.failures() {
                error!("  failed check: {}", failure);
            }
        } else {
            info!("all {} data quality checks passed", summary.total);
        }

        report
    }

    /// Evaluate a single check, converting any execution error into a
    /// failed-check record.
    fn evaluate(&mut self, check: &CheckSpec) -> CheckRecord {
        let start = Instant::now();

        let outcome = match self.executor.query_scalar(&check.query) {
            Ok(actual) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                if check.expected.matches(&actual) {
                    debug!("check passed: {} = {}", check.label(), actual);
                    CheckOutcome::Pass {
                        actual,
                        duration_ms,
                    }
                } else {
                    warn!(
                        "check failed: {} expected {}, got {}",
                        check.label(),
                        check.expected,
                        actual
                    );
                    CheckOutcome::Mismatch {
                        actual,
                        duration_ms,
                    }
                }
            }
            Err(e) => {
                // An execution error is a failed check, never a pass
                warn!("check query failed: {}: {}", check.label(), e);
                CheckOutcome::Error {
                    message: e.to_string(),
                    duration_ms: start.elapsed().as_millis() as u64,
                }
            }
        };

        CheckRecord {
            name: check.name.clone(),
            query: check.query.clone(),
            expected: check.expected.clone(),
            outcome,
        }
    }
}

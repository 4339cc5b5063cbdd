//! Host adapter for pipeline orchestrators.
//!
//! An orchestration host invokes the operator once per scheduled run with
//! pre-configured parameters: the check list and the connection identifier.
//! The operator resolves a connection, runs the checks, and returns exactly
//! one aggregate error on failure, which the host interprets as task failure
//! and feeds into its own retry and alerting policy.

use log::info;

use crate::connection::ConnectionRegistry;
use crate::engine::runner::CheckRunner;
use crate::{CheckSpec, DqError, SuiteConfig};

/// A data-quality validation task for a pipeline host.
#[derive(Debug, Clone)]
pub struct DataQualityOperator {
    /// Ordered checks to run; may be empty
    pub default_checks: Vec<CheckSpec>,
    /// Connection identifier resolved through the host's registry
    pub conn_id: String,
}

impl DataQualityOperator {
    /// Create an operator with explicit parameters
    pub fn new(default_checks: Vec<CheckSpec>, conn_id: impl Into<String>) -> Self {
        DataQualityOperator {
            default_checks,
            conn_id: conn_id.into(),
        }
    }

    /// Create an operator from a suite configuration
    pub fn from_config(config: &SuiteConfig) -> Self {
        DataQualityOperator {
            default_checks: config.checks.clone(),
            conn_id: config.connection.clone(),
        }
    }

    /// Run the configured checks.
    ///
    /// An empty check list is a successful no-op and does not touch the
    /// registry. Otherwise a connection is resolved, borrowed for the run,
    /// and dropped when the run completes; any check failure surfaces as a
    /// single [`DqError::QualityCheckFailure`].
    pub fn execute(&self, registry: &ConnectionRegistry) -> Result<(), DqError> {
        if self.default_checks.is_empty() {
            info!("no data quality checks configured, skipping run");
            return Ok(());
        }

        let mut conn = registry.resolve(&self.conn_id)?;
        let report = CheckRunner::new(&mut conn).run(&self.default_checks);
        report.verdict()
    }
}

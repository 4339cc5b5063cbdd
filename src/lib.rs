//! dq-check library
//!
//! SQL data-quality validation for warehouse pipelines.
//!
//! A check is a SQL query plus an expected scalar result. A run executes an
//! ordered list of checks against one connection, compares the first column
//! of the first returned row to the expected value, and reports one aggregate
//! pass/fail verdict. Every check is evaluated before the verdict is decided,
//! so a single run surfaces every violation at once.
//!
//! # Example
//!
//! ```no_run
//! use dq_check::{run_checks, CheckSpec, Value};
//!
//! let mut conn = rusqlite::Connection::open("warehouse.db").expect("open");
//! let checks = vec![
//!     CheckSpec::new("SELECT COUNT(*) FROM orders WHERE id IS NULL", Value::Integer(0)),
//!     CheckSpec::new("SELECT COUNT(*) FROM users", Value::Integer(100)),
//! ];
//!
//! match run_checks(&mut conn, &checks) {
//!     Ok(report) => println!("all {} checks passed", report.summary().total),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod connection;
pub mod engine;
pub mod operator;
pub mod value;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use engine::report::RunReport;
use engine::runner::CheckRunner;

// Re-exports for public API
pub use config::SuiteConfig;
pub use connection::{ConnectionRegistry, QueryError, QueryExecutor};
pub use engine::report::{CheckFailure, CheckOutcome, CheckRecord, RunReport as Report, RunSummary};
pub use engine::runner::CheckRunner as Runner;
pub use operator::DataQualityOperator;
pub use value::Value;

/// A single data-quality check: a SQL query and the scalar value its first
/// row/first column is expected to hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSpec {
    /// Optional human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// SQL statement expected to return at least one row and column
    pub query: String,
    /// Expected value of the first column of the first row
    pub expected: Value,
}

impl CheckSpec {
    /// Create an unnamed check
    pub fn new(query: impl Into<String>, expected: Value) -> Self {
        CheckSpec {
            name: None,
            query: query.into(),
            expected,
        }
    }

    /// Create a named check
    pub fn named(name: impl Into<String>, query: impl Into<String>, expected: Value) -> Self {
        CheckSpec {
            name: Some(name.into()),
            query: query.into(),
            expected,
        }
    }

    /// Label used in logs and reports: the name if set, the query text otherwise
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.query)
    }
}

/// Error types for dq-check operations.
///
/// Per-check query errors never appear here raw: the runner converts them
/// into failed-check records so the remaining checks still run. Only the
/// aggregate failure and fatal setup problems reach the caller.
#[derive(Debug, Error)]
pub enum DqError {
    /// One or more checks failed during a run
    #[error("data quality check failure: {} of the configured checks failed", failures.len())]
    QualityCheckFailure { failures: Vec<engine::report::CheckFailure> },

    /// Connection identifier not present in the registry
    #[error("unknown connection id '{conn_id}'")]
    UnknownConnection { conn_id: String },

    /// Data source could not be opened
    #[error("failed to open connection '{conn_id}': {source}")]
    Connection {
        conn_id: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Suite configuration unreadable or invalid
    #[error("invalid configuration {path}: {message}")]
    Config { path: String, message: String },
}

/// Run a list of checks against a borrowed connection.
///
/// This is the host-facing entry point: every check is evaluated, then the
/// run fails with a single aggregate [`DqError::QualityCheckFailure`] if any
/// check failed. An empty check list is a successful no-op.
///
/// # Arguments
///
/// * `executor` - a live connection, borrowed for the duration of the run
/// * `checks` - ordered list of checks; not mutated during the run
///
/// # Returns
///
/// The full [`RunReport`] on success, or `QualityCheckFailure` carrying the
/// ordered list of (query, expected, actual-or-error) failures.
pub fn run_checks(
    executor: &mut dyn QueryExecutor,
    checks: &[CheckSpec],
) -> Result<RunReport, DqError> {
    let report = CheckRunner::new(executor).run(checks);
    report.verdict()?;
    Ok(report)
}

/// Run a whole suite: resolve the connection and execute its checks.
///
/// An empty suite is a successful no-op and never touches the connection
/// registry, so a suite file with no checks needs no `[connections]` table
/// and opens no database. Otherwise the connection is resolved from the
/// suite's registry (`conn_override` takes precedence over the suite's
/// default id) and borrowed for one run.
///
/// Unlike [`run_checks`], check failures do not surface here as an error;
/// the returned report carries them and the caller decides how to react
/// (the CLI maps them onto its exit code, hosts go through
/// [`RunReport::verdict`](engine::report::RunReport::verdict)). The error
/// path is reserved for fatal setup problems.
pub fn run_suite(
    config: &SuiteConfig,
    conn_override: Option<&str>,
) -> Result<RunReport, DqError> {
    if config.checks.is_empty() {
        log::info!("no data quality checks configured, nothing to run");
        return Ok(RunReport::new(Vec::new(), 0));
    }

    let registry = config.registry();
    let conn_id = conn_override.unwrap_or(&config.connection);
    let mut conn = registry.resolve(conn_id)?;

    Ok(CheckRunner::new(&mut conn).run(&config.checks))
}

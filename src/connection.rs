//! Query execution seam and connection registry.
//!
//! The runner only needs one operation from a data store: run a SQL
//! statement and hand back the first column of the first row. That operation
//! is the [`QueryExecutor`] trait; SQLite implements it here and tests drive
//! the runner through mock implementations.
//!
//! Connection handles are resolved by identifier string through
//! [`ConnectionRegistry`]. The registry does no pooling and no retries; a
//! resolve either yields a live connection or a fatal error.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::value::Value;
use crate::DqError;

/// Error raised by a single query execution.
///
/// These never propagate raw out of a run; the runner converts them into
/// failed-check records so the remaining checks still execute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Driver or SQL error
    #[error("query execution failed: {message}")]
    Execute { message: String },
    /// The query returned an empty result set
    #[error("query returned no rows")]
    NoRows,
}

/// A live connection able to answer scalar queries.
pub trait QueryExecutor {
    /// Execute `sql` and return the first column of the first row.
    fn query_scalar(&mut self, sql: &str) -> Result<Value, QueryError>;
}

impl QueryExecutor for rusqlite::Connection {
    fn query_scalar(&mut self, sql: &str) -> Result<Value, QueryError> {
        let mut stmt = self.prepare(sql).map_err(|e| QueryError::Execute {
            message: e.to_string(),
        })?;
        let mut rows = stmt.query([]).map_err(|e| QueryError::Execute {
            message: e.to_string(),
        })?;
        let row = rows
            .next()
            .map_err(|e| QueryError::Execute {
                message: e.to_string(),
            })?
            .ok_or(QueryError::NoRows)?;
        let value = row.get_ref(0).map_err(|e| QueryError::Execute {
            message: e.to_string(),
        })?;
        Ok(Value::from(value))
    }
}

/// Registry mapping connection identifier strings to data source locations.
///
/// Locations are SQLite database paths; `":memory:"` opens a fresh in-memory
/// database.
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    sources: HashMap<String, String>,
}

impl ConnectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ConnectionRegistry {
            sources: HashMap::new(),
        }
    }

    /// Register a data source under an identifier
    pub fn register(&mut self, conn_id: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(conn_id.into(), source.into());
    }

    /// Resolve an identifier into a live connection.
    ///
    /// Unknown identifiers and failed opens are fatal: the caller gets the
    /// error before any check has executed.
    pub fn resolve(&self, conn_id: &str) -> Result<rusqlite::Connection, DqError> {
        let source = self
            .sources
            .get(conn_id)
            .ok_or_else(|| DqError::UnknownConnection {
                conn_id: conn_id.to_string(),
            })?;

        debug!("resolving connection '{}' -> {}", conn_id, source);

        let conn = if source == ":memory:" {
            rusqlite::Connection::open_in_memory()
        } else {
            rusqlite::Connection::open(source)
        };

        conn.map_err(|e| DqError::Connection {
            conn_id: conn_id.to_string(),
            source: e,
        })
    }
}

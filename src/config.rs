//! Suite configuration.
//!
//! A suite file is TOML: a table of named connections, a default connection
//! id, and the ordered check list.
//!
//! ```toml
//! connection = "warehouse"
//!
//! [connections]
//! warehouse = "warehouse.db"
//!
//! [[checks]]
//! name = "orders.id not null"
//! query = "SELECT COUNT(*) FROM orders WHERE id IS NULL"
//! expected = 0
//! ```
//!
//! A file with no `[[checks]]` tables is a valid, empty suite.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::connection::ConnectionRegistry;
use crate::{CheckSpec, DqError};

fn default_conn_id() -> String {
    "default".to_string()
}

/// Parsed suite configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    /// Default connection id for runs that do not override it
    #[serde(default = "default_conn_id")]
    pub connection: String,
    /// Connection id -> data source location
    #[serde(default)]
    pub connections: HashMap<String, String>,
    /// Ordered check list
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

impl SuiteConfig {
    /// Load and validate a suite file
    pub fn load(path: &Path) -> Result<Self, DqError> {
        let text = fs::read_to_string(path).map_err(|e| DqError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&text).map_err(|message| DqError::Config {
            path: path.display().to_string(),
            message,
        })
    }

    /// Parse suite TOML from a string
    pub fn parse(text: &str) -> Result<Self, String> {
        let config: SuiteConfig = toml::from_str(text).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Build the connection registry from the `[connections]` table
    pub fn registry(&self) -> ConnectionRegistry {
        let mut registry = ConnectionRegistry::new();
        for (conn_id, source) in &self.connections {
            registry.register(conn_id, source);
        }
        registry
    }

    fn validate(&self) -> Result<(), String> {
        for (index, check) in self.checks.iter().enumerate() {
            if check.query.trim().is_empty() {
                return Err(format!("check #{} has an empty query", index + 1));
            }
        }
        if !self.checks.is_empty() && !self.connections.contains_key(&self.connection) {
            return Err(format!(
                "default connection '{}' is not declared in [connections]",
                self.connection
            ));
        }
        Ok(())
    }
}

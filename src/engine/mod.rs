//! Validation engine module.
//!
//! Provides the check runner and report aggregation.

pub mod report;
pub mod runner;

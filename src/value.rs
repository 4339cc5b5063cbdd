//! Scalar value domain for check comparison.
//!
//! Queries return one scalar per check; expected values come from suite
//! configuration. Both sides live in this enum so comparison is explicit
//! and strict: a match requires the same type and the same value, with no
//! coercion between text and numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A comparable scalar returned by a check query or declared as expected.
///
/// The untagged serde representation lets configuration files write
/// `expected = 0`, `expected = "pending"`, `expected = 3.5` or
/// `expected = true` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean (stored by SQLite as 0/1 integers)
    Bool(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Real(f64),
    /// Text
    Text(String),
    /// Raw bytes; only equal to an expected blob with the same bytes
    Blob(Vec<u8>),
}

impl Value {
    /// Strict equality between an expected value and an actual query result.
    ///
    /// Types must match; the one carve-out is booleans: SQLite has no boolean
    /// storage class, so an expected `Bool` also matches the 0/1 integer a
    /// driver returns for it. `Real` compares by exact f64 equality, so NaN
    /// never matches anything. A `Blob` never matches `Text`, even when its
    /// bytes are valid UTF-8.
    pub fn matches(&self, actual: &Value) -> bool {
        match (self, actual) {
            (Value::Bool(b), Value::Integer(i)) | (Value::Integer(i), Value::Bool(b)) => {
                *i == i64::from(*b)
            }
            _ => self == actual,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

impl From<rusqlite::types::ValueRef<'_>> for Value {
    fn from(v: rusqlite::types::ValueRef<'_>) -> Self {
        match v {
            rusqlite::types::ValueRef::Null => Value::Null,
            rusqlite::types::ValueRef::Integer(i) => Value::Integer(i),
            rusqlite::types::ValueRef::Real(r) => Value::Real(r),
            rusqlite::types::ValueRef::Text(t) => {
                Value::Text(String::from_utf8_lossy(t).into_owned())
            }
            rusqlite::types::ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Missing or empty cell
    #[default]
    Empty,
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Value {
    /// Get the display text for the cell.
    ///
    /// Integral numbers render without a trailing fraction (`30`, not `30.0`)
    /// so that values round-trip cleanly through search and export.
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                format!("{}", *n as i64)
            }
            Self::Number(n) => format!("{}", n),
            Self::Bool(b) => b.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Three-way comparison with a total order across all variants.
    ///
    /// Same-type values compare naturally (numeric for numbers, lexicographic
    /// for text). Mixed types fall back to a fixed type rank so a sort over
    /// heterogeneous columns is still deterministic: Empty < Bool < Number < Text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Empty => serializer.serialize_unit(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

static EMPTY: Value = Value::Empty;

/// One row of data, keyed by column identifiers.
///
/// Records are opaque mappings; a key absent from the map reads as
/// [`Value::Empty`]. Identity is positional within the owning dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for constructing records inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a field; missing keys read as [`Value::Empty`].
    pub fn get(&self, key: &str) -> &Value {
        self.values.get(key).unwrap_or(&EMPTY)
    }

    /// Display text for a field (empty string when missing).
    pub fn display(&self, key: &str) -> String {
        self.get(key).display()
    }
}

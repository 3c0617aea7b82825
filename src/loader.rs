//! Data ingestion: CSV and JSON into a column schema plus records.
//!
//! The column schema is derived from the input (CSV header order, or JSON
//! object keys in encounter order). Cell scalars are type-inferred so that
//! numeric columns sort numerically instead of lexicographically.

use std::io::Read;

use thiserror::Error;

use crate::column::ColumnSpec;
use crate::record::{Record, Value};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

/// Ingestion failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON input must be an array of objects")]
    JsonShape,
    #[error("input contained no columns")]
    NoColumns,
}

/// Guess the input format from its leading character.
pub fn sniff_format(input: &str) -> InputFormat {
    match input.trim_start().chars().next() {
        Some('[') | Some('{') => InputFormat::Json,
        _ => InputFormat::Csv,
    }
}

/// Infer a scalar from raw text: empty, boolean, finite number, else text.
pub fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Empty;
    }
    match trimmed {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return Value::Number(n);
        }
    }
    Value::Text(raw.to_string())
}

/// Load CSV with a header row. Column labels are the trimmed header names.
pub fn load_csv<R: Read>(reader: R) -> Result<(Vec<ColumnSpec>, Vec<Record>), LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoColumns);
    }

    let columns: Vec<ColumnSpec> = headers
        .iter()
        .map(|h| ColumnSpec::new(h.clone(), h.clone()))
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (i, field) in row.iter().enumerate() {
            if let Some(key) = headers.get(i) {
                record.insert(key.clone(), infer_value(field));
            }
        }
        records.push(record);
    }

    Ok((columns, records))
}

/// Load a JSON array of objects. Columns are object keys in encounter order
/// across the array; nested values flatten to their compact JSON text.
pub fn load_json(input: &str) -> Result<(Vec<ColumnSpec>, Vec<Record>), LoadError> {
    let parsed: serde_json::Value = serde_json::from_str(input)?;
    let array = parsed.as_array().ok_or(LoadError::JsonShape)?;

    let mut keys: Vec<String> = Vec::new();
    let mut records = Vec::new();
    for item in array {
        let object = item.as_object().ok_or(LoadError::JsonShape)?;
        let mut record = Record::new();
        for (key, value) in object {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.clone());
            }
            record.insert(key.clone(), json_scalar(value));
        }
        records.push(record);
    }

    if keys.is_empty() {
        return Err(LoadError::NoColumns);
    }

    let columns = keys
        .iter()
        .map(|k| ColumnSpec::new(k.clone(), k.clone()))
        .collect();
    Ok((columns, records))
}

fn json_scalar(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Empty,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Empty),
        serde_json::Value::String(s) => Value::Text(s.clone()),
        other => Value::Text(other.to_string()),
    }
}

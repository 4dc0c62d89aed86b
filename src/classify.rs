//! Date-column classification and in-place coercion.
//!
//! Policy (name-hint variant): a column is a date candidate when its lowercased name
//! contains one of [`DATE_HINTS`]. Candidates are coerced to [`DataType::Date`] only if
//! parsing every cell yields at least one non-null date; rejected candidates keep their
//! original values and type. Columns already typed as dates (e.g. real Excel date cells)
//! are recorded as date columns without reparsing, regardless of name.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{Column, DataType, Table, Value};

/// Name substrings that mark a column as a date candidate.
pub const DATE_HINTS: &[&str] = &["date", "dt", "timestamp"];

/// Whether a column name marks it as a date candidate.
pub fn is_date_candidate(name: &str) -> bool {
    let lower = name.to_lowercase();
    DATE_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Best-effort date parse over a fixed, ordered list of common formats.
///
/// Pure function of its input: no locale or global state, so results are reproducible
/// across environments. Datetime inputs are truncated to their calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f%:z",
    ];

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Classify and coerce date columns in place.
///
/// Returns the names of all date-typed columns (pre-existing plus newly coerced), in
/// column order. Malformed cells in accepted columns become [`Value::Null`]; a candidate
/// with zero parseable cells is left untouched.
pub fn coerce_date_columns(table: &mut Table) -> Vec<String> {
    let mut date_columns = Vec::new();
    for column in &mut table.columns {
        if column.data_type == DataType::Date {
            date_columns.push(column.name.clone());
            continue;
        }
        if !is_date_candidate(&column.name) {
            continue;
        }
        if try_coerce(column) {
            date_columns.push(column.name.clone());
        }
    }
    date_columns
}

/// Attempt to parse every cell of `column` as a date. Accepts the coercion (rewriting
/// values and type) only if at least one cell parsed.
fn try_coerce(column: &mut Column) -> bool {
    let parsed: Vec<Value> = column
        .values
        .iter()
        .map(|v| match v {
            Value::Date(d) => Value::Date(*d),
            Value::Utf8(s) => parse_date(s).map(Value::Date).unwrap_or(Value::Null),
            _ => Value::Null,
        })
        .collect();

    if parsed.iter().all(Value::is_null) {
        return false;
    }
    column.values = parsed;
    column.data_type = DataType::Date;
    true
}

//! Core data model types.
//!
//! This crate loads a spreadsheet into an in-memory [`Table`]: an ordered list of named
//! [`Column`]s, each holding a fixed-length sequence of tagged [`Value`] cells. There is no
//! user-provided schema; column names come from the header row and each column's [`DataType`]
//! is inferred from its content at load time.

use chrono::NaiveDate;

/// Inferred logical type of a [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string (also the fallback for mixed/unknown content).
    Utf8,
    /// Calendar date.
    Date,
}

impl DataType {
    /// Whether columns of this type feed the numeric descriptive statistics.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }
}

/// A single tagged cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Calendar date.
    Date(NaiveDate),
}

impl Value {
    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

/// A named column: inferred type plus a cell per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name from the header row.
    pub name: String,
    /// Inferred data type.
    pub data_type: DataType,
    /// Cell values, one per row.
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, data_type: DataType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            data_type,
            values,
        }
    }

    /// Count of null cells.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// In-memory tabular dataset, stored column-major.
///
/// All columns share the same length; column order is the insertion order from the
/// source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered columns.
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns do not all have the same length.
    pub fn new(columns: Vec<Column>) -> Self {
        if let Some(first) = columns.first() {
            let len = first.values.len();
            assert!(
                columns.iter().all(|c| c.values.len() == len),
                "all columns must have the same row count"
            );
        }
        Self { columns }
    }

    /// Number of rows (shared across all columns).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

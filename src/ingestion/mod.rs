//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`load_table_from_path`], which:
//!
//! - fails fast if the input file does not exist
//! - auto-detects the format by file extension (or you can force one via [`LoadOptions`])
//! - loads the file into an in-memory [`crate::types::Table`], inferring column types
//!
//! Format-specific functions are also available under [`csv`] and [`excel`].

use std::path::Path;

use crate::error::{SummaryError, SummaryResult};
use crate::types::{DataType, Table, Value};

pub mod csv;
pub mod excel;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values.
    Csv,
    /// Spreadsheet/workbook formats.
    Excel,
}

impl TableFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(Self::Excel),
            _ => None,
        }
    }
}

/// Options controlling table loading. Use [`Default`] for common cases.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// If `None`, auto-detect format from the file extension.
    pub format: Option<TableFormat>,
    /// Excel sheet to read; `None` reads the first sheet. Ignored for CSV.
    pub sheet_name: Option<String>,
}

/// Load a tabular input file into an in-memory [`Table`].
///
/// Returns [`SummaryError::MissingInput`] before doing anything else if `path`
/// does not exist.
pub fn load_table_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> SummaryResult<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SummaryError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    match format {
        TableFormat::Csv => csv::load_csv_from_path(path),
        TableFormat::Excel => excel::load_excel_from_path(path, options.sheet_name.as_deref()),
    }
}

fn infer_format_from_path(path: &Path) -> SummaryResult<TableFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| SummaryError::InvalidInput {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    TableFormat::from_extension(ext).ok_or_else(|| SummaryError::InvalidInput {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// Unify a column of tagged cells into a single [`DataType`].
///
/// All non-null cells of one variant keep that variant's type; a mix of integers and
/// floats is promoted to `Float64` (integer cells are rewritten in place); any other
/// mix, or an all-null column, falls back to `Utf8` with cells left as tagged.
pub(crate) fn unify_column_type(values: &mut [Value]) -> DataType {
    let mut ints = 0usize;
    let mut floats = 0usize;
    let mut bools = 0usize;
    let mut dates = 0usize;
    let mut non_null = 0usize;

    for v in values.iter() {
        match v {
            Value::Null => continue,
            Value::Int64(_) => ints += 1,
            Value::Float64(_) => floats += 1,
            Value::Bool(_) => bools += 1,
            Value::Utf8(_) => {}
            Value::Date(_) => dates += 1,
        }
        non_null += 1;
    }

    if non_null == 0 {
        return DataType::Utf8;
    }
    if dates == non_null {
        return DataType::Date;
    }
    if bools == non_null {
        return DataType::Bool;
    }
    if ints == non_null {
        return DataType::Int64;
    }
    if ints + floats == non_null {
        for v in values.iter_mut() {
            if let Value::Int64(i) = v {
                *v = Value::Float64(*i as f64);
            }
        }
        return DataType::Float64;
    }
    DataType::Utf8
}

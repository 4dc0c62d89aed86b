//! Excel ingestion implementation.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::classify::parse_date;
use crate::error::{SummaryError, SummaryResult};
use crate::types::{Column, Table, Value};

use super::unify_column_type;

/// Load an Excel document (`.xlsx`, `.xls`, `.ods`, etc.) into an in-memory [`Table`].
///
/// Behavior:
/// - Picks `sheet_name` if provided; otherwise uses the first sheet in the workbook
/// - Detects the first non-empty row as the header row; header cells define column names
/// - Reads remaining rows as tagged cell values and infers each column's type from content
pub fn load_excel_from_path(
    path: impl AsRef<Path>,
    sheet_name: Option<&str>,
) -> SummaryResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| SummaryError::InvalidInput {
                message: "workbook has no sheets".to_string(),
            })?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    load_sheet_range(&sheet, &range)
}

fn load_sheet_range(sheet: &str, range: &calamine::Range<Data>) -> SummaryResult<Table> {
    let (header_row_idx, headers) = find_header_row(range).map_err(|e| match e {
        SummaryError::InvalidInput { message } => SummaryError::InvalidInput {
            message: format!("sheet '{sheet}': {message}"),
        },
        other => other,
    })?;

    let width = headers.len();
    let mut column_values: Vec<Vec<Value>> = vec![Vec::new(); width];
    for (idx0, row) in range.rows().enumerate() {
        if idx0 <= header_row_idx {
            continue;
        }
        for (col_idx, values) in column_values.iter_mut().enumerate() {
            let cell = row.get(col_idx).unwrap_or(&Data::Empty);
            values.push(convert_cell(cell));
        }
    }

    let columns = headers
        .into_iter()
        .zip(column_values)
        .map(|(name, mut values)| {
            let data_type = unify_column_type(&mut values);
            Column::new(name, data_type, values)
        })
        .collect();
    Ok(Table::new(columns))
}

/// Returns the index of the first non-empty row and its cells rendered as header names.
fn find_header_row(range: &calamine::Range<Data>) -> SummaryResult<(usize, Vec<String>)> {
    for (idx0, row) in range.rows().enumerate() {
        if row.iter().any(|c| !matches!(c, Data::Empty)) {
            let headers = row.iter().map(cell_to_header_string).collect();
            return Ok((idx0, headers));
        }
    }
    Err(SummaryError::InvalidInput {
        message: "sheet has no non-empty rows (no header row found)".to_string(),
    })
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => String::new(),
    }
}

fn convert_cell(c: &Data) -> Value {
    match c {
        Data::Empty => Value::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::Utf8(trimmed.to_string())
            }
        }
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => Value::Float64(*f),
        Data::Bool(b) => Value::Bool(*b),
        // Cells formatted as dates in the workbook arrive already typed.
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => Value::Date(ndt.date()),
            None => Value::Null,
        },
        Data::DateTimeIso(s) => match parse_date(s) {
            Some(d) => Value::Date(d),
            None => Value::Utf8(s.clone()),
        },
        Data::DurationIso(s) => Value::Utf8(s.clone()),
        // Formula errors (#DIV/0!, #N/A, ...) are treated as missing.
        Data::Error(_) => Value::Null,
    }
}

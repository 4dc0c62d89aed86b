//! CSV ingestion implementation.

use std::path::Path;

use crate::error::SummaryResult;
use crate::types::{Column, DataType, Table, Value};

/// Load a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - The first record is the header row and defines column names.
/// - Empty/whitespace-only fields become [`Value::Null`].
/// - Each column's type is inferred from its non-null fields: all-integer columns become
///   `Int64`, all-numeric become `Float64`, all-boolean become `Bool`, anything else `Utf8`.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> SummaryResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> SummaryResult<Table> {
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    // Column-major raw storage; None marks an empty field.
    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        for (col_idx, raw) in raw_columns.iter_mut().enumerate() {
            let field = record.get(col_idx).unwrap_or("").trim();
            raw.push(if field.is_empty() {
                None
            } else {
                Some(field.to_string())
            });
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, raw)| {
            let data_type = infer_text_column_type(&raw);
            let values = raw.into_iter().map(|f| typed_value(data_type, f)).collect();
            Column::new(name, data_type, values)
        })
        .collect();
    Ok(Table::new(columns))
}

/// Infer a column type from raw text fields: the narrowest type that every
/// non-null field parses into, falling back to `Utf8`.
fn infer_text_column_type(raw: &[Option<String>]) -> DataType {
    let mut non_null = raw.iter().flatten().peekable();
    if non_null.peek().is_none() {
        return DataType::Utf8;
    }
    if non_null.clone().all(|f| f.parse::<i64>().is_ok()) {
        return DataType::Int64;
    }
    if non_null.clone().all(|f| f.parse::<f64>().is_ok()) {
        return DataType::Float64;
    }
    if non_null.clone().all(|f| parse_bool(f).is_some()) {
        return DataType::Bool;
    }
    DataType::Utf8
}

fn typed_value(data_type: DataType, field: Option<String>) -> Value {
    let Some(field) = field else {
        return Value::Null;
    };
    match data_type {
        DataType::Int64 => reparsed(field.parse::<i64>().ok(), &field, Value::Int64),
        DataType::Float64 => reparsed(field.parse::<f64>().ok(), &field, Value::Float64),
        DataType::Bool => reparsed(parse_bool(&field), &field, Value::Bool),
        DataType::Utf8 | DataType::Date => Value::Utf8(field),
    }
}

/// Invariant: [`infer_text_column_type`] only picks a type after every non-null field
/// in the column parsed as it, so `parsed` is always `Some`. A `None` here means the
/// two passes disagree; it degrades to a missing cell.
fn reparsed<T>(parsed: Option<T>, raw: &str, wrap: fn(T) -> Value) -> Value {
    debug_assert!(parsed.is_some(), "field '{raw}' failed to re-parse after inference");
    parsed.map(wrap).unwrap_or(Value::Null)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Some(true),
        "false" | "f" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::load_csv_from_reader;
    use crate::types::{DataType, Value};

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn infers_integer_float_and_text_columns() {
        let data = "id,amount,memo\n1,10.5,first\n2,20.0,\n3,30.25,third\n";
        let table = load_csv_from_reader(&mut reader(data)).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column("id").unwrap().data_type, DataType::Int64);
        assert_eq!(table.column("amount").unwrap().data_type, DataType::Float64);
        assert_eq!(table.column("memo").unwrap().data_type, DataType::Utf8);
        assert_eq!(table.column("memo").unwrap().values[1], Value::Null);
    }

    #[test]
    fn whole_number_fields_stay_integer() {
        let data = "n\n10\n20\n30\n";
        let table = load_csv_from_reader(&mut reader(data)).unwrap();
        let col = table.column("n").unwrap();
        assert_eq!(col.data_type, DataType::Int64);
        assert_eq!(col.values[0], Value::Int64(10));
    }

    #[test]
    fn mixed_content_falls_back_to_text() {
        let data = "x\n1\ntwo\n3\n";
        let table = load_csv_from_reader(&mut reader(data)).unwrap();
        assert_eq!(table.column("x").unwrap().data_type, DataType::Utf8);
        assert_eq!(
            table.column("x").unwrap().values[0],
            Value::Utf8("1".to_string())
        );
    }

    #[test]
    fn all_boolean_fields_become_bool_with_nulls_preserved() {
        let data = "flag,memo\nyes,a\n,b\nno,c\n";
        let table = load_csv_from_reader(&mut reader(data)).unwrap();
        let col = table.column("flag").unwrap();
        assert_eq!(col.data_type, DataType::Bool);
        assert_eq!(col.values[0], Value::Bool(true));
        assert_eq!(col.values[1], Value::Null);
        assert_eq!(col.values[2], Value::Bool(false));
    }

    #[test]
    fn header_only_csv_yields_empty_columns() {
        let data = "a,b\n";
        let table = load_csv_from_reader(&mut reader(data)).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column("a").unwrap().data_type, DataType::Utf8);
    }
}

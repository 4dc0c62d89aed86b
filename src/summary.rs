//! The [`Summary`] snapshot and its builder.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::stats::{describe, DescriptiveStats};
use crate::types::{Column, DataType, Table, Value};

/// Min/max/count for a single date column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// Earliest date, formatted `YYYY-MM-DD`.
    pub min: String,
    /// Latest date, formatted `YYYY-MM-DD`.
    pub max: String,
    /// Count of non-null values.
    pub non_null: usize,
}

/// Immutable descriptive summary of a [`Table`].
///
/// Computed once by [`build_summary`] and read-only thereafter. Maps are `BTreeMap`s so
/// serialization is byte-deterministic; renderers that want input column order iterate
/// [`Summary::columns`] and index into the maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Column names in insertion order.
    pub columns: Vec<String>,
    /// Null/missing cell count per column; keys are exactly `columns`.
    pub missing_counts: BTreeMap<String, usize>,
    /// Per-date-column range; keyed by the date columns with at least one non-null value.
    pub date_ranges: BTreeMap<String, DateRange>,
    /// Per-numeric-column descriptive statistics; empty if no numeric columns exist.
    pub numeric_descriptive_stats: BTreeMap<String, DescriptiveStats>,
}

/// Build a [`Summary`] from a coerced table and the date-column list produced by
/// [`crate::classify::coerce_date_columns`].
///
/// Pure computation: fully determined by the table contents, no I/O.
pub fn build_summary(table: &Table, date_columns: &[String]) -> Summary {
    let columns: Vec<String> = table.column_names().map(str::to_string).collect();

    let missing_counts = table
        .columns
        .iter()
        .map(|c| (c.name.clone(), c.null_count()))
        .collect();

    let mut date_ranges = BTreeMap::new();
    for name in date_columns {
        let Some(column) = table.column(name) else {
            continue;
        };
        if let Some(range) = date_range(column) {
            date_ranges.insert(name.clone(), range);
        }
    }

    let mut numeric_descriptive_stats = BTreeMap::new();
    for column in &table.columns {
        if !column.data_type.is_numeric() {
            continue;
        }
        let values: Vec<f64> = column.values.iter().filter_map(Value::as_f64).collect();
        if let Some(stats) = describe(&values) {
            numeric_descriptive_stats.insert(column.name.clone(), stats);
        }
    }

    Summary {
        row_count: table.row_count(),
        column_count: table.column_count(),
        columns,
        missing_counts,
        date_ranges,
        numeric_descriptive_stats,
    }
}

/// Min/max/count over a date column's non-null values; `None` if all cells are null.
fn date_range(column: &Column) -> Option<DateRange> {
    debug_assert_eq!(column.data_type, DataType::Date);
    let mut dates = column.values.iter().filter_map(|v| match v {
        Value::Date(d) => Some(*d),
        _ => None,
    });

    let first = dates.next()?;
    let (min, max, non_null) = dates.fold((first, first, 1usize), |(min, max, n), d| {
        (min.min(d), max.max(d), n + 1)
    });

    Some(DateRange {
        min: min.format("%Y-%m-%d").to_string(),
        max: max.format("%Y-%m-%d").to_string(),
        non_null,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::build_summary;
    use crate::classify::coerce_date_columns;
    use crate::types::{Column, DataType, Table, Value};

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new(
                "entry_id",
                DataType::Int64,
                vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)],
            ),
            Column::new(
                "post_dt",
                DataType::Utf8,
                vec![
                    Value::Utf8("2023-01-05".into()),
                    Value::Utf8("2023-01-07".into()),
                    Value::Utf8("not-a-date".into()),
                ],
            ),
            Column::new(
                "amount",
                DataType::Float64,
                vec![Value::Float64(10.0), Value::Float64(20.0), Value::Float64(30.0)],
            ),
            Column::new(
                "memo",
                DataType::Utf8,
                vec![Value::Utf8("a".into()), Value::Null, Value::Null],
            ),
        ])
    }

    #[test]
    fn missing_count_keys_equal_columns() {
        let mut table = sample_table();
        let dates = coerce_date_columns(&mut table);
        let summary = build_summary(&table, &dates);

        let mut keys: Vec<&str> = summary.missing_counts.keys().map(String::as_str).collect();
        let mut cols: Vec<&str> = summary.columns.iter().map(String::as_str).collect();
        keys.sort_unstable();
        cols.sort_unstable();
        assert_eq!(keys, cols);
        for &count in summary.missing_counts.values() {
            assert!(count <= summary.row_count);
        }
    }

    #[test]
    fn coerced_date_column_reports_range_and_non_null_count() {
        let mut table = sample_table();
        let dates = coerce_date_columns(&mut table);
        let summary = build_summary(&table, &dates);

        let range = &summary.date_ranges["post_dt"];
        assert_eq!(range.min, "2023-01-05");
        assert_eq!(range.max, "2023-01-07");
        assert_eq!(range.non_null, 2);
        // The unparseable cell counts as missing after coercion.
        assert_eq!(summary.missing_counts["post_dt"], 1);
    }

    #[test]
    fn numeric_stats_cover_int_and_float_columns() {
        let mut table = sample_table();
        let dates = coerce_date_columns(&mut table);
        let summary = build_summary(&table, &dates);

        let amount = &summary.numeric_descriptive_stats["amount"];
        assert_eq!(amount.count, 3);
        assert_eq!(amount.min, 10.0);
        assert_eq!(amount.max, 30.0);
        assert_eq!(amount.mean, 20.0);

        assert!(summary.numeric_descriptive_stats.contains_key("entry_id"));
        assert!(!summary.numeric_descriptive_stats.contains_key("memo"));
    }

    #[test]
    fn all_null_date_column_is_omitted_from_ranges() {
        let table = Table::new(vec![Column::new(
            "void_date",
            DataType::Date,
            vec![Value::Null, Value::Null],
        )]);
        let summary = build_summary(&table, &["void_date".to_string()]);
        assert!(summary.date_ranges.is_empty());
        assert_eq!(summary.missing_counts["void_date"], 2);
    }

    #[test]
    fn empty_table_yields_degenerate_but_valid_summary() {
        let table = Table::new(vec![
            Column::new("entry_id", DataType::Utf8, vec![]),
            Column::new("post_dt", DataType::Utf8, vec![]),
        ]);
        let summary = build_summary(&table, &[]);
        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.column_count, 2);
        assert!(summary.missing_counts.values().all(|&c| c == 0));
        assert!(summary.date_ranges.is_empty());
        assert!(summary.numeric_descriptive_stats.is_empty());
    }

    #[test]
    fn single_date_value_range_collapses_to_itself() {
        let table = Table::new(vec![Column::new(
            "dt",
            DataType::Date,
            vec![Value::Null, date(2024, 3, 9)],
        )]);
        let summary = build_summary(&table, &["dt".to_string()]);
        let range = &summary.date_ranges["dt"];
        assert_eq!(range.min, "2024-03-09");
        assert_eq!(range.max, "2024-03-09");
        assert_eq!(range.non_null, 1);
    }
}

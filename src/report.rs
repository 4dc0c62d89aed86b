//! Report rendering: console output and the multi-format report directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SummaryResult;
use crate::stats::DescriptiveStats;
use crate::summary::Summary;

/// File name of the JSON report.
pub const SUMMARY_JSON: &str = "summary.json";
/// File name of the Markdown report.
pub const SUMMARY_MD: &str = "summary.md";
/// File name of the per-column missing-count CSV.
pub const MISSING_COUNTS_CSV: &str = "missing_counts.csv";
/// File name of the per-date-column range CSV (only written if date columns exist).
pub const DATE_RANGES_CSV: &str = "date_ranges.csv";
/// File name of the numeric statistics CSV (only written if numeric columns exist).
pub const NUMERIC_STATS_CSV: &str = "numeric_descriptive_stats.csv";

/// Render the summary to a writer as one `- key: value` line per top-level field,
/// in field order. Map-valued fields use their compact JSON representation.
pub fn render_console<W: std::io::Write>(summary: &Summary, out: &mut W) -> SummaryResult<()> {
    writeln!(out, "- row_count: {}", summary.row_count)?;
    writeln!(out, "- column_count: {}", summary.column_count)?;
    writeln!(out, "- columns: {}", serde_json::to_string(&summary.columns)?)?;
    writeln!(
        out,
        "- missing_counts: {}",
        serde_json::to_string(&summary.missing_counts)?
    )?;
    writeln!(
        out,
        "- date_ranges: {}",
        serde_json::to_string(&summary.date_ranges)?
    )?;
    writeln!(
        out,
        "- numeric_descriptive_stats: {}",
        serde_json::to_string(&summary.numeric_descriptive_stats)?
    )?;
    Ok(())
}

/// Write all report files into `out_dir` (created if absent).
///
/// Always writes `summary.json`, `summary.md`, and `missing_counts.csv`;
/// `date_ranges.csv` and `numeric_descriptive_stats.csv` are written only when the
/// summary has date/numeric columns respectively. Returns the written paths in
/// write order.
pub fn write_reports(summary: &Summary, out_dir: impl AsRef<Path>) -> SummaryResult<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let json_path = out_dir.join(SUMMARY_JSON);
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    fs::write(&json_path, json)?;
    written.push(json_path);

    let md_path = out_dir.join(SUMMARY_MD);
    fs::write(&md_path, render_markdown(summary))?;
    written.push(md_path);

    let missing_path = out_dir.join(MISSING_COUNTS_CSV);
    write_missing_counts_csv(summary, &missing_path)?;
    written.push(missing_path);

    if !summary.date_ranges.is_empty() {
        let ranges_path = out_dir.join(DATE_RANGES_CSV);
        write_date_ranges_csv(summary, &ranges_path)?;
        written.push(ranges_path);
    }

    if !summary.numeric_descriptive_stats.is_empty() {
        let stats_path = out_dir.join(NUMERIC_STATS_CSV);
        write_numeric_stats_csv(summary, &stats_path)?;
        written.push(stats_path);
    }

    Ok(written)
}

/// Render the Markdown report. Per-column listings follow input column order.
fn render_markdown(summary: &Summary) -> String {
    let mut md = String::new();
    md.push_str("# JE Samples Summary\n\n");
    md.push_str(&format!("- Rows: {}\n", summary.row_count));
    md.push_str(&format!("- Columns: {}\n", summary.column_count));

    md.push_str("\n## Date Ranges\n\n");
    if summary.date_ranges.is_empty() {
        md.push_str("No date columns detected.\n");
    } else {
        for name in &summary.columns {
            if let Some(range) = summary.date_ranges.get(name) {
                md.push_str(&format!(
                    "- {name}: {min} to {max} (non-null: {n})\n",
                    min = range.min,
                    max = range.max,
                    n = range.non_null
                ));
            }
        }
    }

    md.push_str("\n## Missing Counts\n\n");
    for name in &summary.columns {
        if let Some(count) = summary.missing_counts.get(name) {
            md.push_str(&format!("- {name}: {count}\n"));
        }
    }

    md
}

fn write_missing_counts_csv(summary: &Summary, path: &Path) -> SummaryResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["column", "missing_count"])?;
    for name in &summary.columns {
        if let Some(count) = summary.missing_counts.get(name) {
            wtr.write_record([name.as_str(), &count.to_string()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn write_date_ranges_csv(summary: &Summary, path: &Path) -> SummaryResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["column", "min", "max", "non_null"])?;
    for name in &summary.columns {
        if let Some(range) = summary.date_ranges.get(name) {
            wtr.write_record([
                name.as_str(),
                &range.min,
                &range.max,
                &range.non_null.to_string(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Statistics table transposed the pandas way: one column per numeric input column,
/// one row per statistic.
fn write_numeric_stats_csv(summary: &Summary, path: &Path) -> SummaryResult<()> {
    let numeric_columns: Vec<&str> = summary
        .columns
        .iter()
        .filter(|name| summary.numeric_descriptive_stats.contains_key(*name))
        .map(String::as_str)
        .collect();

    let mut wtr = csv::Writer::from_path(path)?;
    let mut header = vec!["statistic"];
    header.extend(numeric_columns.iter().copied());
    wtr.write_record(&header)?;

    let per_column: Vec<[String; 8]> = numeric_columns
        .iter()
        .map(|name| summary.numeric_descriptive_stats[*name].labeled_values())
        .collect();

    for (row_idx, label) in DescriptiveStats::LABELS.iter().enumerate() {
        let mut record = vec![(*label).to_string()];
        record.extend(per_column.iter().map(|vals| vals[row_idx].clone()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

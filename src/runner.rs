//! Run orchestration: load, coerce, summarize, and write reports.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::classify::coerce_date_columns;
use crate::error::SummaryResult;
use crate::ingestion::{load_table_from_path, LoadOptions};
use crate::observability::{severity_for_error, LoadStats, RunContext, RunObserver};
use crate::report::write_reports;
use crate::summary::{build_summary, Summary};

/// Configuration for a summarizer run.
///
/// Input and output locations are explicit fields rather than process-wide constants so
/// runs against synthetic inputs (tests) need no filesystem conventions.
#[derive(Clone)]
pub struct SummarizerConfig {
    /// Path of the spreadsheet to summarize.
    pub input_path: PathBuf,
    /// Directory the report files are written into (created if absent).
    pub output_dir: PathBuf,
    /// Excel sheet to read; `None` reads the first sheet. Ignored for CSV input.
    pub sheet_name: Option<String>,
    /// Optional observer for run events.
    pub observer: Option<Arc<dyn RunObserver>>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("je_samples.xlsx"),
            output_dir: PathBuf::from("summary_output"),
            sheet_name: None,
            observer: None,
        }
    }
}

impl fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("input_path", &self.input_path)
            .field("output_dir", &self.output_dir)
            .field("sheet_name", &self.sheet_name)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Load the input table, coerce date columns, and build the [`Summary`].
///
/// Pure computation after the single input read; writes nothing. Fails with
/// [`crate::SummaryError::MissingInput`] before touching anything else if the input
/// file does not exist.
pub fn summarize(config: &SummarizerConfig) -> SummaryResult<Summary> {
    let options = LoadOptions {
        format: None,
        sheet_name: config.sheet_name.clone(),
    };
    let mut table = load_table_from_path(&config.input_path, &options)?;
    let date_columns = coerce_date_columns(&mut table);
    Ok(build_summary(&table, &date_columns))
}

/// Full run: [`summarize`], then write the report files into `config.output_dir`.
///
/// Run events are reported to `config.observer` when one is set. On failure no output
/// file or directory is created beyond what was already written.
pub fn run(config: &SummarizerConfig) -> SummaryResult<Summary> {
    let ctx = RunContext {
        input_path: config.input_path.clone(),
    };
    let observer = config.observer.as_deref();

    let result = run_inner(config, &ctx, observer);
    if let Err(e) = &result {
        if let Some(obs) = observer {
            obs.on_failure(&ctx, severity_for_error(e), e);
        }
    }
    result
}

fn run_inner(
    config: &SummarizerConfig,
    ctx: &RunContext,
    observer: Option<&dyn RunObserver>,
) -> SummaryResult<Summary> {
    let summary = summarize(config)?;
    if let Some(obs) = observer {
        obs.on_load_success(
            ctx,
            LoadStats {
                rows: summary.row_count,
                columns: summary.column_count,
            },
        );
    }

    let written = write_reports(&summary, &config.output_dir)?;
    if let Some(obs) = observer {
        for path in &written {
            obs.on_report_written(ctx, path);
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{summarize, SummarizerConfig};
    use crate::error::SummaryError;

    #[test]
    fn default_config_points_at_sample_workbook() {
        let config = SummarizerConfig::default();
        assert_eq!(config.input_path, PathBuf::from("je_samples.xlsx"));
        assert_eq!(config.output_dir, PathBuf::from("summary_output"));
        assert!(config.sheet_name.is_none());
    }

    #[test]
    fn missing_input_fails_with_dedicated_error() {
        let config = SummarizerConfig {
            input_path: PathBuf::from("definitely_not_here.xlsx"),
            ..Default::default()
        };
        let err = summarize(&config).unwrap_err();
        assert!(matches!(err, SummaryError::MissingInput { .. }));
        assert!(err.to_string().contains("definitely_not_here.xlsx"));
    }
}

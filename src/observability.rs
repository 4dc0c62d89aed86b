//! Run-event observers.
//!
//! The summarizer reports load outcomes and written report files to an optional
//! [`RunObserver`]. Implementors can record logs or metrics; [`StdErrObserver`] and
//! [`FileObserver`] cover the common cases and [`CompositeObserver`] fans out to many.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SummaryError;

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (run failed).
    Error,
    /// Critical error (missing input or other I/O failures).
    Critical,
}

/// Classify an error for observer reporting.
pub fn severity_for_error(e: &SummaryError) -> RunSeverity {
    match e {
        SummaryError::MissingInput { .. } | SummaryError::Io(_) => RunSeverity::Critical,
        SummaryError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => RunSeverity::Critical,
            _ => RunSeverity::Error,
        },
        SummaryError::Excel(_) | SummaryError::Json(_) | SummaryError::InvalidInput { .. } => {
            RunSeverity::Error
        }
    }
}

/// Context about a summarizer run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// The input path being summarized.
    pub input_path: PathBuf,
}

/// Minimal stats reported after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded rows.
    pub rows: usize,
    /// Number of loaded columns.
    pub columns: usize,
}

/// Observer interface for run outcomes.
pub trait RunObserver: Send + Sync {
    /// Called when the input table loads successfully.
    fn on_load_success(&self, _ctx: &RunContext, _stats: LoadStats) {}

    /// Called when the run fails.
    fn on_failure(&self, _ctx: &RunContext, _severity: RunSeverity, _error: &SummaryError) {}

    /// Called after each report file is written.
    fn on_report_written(&self, _ctx: &RunContext, _path: &Path) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RunObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn RunObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl RunObserver for CompositeObserver {
    fn on_load_success(&self, ctx: &RunContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_load_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &SummaryError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_report_written(&self, ctx: &RunContext, path: &Path) {
        for o in &self.observers {
            o.on_report_written(ctx, path);
        }
    }
}

/// Logs run events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl RunObserver for StdErrObserver {
    fn on_load_success(&self, ctx: &RunContext, stats: LoadStats) {
        eprintln!(
            "[summarize][ok] path={} rows={} columns={}",
            ctx.input_path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &SummaryError) {
        eprintln!(
            "[summarize][{severity:?}] path={} err={error}",
            ctx.input_path.display()
        );
    }

    fn on_report_written(&self, _ctx: &RunContext, path: &Path) {
        eprintln!("[summarize][report] wrote {}", path.display());
    }
}

/// Appends run events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl RunObserver for FileObserver {
    fn on_load_success(&self, ctx: &RunContext, stats: LoadStats) {
        self.append_line(&format!(
            "{} ok path={} rows={} columns={}",
            unix_ts(),
            ctx.input_path.display(),
            stats.rows,
            stats.columns
        ));
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &SummaryError) {
        self.append_line(&format!(
            "{} fail severity={severity:?} path={} err={error}",
            unix_ts(),
            ctx.input_path.display()
        ));
    }

    fn on_report_written(&self, ctx: &RunContext, path: &Path) {
        self.append_line(&format!(
            "{} report path={} wrote={}",
            unix_ts(),
            ctx.input_path.display(),
            path.display()
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

//! `je-summarizer` is a small library (and argument-free binary) that ingests a
//! journal-entry sample spreadsheet into an in-memory [`types::Table`], infers which
//! columns are dates, and renders a descriptive [`summary::Summary`] as console output
//! and JSON/Markdown/CSV report files.
//!
//! ## Pipeline
//!
//! A run is a single-pass, single-threaded batch transform:
//!
//! 1. [`ingestion::load_table_from_path`] reads the input (CSV or Excel, auto-detected
//!    by extension) into a column-major table, inferring per-column types from content.
//! 2. [`classify::coerce_date_columns`] picks date-candidate columns by name hint and
//!    coerces them in place (unparseable cells become null; a candidate with zero
//!    parseable cells is left untouched).
//! 3. [`summary::build_summary`] computes the immutable snapshot: row/column counts,
//!    per-column missing counts, per-date-column ranges, and numeric descriptive
//!    statistics.
//! 4. [`report`] renders the snapshot to the console and/or a report directory.
//!
//! ## Quick example
//!
//! ```no_run
//! use je_summarizer::runner::{run, SummarizerConfig};
//!
//! # fn main() -> Result<(), je_summarizer::SummaryError> {
//! let config = SummarizerConfig {
//!     input_path: "je_samples.xlsx".into(),
//!     output_dir: "summary_output".into(),
//!     ..Default::default()
//! };
//! let summary = run(&config)?;
//! println!("rows={} columns={}", summary.row_count, summary.column_count);
//! # Ok(())
//! # }
//! ```
//!
//! The only fatal error is a missing input file ([`SummaryError::MissingInput`]),
//! raised before any output is created. Everything else (unparseable date cells,
//! absent numeric columns, a header-only table) degrades to empty sections in the
//! summary rather than failing the run.
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV/Excel loading with content-based type inference
//! - [`types`]: column-major table model with tagged cell values
//! - [`classify`]: date-candidate detection and in-place coercion
//! - [`stats`]: descriptive statistics over numeric columns
//! - [`summary`]: the summary snapshot and its builder
//! - [`report`]: console and multi-format file rendering
//! - [`observability`]: run-event observers (stderr/file/composite)
//! - [`runner`]: configuration and orchestration
//! - [`error`]: the shared error type

pub mod classify;
pub mod error;
pub mod ingestion;
pub mod observability;
pub mod report;
pub mod runner;
pub mod stats;
pub mod summary;
pub mod types;

pub use error::{SummaryError, SummaryResult};

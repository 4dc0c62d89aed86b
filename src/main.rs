//! Argument-free binary: summarize `je_samples.xlsx` next to the working directory and
//! write reports into `summary_output/`.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use je_summarizer::observability::StdErrObserver;
use je_summarizer::report::render_console;
use je_summarizer::runner::{run, SummarizerConfig};

fn main() -> ExitCode {
    let config = SummarizerConfig {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };

    let summary = match run(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("JE Samples Summary");
    let mut stdout = io::stdout().lock();
    if let Err(e) = render_console(&summary, &mut stdout) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

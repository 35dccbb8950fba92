//! spanify-extract: pure stream transducer.
//!
//! Reads the concatenated plugin output on stdin and prints one edit
//! directive per line on stdout. All diagnostics go to stderr via
//! tracing (filter with `RUST_LOG`), so stdout stays machine-readable.
//! Exit status is zero only when the full pipeline completed; malformed
//! input aborts with no partial output.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use spanify_analysis::extract_edits;
use spanify_core::errors::ErrorCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.error_code(), "extraction failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), spanify_core::errors::ExtractError> {
    let stdin = io::stdin().lock();
    let output = extract_edits(stdin)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    for edit in &output.edits {
        writeln!(stdout, "{edit}")?;
    }
    stdout.flush()?;

    info!(
        nodes = output.stats.nodes,
        edges = output.stats.edges,
        buffer_roots = output.stats.buffer_roots,
        available_roots = output.stats.available_roots,
        rewritten = output.stats.rewritten_nodes,
        edits = output.stats.edits,
        "extraction complete"
    );
    Ok(())
}

//! `sapling` binary: generates one random tree and writes it as GraphML.
//!
//! The document goes to `--output` when given and to stdout otherwise. All
//! diagnostics go through `tracing` on stderr; failures log their stable
//! error codes and exit non-zero.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sapling_cli::{
    cli::{Cli, CliError, ExecutionSummary, render_summary, run_cli, write_summary_to_path},
    logging::{self, LoggingError},
};
use sapling_core::ConfigErrorCode;
use tracing::{error, field};

/// Generates the requested tree and writes it to its destination.
fn try_main() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to generate tree")?;
    match summary.output.as_deref() {
        Some(path) => write_summary_to_path(&summary, path).context("failed to write output file"),
        None => write_to_stdout(&summary),
    }
}

fn write_to_stdout(summary: &ExecutionSummary) -> Result<()> {
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(summary, &mut stdout).context("failed to render GraphML")?;
    stdout.flush().context("failed to flush stdout")
}

/// Stable `(code, config_code)` strings carried by a failed run, if any.
fn failure_codes(err: &anyhow::Error) -> (Option<&'static str>, Option<&'static str>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => (
            Some(core.code().as_str()),
            core.config_code().map(ConfigErrorCode::as_str),
        ),
        Some(CliError::Io { .. }) | None => (None, None),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = try_main() else {
        return ExitCode::SUCCESS;
    };
    let (code, config_code) = failure_codes(&err);
    error!(
        error = %format!("{err:#}"),
        code = code.map(field::display),
        config_code = config_code.map(field::display),
        "tree generation failed"
    );
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until logging is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("sapling: cannot set up logging: {err}");
}

//! Command-line interface orchestration for the sapling tree generator.
//!
//! The CLI offers a single `generate` command that builds a tree with the
//! requested attachment strategy and weights and renders it as GraphML.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, parse_window, render_summary,
    resolve_seed, run_cli, write_summary_to_path,
};

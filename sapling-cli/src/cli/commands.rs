//! Command implementations and argument parsing for the sapling CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use sapling_core::{DEFAULT_PADDING, GeneratedTree, TreeError, TreeGeneratorBuilder, Window};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::graphml::write_graphml;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "sapling", about = "Generate random trees as GraphML.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random tree.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes.
    #[arg(short = 'n', long = "nodes", value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Edge weights in the range [1, EDGE_WEIGHTS]; with node positions these
    /// are scaled distances.
    #[arg(long = "edge-weights")]
    pub edge_weights: Option<u32>,

    /// Node weights in the range [1, NODE_WEIGHTS].
    #[arg(long = "node-weights")]
    pub node_weights: Option<u32>,

    /// Random node positions in a WIDTH,HEIGHT window; each node attaches to
    /// its closest predecessor.
    #[arg(
        long = "node-positions",
        value_name = "WIDTH,HEIGHT",
        value_parser = parse_window,
        conflicts_with = "power_law",
    )]
    pub node_positions: Option<Window>,

    /// Margin kept between node positions and the window edges.
    #[arg(long = "padding", default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Each node attaches to the i-th previous node with probability
    /// POWER_LAW^i.
    #[arg(long = "power-law")]
    pub power_law: Option<f64>,

    /// Random seed; the current time is used when absent.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Write the GraphML document to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Tree configuration or generation failed.
    #[error(transparent)]
    Core(#[from] TreeError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Seed the tree was generated from.
    pub seed: u64,
    /// The generated tree.
    pub tree: GeneratedTree,
    /// Requested output file; `None` means stdout.
    pub output: Option<PathBuf>,
}

/// Parses a `WIDTH,HEIGHT` window specification.
///
/// # Errors
/// Returns a message suitable for clap when the value is not two
/// comma-separated unsigned integers.
///
/// # Examples
/// ```
/// use sapling_cli::cli::parse_window;
///
/// let window = parse_window("800,600").expect("valid window");
/// assert_eq!((window.width(), window.height()), (800, 600));
/// assert!(parse_window("800x600").is_err());
/// ```
pub fn parse_window(raw: &str) -> Result<Window, String> {
    let (width, height) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected WIDTH,HEIGHT but got `{raw}`"))?;
    let parse = |value: &str, axis: &str| {
        value
            .trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid {axis} `{}`: {err}", value.trim()))
    };
    Ok(Window::new(parse(width, "width")?, parse(height, "height")?))
}

/// Returns `requested`, or a seed derived from the system clock.
///
/// # Examples
/// ```
/// use sapling_cli::cli::resolve_seed;
///
/// assert_eq!(resolve_seed(Some(5)), 5);
/// ```
#[must_use]
pub fn resolve_seed(requested: Option<u64>) -> u64 {
    requested.unwrap_or_else(|| {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()).rotate_left(32)
    })
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is invalid or generation
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sapling_cli::cli::{Cli, Command, GenerateCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         nodes: 4,
///         edge_weights: None,
///         node_weights: None,
///         node_positions: None,
///         padding: 50,
///         power_law: None,
///         seed: Some(1),
///         output: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.seed, 1);
/// assert_eq!(summary.tree.edges().len(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(nodes = command.nodes, seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let seed = resolve_seed(command.seed);
    Span::current().record("seed", seed);
    if command.seed.is_none() {
        info!(seed, "no seed given; derived one from the system clock");
    }

    let generator = builder_for(&command, seed).build()?;
    let tree = generator.generate()?;

    info!(
        nodes = tree.nodes().len(),
        edges = tree.edges().len(),
        attachment = %generator.attachment(),
        "command completed"
    );
    Ok(ExecutionSummary {
        seed,
        tree,
        output: command.output,
    })
}

fn builder_for(command: &GenerateCommand, seed: u64) -> TreeGeneratorBuilder {
    let mut builder = TreeGeneratorBuilder::new(command.nodes)
        .with_padding(command.padding)
        .with_seed(seed);
    if let Some(max) = command.edge_weights {
        builder = builder.with_edge_weight_max(max);
    }
    if let Some(max) = command.node_weights {
        builder = builder.with_node_weight_max(max);
    }
    if let Some(window) = command.node_positions {
        builder = builder.with_window(window.width(), window.height());
    }
    if let Some(base) = command.power_law {
        builder = builder.with_power_law_base(base);
    }
    builder
}

/// Renders the tree in `summary` to `writer` as GraphML.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    write_graphml(&summary.tree, writer)
}

/// Renders the tree in `summary` as GraphML into the file at `path`,
/// replacing any existing content.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be created or written.
pub fn write_summary_to_path(summary: &ExecutionSummary, path: &Path) -> Result<(), CliError> {
    let to_cli_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_cli_error)?;
    let mut writer = BufWriter::new(file);
    render_summary(summary, &mut writer).map_err(to_cli_error)?;
    writer.flush().map_err(to_cli_error)?;
    info!(path = %path.display(), "wrote GraphML output");
    Ok(())
}

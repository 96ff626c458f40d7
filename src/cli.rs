//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::backends::git::GitLister;

/// codemin - bundle the tracked web sources of a git repository into one minified file.
#[derive(Parser, Debug)]
#[command(name = "codemin")]
#[command(
    author,
    version,
    about,
    long_about = r#"codemin lists the files tracked by git, keeps the web sources
(.html, .css, .scss, .js, .json, .map), strips comments and insignificant
whitespace from each one and writes them, sorted by path, into
codigo_minificado.txt at the repository root.

Each file becomes a block:

    === path/to/file.js ===
    <minified content>

The minifiers are regex heuristics, not parsers. String or regex literals that
contain comment-like sequences may be altered.

Example:
    cd my-repo && codemin
"#
)]
pub struct Cli {
    /// Enable verbose (info-level) logging to stderr.
    #[arg(
        short,
        long,
        long_help = "Log pipeline progress (file counts, sizes) to stderr.\n\n\
The generated file is identical with or without this flag."
    )]
    pub verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(
        long,
        long_help = "Log every processed file and every JSON fallback to stderr.\n\n\
RUST_LOG, when set, takes precedence over both --verbose and --debug."
    )]
    pub debug: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.debug);

    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;
    let lister = GitLister::discover(&cwd)?;

    crate::flows::bundle::run_bundle(&lister)
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

//! codemin - Bundle tracked web sources into a single minified file
//!
//! codemin:
//! - Lists the files tracked by git at the repository root
//! - Keeps html/css/scss/js/json/map files
//! - Strips comments and whitespace with per-type heuristics
//! - Writes everything, path-labelled and sorted, to one text file

use std::process::ExitCode;

use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod minify;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

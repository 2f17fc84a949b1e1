//! `panegrid` CLI - Command-line interface for the panegrid layout engine
//!
//! Renders templates, converts layout documents to freeform panels,
//! reconstructs split trees from freeform panels and inspects documents.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use panegrid_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    if !cli.quiet {
        let mut config =
            TracingConfig::new().with_level(TracingLevel::from_verbosity(cli.verbose));
        if let Some(filter) = cli.log_filter.clone() {
            config = config.with_filter(filter);
        }
        if let Some(path) = cli.log_file.clone() {
            config = config.with_output(TracingOutput::File(path));
        }
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: logging disabled: {e}");
        }
    }

    let result = commands::dispatch(config_path, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

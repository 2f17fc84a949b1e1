//! Command handler modules for the CLI.

mod completions;
mod freeform;
mod inspect;
mod reconstruct;
mod template;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Template(subcmd) => template::cmd_template(config_path, subcmd),
        Commands::Freeform {
            input,
            output,
            width,
            height,
        } => freeform::cmd_freeform(config_path, &input, output.as_deref(), width, height),
        Commands::Reconstruct {
            input,
            output,
            format,
            tolerance,
            uuid_ids,
        } => reconstruct::cmd_reconstruct(
            config_path,
            &input,
            output.as_deref(),
            format,
            tolerance,
            uuid_ids,
        ),
        Commands::Inspect { input, json } => inspect::cmd_inspect(&input, json),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}

//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// `panegrid` command-line interface for panel layouts
#[derive(Parser)]
#[command(name = "panegrid")]
#[command(author, version, about = "Panegrid layout engine command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the settings file (TOML)
    #[arg(short, long, global = true, env = "PANEGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Tracing filter directive; overrides -v when set
    #[arg(long, global = true, env = "PANEGRID_LOG")]
    pub log_filter: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Built-in layout templates
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Convert a layout document to freeform panels
    #[command(about = "Lay out a document's split tree as freeform panels")]
    Freeform {
        /// Layout document (JSON or YAML)
        input: PathBuf,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width; defaults to the configured width
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height; defaults to the configured height
        #[arg(long)]
        height: Option<f64>,
    },

    /// Rebuild a split tree from freeform panels
    #[command(about = "Reconstruct a layout document from freeform panels")]
    Reconstruct {
        /// Freeform panels (JSON array)
        input: PathBuf,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document format when writing to stdout
        #[arg(short, long, default_value = "json", value_enum)]
        format: DocumentFormat,

        /// Gap tolerance; defaults to the configured tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Mint split ids from random UUIDs instead of a counter
        #[arg(long)]
        uuid_ids: bool,
    },

    /// Describe a layout document
    #[command(about = "Print the tree outline and statistics of a document")]
    Inspect {
        /// Layout document (JSON or YAML)
        input: PathBuf,

        /// Print statistics as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List the built-in templates
    #[command(about = "List built-in layout templates")]
    List {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: ListFormat,
    },

    /// Write a template as a layout document
    #[command(about = "Render a template as a layout document")]
    Show {
        /// Template name; defaults to the configured template
        name: Option<String>,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document format when writing to stdout
        #[arg(short, long, default_value = "json", value_enum)]
        format: DocumentFormat,
    },
}

/// Output format for listings
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ListFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}

/// Serialization format for layout documents
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

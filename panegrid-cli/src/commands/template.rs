//! Template commands.

use std::path::Path;

use panegrid_core::document::{DocumentError, LayoutDocument};
use panegrid_core::split::{LayoutTemplate, PanelNode};
use tracing::info;

use crate::cli::{DocumentFormat, ListFormat, TemplateCommands};
use crate::error::CliError;
use crate::util::{load_settings, write_document};

/// Template command handler
pub fn cmd_template(config_path: Option<&Path>, subcmd: TemplateCommands) -> Result<(), CliError> {
    match subcmd {
        TemplateCommands::List { format } => cmd_template_list(format),
        TemplateCommands::Show {
            name,
            output,
            format,
        } => cmd_template_show(config_path, name.as_deref(), output.as_deref(), format),
    }
}

fn cmd_template_list(format: ListFormat) -> Result<(), CliError> {
    match format {
        ListFormat::Table => print_template_table(),
        ListFormat::Json => print_template_json()?,
    }
    Ok(())
}

fn contents(tree: &PanelNode) -> Vec<&'static str> {
    tree.leaves().iter().map(|leaf| leaf.content.as_str()).collect()
}

fn print_template_table() {
    let name_width = LayoutTemplate::all()
        .iter()
        .map(|t| t.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!("{:<name_width$}  PANELS  DEPTH  CONTENT", "NAME");
    println!("{:-<name_width$}  {:-<6}  {:-<5}  {:-<30}", "", "", "", "");

    for template in LayoutTemplate::all() {
        let tree = template.build();
        println!(
            "{:<name_width$}  {:<6}  {:<5}  {}",
            template.name(),
            tree.leaf_count(),
            tree.depth(),
            contents(&tree).join(", ")
        );
    }
}

fn print_template_json() -> Result<(), CliError> {
    let entries: Vec<serde_json::Value> = LayoutTemplate::all()
        .iter()
        .map(|template| {
            let tree = template.build();
            serde_json::json!({
                "name": template.name(),
                "panels": tree.leaf_count(),
                "depth": tree.depth(),
                "content": contents(&tree),
            })
        })
        .collect();
    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| DocumentError::Serialize(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn cmd_template_show(
    config_path: Option<&Path>,
    name: Option<&str>,
    output: Option<&Path>,
    format: DocumentFormat,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let template = match name {
        Some(name) => name.parse::<LayoutTemplate>()?,
        None => settings.default_template,
    };

    let document = LayoutDocument::new(template.build(), settings.density);
    info!(%template, "Rendering template");
    write_document(&document, output, format)
}

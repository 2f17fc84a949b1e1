//! Document inspection.

use std::path::Path;

use panegrid_core::document::{DocumentError, LayoutDocument};

use crate::error::CliError;
use crate::util::read_document;

/// Prints the outline of a document, or its statistics as JSON.
pub fn cmd_inspect(input: &Path, json: bool) -> Result<(), CliError> {
    let document = read_document(input)?;
    if json {
        print_stats_json(&document)
    } else {
        print_outline(&document);
        Ok(())
    }
}

fn print_outline(document: &LayoutDocument) {
    let tree = &document.split_layout;
    println!("Layout Document:");
    println!("  Version: {}", document.version);
    println!("  Created: {}", document.metadata.created.to_rfc3339());
    println!("  Density: {}", document.metadata.density);
    println!("  Panels:  {}", tree.leaf_count());
    println!("  Nodes:   {}", tree.node_count());
    println!("  Depth:   {}", tree.depth());
    println!();
    print!("{}", tree.outline());
}

fn print_stats_json(document: &LayoutDocument) -> Result<(), CliError> {
    let tree = &document.split_layout;
    let stats = serde_json::json!({
        "version": document.version,
        "created": document.metadata.created.to_rfc3339(),
        "density": document.metadata.density.as_str(),
        "panels": tree.leaf_count(),
        "nodes": tree.node_count(),
        "depth": tree.depth(),
        "leaves": tree
            .leaves()
            .iter()
            .map(|leaf| {
                serde_json::json!({ "id": leaf.id.as_str(), "content": leaf.content.as_str() })
            })
            .collect::<Vec<_>>(),
    });
    let json = serde_json::to_string_pretty(&stats)
        .map_err(|e| DocumentError::Serialize(e.to_string()))?;
    println!("{json}");
    Ok(())
}

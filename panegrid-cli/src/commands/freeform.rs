//! Document to freeform conversion.

use std::path::Path;

use panegrid_core::convert::split_to_freeform;
use panegrid_core::document::freeform_to_json;
use panegrid_core::geometry::Rect;
use tracing::info;

use crate::error::CliError;
use crate::util::{load_settings, positive, read_document, write_output};

/// Lays out the document's tree on the canvas and writes the panels as JSON.
pub fn cmd_freeform(
    config_path: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let width = positive("width", width.unwrap_or(settings.canvas_width))?;
    let height = positive("height", height.unwrap_or(settings.canvas_height))?;

    let document = read_document(input)?;
    let layout = split_to_freeform(&document.split_layout, Rect::canvas(width, height));
    info!(panels = layout.len(), width, height, "Freeform layout derived");

    write_output(output, &freeform_to_json(&layout)?)
}

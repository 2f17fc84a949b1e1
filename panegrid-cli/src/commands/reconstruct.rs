//! Freeform to document reconstruction.

use std::fs;
use std::path::Path;

use panegrid_core::convert::{ReconstructOptions, freeform_to_split};
use panegrid_core::document::{LayoutDocument, freeform_from_json};
use panegrid_core::split::{IdGenerator, RandomIds, SequentialIds};
use tracing::info;

use crate::cli::DocumentFormat;
use crate::error::CliError;
use crate::util::{load_settings, write_document};

/// Reads freeform panels, rebuilds a split tree and writes it as a document.
pub fn cmd_reconstruct(
    config_path: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    format: DocumentFormat,
    tolerance: Option<f64>,
    uuid_ids: bool,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let options = match tolerance {
        Some(t) if t.is_finite() && t >= 0.0 => ReconstructOptions::new(t),
        Some(t) => {
            return Err(CliError::Argument(format!(
                "tolerance must be zero or positive, got {t}"
            )));
        }
        None => settings.reconstruct_options(),
    };

    let layout = freeform_from_json(&fs::read_to_string(input)?)?;
    let mut ids: Box<dyn IdGenerator> = if uuid_ids {
        Box::new(RandomIds)
    } else {
        Box::new(SequentialIds::new())
    };
    let tree = freeform_to_split(layout.panels(), &options, ids.as_mut());
    info!(
        panels = layout.len(),
        depth = tree.depth(),
        "Split tree reconstructed"
    );

    write_document(&LayoutDocument::new(tree, settings.density), output, format)
}

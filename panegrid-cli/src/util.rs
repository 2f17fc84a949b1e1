//! Shared utility functions used across command modules.

use std::fs;
use std::path::{Path, PathBuf};

use panegrid_core::config::EditorSettings;
use panegrid_core::document::LayoutDocument;
use tracing::debug;

use crate::cli::DocumentFormat;
use crate::error::CliError;

/// Location of the settings file when `--config` is not given.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("panegrid").join("settings.toml"))
}

/// Loads editor settings.
///
/// An explicit path must exist. Without one, the default location is used if
/// a file is there, and built-in defaults otherwise.
pub fn load_settings(config_path: Option<&Path>) -> Result<EditorSettings, CliError> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) if path.is_file() => path,
            _ => {
                debug!("No settings file, using defaults");
                return Ok(EditorSettings::default());
            }
        },
    };
    debug!(path = %path.display(), "Loading settings");
    let text = fs::read_to_string(&path)?;
    Ok(EditorSettings::from_toml(&text)?)
}

/// Picks the document format from a file extension; JSON unless `.yaml`/`.yml`.
pub fn format_for_path(path: &Path) -> DocumentFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            DocumentFormat::Yaml
        }
        _ => DocumentFormat::Json,
    }
}

/// Reads a layout document, choosing the parser by extension.
pub fn read_document(path: &Path) -> Result<LayoutDocument, CliError> {
    let text = fs::read_to_string(path)?;
    let document = match format_for_path(path) {
        DocumentFormat::Json => LayoutDocument::from_json(&text)?,
        DocumentFormat::Yaml => LayoutDocument::from_yaml(&text)?,
    };
    Ok(document)
}

/// Serializes a layout document.
pub fn render_document(
    document: &LayoutDocument,
    format: DocumentFormat,
) -> Result<String, CliError> {
    let text = match format {
        DocumentFormat::Json => document.to_json()?,
        DocumentFormat::Yaml => document.to_yaml()?,
    };
    Ok(text)
}

/// Writes a layout document to a file (format by extension) or stdout.
pub fn write_document(
    document: &LayoutDocument,
    output: Option<&Path>,
    stdout_format: DocumentFormat,
) -> Result<(), CliError> {
    let format = output.map_or(stdout_format, format_for_path);
    write_output(output, &render_document(document, format)?)
}

/// Writes text to a file, or to stdout if no path is given.
pub fn write_output(output: Option<&Path>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            debug!(path = %path.display(), bytes = text.len(), "Output written");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Checks that a command-line size is finite and positive.
pub fn positive(name: &str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CliError::Argument(format!("{name} must be positive, got {value}")))
    }
}

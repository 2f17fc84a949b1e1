//! Editor settings
//!
//! Stored as TOML. Every field has a default, so a partial file (or an empty
//! one) is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::convert::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GAP_TOLERANCE, ReconstructOptions,
};
use crate::document::Density;
use crate::freeform::DEFAULT_MIN_PANEL_SIZE;
use crate::geometry::Rect;
use crate::split::LayoutTemplate;
use crate::trace_operation;
use crate::tracing::span_names;

/// Errors that can occur while reading or checking settings
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML could not be parsed
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// The settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// A value is out of range
    #[error("Invalid setting {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for settings operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Tunables for the layout editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Canvas width used when deriving the freeform layout
    pub canvas_width: f64,
    /// Canvas height used when deriving the freeform layout
    pub canvas_height: f64,
    /// Reconstruction overlap tolerance, as a fraction of average panel size
    pub gap_tolerance: f64,
    /// Smallest width or height a freeform resize may produce
    pub min_panel_size: f64,
    /// Density written into new documents
    pub density: Density,
    /// Template loaded for a new document
    pub default_template: LayoutTemplate,
    /// Maximum number of undo snapshots; unlimited when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            gap_tolerance: DEFAULT_GAP_TOLERANCE,
            min_panel_size: DEFAULT_MIN_PANEL_SIZE,
            density: Density::default(),
            default_template: LayoutTemplate::default(),
            history_limit: None,
        }
    }
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

impl EditorSettings {
    /// Parses and validates settings from TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` for out-of-range values
    pub fn from_toml(text: &str) -> ConfigResult<Self> {
        let _span = trace_operation!(span_names::CONFIG_LOAD).entered();
        let settings: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Serializes the settings to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad field
    pub fn validate(&self) -> ConfigResult<()> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("min_panel_size", self.min_panel_size)?;
        if !(self.gap_tolerance.is_finite() && self.gap_tolerance >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "gap_tolerance",
                reason: format!("must be zero or positive, got {}", self.gap_tolerance),
            });
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid {
                field: "history_limit",
                reason: "must be at least 1 when set".to_owned(),
            });
        }
        Ok(())
    }

    /// Returns the canvas rectangle anchored at the origin.
    #[must_use]
    pub const fn canvas(&self) -> Rect {
        Rect::canvas(self.canvas_width, self.canvas_height)
    }

    /// Returns the reconstruction options these settings describe.
    #[must_use]
    pub fn reconstruct_options(&self) -> ReconstructOptions {
        ReconstructOptions::new(self.gap_tolerance)
    }
}

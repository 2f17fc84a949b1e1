//! Configuration for panegrid
//!
//! This module provides [`EditorSettings`], loaded from TOML by the host.

mod settings;

pub use settings::{ConfigError, ConfigResult, EditorSettings};

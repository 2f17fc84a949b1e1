//! Tracing setup for panegrid hosts
//!
//! The library only emits events and spans; installing a subscriber is left
//! to the host. [`init_tracing`] wires up `tracing-subscriber` with an
//! `EnvFilter` scoped to the panegrid crates.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// The filter directive could not be parsed.
    #[error("invalid tracing filter: {0}")]
    InvalidFilter(String),

    /// The subscriber refused to install.
    #[error("failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// A subscriber was already installed by this module.
    #[error("tracing has already been initialized")]
    AlreadyInitialized,

    /// The log file could not be created.
    #[error("failed to create log file {path}: {reason}")]
    FileCreationFailed {
        /// Requested log file.
        path: PathBuf,
        /// Underlying I/O error.
        reason: String,
    },
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Verbosity of emitted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Adds conversion and import summaries
    Info,
    /// Adds rejected edits
    Debug,
    /// Adds clustering decisions
    Trace,
}

impl TracingLevel {
    /// Maps a `-v` count onto a level, starting from `Warn`.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Where formatted events go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard output
    Stdout,
    /// Standard error
    #[default]
    Stderr,
    /// A log file, truncated on startup
    File(PathBuf),
}

/// Configuration for [`init_tracing`].
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level for the panegrid crates
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Custom `EnvFilter` directive; overrides `level` when set
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination.
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Sets a custom filter directive.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Returns the filter directive this configuration installs.
    #[must_use]
    pub fn directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            format!(
                "panegrid_core={level},panegrid={level}",
                level = self.level
            )
        })
    }
}

/// Installs a global subscriber for the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized through this function
/// - The filter directive does not parse
/// - File output is configured but the file cannot be created
/// - Another global subscriber is already installed
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let result = install(config);
    if result.is_err() {
        TRACING_INITIALIZED.store(false, Ordering::SeqCst);
    }
    result
}

fn install(config: &TracingConfig) -> TracingResult<()> {
    let filter = EnvFilter::try_new(config.directive())
        .map_err(|e| TracingError::InvalidFilter(e.to_string()))?;

    match &config.output {
        TracingOutput::Stdout => install_with(filter, std::io::stdout, true),
        TracingOutput::Stderr => install_with(filter, std::io::stderr, true),
        TracingOutput::File(path) => {
            let file = std::fs::File::create(path).map_err(|e| {
                TracingError::FileCreationFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;
            install_with(filter, file, false)
        }
    }?;

    tracing::debug!(level = %config.level, "Tracing initialized");
    Ok(())
}

fn install_with<W>(filter: EnvFilter, writer: W, ansi: bool) -> TracingResult<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))
}

/// Creates an info-level span for a layout operation.
///
/// # Examples
///
/// ```
/// use panegrid_core::trace_operation;
/// use panegrid_core::tracing::span_names;
///
/// let span = trace_operation!(span_names::SPLIT_TO_FREEFORM, leaves = 3);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Standard span names for layout operations
pub mod span_names {
    /// Tree to freeform conversion
    pub const SPLIT_TO_FREEFORM: &str = "convert.split_to_freeform";
    /// Freeform to tree reconstruction
    pub const FREEFORM_TO_SPLIT: &str = "convert.freeform_to_split";
    /// Document import
    pub const DOCUMENT_IMPORT: &str = "document.import";
    /// Document export
    pub const DOCUMENT_EXPORT: &str = "document.export";
    /// Editor mode switch
    pub const MODE_SWITCH: &str = "editor.mode_switch";
    /// Settings load
    pub const CONFIG_LOAD: &str = "config.load";
}

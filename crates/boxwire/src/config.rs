//! Configuration types for boxwire graph export.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Missing sections and fields fall back to their defaults.
//!
//! ```toml
//! [output]
//! format = "json"
//! pretty = false
//! ```
//!
//! # Example
//!
//! ```
//! # use boxwire::config::{AppConfig, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.output().format(), OutputFormat::Text);
//! assert!(config.output().pretty());
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given output settings.
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns this configuration with the output format replaced.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// Controls how a parsed graph is written out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl OutputConfig {
    /// Creates output settings.
    ///
    /// # Arguments
    ///
    /// * `format` - Export format for the parsed graph.
    /// * `pretty` - Whether JSON output is indented.
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    /// Returns the export format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns `true` if JSON output is indented.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Export formats for a parsed graph.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// The graph serialized as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err("Unsupported output format"),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

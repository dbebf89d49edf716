//! Configuration file loading for tessera.
//!
//! Reads `tessera.config.json` from the current working directory, or the
//! file given with `--config`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tessera.config.json";

/// Top-level tessera configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TesseraConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Output format used when `--format` is not given.
    pub format: OutputFormat,

    /// Log level used when `-v` is not given (`error`, `warn`, `info`,
    /// `debug` or `trace`).
    pub log_level: Option<String>,

    /// Tag of the container element descriptions are mounted into.
    pub root_tag: String,
}

impl Default for TesseraConfig {
    fn default() -> Self {
        Self {
            schema: None,
            format: OutputFormat::default(),
            log_level: None,
            root_tag: "div".to_string(),
        }
    }
}

impl TesseraConfig {
    /// Configured log level, `warn` when absent or unrecognised.
    pub fn level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::WARN)
    }
}

/// What a command prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Serialized container markup
    #[default]
    Html,
    /// Markup plus the mutation journal
    Json,
    /// Mutation counts by category
    Stats,
}

/// Load the configuration from `path`, or `tessera.config.json` in the CWD.
///
/// A missing or malformed file falls back to the defaults with a warning.
pub fn load_config(path: Option<&Path>) -> TesseraConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME)),
    };

    if !config_path.exists() {
        if path.is_some() {
            eprintln!(
                "\x1b[33mWarning:\x1b[0m Config file {} not found, using defaults",
                config_path.display()
            );
        }
        return TesseraConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "\x1b[33mWarning:\x1b[0m Failed to parse {}: {}",
                    config_path.display(),
                    e
                );
                TesseraConfig::default()
            }
        },
        Err(e) => {
            eprintln!(
                "\x1b[33mWarning:\x1b[0m Failed to read {}: {}",
                config_path.display(),
                e
            );
            TesseraConfig::default()
        }
    }
}

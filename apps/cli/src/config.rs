//! # CLI Configuration
//!
//! Presentation preferences for the `pitchside` binary. Business parameters
//! live in scenario files, not here.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PITCHSIDE_CURRENCY=DH                                              │
//! │     PITCHSIDE_SWEEP_PITCHES=8                                          │
//! │     PITCHSIDE_FORMAT=json                                              │
//! │     PITCHSIDE_LOG=debug                                                │
//! │     (unparseable values are skipped and reported as warnings)          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/pitchside/pitchside.toml (Linux)                         │
//! │     ~/Library/Application Support/com.pitchside.pitchside/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pitchside.toml
//! currency_symbol = "DH"
//! default_sweep_pitches = 5
//! output_format = "table"   # table | json
//! log_filter = "warn,pitchside=info"
//! ```

use std::path::PathBuf;

use clap::ValueEnum;
use pitchside_core::validation::validate_sweep_size;
use pitchside_core::DEFAULT_SWEEP_PITCHES;
use serde::{Deserialize, Serialize};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "pitchside.toml";

// =============================================================================
// Output Format
// =============================================================================

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: table, json",
                other
            ))),
        }
    }
}

// =============================================================================
// CLI Configuration
// =============================================================================

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Appended to every amount ("41,600.00 DH").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Pitch counts compared by `sweep` when `--max-pitches` is not given.
    #[serde(default = "default_sweep_pitches")]
    pub default_sweep_pitches: u32,

    #[serde(default)]
    pub output_format: OutputFormat,

    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Environment overrides skipped by the last [`CliConfig::load`].
    ///
    /// Kept until logging is up, then reported by
    /// [`CliConfig::warn_rejected_overrides`].
    #[serde(skip)]
    pub rejected_overrides: Vec<RejectedOverride>,
}

/// An environment override whose value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

fn default_currency_symbol() -> String {
    "DH".to_string()
}

fn default_sweep_pitches() -> u32 {
    DEFAULT_SWEEP_PITCHES
}

fn default_log_filter() -> String {
    "warn,pitchside=info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            currency_symbol: default_currency_symbol(),
            default_sweep_pitches: default_sweep_pitches(),
            output_format: OutputFormat::default(),
            log_filter: default_log_filter(),
            rejected_overrides: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform default if present)
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    CliError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                config = Self::from_toml_str(&contents)
                    .map_err(|source| CliError::ConfigParse { path, source })?;
            } else if explicit {
                return Err(CliError::Read {
                    path,
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
        }

        config.rejected_overrides = config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        validate_sweep_size(self.default_sweep_pitches).map_err(|e| {
            CliError::InvalidConfig(format!("default_sweep_pitches: {e}"))
        })?;

        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            CliError::InvalidConfig(format!("log_filter '{}': {e}", self.log_filter))
        })?;

        Ok(())
    }

    /// Applies `PITCHSIDE_*` environment variable overrides.
    fn apply_env_overrides(&mut self) -> Vec<RejectedOverride> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup.
    ///
    /// A value that does not parse leaves the setting unchanged and is
    /// returned, so the caller can report it once logging is configured.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<RejectedOverride>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();

        if let Some(symbol) = lookup("PITCHSIDE_CURRENCY") {
            self.currency_symbol = symbol;
        }

        if let Some(pitches) = lookup("PITCHSIDE_SWEEP_PITCHES") {
            match pitches.parse::<u32>() {
                Ok(n) => self.default_sweep_pitches = n,
                Err(e) => rejected.push(RejectedOverride {
                    key: "PITCHSIDE_SWEEP_PITCHES",
                    reason: e.to_string(),
                    value: pitches,
                }),
            }
        }

        if let Some(format) = lookup("PITCHSIDE_FORMAT") {
            match format.parse::<OutputFormat>() {
                Ok(parsed) => self.output_format = parsed,
                Err(e) => rejected.push(RejectedOverride {
                    key: "PITCHSIDE_FORMAT",
                    reason: e.to_string(),
                    value: format,
                }),
            }
        }

        if let Some(filter) = lookup("PITCHSIDE_LOG") {
            self.log_filter = filter;
        }

        rejected
    }

    /// Logs one warning per skipped environment override.
    ///
    /// Call after [`init_tracing`](crate::init_tracing); `load` runs before
    /// a subscriber exists.
    pub fn warn_rejected_overrides(&self) {
        for rejected in &self.rejected_overrides {
            warn!(
                key = rejected.key,
                value = %rejected.value,
                reason = %rejected.reason,
                "ignoring environment override"
            );
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pitchside", "pitchside")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

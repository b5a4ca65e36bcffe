//! # CLI Error Type
//!
//! Unified error type for the command-line front end.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in pitchside                              │
//! │                                                                         │
//! │  config file ─── ConfigParse / InvalidConfig ──┐                       │
//! │  scenario file ─ Read / ScenarioParse ─────────┤                       │
//! │  engine ──────── Core(ValidationError) ────────┼──► CliError ──► main  │
//! │  output ──────── Output / Json ────────────────┘        │              │
//! │                                                          ▼              │
//! │                                          anyhow report, exit code 1    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unprofitable scenario never reaches this type. It is printed as a
//! notice and the command still succeeds.

use std::path::PathBuf;

use pitchside_core::CoreError;
use thiserror::Error;

/// Errors raised by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected the parameters.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid scenario file {}: {source}", path.display())]
    ScenarioParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize scenario: {0}")]
    ScenarioSerialize(#[from] toml::ser::Error),

    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `init` would overwrite an existing scenario.
    #[error("{} already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout failed (closed pipe, full disk).
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

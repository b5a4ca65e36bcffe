//! # Pitchside CLI Library
//!
//! Everything behind the `pitchside` binary. `main.rs` only parses
//! arguments and hands over.
//!
//! ## Module Organization
//! ```text
//! pitchside_cli/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── pitchside.toml + PITCHSIDE_* env
//! ├── scenario.rs     ◄─── Scenario files (TOML)
//! ├── state.rs        ◄─── Parameters + cached indicators
//! ├── report.rs       ◄─── Tables and JSON
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch
//! │   ├── compute.rs
//! │   ├── sweep.rs
//! │   └── init.rs
//! └── error.rs        ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse Arguments ──────────────────────────────────────────────────► │
//! │     • clap derive, exits with usage on bad input                        │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults → pitchside.toml → PITCHSIDE_* env                       │
//! │                                                                         │
//! │  3. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, to stderr                     │
//! │     • RUST_LOG wins over the configured log_filter                      │
//! │     • warns about PITCHSIDE_* values that failed to parse               │
//! │                                                                         │
//! │  4. Run Command ──────────────────────────────────────────────────────► │
//! │     • results to stdout                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod scenario;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use config::{CliConfig, OutputFormat, RejectedOverride};
pub use error::{CliError, CliResult};
pub use scenario::Scenario;
pub use state::{ParameterOverrides, SessionState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pitchside_core=trace` - Show every sweep step
/// - Default: `log_filter` from the config (`warn,pitchside=info`)
///
/// Logs go to stderr so stdout stays clean for tables and JSON.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

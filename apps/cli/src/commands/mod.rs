//! # Command Handlers
//!
//! One handler per subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch)
//! ├── compute.rs  ◄─── Indicators for one scenario
//! ├── sweep.rs    ◄─── Pitch-count comparison
//! └── init.rs     ◄─── Sample scenario file
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  main.rs                                                                │
//! │  ───────                                                                │
//! │  Cli::parse() ──► CliConfig::load() ──► init_tracing()                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::run(cli.command, &config, &mut stdout)                       │
//! │         │                                                               │
//! │         ├── Compute ─► Scenario::load ─► SessionState ─► report         │
//! │         ├── Sweep ───► Scenario::load ─► SessionState::sweep ─► report  │
//! │         └── Init ────► Scenario::sample().save()                        │
//! │                                                                         │
//! │  Results go to the writer (stdout); logs go to stderr.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers take the writer as a parameter so tests can capture output in
//! a `Vec<u8>`.

pub mod compute;
pub mod init;
pub mod sweep;

use std::io::Write;

use crate::cli::Command;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Runs one subcommand, writing its result to `out`.
pub fn run(command: Command, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Command::Compute(args) => compute::run(&args, config, out),
        Command::Sweep(args) => sweep::run(&args, config, out),
        Command::Init(args) => init::run(&args, out),
    }
}

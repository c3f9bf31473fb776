//! Command-line front end for return period generation.
//!
//! The binary is a thin wrapper around this library. The library owns the
//! pieces that sit around the core generator:
//! - `config`: CLI flags and environment variables
//! - `sink`: record file and console echo
//! - `commands`: `generate` and `inspect` handlers
//! - `error`: error type reported by the binary
//!
//! # Example
//!
//! ```no_run
//! use returnperiod_cli::{GenerateArgs, commands};
//!
//! fn main() -> anyhow::Result<()> {
//!     let args = GenerateArgs {
//!         max: 100,
//!         verbose: true,
//!         ..GenerateArgs::default()
//!     };
//!
//!     let summary = commands::generate::run(&args, std::io::stdout().lock())?;
//!     println!("{} records", summary.records);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod commands;
pub mod config;
pub mod error;
pub mod sink;

pub use commands::generate::GenerateSummary;
pub use config::{Cli, Command, GenerateArgs, InspectArgs, LogLevel, OutputFormat};
pub use error::CliError;
pub use sink::{EchoSink, FileSink, Sink};

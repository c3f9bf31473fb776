//! Return period generator binary entry point.
//!
//! This is a thin wrapper around the returnperiod-cli library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Runs the selected command
//!
//! Any error ends the process with a non-zero exit status.

use anyhow::Result;
use clap::Parser;
use returnperiod_cli::{Cli, Command, commands};
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.as_filter())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = BufWriter::new(io::stdout().lock());

    match cli.command {
        Command::Generate(args) => {
            commands::generate::run(&args, stdout)?;
        }
        Command::Inspect(args) => {
            commands::inspect::run(&args, stdout)?;
        }
    }

    Ok(())
}

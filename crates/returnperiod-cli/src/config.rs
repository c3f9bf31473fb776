//! Command-line configuration.
//!
//! Flags can also be supplied through environment variables
//! (`RETURNPERIOD_MIN`, `RETURNPERIOD_STEP`, `RETURNPERIOD_MAX`,
//! `RETURNPERIOD_OUTPUT`). Values are parsed as plain integers and only
//! validated when turned into a [`ParameterSet`], so `--step 0` reports a
//! configuration error rather than a usage error.
//!
//! # Example
//!
//! ```
//! use clap::Parser;
//! use returnperiod_cli::{Cli, Command};
//!
//! let cli = Cli::parse_from(["returnperiod", "generate", "--max", "100"]);
//! let Command::Generate(args) = cli.command else {
//!     unreachable!();
//! };
//! let params = args.parameters().expect("Defaults with max 100 are valid");
//! assert_eq!(params.max(), 100);
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use returnperiod_core::{ConfigError, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, ParameterSet};
use std::path::PathBuf;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "returnperiods.bin";

/// Top-level CLI
#[derive(Debug, Clone, Parser)]
#[command(
    name = "returnperiod",
    about = "Generate return period sampling points for hazard curves",
    version
)]
pub struct Cli {
    /// Set the logging level (RUST_LOG takes precedence)
    #[arg(short, long, value_enum, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a return period record file
    Generate(GenerateArgs),
    /// Decode and print a return period record file
    Inspect(InspectArgs),
}

/// Arguments of `returnperiod generate`
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// The minimum return period
    #[arg(
        long,
        env = "RETURNPERIOD_MIN",
        default_value_t = DEFAULT_MIN,
        allow_negative_numbers = true
    )]
    pub min: i32,

    /// The minimum difference between two return periods
    #[arg(
        long,
        env = "RETURNPERIOD_STEP",
        default_value_t = DEFAULT_STEP,
        allow_negative_numbers = true
    )]
    pub step: i32,

    /// The maximum return period
    #[arg(
        long,
        env = "RETURNPERIOD_MAX",
        default_value_t = DEFAULT_MAX,
        allow_negative_numbers = true
    )]
    pub max: i32,

    /// Output record file
    #[arg(short, long, env = "RETURNPERIOD_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Echo every return period to stdout
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Validate the flags into a parameter set
    pub fn parameters(&self) -> Result<ParameterSet, ConfigError> {
        ParameterSet::new(self.min, self.step, self.max)
    }
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            step: DEFAULT_STEP,
            max: DEFAULT_MAX,
            output: PathBuf::from(DEFAULT_OUTPUT),
            verbose: false,
        }
    }
}

/// Arguments of `returnperiod inspect`
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Record file to decode
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for `inspect`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Header line then one value per line
    Text,
    /// JSON output
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Logging level
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Phase transitions and per-run details
    Debug,
    /// Resolved configuration and totals
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl LogLevel {
    /// Directive string for `EnvFilter`
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["returnperiod", "generate"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).expect("Should parse").command {
            Command::Generate(args) => args,
            Command::Inspect(_) => panic!("Expected generate"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let args = generate_args(&[]);
        assert_eq!(args.min, 5);
        assert_eq!(args.step, 5);
        assert_eq!(args.max, 10000);
        assert_eq!(args.output, PathBuf::from("returnperiods.bin"));
        assert!(!args.verbose);
        assert_eq!(
            args.parameters().expect("Defaults validate"),
            ParameterSet::default()
        );
    }

    #[test]
    fn test_generate_flags() {
        let args = generate_args(&[
            "--min", "1", "--step", "2", "--max", "500", "-o", "out.bin", "-v",
        ]);
        assert_eq!((args.min, args.step, args.max), (1, 2, 500));
        assert_eq!(args.output, PathBuf::from("out.bin"));
        assert!(args.verbose);
    }

    #[test]
    fn test_non_positive_step_is_config_error() {
        let args = generate_args(&["--step", "-5"]);
        assert_eq!(args.step, -5);
        assert_eq!(args.parameters(), Err(ConfigError::NonPositiveStep(-5)));

        let args = generate_args(&["--step", "0"]);
        assert_eq!(args.parameters(), Err(ConfigError::NonPositiveStep(0)));
    }

    #[test]
    fn test_non_numeric_is_usage_error() {
        let result = Cli::try_parse_from(["returnperiod", "generate", "--max", "lots"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_args() {
        let cli = Cli::try_parse_from(["returnperiod", "-l", "debug", "inspect", "rp.bin", "-f", "json"])
            .expect("Should parse");
        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Command::Inspect(args) => {
                assert_eq!(args.input, PathBuf::from("rp.bin"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            Command::Generate(_) => panic!("Expected inspect"),
        }
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Info.as_filter(), "info");
        assert_eq!(LogLevel::Trace.as_filter(), "trace");
    }
}

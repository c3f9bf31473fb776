//! `returnperiod inspect`

use crate::config::{InspectArgs, OutputFormat};
use crate::error::CliError;
use crate::sink::EchoSink;
use returnperiod_core::ReturnPeriodTable;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// JSON form of a decoded record file
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    record_count: usize,
    return_periods: &'a [i32],
}

/// Read and decode a record file.
pub fn load(path: &Path) -> Result<ReturnPeriodTable, CliError> {
    let data = std::fs::read(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    ReturnPeriodTable::parse(&data).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode `args.input` and print it to `out` in the requested format.
///
/// Returns the number of records.
pub fn run<W: Write>(args: &InspectArgs, out: W) -> Result<usize, CliError> {
    let table = load(&args.input)?;
    info!(
        records = table.len(),
        input = %args.input.display(),
        "Decoded record file"
    );

    print_table(&table, args.format, out)?;
    Ok(table.len())
}

/// Print a decoded table.
///
/// `Text` uses the same layout as the `generate --verbose` echo.
pub fn print_table<W: Write>(
    table: &ReturnPeriodTable,
    format: OutputFormat,
    mut out: W,
) -> Result<(), CliError> {
    let report = InspectReport {
        record_count: table.len(),
        return_periods: table.values(),
    };

    match format {
        OutputFormat::Text => {
            let mut echo = EchoSink::start(out)?;
            for &value in table.values() {
                echo.echo(value)?;
            }
            echo.finish()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out).map_err(CliError::Report)?;
        }
        OutputFormat::JsonPretty => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out).map_err(CliError::Report)?;
        }
    }

    Ok(())
}

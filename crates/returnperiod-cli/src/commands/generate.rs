//! `returnperiod generate`

use crate::config::GenerateArgs;
use crate::error::CliError;
use crate::sink::{FileSink, Sink};
use returnperiod_core::{ParameterSet, ReturnPeriods};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Result of a successful generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateSummary {
    /// Validated parameters
    pub parameters: ParameterSet,
    /// Number of records written
    pub records: u64,
    /// Record file path
    pub output: PathBuf,
}

/// Validate `args`, create the output file and stream the sequence into it.
///
/// The parameters are validated before the output file is touched, so a
/// configuration error never leaves a file behind. `echo` only receives
/// text when `args.verbose` is set.
pub fn run<E: Write>(args: &GenerateArgs, echo: E) -> Result<GenerateSummary, CliError> {
    let parameters = args.parameters()?;
    let cutover = parameters.cutover();

    info!(
        min = parameters.min(),
        step = parameters.step(),
        max = parameters.max(),
        "Resolved return period configuration"
    );
    info!(
        index = cutover.index,
        value = cutover.value,
        "Computed cutover"
    );

    let file = FileSink::create(&args.output)?;
    let records = write_sequence(&parameters, file, args.verbose.then_some(echo))?;

    info!(
        records,
        output = %args.output.display(),
        "Wrote return periods"
    );

    Ok(GenerateSummary {
        parameters,
        records,
        output: args.output.clone(),
    })
}

/// Stream every value of the sequence through a [`Sink`].
///
/// Values are generated, encoded, written and echoed one at a time. Any
/// failure, including the final flush, is logged before it is returned.
pub fn write_sequence<W: Write, E: Write>(
    parameters: &ParameterSet,
    writer: W,
    echo: Option<E>,
) -> Result<u64, CliError> {
    let mut sink = Sink::new(writer, echo)?;
    let mut values = ReturnPeriods::new(parameters);
    let mut phase = values.phase();

    while let Some(value) = values.next() {
        if values.phase() != phase {
            debug!(
                from = ?phase,
                to = ?values.phase(),
                at = value,
                written = sink.written(),
                "Phase transition"
            );
            phase = values.phase();
        }

        if let Err(e) = sink.emit(value) {
            error!(ordinal = ?e.failed_ordinal(), value, "Aborting generation: {e}");
            return Err(e);
        }
    }

    let written = sink.written();
    sink.finish().inspect_err(|e| {
        error!(ordinal = ?e.failed_ordinal(), written, "Failed to finish output: {e}");
    })
}

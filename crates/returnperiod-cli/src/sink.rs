//! Output sinks.
//!
//! The sink owns no generation logic: it receives values in order, hands
//! each one to the record writer and, when echo is enabled, prints the same
//! value as decimal text before the next value is produced.

use crate::error::CliError;
use returnperiod_core::RecordWriter;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Header line of the echo stream
pub const ECHO_HEADER: &str = "return_period";

/// Unbuffered record file.
///
/// Each record reaches the file with its own `write_all`, so the ordinal
/// counted by [`RecordWriter`] is the ordinal the file actually holds and a
/// failing write is reported against the record that caused it.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Create (or truncate) the output record file
    pub fn create(path: &Path) -> Result<Self, CliError> {
        let file = File::create(path).map_err(|source| CliError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file })
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Decimal echo of return periods, one per line after a header line.
#[derive(Debug)]
pub struct EchoSink<W: Write> {
    inner: W,
    echoed: u64,
}

impl<W: Write> EchoSink<W> {
    /// Write the header line and return the sink
    pub fn start(mut inner: W) -> Result<Self, CliError> {
        writeln!(inner, "{ECHO_HEADER}").map_err(|source| CliError::Echo { ordinal: 0, source })?;
        Ok(Self { inner, echoed: 0 })
    }

    /// Echo one value
    pub fn echo(&mut self, value: i32) -> Result<(), CliError> {
        let ordinal = self.echoed + 1;
        writeln!(self.inner, "{value}").map_err(|source| CliError::Echo { ordinal, source })?;
        self.echoed = ordinal;
        Ok(())
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W, CliError> {
        let ordinal = self.echoed;
        self.inner
            .flush()
            .map_err(|source| CliError::Echo { ordinal, source })?;
        Ok(self.inner)
    }
}

/// Record file plus optional echo stream.
#[derive(Debug)]
pub struct Sink<W: Write, E: Write> {
    records: RecordWriter<W>,
    echo: Option<EchoSink<E>>,
}

impl<W: Write, E: Write> Sink<W, E> {
    /// Create a sink; the echo header is written immediately when enabled
    pub fn new(writer: W, echo: Option<E>) -> Result<Self, CliError> {
        let echo = echo.map(EchoSink::start).transpose()?;
        Ok(Self {
            records: RecordWriter::new(writer),
            echo,
        })
    }

    /// Write one value to the record file, then echo it
    pub fn emit(&mut self, value: i32) -> Result<(), CliError> {
        self.records.write_record(value)?;
        if let Some(echo) = self.echo.as_mut() {
            echo.echo(value)?;
        }
        Ok(())
    }

    /// Number of records written so far
    pub const fn written(&self) -> u64 {
        self.records.written()
    }

    /// Flush both outputs and return the record count
    pub fn finish(self) -> Result<u64, CliError> {
        let (_, written) = self.records.finish()?;
        if let Some(echo) = self.echo {
            echo.finish()?;
        }
        Ok(written)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use returnperiod_core::ReturnPeriodTable;

    /// Writer whose every write fails
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_echo_layout() {
        let mut echo = EchoSink::start(Vec::new()).expect("Should write header");
        echo.echo(5).expect("Should echo");
        echo.echo(10).expect("Should echo");
        let text = String::from_utf8(echo.finish().expect("Should flush")).expect("UTF-8");
        assert_eq!(text, "return_period\n5\n10\n");
    }

    #[test]
    fn test_sink_writes_both_outputs() {
        let mut records = Vec::new();
        let mut text = Vec::new();
        {
            let mut sink = Sink::new(&mut records, Some(&mut text)).expect("Should start");
            for value in [5, 10, 15] {
                sink.emit(value).expect("Should emit");
            }
            assert_eq!(sink.written(), 3);
            assert_eq!(sink.finish().expect("Should finish"), 3);
        }

        let table = ReturnPeriodTable::parse(&records).expect("Should parse");
        assert_eq!(table.values(), &[5, 10, 15]);
        assert_eq!(String::from_utf8(text).expect("UTF-8"), "return_period\n5\n10\n15\n");
    }

    #[test]
    fn test_sink_without_echo() {
        let mut records = Vec::new();
        let mut sink = Sink::<_, io::Sink>::new(&mut records, None).expect("Should start");
        sink.emit(42).expect("Should emit");
        assert_eq!(sink.finish().expect("Should finish"), 1);
        assert_eq!(records, 42i32.to_le_bytes());
    }

    #[test]
    fn test_record_failure_stops_before_echo() {
        let mut text = Vec::new();
        let mut sink = Sink::new(Closed, Some(&mut text)).expect("Should start");
        let err = sink.emit(5).expect_err("Write should fail");
        assert_eq!(err.failed_ordinal(), Some(1));
        drop(sink);
        assert_eq!(String::from_utf8(text).expect("UTF-8"), "return_period\n");
    }

    #[test]
    fn test_echo_failure_reported() {
        let result = EchoSink::start(Closed);
        assert!(matches!(result, Err(CliError::Echo { ordinal: 0, .. })));
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("missing").join("returnperiods.bin");
        let result = FileSink::create(&path);
        assert!(matches!(result, Err(CliError::CreateOutput { .. })));
    }

    #[test]
    fn test_file_sink_holds_every_counted_record() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("returnperiods.bin");
        let mut sink =
            Sink::<_, io::Sink>::new(FileSink::create(&path).expect("Should create"), None)
                .expect("Should start");
        for value in [5, 10, 15] {
            sink.emit(value).expect("Should emit");
            // Nothing is held back in a buffer
            let len = std::fs::metadata(&path).expect("Should stat").len();
            assert_eq!(len, sink.written() * 4);
        }
        assert_eq!(sink.finish().expect("Should finish"), 3);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_sink_full_device_fails_first_record() {
        let mut sink = Sink::<_, io::Sink>::new(
            FileSink::create(Path::new("/dev/full")).expect("Should open /dev/full"),
            None,
        )
        .expect("Should start");
        let err = sink.emit(5).expect_err("Full device should reject the record");
        assert_eq!(err.failed_ordinal(), Some(1));
        assert_eq!(sink.written(), 0);
    }
}

//! Fixed-width return period records
//!
//! # Format
//!
//! - One record per return period: a 4-byte signed integer
//! - Byte order: little-endian
//! - No header, footer, magic or length field
//! - Record count is `file_len / 4`
//!
//! ```text
//! 05 00 00 00 | 0a 00 00 00 | 0f 00 00 00 | ...
//!     5             10            15
//! ```

use crate::error::{DecodeError, EncodeError};
use binrw::io::Cursor;
use binrw::{BinRead, BinWrite};
use std::io::Write;

/// Size of a single encoded record in bytes
pub const RECORD_SIZE: usize = 4;

/// A single encoded return period
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
#[brw(little)]
pub struct ReturnPeriodRecord(pub i32);

impl ReturnPeriodRecord {
    /// Serialize into a fixed 4-byte buffer
    pub fn to_bytes(self) -> Result<[u8; RECORD_SIZE], EncodeError> {
        let mut buf = [0u8; RECORD_SIZE];
        self.write(&mut Cursor::new(&mut buf[..]))?;
        Ok(buf)
    }
}

/// Streams records to any writer
///
/// Every record is serialized in full before it reaches the writer and is
/// handed over with a single `write_all`. The first failing write ends the
/// stream; callers get the 1-based ordinal of the record that failed.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> RecordWriter<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Encode and write one value
    pub fn write_record(&mut self, value: i32) -> Result<(), EncodeError> {
        let ordinal = self.written + 1;
        let bytes = ReturnPeriodRecord(value).to_bytes()?;
        self.inner
            .write_all(&bytes)
            .map_err(|source| EncodeError::Write { ordinal, source })?;
        self.written = ordinal;
        Ok(())
    }

    /// Number of records written so far
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Flush the writer and return it with the record count
    pub fn finish(mut self) -> Result<(W, u64), EncodeError> {
        let written = self.written;
        self.inner
            .flush()
            .map_err(|source| EncodeError::Flush { written, source })?;
        Ok((self.inner, written))
    }
}

/// Encode every value of `values` into `writer`
///
/// Returns the number of records written. Stops at the first write error.
pub fn encode_sequence<I, W>(values: I, writer: W) -> Result<u64, EncodeError>
where
    I: IntoIterator<Item = i32>,
    W: Write,
{
    let mut records = RecordWriter::new(writer);
    for value in values {
        records.write_record(value)?;
    }
    let (_, written) = records.finish()?;
    Ok(written)
}

/// Decoded contents of a record file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReturnPeriodTable {
    values: Vec<i32>,
}

impl ReturnPeriodTable {
    /// Wrap already generated values
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Number of whole records in `byte_len` bytes, or `None` when the
    /// length is not a multiple of the record size
    pub const fn record_count_for(byte_len: usize) -> Option<usize> {
        if byte_len % RECORD_SIZE == 0 {
            Some(byte_len / RECORD_SIZE)
        } else {
            None
        }
    }

    /// Parse a record file
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        let count =
            Self::record_count_for(data.len()).ok_or(DecodeError::TrailingBytes {
                len: data.len(),
                record_size: RECORD_SIZE,
            })?;

        let mut cursor = Cursor::new(data);
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let record = ReturnPeriodRecord::read(&mut cursor)?;
            values.push(record.0);
        }

        Ok(Self { values })
    }

    /// Decoded values in file order
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the table and return its values
    pub fn into_values(self) -> Vec<i32> {
        self.values
    }
}

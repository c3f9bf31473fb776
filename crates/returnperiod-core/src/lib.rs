//! Return period sequence generation and encoding
//!
#![allow(clippy::cast_possible_truncation)] // i64 cursor narrows back to i32 record values
#![allow(clippy::cast_possible_wrap)] // Record counts and divisors stay small
#![allow(clippy::cast_precision_loss)] // Cutover formula works in f64
#![allow(clippy::uninlined_format_args)] // Backwards compatibility
//! This crate computes the discrete return periods used to sample a hazard
//! or risk curve and encodes them as a flat array of fixed-width records.
//!
//! # Sequence
//!
//! Points are dense near the minimum and sparse near the maximum:
//!
//! - **Linear phase**: `min, min + step, ...` up to the cutover value
//! - **Reciprocal phase**: `max / i` for decreasing `i`, ending at `max`
//!
//! The cutover index is derived in closed form from `step` and `max` (see
//! [`cutover`]).
//!
//! # Record Format
//!
//! Each value is a little-endian `i32`. There is no header, so the record
//! count of a file is its length divided by four (see [`record`]).
//!
//! # Example
//!
//! ```rust
//! use returnperiod_core::{ParameterSet, ReturnPeriodTable, ReturnPeriods, encode_sequence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = ParameterSet::new(5, 5, 100)?;
//!
//! let mut bytes = Vec::new();
//! let count = encode_sequence(ReturnPeriods::new(&params), &mut bytes)?;
//! assert_eq!(count, 7);
//!
//! let table = ReturnPeriodTable::parse(&bytes)?;
//! assert_eq!(table.values(), &[5, 10, 15, 20, 33, 50, 100]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod cutover;
pub mod error;
pub mod params;
pub mod record;
pub mod sequence;

pub use cutover::Cutover;
pub use error::{ConfigError, DecodeError, EncodeError};
pub use params::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, ParameterSet};
pub use record::{RECORD_SIZE, RecordWriter, ReturnPeriodRecord, ReturnPeriodTable, encode_sequence};
pub use sequence::{Phase, ReturnPeriods, sequence};

//! Cutover between the linear and reciprocal phases
//!
//! The reciprocal phase emits `max / i` for decreasing `i`. Its local spacing,
//! `max / i - max / (i + 1)`, shrinks below `step` once `i` is large enough.
//! The cutover index `j` is the largest `i` at which the reciprocal spacing is
//! still comparable to `step`:
//!
//! ```text
//! j = floor( 0.5 * ( sqrt(4n + s) / sqrt(s) - 1 ) )    n = max, s = step
//! m = n / j                                            (integer division)
//! ```
//!
//! `s` is the configured step itself and the result is truncated with no
//! rounding bias.

use crate::error::{ConfigError, Result};
use serde::Serialize;

/// Phase boundary derived from `(step, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cutover {
    /// Number of reciprocal candidates, `j >= 1`
    pub index: i32,
    /// Value at which the linear phase stops, `max / index`
    pub value: i32,
}

impl Cutover {
    /// Compute the cutover for a step and maximum
    ///
    /// Callers are expected to have rejected `step < 1` already; it is
    /// reported as [`ConfigError::NonPositiveStep`] here as well so the
    /// formula never divides by zero.
    pub fn compute(step: i32, max: i32) -> Result<Self> {
        if step < 1 {
            return Err(ConfigError::NonPositiveStep(step));
        }

        let n = f64::from(max);
        let s = f64::from(step);
        let raw = 0.5 * ((4.0 * n + s).sqrt() / s.sqrt() - 1.0);
        let index = raw.floor();

        // NaN when max is negative
        if index.is_nan() || index < 1.0 {
            return Err(ConfigError::StepTooLarge { step, max });
        }

        // index <= sqrt(max) so it always fits
        let index = index as i32;
        Ok(Self {
            index,
            value: max / index,
        })
    }
}

//! Two-phase return period sequence
//!
//! Values are produced lazily, one at a time:
//!
//! 1. **Linear**: `min, min + step, ...` while the value is below the cutover
//!    value `m`.
//! 2. **Reciprocal**: `max / i` for `i = j, j - 1, ..., 2`, then `max` itself.
//!
//! A reciprocal candidate is kept only when it is at least `min_gap` above
//! the acceptance baseline. The baseline starts at the cursor where the
//! linear phase stopped (the first linear value that was *not* emitted) and
//! then follows the last emitted value. Candidates that fail the check are
//! dropped. `max` always closes the sequence.
//!
//! ```rust
//! use returnperiod_core::{ParameterSet, sequence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = ParameterSet::new(5, 5, 100)?;
//! assert_eq!(sequence(&params), vec![5, 10, 15, 20, 33, 50, 100]);
//! # Ok(())
//! # }
//! ```

use crate::params::ParameterSet;
use std::iter::FusedIterator;

/// Which part of the sequence the generator is emitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Uniform spacing of `step`
    Linear,
    /// `max / i` for decreasing `i`
    Reciprocal,
    /// `max` has been emitted
    Done,
}

/// Streaming generator over a validated [`ParameterSet`]
#[derive(Debug, Clone)]
pub struct ReturnPeriods<'a> {
    params: &'a ParameterSet,
    phase: Phase,
    /// Next linear value; widened so `cursor + step` cannot overflow
    cursor: i64,
    /// Next reciprocal divisor
    divisor: i32,
    /// Acceptance baseline for reciprocal candidates
    baseline: i64,
}

impl<'a> ReturnPeriods<'a> {
    /// Start a new pass over `params`
    pub fn new(params: &'a ParameterSet) -> Self {
        let min = i64::from(params.min());
        Self {
            params,
            phase: Phase::Linear,
            cursor: min,
            divisor: params.cutover().index,
            baseline: min,
        }
    }

    /// Phase of the next value to be produced
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    fn next_linear(&mut self) -> Option<i32> {
        if self.cursor < i64::from(self.params.cutover().value) {
            let value = self.cursor as i32;
            self.cursor += i64::from(self.params.step());
            return Some(value);
        }

        self.phase = Phase::Reciprocal;
        self.baseline = self.cursor;
        None
    }

    fn next_reciprocal(&mut self) -> Option<i32> {
        let max = self.params.max();
        let gap = i64::from(self.params.min_gap());

        while self.divisor > 1 {
            let candidate = max / self.divisor;
            self.divisor -= 1;

            if i64::from(candidate) >= self.baseline + gap {
                self.baseline = i64::from(candidate);
                return Some(candidate);
            }
        }

        self.phase = Phase::Done;
        Some(max)
    }
}

impl Iterator for ReturnPeriods<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.phase == Phase::Linear
            && let Some(value) = self.next_linear()
        {
            return Some(value);
        }

        match self.phase {
            Phase::Reciprocal => self.next_reciprocal(),
            Phase::Linear | Phase::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Done => (0, Some(0)),
            Phase::Reciprocal => (1, Some(self.divisor as usize)),
            Phase::Linear => {
                let step = i64::from(self.params.step());
                let cutover = i64::from(self.params.cutover().value);
                let linear = ((cutover - self.cursor + step - 1) / step).max(0) as usize;
                let reciprocal = self.params.cutover().index as usize;
                (linear + 1, Some(linear + reciprocal))
            }
        }
    }
}

impl FusedIterator for ReturnPeriods<'_> {}

/// Generate the full sequence for `params` into a vector
pub fn sequence(params: &ParameterSet) -> Vec<i32> {
    ReturnPeriods::new(params).collect()
}

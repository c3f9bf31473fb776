//! Validated generation parameters

use crate::cutover::Cutover;
use crate::error::{ConfigError, Result};
use serde::Serialize;

/// Default minimum return period
pub const DEFAULT_MIN: i32 = 5;
/// Default step between linear return periods
pub const DEFAULT_STEP: i32 = 5;
/// Default maximum return period
pub const DEFAULT_MAX: i32 = 10000;

/// Immutable `(min, step, max)` triple with its cutover
///
/// Only [`ParameterSet::new`] builds one, so holding a `ParameterSet` means
/// the sequence it describes starts at `min`, ends at `max` and is strictly
/// increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    min: i32,
    step: i32,
    max: i32,
    cutover: Cutover,
}

impl ParameterSet {
    /// Validate the three inputs and derive the cutover
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `step < 1` or `min < 1`
    /// - `min >= max`
    /// - the cutover index would be below 1
    /// - `min` is not below the cutover value (empty linear phase)
    /// - with a cutover index of 1, the last linear value lies within the
    ///   minimum gap of `max`
    pub fn new(min: i32, step: i32, max: i32) -> Result<Self> {
        if step < 1 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        if min < 1 {
            return Err(ConfigError::NonPositiveMin(min));
        }
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }

        let cutover = Cutover::compute(step, max)?;

        if min >= cutover.value {
            return Err(ConfigError::MinAboveCutover {
                min,
                cutover: cutover.value,
            });
        }

        let params = Self {
            min,
            step,
            max,
            cutover,
        };

        // Only a single reciprocal point exists here, so nothing sits
        // between the last linear value and max.
        if cutover.index == 1 {
            let last = params.last_linear();
            let gap = params.min_gap();
            if max - last < gap {
                return Err(ConfigError::TerminalGap { last, max, gap });
            }
        }

        Ok(params)
    }

    /// Minimum return period, the first value of the sequence
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Spacing of the linear phase
    pub const fn step(&self) -> i32 {
        self.step
    }

    /// Maximum return period, the last value of the sequence
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Cutover derived from `step` and `max`
    pub const fn cutover(&self) -> Cutover {
        self.cutover
    }

    /// Smallest gap accepted between consecutive reciprocal values
    pub const fn min_gap(&self) -> i32 {
        let half = self.step / 2;
        if half < 1 { 1 } else { half }
    }

    /// Number of values the linear phase emits
    pub fn linear_len(&self) -> i32 {
        (self.cutover.value - 1 - self.min) / self.step + 1
    }

    /// Last value the linear phase emits
    pub fn last_linear(&self) -> i32 {
        self.min + (self.linear_len() - 1) * self.step
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        // 10000 / 44 = 227, so the defaults are well inside every bound
        Self {
            min: DEFAULT_MIN,
            step: DEFAULT_STEP,
            max: DEFAULT_MAX,
            cutover: Cutover {
                index: 44,
                value: 227,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_validated() {
        let validated = ParameterSet::new(DEFAULT_MIN, DEFAULT_STEP, DEFAULT_MAX)
            .expect("Defaults should validate");
        assert_eq!(validated, ParameterSet::default());
    }

    #[test]
    fn test_accessors() {
        let params = ParameterSet::new(5, 5, 100).expect("Should validate");
        assert_eq!(params.min(), 5);
        assert_eq!(params.step(), 5);
        assert_eq!(params.max(), 100);
        assert_eq!(params.cutover().index, 4);
        assert_eq!(params.cutover().value, 25);
        assert_eq!(params.min_gap(), 2);
        assert_eq!(params.linear_len(), 4);
        assert_eq!(params.last_linear(), 20);
    }

    #[test]
    fn test_min_gap_never_zero() {
        let params = ParameterSet::new(1, 1, 100).expect("Should validate");
        assert_eq!(params.min_gap(), 1);
    }

    #[test]
    fn test_rejects_zero_step() {
        assert_eq!(
            ParameterSet::new(5, 0, 100),
            Err(ConfigError::NonPositiveStep(0))
        );
    }

    #[test]
    fn test_rejects_negative_min() {
        assert_eq!(
            ParameterSet::new(-1, 5, 100),
            Err(ConfigError::NonPositiveMin(-1))
        );
    }

    #[test]
    fn test_rejects_empty_range() {
        assert_eq!(
            ParameterSet::new(100, 5, 100),
            Err(ConfigError::EmptyRange { min: 100, max: 100 })
        );
        assert_eq!(
            ParameterSet::new(200, 5, 100),
            Err(ConfigError::EmptyRange { min: 200, max: 100 })
        );
    }

    #[test]
    fn test_rejects_large_step() {
        assert_eq!(
            ParameterSet::new(1, 10, 19),
            Err(ConfigError::StepTooLarge { step: 10, max: 19 })
        );
    }

    #[test]
    fn test_rejects_min_above_cutover() {
        assert_eq!(
            ParameterSet::new(90, 5, 100),
            Err(ConfigError::MinAboveCutover {
                min: 90,
                cutover: 25
            })
        );
        assert_eq!(
            ParameterSet::new(25, 5, 100),
            Err(ConfigError::MinAboveCutover {
                min: 25,
                cutover: 25
            })
        );
    }

    #[test]
    fn test_rejects_terminal_gap() {
        // j = 1, m = 21, linear phase emits 20 only
        assert_eq!(
            ParameterSet::new(20, 10, 21),
            Err(ConfigError::TerminalGap {
                last: 20,
                max: 21,
                gap: 5
            })
        );
    }

    #[test]
    fn test_accepts_index_one_with_room() {
        // j = 1, m = 30, linear phase emits 1, 11, 21
        let params = ParameterSet::new(1, 10, 30).expect("Should validate");
        assert_eq!(params.cutover().index, 1);
        assert_eq!(params.last_linear(), 21);
    }
}

//! Validating front-ends for the range-restricted primitives.
//!
//! Each wrapper returns exactly what the unchecked function returns when the
//! input is in range. NaN never satisfies a range check.

use thiserror::Error;

use crate::angle::{ang_diff, ang_normalize, ang_normalize2};
use crate::basic::is_finite;
use crate::transcendental::{atanh, log1p};

/// Input rejected by one of the checked wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// `log1p` needs `x > -1`.
    #[error("log1p argument {0} must exceed -1")]
    Log1p(f64),
    /// `atanh` needs `-1 < x < 1`.
    #[error("atanh argument {0} outside (-1, 1)")]
    Atanh(f64),
    /// An angle fell outside the range the reduction is exact for.
    #[error("angle {value} outside {range}")]
    AngleRange {
        /// Offending angle in degrees.
        value: f64,
        /// Accepted interval in interval notation.
        range: &'static str,
    },
    /// NaN or infinity where a finite angle is required.
    #[error("non-finite angle {0}")]
    NonFinite(f64),
}

fn reject(op: &'static str, err: DomainError) -> DomainError {
    #[cfg(feature = "telemetry")]
    tracing::debug!(op, %err, "geomath input rejected");
    #[cfg(not(feature = "telemetry"))]
    let _ = op;
    err
}

/// [`log1p`] for `x > -1`.
pub fn try_log1p(x: f64) -> Result<f64, DomainError> {
    if x > -1.0 {
        Ok(log1p(x))
    } else {
        Err(reject("log1p", DomainError::Log1p(x)))
    }
}

/// [`atanh`] for `|x| < 1`.
pub fn try_atanh(x: f64) -> Result<f64, DomainError> {
    if x.abs() < 1.0 {
        Ok(atanh(x))
    } else {
        Err(reject("atanh", DomainError::Atanh(x)))
    }
}

/// [`ang_normalize`] for `x` in `[-540, 540)`.
pub fn try_ang_normalize(x: f64) -> Result<f64, DomainError> {
    if (-540.0..540.0).contains(&x) {
        Ok(ang_normalize(x))
    } else {
        Err(reject(
            "ang_normalize",
            DomainError::AngleRange {
                value: x,
                range: "[-540, 540)",
            },
        ))
    }
}

/// [`ang_normalize2`] for finite `x`.
pub fn try_ang_normalize2(x: f64) -> Result<f64, DomainError> {
    if is_finite(x) {
        Ok(ang_normalize2(x))
    } else {
        Err(reject("ang_normalize2", DomainError::NonFinite(x)))
    }
}

/// [`ang_diff`] for `x` and `y` both in `[-180, 180]`. The first offending
/// argument is reported.
pub fn try_ang_diff(x: f64, y: f64) -> Result<f64, DomainError> {
    for value in [x, y] {
        if !(-180.0..=180.0).contains(&value) {
            return Err(reject(
                "ang_diff",
                DomainError::AngleRange {
                    value,
                    range: "[-180, 180]",
                },
            ));
        }
    }
    Ok(ang_diff(x, y))
}

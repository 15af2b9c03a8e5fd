//! Angle arithmetic in degrees.
//!
//! The reductions here are single conditional shifts by 360 degrees rather
//! than general modulo operations, which keeps them exact. Callers are
//! expected to respect the documented input ranges; see
//! [`crate::checked`] for validating variants.

use crate::sum::sum;

/// Reduce an angle to `[-180, 180)`.
///
/// `x` must lie in `[-540, 540)`; outside that range the result is
/// unspecified.
pub fn ang_normalize(x: f64) -> f64 {
    if x >= 180.0 {
        x - 360.0
    } else if x < -180.0 {
        x + 360.0
    } else {
        x
    }
}

/// Reduce an arbitrary angle to `[-180, 180)`.
///
/// Goes through the floating remainder first, so very large inputs are only
/// as accurate as `x % 360`.
pub fn ang_normalize2(x: f64) -> f64 {
    ang_normalize(x % 360.0)
}

/// `y - x` reduced to `(-180, 180]`.
///
/// Both angles must lie in `[-180, 180]`. The result equals the exact
/// difference, reduced, then rounded once. That prescription can yield
/// exactly `-180` (for instance when `x` is tiny and negative and
/// `y == 180`), so callers must accept either endpoint.
pub fn ang_diff(x: f64, y: f64) -> f64 {
    let r = sum(-x, y);
    let (mut d, t) = (r.value(), r.error());
    if (d - 180.0) + t > 0.0 {
        // y - x > 180
        d -= 360.0;
    } else if (d + 180.0) + t <= 0.0 {
        // y - x <= -180
        d += 360.0;
    }
    // Both shifts above are exact.
    d + t
}

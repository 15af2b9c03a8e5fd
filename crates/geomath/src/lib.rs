#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Numerically robust elementary primitives shared by the geodesic routines.
//!
//! Everything here is a pure function of its arguments. The unchecked
//! primitives follow IEEE-754 propagation and trust the caller to respect the
//! documented input ranges; [`checked`] offers validating front-ends for call
//! sites that would rather see a [`DomainError`].

/// Angle reduction and differencing in degrees.
pub mod angle;
/// Squares, hypotenuse, cube root and finiteness.
pub mod basic;
/// Validating wrappers around the range-restricted primitives.
pub mod checked;
/// Bit-exact floating-point constants.
pub mod constants;
/// Error-free summation.
pub mod sum;
/// Accuracy-preserving logarithmic helpers.
pub mod transcendental;

pub use angle::{ang_diff, ang_normalize, ang_normalize2};
pub use basic::{cbrt, hypot, is_finite, sq};
pub use checked::{
    try_ang_diff, try_ang_normalize, try_ang_normalize2, try_atanh, try_log1p, DomainError,
};
pub use constants::{DEGREE, DIGITS, EPSILON, MIN};
pub use sum::{sum, TwoSum};
pub use transcendental::{atanh, log1p};

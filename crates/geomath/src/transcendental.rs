//! `log(1 + x)` and `atanh(x)` formulated to keep full relative accuracy for
//! arguments near zero, where the textbook expressions cancel.

/// `ln(1 + x)`, accurate as `x -> 0`.
///
/// From D. Goldberg, *What every computer scientist should know about
/// floating-point arithmetic* (1991), Theorem 4; see also N. J. Higham,
/// *Accuracy and Stability of Numerical Algorithms*, 2nd ed., answer to
/// problem 1.5.
///
/// ```
/// // 1 + 1e-16 rounds to 1, so the naive form loses everything.
/// assert_eq!((1.0f64 + 1e-16).ln(), 0.0);
/// assert_eq!(geomath::log1p(1e-16), 1e-16);
/// ```
pub fn log1p(x: f64) -> f64 {
    let y = 1.0 + x;
    let z = y - 1.0;
    // y = 1 + z exactly and z ~ x, so ln(y)/z is a nearly constant
    // correction to the true ln(1 + x)/x.
    if z == 0.0 {
        x
    } else {
        x * y.ln() / z
    }
}

/// Inverse hyperbolic tangent, built on [`log1p`] and exactly odd:
/// `atanh(-x) == -atanh(x)` bit-for-bit.
///
/// Arguments with `|x| >= 1` are not guarded. At `x == ±1` the quotient
/// `2y / (1 - y)` is infinite and [`log1p`] of infinity evaluates
/// `inf / inf`, so the result is NaN rather than the limiting infinity.
pub fn atanh(x: f64) -> f64 {
    let y = x.abs();
    let y = log1p(2.0 * y / (1.0 - y)) / 2.0;
    if x < 0.0 {
        -y
    } else {
        y
    }
}

/// Square a number.
pub fn sq(x: f64) -> f64 {
    x * x
}

/// `sqrt(x^2 + y^2)` without intermediate overflow or underflow.
///
/// The smaller magnitude is scaled by the larger one so the squared term
/// stays in `[0, 1]`. A NaN in either argument yields NaN. A single
/// infinite argument yields infinity, but `hypot(inf, inf)` is NaN because
/// the scaling step divides `inf / inf`.
pub fn hypot(x: f64, y: f64) -> f64 {
    let (x, y) = (x.abs(), y.abs());
    // `f64::max` would discard a NaN operand here.
    let (a, b) = if x > y { (x, y) } else { (y, x) };
    let b = if a != 0.0 { b / a } else { 0.0 };
    // Moler & Morrison (1983) and Dubrulle (1983) give an iterative
    // alternative that avoids the square root entirely.
    a * (1.0 + b * b).sqrt()
}

/// Real cube root, sign-preserving. Exactly `0` for a zero argument and
/// exact for perfect cubes.
pub fn cbrt(x: f64) -> f64 {
    let y = x.abs().cbrt();
    if x < 0.0 {
        -y
    } else {
        y
    }
}

/// `true` unless `x` is NaN or infinite.
pub fn is_finite(x: f64) -> bool {
    x.abs() <= f64::MAX
}

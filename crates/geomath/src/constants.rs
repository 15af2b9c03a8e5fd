//! Constants downstream accuracy bounds are expressed in. The values must
//! match the IEEE-754 doubles bit-for-bit.

/// Number of binary digits in the fraction of an `f64`, hidden bit included.
pub const DIGITS: u32 = f64::MANTISSA_DIGITS;

/// Machine epsilon, `2^-(DIGITS - 1)`.
pub const EPSILON: f64 = f64::EPSILON;

/// Smallest positive normal `f64`, `2^-1022`.
pub const MIN: f64 = f64::MIN_POSITIVE;

/// Radians per degree.
pub const DEGREE: f64 = core::f64::consts::PI / 180.0;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn digits_matches_double_fraction_width() {
        assert_eq!(DIGITS, 53);
    }

    #[test]
    fn epsilon_is_power_of_two() {
        assert_eq!(EPSILON, 0.5f64.powi(DIGITS as i32 - 1));
        assert_eq!(EPSILON.to_bits(), 0x3cb0_0000_0000_0000);
        assert_eq!(1.0 + EPSILON / 2.0, 1.0);
        assert!(1.0 + EPSILON > 1.0);
    }

    #[test]
    fn min_is_smallest_normal() {
        assert_eq!(MIN, 0.5f64.powi(1022));
        assert_eq!(MIN.to_bits(), 0x0010_0000_0000_0000);
        assert!(MIN.is_normal());
        assert!(!(MIN / 2.0).is_normal());
    }

    #[test]
    fn degree_matches_runtime_quotient() {
        let runtime = std::f64::consts::PI / 180.0;
        assert_eq!(DEGREE.to_bits(), runtime.to_bits());
        assert_relative_eq!(180.0 * DEGREE, std::f64::consts::PI, max_relative = EPSILON);
    }
}

//! Error-free transformation of a two-term sum.

/// Correctly rounded sum of two doubles together with its exact rounding
/// error, so that `u + v == value + error` holds in exact arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSum {
    value: f64,
    error: f64,
}

impl TwoSum {
    /// `round(u + v)`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The residual `u + v - value`, exactly representable.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Recombine the two parts into a single rounded double.
    pub fn total(&self) -> f64 {
        self.value + self.error
    }
}

impl From<TwoSum> for (f64, f64) {
    fn from(sum: TwoSum) -> Self {
        (sum.value, sum.error)
    }
}

/// Knuth's two-sum (TAOCP vol. 2, 4.2.2, theorem B).
///
/// Unlike Dekker's fast variant this needs no ordering of `|u|` and `|v|`
/// and takes no branches.
pub fn sum(u: f64, v: f64) -> TwoSum {
    let s = u + v;
    let mut up = s - v;
    let mut vpp = s - up;
    up -= u;
    vpp -= v;
    let t = -(up + vpp);
    // u + v = s + t = round(u + v) + t
    TwoSum { value: s, error: t }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representable_sum_has_no_residual() {
        let r = sum(1.5, 2.25);
        assert_eq!(r.value(), 3.75);
        assert_eq!(r.error(), 0.0);
    }

    #[test]
    fn residual_recovers_absorbed_term() {
        let r = sum(1.0, 1e-20);
        assert_eq!(r.value(), 1.0);
        assert_eq!(r.error(), 1e-20);

        // Order of operands does not matter.
        let r = sum(1e-20, 1.0);
        assert_eq!(r.value(), 1.0);
        assert_eq!(r.error(), 1e-20);
    }

    #[test]
    fn residual_recovers_tie_rounding() {
        let two53 = 2f64.powi(53);
        let (s, t): (f64, f64) = sum(two53, 1.0).into();
        assert_eq!(s, two53);
        assert_eq!(t, 1.0);

        let (s, t): (f64, f64) = sum(-1.0, -two53).into();
        assert_eq!(s, -two53);
        assert_eq!(t, -1.0);
    }

    #[test]
    fn cancellation_is_exact() {
        let r = sum(0.1, -0.1);
        assert_eq!(r.value(), 0.0);
        assert_eq!(r.error(), 0.0);
    }

    #[test]
    fn total_matches_plain_addition() {
        for (u, v) in [(0.1, 0.2), (1e16, 3.0), (-7.5, 1e-30), (180.0, -1e-20)] {
            assert_eq!(sum(u, v).total(), u + v);
        }
    }

    #[test]
    fn non_finite_inputs_propagate() {
        assert!(sum(f64::NAN, 1.0).value().is_nan());
        assert_eq!(sum(f64::INFINITY, 1.0).value(), f64::INFINITY);
        assert!(sum(f64::INFINITY, 1.0).error().is_nan());
    }
}

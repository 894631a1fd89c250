use crate::FcError;

/// Floating point type used for capacities and flow values.
pub type Real = f64;

/// Zero and equality thresholds for flow arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 16.0 * Real::EPSILON,
        }
    }
}

/// Absolute-or-relative comparison of two flow values.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// True when `value` is indistinguishable from zero relative to `scale`.
///
/// Residual capacities use the edge capacity as `scale`. With the default
/// `rel` only accumulated rounding error is dropped: a whole-number residual
/// stays visible on any edge with capacity below 2^47.
pub fn negligible(value: Real, scale: Real, tol: Tolerances) -> bool {
    value <= tol.abs.max(tol.rel * scale.abs())
}

/// Reject NaN and infinities.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FcError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, FcError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(FcError::Negative { what, value: v });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summed_fractions_compare_equal() {
        let tol = Tolerances::default();
        assert_ne!(0.1 + 0.2, 0.3);
        assert!(nearly_equal(0.1 + 0.2, 0.3, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(14.0, 14.001, tol));
    }

    #[test]
    fn negligible_scales_with_capacity() {
        let tol = Tolerances::default();
        assert!(negligible(0.0, 5.0, tol));
        assert!(negligible(1e-13, 0.0, tol));
        assert!(!negligible(1e-6, 1.0, tol));
        // A few ulps of drift next to a large capacity is noise.
        assert!(negligible(1e6 * Real::EPSILON, 1e6, tol));
        assert!(!negligible(1e-4, 1e6, tol));
        assert!(!negligible(1.0, 1e6, tol));
        assert!(!negligible(500.0, 1e12, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "capacity").unwrap_err();
        assert_eq!(err.to_string(), "capacity must be finite, got NaN");
    }

    #[test]
    fn ensure_non_negative_rejects_negative_and_infinite() {
        assert_eq!(ensure_non_negative(0.0, "cap"), Ok(0.0));
        assert_eq!(ensure_non_negative(3.5, "cap"), Ok(3.5));
        assert!(matches!(
            ensure_non_negative(-1.0, "cap"),
            Err(FcError::Negative { what: "cap", .. })
        ));
        assert!(matches!(
            ensure_non_negative(Real::INFINITY, "cap"),
            Err(FcError::NonFinite { .. })
        ));
    }
}

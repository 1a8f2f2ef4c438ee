//! Scalar numeric utilities.

use crate::num::{Float, Scalar};
use std::ops::Neg;

/// Whether the two values differ by at most `max_abs_diff`.
///
/// All three arguments must be finite (debug-checked).
pub fn approx_equal<F: Float>(l: F, r: F, max_abs_diff: F) -> bool {
    debug_assert!(l.is_finite());
    debug_assert!(r.is_finite());
    debug_assert!(max_abs_diff.is_finite());
    (l - r).abs() <= max_abs_diff
}

/// Restricts `value` to the range `[lo, hi]`.
///
/// `lo` must not exceed `hi` (debug-checked).
pub fn clamp<T: Scalar>(value: T, lo: T, hi: T) -> T {
    debug_assert!(lo <= hi);
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Restricts `value` to the range `[0, 1]`.
pub fn saturate<T: Scalar>(value: T) -> T {
    clamp(value, T::ZERO, T::ONE)
}

/// Linearly interpolates between `l` and `r`.
///
/// `factor` must lie in `[0, 1]` (debug-checked).
pub fn lerp<F: Float>(l: F, r: F, factor: F) -> F {
    debug_assert!(factor >= F::ZERO && factor <= F::ONE);
    l + factor * (r - l)
}

/// Returns -1, 0 or 1 according to the sign of `value`.
pub fn sign<T>(value: T) -> T
where
    T: Scalar + Neg<Output = T>,
{
    if value > T::ZERO {
        T::ONE
    } else if value < T::ZERO {
        -T::ONE
    } else {
        T::ZERO
    }
}

/// Returns 0 if `value` is below `edge`, otherwise 1.
pub fn step<T: Scalar>(edge: T, value: T) -> T {
    if value < edge { T::ZERO } else { T::ONE }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn approx_equal_uses_inclusive_tolerance() {
        assert!(approx_equal(1.0, 1.0, 0.0));
        assert!(approx_equal(1.0, 1.5, 0.5));
        assert!(approx_equal(1.5, 1.0, 0.5));
        assert!(!approx_equal(1.0, 1.6, 0.5));
        assert!(approx_equal(1.0_f32, 1.0 + 0.9e-5, f32::MAX_ABS_DIFF));
    }

    #[test]
    fn clamping_restricts_value_to_range() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!(clamp(0.25, 0.5, 1.0), 0.5);
    }

    #[test]
    fn saturating_restricts_value_to_unit_range() {
        assert_eq!(saturate(0.5), 0.5);
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(1.5), 1.0);
        assert_eq!(saturate(7), 1);
    }

    #[test]
    fn lerping_interpolates_between_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn sign_distinguishes_negative_zero_and_positive() {
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(7.25), 1.0);
        assert_eq!(sign(-4), -1);
        assert_eq!(sign(9), 1);
    }

    #[test]
    fn step_is_zero_below_edge_and_one_at_or_above() {
        assert_eq!(step(1.0, 0.5), 0.0);
        assert_eq!(step(1.0, 1.0), 1.0);
        assert_eq!(step(1.0, 2.0), 1.0);
    }
}

//! Comparison predicates over floats at a caller-chosen decimal precision.
//!
//! Every predicate derives a mask of 10^(−precision) via
//! [`precision_mask`](crate::precision::precision_mask) and decides equality
//! or order within that mask instead of exactly. A predicate that cannot
//! obtain its mask reports the failure to the log sink and returns its
//! identity value (`false`, or `true` for [`approx_ne`]).

use crate::Float;
use crate::precision::{precision_mask, truncate};

/// Returns whether `x` equals `y` to `precision` decimal digits.
///
/// `x` must lie within one mask of `y` on both sides. The four directional
/// inequalities, rather than an absolute-value subtraction, fix the
/// tie-break behavior at the mask boundary.
pub fn approx_eq(x: Float, y: Float, precision: u32) -> bool {
    let Ok(mask) = precision_mask(precision) else {
        log::error!("approx_cmp: no comparison mask for precision {precision}");
        return false;
    };
    (x + mask) > y && (x - mask) < y && x < (y + mask) && x > (y - mask)
}

/// Returns whether `x` differs from `y` to `precision` decimal digits.
pub fn approx_ne(x: Float, y: Float, precision: u32) -> bool {
    !approx_eq(x, y, precision)
}

/// Returns whether `x` exceeds `y` to `precision` decimal digits.
///
/// The raw ordering must also survive shifting both operands up by one mask
/// and down by one mask, which rejects orderings the mask arithmetic cannot
/// reproduce.
pub fn approx_gt(x: Float, y: Float, precision: u32) -> bool {
    let Ok(mask) = precision_mask(precision) else {
        log::error!("approx_cmp: no comparison mask for precision {precision}");
        return false;
    };
    x > y && (x + mask) > (y + mask) && (x - mask) > (y - mask)
}

/// Returns whether `x` is below `y` to `precision` decimal digits.
///
/// Mechanically different from [`approx_gt`]: both operands are cut to
/// `precision` decimal places and the cut values compared directly. The two
/// mechanisms disagree on operands that differ by less than one mask; the
/// divergence is intentional and pinned by tests.
pub fn approx_lt(x: Float, y: Float, precision: u32) -> bool {
    // The truncated comparison never consults the mask, but a mask failure
    // still fails the predicate.
    if precision_mask(precision).is_err() {
        log::error!("approx_cmp: no comparison mask for precision {precision}");
        return false;
    }
    let (Ok(x_cut), Ok(y_cut)) = (truncate(x, precision), truncate(y, precision)) else {
        return false;
    };
    x_cut < y_cut
}

/// Returns whether `x` equals or exceeds `y` to `precision` decimal digits.
pub fn approx_gt_eq(x: Float, y: Float, precision: u32) -> bool {
    approx_eq(x, y, precision) || approx_gt(x, y, precision)
}

/// Returns whether `x` equals or is below `y` to `precision` decimal digits.
pub fn approx_lt_eq(x: Float, y: Float, precision: u32) -> bool {
    approx_eq(x, y, precision) || approx_lt(x, y, precision)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_eq_reflexive() {
        assert!(approx_eq(0.0, 0.0, 1));
        assert!(approx_eq(1.5, 1.5, 10));
        assert!(approx_eq(-273.15, -273.15, 6));
        assert!(!approx_ne(42.0, 42.0, 8));
    }

    #[test]
    fn test_eq_within_mask() {
        // One part in a thousand apart, compared at two digits.
        assert!(approx_eq(1.000, 1.001, 2));
        assert!(!approx_eq(1.00, 1.02, 2));
    }

    #[test]
    fn test_ordering_outside_mask() {
        assert!(approx_lt(1.0, 2.0, 5));
        assert!(approx_gt(2.0, 1.0, 5));
        assert!(!approx_lt(2.0, 1.0, 5));
        assert!(!approx_gt(1.0, 2.0, 5));
    }

    #[test]
    fn test_composed_predicates() {
        assert!(approx_gt_eq(2.0, 1.0, 5));
        assert!(approx_gt_eq(1.0, 1.0, 5));
        assert!(approx_lt_eq(1.0, 2.0, 5));
        assert!(approx_lt_eq(1.0, 1.0, 5));
        assert!(!approx_gt_eq(1.0, 2.0, 5));
        assert!(!approx_lt_eq(2.0, 1.0, 5));
    }

    #[test]
    fn test_invalid_precision_identity_values() {
        assert!(!approx_eq(1.0, 1.0, 0));
        assert!(approx_ne(1.0, 1.0, 0));
        assert!(!approx_gt(2.0, 1.0, 0));
        assert!(!approx_lt(1.0, 2.0, 0));
        assert!(!approx_gt_eq(2.0, 1.0, 0));
        assert!(!approx_lt_eq(1.0, 2.0, 0));
    }

    /// Operands closer than one mask: the additive-mask predicates see
    /// equality, while the truncating less-than still resolves an order
    /// whenever the cut decimals differ. Both behaviors hold at once.
    #[test]
    fn test_mask_boundary_divergence() {
        // 1.004 and 1.006 cut at two digits to 1.00 and 1.01.
        assert!(approx_eq(1.004, 1.006, 2));
        assert!(approx_lt(1.004, 1.006, 2));
        assert!(approx_gt(1.006, 1.004, 2));

        // 1.0041 and 1.0049 both cut to 1.00: less-than resolves nothing,
        // yet the shifted compare still sees the raw ordering.
        assert!(approx_eq(1.0041, 1.0049, 2));
        assert!(!approx_lt(1.0041, 1.0049, 2));
        assert!(approx_gt(1.0049, 1.0041, 2));
    }

    proptest! {
        #[test]
        fn proptest_eq_reflexive(x in -1.0e4..1.0e4_f64, p in 1..=10_u32) {
            prop_assert!(approx_eq(x, x, p));
            prop_assert!(!approx_ne(x, x, p));
        }

        #[test]
        fn proptest_ordering_beyond_ten_masks(
            x in -1.0e4..1.0e4_f64,
            gap in 2.0e-3..1.0e3_f64,
            p in 4..=10_u32,
        ) {
            // Separations above 10^(1−p) order cleanly in both mechanisms.
            let y = x + gap;
            prop_assert!(approx_lt(x, y, p));
            prop_assert!(approx_gt(y, x, p));
            prop_assert!(!approx_eq(x, y, p));
        }
    }
}

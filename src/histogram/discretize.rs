//! Mapping between values in `[0, 1]` and equal-width bins.

/// Map `value` in `[0, 1]` to one of `num_bins` equal-width bins.
///
/// Computes `floor(value * num_bins)` clamped to `[0, num_bins - 1]`, so
/// `0.0` lands in bin 0 and `1.0` in the last bin. Values below zero and NaN
/// map to bin 0, values above one to the last bin.
#[inline]
pub fn discretize(value: f32, num_bins: usize) -> usize {
    debug_assert!(num_bins > 0, "num_bins must be positive");
    // `as usize` saturates: negatives and NaN become 0.
    let bin = (value * num_bins as f32) as usize;
    bin.min(num_bins - 1)
}

/// Representative value of `bin`: its index normalized to `[0, 1]`.
///
/// The first bin maps to `0.0` and the last to `1.0`. A single-bin
/// histogram maps everything to `0.0`.
#[inline]
pub fn bin_value(bin: usize, num_bins: usize) -> f32 {
    if num_bins <= 1 {
        0.0
    } else {
        bin as f32 / (num_bins - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 4, 0)]
    #[case(0.1, 4, 0)]
    #[case(0.25, 4, 1)]
    #[case(0.9, 4, 3)]
    #[case(0.95, 4, 3)]
    #[case(1.0, 4, 3)]
    #[case(0.5, 1, 0)]
    #[case(1.0, 256, 255)]
    fn test_discretize_cases(#[case] value: f32, #[case] bins: usize, #[case] expected: usize) {
        assert_eq!(discretize(value, bins), expected);
    }

    #[test]
    fn test_discretize_out_of_range() {
        assert_eq!(discretize(-0.5, 10), 0);
        assert_eq!(discretize(f32::NAN, 10), 0);
        assert_eq!(discretize(3.0, 10), 9);
    }

    #[test]
    fn test_bin_value_endpoints() {
        assert_eq!(bin_value(0, 8), 0.0);
        assert_eq!(bin_value(7, 8), 1.0);
        assert_eq!(bin_value(0, 1), 0.0);
    }

    proptest! {
        #[test]
        fn prop_discretize_in_range(value in 0.0f32..=1.0, bins in 1usize..1024) {
            let bin = discretize(value, bins);
            prop_assert!(bin < bins);
        }

        #[test]
        fn prop_discretize_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0, bins in 1usize..1024) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(discretize(lo, bins) <= discretize(hi, bins));
        }

        #[test]
        fn prop_discretize_endpoints(bins in 1usize..4096) {
            prop_assert_eq!(discretize(0.0, bins), 0);
            prop_assert_eq!(discretize(1.0, bins), bins - 1);
        }
    }
}

//! Bounded frequency histograms over `[0, 1]`.
//!
//! # Overview
//!
//! A [`Histogram`] counts samples in `N` equal-width bins covering `[0, 1]`.
//! Per-edge quantile estimation keeps one histogram per edge; when two
//! regions merge the retiring edge's histogram is added into the surviving
//! one, so quantiles stay available without storing raw samples.
//!
//! # Key Types
//!
//! - [`Histogram`]: Counts plus cached total and lowest populated bin
//! - [`discretize`]: Value-to-bin mapping
//! - [`bin_value`]: Bin-to-value mapping used by quantile queries
//!
//! # Example
//!
//! ```
//! use region_merge::histogram::{discretize, Histogram};
//!
//! let mut hist = Histogram::new(4);
//! for value in [0.1, 0.6, 0.9] {
//!     hist.increment(discretize(value, hist.num_bins()));
//! }
//! assert_eq!(hist.counts(), &[1, 0, 1, 1]);
//! assert_eq!(hist.quantile(0.5), 2.0 / 3.0);
//! ```

mod discretize;

pub use discretize::{bin_value, discretize};

use std::ops::AddAssign;

// ============================================================================
// Histogram
// ============================================================================

/// Fixed-resolution counter over `[0, 1]`.
///
/// # Invariants
///
/// - The number of bins is fixed at construction.
/// - `total()` equals the sum of all bin counts.
/// - `lowest_populated_bin()` is the smallest non-zero bin, or `num_bins()`
///   when the histogram is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Sample count per bin: [num_bins]
    counts: Box<[u32]>,
    /// Sum of `counts`
    total: u64,
    /// Smallest bin with a non-zero count, `counts.len()` when empty
    lowest: usize,
}

impl Histogram {
    /// Create an empty histogram with `num_bins` bins.
    ///
    /// # Panics
    ///
    /// Panics if `num_bins == 0`.
    pub fn new(num_bins: usize) -> Self {
        assert!(num_bins > 0, "histogram needs at least one bin");
        Self {
            counts: vec![0; num_bins].into_boxed_slice(),
            total: 0,
            lowest: num_bins,
        }
    }

    /// Build a histogram from explicit bin counts.
    ///
    /// Useful for testing.
    pub fn from_counts(counts: &[u32]) -> Self {
        assert!(!counts.is_empty(), "histogram needs at least one bin");
        Self {
            counts: counts.into(),
            total: counts.iter().map(|&c| c as u64).sum(),
            lowest: counts.iter().position(|&c| c > 0).unwrap_or(counts.len()),
        }
    }

    /// Number of bins.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    /// Add one sample to `bin`.
    #[inline]
    pub fn increment(&mut self, bin: usize) {
        debug_assert!(bin < self.counts.len(), "bin {} >= num_bins {}", bin, self.counts.len());
        self.counts[bin] += 1;
        self.total += 1;
        self.lowest = self.lowest.min(bin);
    }

    /// Smallest bin with a non-zero count, or `num_bins()` if empty.
    #[inline]
    pub fn lowest_populated_bin(&self) -> usize {
        self.lowest
    }

    /// Count in `bin`.
    #[inline]
    pub fn count(&self, bin: usize) -> u32 {
        self.counts[bin]
    }

    /// All bin counts.
    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of samples held.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Reset all bins to zero.
    pub fn clear(&mut self) {
        self.counts.fill(0);
        self.total = 0;
        self.lowest = self.counts.len();
    }

    /// Add `other`'s counts into self, bin by bin.
    ///
    /// `other` is left untouched; callers folding a retiring histogram clear
    /// it afterwards.
    pub fn merge_from(&mut self, other: &Histogram) {
        debug_assert_eq!(self.counts.len(), other.counts.len());
        if other.is_empty() {
            return;
        }

        for (dst, &src) in self.counts.iter_mut().zip(other.counts.iter()) {
            *dst += src;
        }
        self.total += other.total;
        self.lowest = self.lowest.min(other.lowest);
    }

    /// Estimate the `q`-quantile of the binned samples.
    ///
    /// Walks the bins in ascending order until the cumulative count reaches
    /// rank `min(floor(q * total) + 1, total)` and returns that bin's
    /// normalized index (see [`bin_value`]). `q` is clamped to `[0, 1]`;
    /// `q = 0` yields the lowest populated bin and `q = 1` the highest.
    ///
    /// Returns `0.0` for an empty histogram.
    pub fn quantile(&self, q: f32) -> f32 {
        match self.quantile_bin(q) {
            Some(bin) => bin_value(bin, self.counts.len()),
            None => 0.0,
        }
    }

    /// Bin holding the `q`-quantile, or `None` if empty.
    pub fn quantile_bin(&self, q: f32) -> Option<usize> {
        let q = if q.is_nan() { 0.0 } else { q.clamp(0.0, 1.0) };
        self.bin_at_rank((q as f64 * self.total as f64).floor() as u64)
    }

    /// Estimate the quantile given as a percentage `p` in `[0, 100]`.
    ///
    /// Same as `quantile(p / 100)`, but the rank is computed from `p`
    /// directly so round percentages such as 70 or 90 are not shifted by the
    /// `f32` rounding of `p / 100`.
    pub fn percentile(&self, p: f32) -> f32 {
        match self.percentile_bin(p) {
            Some(bin) => bin_value(bin, self.counts.len()),
            None => 0.0,
        }
    }

    /// Bin holding the `p`-th percentile, or `None` if empty.
    pub fn percentile_bin(&self, p: f32) -> Option<usize> {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 100.0) };
        self.bin_at_rank((p as f64 * self.total as f64 / 100.0).floor() as u64)
    }

    /// First bin whose cumulative count exceeds `below` samples.
    fn bin_at_rank(&self, below: u64) -> Option<usize> {
        if self.total == 0 {
            return None;
        }

        let rank = (below + 1).min(self.total);
        let mut cumulative = 0u64;
        for (bin, &count) in self.counts.iter().enumerate().skip(self.lowest) {
            cumulative += count as u64;
            if cumulative >= rank {
                return Some(bin);
            }
        }

        // Unreachable while `total` matches the counts.
        Some(self.counts.len() - 1)
    }
}

impl AddAssign<&Histogram> for Histogram {
    fn add_assign(&mut self, rhs: &Histogram) {
        self.merge_from(rhs);
    }
}

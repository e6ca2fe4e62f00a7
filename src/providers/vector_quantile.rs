//! Exact per-edge quantiles over the stored affinity samples.

use log::trace;

use super::{AffinitySink, EdgeStatistic, StatisticsProvider};
use crate::graph::{EdgeId, EdgeMap, RegionGraphView};

/// Keeps every affinity sample of each edge and reports an exact quantile.
///
/// The unbinned counterpart of
/// [`HistogramQuantileProvider`](super::HistogramQuantileProvider): memory
/// grows with the number of samples, and quantiles are exact instead of
/// bin-resolution estimates. The same rank convention applies: the
/// `p`-th percentile of `n` samples is the sample at sorted position
/// `min(floor(p * n / 100), n - 1)`.
///
/// With `init_with_max`, an edge keeps only samples at least as high as the
/// best seen so far: a sample strictly above the smallest retained sample
/// replaces all of them, and any other sample is dropped. Merges always
/// concatenate.
#[derive(Debug, Clone)]
pub struct VectorQuantileProvider {
    samples: EdgeMap<Vec<f32>>,
    quantile: f32,
    init_with_max: bool,
}

impl VectorQuantileProvider {
    /// Create empty sample lists for every edge of `graph`.
    ///
    /// `quantile` is a percentage in `[0, 100]`.
    ///
    /// # Panics
    ///
    /// Panics if `quantile` is outside `[0, 100]`.
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G, quantile: f32, init_with_max: bool) -> Self {
        assert!(
            (0.0..=100.0).contains(&quantile),
            "quantile must be a percentage in [0, 100], got {quantile}"
        );
        Self {
            samples: EdgeMap::for_graph(graph),
            quantile,
            init_with_max,
        }
    }

    /// The reported percentile.
    #[inline]
    pub fn quantile(&self) -> f32 {
        self.quantile
    }

    /// Retained samples of edge `e`, in insertion order.
    #[inline]
    pub fn samples(&self, e: EdgeId) -> &[f32] {
        &self.samples[e]
    }

    /// The configured percentile of edge `e`'s samples, `0.0` if it has none.
    pub fn quantile_at(&self, e: EdgeId) -> f32 {
        let samples = &self.samples[e];
        if samples.is_empty() {
            return 0.0;
        }

        let n = samples.len();
        let pos = ((self.quantile as f64 * n as f64 / 100.0).floor() as usize).min(n - 1);

        let mut scratch = samples.clone();
        let (_, value, _) = scratch.select_nth_unstable_by(pos, f32::total_cmp);
        *value
    }
}

impl AffinitySink for VectorQuantileProvider {
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        self.samples.ensure_len(e.index() + 1);
        let samples = &mut self.samples[e];

        if self.init_with_max && !samples.is_empty() {
            let lowest = samples.iter().copied().fold(f32::INFINITY, f32::min);
            if affinity > lowest {
                samples.clear();
            } else {
                return;
            }
        }

        samples.push(affinity);
    }
}

impl StatisticsProvider for VectorQuantileProvider {
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let (src, dst) = self.samples.pair_mut(from, to);
        trace!("sample merge {from} -> {to}: {} + {} samples", src.len(), dst.len());

        let moved = std::mem::take(src);
        let changed = !moved.is_empty();
        dst.extend(moved);
        changed
    }
}

impl EdgeStatistic for VectorQuantileProvider {
    type Value = f32;

    #[inline]
    fn value_at(&self, e: EdgeId) -> f32 {
        self.quantile_at(e)
    }
}

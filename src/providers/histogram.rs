//! Per-edge affinity histograms for quantile estimation.

use log::trace;

use super::{AffinitySink, EdgeStatistic, StatisticsProvider};
use crate::config::HistogramParams;
use crate::graph::{EdgeId, EdgeMap, RegionGraphView};
use crate::histogram::{discretize, Histogram};

/// Keeps one [`Histogram`] of affinities per edge.
///
/// # Init-with-max policy
///
/// With [`HistogramParams::init_with_max`] set, an edge's histogram only
/// holds samples from its best bin so far: a sample in a bin strictly above
/// the current lowest populated bin clears the histogram before being
/// inserted, and any other sample is dropped. The first sample on an empty
/// edge is always inserted.
///
/// Merges ignore the policy and always add the retiring histogram into the
/// surviving one.
#[derive(Debug, Clone)]
pub struct HistogramQuantileProvider {
    histograms: EdgeMap<Histogram>,
    params: HistogramParams,
}

impl HistogramQuantileProvider {
    /// Create empty histograms for every edge of `graph`.
    ///
    /// # Panics
    ///
    /// Panics if `params` fail validation. Use
    /// [`HistogramParams::builder`] to catch this earlier.
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G, params: HistogramParams) -> Self {
        if let Err(err) = params.validate() {
            panic!("invalid histogram parameters: {err}");
        }

        let num_bins = params.num_bins;
        Self {
            histograms: EdgeMap::from_fn(graph.num_edges(), |_| Histogram::new(num_bins)),
            params,
        }
    }

    /// Parameters this provider was built with.
    #[inline]
    pub fn params(&self) -> &HistogramParams {
        &self.params
    }

    /// Number of bins of every edge histogram.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.params.num_bins
    }

    /// `q`-quantile (fraction in `[0, 1]`) of edge `e`'s histogram.
    ///
    /// Same as `value_at(e).quantile(q)` without copying the histogram.
    #[inline]
    pub fn quantile_at(&self, e: EdgeId, q: f32) -> f32 {
        self.histograms[e].quantile(q)
    }

    /// `p`-th percentile (`p` in `[0, 100]`) of edge `e`'s histogram.
    #[inline]
    pub fn percentile_at(&self, e: EdgeId, p: f32) -> f32 {
        self.histograms[e].percentile(p)
    }

    /// Borrow the histogram of edge `e`.
    #[inline]
    pub fn histogram(&self, e: EdgeId) -> &Histogram {
        &self.histograms[e]
    }
}

impl AffinitySink for HistogramQuantileProvider {
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        let num_bins = self.params.num_bins;
        self.histograms
            .ensure_len_with(e.index() + 1, || Histogram::new(num_bins));

        let bin = discretize(affinity, num_bins);
        let hist = &mut self.histograms[e];

        if self.params.init_with_max && !hist.is_empty() {
            if bin > hist.lowest_populated_bin() {
                hist.clear();
            } else {
                return;
            }
        }

        hist.increment(bin);
    }
}

impl StatisticsProvider for HistogramQuantileProvider {
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let (src, dst) = self.histograms.pair_mut(from, to);
        trace!("histogram merge {from} -> {to}: {} + {} samples", src.total(), dst.total());

        dst.merge_from(src);
        src.clear();
        true
    }
}

impl EdgeStatistic for HistogramQuantileProvider {
    type Value = Histogram;

    fn value_at(&self, e: EdgeId) -> Histogram {
        self.histograms[e].clone()
    }
}

//! Histogram quantile scores.

use super::{BindProviders, Constant, ScoringFunction};
use crate::graph::EdgeId;
use crate::providers::{HistogramQuantileProvider, MergeProviders};

/// Quantile of the edge's affinity histogram, with the quantile chosen per
/// edge by an inner scoring function.
///
/// The inner function `Q` returns a percentage in `[0, 100]`; it is bound
/// to the second half of the merged providers. With `Q = Constant` this is
/// a fixed percentile, see [`HistogramQuantileAffinity`].
#[derive(Debug, Clone, Copy)]
pub struct HistogramQuantileFunctionAffinity<'a, Q> {
    histograms: &'a HistogramQuantileProvider,
    quantile: Q,
}

impl<'a, G, Q> BindProviders<'a, G> for HistogramQuantileFunctionAffinity<'a, Q>
where
    G: ?Sized,
    Q: BindProviders<'a, G> + ScoringFunction<Score = f32>,
{
    type Providers = MergeProviders<&'a HistogramQuantileProvider, Q::Providers>;

    fn bind(graph: &'a G, providers: Self::Providers) -> Self {
        Self {
            histograms: providers.first(),
            quantile: Q::bind(graph, providers.second()),
        }
    }
}

impl<Q: ScoringFunction<Score = f32>> ScoringFunction for HistogramQuantileFunctionAffinity<'_, Q> {
    type Score = f32;

    #[inline]
    fn score(&self, e: EdgeId) -> f32 {
        let percent = self.quantile.score(e);
        self.histograms.percentile_at(e, percent)
    }
}

/// Fixed percentile of the edge's affinity histogram.
///
/// Bound to `merge_providers(&histograms, &ConstantProvider::new(percent))`.
pub type HistogramQuantileAffinity<'a> = HistogramQuantileFunctionAffinity<'a, Constant<'a>>;

//! Scores read directly from edge statistics.

use super::{BindProviders, ScoringFunction};
use crate::graph::EdgeId;
use crate::providers::{
    ContactAreaProvider, EdgeStatistic, MaxAffinityProvider, MaxKAffinityProvider,
    MeanAffinityProvider, MinAffinityProvider, VectorQuantileProvider,
};

/// Uses a provider's stored statistic as the score, verbatim.
#[derive(Debug)]
pub struct EdgeStatisticValue<'a, P> {
    provider: &'a P,
}

impl<P> Clone for EdgeStatisticValue<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for EdgeStatisticValue<'_, P> {}

impl<'a, G: ?Sized, P: EdgeStatistic> BindProviders<'a, G> for EdgeStatisticValue<'a, P> {
    type Providers = &'a P;

    fn bind(_graph: &'a G, provider: &'a P) -> Self {
        Self { provider }
    }
}

impl<P> ScoringFunction for EdgeStatisticValue<'_, P>
where
    P: EdgeStatistic,
    P::Value: Copy + PartialOrd,
{
    type Score = P::Value;

    #[inline]
    fn score(&self, e: EdgeId) -> P::Value {
        self.provider.value_at(e)
    }
}

/// Smallest affinity on the edge.
pub type MinAffinity<'a> = EdgeStatisticValue<'a, MinAffinityProvider>;

/// Largest affinity on the edge.
pub type MaxAffinity<'a> = EdgeStatisticValue<'a, MaxAffinityProvider>;

/// Mean affinity of the edge.
pub type MeanAffinity<'a> = EdgeStatisticValue<'a, MeanAffinityProvider>;

/// Number of affinity samples on the edge.
pub type ContactArea<'a> = EdgeStatisticValue<'a, ContactAreaProvider>;

/// Exact quantile of the edge's affinities, at the provider's percentile.
pub type QuantileAffinity<'a> = EdgeStatisticValue<'a, VectorQuantileProvider>;

/// Mean of the K largest affinities on the edge.
#[derive(Debug, Clone, Copy)]
pub struct MeanMaxKAffinity<'a> {
    provider: &'a MaxKAffinityProvider,
}

impl<'a, G: ?Sized> BindProviders<'a, G> for MeanMaxKAffinity<'a> {
    type Providers = &'a MaxKAffinityProvider;

    fn bind(_graph: &'a G, provider: &'a MaxKAffinityProvider) -> Self {
        Self { provider }
    }
}

impl ScoringFunction for MeanMaxKAffinity<'_> {
    type Score = f32;

    #[inline]
    fn score(&self, e: EdgeId) -> f32 {
        self.provider.average_at(e)
    }
}

use super::{BindProviders, ScoringFunction};
use crate::graph::EdgeId;
use crate::providers::{ConstantProvider, RandomNumberProvider};

/// Scores every edge with the provider's constant.
///
/// Mostly used as an inner function, e.g. the percentage fed to
/// [`HistogramQuantileFunctionAffinity`](super::HistogramQuantileFunctionAffinity).
#[derive(Debug, Clone, Copy)]
pub struct Constant<'a> {
    provider: &'a ConstantProvider,
}

impl<'a, G: ?Sized> BindProviders<'a, G> for Constant<'a> {
    type Providers = &'a ConstantProvider;

    fn bind(_graph: &'a G, provider: &'a ConstantProvider) -> Self {
        Self { provider }
    }
}

impl ScoringFunction for Constant<'_> {
    type Score = f32;

    #[inline]
    fn score(&self, _e: EdgeId) -> f32 {
        self.provider.value()
    }
}

/// Scores every edge with a fresh draw from a shared random source.
#[derive(Debug, Clone, Copy)]
pub struct Random<'a> {
    provider: &'a RandomNumberProvider,
}

impl<'a, G: ?Sized> BindProviders<'a, G> for Random<'a> {
    type Providers = &'a RandomNumberProvider;

    fn bind(_graph: &'a G, provider: &'a RandomNumberProvider) -> Self {
        Self { provider }
    }
}

impl ScoringFunction for Random<'_> {
    type Score = f32;

    #[inline]
    fn score(&self, _e: EdgeId) -> f32 {
        self.provider.draw()
    }
}

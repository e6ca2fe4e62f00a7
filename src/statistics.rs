//! Runtime-configured provider bundle.
//!
//! [`EdgeStatistics`] owns exactly the providers a [`ScoringSpec`] needs,
//! forwards observations and merge notifications to all of them, and
//! evaluates the selected scoring function. It is the enum-dispatch
//! counterpart of binding a scoring function statically: use it when the
//! scoring function is chosen from configuration.
//!
//! # Example
//!
//! ```
//! use region_merge::config::ScoringSpec;
//! use region_merge::graph::{EdgeId, NodeId, RegionGraph};
//! use region_merge::providers::{AffinitySink, StatisticsProvider};
//! use region_merge::statistics::EdgeStatistics;
//!
//! let mut graph = RegionGraph::new(3);
//! let a = graph.add_edge(NodeId(0), NodeId(1));
//! let b = graph.add_edge(NodeId(0), NodeId(2));
//!
//! let mut stats = EdgeStatistics::new(&graph, ScoringSpec::MaxAffinity).unwrap();
//! stats.add_affinity(a, 0.25);
//! stats.add_affinity(b, 0.75);
//!
//! // Region 2 merges into region 1: edge b collapses onto edge a.
//! stats.notify_node_merge(NodeId(2), NodeId(1));
//! stats.notify_edge_merge(b, a);
//! assert_eq!(stats.score(&graph, a), 0.75);
//! ```

use log::{debug, trace};

use crate::config::{ConfigError, ScoringSpec};
use crate::graph::{EdgeId, NodeId, RegionGraphView};
use crate::providers::{
    merge_providers, AffinitySink, ConstantProvider, ContactAreaProvider,
    HistogramQuantileProvider, MaxAffinityProvider, MaxKAffinityProvider, MeanAffinityProvider,
    MinAffinityProvider, RandomNumberProvider, RegionSizeProvider, StatisticsProvider,
    VectorQuantileProvider,
};
use crate::scoring::{
    BindProviders, Constant, ContactArea, HistogramQuantileAffinity, MaxAffinity, MaxSize,
    MeanAffinity, MeanMaxKAffinity, MinAffinity, MinSize, QuantileAffinity, Random,
    ScoringFunction,
};

/// The providers owned for one scoring function.
#[derive(Debug)]
enum Providers {
    Constant(ConstantProvider),
    RegionSize(RegionSizeProvider),
    MinAffinity(MinAffinityProvider),
    MaxAffinity(MaxAffinityProvider),
    MeanAffinity(MeanAffinityProvider),
    ContactArea(ContactAreaProvider),
    HistogramQuantile {
        histograms: HistogramQuantileProvider,
        percentile: ConstantProvider,
    },
    Quantile(VectorQuantileProvider),
    MaxK(MaxKAffinityProvider),
    Random(RandomNumberProvider),
}

/// Providers plus the scoring function selected by a [`ScoringSpec`].
#[derive(Debug)]
pub struct EdgeStatistics {
    spec: ScoringSpec,
    providers: Providers,
}

impl EdgeStatistics {
    /// Validate `spec` and create the providers it needs for `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the spec's parameters are invalid.
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G, spec: ScoringSpec) -> Result<Self, ConfigError> {
        spec.validate()?;

        let providers = match &spec {
            ScoringSpec::Constant { value } => Providers::Constant(ConstantProvider::new(*value)),
            ScoringSpec::MinSize | ScoringSpec::MaxSize => {
                Providers::RegionSize(RegionSizeProvider::new(graph))
            }
            ScoringSpec::MinAffinity => Providers::MinAffinity(MinAffinityProvider::new(graph)),
            ScoringSpec::MaxAffinity => Providers::MaxAffinity(MaxAffinityProvider::new(graph)),
            ScoringSpec::MeanAffinity => Providers::MeanAffinity(MeanAffinityProvider::new(graph)),
            ScoringSpec::ContactArea => Providers::ContactArea(ContactAreaProvider::new(graph)),
            ScoringSpec::HistogramQuantile {
                quantile,
                histogram,
            } => Providers::HistogramQuantile {
                histograms: HistogramQuantileProvider::new(graph, *histogram),
                percentile: ConstantProvider::new(*quantile),
            },
            ScoringSpec::Quantile {
                quantile,
                init_with_max,
            } => Providers::Quantile(VectorQuantileProvider::new(graph, *quantile, *init_with_max)),
            ScoringSpec::MeanMaxK { k } => Providers::MaxK(MaxKAffinityProvider::new(graph, *k)),
            ScoringSpec::Random { seed } => Providers::Random(match seed {
                Some(seed) => RandomNumberProvider::seeded(*seed),
                None => RandomNumberProvider::from_entropy(),
            }),
        };

        debug!(
            "edge statistics for '{}' over {} edges, {} regions",
            spec.name(),
            graph.num_edges(),
            graph.num_nodes()
        );

        Ok(Self { spec, providers })
    }

    /// The spec this bundle was built from.
    #[inline]
    pub fn spec(&self) -> &ScoringSpec {
        &self.spec
    }

    /// Record `count` elements in region `n`.
    ///
    /// Ignored unless the scoring function depends on region sizes.
    pub fn add_region_size(&mut self, n: NodeId, count: u64) {
        if let Providers::RegionSize(sizes) = &mut self.providers {
            sizes.add_region_size(n, count);
        }
    }

    /// Score of edge `e` under the configured scoring function.
    ///
    /// Binds the statically typed scoring function to the owned providers
    /// and evaluates it; integer scores are widened to `f64`.
    pub fn score<G: RegionGraphView + ?Sized>(&self, graph: &G, e: EdgeId) -> f64 {
        match &self.providers {
            Providers::Constant(provider) => Constant::bind(graph, provider).score(e) as f64,
            Providers::RegionSize(sizes) => match self.spec {
                ScoringSpec::MaxSize => MaxSize::bind(graph, sizes).score(e) as f64,
                _ => MinSize::bind(graph, sizes).score(e) as f64,
            },
            Providers::MinAffinity(provider) => MinAffinity::bind(graph, provider).score(e) as f64,
            Providers::MaxAffinity(provider) => MaxAffinity::bind(graph, provider).score(e) as f64,
            Providers::MeanAffinity(provider) => MeanAffinity::bind(graph, provider).score(e) as f64,
            Providers::ContactArea(provider) => ContactArea::bind(graph, provider).score(e) as f64,
            Providers::HistogramQuantile {
                histograms,
                percentile,
            } => HistogramQuantileAffinity::bind(graph, merge_providers(histograms, percentile))
                .score(e) as f64,
            Providers::Quantile(provider) => QuantileAffinity::bind(graph, provider).score(e) as f64,
            Providers::MaxK(provider) => MeanMaxKAffinity::bind(graph, provider).score(e) as f64,
            Providers::Random(provider) => Random::bind(graph, provider).score(e) as f64,
        }
    }

    fn as_provider_mut(&mut self) -> &mut dyn StatisticsProvider {
        match &mut self.providers {
            Providers::Constant(p) => p,
            Providers::RegionSize(p) => p,
            Providers::MinAffinity(p) => p,
            Providers::MaxAffinity(p) => p,
            Providers::MeanAffinity(p) => p,
            Providers::ContactArea(p) => p,
            // The percentile constant carries no merge state.
            Providers::HistogramQuantile { histograms, .. } => histograms,
            Providers::Quantile(p) => p,
            Providers::MaxK(p) => p,
            Providers::Random(p) => p,
        }
    }
}

impl AffinitySink for EdgeStatistics {
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        match &mut self.providers {
            Providers::MinAffinity(p) => p.add_affinity(e, affinity),
            Providers::MaxAffinity(p) => p.add_affinity(e, affinity),
            Providers::MeanAffinity(p) => p.add_affinity(e, affinity),
            Providers::ContactArea(p) => p.add_affinity(e, affinity),
            Providers::HistogramQuantile { histograms, .. } => histograms.add_affinity(e, affinity),
            Providers::Quantile(p) => p.add_affinity(e, affinity),
            Providers::MaxK(p) => p.add_affinity(e, affinity),
            Providers::Constant(_) | Providers::RegionSize(_) | Providers::Random(_) => {}
        }
    }
}

impl StatisticsProvider for EdgeStatistics {
    fn notify_node_merge(&mut self, from: NodeId, to: NodeId) -> bool {
        trace!("node merge {from} -> {to}");
        self.as_provider_mut().notify_node_merge(from, to)
    }

    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        trace!("edge merge {from} -> {to}");
        self.as_provider_mut().notify_edge_merge(from, to)
    }
}

//! Scoring functions turning provider state into merge priorities.
//!
//! A scoring function is bound once to a region graph and to the provider
//! handle(s) it needs, then maps edge ids to scores. It borrows everything
//! and owns nothing: because merge notifications mutate the providers, a
//! driver rebinds its scoring function after each merge. Binding only
//! copies references.
//!
//! # Available Functions
//!
//! - [`Constant`]: The same value for every edge
//! - [`MinSize`] / [`MaxSize`]: Smaller / larger incident region size
//! - [`EdgeStatisticValue`]: A provider's stored value, verbatim
//!   ([`MinAffinity`], [`MaxAffinity`], [`MeanAffinity`], [`ContactArea`],
//!   [`QuantileAffinity`])
//! - [`HistogramQuantileFunctionAffinity`]: Histogram quantile with the
//!   percentage computed by an inner scoring function
//!   ([`HistogramQuantileAffinity`] fixes it with a [`Constant`])
//! - [`MeanMaxKAffinity`]: Mean of the K largest affinities
//! - [`Random`]: Uniform random score
//!
//! # Example
//!
//! ```
//! use region_merge::config::HistogramParams;
//! use region_merge::graph::{EdgeId, NodeId, RegionGraph};
//! use region_merge::providers::{
//!     merge_providers, AffinitySink, ConstantProvider, HistogramQuantileProvider,
//! };
//! use region_merge::scoring::{BindProviders, HistogramQuantileAffinity, ScoringFunction};
//!
//! let mut graph = RegionGraph::new(2);
//! let e = graph.add_edge(NodeId(0), NodeId(1));
//!
//! let params = HistogramParams::builder().num_bins(11).init_with_max(false).build().unwrap();
//! let mut histograms = HistogramQuantileProvider::new(&graph, params);
//! for affinity in [0.0, 0.5, 1.0] {
//!     histograms.add_affinity(e, affinity);
//! }
//!
//! // Median: Constant(50) feeds the quantile lookup.
//! let percentile = ConstantProvider::new(50.0);
//! let median = HistogramQuantileAffinity::bind(&graph, merge_providers(&histograms, &percentile));
//! assert_eq!(median.score(e), 0.5);
//! ```

mod constant;
mod quantile;
mod size;
mod statistic;

pub use constant::{Constant, Random};
pub use quantile::{HistogramQuantileAffinity, HistogramQuantileFunctionAffinity};
pub use size::{MaxSize, MinSize};
pub use statistic::{
    ContactArea, EdgeStatisticValue, MaxAffinity, MeanAffinity, MeanMaxKAffinity, MinAffinity,
    QuantileAffinity,
};

use crate::graph::EdgeId;

/// Maps an edge to its merge priority.
///
/// Evaluating a score has no effect on provider state, with the single
/// exception of [`Random`] advancing its shared generator.
pub trait ScoringFunction {
    /// Score type; compared by the driver's priority queue.
    type Score: Copy + PartialOrd;

    /// Score of edge `e`. `e` must not be retired.
    fn score(&self, e: EdgeId) -> Self::Score;
}

/// Construction of a scoring function from a graph and provider handles.
///
/// `Providers` is the single handle the function needs: a provider
/// reference, or a [`MergeProviders`](crate::providers::MergeProviders)
/// when it reads several statistics.
pub trait BindProviders<'a, G: ?Sized>: Sized {
    type Providers: Copy;

    fn bind(graph: &'a G, providers: Self::Providers) -> Self;
}

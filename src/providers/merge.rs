//! Read-only composition of several providers into one handle.
//!
//! A scoring function takes exactly one providers argument. When it needs
//! more than one statistic, the providers are composed with
//! [`merge_providers`]:
//!
//! ```
//! use region_merge::config::HistogramParams;
//! use region_merge::graph::{NodeId, RegionGraph};
//! use region_merge::providers::{merge_providers, ConstantProvider, HistogramQuantileProvider};
//!
//! let mut graph = RegionGraph::new(2);
//! graph.add_edge(NodeId(0), NodeId(1));
//!
//! let histograms = HistogramQuantileProvider::new(&graph, HistogramParams::default());
//! let percentile = ConstantProvider::new(95.0);
//!
//! let merged = merge_providers(&histograms, &percentile);
//! assert_eq!(merged.second().value(), 95.0);
//! ```
//!
//! Handles are either references or other `MergeProviders`, so three or
//! more providers nest: `merge_providers(&a, merge_providers(&b, &c))`.

/// Two provider handles viewed as one.
///
/// Holds borrowed handles only; it owns nothing, copies no provider state,
/// and cannot outlive the providers it refers to.
#[derive(Debug, Clone, Copy)]
pub struct MergeProviders<A, B> {
    first: A,
    second: B,
}

/// Compose two provider handles.
#[inline]
pub fn merge_providers<A: Copy, B: Copy>(first: A, second: B) -> MergeProviders<A, B> {
    MergeProviders { first, second }
}

impl<A: Copy, B: Copy> MergeProviders<A, B> {
    /// Handle to the first provider.
    #[inline]
    pub fn first(&self) -> A {
        self.first
    }

    /// Handle to the second provider.
    #[inline]
    pub fn second(&self) -> B {
        self.second
    }
}

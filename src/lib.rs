//! region-merge: Incremental edge statistics and scoring for hierarchical
//! region merging.
//!
//! A greedy agglomeration engine repeatedly merges the two regions joined by
//! the best-scored edge of a region adjacency graph. This crate provides
//! the layer between the merge driver and the raw affinities: per-edge
//! statistics that are folded together on every merge instead of being
//! recomputed, and composable scoring functions reading them.
//!
//! # Key Types
//!
//! - [`Histogram`] - Bounded frequency counter with quantile queries
//! - [`HistogramQuantileProvider`] - Per-edge affinity histograms
//! - [`StatisticsProvider`] / [`EdgeStatistic`] / [`AffinitySink`] - Provider capabilities
//! - [`MergeProviders`] - Read-only composition of several providers
//! - [`ScoringFunction`] / [`BindProviders`] - Scoring function contract
//! - [`EdgeStatistics`] - Providers and scoring selected from a [`ScoringSpec`]
//!
//! # Merge Protocol
//!
//! When the driver merges region `from` into region `to` it calls
//! `notify_node_merge(from, to)` and then, for each edge of `from` that
//! becomes parallel to an edge of `to`, `notify_edge_merge(retired, kept)`
//! on every provider. Scoring functions borrow providers, so they are
//! rebound after each merge.

pub mod config;
pub mod graph;
pub mod histogram;
pub mod providers;
pub mod scoring;
pub mod statistics;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use config::{ConfigError, HistogramParams, ScoringSpec};
pub use graph::{Edge, EdgeId, EdgeMap, NodeId, NodeMap, RegionGraph, RegionGraphView};
pub use histogram::{discretize, Histogram};
pub use providers::{
    merge_providers, AffinitySink, EdgeStatistic, HistogramQuantileProvider, MergeProviders,
    StatisticsProvider,
};
pub use scoring::{BindProviders, ScoringFunction};
pub use statistics::EdgeStatistics;

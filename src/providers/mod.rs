//! Incremental per-edge and per-region statistics.
//!
//! A statistics provider owns one dense map of values over the edge (or
//! node) id space of a region graph. It is fed raw observations before
//! agglomeration starts and is told about every merge so it can fold the
//! retiring id's state into the surviving one. Nothing is ever recomputed
//! from raw samples.
//!
//! # Capability Traits
//!
//! - [`StatisticsProvider`]: Merge hooks, required of every provider
//! - [`EdgeStatistic`]: Value lookup by edge id
//! - [`AffinitySink`]: Accepts raw `(edge, affinity)` observations
//!
//! Tuples of providers implement [`StatisticsProvider`] and [`AffinitySink`]
//! by fanning each call out to every element, so a driver can notify all of
//! its providers with one call.
//!
//! # Available Providers
//!
//! - [`HistogramQuantileProvider`]: Binned affinity distribution per edge
//! - [`VectorQuantileProvider`]: Exact quantile over the stored samples
//! - [`MinAffinityProvider`], [`MaxAffinityProvider`], [`MeanAffinityProvider`]
//! - [`ContactAreaProvider`]: Number of affinity samples per edge
//! - [`MaxKAffinityProvider`]: The K largest affinities per edge
//! - [`RegionSizeProvider`]: Size of each region
//! - [`ConstantProvider`], [`RandomNumberProvider`]: Edge-independent values
//!
//! # Merge Ordering
//!
//! For one region merge the driver calls `notify_node_merge` once, then
//! `notify_edge_merge` once for every pair of parallel edges that collapse,
//! on every provider, before the next merge begins.

mod affinity;
mod constant;
mod histogram;
mod max_k;
mod merge;
mod random;
mod region_size;
mod vector_quantile;

pub use affinity::{ContactAreaProvider, MaxAffinityProvider, MeanAffinityProvider, MinAffinityProvider};
pub use constant::ConstantProvider;
pub use histogram::HistogramQuantileProvider;
pub use max_k::{MaxKAffinityProvider, MaxKValues};
pub use merge::{merge_providers, MergeProviders};
pub use random::RandomNumberProvider;
pub use region_size::RegionSizeProvider;
pub use vector_quantile::VectorQuantileProvider;

use crate::graph::{EdgeId, NodeId};

// =============================================================================
// Capability traits
// =============================================================================

/// Merge notifications for a statistics provider.
///
/// Both hooks default to doing nothing, for providers that carry no state
/// for the corresponding id space.
pub trait StatisticsProvider {
    /// Region `from` was merged into region `to`.
    ///
    /// Returns `true` if the statistic of `to` may have changed.
    fn notify_node_merge(&mut self, from: NodeId, to: NodeId) -> bool {
        let _ = (from, to);
        false
    }

    /// Edge `from` collapsed onto edge `to` and is retired.
    ///
    /// The provider folds `from`'s accumulated state into `to` and resets
    /// `from`. Returns `true` if the statistic of `to` may have changed.
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let _ = (from, to);
        false
    }
}

/// A provider whose statistic can be read per edge.
pub trait EdgeStatistic {
    /// The statistic stored for each edge.
    type Value;

    /// Snapshot of the statistic for edge `e`.
    ///
    /// Returned by value so callers cannot mutate provider state.
    fn value_at(&self, e: EdgeId) -> Self::Value;
}

/// A provider fed with raw affinity observations.
pub trait AffinitySink {
    /// Record one affinity sample in `[0, 1]` observed on edge `e`.
    fn add_affinity(&mut self, e: EdgeId, affinity: f32);
}

impl<P: StatisticsProvider + ?Sized> StatisticsProvider for &mut P {
    #[inline]
    fn notify_node_merge(&mut self, from: NodeId, to: NodeId) -> bool {
        (**self).notify_node_merge(from, to)
    }

    #[inline]
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        (**self).notify_edge_merge(from, to)
    }
}

impl<P: AffinitySink + ?Sized> AffinitySink for &mut P {
    #[inline]
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        (**self).add_affinity(e, affinity)
    }
}

impl<P: EdgeStatistic + ?Sized> EdgeStatistic for &P {
    type Value = P::Value;

    #[inline]
    fn value_at(&self, e: EdgeId) -> Self::Value {
        (**self).value_at(e)
    }
}

// Every element is notified; no short-circuiting.
macro_rules! impl_provider_tuple {
    ($($name:ident),+) => {
        impl<$($name: StatisticsProvider),+> StatisticsProvider for ($($name,)+) {
            #[allow(non_snake_case)]
            fn notify_node_merge(&mut self, from: NodeId, to: NodeId) -> bool {
                let ($($name,)+) = self;
                false $(| $name.notify_node_merge(from, to))+
            }

            #[allow(non_snake_case)]
            fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
                let ($($name,)+) = self;
                false $(| $name.notify_edge_merge(from, to))+
            }
        }

        impl<$($name: AffinitySink),+> AffinitySink for ($($name,)+) {
            #[allow(non_snake_case)]
            fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
                let ($($name,)+) = self;
                $($name.add_affinity(e, affinity);)+
            }
        }
    };
}

impl_provider_tuple!(A);
impl_provider_tuple!(A, B);
impl_provider_tuple!(A, B, C);
impl_provider_tuple!(A, B, C, D);
impl_provider_tuple!(A, B, C, D, E);
impl_provider_tuple!(A, B, C, D, E, F);

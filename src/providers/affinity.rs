//! Scalar affinity statistics: min, max, mean and contact area.

use super::{AffinitySink, EdgeStatistic, StatisticsProvider};
use crate::graph::{EdgeId, EdgeMap, RegionGraphView};

// =============================================================================
// MinAffinityProvider
// =============================================================================

/// Smallest affinity observed on each edge.
///
/// An edge without samples reports `0.0`.
#[derive(Debug, Clone)]
pub struct MinAffinityProvider {
    min: EdgeMap<f32>,
}

impl MinAffinityProvider {
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G) -> Self {
        Self {
            min: EdgeMap::from_fn(graph.num_edges(), |_| f32::INFINITY),
        }
    }
}

impl AffinitySink for MinAffinityProvider {
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        self.min.ensure_len_with(e.index() + 1, || f32::INFINITY);
        let slot = &mut self.min[e];
        *slot = slot.min(affinity);
    }
}

impl StatisticsProvider for MinAffinityProvider {
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let (src, dst) = self.min.pair_mut(from, to);
        let changed = *src < *dst;
        *dst = dst.min(*src);
        *src = f32::INFINITY;
        changed
    }
}

impl EdgeStatistic for MinAffinityProvider {
    type Value = f32;

    #[inline]
    fn value_at(&self, e: EdgeId) -> f32 {
        let min = self.min[e];
        if min.is_finite() {
            min
        } else {
            0.0
        }
    }
}

// =============================================================================
// MaxAffinityProvider
// =============================================================================

/// Largest affinity observed on each edge.
///
/// An edge without samples reports `0.0`.
#[derive(Debug, Clone)]
pub struct MaxAffinityProvider {
    max: EdgeMap<f32>,
}

impl MaxAffinityProvider {
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G) -> Self {
        Self {
            max: EdgeMap::from_fn(graph.num_edges(), |_| f32::NEG_INFINITY),
        }
    }
}

impl AffinitySink for MaxAffinityProvider {
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        self.max.ensure_len_with(e.index() + 1, || f32::NEG_INFINITY);
        let slot = &mut self.max[e];
        *slot = slot.max(affinity);
    }
}

impl StatisticsProvider for MaxAffinityProvider {
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let (src, dst) = self.max.pair_mut(from, to);
        let changed = *src > *dst;
        *dst = dst.max(*src);
        *src = f32::NEG_INFINITY;
        changed
    }
}

impl EdgeStatistic for MaxAffinityProvider {
    type Value = f32;

    #[inline]
    fn value_at(&self, e: EdgeId) -> f32 {
        let max = self.max[e];
        if max.is_finite() {
            max
        } else {
            0.0
        }
    }
}

// =============================================================================
// MeanAffinityProvider
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
struct RunningMean {
    sum: f64,
    count: u64,
}

/// Mean affinity of each edge.
///
/// Tracks `(sum, count)` so merges stay exact; the mean of an edge
/// without samples is `0.0`.
#[derive(Debug, Clone)]
pub struct MeanAffinityProvider {
    means: EdgeMap<RunningMean>,
}

impl MeanAffinityProvider {
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G) -> Self {
        Self {
            means: EdgeMap::for_graph(graph),
        }
    }

    /// Number of samples folded into edge `e`.
    #[inline]
    pub fn count(&self, e: EdgeId) -> u64 {
        self.means[e].count
    }
}

impl AffinitySink for MeanAffinityProvider {
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        self.means.ensure_len(e.index() + 1);
        let mean = &mut self.means[e];
        mean.sum += affinity as f64;
        mean.count += 1;
    }
}

impl StatisticsProvider for MeanAffinityProvider {
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let (src, dst) = self.means.pair_mut(from, to);
        let changed = src.count > 0;
        dst.sum += src.sum;
        dst.count += src.count;
        *src = RunningMean::default();
        changed
    }
}

impl EdgeStatistic for MeanAffinityProvider {
    type Value = f32;

    #[inline]
    fn value_at(&self, e: EdgeId) -> f32 {
        let mean = self.means[e];
        if mean.count == 0 {
            0.0
        } else {
            (mean.sum / mean.count as f64) as f32
        }
    }
}

// =============================================================================
// ContactAreaProvider
// =============================================================================

/// Number of affinity samples observed on each edge.
///
/// With one affinity per pair of touching elements this is the size of the
/// contact surface between the two regions.
#[derive(Debug, Clone)]
pub struct ContactAreaProvider {
    area: EdgeMap<u64>,
}

impl ContactAreaProvider {
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G) -> Self {
        Self {
            area: EdgeMap::for_graph(graph),
        }
    }
}

impl AffinitySink for ContactAreaProvider {
    #[inline]
    fn add_affinity(&mut self, e: EdgeId, _affinity: f32) {
        self.area.ensure_len(e.index() + 1);
        self.area[e] += 1;
    }
}

impl StatisticsProvider for ContactAreaProvider {
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let (src, dst) = self.area.pair_mut(from, to);
        let changed = *src > 0;
        *dst += *src;
        *src = 0;
        changed
    }
}

impl EdgeStatistic for ContactAreaProvider {
    type Value = u64;

    #[inline]
    fn value_at(&self, e: EdgeId) -> u64 {
        self.area[e]
    }
}

//! The K largest affinities per edge.

use super::{AffinitySink, EdgeStatistic, StatisticsProvider};
use crate::graph::{EdgeId, EdgeMap, RegionGraphView};

/// Up to K affinities, sorted in descending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaxKValues {
    values: Vec<f32>,
}

impl MaxKValues {
    /// The retained affinities, largest first.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the retained affinities, `0.0` if there are none.
    pub fn average(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.values.iter().map(|&v| v as f64).sum();
        (sum / self.values.len() as f64) as f32
    }

    fn insert(&mut self, value: f32, k: usize) {
        if self.values.len() == k && self.values.last().is_some_and(|&min| value <= min) {
            return;
        }
        let pos = self.values.partition_point(|&v| v >= value);
        self.values.insert(pos, value);
        self.values.truncate(k);
    }
}

/// Keeps the `k` largest affinities observed on each edge.
///
/// A merge keeps the `k` largest of the union of both edges' values.
#[derive(Debug, Clone)]
pub struct MaxKAffinityProvider {
    top: EdgeMap<MaxKValues>,
    k: usize,
}

impl MaxKAffinityProvider {
    /// # Panics
    ///
    /// Panics if `k == 0`.
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G, k: usize) -> Self {
        assert!(k > 0, "k must be at least 1");
        Self {
            top: EdgeMap::for_graph(graph),
            k,
        }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Mean of the retained affinities of edge `e`.
    #[inline]
    pub fn average_at(&self, e: EdgeId) -> f32 {
        self.top[e].average()
    }
}

impl AffinitySink for MaxKAffinityProvider {
    fn add_affinity(&mut self, e: EdgeId, affinity: f32) {
        self.top.ensure_len(e.index() + 1);
        self.top[e].insert(affinity, self.k);
    }
}

impl StatisticsProvider for MaxKAffinityProvider {
    fn notify_edge_merge(&mut self, from: EdgeId, to: EdgeId) -> bool {
        let k = self.k;
        let (src, dst) = self.top.pair_mut(from, to);

        let moved = std::mem::take(src);
        let changed = !moved.is_empty();
        for value in moved.values {
            dst.insert(value, k);
        }
        changed
    }
}

impl EdgeStatistic for MaxKAffinityProvider {
    type Value = MaxKValues;

    fn value_at(&self, e: EdgeId) -> MaxKValues {
        self.top[e].clone()
    }
}

//! Region sizes.

use log::trace;

use super::StatisticsProvider;
use crate::graph::{NodeId, NodeMap, RegionGraphView};

/// Size (element count) of each region.
///
/// Node-indexed: scoring functions look up the sizes of an edge's two
/// incident regions through the graph.
#[derive(Debug, Clone)]
pub struct RegionSizeProvider {
    sizes: NodeMap<u64>,
}

impl RegionSizeProvider {
    /// Create zero sizes for every region of `graph`.
    pub fn new<G: RegionGraphView + ?Sized>(graph: &G) -> Self {
        Self {
            sizes: NodeMap::for_graph(graph),
        }
    }

    /// Create from known initial sizes, indexed by node id.
    pub fn from_sizes(sizes: &[u64]) -> Self {
        Self {
            sizes: NodeMap::from_fn(sizes.len(), |i| sizes[i]),
        }
    }

    /// Add `count` elements to region `n`.
    pub fn add_region_size(&mut self, n: NodeId, count: u64) {
        self.sizes.ensure_len(n.index() + 1);
        self.sizes[n] += count;
    }

    /// Current size of region `n`.
    #[inline]
    pub fn size(&self, n: NodeId) -> u64 {
        self.sizes[n]
    }
}

impl StatisticsProvider for RegionSizeProvider {
    fn notify_node_merge(&mut self, from: NodeId, to: NodeId) -> bool {
        let (src, dst) = self.sizes.pair_mut(from, to);
        trace!("region size merge {from} -> {to}: {src} + {dst}");

        *dst += *src;
        *src = 0;
        true
    }
}

//! Region-size based scores.

use super::{BindProviders, ScoringFunction};
use crate::graph::{EdgeId, RegionGraphView};
use crate::providers::RegionSizeProvider;

/// Size of the smaller of the edge's two regions.
#[derive(Debug)]
pub struct MinSize<'a, G: ?Sized> {
    graph: &'a G,
    sizes: &'a RegionSizeProvider,
}

impl<'a, G: RegionGraphView + ?Sized> BindProviders<'a, G> for MinSize<'a, G> {
    type Providers = &'a RegionSizeProvider;

    fn bind(graph: &'a G, sizes: &'a RegionSizeProvider) -> Self {
        Self { graph, sizes }
    }
}

impl<G: RegionGraphView + ?Sized> ScoringFunction for MinSize<'_, G> {
    type Score = u64;

    #[inline]
    fn score(&self, e: EdgeId) -> u64 {
        let edge = self.graph.edge(e);
        self.sizes.size(edge.u).min(self.sizes.size(edge.v))
    }
}

/// Size of the larger of the edge's two regions.
#[derive(Debug)]
pub struct MaxSize<'a, G: ?Sized> {
    graph: &'a G,
    sizes: &'a RegionSizeProvider,
}

impl<'a, G: RegionGraphView + ?Sized> BindProviders<'a, G> for MaxSize<'a, G> {
    type Providers = &'a RegionSizeProvider;

    fn bind(graph: &'a G, sizes: &'a RegionSizeProvider) -> Self {
        Self { graph, sizes }
    }
}

impl<G: RegionGraphView + ?Sized> ScoringFunction for MaxSize<'_, G> {
    type Score = u64;

    #[inline]
    fn score(&self, e: EdgeId) -> u64 {
        let edge = self.graph.edge(e);
        self.sizes.size(edge.u).max(self.sizes.size(edge.v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeId, RegionGraph};
    use crate::providers::StatisticsProvider;

    #[test]
    fn test_min_max_of_incident_sizes() {
        let mut graph = RegionGraph::new(2);
        let e = graph.add_edge(NodeId(0), NodeId(1));
        let sizes = RegionSizeProvider::from_sizes(&[3, 7]);

        assert_eq!(MinSize::bind(&graph, &sizes).score(e), 3);
        assert_eq!(MaxSize::bind(&graph, &sizes).score(e), 7);
    }

    #[test]
    fn test_sizes_follow_merges() {
        let mut graph = RegionGraph::new(3);
        graph.add_edge(NodeId(0), NodeId(1));
        let e12 = graph.add_edge(NodeId(1), NodeId(2));
        let mut sizes = RegionSizeProvider::from_sizes(&[2, 5, 4]);

        // Merge region 0 into region 1; e12 now separates {0, 1} from 2.
        sizes.notify_node_merge(NodeId(0), NodeId(1));

        let min = MinSize::bind(&graph, &sizes);
        let max = MaxSize::bind(&graph, &sizes);
        assert_eq!(min.score(e12), 4);
        assert_eq!(max.score(e12), 7);
    }
}

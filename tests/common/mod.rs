//! Minimal greedy merge driver for integration tests.
//!
//! The crate leaves the merge loop to its callers; these helpers play that
//! role so tests can exercise providers and scoring functions through real
//! topology changes.

#![allow(dead_code)]

use region_merge::graph::{Edge, EdgeId, NodeId, RegionGraph, RegionGraphView};
use region_merge::providers::StatisticsProvider;
use region_merge::statistics::EdgeStatistics;

/// One executed merge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeStep {
    pub from: NodeId,
    pub to: NodeId,
    pub edge: EdgeId,
    pub score: f64,
}

/// Merge the two regions of edge `e`, folding `e.v` into `e.u`.
///
/// Notifies `providers` of the node merge, then of every edge of the
/// retiring region that collapses onto an existing edge of the surviving
/// region. Returns the surviving region.
pub fn merge_edge<P: StatisticsProvider + ?Sized>(
    graph: &mut RegionGraph,
    e: EdgeId,
    providers: &mut P,
) -> NodeId {
    let Edge { u: to, v: from } = graph.edge(e);

    providers.notify_node_merge(from, to);
    graph.retire_edge(e);

    for f in graph.incident_edges(from).to_vec() {
        let neighbor = graph.other_node(f, from);
        match graph.find_edge(to, neighbor) {
            Some(kept) => {
                providers.notify_edge_merge(f, kept);
                graph.retire_edge(f);
            }
            None => graph.move_edge(f, from, to),
        }
    }

    to
}

/// Edges still attached to some region, in id order.
pub fn live_edges(graph: &RegionGraph) -> Vec<EdgeId> {
    let mut edges: Vec<EdgeId> = (0..graph.num_nodes() as u32)
        .flat_map(|n| graph.incident_edges(NodeId(n)).iter().copied())
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Repeatedly merge the lowest-scored live edge, `max_merges` times at most.
///
/// Every live edge is rescored before each merge; ties go to the lower
/// edge id.
pub fn merge_lowest(
    graph: &mut RegionGraph,
    stats: &mut EdgeStatistics,
    max_merges: usize,
) -> Vec<MergeStep> {
    let mut history = Vec::new();

    for _ in 0..max_merges {
        let best = live_edges(graph)
            .into_iter()
            .map(|e| (e, stats.score(&*graph, e)))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        let Some((edge, score)) = best else {
            break;
        };

        let Edge { u, v } = graph.edge(edge);
        merge_edge(graph, edge, stats);
        history.push(MergeStep {
            from: v,
            to: u,
            edge,
            score,
        });
    }

    history
}

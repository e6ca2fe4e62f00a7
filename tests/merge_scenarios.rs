//! Merge scenarios driven end to end.
//!
//! A small greedy driver in `common` plays the agglomeration engine: it picks
//! the lowest-scored edge, merges its regions and notifies the providers.
//! These tests check the statistics seen by scoring functions after real
//! topology changes.

mod common;

use rstest::rstest;

use common::{live_edges, merge_edge, merge_lowest};
use region_merge::assert_approx_eq;
use region_merge::config::{HistogramParams, ScoringSpec};
use region_merge::graph::{EdgeId, NodeId, RegionGraph, RegionGraphView};
use region_merge::providers::{
    merge_providers, AffinitySink, ConstantProvider, HistogramQuantileProvider,
    MaxAffinityProvider, RegionSizeProvider,
};
use region_merge::scoring::{
    BindProviders, HistogramQuantileAffinity, MaxAffinity, MinSize, ScoringFunction,
};
use region_merge::statistics::EdgeStatistics;
use region_merge::testing::{affinity_for_bin, chain_graph, grid_graph};

fn params(num_bins: usize, init_with_max: bool) -> HistogramParams {
    HistogramParams::builder()
        .num_bins(num_bins)
        .init_with_max(init_with_max)
        .build()
        .expect("valid histogram params")
}

/// 2x2 grid with distinct affinities:
///
/// ```text
/// 0 --e0(0.8)-- 1
/// |             |
/// e1(0.1)     e2(0.2)
/// |             |
/// 2 --e3(0.6)-- 3
/// ```
fn square() -> (RegionGraph, [(EdgeId, f32); 4]) {
    let (graph, edges) = grid_graph(2, 2);
    let affinities = [0.8, 0.1, 0.2, 0.6];
    let mut out = [(EdgeId(0), 0.0); 4];
    for (slot, ((e, _), affinity)) in out.iter_mut().zip(edges.into_iter().zip(affinities)) {
        *slot = (e, affinity);
    }
    (graph, out)
}

#[test]
fn init_with_max_keeps_only_the_best_sample() {
    let mut graph = RegionGraph::new(2);
    let e0 = graph.add_edge(NodeId(0), NodeId(1));
    let mut histograms = HistogramQuantileProvider::new(&graph, params(4, true));

    for affinity in [0.1, 0.9, 0.95] {
        histograms.add_affinity(e0, affinity);
    }

    assert_eq!(histograms.histogram(e0).counts(), &[0, 0, 0, 1]);
    assert_eq!(histograms.histogram(e0).total(), 1);
    assert_eq!(histograms.quantile_at(e0, 0.5), 1.0);
}

#[test]
fn json_configured_median_follows_merges() {
    let spec: ScoringSpec = serde_json::from_str(
        r#"{"kind": "histogram_quantile", "quantile": 50.0,
            "histogram": {"num_bins": 4, "init_with_max": true}}"#,
    )
    .expect("valid spec");

    let (mut graph, edges) = square();
    let mut stats = EdgeStatistics::new(&graph, spec).expect("valid spec");
    for &(e, affinity) in &edges {
        stats.add_affinity(e, affinity);
    }
    // e0 sees 0.8 (bin 3), e3 sees 0.6 (bin 2); e1 and e2 land in bin 0.
    assert_approx_eq!(stats.score(&graph, EdgeId(0)), 1.0, 1e-6);
    assert_approx_eq!(stats.score(&graph, EdgeId(3)), 2.0 / 3.0, 1e-6);

    let history = merge_lowest(&mut graph, &mut stats, 2);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].edge, EdgeId(1));
    assert_eq!(history[1].edge, EdgeId(2));

    // e3 collapsed onto e0 despite init-with-max: bins {2: 1, 3: 1}, and
    // the median rank of two samples is the second.
    assert_eq!(live_edges(&graph), vec![EdgeId(0)]);
    assert_approx_eq!(stats.score(&graph, EdgeId(0)), 1.0, 1e-6);
    assert_approx_eq!(stats.score(&graph, EdgeId(3)), 0.0, 1e-6);
}

#[test]
fn json_configured_exact_quantile_keeps_merged_samples() {
    let spec: ScoringSpec =
        serde_json::from_str(r#"{"kind": "quantile", "quantile": 0.0}"#).expect("valid spec");
    assert_eq!(spec, ScoringSpec::quantile(0.0, true));

    let (mut graph, edges) = square();
    let mut stats = EdgeStatistics::new(&graph, spec).expect("valid spec");
    for &(e, affinity) in &edges {
        stats.add_affinity(e, affinity);
        // Dropped by init-with-max.
        stats.add_affinity(e, affinity / 2.0);
    }

    let history = merge_lowest(&mut graph, &mut stats, 2);
    assert_approx_eq!(history[0].score, 0.1, 1e-6);
    assert_approx_eq!(history[1].score, 0.2, 1e-6);

    // e3 (0.6) collapsed onto e0 (0.8); the minimum is the merged sample.
    assert_eq!(live_edges(&graph), vec![EdgeId(0)]);
    assert_approx_eq!(stats.score(&graph, EdgeId(0)), 0.6, 1e-6);
}

#[test]
fn greedy_mean_affinity_on_square() {
    let (mut graph, edges) = square();
    let mut stats = EdgeStatistics::new(&graph, ScoringSpec::MeanAffinity).unwrap();
    for &(e, affinity) in &edges {
        stats.add_affinity(e, affinity);
    }

    let history = merge_lowest(&mut graph, &mut stats, usize::MAX);

    let merged: Vec<EdgeId> = history.iter().map(|step| step.edge).collect();
    assert_eq!(merged, vec![EdgeId(1), EdgeId(2), EdgeId(0)]);
    assert_approx_eq!(history[0].score, 0.1, 1e-6);
    assert_approx_eq!(history[1].score, 0.2, 1e-6);
    // Mean of e0 and the collapsed e3.
    assert_approx_eq!(history[2].score, 0.7, 1e-6);

    assert_eq!(history[0].from, NodeId(2));
    assert_eq!(history[0].to, NodeId(0));
    assert!(live_edges(&graph).is_empty());
}

#[rstest]
#[case(2, 2)]
#[case(3, 3)]
#[case(5, 2)]
fn greedy_merging_joins_every_region(#[case] width: usize, #[case] height: usize) {
    let (mut graph, edges) = grid_graph(width, height);
    let mut stats = EdgeStatistics::new(&graph, ScoringSpec::ContactArea).unwrap();
    for &(e, horizontal) in &edges {
        // Horizontal boundaries are longer.
        let samples = if horizontal { 3 } else { 1 };
        for _ in 0..samples {
            stats.add_affinity(e, 0.5);
        }
    }

    let history = merge_lowest(&mut graph, &mut stats, usize::MAX);

    assert_eq!(history.len(), width * height - 1);
    assert!(live_edges(&graph).is_empty());
    // Vertical boundaries go first while they are the smallest.
    if height > 1 {
        assert_eq!(history[0].score, 1.0);
    }
}

#[test]
fn constant_scores_survive_merges() {
    let mut graph = chain_graph(5);
    let mut stats = EdgeStatistics::new(&graph, ScoringSpec::constant(0.25)).unwrap();

    let history = merge_lowest(&mut graph, &mut stats, usize::MAX);

    assert_eq!(history.len(), 4);
    assert!(history.iter().all(|step| step.score == 0.25));
    // Ties resolve by edge id, so the chain folds left to right.
    let merged: Vec<EdgeId> = history.iter().map(|step| step.edge).collect();
    assert_eq!(merged, vec![EdgeId(0), EdgeId(1), EdgeId(2), EdgeId(3)]);
}

#[test]
fn seeded_random_scores_are_reproducible() {
    let run = || {
        let (mut graph, _) = grid_graph(3, 3);
        let mut stats = EdgeStatistics::new(&graph, ScoringSpec::random(42)).unwrap();
        merge_lowest(&mut graph, &mut stats, usize::MAX)
    };

    let first = run();
    assert_eq!(first.len(), 8);
    assert_eq!(first, run());
    assert!(first.iter().all(|step| (0.0..1.0).contains(&step.score)));
}

#[test]
fn region_sizes_accumulate_along_a_chain() {
    let mut graph = chain_graph(4);
    let mut stats = EdgeStatistics::new(&graph, ScoringSpec::MinSize).unwrap();
    for (n, size) in [5, 1, 2, 9].into_iter().enumerate() {
        stats.add_region_size(NodeId(n as u32), size);
    }

    // min sizes: e0 = 1, e1 = 1, e2 = 2
    let history = merge_lowest(&mut graph, &mut stats, usize::MAX);

    let scores: Vec<f64> = history.iter().map(|step| step.score).collect();
    // e0 merges 1 into 0 (size 6); e1 now joins 0 and 2: min(6, 2) = 2;
    // then the last edge joins 0 (size 8) and 3: min(8, 9) = 8.
    assert_eq!(scores, vec![1.0, 2.0, 8.0]);
}

#[test]
fn tuple_providers_feed_static_scoring_functions() {
    let (mut graph, edges) = square();
    let mut sizes = RegionSizeProvider::from_sizes(&[4, 3, 2, 1]);
    let mut maxima = MaxAffinityProvider::new(&graph);
    let mut histograms = HistogramQuantileProvider::new(&graph, params(10, false));
    let percentile = ConstantProvider::new(100.0);

    for &(e, affinity) in &edges {
        (&mut maxima, &mut histograms).add_affinity(e, affinity);
    }
    histograms.add_affinity(EdgeId(0), affinity_for_bin(1, 10));

    // Merge 2 into 0 (e3 moves to 0-3), then 3 into 1 (e3 collapses onto e0).
    for e in [EdgeId(1), EdgeId(2)] {
        merge_edge(&mut graph, e, &mut (&mut sizes, &mut maxima, &mut histograms));
    }
    assert_eq!(live_edges(&graph), vec![EdgeId(0)]);
    assert_eq!(graph.edge(EdgeId(0)).u, NodeId(0));

    let min_size = MinSize::bind(&graph, &sizes);
    let max_affinity = MaxAffinity::bind(&graph, &maxima);
    let top = HistogramQuantileAffinity::bind(&graph, merge_providers(&histograms, &percentile));

    assert_eq!(min_size.score(EdgeId(0)), 4);
    assert_eq!(max_affinity.score(EdgeId(0)), 0.8);
    assert_eq!(top.score(EdgeId(0)), 8.0 / 9.0);
    assert_eq!(histograms.histogram(EdgeId(0)).total(), 3);
    assert!(histograms.histogram(EdgeId(3)).is_empty());
}

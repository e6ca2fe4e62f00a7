//! Testing utilities for region-merge.
//!
//! Assertion helpers and small graph fixtures shared by unit tests,
//! integration tests and benchmarks.
//!
//! ```ignore
//! use region_merge::testing::{chain_graph, affinity_for_bin, DEFAULT_TOLERANCE};
//! use region_merge::assert_approx_eq;
//! ```

use approx::AbsDiffEq;

use crate::graph::{EdgeId, NodeId, RegionGraph};

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for floating point score comparisons.
pub const DEFAULT_TOLERANCE: f32 = 1e-6;

// =============================================================================
// Floating Point Assertions
// =============================================================================

/// Assert that two scores agree within a tolerance.
///
/// The tolerance defaults to [`DEFAULT_TOLERANCE`] for `f32` scores; pass
/// one explicitly for `f64` scores.
///
/// # Examples
///
/// ```
/// # use region_merge::assert_approx_eq;
/// assert_approx_eq!(0.5f32, 0.5000001f32);
/// assert_approx_eq!(0.7f64, 0.70000001f64, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::testing::DEFAULT_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right, tolerance) = ($left, $right, $tolerance);
        assert!(
            $crate::testing::within_tolerance(left, right, tolerance),
            "scores differ: {left:?} vs {right:?} (tolerance {tolerance:?})"
        );
    }};
}

/// Absolute-difference comparison backing [`assert_approx_eq!`].
#[doc(hidden)]
pub fn within_tolerance<T: AbsDiffEq>(left: T, right: T, tolerance: T::Epsilon) -> bool {
    left.abs_diff_eq(&right, tolerance)
}

/// Assert that per-edge scores match expected values element-wise.
///
/// # Panics
///
/// Panics if lengths differ or any score differs by more than `tolerance`.
pub fn assert_scores_approx_eq(actual: &[f32], expected: &[f32], tolerance: f32, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            within_tolerance(*a, *e, tolerance),
            "{context}: edge {i} scored {a}, expected {e} (tolerance {tolerance})"
        );
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Affinity at the center of `bin` for a histogram with `num_bins` bins.
#[inline]
pub fn affinity_for_bin(bin: usize, num_bins: usize) -> f32 {
    (bin as f32 + 0.5) / num_bins as f32
}

/// Path graph `0 - 1 - ... - (num_nodes - 1)`; edge `i` joins nodes `i` and `i + 1`.
pub fn chain_graph(num_nodes: usize) -> RegionGraph {
    let mut graph = RegionGraph::new(num_nodes);
    for i in 1..num_nodes {
        graph.add_edge(NodeId(i as u32 - 1), NodeId(i as u32));
    }
    graph
}

/// 4-connected grid graph of `width × height` regions, row-major node ids.
///
/// Returns the graph and, for each edge, whether it is horizontal.
pub fn grid_graph(width: usize, height: usize) -> (RegionGraph, Vec<(EdgeId, bool)>) {
    let mut graph = RegionGraph::new(width * height);
    let mut edges = Vec::new();
    let node = |x: usize, y: usize| NodeId((y * width + x) as u32);

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((graph.add_edge(node(x, y), node(x + 1, y)), true));
            }
            if y + 1 < height {
                edges.push((graph.add_edge(node(x, y), node(x, y + 1)), false));
            }
        }
    }
    (graph, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RegionGraphView;
    use crate::histogram::discretize;

    #[test]
    fn test_affinity_for_bin_round_trips() {
        for bins in [1, 4, 10, 256] {
            for bin in 0..bins {
                assert_eq!(discretize(affinity_for_bin(bin, bins), bins), bin);
            }
        }
    }

    #[test]
    fn test_fixture_shapes() {
        let chain = chain_graph(4);
        assert_eq!(chain.num_edges(), 3);

        let (grid, edges) = grid_graph(3, 2);
        assert_eq!(grid.num_nodes(), 6);
        // 2 horizontal per row × 2 rows + 3 vertical
        assert_eq!(edges.len(), 7);
        assert_eq!(edges.iter().filter(|(_, horizontal)| *horizontal).count(), 4);
    }

    #[test]
    fn test_assert_approx_eq_accepts_both_precisions() {
        assert_approx_eq!(1.0f32 / 3.0, 0.333_333_34);
        assert_approx_eq!(0.1f64 + 0.2, 0.3, 1e-12);
    }

    #[test]
    #[should_panic(expected = "scores differ")]
    fn test_assert_approx_eq_rejects_distant_scores() {
        assert_approx_eq!(0.5f32, 0.6f32);
    }

    #[test]
    fn test_assert_scores_approx_eq_passes_within_tolerance() {
        assert_scores_approx_eq(&[0.5, 1.0], &[0.5000001, 1.0], DEFAULT_TOLERANCE, "scores");
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_assert_scores_approx_eq_length_mismatch() {
        assert_scores_approx_eq(&[0.5], &[0.5, 1.0], DEFAULT_TOLERANCE, "scores");
    }
}

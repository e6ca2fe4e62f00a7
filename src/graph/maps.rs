//! Dense maps parallel to the edge and node id spaces.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use super::{EdgeId, NodeId, RegionGraphView};

/// Id types usable as dense map keys.
pub trait DenseId: Copy {
    fn index(self) -> usize;
}

impl DenseId for EdgeId {
    #[inline]
    fn index(self) -> usize {
        EdgeId::index(self)
    }
}

impl DenseId for NodeId {
    #[inline]
    fn index(self) -> usize {
        NodeId::index(self)
    }
}

/// Arena storage with one `T` per id.
///
/// Entries are never removed. Retiring an id means resetting its entry to
/// the default value.
#[derive(Debug, Clone)]
pub struct DenseMap<I, T> {
    values: Vec<T>,
    _id: PhantomData<fn(I)>,
}

/// One value per edge id.
pub type EdgeMap<T> = DenseMap<EdgeId, T>;

/// One value per node id.
pub type NodeMap<T> = DenseMap<NodeId, T>;

impl<I: DenseId, T> DenseMap<I, T> {
    /// Build a map of `len` entries from a factory.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            values: (0..len).map(f).collect(),
            _id: PhantomData,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grow to at least `len` entries using `f` for new slots.
    pub fn ensure_len_with(&mut self, len: usize, f: impl FnMut() -> T) {
        if self.values.len() < len {
            self.values.resize_with(len, f);
        }
    }

    /// Mutable access to two distinct entries at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either id is out of range.
    pub fn pair_mut(&mut self, a: I, b: I) -> (&mut T, &mut T) {
        let (ia, ib) = (a.index(), b.index());
        assert!(ia != ib, "pair_mut requires distinct ids, got {ia} twice");

        if ia < ib {
            let (lo, hi) = self.values.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.values.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        }
    }

    /// Iterate over all entries in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// All entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<I: DenseId, T: Default> DenseMap<I, T> {
    /// Create a map with `len` default entries.
    pub fn new(len: usize) -> Self {
        Self::from_fn(len, |_| T::default())
    }

    /// Grow to at least `len` entries, filling with defaults.
    pub fn ensure_len(&mut self, len: usize) {
        self.ensure_len_with(len, T::default);
    }

    /// Reset the entry for `id` to its default value.
    #[inline]
    pub fn reset(&mut self, id: I) {
        self.values[id.index()] = T::default();
    }
}

impl<T: Default> EdgeMap<T> {
    /// Create a map covering every edge of `graph`.
    pub fn for_graph<G: RegionGraphView + ?Sized>(graph: &G) -> Self {
        Self::new(graph.num_edges())
    }
}

impl<T: Default> NodeMap<T> {
    /// Create a map covering every node of `graph`.
    pub fn for_graph<G: RegionGraphView + ?Sized>(graph: &G) -> Self {
        Self::new(graph.num_nodes())
    }
}

impl<I: DenseId, T> Default for DenseMap<I, T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            _id: PhantomData,
        }
    }
}

impl<I: DenseId, T> Index<I> for DenseMap<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, id: I) -> &T {
        &self.values[id.index()]
    }
}

impl<I: DenseId, T> IndexMut<I> for DenseMap<I, T> {
    #[inline]
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.values[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RegionGraph;

    #[test]
    fn test_for_graph_matches_id_space() {
        let mut graph = RegionGraph::new(3);
        graph.add_edge(NodeId(0), NodeId(1));

        let edges: EdgeMap<u32> = EdgeMap::for_graph(&graph);
        let nodes: NodeMap<u32> = NodeMap::for_graph(&graph);
        assert_eq!(edges.len(), 1);
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut map: EdgeMap<u32> = EdgeMap::from_fn(4, |i| i as u32);

        let (a, b) = map.pair_mut(EdgeId(3), EdgeId(1));
        assert_eq!((*a, *b), (3, 1));
        *a += 10;
        *b += 20;

        let (a, b) = map.pair_mut(EdgeId(1), EdgeId(3));
        assert_eq!((*a, *b), (21, 13));
    }

    #[test]
    #[should_panic(expected = "distinct ids")]
    fn test_pair_mut_same_id_panics() {
        let mut map: EdgeMap<u32> = EdgeMap::new(2);
        let _ = map.pair_mut(EdgeId(1), EdgeId(1));
    }

    #[test]
    fn test_ensure_len_and_reset() {
        let mut map: NodeMap<u64> = NodeMap::new(1);
        map[NodeId(0)] = 5;
        map.ensure_len(3);
        assert_eq!(map.as_slice(), &[5, 0, 0]);

        map.ensure_len(2);
        assert_eq!(map.len(), 3);

        map.reset(NodeId(0));
        assert_eq!(map[NodeId(0)], 0);
    }
}

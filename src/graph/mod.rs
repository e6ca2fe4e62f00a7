//! Region adjacency graph and dense id-indexed storage.
//!
//! The statistics layer only needs a narrow view of the region graph: the
//! two regions incident to an edge, and the size of the edge and node id
//! spaces. [`RegionGraphView`] captures exactly that. [`RegionGraph`] is a
//! minimal dense implementation used by the crate's own tests and by
//! drivers that do not bring their own graph.
//!
//! # Key Types
//!
//! - [`EdgeId`] / [`NodeId`]: Dense integer handles
//! - [`Edge`]: The two incident regions of an edge
//! - [`EdgeMap`] / [`NodeMap`]: Arena-style storage parallel to the id spaces

mod maps;

pub use maps::{DenseId, DenseMap, EdgeMap, NodeMap};

use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifies an edge of the region graph.
///
/// Edge ids are dense and never reused while a graph lives. An edge that was
/// folded into another during a merge is *retired*: its id stays valid as an
/// index but must not be scored again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Create a new edge id.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this edge in dense storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({})", self.0)
    }
}

impl From<u32> for EdgeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifies a region (node) of the region graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node id.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this node in dense storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The two regions incident to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
}

impl Edge {
    /// Create an edge between `u` and `v`.
    #[inline]
    pub fn new(u: NodeId, v: NodeId) -> Self {
        Self { u, v }
    }

    /// Returns the endpoint that is not `n`.
    #[inline]
    pub fn other(&self, n: NodeId) -> NodeId {
        debug_assert!(n == self.u || n == self.v, "{n} is not incident");
        if n == self.u {
            self.v
        } else {
            self.u
        }
    }
}

// ============================================================================
// RegionGraphView
// ============================================================================

/// Read-only topology lookups needed by scoring functions and providers.
pub trait RegionGraphView {
    /// Incident regions of edge `e`.
    fn edge(&self, e: EdgeId) -> Edge;

    /// Number of edge ids allocated so far (including retired ones).
    fn num_edges(&self) -> usize;

    /// Number of node ids allocated so far.
    fn num_nodes(&self) -> usize;
}

impl<G: RegionGraphView + ?Sized> RegionGraphView for &G {
    #[inline]
    fn edge(&self, e: EdgeId) -> Edge {
        (**self).edge(e)
    }

    #[inline]
    fn num_edges(&self) -> usize {
        (**self).num_edges()
    }

    #[inline]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }
}

// ============================================================================
// RegionGraph
// ============================================================================

/// Dense region adjacency graph.
///
/// Nodes and edges are appended and never removed. Merge bookkeeping
/// (which edges are retired) belongs to the merge driver; this type only
/// records the topology it was given, plus per-node incidence lists so a
/// driver can find the edges that collapse when two regions merge.
#[derive(Debug, Clone, Default)]
pub struct RegionGraph {
    edges: Vec<Edge>,
    incident: Vec<Vec<EdgeId>>,
}

impl RegionGraph {
    /// Create a graph with `num_nodes` isolated regions.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            edges: Vec::new(),
            incident: vec![Vec::new(); num_nodes],
        }
    }

    /// Append a region and return its id.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.incident.len() as u32);
        self.incident.push(Vec::new());
        id
    }

    /// Append an edge between `u` and `v` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint does not exist or if `u == v`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> EdgeId {
        assert!(u != v, "self-loop on {u}");
        assert!(
            u.index() < self.incident.len() && v.index() < self.incident.len(),
            "edge ({u}, {v}) references unknown node"
        );

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge::new(u, v));
        self.incident[u.index()].push(id);
        self.incident[v.index()].push(id);
        id
    }

    /// Find an edge between `u` and `v`, if one exists.
    pub fn find_edge(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        self.incident.get(u.index())?.iter().copied().find(|&e| {
            let edge = self.edges[e.index()];
            (edge.u == u && edge.v == v) || (edge.u == v && edge.v == u)
        })
    }

    /// Edges incident to region `n`, in insertion order.
    #[inline]
    pub fn incident_edges(&self, n: NodeId) -> &[EdgeId] {
        &self.incident[n.index()]
    }

    /// The endpoint of `e` opposite to `n`.
    #[inline]
    pub fn other_node(&self, e: EdgeId, n: NodeId) -> NodeId {
        self.edges[e.index()].other(n)
    }

    /// Re-attach the `from` end of edge `e` to region `to`.
    ///
    /// Used when `from` is merged into `to` and `e` has no parallel edge at
    /// `to`.
    pub fn move_edge(&mut self, e: EdgeId, from: NodeId, to: NodeId) {
        let edge = &mut self.edges[e.index()];
        if edge.u == from {
            edge.u = to;
        } else {
            debug_assert_eq!(edge.v, from, "{e} is not incident to {from}");
            edge.v = to;
        }
        assert!(edge.u != edge.v, "moving {e} onto {to} creates a self-loop");

        self.incident[from.index()].retain(|&x| x != e);
        self.incident[to.index()].push(e);
    }

    /// Detach edge `e` from both regions' incidence lists.
    ///
    /// The edge keeps its id and endpoints but is no longer found by
    /// [`find_edge`](Self::find_edge) or [`incident_edges`](Self::incident_edges).
    pub fn retire_edge(&mut self, e: EdgeId) {
        let Edge { u, v } = self.edges[e.index()];
        self.incident[u.index()].retain(|&x| x != e);
        self.incident[v.index()].retain(|&x| x != e);
    }
}

impl RegionGraphView for RegionGraph {
    #[inline]
    fn edge(&self, e: EdgeId) -> Edge {
        self.edges[e.index()]
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn num_nodes(&self) -> usize {
        self.incident.len()
    }
}

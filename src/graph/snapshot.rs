//! The built graph: an immutable snapshot of nodes, edges and directedness.

use crate::graph::entity::{GraphView, Node};

/// A graph produced by a builder.
///
/// Holds handles, not payloads: the same node or edge may appear in any number
/// of graphs. Edge endpoints are not required to be members of [`Graph::nodes`];
/// use induction or the `ClosedEndpoints` policy when that matters.
pub struct Graph<N: Node> {
    pub(crate) nodes: Vec<N>,
    pub(crate) edges: Vec<N::Edge>,
    pub(crate) directed: bool,
}

impl<N: Node> Graph<N> {
    pub(crate) fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            directed: true,
        }
    }

    /// Nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[N::Edge] {
        &self.edges
    }

    /// Graphs are directed unless the builder said otherwise.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of node entries.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edge entries.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has neither nodes nor edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Consumes the graph, returning its node and edge collections.
    pub fn into_parts(self) -> (Vec<N>, Vec<N::Edge>) {
        (self.nodes, self.edges)
    }
}

impl<N: Node> GraphView for Graph<N> {
    type Node = N;

    #[inline]
    fn nodes(&self) -> &[N] {
        &self.nodes
    }

    #[inline]
    fn edges(&self) -> &[N::Edge] {
        &self.edges
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<N: Node> Clone for Graph<N> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            directed: self.directed,
        }
    }
}

impl<N> core::fmt::Debug for Graph<N>
where
    N: Node + core::fmt::Debug,
    N::Edge: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("directed", &self.directed)
            .finish()
    }
}

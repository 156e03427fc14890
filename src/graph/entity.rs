//! Capability traits every graph algorithm in this crate is written against.
//!
//! Algorithms never construct nodes or edges; they only walk the handles a
//! host hands them. Any type can take part as long as it can list its
//! outgoing edges and behaves as a stable hash key.

use core::hash::Hash;

/// A graph vertex.
///
/// Nodes are used as keys in visited sets and in-degree tables, so `Eq` and
/// `Hash` must stay stable for as long as the node is reachable from a graph.
/// `Clone` is expected to be cheap: implementations are handles, not payloads.
pub trait Node: Clone + Eq + Hash {
    /// Edge type connecting nodes of this type.
    type Edge: Edge<Node = Self>;

    /// Outgoing edges of this node.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Nodes directly reachable through this node's outgoing edges.
    ///
    /// The order must be deterministic for a given node state; traversals
    /// visit neighbours in exactly this order.
    fn adjacent_nodes(&self) -> Vec<Self> {
        self.edges().iter().map(Edge::end).collect()
    }
}

/// A directed edge: `start` is the source, `end` the destination.
pub trait Edge: Clone + Eq + Hash {
    /// Node type at either end of the edge.
    type Node: Node<Edge = Self>;

    /// Source node.
    fn start(&self) -> Self::Node;

    /// Destination node.
    fn end(&self) -> Self::Node;

    /// Returns `true` if the edge starts and ends at the same node.
    fn is_self_loop(&self) -> bool {
        self.start() == self.end()
    }
}

/// Read-only view over a node collection and an edge collection.
pub trait GraphView {
    /// Node type stored by the graph.
    type Node: Node;

    /// Nodes in insertion order.
    fn nodes(&self) -> &[Self::Node];

    /// Edges in insertion order.
    fn edges(&self) -> &[<Self::Node as Node>::Edge];

    /// Whether edges are to be read as directed.
    fn is_directed(&self) -> bool;
}

impl<G: GraphView + ?Sized> GraphView for &G {
    type Node = G::Node;

    #[inline]
    fn nodes(&self) -> &[Self::Node] {
        (**self).nodes()
    }

    #[inline]
    fn edges(&self) -> &[<Self::Node as Node>::Edge] {
        (**self).edges()
    }

    #[inline]
    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }
}

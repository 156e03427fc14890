//! Incremental graph construction.
//!
//! Builders are consumed and returned by every step, so a graph is described
//! as one left-to-right chain that ends in [`GraphBuilder::build`]:
//!
//! ```rust
//! use kahngraph::{Builder, GraphBuilder, NodeArena};
//!
//! let arena = NodeArena::new();
//! let a = arena.add_node("a");
//! let b = arena.add_node("b");
//! arena.add_edge(&a, &b).unwrap();
//!
//! let graph = Builder::new()
//!     .add_node(a)
//!     .add_node(b)
//!     .induce_edges()
//!     .build()
//!     .unwrap();
//! assert_eq!(graph.edge_count(), 1);
//! ```

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::entity::{Edge, Node};
use crate::graph::snapshot::Graph;

/// Chained construction surface shared by the plain builder and the policy
/// builders that wrap it.
pub trait GraphBuilder<N: Node>: Sized {
    /// Appends a node.
    fn add_node(self, node: N) -> Self;

    /// Appends an edge.
    fn add_edge(self, edge: N::Edge) -> Self;

    /// Replaces the node collection.
    fn set_nodes<I: IntoIterator<Item = N>>(self, nodes: I) -> Self;

    /// Replaces the edge collection.
    fn set_edges<I: IntoIterator<Item = N::Edge>>(self, edges: I) -> Self;

    /// Replaces the edge collection with the outgoing edges of every current
    /// node, concatenated in node order. The node collection is left alone.
    fn induce_edges(self) -> Self;

    /// Replaces the node collection with the distinct endpoints of the current
    /// edges. The edge collection is left alone.
    fn induce_nodes(self) -> Self;

    /// Sets whether the resulting graph is directed.
    fn directed(self, directed: bool) -> Self;

    /// Finalizes the graph.
    fn build(self) -> Result<Graph<N>>;
}

/// The unconditional builder. [`GraphBuilder::build`] never fails here.
pub struct Builder<N: Node> {
    graph: Graph<N>,
}

impl<N: Node> Builder<N> {
    /// Starts an empty, directed graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::empty(),
        }
    }

    /// Starts from the nodes, edges and directedness of an existing graph.
    pub fn from_graph(graph: Graph<N>) -> Self {
        Self { graph }
    }

    /// Nodes accumulated so far.
    pub fn nodes(&self) -> &[N] {
        &self.graph.nodes
    }

    /// Edges accumulated so far.
    pub fn edges(&self) -> &[N::Edge] {
        &self.graph.edges
    }
}

impl<N: Node> Default for Builder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> GraphBuilder<N> for Builder<N> {
    fn add_node(mut self, node: N) -> Self {
        self.graph.nodes.push(node);
        self
    }

    fn add_edge(mut self, edge: N::Edge) -> Self {
        self.graph.edges.push(edge);
        self
    }

    fn set_nodes<I: IntoIterator<Item = N>>(mut self, nodes: I) -> Self {
        self.graph.nodes = nodes.into_iter().collect();
        self
    }

    fn set_edges<I: IntoIterator<Item = N::Edge>>(mut self, edges: I) -> Self {
        self.graph.edges = edges.into_iter().collect();
        self
    }

    fn induce_edges(self) -> Self {
        let edges: Vec<N::Edge> = self.graph.nodes.iter().flat_map(Node::edges).collect();
        graph_trace!(
            "induced {} edge(s) from {} node(s)",
            edges.len(),
            self.graph.nodes.len()
        );
        self.set_edges(edges)
    }

    fn induce_nodes(self) -> Self {
        // First-seen order keeps the result reproducible for a given edge order.
        let mut seen = HashSet::with_capacity(self.graph.edges.len() * 2);
        let mut nodes = Vec::new();
        for edge in &self.graph.edges {
            for endpoint in [edge.start(), edge.end()] {
                if seen.insert(endpoint.clone()) {
                    nodes.push(endpoint);
                }
            }
        }
        graph_trace!(
            "induced {} node(s) from {} edge(s)",
            nodes.len(),
            self.graph.edges.len()
        );
        self.set_nodes(nodes)
    }

    fn directed(mut self, directed: bool) -> Self {
        self.graph.directed = directed;
        self
    }

    fn build(self) -> Result<Graph<N>> {
        graph_debug!(
            "built graph: {} node(s), {} edge(s), directed={}",
            self.graph.nodes.len(),
            self.graph.edges.len(),
            self.graph.directed
        );
        Ok(self.graph)
    }
}

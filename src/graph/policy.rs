//! Validating builders.
//!
//! A [`PolicyBuilder`] accumulates exactly like [`Builder`] and runs a
//! [`BuildPolicy`] over the finished graph before handing it out. Policies
//! compose as tuples and are checked left to right; the first failure wins.

use std::collections::HashSet;

use crate::error::{BuildViolation, GraphError, Result};
use crate::graph::builder::{Builder, GraphBuilder};
use crate::graph::entity::{Edge, Node};
use crate::graph::snapshot::Graph;

/// A structural rule a graph must satisfy to be built.
pub trait BuildPolicy<N: Node> {
    /// Checks a freshly built graph.
    fn check(&self, graph: &Graph<N>) -> Result<()>;
}

impl<N: Node, P: BuildPolicy<N> + ?Sized> BuildPolicy<N> for &P {
    fn check(&self, graph: &Graph<N>) -> Result<()> {
        (**self).check(graph)
    }
}

impl<N: Node, A: BuildPolicy<N>, B: BuildPolicy<N>> BuildPolicy<N> for (A, B) {
    fn check(&self, graph: &Graph<N>) -> Result<()> {
        self.0.check(graph)?;
        self.1.check(graph)
    }
}

impl<N: Node, A: BuildPolicy<N>, B: BuildPolicy<N>, C: BuildPolicy<N>> BuildPolicy<N> for (A, B, C) {
    fn check(&self, graph: &Graph<N>) -> Result<()> {
        self.0.check(graph)?;
        self.1.check(graph)?;
        self.2.check(graph)
    }
}

/// Rejects edges whose start and end are the same node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelfLoops;

impl<N: Node> BuildPolicy<N> for NoSelfLoops {
    fn check(&self, graph: &Graph<N>) -> Result<()> {
        if graph.edges().iter().any(Edge::is_self_loop) {
            return Err(GraphError::Build(BuildViolation::SelfLoop));
        }
        Ok(())
    }
}

/// Rejects more than one edge per ordered `(start, end)` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParallelEdges;

impl<N: Node> BuildPolicy<N> for NoParallelEdges {
    fn check(&self, graph: &Graph<N>) -> Result<()> {
        let mut pairs = HashSet::with_capacity(graph.edge_count());
        for edge in graph.edges() {
            if !pairs.insert((edge.start(), edge.end())) {
                return Err(GraphError::Build(BuildViolation::ParallelEdge));
            }
        }
        Ok(())
    }
}

/// Requires every edge endpoint to be listed among the graph's nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedEndpoints;

impl<N: Node> BuildPolicy<N> for ClosedEndpoints {
    fn check(&self, graph: &Graph<N>) -> Result<()> {
        let nodes: HashSet<&N> = graph.nodes().iter().collect();
        let dangling = graph
            .edges()
            .iter()
            .any(|edge| !nodes.contains(&edge.start()) || !nodes.contains(&edge.end()));
        if dangling {
            return Err(GraphError::Build(BuildViolation::DanglingEndpoint));
        }
        Ok(())
    }
}

/// A [`Builder`] that validates the result with a [`BuildPolicy`].
pub struct PolicyBuilder<N: Node, P> {
    builder: Builder<N>,
    policy: P,
}

impl<N: Node, P: BuildPolicy<N>> PolicyBuilder<N, P> {
    /// Starts an empty, directed graph validated by `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self {
            builder: Builder::new(),
            policy,
        }
    }

    /// Starts from an existing graph, validated by `policy` on build.
    pub fn from_graph(graph: Graph<N>, policy: P) -> Self {
        Self {
            builder: Builder::from_graph(graph),
            policy,
        }
    }

    /// The policy applied on build.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The wrapped builder.
    pub fn inner(&self) -> &Builder<N> {
        &self.builder
    }

    #[inline]
    fn map(self, f: impl FnOnce(Builder<N>) -> Builder<N>) -> Self {
        Self {
            builder: f(self.builder),
            policy: self.policy,
        }
    }
}

impl<N: Node, P: BuildPolicy<N> + Default> PolicyBuilder<N, P> {
    /// Starts an empty, directed graph validated by `P::default()`.
    pub fn new() -> Self {
        Self::with_policy(P::default())
    }
}

impl<N: Node, P: BuildPolicy<N> + Default> Default for PolicyBuilder<N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node, P: BuildPolicy<N>> GraphBuilder<N> for PolicyBuilder<N, P> {
    fn add_node(self, node: N) -> Self {
        self.map(|b| b.add_node(node))
    }

    fn add_edge(self, edge: N::Edge) -> Self {
        self.map(|b| b.add_edge(edge))
    }

    fn set_nodes<I: IntoIterator<Item = N>>(self, nodes: I) -> Self {
        self.map(|b| b.set_nodes(nodes))
    }

    fn set_edges<I: IntoIterator<Item = N::Edge>>(self, edges: I) -> Self {
        self.map(|b| b.set_edges(edges))
    }

    fn induce_edges(self) -> Self {
        self.map(|b| b.induce_edges())
    }

    fn induce_nodes(self) -> Self {
        self.map(|b| b.induce_nodes())
    }

    fn directed(self, directed: bool) -> Self {
        self.map(|b| b.directed(directed))
    }

    fn build(self) -> Result<Graph<N>> {
        let graph = self.builder.build()?;
        if let Err(err) = self.policy.check(&graph) {
            graph_debug!("build rejected: {}", err);
            return Err(err);
        }
        Ok(graph)
    }
}

//! Directed acyclic graphs.
//!
//! A DAG here is an ordinary [`Graph`] that passed the [`Acyclic`] policy on
//! build. There is no separate DAG type: once built, it is read and walked
//! like any other graph.

use crate::error::{GraphError, Result};
use crate::graph::entity::Node;
use crate::graph::policy::{BuildPolicy, PolicyBuilder};
use crate::graph::snapshot::Graph;
use crate::graph::topo::kahn_sort;

/// Requires a directed graph without cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Acyclic;

impl<N: Node> BuildPolicy<N> for Acyclic {
    /// Same verdict as [`is_acyclic`](crate::graph::topo::is_acyclic), but a
    /// cycle is reported as [`GraphError::Cycle`] with the unresolved edge count.
    fn check(&self, graph: &Graph<N>) -> Result<()> {
        if !graph.is_directed() {
            return Err(GraphError::InvalidInput("graph must be directed"));
        }
        kahn_sort(graph).map(drop)
    }
}

/// Builder whose [`build`](crate::GraphBuilder::build) fails unless the graph
/// is a directed acyclic graph.
///
/// ```rust
/// use kahngraph::{DagBuilder, GraphBuilder, GraphError, NodeArena};
///
/// let arena = NodeArena::new();
/// let a = arena.add_node("a");
/// let b = arena.add_node("b");
/// arena.add_edge(&a, &b).unwrap();
/// arena.add_edge(&b, &a).unwrap();
///
/// let err = DagBuilder::new().set_nodes([a, b]).induce_edges().build().unwrap_err();
/// assert!(matches!(err, GraphError::Cycle { .. }));
/// ```
pub type DagBuilder<N> = PolicyBuilder<N, Acyclic>;

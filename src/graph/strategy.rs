//! Proptest strategies producing arena-backed graphs.
//!
//! Strategies generate a plain [`GraphSpec`] (node count plus index pairs) so
//! shrinking works on ordinary data; [`GraphSpec::materialize`] turns a spec
//! into arena handles and a built [`Graph`].

use proptest::collection::vec;
use proptest::prelude::*;

use crate::graph::arena::{ArenaNode, NodeArena};
use crate::graph::builder::{Builder, GraphBuilder};
use crate::graph::snapshot::Graph;

/// A graph description by node index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSpec {
    /// Number of nodes, labelled `0..node_count`.
    pub node_count: usize,
    /// Directed edges as `(start, end)` node indices.
    pub edges: Vec<(usize, usize)>,
}

/// Arena handles for a materialized [`GraphSpec`].
pub struct Materialized {
    /// The arena owning every node and edge.
    pub arena: NodeArena<usize>,
    /// Nodes by index.
    pub nodes: Vec<ArenaNode<usize>>,
    /// All nodes with their induced edges.
    pub graph: Graph<ArenaNode<usize>>,
}

impl GraphSpec {
    /// Allocates the described nodes and edges in a fresh arena.
    ///
    /// # Panics
    /// Panics if an edge refers to a node index `>= node_count`.
    pub fn materialize(&self) -> Materialized {
        let arena = NodeArena::with_capacity(self.node_count);
        let nodes: Vec<_> = (0..self.node_count).map(|i| arena.add_node(i)).collect();
        for &(u, v) in &self.edges {
            arena.add_edge(&nodes[u], &nodes[v]).expect("same arena");
        }
        let graph = Builder::new()
            .set_nodes(nodes.iter().cloned())
            .induce_edges()
            .build()
            .expect("plain builder never fails");
        Materialized { arena, nodes, graph }
    }
}

/// Arbitrary directed graphs with `1..=max_nodes` nodes and up to `max_edges`
/// edges. Self-loops and parallel edges may occur.
pub fn graphs(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = GraphSpec> {
    (1..=max_nodes.max(1)).prop_flat_map(move |n| {
        vec((0..n, 0..n), 0..=max_edges).prop_map(move |edges| GraphSpec {
            node_count: n,
            edges,
        })
    })
}

/// Directed acyclic graphs: every edge goes from a lower to a higher index.
pub fn dags(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = GraphSpec> {
    graphs(max_nodes, max_edges).prop_map(|spec| GraphSpec {
        node_count: spec.node_count,
        edges: spec
            .edges
            .into_iter()
            .filter(|(u, v)| u != v)
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::entity::{Edge, Node};
    use crate::graph::topo::{is_acyclic, kahn_sort};

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn materialize_panics_on_out_of_range_edge() {
        let spec = GraphSpec {
            node_count: 2,
            edges: vec![(0, 2)],
        };
        let _ = spec.materialize();
    }

    #[test]
    fn materialize_keeps_self_loops_and_parallel_edges() {
        let spec = GraphSpec {
            node_count: 2,
            edges: vec![(0, 1), (0, 1), (1, 1)],
        };
        let m = spec.materialize();
        assert_eq!(m.graph.edge_count(), 3);
        assert_eq!(m.nodes[0].adjacent_nodes().len(), 2);
    }

    proptest! {
        #[test]
        fn generated_dags_sort_with_edges_forward(spec in dags(24, 64)) {
            let m = spec.materialize();
            prop_assert!(is_acyclic(&m.graph).unwrap());

            let order = kahn_sort(&m.graph).unwrap();
            prop_assert_eq!(order.len(), spec.node_count);

            let mut position = vec![0; spec.node_count];
            for (pos, node) in order.iter().enumerate() {
                position[node.label()] = pos;
            }
            for edge in m.graph.edges() {
                prop_assert!(position[edge.start().label()] < position[edge.end().label()]);
            }
        }

        #[test]
        fn materialize_keeps_every_edge(spec in graphs(16, 40)) {
            let m = spec.materialize();
            prop_assert_eq!(m.arena.edge_count(), spec.edges.len());
            prop_assert_eq!(m.graph.edge_count(), spec.edges.len());
            prop_assert_eq!(m.nodes.len(), spec.node_count);
        }
    }
}

//! Topological ordering (Kahn's algorithm) and acyclicity checks.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `kahn_sort` | \(O(n + m)\) |
//! | `is_acyclic` | \(O(n + m)\) |
//! | `nodes_without_incoming_edge` | \(O(n + m)\) |

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::entity::{Edge, GraphView, Node};

/// Nodes from `nodes`, in order, that are not the end of any edge in `edges`.
pub fn nodes_without_incoming_edge<N: Node>(nodes: &[N], edges: &[N::Edge]) -> Vec<N> {
    let with: HashSet<N> = edges.iter().map(Edge::end).collect();
    nodes.iter().filter(|node| !with.contains(*node)).cloned().collect()
}

/// Computes a topological order of `graph` with Kahn's algorithm.
///
/// Sources are taken from [`GraphView::nodes`] in order and the frontier is
/// drained first-in first-out, so a fixed input yields a fixed order. Edges are
/// discharged through each dequeued node's own [`Node::edges`]; an edge listed
/// by a node but absent from [`GraphView::edges`] is ignored.
///
/// # Errors
/// [`GraphError::Cycle`] if some edges can never be discharged.
pub fn kahn_sort<G: GraphView>(graph: &G) -> Result<Vec<G::Node>> {
    let mut remaining: HashSet<<G::Node as Node>::Edge> = graph.edges().iter().cloned().collect();

    let mut indegree: HashMap<G::Node, usize> = HashMap::with_capacity(graph.nodes().len());
    for edge in &remaining {
        *indegree.entry(edge.end()).or_insert(0) += 1;
    }

    let mut frontier: VecDeque<G::Node> = graph
        .nodes()
        .iter()
        .filter(|node| !indegree.contains_key(*node))
        .cloned()
        .collect();

    let mut order = Vec::with_capacity(graph.nodes().len());
    while let Some(node) = frontier.pop_front() {
        for edge in node.edges() {
            if !remaining.remove(&edge) {
                continue;
            }
            let end = edge.end();
            if let Some(count) = indegree.get_mut(&end) {
                *count -= 1;
                if *count == 0 {
                    frontier.push_back(end);
                }
            }
        }
        order.push(node);
    }

    if !remaining.is_empty() {
        graph_debug!(
            "kahn sort stopped after {} node(s); {} edge(s) remain on a cycle",
            order.len(),
            remaining.len()
        );
        return Err(GraphError::Cycle {
            remaining_edges: remaining.len(),
        });
    }

    graph_trace!("kahn sort ordered {} node(s)", order.len());
    Ok(order)
}

/// Returns whether a directed graph is free of cycles.
///
/// A cycle is an answer here, not an error.
///
/// # Errors
/// [`GraphError::InvalidInput`] if the graph is not directed.
pub fn is_acyclic<G: GraphView>(graph: &G) -> Result<bool> {
    if !graph.is_directed() {
        return Err(GraphError::InvalidInput("graph must be directed"));
    }
    match kahn_sort(graph) {
        Ok(_) => Ok(true),
        Err(GraphError::Cycle { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}

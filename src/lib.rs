//! # `kahngraph` - Embeddable Directed Graph Engine
//!
//! A small graph toolkit that works over *your* node and edge types. The
//! engine only asks for a handful of capabilities (list outgoing edges, name
//! an edge's endpoints, hash and compare) and provides the rest: incremental
//! builders, Kahn topological sorting, acyclicity checks and visitor-driven
//! traversals.
//!
//! ## Key Features
//!
//! - **Capability traits**: [`Node`], [`Edge`] and [`GraphView`] are the only
//!   surface the algorithms touch
//! - **Chained builders**: accumulate nodes and edges, or derive one from the
//!   other with `induce_edges` / `induce_nodes`
//! - **Build policies**: [`DagBuilder`] rejects cycles; self-loop, parallel-edge
//!   and dangling-endpoint policies compose as tuples
//! - **Linear-time ordering**: [`kahn_sort`] and [`is_acyclic`] run in \(O(n + m)\)
//! - **Early-exit traversals**: [`dfs`] and [`bfs`] stop as soon as the visitor
//!   finds what it is looking for; [`Dfs`] and [`Bfs`] expose the same walks
//!   as iterators
//!
//! ## Architecture
//!
//! Nodes and edges are handles owned by the host. A [`Graph`] is a snapshot of
//! two ordered handle collections plus a directedness flag; it is produced by
//! a builder and never mutated by the engine. [`NodeArena`] provides
//! ready-made handles (indices into a shared arena) for hosts that have no
//! node type of their own.
//!
//! ## Example
//!
//! ```rust
//! use kahngraph::{dfs, is_acyclic, kahn_sort, ArenaNode, Builder, GraphBuilder, NodeArena};
//!
//! let arena = NodeArena::new();
//! let shirt = arena.add_node("shirt");
//! let tie = arena.add_node("tie");
//! let jacket = arena.add_node("jacket");
//! arena.add_edge(&shirt, &tie).unwrap();
//! arena.add_edge(&tie, &jacket).unwrap();
//!
//! let graph = Builder::new()
//!     .set_nodes([jacket.clone(), tie.clone(), shirt.clone()])
//!     .induce_edges()
//!     .build()
//!     .unwrap();
//!
//! assert!(is_acyclic(&graph).unwrap());
//! assert_eq!(kahn_sort(&graph).unwrap(), vec![shirt.clone(), tie, jacket]);
//!
//! let found = dfs(shirt, |node: &ArenaNode<&str>| node.label() == "jacket");
//! assert!(found);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for builds, induction, sorting
//!   and policy rejections
//! - `proptest`: expose [`graph::strategy`] for property tests over arena graphs

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

pub use error::{BuildViolation, GraphError, Result};
pub use graph::{
    bfs, bfs_with, dfs, dfs_with, is_acyclic, kahn_sort, nodes_without_incoming_edge, Acyclic,
    ArenaEdge, ArenaNode, Bfs, BuildPolicy, Builder, ClosedEndpoints, DagBuilder, Dfs, Edge, Graph,
    GraphBuilder, GraphView, NoParallelEdges, NoSelfLoops, Node, NodeArena, PolicyBuilder, Visitor,
};

// Compile-time assertions for handle layout.
const _: () = {
    use core::mem;

    // Arena handles are an index plus one shared pointer.
    assert!(mem::size_of::<ArenaNode<u64>>() == 2 * mem::size_of::<usize>());
    assert!(mem::size_of::<ArenaEdge<u64>>() == 2 * mem::size_of::<usize>());
};

//! Directed graphs over caller-supplied node and edge types.
//!
//! - `entity`: the capability traits algorithms are written against
//! - `snapshot`: the built [`Graph`]
//! - `arena`: ready-made arena-backed nodes and edges
//! - `builder`, `policy`, `dag`: incremental construction and validation
//! - `topo`, `traversal`: Kahn ordering, acyclicity, DFS and BFS

pub mod arena;
pub mod builder;
pub mod dag;
pub mod entity;
pub mod policy;
pub mod snapshot;
pub mod topo;
pub mod traversal;

#[cfg(any(test, feature = "proptest"))]
pub mod strategy;

pub use arena::{ArenaEdge, ArenaNode, NodeArena};
pub use builder::{Builder, GraphBuilder};
pub use dag::{Acyclic, DagBuilder};
pub use entity::{Edge, GraphView, Node};
pub use policy::{BuildPolicy, ClosedEndpoints, NoParallelEdges, NoSelfLoops, PolicyBuilder};
pub use snapshot::Graph;
pub use topo::{is_acyclic, kahn_sort, nodes_without_incoming_edge};
pub use traversal::{bfs, bfs_with, dfs, dfs_with, Bfs, Dfs, Visitor};

//! Arena-backed reference entities.
//!
//! Nodes and edges are indices into a shared arena; adjacency lives in a side
//! table keyed by node index. Handles are cheap to clone and compare by
//! (arena, index), so they can be used as hash keys without aliasing concerns.
//!
//! The arena is shared through `Rc<RefCell<_>>` and is therefore confined to
//! one thread, which matches the single-owner model of the builders.

use core::hash::{Hash, Hasher};
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{GraphError, Result};
use crate::graph::entity::{Edge, Node};

struct ArenaState<T> {
    labels: Vec<T>,
    /// Outgoing edge indices per node, in insertion order.
    outgoing: Vec<Vec<usize>>,
    /// `(start, end)` node indices per edge.
    endpoints: Vec<(usize, usize)>,
}

/// An arena of labelled nodes and directed edges.
///
/// Cloning the arena clones the handle; both clones see the same nodes.
pub struct NodeArena<T> {
    state: Rc<RefCell<ArenaState<T>>>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(ArenaState {
                labels: Vec::with_capacity(nodes),
                outgoing: Vec::with_capacity(nodes),
                endpoints: Vec::new(),
            })),
        }
    }

    /// Adds a node carrying `label`.
    pub fn add_node(&self, label: T) -> ArenaNode<T> {
        let mut state = self.state.borrow_mut();
        let index = state.labels.len();
        state.labels.push(label);
        state.outgoing.push(Vec::new());
        ArenaNode {
            index,
            state: Rc::clone(&self.state),
        }
    }

    /// Adds a directed edge `start -> end`.
    ///
    /// Both nodes must come from this arena. Self-loops and parallel edges are
    /// accepted; each call creates a distinct edge.
    pub fn add_edge(&self, start: &ArenaNode<T>, end: &ArenaNode<T>) -> Result<ArenaEdge<T>> {
        if !Rc::ptr_eq(&start.state, &self.state) || !Rc::ptr_eq(&end.state, &self.state) {
            return Err(GraphError::InvalidInput("nodes belong to different arenas"));
        }
        let mut state = self.state.borrow_mut();
        let index = state.endpoints.len();
        state.endpoints.push((start.index, end.index));
        state.outgoing[start.index].push(index);
        Ok(ArenaEdge {
            index,
            state: Rc::clone(&self.state),
        })
    }

    /// Looks up a node by index.
    pub fn node(&self, index: usize) -> Option<ArenaNode<T>> {
        (index < self.node_count()).then(|| ArenaNode {
            index,
            state: Rc::clone(&self.state),
        })
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.state.borrow().labels.len()
    }

    /// Number of edges in the arena.
    pub fn edge_count(&self) -> usize {
        self.state.borrow().endpoints.len()
    }

    /// All nodes, in creation order.
    pub fn nodes(&self) -> Vec<ArenaNode<T>> {
        (0..self.node_count())
            .map(|index| ArenaNode {
                index,
                state: Rc::clone(&self.state),
            })
            .collect()
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> Vec<ArenaEdge<T>> {
        (0..self.edge_count())
            .map(|index| ArenaEdge {
                index,
                state: Rc::clone(&self.state),
            })
            .collect()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NodeArena<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

/// Handle to a node of a [`NodeArena`].
pub struct ArenaNode<T> {
    index: usize,
    state: Rc<RefCell<ArenaState<T>>>,
}

impl<T> ArenaNode<T> {
    /// Index of the node within its arena.
    #[inline]
    pub fn id(&self) -> usize {
        self.index
    }

    /// Returns a copy of the node's label.
    pub fn label(&self) -> T
    where
        T: Clone,
    {
        self.state.borrow().labels[self.index].clone()
    }

    /// Runs `f` against the node's label without cloning it.
    pub fn with_label<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow().labels[self.index])
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.state.borrow().outgoing[self.index].len()
    }
}

impl<T> Node for ArenaNode<T> {
    type Edge = ArenaEdge<T>;

    fn edges(&self) -> Vec<ArenaEdge<T>> {
        self.state.borrow().outgoing[self.index]
            .iter()
            .map(|&index| ArenaEdge {
                index,
                state: Rc::clone(&self.state),
            })
            .collect()
    }

    fn adjacent_nodes(&self) -> Vec<ArenaNode<T>> {
        let state = self.state.borrow();
        state.outgoing[self.index]
            .iter()
            .map(|&edge| ArenaNode {
                index: state.endpoints[edge].1,
                state: Rc::clone(&self.state),
            })
            .collect()
    }
}

impl<T> Clone for ArenaNode<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> PartialEq for ArenaNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T> Eq for ArenaNode<T> {}

impl<T> Hash for ArenaNode<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(Rc::as_ptr(&self.state), state);
        self.index.hash(state);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ArenaNode<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.with_label(|label| f.debug_tuple("ArenaNode").field(&self.index).field(label).finish())
    }
}

/// Handle to an edge of a [`NodeArena`].
pub struct ArenaEdge<T> {
    index: usize,
    state: Rc<RefCell<ArenaState<T>>>,
}

impl<T> ArenaEdge<T> {
    /// Index of the edge within its arena.
    #[inline]
    pub fn id(&self) -> usize {
        self.index
    }

    fn endpoints(&self) -> (usize, usize) {
        self.state.borrow().endpoints[self.index]
    }
}

impl<T> Edge for ArenaEdge<T> {
    type Node = ArenaNode<T>;

    fn start(&self) -> ArenaNode<T> {
        ArenaNode {
            index: self.endpoints().0,
            state: Rc::clone(&self.state),
        }
    }

    fn end(&self) -> ArenaNode<T> {
        ArenaNode {
            index: self.endpoints().1,
            state: Rc::clone(&self.state),
        }
    }

    fn is_self_loop(&self) -> bool {
        let (start, end) = self.endpoints();
        start == end
    }
}

impl<T> Clone for ArenaEdge<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> PartialEq for ArenaEdge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T> Eq for ArenaEdge<T> {}

impl<T> Hash for ArenaEdge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(Rc::as_ptr(&self.state), state);
        self.index.hash(state);
    }
}

impl<T> core::fmt::Debug for ArenaEdge<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (start, end) = self.endpoints();
        write!(f, "ArenaEdge({}: {} -> {})", self.index, start, end)
    }
}

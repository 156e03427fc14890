//! Visitor-driven depth-first and breadth-first search.
//!
//! Both walks only reach nodes reachable from the start node and hand each of
//! them to the visitor exactly once. Cycles need no special handling: a node
//! already in the visited set is never entered again.
//!
//! The [`Dfs`] and [`Bfs`] iterators yield nodes in visit order and are what
//! [`dfs`] and [`bfs`] are built on; use them directly when an iterator chain
//! reads better than a visitor.

use std::collections::{HashSet, VecDeque};

use crate::graph::entity::Node;

/// Callback invoked once per reached node.
pub trait Visitor<N> {
    /// Returns `true` to stop the search at `node`.
    fn visit(&mut self, node: &N) -> bool;
}

impl<N, F> Visitor<N> for F
where
    F: FnMut(&N) -> bool,
{
    #[inline]
    fn visit(&mut self, node: &N) -> bool {
        self(node)
    }
}

/// Pre-order depth-first iterator.
///
/// Children are entered in [`Node::adjacent_nodes`] order, and a child's whole
/// subtree is yielded before its next sibling. Uses an explicit stack of
/// adjacency iterators, so deep graphs do not grow the call stack.
pub struct Dfs<N: Node> {
    visited: HashSet<N>,
    stack: Vec<std::vec::IntoIter<N>>,
}

impl<N: Node> Dfs<N> {
    /// Starts a walk at `start`.
    pub fn new(start: N) -> Self {
        Self::with_visited(start, HashSet::new())
    }

    /// Starts a walk at `start`, skipping nodes already in `visited`.
    ///
    /// If `start` itself is in `visited` the walk is empty.
    pub fn with_visited(start: N, visited: HashSet<N>) -> Self {
        Self {
            visited,
            stack: vec![vec![start].into_iter()],
        }
    }

    /// Nodes yielded so far (plus any the walk was seeded with).
    pub fn visited(&self) -> &HashSet<N> {
        &self.visited
    }

    /// Consumes the walk, returning its visited set.
    pub fn into_visited(self) -> HashSet<N> {
        self.visited
    }
}

impl<N: Node> Iterator for Dfs<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let Self { visited, stack } = self;
        loop {
            let siblings = stack.last_mut()?;
            match siblings.find(|node| !visited.contains(node)) {
                Some(node) => {
                    visited.insert(node.clone());
                    stack.push(node.adjacent_nodes().into_iter());
                    return Some(node);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

/// Breadth-first iterator.
///
/// Nodes are yielded in discovery order: the start node, then its
/// neighbours, then theirs. A yielded node's neighbours are discovered when
/// the walk is resumed, so stopping after a node leaves them undiscovered.
pub struct Bfs<N: Node> {
    visited: HashSet<N>,
    queue: VecDeque<N>,
    expand: Option<N>,
}

impl<N: Node> Bfs<N> {
    /// Starts a walk at `start`.
    pub fn new(start: N) -> Self {
        Self::with_visited(start, HashSet::new())
    }

    /// Starts a walk at `start`, skipping nodes already in `visited`.
    ///
    /// If `start` itself is in `visited` the walk is empty.
    pub fn with_visited(start: N, mut visited: HashSet<N>) -> Self {
        let mut queue = VecDeque::new();
        if visited.insert(start.clone()) {
            queue.push_back(start);
        }
        Self {
            visited,
            queue,
            expand: None,
        }
    }

    /// Nodes discovered so far (plus any the walk was seeded with).
    ///
    /// This includes queued nodes that have not been yielded yet.
    pub fn visited(&self) -> &HashSet<N> {
        &self.visited
    }

    /// Consumes the walk, returning the nodes it yielded plus any it was
    /// seeded with. Queued nodes that were never yielded are left out.
    pub fn into_visited(self) -> HashSet<N> {
        let Self {
            mut visited, queue, ..
        } = self;
        for pending in &queue {
            visited.remove(pending);
        }
        visited
    }
}

impl<N: Node> Iterator for Bfs<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if let Some(parent) = self.expand.take() {
            for adjacent in parent.adjacent_nodes() {
                if self.visited.insert(adjacent.clone()) {
                    self.queue.push_back(adjacent);
                }
            }
        }
        let node = self.queue.pop_front()?;
        self.expand = Some(node.clone());
        Some(node)
    }
}

/// Feeds `walk` to `visitor`, returning the node it stopped at, if any.
fn drive<N, I, V>(walk: I, visitor: &mut V) -> Option<N>
where
    I: Iterator<Item = N>,
    V: Visitor<N> + ?Sized,
{
    for (visits, node) in walk.enumerate() {
        if visitor.visit(&node) {
            graph_trace!("visitor stopped the walk after {} visit(s)", visits + 1);
            return Some(node);
        }
    }
    None
}

/// Depth-first search from `start`.
///
/// Returns `true` as soon as the visitor returns `true`; no further nodes are
/// visited after that. Returns `false` once every reachable node was visited.
pub fn dfs<N, V>(start: N, mut visitor: V) -> bool
where
    N: Node,
    V: Visitor<N>,
{
    drive(Dfs::new(start), &mut visitor).is_some()
}

/// Breadth-first search from `start`.
///
/// Same stopping contract as [`dfs`].
pub fn bfs<N, V>(start: N, mut visitor: V) -> bool
where
    N: Node,
    V: Visitor<N>,
{
    drive(Bfs::new(start), &mut visitor).is_some()
}

/// Depth-first search that shares `visited` with the caller.
///
/// Nodes already in `visited` are skipped, and every node the visitor accepts
/// is added to it, so repeated calls sweep disjoint parts of a graph. The node
/// the visitor stopped at is not recorded, and a later walk may reach it again.
pub fn dfs_with<N, V>(start: N, visitor: &mut V, visited: &mut HashSet<N>) -> bool
where
    N: Node,
    V: Visitor<N> + ?Sized,
{
    let mut walk = Dfs::with_visited(start, std::mem::take(visited));
    let stopped = drive(walk.by_ref(), visitor);
    *visited = walk.into_visited();
    release(visited, stopped)
}

/// Breadth-first counterpart of [`dfs_with`].
///
/// Nodes that were queued but never visited are not recorded either.
pub fn bfs_with<N, V>(start: N, visitor: &mut V, visited: &mut HashSet<N>) -> bool
where
    N: Node,
    V: Visitor<N> + ?Sized,
{
    let mut walk = Bfs::with_visited(start, std::mem::take(visited));
    let stopped = drive(walk.by_ref(), visitor);
    *visited = walk.into_visited();
    release(visited, stopped)
}

fn release<N: Node>(visited: &mut HashSet<N>, stopped: Option<N>) -> bool {
    match stopped {
        Some(node) => {
            visited.remove(&node);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests;

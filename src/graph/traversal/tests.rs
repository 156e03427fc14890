//! Tests for visitor-driven traversals.

use super::*;
use crate::graph::arena::{ArenaNode, NodeArena};

fn arena_with(count: usize, pairs: &[(usize, usize)]) -> Vec<ArenaNode<usize>> {
    let arena = NodeArena::new();
    let nodes: Vec<_> = (0..count).map(|i| arena.add_node(i)).collect();
    for &(u, v) in pairs {
        arena.add_edge(&nodes[u], &nodes[v]).unwrap();
    }
    nodes
}

fn labels(walk: impl Iterator<Item = ArenaNode<usize>>) -> Vec<usize> {
    walk.map(|node| node.label()).collect()
}

#[test]
fn dfs_is_preorder_by_adjacency() {
    // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 3 -> (none)
    let nodes = arena_with(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    assert_eq!(labels(Dfs::new(nodes[0].clone())), vec![0, 1, 3, 2]);
}

#[test]
fn bfs_is_level_order() {
    // 0 -> 1,2 ; 1 -> 3 ; 2 -> 4 ; 3 -> 5
    let nodes = arena_with(6, &[(0, 1), (0, 2), (1, 3), (2, 4), (3, 5)]);
    assert_eq!(labels(Bfs::new(nodes[0].clone())), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn dfs_descends_before_moving_to_sibling() {
    // 0 -> 1,4 ; 1 -> 2 ; 2 -> 3
    let nodes = arena_with(5, &[(0, 1), (0, 4), (1, 2), (2, 3)]);
    assert_eq!(labels(Dfs::new(nodes[0].clone())), vec![0, 1, 2, 3, 4]);
    assert_eq!(labels(Bfs::new(nodes[0].clone())), vec![0, 1, 4, 2, 3]);
}

#[test]
fn cycles_terminate_and_visit_once() {
    // 0 -> 1 -> 2 -> 0, 2 -> 2
    let nodes = arena_with(3, &[(0, 1), (1, 2), (2, 0), (2, 2)]);

    let mut seen = Vec::new();
    let stopped = dfs(nodes[0].clone(), |node: &ArenaNode<usize>| {
        seen.push(node.label());
        false
    });
    assert!(!stopped);
    assert_eq!(seen, vec![0, 1, 2]);

    seen.clear();
    let stopped = bfs(nodes[1].clone(), |node: &ArenaNode<usize>| {
        seen.push(node.label());
        false
    });
    assert!(!stopped);
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn unreachable_component_is_never_visited() {
    // {0 -> 1 -> 2} and {3 -> 4}
    let nodes = arena_with(5, &[(0, 1), (1, 2), (3, 4)]);

    for walk in [
        labels(Dfs::new(nodes[0].clone())),
        labels(Bfs::new(nodes[0].clone())),
    ] {
        assert_eq!(walk, vec![0, 1, 2]);
    }
    assert_eq!(labels(Dfs::new(nodes[3].clone())), vec![3, 4]);
}

#[test]
fn stop_on_second_visit_halts_both_walks() {
    let nodes = arena_with(4, &[(0, 1), (0, 2), (1, 3)]);

    let mut calls = 0;
    let found = dfs(nodes[0].clone(), |_: &ArenaNode<usize>| {
        calls += 1;
        calls == 2
    });
    assert!(found);
    assert_eq!(calls, 2);

    let mut calls = 0;
    let found = bfs(nodes[0].clone(), |_: &ArenaNode<usize>| {
        calls += 1;
        calls == 2
    });
    assert!(found);
    assert_eq!(calls, 2);
}

#[test]
fn stopping_at_start_visits_nothing_else() {
    let nodes = arena_with(2, &[(0, 1)]);
    let mut calls = 0;
    assert!(bfs(nodes[0].clone(), |_: &ArenaNode<usize>| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 1);
}

#[test]
fn search_for_label_reports_found() {
    let nodes = arena_with(4, &[(0, 1), (1, 2)]);
    assert!(dfs(nodes[0].clone(), |node: &ArenaNode<usize>| node.label() == 2));
    assert!(!bfs(nodes[0].clone(), |node: &ArenaNode<usize>| node.label() == 3));
}

#[test]
fn shared_visited_set_sweeps_components() {
    // {0 -> 1} {2 -> 0} {3}
    let nodes = arena_with(4, &[(0, 1), (2, 0)]);
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut record = |node: &ArenaNode<usize>| {
        order.push(node.label());
        false
    };

    for node in &nodes {
        dfs_with(node.clone(), &mut record, &mut visited);
    }
    assert_eq!(order, vec![0, 1, 2, 3]);
    assert_eq!(visited.len(), 4);

    let mut again = 0;
    let mut count = |_: &ArenaNode<usize>| {
        again += 1;
        false
    };
    assert!(!bfs_with(nodes[2].clone(), &mut count, &mut visited));
    assert_eq!(again, 0);
}

#[test]
fn stopped_bfs_leaves_unvisited_nodes_for_later_sweeps() {
    // 0 -> 1,2
    let nodes = arena_with(3, &[(0, 1), (0, 2)]);
    let mut visited = HashSet::new();
    let mut stop_at_start = |_: &ArenaNode<usize>| true;

    assert!(bfs_with(nodes[0].clone(), &mut stop_at_start, &mut visited));
    assert!(visited.is_empty());

    let mut order = Vec::new();
    let mut record = |node: &ArenaNode<usize>| {
        order.push(node.label());
        false
    };
    assert!(!bfs_with(nodes[1].clone(), &mut record, &mut visited));
    assert!(!dfs_with(nodes[2].clone(), &mut record, &mut visited));
    assert!(!bfs_with(nodes[0].clone(), &mut record, &mut visited));
    assert_eq!(order, vec![1, 2, 0]);
    assert_eq!(visited.len(), 3);
}

#[test]
fn stopped_bfs_keeps_only_accepted_nodes() {
    // 0 -> 1,2 ; 1 -> 3
    let nodes = arena_with(4, &[(0, 1), (0, 2), (1, 3)]);
    let mut visited = HashSet::new();
    let mut stop_at_one = |node: &ArenaNode<usize>| node.label() == 1;

    assert!(bfs_with(nodes[0].clone(), &mut stop_at_one, &mut visited));
    let mut kept: Vec<_> = visited.iter().map(ArenaNode::label).collect();
    kept.sort_unstable();
    assert_eq!(kept, vec![0]);

    let mut order = Vec::new();
    let mut record = |node: &ArenaNode<usize>| {
        order.push(node.label());
        false
    };
    for node in &nodes {
        bfs_with(node.clone(), &mut record, &mut visited);
    }
    assert_eq!(order, vec![1, 3, 2]);
}

#[test]
fn stopped_dfs_does_not_record_the_stopping_node() {
    // 0 -> 1 -> 2
    let nodes = arena_with(3, &[(0, 1), (1, 2)]);
    let mut visited = HashSet::new();
    let mut stop_at_start = |_: &ArenaNode<usize>| true;

    assert!(dfs_with(nodes[0].clone(), &mut stop_at_start, &mut visited));
    assert!(visited.is_empty());

    let mut stop_at_two = |node: &ArenaNode<usize>| node.label() == 2;
    assert!(dfs_with(nodes[0].clone(), &mut stop_at_two, &mut visited));
    assert_eq!(visited.len(), 2);
    assert!(!visited.contains(&nodes[2]));

    let mut calls = 0;
    let mut count = |_: &ArenaNode<usize>| {
        calls += 1;
        false
    };
    assert!(!dfs_with(nodes[0].clone(), &mut count, &mut visited));
    assert!(!dfs_with(nodes[2].clone(), &mut count, &mut visited));
    assert_eq!(calls, 1);
}

#[test]
fn bfs_iterator_visited_set_drops_queued_nodes() {
    let nodes = arena_with(3, &[(0, 1), (0, 2)]);
    let mut walk = Bfs::new(nodes[0].clone());
    assert_eq!(walk.next().map(|node| node.label()), Some(0));
    assert_eq!(walk.next().map(|node| node.label()), Some(1));
    assert_eq!(walk.visited().len(), 3);

    let visited = walk.into_visited();
    assert_eq!(visited.len(), 2);
    assert!(!visited.contains(&nodes[2]));
}

#[test]
fn deep_chain_does_not_recurse() {
    let len = 50_000;
    let pairs: Vec<_> = (0..len - 1).map(|i| (i, i + 1)).collect();
    let nodes = arena_with(len, &pairs);
    assert_eq!(Dfs::new(nodes[0].clone()).count(), len);
}

use alloc::{vec, vec::Vec};

use super::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Build an arena holding a single edge `label` out of the root to a terminal
/// leaf, returning the arena and the leaf id.
fn single_edge_arena(label: &str) -> (NodeArena<char>, NodeId) {
    let mut arena = NodeArena::new();
    let leaf = arena.allocate_node(Node::new(true));
    arena[NodeId::ROOT].edges.push(Edge::new(chars(label), leaf));
    (arena, leaf)
}

#[test]
fn new_arena_has_only_root() {
    let arena = NodeArena::<char>::new();

    assert_eq!(arena.len(), 1);
    assert!(!arena[NodeId::ROOT].terminal);
    assert!(arena[NodeId::ROOT].edges.is_empty());
}

#[test]
fn deallocated_slots_are_reused() {
    let mut arena = NodeArena::<char>::new();
    let a = arena.allocate_node(Node::new(true));
    let b = arena.allocate_node(Node::new(true));
    assert_eq!(arena.len(), 3);

    arena.deallocate_node(a);
    assert_eq!(arena.len(), 2);
    assert!(arena.get(a).is_none());

    let c = arena.allocate_node(Node::new(false));
    assert_eq!(c, a);
    assert_eq!(arena.slots.len(), 3);
    assert!(arena.get(b).is_some());
}

#[test]
#[should_panic(expected = "the root node cannot be deallocated")]
fn root_cannot_be_deallocated() {
    let mut arena = NodeArena::<char>::new();
    arena.deallocate_node(NodeId::ROOT);
}

#[test]
#[should_panic(expected = "already deallocated")]
fn double_deallocate_panics() {
    let mut arena = NodeArena::<char>::new();
    let a = arena.allocate_node(Node::new(true));
    arena.deallocate_node(a);
    arena.deallocate_node(a);
}

#[test]
fn deallocate_subtree_frees_every_node() {
    let (mut arena, leaf) = single_edge_arena("abc");
    let below = arena.allocate_node(Node::new(true));
    arena[leaf].edges.push(Edge::new(chars("d"), below));
    assert_eq!(arena.len(), 3);

    arena.deallocate_subtree(leaf);
    assert_eq!(arena.len(), 1);
    assert!(arena.get(leaf).is_none());
    assert!(arena.get(below).is_none());
}

#[test]
fn clear_resets_to_empty_root() {
    let (mut arena, _) = single_edge_arena("abc");
    arena[NodeId::ROOT].terminal = true;

    arena.clear();

    assert_eq!(arena.len(), 1);
    assert_eq!(arena.slots.len(), 1);
    assert!(!arena[NodeId::ROOT].terminal);
    assert!(arena[NodeId::ROOT].edges.is_empty());
    assert_eq!(arena.allocate_node(Node::new(true)).index(), 1);
}

#[test]
fn split_edge_with_remainder() {
    let (mut arena, old_leaf) = single_edge_arena("poem");

    let new_leaf = arena.split_edge(NodeId::ROOT, 0, 3, &['t', 's']);

    let root = &arena[NodeId::ROOT];
    assert_eq!(root.edges.len(), 1);
    assert_eq!(root.edges[0].label, chars("poe"));

    let branch = &arena[root.edges[0].target];
    assert!(!branch.terminal);
    assert_eq!(branch.edges.len(), 2);
    assert_eq!(branch.edges[0], Edge::new(chars("m"), old_leaf));
    assert_eq!(branch.edges[1], Edge::new(chars("ts"), new_leaf));
    assert!(arena[new_leaf].terminal);
    assert_eq!(arena.len(), 4);
}

#[test]
fn split_edge_without_remainder_marks_branch() {
    let (mut arena, old_leaf) = single_edge_arena("cardistry");

    let branch = arena.split_edge(NodeId::ROOT, 0, 4, &[]);

    let root = &arena[NodeId::ROOT];
    assert_eq!(root.edges[0], Edge::new(chars("card"), branch));
    assert!(arena[branch].terminal);
    assert_eq!(arena[branch].edges, vec![Edge::new(chars("istry"), old_leaf)]);
    assert_eq!(arena.len(), 3);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn split_edge_at_zero_panics() {
    let (mut arena, _) = single_edge_arena("abc");
    arena.split_edge(NodeId::ROOT, 0, 0, &['x']);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn split_edge_at_label_end_panics() {
    let (mut arena, _) = single_edge_arena("abc");
    arena.split_edge(NodeId::ROOT, 0, 3, &['x']);
}

#[test]
#[should_panic(expected = "must diverge")]
fn split_edge_with_overlapping_remainder_panics() {
    let (mut arena, _) = single_edge_arena("abc");
    arena.split_edge(NodeId::ROOT, 0, 1, &['b']);
}

#[test]
fn join_edge_concatenates_labels() {
    let (mut arena, leaf) = single_edge_arena("be");
    arena[leaf].terminal = false;
    let below = arena.allocate_node(Node::new(true));
    arena[leaf].edges.push(Edge::new(chars("aring"), below));

    arena.join_edge(NodeId::ROOT, 0);

    assert_eq!(
        arena[NodeId::ROOT].edges,
        vec![Edge::new(chars("bearing"), below)]
    );
    assert!(arena.get(leaf).is_none());
    assert_eq!(arena.len(), 2);
}

#[test]
#[should_panic(expected = "only a non-terminal node with a single edge can be joined")]
fn join_edge_terminal_child_panics() {
    let (mut arena, leaf) = single_edge_arena("be");
    let below = arena.allocate_node(Node::new(true));
    arena[leaf].edges.push(Edge::new(chars("e"), below));

    arena.join_edge(NodeId::ROOT, 0);
}

#[test]
fn remove_edge_preserves_order() {
    let mut arena = NodeArena::new();
    for label in ["a", "b", "c"] {
        let leaf = arena.allocate_node(Node::new(true));
        arena[NodeId::ROOT].edges.push(Edge::new(chars(label), leaf));
    }

    arena.remove_edge(NodeId::ROOT, 1);

    let labels: Vec<_> = arena[NodeId::ROOT]
        .edges
        .iter()
        .map(|edge| edge.label.clone())
        .collect();
    assert_eq!(labels, vec![chars("a"), chars("c")]);
    assert_eq!(arena.len(), 3);
}

#[test]
fn find_edge_by_leading_symbol() {
    let mut arena = NodeArena::new();
    for label in ["poe", "adv", "x"] {
        let leaf = arena.allocate_node(Node::new(true));
        arena[NodeId::ROOT].edges.push(Edge::new(chars(label), leaf));
    }

    let root = &arena[NodeId::ROOT];
    assert_eq!(root.find_edge(&'p'), Some(0));
    assert_eq!(root.find_edge(&'a'), Some(1));
    assert_eq!(root.find_edge(&'x'), Some(2));
    assert_eq!(root.find_edge(&'o'), None);
}

#[test]
fn node_ref_views() {
    let (arena, leaf) = single_edge_arena("abc");
    let root = NodeRef::new(&arena, NodeId::ROOT);

    assert!(root.is_root());
    assert!(!root.is_terminal());
    assert_eq!(root.num_edges(), 1);

    let edge = root.edges().next().unwrap();
    assert_eq!(edge.label(), &['a', 'b', 'c']);
    assert_eq!(edge.target().id(), leaf);
    assert!(edge.target().is_terminal());
    assert!(!edge.target().is_root());

    assert!(root.edge_starting_with(&'a').is_some());
    assert!(root.edge_starting_with(&'b').is_none());
}

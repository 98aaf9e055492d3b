use alloc::vec::Vec;

use super::*;
use crate::RadixSet;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn setup_set(keys: &[&str]) -> RadixSet<char> {
    let mut set = RadixSet::new();
    for key in keys {
        assert!(set.insert(*key));
    }
    set
}

#[test]
fn lookup_empty_tree() {
    let set = RadixSet::<char>::new();

    assert!(search_for_key(&set.arena, &chars("a")).is_none());
    assert!(search_for_key(&set.arena, &[]).is_none());
}

#[test]
fn lookup_empty_key_is_never_found() {
    let set = setup_set(&["a", "ab"]);

    assert!(search_for_key(&set.arena, &[]).is_none());
}

#[test]
fn lookup_reports_parent_and_grandparent() {
    // root -"poe"-> branch -"m"-> poem -"s"-> poems
    //                      -"try"-> poetry
    let set = setup_set(&["poem", "poems", "poetry"]);

    let poem = search_for_key(&set.arena, &chars("poem")).unwrap();
    let (branch, _) = poem.parent;
    assert_eq!(
        poem.grandparent,
        Some((NodeId::ROOT, 0)),
        "the branch node hangs off the root"
    );
    assert!(!set.arena[branch].terminal);
    assert_eq!(
        set.arena[branch].edges[poem.parent.1].target,
        poem.node,
        "the parent edge should lead to the found node"
    );

    let poems = search_for_key(&set.arena, &chars("poems")).unwrap();
    assert_eq!(poems.parent.0, poem.node);
    assert_eq!(poems.grandparent, Some(poem.parent));

    let poetry = search_for_key(&set.arena, &chars("poetry")).unwrap();
    assert_eq!(poetry.parent.0, branch);
    assert_eq!(poetry.grandparent, Some((NodeId::ROOT, 0)));
}

#[test]
fn lookup_top_level_key_has_no_grandparent() {
    let set = setup_set(&["abc", "xyz"]);

    let xyz = search_for_key(&set.arena, &chars("xyz")).unwrap();
    assert_eq!(xyz.parent, (NodeId::ROOT, 1));
    assert_eq!(xyz.grandparent, None);
}

#[test]
fn lookup_fails_on_partial_edges() {
    let set = setup_set(&["cardistry", "poem", "poems"]);

    // key ends in the middle of a label
    assert!(search_for_key(&set.arena, &chars("card")).is_none());
    // key diverges from a label
    assert!(search_for_key(&set.arena, &chars("cards")).is_none());
    // key runs past a leaf
    assert!(search_for_key(&set.arena, &chars("poemsy")).is_none());
    // no edge shares the first symbol
    assert!(search_for_key(&set.arena, &chars("zebra")).is_none());
}

#[test]
fn lookup_fails_on_non_terminal_branch() {
    let set = setup_set(&["poetry", "poets"]);

    // "poet" is a branch node, but was never inserted
    assert!(search_for_key(&set.arena, &chars("poet")).is_none());
    assert!(search_for_key(&set.arena, &chars("poetry")).is_some());
    assert!(search_for_key(&set.arena, &chars("poets")).is_some());
}

use radix_set::{visitor::WellFormedChecker, RadixSet};
use std::{collections::HashSet, fmt::Debug, hash::Hash};

/// Panic if the tree behind the set is not well-formed, otherwise return the
/// number of nodes in the tree.
#[track_caller]
pub fn assert_well_formed<S: PartialEq + Clone + Debug>(set: &RadixSet<S>) -> usize {
    match WellFormedChecker::check(set) {
        Ok(num_nodes) => num_nodes,
        Err(err) => panic!("tree is not well-formed: {err}"),
    }
}

/// Panic if the set does not hold exactly the keys of the model.
#[allow(dead_code)]
#[track_caller]
pub fn assert_matches_model<S>(set: &RadixSet<S>, model: &HashSet<Vec<S>>)
where
    S: PartialEq + Eq + Hash + Clone + Debug,
{
    assert_eq!(set.len(), model.len());
    for key in model {
        assert!(set.contains(key.as_slice()), "missing key {key:?}");
    }
}

use crate::nodes::{operations::lookup::search_for_key, NodeArena, NodeId};


/// The structural change made by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteResult {
    /// The node still has two or more edges, only its terminal flag was
    /// cleared.
    ClearedTerminal,
    /// The node was a leaf and was removed along with its incoming edge.
    RemovedLeaf {
        /// True if the parent was left as a non-terminal node with a single
        /// edge and was merged into its own incoming edge.
        parent_merged: bool,
    },
    /// The node had a single edge and was merged into its incoming edge.
    MergedIntoParent,
}

impl DeleteResult {
    /// Return the number of nodes deallocated by the delete.
    pub(crate) fn nodes_freed(self) -> usize {
        match self {
            DeleteResult::ClearedTerminal => 0,
            DeleteResult::RemovedLeaf { parent_merged } => 1 + usize::from(parent_merged),
            DeleteResult::MergedIntoParent => 1,
        }
    }
}

/// This struct contains the results from searching for a key to delete.
///
/// It holds everything needed to remove the key and restore the tree to a
/// minimal shape afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeletePoint {
    /// The terminal node which spells the key.
    pub node: NodeId,
    /// The parent of `node` and the index of the edge leading to `node`.
    pub parent: (NodeId, usize),
    /// The parent of the parent and the index of the edge leading to the
    /// parent. `None` if the parent is the root.
    pub grandparent: Option<(NodeId, usize)>,
}

impl DeletePoint {
    /// Use the [`DeletePoint`] to remove the key from the tree.
    ///
    /// The tree must not have been modified since the delete point was found.
    pub(crate) fn apply<S>(self, arena: &mut NodeArena<S>) -> DeleteResult {
        let DeletePoint {
            node,
            parent: (parent, edge_index),
            grandparent,
        } = self;

        arena[node].terminal = false;

        match arena[node].edges.len() {
            0 => {
                arena.remove_edge(parent, edge_index);

                // The root is exempt from merging, it has no incoming edge.
                let parent_merged = match grandparent {
                    Some((grandparent, parent_edge_index)) => {
                        let parent_node = &arena[parent];
                        if !parent_node.terminal && parent_node.edges.len() == 1 {
                            arena.join_edge(grandparent, parent_edge_index);
                            true
                        } else {
                            false
                        }
                    },
                    None => false,
                };

                DeleteResult::RemovedLeaf { parent_merged }
            },
            1 => {
                arena.join_edge(parent, edge_index);
                DeleteResult::MergedIntoParent
            },
            _ => DeleteResult::ClearedTerminal,
        }
    }
}

/// Search in the given tree for the node which terminates the key, returning
/// `None` if the key is not stored.
pub(crate) fn search_for_delete_point<S: PartialEq>(
    arena: &NodeArena<S>,
    key: &[S],
) -> Option<DeletePoint> {
    let found = search_for_key(arena, key)?;

    Some(DeletePoint {
        node: found.node,
        parent: found.parent,
        grandparent: found.grandparent,
    })
}

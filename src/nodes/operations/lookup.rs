use crate::nodes::{operations::EdgeMatch, NodeArena, NodeId};

#[cfg(test)]
mod tests;

/// The location of a stored key in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchResult {
    /// The terminal node reached by consuming the whole key.
    pub node: NodeId,
    /// The parent node and the index of its edge leading to `node`.
    ///
    /// Every stored key is non-empty, so the walk always follows at least one
    /// edge and there is always a parent.
    pub parent: (NodeId, usize),
    /// The grandparent node and the index of its edge leading to the parent.
    ///
    /// This is `None` when the parent is the root.
    pub grandparent: Option<(NodeId, usize)>,
}

/// Walk the tree from the root, following only edges whose labels are fully
/// consumed by the key, and return the location of the key if it is stored.
///
/// The walk fails as soon as no edge shares a first symbol with the rest of
/// the key, the rest of the key diverges from an edge label, or the key ends
/// in the middle of an edge label.
pub(crate) fn search_for_key<S: PartialEq>(
    arena: &NodeArena<S>,
    key: &[S],
) -> Option<SearchResult> {
    let mut current = NodeId::ROOT;
    let mut parent = None;
    let mut grandparent = None;
    let mut key_symbols_used = 0;

    while let Some(leading) = key.get(key_symbols_used) {
        let node = &arena[current];
        let edge_index = node.find_edge(leading)?;
        let edge = &node.edges[edge_index];

        match EdgeMatch::classify(&edge.label, &key[key_symbols_used..]) {
            EdgeMatch::Full(consumed) => {
                grandparent = parent;
                parent = Some((current, edge_index));
                current = edge.target;
                key_symbols_used += consumed;
            },
            EdgeMatch::Miss | EdgeMatch::Partial(_) | EdgeMatch::Over(_) => return None,
        }
    }

    let parent = parent?;
    arena[current].terminal.then_some(SearchResult {
        node: current,
        parent,
        grandparent,
    })
}

use crate::nodes::{operations::EdgeMatch, Edge, Node, NodeArena, NodeId};
use core::{error::Error, fmt};


/// The reason a key could not be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertError {
    /// The key contains no symbols. The empty key cannot be stored.
    EmptyKey,
    /// The key is already stored in the tree.
    AlreadyPresent,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::EmptyKey => write!(f, "Attempted to insert an empty key"),
            InsertError::AlreadyPresent => {
                write!(f, "Attempted to insert a key which is already present")
            },
        }
    }
}

impl Error for InsertError {}

/// The structural change needed to insert a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertSearchResultType {
    /// The key ends exactly at an existing, non-terminal node.
    MarkTerminal,
    /// No edge of the node shares a first symbol with the rest of the key, a
    /// new edge is needed.
    NewEdge,
    /// The rest of the key diverges from an edge label after `matched`
    /// symbols.
    SplitEdge {
        /// Index of the diverging edge
        edge_index: usize,
        /// Number of leading symbols shared by the label and the key
        matched: usize,
    },
    /// The rest of the key is a strict prefix of an edge label, ending at
    /// offset `at` in the label.
    OverMatch {
        /// Index of the over-matched edge
        edge_index: usize,
        /// Offset into the label where the key ends
        at: usize,
    },
}

/// This struct contains the results from searching for an insert point for
/// a new key in the tree.
///
/// It contains all the relevant information needed to perform the insert
/// and update the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InsertPoint {
    /// The node where the walk stopped.
    pub node: NodeId,
    /// The type of operation that needs to be performed to insert the key.
    pub insert_type: InsertSearchResultType,
    /// The number of symbols that were consumed from the key to reach `node`.
    pub key_symbols_used: usize,
}

impl InsertPoint {
    /// Use the [`InsertPoint`] to insert the given key into the tree, and
    /// return the node which now terminates the key.
    ///
    /// The key must be the same one that was used to find the insert point,
    /// and the tree must not have been modified in between.
    pub(crate) fn apply<S: PartialEq + Clone>(self, arena: &mut NodeArena<S>, key: &[S]) -> NodeId {
        let InsertPoint {
            node,
            insert_type,
            key_symbols_used,
        } = self;
        let rest = &key[key_symbols_used..];

        match insert_type {
            InsertSearchResultType::MarkTerminal => {
                arena[node].terminal = true;
                node
            },
            InsertSearchResultType::NewEdge => {
                let leaf = arena.allocate_node(Node::new(true));
                arena[node].edges.push(Edge::new(rest.to_vec(), leaf));
                trace_event!(parent = %node, leaf = %leaf, "attached new edge");
                leaf
            },
            InsertSearchResultType::SplitEdge {
                edge_index,
                matched,
            } => arena.split_edge(node, edge_index, matched, &rest[matched..]),
            InsertSearchResultType::OverMatch { edge_index, at } => {
                arena.split_edge(node, edge_index, at, &[])
            },
        }
    }
}

/// Walk the tree from the root and find where the given key should be
/// inserted.
///
/// # Errors
///  - Returns [`InsertError::EmptyKey`] if the key is empty.
///  - Returns [`InsertError::AlreadyPresent`] if the key is already stored.
pub(crate) fn search_for_insert_point<S: PartialEq>(
    arena: &NodeArena<S>,
    key: &[S],
) -> Result<InsertPoint, InsertError> {
    if key.is_empty() {
        return Err(InsertError::EmptyKey);
    }

    let mut current = NodeId::ROOT;
    let mut key_symbols_used = 0;

    while let Some(leading) = key.get(key_symbols_used) {
        let node = &arena[current];
        let Some(edge_index) = node.find_edge(leading) else {
            return Ok(InsertPoint {
                node: current,
                insert_type: InsertSearchResultType::NewEdge,
                key_symbols_used,
            });
        };
        let edge = &node.edges[edge_index];

        let insert_type = match EdgeMatch::classify(&edge.label, &key[key_symbols_used..]) {
            EdgeMatch::Full(consumed) => {
                current = edge.target;
                key_symbols_used += consumed;
                continue;
            },
            EdgeMatch::Partial(matched) => InsertSearchResultType::SplitEdge {
                edge_index,
                matched,
            },
            EdgeMatch::Over(at) => InsertSearchResultType::OverMatch { edge_index, at },
            EdgeMatch::Miss => InsertSearchResultType::NewEdge,
        };

        return Ok(InsertPoint {
            node: current,
            insert_type,
            key_symbols_used,
        });
    }

    if arena[current].terminal {
        Err(InsertError::AlreadyPresent)
    } else {
        Ok(InsertPoint {
            node: current,
            insert_type: InsertSearchResultType::MarkTerminal,
            key_symbols_used,
        })
    }
}

use crate::{
    nodes::visitor::{Visitable, Visitor},
    NodeId, NodeRef, RadixSet,
};
use std::{
    boxed::Box,
    collections::{hash_map::Entry, HashMap},
    error::Error,
    fmt,
    vec::Vec,
};

/// The symbols spelled by the path from the root to a node, which should
/// uniquely identify each node in the tree.
///
/// We assume that this should be unique for each node given no loops in the
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPrefix<S>(Box<[S]>);

impl<S> Default for KeyPrefix<S> {
    fn default() -> Self {
        KeyPrefix(Box::default())
    }
}

impl<S: Clone> From<&[S]> for KeyPrefix<S> {
    fn from(src: &[S]) -> Self {
        KeyPrefix(Box::from(src))
    }
}

impl<S: PartialEq, const LEN: usize> PartialEq<[S; LEN]> for KeyPrefix<S> {
    fn eq(&self, other: &[S; LEN]) -> bool {
        self.0.as_ref() == other.as_slice()
    }
}

/// An issue with the well-formed-ness of the tree. See the documentation on
/// [`WellFormedChecker`] for more context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedTreeError<S> {
    /// A loop was observed between nodes
    LoopFound {
        /// The node that was observed more than once while traversing the tree
        node: NodeId,
        /// The key prefix when the node was first observed
        first_observed: KeyPrefix<S>,
        /// The key prefix when the node was observed a second time
        later_observed: KeyPrefix<S>,
    },
    /// The root node was marked terminal, which would mean the empty key is
    /// stored
    TerminalRoot,
    /// An edge had a label with no symbols
    EmptyLabel {
        /// The key prefix identifying the node the edge starts from
        key_prefix: KeyPrefix<S>,
    },
    /// Two edges of the same node had labels starting with the same symbol
    SharedLeadingSymbol {
        /// The key prefix identifying the node the edges start from
        key_prefix: KeyPrefix<S>,
        /// The symbol shared by the edge labels
        symbol: S,
    },
    /// A non-root node was neither terminal nor had any outgoing edges
    DeadEndNode {
        /// The key prefix identifying the node
        key_prefix: KeyPrefix<S>,
    },
    /// A non-root, non-terminal node had a single outgoing edge, and should
    /// have been merged into its incoming edge
    UnmergedChainNode {
        /// The key prefix identifying the node
        key_prefix: KeyPrefix<S>,
    },
    /// The number of terminal nodes did not match the length of the set
    WrongLength {
        /// The length reported by the set
        expected: usize,
        /// The number of terminal nodes found in the tree
        found: usize,
    },
    /// Some allocated nodes could not be reached from the root
    UnreachableNodes {
        /// The number of nodes reached from the root, including the root
        reachable: usize,
        /// The number of nodes allocated for the tree
        allocated: usize,
    },
}

impl<S: fmt::Debug> fmt::Display for MalformedTreeError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedTreeError::LoopFound {
                node,
                first_observed,
                later_observed,
            } => {
                write!(
                    f,
                    "Found a loop in the tree containing the node [{node}]. First observed that \
                     node at [{first_observed:?}], then later observed the same node at \
                     [{later_observed:?}]",
                )
            },
            MalformedTreeError::TerminalRoot => {
                write!(f, "The root node is terminal, but the empty key cannot be stored")
            },
            MalformedTreeError::EmptyLabel { key_prefix } => {
                write!(
                    f,
                    "Found an edge with an empty label leaving the node at [{key_prefix:?}]"
                )
            },
            MalformedTreeError::SharedLeadingSymbol { key_prefix, symbol } => {
                write!(
                    f,
                    "Found multiple edges starting with the symbol [{symbol:?}] leaving the node \
                     at [{key_prefix:?}]"
                )
            },
            MalformedTreeError::DeadEndNode { key_prefix } => {
                write!(
                    f,
                    "Found a non-terminal node with no edges at [{key_prefix:?}]"
                )
            },
            MalformedTreeError::UnmergedChainNode { key_prefix } => {
                write!(
                    f,
                    "Found a non-terminal node with a single edge at [{key_prefix:?}], it should \
                     have been merged into its parent edge"
                )
            },
            MalformedTreeError::WrongLength { expected, found } => {
                write!(
                    f,
                    "The length of the set is [{expected}], but found [{found}] terminal nodes"
                )
            },
            MalformedTreeError::UnreachableNodes {
                reachable,
                allocated,
            } => {
                write!(
                    f,
                    "Only [{reachable}] of the [{allocated}] allocated nodes are reachable from \
                     the root"
                )
            },
        }
    }
}

impl<S: fmt::Debug> Error for MalformedTreeError<S> {}

/// A visitor of the radix tree which checks that the tree is well-formed.
///
/// A tree is well-formed when:
///  - there are no loops, every node is reachable by exactly one path
///  - the root is not terminal
///  - no edge label is empty
///  - no two edges of a node start with the same symbol
///  - every non-root node is terminal or has at least two edges
///  - the number of terminal nodes matches the set length
///  - every allocated node is reachable from the root
pub struct WellFormedChecker<S> {
    current_key_prefix: Vec<S>,
    seen_nodes: HashMap<NodeId, KeyPrefix<S>>,
    num_terminal_nodes: usize,
}

impl<S: PartialEq + Clone> WellFormedChecker<S> {
    /// Traverse the given tree and check that it is well-formed. Returns the
    /// number of nodes in the tree, including the root.
    ///
    /// # Errors
    ///
    /// Returns an error if the given tree is not well-formed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::{visitor::WellFormedChecker, RadixSet};
    ///
    /// let set = RadixSet::from(["card", "cardistry"]);
    ///
    /// assert_eq!(WellFormedChecker::check(&set), Ok(3));
    /// ```
    pub fn check(set: &RadixSet<S>) -> Result<usize, MalformedTreeError<S>> {
        let mut visitor = WellFormedChecker {
            current_key_prefix: Vec::new(),
            seen_nodes: HashMap::new(),
            num_terminal_nodes: 0,
        };

        let root = set.root();
        // We see the root node at the empty prefix
        visitor.seen_nodes.insert(root.id(), KeyPrefix::default());

        let num_nodes = root.visit_with(&mut visitor)?;

        if visitor.num_terminal_nodes != set.len() {
            return Err(MalformedTreeError::WrongLength {
                expected: set.len(),
                found: visitor.num_terminal_nodes,
            });
        }

        if num_nodes != set.num_nodes() {
            return Err(MalformedTreeError::UnreachableNodes {
                reachable: num_nodes,
                allocated: set.num_nodes(),
            });
        }

        Ok(num_nodes)
    }

    fn key_prefix(&self) -> KeyPrefix<S> {
        self.current_key_prefix.as_slice().into()
    }
}

impl<S: PartialEq + Clone> Visitor<S> for WellFormedChecker<S> {
    type Output = Result<usize, MalformedTreeError<S>>;

    fn default_output(&self) -> Self::Output {
        Ok(0)
    }

    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output {
        Ok(o1? + o2?)
    }

    fn visit_node(&mut self, t: NodeRef<'_, S>) -> Self::Output {
        if t.is_root() {
            if t.is_terminal() {
                return Err(MalformedTreeError::TerminalRoot);
            }
        } else if !t.is_terminal() {
            match t.num_edges() {
                0 => {
                    return Err(MalformedTreeError::DeadEndNode {
                        key_prefix: self.key_prefix(),
                    })
                },
                1 => {
                    return Err(MalformedTreeError::UnmergedChainNode {
                        key_prefix: self.key_prefix(),
                    })
                },
                _ => {},
            }
        }

        if t.is_terminal() {
            self.num_terminal_nodes += 1;
        }

        let mut running_node_count = 0;
        for (index, edge) in t.edges().enumerate() {
            let label = edge.label();
            let Some(leading) = label.first() else {
                return Err(MalformedTreeError::EmptyLabel {
                    key_prefix: self.key_prefix(),
                });
            };

            if t
                .edges()
                .take(index)
                .any(|sibling| sibling.label().first() == Some(leading))
            {
                return Err(MalformedTreeError::SharedLeadingSymbol {
                    key_prefix: self.key_prefix(),
                    symbol: leading.clone(),
                });
            }

            let original_key_prefix_len = self.current_key_prefix.len();
            self.current_key_prefix.extend_from_slice(label);

            let target = edge.target();
            let current_key_prefix = self.key_prefix();
            match self.seen_nodes.entry(target.id()) {
                Entry::Occupied(entry) => {
                    return Err(MalformedTreeError::LoopFound {
                        node: target.id(),
                        first_observed: entry.get().clone(),
                        later_observed: current_key_prefix,
                    });
                },
                Entry::Vacant(entry) => {
                    entry.insert(current_key_prefix);
                },
            }

            running_node_count += target.visit_with(self)?;

            self.current_key_prefix.truncate(original_key_prefix_len);
        }

        Ok(running_node_count + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        nodes::{Edge, Node},
        tests_common::{generate_key_fixed_length, generate_keys_skewed, setup_set_from_keys},
    };
    use std::vec;

    fn first_child(set: &RadixSet<char>) -> NodeId {
        set.root()
            .edges()
            .next()
            .expect("root should have an edge")
            .target()
            .id()
    }

    #[test]
    fn check_well_formed_tree() {
        let set = setup_set_from_keys(["poem", "poems", "poetry", "poets", "adventure", "advent"]);

        // root, "poe", "m", "s", "t", "ry", "s", "advent", "ure"
        assert_eq!(WellFormedChecker::check(&set), Ok(9));
    }

    #[test]
    fn check_empty_tree() {
        let set = RadixSet::<u8>::new();

        assert_eq!(WellFormedChecker::check(&set), Ok(1));
    }

    #[test]
    fn check_generated_trees() {
        let set: RadixSet<u8> = setup_set_from_keys(generate_keys_skewed(32));
        // the root, a branch node for every run of zeros shared by two keys, and
        // one node per key
        assert_eq!(WellFormedChecker::check(&set), Ok(1 + 30 + 32));

        let set: RadixSet<u8> = setup_set_from_keys(generate_key_fixed_length(3, 4));
        assert!(WellFormedChecker::check(&set).is_ok());
    }

    #[test]
    fn check_tree_with_loop() {
        let mut set = setup_set_from_keys(["abc"]);
        let leaf = first_child(&set);
        set.arena[leaf].edges.push(Edge::new(vec!['x'], NodeId::ROOT));

        let check_result =
            WellFormedChecker::check(&set).expect_err("should have failed for loop");
        match check_result {
            MalformedTreeError::LoopFound {
                node,
                first_observed,
                later_observed,
            } => {
                assert_eq!(node, NodeId::ROOT);
                assert_eq!(first_observed, []);
                assert_eq!(later_observed, ['a', 'b', 'c', 'x']);
            },
            _ => {
                panic!("expected a LoopFound error")
            },
        }
    }

    #[test]
    fn check_tree_with_terminal_root() {
        let mut set = setup_set_from_keys(["abc"]);
        set.arena[NodeId::ROOT].terminal = true;

        assert_eq!(
            WellFormedChecker::check(&set),
            Err(MalformedTreeError::TerminalRoot)
        );
    }

    #[test]
    fn check_tree_with_empty_label() {
        let mut set = setup_set_from_keys(["abc"]);
        let leaf = set.arena.allocate_node(Node::new(true));
        set.arena[NodeId::ROOT].edges.push(Edge::new(vec![], leaf));

        assert_eq!(
            WellFormedChecker::check(&set),
            Err(MalformedTreeError::EmptyLabel {
                key_prefix: KeyPrefix::default(),
            })
        );
    }

    #[test]
    fn check_tree_with_shared_leading_symbol() {
        let mut set = setup_set_from_keys(["abc"]);
        let leaf = set.arena.allocate_node(Node::new(true));
        set.arena[NodeId::ROOT]
            .edges
            .push(Edge::new(vec!['a', 'x', 'e'], leaf));

        assert_eq!(
            WellFormedChecker::check(&set),
            Err(MalformedTreeError::SharedLeadingSymbol {
                key_prefix: KeyPrefix::default(),
                symbol: 'a',
            })
        );
    }

    #[test]
    fn check_tree_with_dead_end_node() {
        let mut set = setup_set_from_keys(["abc"]);
        let dead_end = set.arena.allocate_node(Node::new(false));
        set.arena[NodeId::ROOT]
            .edges
            .push(Edge::new(vec!['x'], dead_end));

        let check_result = WellFormedChecker::check(&set).expect_err("should have a dead end");
        match check_result {
            MalformedTreeError::DeadEndNode { key_prefix } => {
                assert_eq!(key_prefix, ['x']);
            },
            _ => {
                panic!("expected a DeadEndNode error")
            },
        }
    }

    #[test]
    fn check_tree_with_unmerged_chain_node() {
        let mut set = setup_set_from_keys(["ab", "abc"]);
        let branch = first_child(&set);
        set.arena[branch].terminal = false;
        set.num_entries -= 1;

        let check_result =
            WellFormedChecker::check(&set).expect_err("should have an unmerged node");
        match check_result {
            MalformedTreeError::UnmergedChainNode { key_prefix } => {
                assert_eq!(key_prefix, ['a', 'b']);
            },
            _ => {
                panic!("expected an UnmergedChainNode error")
            },
        }
    }

    #[test]
    fn check_tree_with_wrong_length() {
        let mut set = setup_set_from_keys(["ab", "abc"]);
        set.num_entries += 1;

        assert_eq!(
            WellFormedChecker::check(&set),
            Err(MalformedTreeError::WrongLength {
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn check_tree_with_unreachable_nodes() {
        let mut set = setup_set_from_keys(["abc"]);
        let _ = set.arena.allocate_node(Node::new(true));

        assert_eq!(
            WellFormedChecker::check(&set),
            Err(MalformedTreeError::UnreachableNodes {
                reachable: 2,
                allocated: 3,
            })
        );
    }

    #[test]
    fn malformed_tree_error_display() {
        let error = MalformedTreeError::<char>::DeadEndNode {
            key_prefix: ['a', 'b'].as_slice().into(),
        };

        assert_eq!(
            std::format!("{error}"),
            "Found a non-terminal node with no edges at [KeyPrefix(['a', 'b'])]"
        );
    }
}

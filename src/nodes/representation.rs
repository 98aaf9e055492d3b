//! Tree node representation

use alloc::vec::Vec;
use core::{
    fmt,
    ops::{Index, IndexMut},
};

#[cfg(test)]
mod tests;

/// A handle to a node stored in the tree arena.
///
/// Handles are only meaningful for the tree that produced them, and a handle
/// to a node removed by a delete may later be reused for a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node is allocated first and is never deallocated.
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Return the arena slot index of this node.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// An outgoing edge of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edge<S> {
    /// The symbols consumed when following this edge, never empty in a
    /// well-formed tree.
    pub(crate) label: Vec<S>,
    /// The node this edge leads to, exclusively owned by this edge.
    pub(crate) target: NodeId,
}

impl<S> Edge<S> {
    pub(crate) fn new(label: Vec<S>, target: NodeId) -> Self {
        Edge { label, target }
    }
}

/// A point in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<S> {
    /// True if the path from the root to this node spells a stored key.
    pub(crate) terminal: bool,
    /// Outgoing edges in insertion order.
    pub(crate) edges: Vec<Edge<S>>,
}

impl<S> Node<S> {
    pub(crate) fn new(terminal: bool) -> Self {
        Node {
            terminal,
            edges: Vec::new(),
        }
    }

    /// Find the edge whose label starts with the given symbol.
    ///
    /// No two edges of a node share a leading symbol, so this is the only edge
    /// that can share a prefix with a key starting with `leading`.
    pub(crate) fn find_edge(&self, leading: &S) -> Option<usize>
    where
        S: PartialEq,
    {
        self.edges
            .iter()
            .position(|edge| edge.label.first() == Some(leading))
    }
}

#[derive(Debug, Clone)]
enum Slot<S> {
    Occupied(Node<S>),
    Vacant { next_free: Option<NodeId> },
}

/// Storage for all the nodes of a tree.
///
/// Nodes refer to their children by [`NodeId`]. Deallocated slots are kept in
/// a free list and handed out again by later allocations.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<S> {
    slots: Vec<Slot<S>>,
    free_head: Option<NodeId>,
    num_live: usize,
}

impl<S> NodeArena<S> {
    /// Create an arena holding only an empty, non-terminal root node.
    pub(crate) fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an arena with space reserved for `capacity` nodes, holding only
    /// an empty root node.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut arena = NodeArena {
            slots: Vec::with_capacity(capacity.max(1)),
            free_head: None,
            num_live: 0,
        };
        let root = arena.allocate_node(Node::new(false));
        debug_assert_eq!(root, NodeId::ROOT);
        arena
    }

    /// Return the number of live nodes, including the root.
    pub(crate) fn len(&self) -> usize {
        self.num_live
    }

    /// Drop every node except the root, and reset the root to be empty.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[0] = Slot::Occupied(Node::new(false));
        self.free_head = None;
        self.num_live = 1;
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<S>> {
        match self.slots.get(id.index())? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<S>> {
        match self.slots.get_mut(id.index())? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Store a node in the arena, reusing a free slot if there is one.
    ///
    /// # Panics
    ///  - Panics if the arena would need more than `u32::MAX` slots.
    pub(crate) fn allocate_node(&mut self, node: Node<S>) -> NodeId {
        self.num_live += 1;

        match self.free_head {
            Some(id) => {
                let slot = &mut self.slots[id.index()];
                let Slot::Vacant { next_free } = *slot else {
                    unreachable!("free list pointed at an occupied slot {id}");
                };
                self.free_head = next_free;
                *slot = Slot::Occupied(node);
                id
            },
            None => {
                let index = u32::try_from(self.slots.len())
                    .ok()
                    .filter(|index| *index != u32::MAX)
                    .expect("node arena cannot hold more than u32::MAX nodes");
                self.slots.push(Slot::Occupied(node));
                NodeId(index)
            },
        }
    }

    /// Remove a single node from the arena and return it. The slot is
    /// pushed onto the free list.
    ///
    /// The children of the removed node are not touched.
    ///
    /// # Panics
    ///  - Panics if `id` is the root or does not refer to a live node.
    pub(crate) fn deallocate_node(&mut self, id: NodeId) -> Node<S> {
        assert_ne!(id, NodeId::ROOT, "the root node cannot be deallocated");

        let slot = self
            .slots
            .get_mut(id.index())
            .expect("node id should be within the arena");
        let old = core::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        let Slot::Occupied(node) = old else {
            panic!("node {id} was already deallocated");
        };

        self.free_head = Some(id);
        self.num_live -= 1;
        node
    }

    /// Deallocate the given node and all nodes reachable from it.
    pub(crate) fn deallocate_subtree(&mut self, id: NodeId) {
        let mut stack = Vec::new();
        stack.push(id);

        while let Some(next) = stack.pop() {
            let node = self.deallocate_node(next);
            stack.extend(node.edges.into_iter().map(|edge| edge.target));
        }
    }

    /// Split an edge of `parent` at symbol offset `at`, returning the node
    /// which terminates the inserted key.
    ///
    /// The edge keeps `label[..at]` and leads to a new branch node. The branch
    /// node gets an edge with `label[at..]` to the old target. If `remainder`
    /// is empty the branch node is marked terminal and returned, otherwise the
    /// branch node also gets an edge with `remainder` to a new terminal leaf,
    /// which is returned.
    ///
    /// # Panics
    ///  - Panics if `at` is 0 or not less than the label length.
    ///  - Panics if `remainder` starts with the same symbol as `label[at..]`.
    pub(crate) fn split_edge(
        &mut self,
        parent: NodeId,
        edge_index: usize,
        at: usize,
        remainder: &[S],
    ) -> NodeId
    where
        S: PartialEq + Clone,
    {
        let edge = &mut self[parent].edges[edge_index];
        assert!(
            at > 0 && at < edge.label.len(),
            "split index [{at}] is out of bounds of [1, {})",
            edge.label.len()
        );
        assert!(
            remainder.first() != Some(&edge.label[at]),
            "split remainder must diverge from the existing label"
        );

        let tail = edge.label.split_off(at);
        let old_target = edge.target;

        let mut branch = Node::new(remainder.is_empty());
        branch.edges.push(Edge::new(tail, old_target));

        let leaf = if remainder.is_empty() {
            None
        } else {
            let leaf = self.allocate_node(Node::new(true));
            branch.edges.push(Edge::new(remainder.to_vec(), leaf));
            Some(leaf)
        };

        let branch = self.allocate_node(branch);
        self[parent].edges[edge_index].target = branch;

        trace_event!(
            parent = %parent,
            branch = %branch,
            at,
            remainder_len = remainder.len(),
            "split edge"
        );

        leaf.unwrap_or(branch)
    }

    /// Merge the node at the end of an edge of `parent` into that edge.
    ///
    /// The child node must be non-terminal with a single outgoing edge. The
    /// parent edge label is extended with the child edge label, the parent
    /// edge then leads to the child edge target, and the child node is
    /// deallocated.
    ///
    /// # Panics
    ///  - Panics if the child node is terminal or does not have exactly one
    ///    edge.
    pub(crate) fn join_edge(&mut self, parent: NodeId, edge_index: usize) {
        let child = self[parent].edges[edge_index].target;
        {
            let child_node = &self[child];
            assert!(
                !child_node.terminal && child_node.edges.len() == 1,
                "only a non-terminal node with a single edge can be joined, node {child} has \
                 terminal={} and {} edges",
                child_node.terminal,
                child_node.edges.len()
            );
        }

        let mut child_node = self.deallocate_node(child);
        let absorbed = child_node
            .edges
            .pop()
            .expect("joined node should have a single edge");

        let edge = &mut self[parent].edges[edge_index];
        edge.label.extend(absorbed.label);
        edge.target = absorbed.target;

        trace_event!(parent = %parent, removed = %child, "joined edge");
    }

    /// Remove an edge from `parent` and deallocate everything below it.
    ///
    /// The order of the remaining edges is preserved.
    pub(crate) fn remove_edge(&mut self, parent: NodeId, edge_index: usize) {
        let edge = self[parent].edges.remove(edge_index);
        self.deallocate_subtree(edge.target);

        trace_event!(parent = %parent, removed = %edge.target, "removed edge");
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Index<NodeId> for NodeArena<S> {
    type Output = Node<S>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {id} is not allocated"),
        }
    }
}

impl<S> IndexMut<NodeId> for NodeArena<S> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node {id} is not allocated"),
        }
    }
}

/// A read-only view of a node in a tree.
pub struct NodeRef<'a, S> {
    arena: &'a NodeArena<S>,
    id: NodeId,
}

impl<'a, S> NodeRef<'a, S> {
    pub(crate) fn new(arena: &'a NodeArena<S>, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    fn node(&self) -> &'a Node<S> {
        &self.arena[self.id]
    }

    /// Return the handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Return true if this is the root node of the tree.
    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    /// Return true if the path from the root to this node spells a key that
    /// is stored in the tree.
    pub fn is_terminal(&self) -> bool {
        self.node().terminal
    }

    /// Return the number of outgoing edges.
    pub fn num_edges(&self) -> usize {
        self.node().edges.len()
    }

    /// Iterate over the outgoing edges in insertion order.
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = EdgeRef<'a, S>> + ExactSizeIterator {
        let arena = self.arena;
        self.node()
            .edges
            .iter()
            .map(move |edge| EdgeRef { arena, edge })
    }

    /// Return the outgoing edge whose label starts with `leading`, if any.
    pub fn edge_starting_with(&self, leading: &S) -> Option<EdgeRef<'a, S>>
    where
        S: PartialEq,
    {
        let node = self.node();
        node.find_edge(leading).map(|index| EdgeRef {
            arena: self.arena,
            edge: &node.edges[index],
        })
    }
}

impl<S> Clone for NodeRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NodeRef<'_, S> {}

impl<S> fmt::Debug for NodeRef<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("terminal", &self.is_terminal())
            .field("num_edges", &self.num_edges())
            .finish()
    }
}

/// A read-only view of an edge in a tree.
pub struct EdgeRef<'a, S> {
    arena: &'a NodeArena<S>,
    edge: &'a Edge<S>,
}

impl<'a, S> EdgeRef<'a, S> {
    /// Return the symbols consumed when following this edge.
    pub fn label(&self) -> &'a [S] {
        &self.edge.label
    }

    /// Return the node this edge leads to.
    pub fn target(&self) -> NodeRef<'a, S> {
        NodeRef::new(self.arena, self.edge.target)
    }
}

impl<S> Clone for EdgeRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for EdgeRef<'_, S> {}

impl<S: fmt::Debug> fmt::Debug for EdgeRef<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("label", &self.edge.label)
            .field("target", &self.edge.target)
            .finish()
    }
}

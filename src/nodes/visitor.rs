//! Utilities for inspecting the tree structure.

mod pretty_printer;
mod tree_stats;
mod well_formed;

use crate::{EdgeRef, NodeRef, RadixSet};
pub use pretty_printer::*;
pub use tree_stats::*;
pub use well_formed::*;

/// The `Visitable` trait allows [`Visitor`]s to traverse the structure of the
/// implementing type and produce some output.
pub trait Visitable<S> {
    /// This function provides the default traversal behavior for the
    /// implementing type.
    ///
    /// The implementation should call `visit_with(visitor)` for all relevant
    /// sub-fields of the type. If there are no relevant sub-fields, it should
    /// just produce the default output.
    fn super_visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output;

    /// This function will traverse the implementing type and execute any
    /// specific logic from the given [`Visitor`].
    ///
    /// This function should be overridden for types that have corresponding
    /// hooks in the [`Visitor`] trait. For example the [`Visitable`]
    /// implementation for [`NodeRef`] looks like:
    ///
    /// ```rust,compile_fail
    /// impl<S> Visitable<S> for NodeRef<'_, S> {
    ///     ...
    ///
    ///     fn visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output {
    ///         visitor.visit_node(*self)
    ///     }
    /// }
    /// ```
    ///
    /// The call to `visitor.visit_node(*self)` allows the visitor to execute
    /// specific handling logic.
    fn visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output {
        self.super_visit_with(visitor)
    }
}

impl<S> Visitable<S> for RadixSet<S> {
    fn super_visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output {
        self.root().visit_with(visitor)
    }
}

impl<S> Visitable<S> for NodeRef<'_, S> {
    fn super_visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output {
        combine_edge_output(self.edges(), visitor)
    }

    fn visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_node(*self)
    }
}

impl<S> Visitable<S> for EdgeRef<'_, S> {
    fn super_visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output {
        self.target().visit_with(visitor)
    }

    fn visit_with<V: Visitor<S>>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_edge(*self)
    }
}

/// The `Visitor` trait allows creating new operations on the radix tree by
/// overriding the handling methods for nodes and edges.
pub trait Visitor<S>: Sized {
    /// The type of value that the visitor produces.
    type Output;

    /// Produce the default value of the [`Self::Output`] type.
    fn default_output(&self) -> Self::Output;

    /// Combine two instances of the [`Self::Output`] type for this [`Visitor`].
    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output;

    /// Visit a node. The default traversal visits every outgoing edge.
    fn visit_node(&mut self, t: NodeRef<'_, S>) -> Self::Output {
        t.super_visit_with(self)
    }

    /// Visit an edge. The default traversal visits the edge target.
    fn visit_edge(&mut self, t: EdgeRef<'_, S>) -> Self::Output {
        t.super_visit_with(self)
    }
}

fn combine_edge_output<'a, S: 'a, V: Visitor<S>>(
    mut iter: impl Iterator<Item = EdgeRef<'a, S>>,
    visitor: &mut V,
) -> V::Output {
    if let Some(first) = iter.next() {
        let mut accum = first.visit_with(visitor);
        for edge in iter {
            let output = edge.visit_with(visitor);
            accum = visitor.combine_output(accum, output);
        }

        accum
    } else {
        visitor.default_output()
    }
}

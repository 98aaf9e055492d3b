//! Tree node representation and manipulation

mod operations;
mod representation;

#[cfg(feature = "std")]
pub mod visitor;

pub(crate) use operations::*;
pub use operations::{match_prefix, InsertError};
pub use representation::{EdgeRef, NodeId, NodeRef};
pub(crate) use representation::{Edge, Node, NodeArena};

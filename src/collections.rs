//! Types which present a collection interface over the radix tree

mod set;

pub use set::*;

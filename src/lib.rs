#![no_std]
#![deny(
    missing_docs,
    clippy::missing_safety_doc,
    unsafe_op_in_unsafe_fn,
    deprecated_in_future,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::invalid_codeblock_attributes
)]
#![doc(
    html_playground_url = "https://play.rust-lang.org/",
    test(attr(deny(warnings)))
)]

//! Path-compressed radix tree set
//!
//! A [`RadixSet`] stores complete keys, each a sequence of symbols, in a
//! prefix tree where every chain of single-child nodes is collapsed into one
//! edge with a multi-symbol label. Insertions split edges where keys diverge
//! and deletions merge edges back together, so the tree stays minimal after
//! every mutation.
//!
//! # References
//!
//!  - Morrison, D. R. (1968). PATRICIA: practical algorithm to retrieve
//!    information coded in alphanumeric. Journal of the ACM, 15(4), 514-534.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Emit a `tracing` event at trace level when the `tracing` feature is
/// enabled, otherwise expand to nothing.
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    };
}

mod collections;
mod nodes;
mod symbols;

#[doc(hidden)]
pub mod tests_common;

#[cfg(feature = "gen-benches-macro")]
#[doc(hidden)]
pub mod benches_common;

pub use collections::*;
#[cfg(feature = "std")]
pub use nodes::visitor;
pub use nodes::{match_prefix, EdgeRef, NodeId, NodeRef};
pub use symbols::*;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

//! Key generators and tree helpers shared by the unit tests, integration
//! tests, benchmarks and fuzz targets.

use crate::{NodeRef, RadixSet};
use alloc::{boxed::Box, string::String, vec, vec::Vec};
use core::iter;

/// Generate keys which form a left skewed tree: `[255]`, `[0, 255]`,
/// `[0, 0, 255]`, and so on up to `max_len` symbols.
pub fn generate_keys_skewed(max_len: usize) -> impl Iterator<Item = Box<[u8]>> {
    iter::successors(Some(vec![u8::MAX; 1].into_boxed_slice()), move |prev| {
        if prev.len() < max_len {
            let mut key = vec![u8::MIN; prev.len()];
            key.push(u8::MAX);
            Some(key.into_boxed_slice())
        } else {
            None
        }
    })
}

/// Generate keys of exactly `max_len` symbols, where every symbol steps from
/// `u8::MIN` towards `u8::MAX` in `value_stops` increments.
pub fn generate_key_fixed_length(
    max_len: usize,
    value_stops: u8,
) -> impl Iterator<Item = Box<[u8]>> {
    iter::successors(
        Some(vec![u8::MIN; max_len].into_boxed_slice()),
        move |prev| {
            if prev.iter().all(|digit| *digit == u8::MAX) {
                None
            } else {
                Some(
                    prev.iter()
                        .map(|digit| digit.saturating_add(u8::MAX / value_stops))
                        .collect::<Vec<_>>()
                        .into_boxed_slice(),
                )
            }
        },
    )
}

/// Generate `count` distinct lowercase words which share many prefixes.
///
/// The words are the base-26 spellings (using `'a'..='z'`) of the numbers
/// `0..count`, where every third stem is followed by `"-ing"` and every other
/// third by `"-s"`. Because stems never contain `'-'`, the words stay unique
/// while sharing prefixes much like a natural language dictionary.
pub fn generate_words(count: usize) -> impl Iterator<Item = String> {
    (0..count).map(|n| {
        let mut stem = String::new();
        let mut n_rem = n;
        loop {
            stem.push(char::from(b'a' + (n_rem % 26) as u8));
            n_rem /= 26;
            if n_rem == 0 {
                break;
            }
        }

        match n % 3 {
            0 => stem,
            1 => stem + "-ing",
            _ => stem + "-s",
        }
    })
}

/// Build a set from the given keys, asserting that every key is new.
pub fn setup_set_from_keys<K, S>(keys: impl IntoIterator<Item = K>) -> RadixSet<S>
where
    K: crate::AsSymbols<Symbol = S>,
    S: PartialEq + Clone,
{
    let mut set = RadixSet::new();
    for key in keys {
        assert!(set.insert(key), "keys used to set up a tree must be unique");
    }
    set
}

/// Render the shape of a tree of `char` symbols as a string.
///
/// Every edge is written as its label, followed by `*` if the edge leads to a
/// terminal node, followed by the edges of that node in parentheses. Sibling
/// edges are separated by spaces and listed in insertion order. For example
/// the set `{"advent", "adventure"}` renders as `advent*(ure*)`.
pub fn render_tree(set: &RadixSet<char>) -> String {
    fn render_edges(node: NodeRef<'_, char>, output: &mut String) {
        for (index, edge) in node.edges().enumerate() {
            if index > 0 {
                output.push(' ');
            }
            output.extend(edge.label());

            let target = edge.target();
            if target.is_terminal() {
                output.push('*');
            }
            if target.num_edges() > 0 {
                output.push('(');
                render_edges(target, output);
                output.push(')');
            }
        }
    }

    let mut output = String::new();
    let root = set.root();
    if root.is_terminal() {
        output.push_str("<terminal root>");
    }
    render_edges(root, &mut output);
    output
}

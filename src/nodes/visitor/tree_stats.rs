use hdrhistogram::Histogram;

use crate::{
    visitor::{Visitable, Visitor},
    NodeRef, RadixSet,
};
use std::{collections::BTreeMap, fmt};

/// A visitor of the radix tree which collects statistics about the tree, like
/// how many terminal nodes there are and how long the edge labels are.
#[derive(Debug)]
pub struct TreeStatsCollector {
    stats: TreeStats,
    current_depth: usize,
    current_key_len: usize,
}

impl TreeStatsCollector {
    /// Run the tree stats collection on the given set, then return the
    /// accumulated stats.
    pub fn collect<S>(set: &RadixSet<S>) -> TreeStats {
        let mut collector = TreeStatsCollector {
            stats: TreeStats::new(),
            current_depth: 0,
            current_key_len: 0,
        };

        set.visit_with(&mut collector);

        collector.stats
    }

    /// Iterate through the given tree and return the number of terminal
    /// nodes.
    pub fn count_terminal_nodes<S>(set: &RadixSet<S>) -> usize {
        struct TerminalNodeCounter;

        impl<S> Visitor<S> for TerminalNodeCounter {
            type Output = usize;

            fn default_output(&self) -> Self::Output {
                0
            }

            fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output {
                o1 + o2
            }

            fn visit_node(&mut self, t: NodeRef<'_, S>) -> Self::Output {
                usize::from(t.is_terminal()) + t.super_visit_with(self)
            }
        }

        set.visit_with(&mut TerminalNodeCounter)
    }
}

/// Collection of stats about the shape of a tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    num_nodes: u64,
    num_leaves: u64,
    num_branch_nodes: u64,
    max_depth: usize,
    edges_per_node: ExactHistogram,
    key_length: Histogram<u64>,
    label_length: Histogram<u64>,
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DisplayAsDebug<'a, T>(&'a T);

        impl<T: fmt::Display> fmt::Debug for DisplayAsDebug<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                <T as fmt::Display>::fmt(self.0, f)
            }
        }

        struct HistogramAsDebug<'a>(&'a Histogram<u64>);

        impl fmt::Debug for HistogramAsDebug<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entry(&"min", &self.0.min())
                    .entry(&"mean", &self.0.mean())
                    .entry(&"stdev", &self.0.stdev())
                    .entry(&"max", &self.0.max())
                    .entry(&"p50", &self.0.value_at_quantile(0.5))
                    .entry(&"p90", &self.0.value_at_quantile(0.90))
                    .entry(&"p99", &self.0.value_at_quantile(0.99))
                    .finish()
            }
        }

        f.debug_struct("TreeStats")
            .field("num_nodes", &self.num_nodes)
            .field("num_terminal_nodes", &self.num_terminal_nodes())
            .field("num_leaves", &self.num_leaves)
            .field("num_branch_nodes", &self.num_branch_nodes)
            .field("num_edges", &self.num_edges())
            .field("max_depth", &self.max_depth)
            .field("total_key_symbols", &self.total_key_symbols())
            .field("total_label_symbols", &self.total_label_symbols())
            .field("edges_per_node", &DisplayAsDebug(&self.edges_per_node))
            .field("key_length", &HistogramAsDebug(&self.key_length))
            .field("label_length", &HistogramAsDebug(&self.label_length))
            .finish()
    }
}

impl TreeStats {
    /// Create an empty collection of tree statistics.
    fn new() -> Self {
        Self {
            num_nodes: 0,
            num_leaves: 0,
            num_branch_nodes: 0,
            max_depth: 0,
            edges_per_node: ExactHistogram::default(),
            key_length: Histogram::new(3)
                .expect("should be able to create a default histogram with no bounds and 3 sigfig"),
            label_length: Histogram::new(3)
                .expect("should be able to create a default histogram with no bounds and 3 sigfig"),
        }
    }

    /// Number of nodes present in the tree, including the root.
    pub fn num_nodes(&self) -> u64 {
        self.num_nodes
    }

    /// Number of terminal nodes, which is the number of stored keys.
    pub fn num_terminal_nodes(&self) -> u64 {
        self.key_length.len()
    }

    /// Number of non-root nodes with no outgoing edges.
    pub fn num_leaves(&self) -> u64 {
        self.num_leaves
    }

    /// Number of non-root nodes which are not terminal, and only exist to
    /// split diverging keys.
    pub fn num_branch_nodes(&self) -> u64 {
        self.num_branch_nodes
    }

    /// Number of edges present in the tree.
    pub fn num_edges(&self) -> u64 {
        self.label_length.len()
    }

    /// The largest number of edges on a path from the root to a node.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The number of symbols in the longest stored key, or 0 if the tree is
    /// empty.
    pub fn max_key_len(&self) -> u64 {
        self.key_length.max()
    }

    /// The total number of symbols of all keys stored in the tree.
    pub fn total_key_symbols(&self) -> u64 {
        sum_recorded(&self.key_length)
    }

    /// The total number of symbols stored in edge labels.
    ///
    /// Comparing this with [`TreeStats::total_key_symbols`] shows how much
    /// storage is saved by sharing prefixes.
    pub fn total_label_symbols(&self) -> u64 {
        sum_recorded(&self.label_length)
    }

    /// Return pairs of `(number of edges, number of nodes)`, for every
    /// outgoing edge count observed in the tree.
    pub fn edges_per_node(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.edges_per_node.entries()
    }

    /// The distribution of stored key lengths, in symbols.
    pub fn key_length(&self) -> &Histogram<u64> {
        &self.key_length
    }

    /// The distribution of edge label lengths, in symbols.
    pub fn label_length(&self) -> &Histogram<u64> {
        &self.label_length
    }

    /// Return pairs of `(label length, number of edges)`, for every edge
    /// label length observed in the tree.
    pub fn label_lengths(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.label_length
            .iter_recorded()
            .map(|value| (value.value_iterated_to(), value.count_at_value()))
    }
}

fn sum_recorded(histogram: &Histogram<u64>) -> u64 {
    histogram
        .iter_recorded()
        .map(|value| value.count_at_value() * value.value_iterated_to())
        .sum()
}

impl<S> Visitor<S> for TreeStatsCollector {
    type Output = ();

    fn default_output(&self) -> Self::Output {}

    fn combine_output(&self, _: Self::Output, _: Self::Output) -> Self::Output {}

    fn visit_node(&mut self, t: NodeRef<'_, S>) -> Self::Output {
        let num_edges = t.num_edges();

        self.stats.num_nodes += 1;
        self.stats
            .edges_per_node
            .record(u64::try_from(num_edges).expect("number of edges should fit in a u64"));
        self.stats.max_depth = self.stats.max_depth.max(self.current_depth);

        if t.is_terminal() {
            self.stats
                .key_length
                .record(u64::try_from(self.current_key_len).expect("key length should fit in a u64"))
                .expect("should be able to record arbitrary key length in histogram");
        }
        if !t.is_root() {
            if num_edges == 0 {
                self.stats.num_leaves += 1;
            }
            if !t.is_terminal() {
                self.stats.num_branch_nodes += 1;
            }
        }

        for edge in t.edges() {
            let label_len = edge.label().len();
            self.stats
                .label_length
                .record(u64::try_from(label_len).expect("label length should fit in a u64"))
                .expect("should be able to record arbitrary label length in histogram");

            self.current_depth += 1;
            self.current_key_len += label_len;
            edge.target().visit_with(self);
            self.current_key_len -= label_len;
            self.current_depth -= 1;
        }
    }
}

/// A discrete distribution of small values, counting how many times each
/// exact value was recorded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ExactHistogram {
    counts: BTreeMap<u64, u64>,
    total_count: u64,
}

impl fmt::Display for ExactHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        map.entries(self.entries());
        map.entry(&"total", &self.total_count());
        map.finish()
    }
}

impl ExactHistogram {
    /// Record a value in the histogram, incrementing its count by 1.
    fn record(&mut self, value: u64) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total_count += 1;
    }

    /// Return an iterator over the pairs of `(value, count)` in increasing
    /// order of value, skipping values which were never recorded.
    fn entries(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(value, count)| (*value, *count))
    }

    /// Return the total number of recorded values
    fn total_count(&self) -> u64 {
        self.total_count
    }
}

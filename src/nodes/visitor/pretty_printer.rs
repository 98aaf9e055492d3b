use crate::{
    visitor::{Visitable, Visitor},
    NodeRef, RadixSet,
};
use std::{
    fmt,
    io::{self, Write},
    string::String,
};

/// Settings which customize the output of the [`DotPrinter`] visitor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DotPrinterSettings {
    /// Add the node handle to each node in the graph
    pub display_node_id: bool,
    /// Separate the symbols of each edge label with a space
    pub separate_symbols: bool,
}

/// A visitor of the radix tree that will print the tree in "dot" notation.
///
/// Terminal nodes are drawn with a double circle, and every edge is labelled
/// with its symbols.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html) for
/// information about syntax and example of the language.
pub struct DotPrinter<O: Write, S> {
    output: O,
    next_id: usize,
    settings: DotPrinterSettings,
    symbol_fmt: fn(&S, &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl<O: Write, S> DotPrinter<O, S> {
    /// Write the dot-format of the given tree to the given output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::{
    ///     visitor::{DotPrinter, DotPrinterSettings},
    ///     RadixSet,
    /// };
    ///
    /// let set = RadixSet::from(["card", "cardistry"]);
    /// let mut output = Vec::new();
    /// DotPrinter::print(&mut output, &set, DotPrinterSettings::default()).unwrap();
    ///
    /// let output = String::from_utf8(output).unwrap();
    /// assert!(output.contains("n0 -> n1 [label=\"card\"]"));
    /// ```
    pub fn print(output: O, set: &RadixSet<S>, settings: DotPrinterSettings) -> io::Result<()>
    where
        S: fmt::Display,
    {
        Self::print_with_fmt(output, set, settings, <S as fmt::Display>::fmt)
    }

    /// Write the dot-format of the given tree to the given output, formatting
    /// each symbol with `symbol_fmt`.
    pub fn print_with_fmt(
        output: O,
        set: &RadixSet<S>,
        settings: DotPrinterSettings,
        symbol_fmt: fn(&S, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> io::Result<()> {
        let mut visitor = DotPrinter {
            output,
            next_id: 0,
            settings,
            symbol_fmt,
        };

        visitor.output_prelude()?;
        let _ = set.visit_with(&mut visitor)?;
        visitor.output_epilogue()
    }

    fn output_prelude(&mut self) -> io::Result<()> {
        writeln!(self.output, "strict digraph G {{")?;
        writeln!(self.output, "node [shape=circle]")
    }

    fn output_epilogue(&mut self) -> io::Result<()> {
        writeln!(self.output, "}}")
    }

    fn get_id(&mut self) -> usize {
        let new_id = self.next_id;
        self.next_id += 1;
        new_id
    }

    fn format_label(&self, label: &[S]) -> String {
        struct SymbolDisplay<'a, S> {
            symbol: &'a S,
            symbol_fmt: fn(&S, &mut fmt::Formatter<'_>) -> fmt::Result,
        }

        impl<S> fmt::Display for SymbolDisplay<'_, S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (self.symbol_fmt)(self.symbol, f)
            }
        }

        let mut formatted = String::new();
        for (idx, symbol) in label.iter().enumerate() {
            if idx > 0 && self.settings.separate_symbols {
                formatted.push(' ');
            }
            let symbol = SymbolDisplay {
                symbol,
                symbol_fmt: self.symbol_fmt,
            };
            formatted.push_str(&std::format!("{symbol}"));
        }

        escape_label(&formatted)
    }
}

/// Escape a string for use inside a double quoted DOT attribute.
fn escape_label(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl<O: Write, S> Visitor<S> for DotPrinter<O, S> {
    type Output = io::Result<usize>;

    fn default_output(&self) -> Self::Output {
        unimplemented!("this visitor should never use the default output")
    }

    fn combine_output(&self, _: Self::Output, _: Self::Output) -> Self::Output {
        unimplemented!("this visitor should never combine outputs")
    }

    fn visit_node(&mut self, t: NodeRef<'_, S>) -> Self::Output {
        let node_id = self.get_id();
        write!(self.output, "n{node_id} [")?;
        if self.settings.display_node_id {
            write!(self.output, "label=\"{}\"", t.id())?;
        } else {
            write!(self.output, "label=\"\"")?;
        }
        if t.is_terminal() {
            write!(self.output, ", shape=doublecircle")?;
        }
        writeln!(self.output, "]")?;

        // write all the edges
        for edge in t.edges() {
            let child_id = edge.target().visit_with(self)?;
            let label = self.format_label(edge.label());

            writeln!(self.output, "n{node_id} -> n{child_id} [label=\"{label}\"]")?;
        }

        Ok(node_id)
    }
}

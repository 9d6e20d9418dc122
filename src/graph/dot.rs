//! DOT format export.
//!
//! Renders a graph as text in the DOT language consumed by Graphviz tools.
//! The output format is deliberately rigid so downstream tooling can diff it:
//! a header line, one line per node in ascending index order, one line per
//! edge in ascending index order, and a closing brace with no trailing
//! newline.
//!
//! ```text
//! digraph G {
//! "0" [label="A"];
//! "1" [label="B"];
//! "0" -> "1" [label="1"];
//! }
//! ```
//!
//! Undirected graphs use the `graph` header and the `--` edge connector.

use std::fmt::{self, Write};

use crate::graph::{data::GraphData, EdgeId, GraphKind, NodeId};

/// Options controlling DOT output.
///
/// All settings are optional: by default the graph is named `G` and node and
/// edge labels are the payloads' [`Display`](std::fmt::Display) forms.
///
/// # Examples
///
/// ```rust,ignore
/// use snapgraph::graph::{DotOptions, Graph};
///
/// let graph: Graph<&str, u32> = Graph::directed();
/// let options = DotOptions::new()
///     .graph_name("deps")
///     .node_label(|name: &&str| name.to_uppercase());
/// let dot = graph.to_graphviz_with(&options);
/// assert!(dot.starts_with("digraph deps {"));
/// ```
pub struct DotOptions<'a, N, E> {
    pub(crate) graph_name: Option<String>,
    pub(crate) node_label: Option<Box<dyn Fn(&N) -> String + 'a>>,
    pub(crate) edge_label: Option<Box<dyn Fn(&E) -> String + 'a>>,
}

impl<N, E> Default for DotOptions<'_, N, E> {
    fn default() -> Self {
        Self {
            graph_name: None,
            node_label: None,
            edge_label: None,
        }
    }
}

impl<'a, N, E> DotOptions<'a, N, E> {
    /// Creates options with every setting at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the graph name emitted in the header line (default `"G"`).
    #[must_use]
    pub fn graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = Some(name.into());
        self
    }

    /// Sets the function used to render node labels.
    #[must_use]
    pub fn node_label(mut self, f: impl Fn(&N) -> String + 'a) -> Self {
        self.node_label = Some(Box::new(f));
        self
    }

    /// Sets the function used to render edge labels.
    #[must_use]
    pub fn edge_label(mut self, f: impl Fn(&E) -> String + 'a) -> Self {
        self.edge_label = Some(Box::new(f));
        self
    }
}

impl<N, E> fmt::Debug for DotOptions<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotOptions")
            .field("graph_name", &self.graph_name)
            .field("node_label", &self.node_label.as_ref().map(|_| "<fn>"))
            .field("edge_label", &self.edge_label.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Escapes a label for embedding inside a double-quoted DOT string.
///
/// Only the double quote needs replacing; everything else passes through
/// verbatim so the output stays byte-stable for a given label.
fn escape_label(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Renders the backing store as DOT text.
pub(crate) fn render<N: fmt::Display, E: fmt::Display>(
    data: &GraphData<N, E>,
    options: &DotOptions<'_, N, E>,
) -> String {
    let mut out = String::new();
    let name = options.graph_name.as_deref().unwrap_or("G");

    match data.kind {
        GraphKind::Directed => {
            let _ = writeln!(out, "digraph {name} {{");
        }
        GraphKind::Undirected => {
            let _ = writeln!(out, "graph {name} {{");
        }
    }

    let mut node_ids: Vec<NodeId> = data.nodes.keys().copied().collect();
    node_ids.sort_unstable();
    for id in node_ids {
        let payload = &data.nodes[&id];
        let label = match &options.node_label {
            Some(f) => f(payload),
            None => payload.to_string(),
        };
        let _ = writeln!(out, "\"{id}\" [label=\"{}\"];", escape_label(&label));
    }

    let connector = match data.kind {
        GraphKind::Directed => "->",
        GraphKind::Undirected => "--",
    };
    let mut edge_ids: Vec<EdgeId> = data.edges.keys().copied().collect();
    edge_ids.sort_unstable();
    for id in edge_ids {
        let edge = &data.edges[&id];
        let label = match &options.edge_label {
            Some(f) => f(&edge.data),
            None => edge.data.to_string(),
        };
        let _ = writeln!(
            out,
            "\"{}\" {connector} \"{}\" [label=\"{}\"];",
            edge.source,
            edge.target,
            escape_label(&label)
        );
    }

    out.push('}');
    out
}

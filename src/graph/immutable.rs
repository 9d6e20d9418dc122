//! The immutable graph view.
//!
//! This module provides [`Graph`], the frozen, freely shareable form of a
//! graph. A `Graph` is never modified in place: all structural changes happen
//! on a [`MutableGraph`](crate::graph::MutableGraph) obtained from
//! [`begin_mutation`](Graph::begin_mutation), which operates on its own deep
//! copy of the backing store and is frozen back into a new `Graph` when the
//! mutation scope ends.

use std::fmt;

use crate::graph::{
    data::GraphData,
    dot::{self, DotOptions},
    walker::Neighbors,
    EdgeId, GraphKind, MutableGraph, NodeId,
};

/// An immutable graph with arbitrary node and edge payloads.
///
/// Nodes and edges are referenced by arena-style integer ids ([`NodeId`],
/// [`EdgeId`]) that stay valid across mutation scopes: ids are allocated
/// monotonically and never reused, so an id obtained from one generation of
/// the graph refers to the same entity (or to nothing) in every later
/// generation.
///
/// # Construction and Mutation
///
/// A `Graph` starts empty, fixed as either directed or undirected, and is
/// only ever changed by round-tripping through a mutation scope:
///
/// ```rust,ignore
/// use snapgraph::graph::Graph;
///
/// let empty: Graph<&str, u32> = Graph::directed();
/// let graph = empty.mutate(|g| {
///     let a = g.add_node("A");
///     let b = g.add_node("B");
///     g.add_edge(a, b, 10).expect("both endpoints exist");
/// });
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(empty.node_count(), 0); // the original is untouched
/// ```
///
/// # Thread Safety
///
/// `Graph` is [`Send`] and [`Sync`] when its payloads are. Because every
/// mutation scope clones the backing store up front, readers of a published
/// `Graph` can never observe a half-applied mutation. The lazily computed
/// acyclicity answer is stored in a [`std::sync::OnceLock`], so concurrent
/// readers racing on the first [`is_acyclic`](Graph::is_acyclic) call are
/// fine.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    pub(crate) data: GraphData<N, E>,
}

impl<N, E> Graph<N, E> {
    /// Creates an empty graph of the given kind.
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Self {
            data: GraphData::new(kind),
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Returns whether this graph is directed or undirected.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.data.kind
    }

    /// Returns a reference to a node's payload, or `None` for an unknown id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.data.node(id)
    }

    /// Returns `true` if the node is present.
    #[must_use]
    pub fn has_node(&self, id: NodeId) -> bool {
        self.data.contains_node(id)
    }

    /// Returns the number of live nodes. O(1).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.data.node_count()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.node_count() == 0
    }

    /// Returns a reference to an edge's payload, or `None` for an unknown id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.data.edge(id)
    }

    /// Returns `true` if the edge is present.
    #[must_use]
    pub fn has_edge_id(&self, id: EdgeId) -> bool {
        self.data.contains_edge(id)
    }

    /// Returns the `(source, target)` endpoints of an edge, or `None` for an
    /// unknown id.
    #[must_use]
    pub fn edge_endpoints(&self, id: EdgeId) -> Option<(NodeId, NodeId)> {
        self.data.edge_endpoints(id)
    }

    /// Returns the number of live edges. O(1).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.data.edge_count()
    }

    /// Returns `true` if some edge connects `source` to `target`.
    ///
    /// For undirected graphs the check is symmetric:
    /// `has_edge(u, v) == has_edge(v, u)`.
    #[must_use]
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.data.has_edge(source, target)
    }

    /// Returns the neighbor nodes of `node` in adjacency-list (insertion)
    /// order.
    ///
    /// Directed graphs yield each outgoing edge's target; undirected graphs
    /// yield the other endpoint of each incident edge. An unknown node yields
    /// an empty vector rather than an error.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.data.neighbors(node)
    }

    /// Returns an iterator over all live node ids, in no particular order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.data.nodes.keys().copied()
    }

    /// Returns an iterator over all live edge ids, in no particular order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.data.edges.keys().copied()
    }

    /// Returns whether the graph is acyclic.
    ///
    /// The answer is cached: mutation scopes that add or remove edges (or
    /// remove nodes) invalidate it, and the next call recomputes. Adding
    /// nodes alone preserves the cached value, since an isolated node cannot
    /// create a cycle. Directed graphs are checked by peeling zero-in-degree
    /// nodes; undirected graphs by verifying every component is a tree.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.data.is_acyclic()
    }

    /// Returns the raw state of the acyclicity cache without computing.
    ///
    /// `Some(value)` is the last computed answer; `None` means the cache has
    /// been invalidated by a mutation since it was last computed.
    #[must_use]
    pub fn acyclic_hint(&self) -> Option<bool> {
        self.data.acyclic_hint()
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    /// Opens a mutation scope: returns a builder holding a deep copy of this
    /// graph's storage.
    ///
    /// The copy covers the payload maps, both adjacency maps, and the index
    /// allocators (including their free lists), so nothing the builder does
    /// can be observed through `self`. Payload values are cloned; payloads
    /// that are cheap handles (`Arc`, small `Copy` types) keep the copy
    /// cheap.
    ///
    /// # Returns
    ///
    /// A [`MutableGraph`] ready for mutation, to be consumed by
    /// [`MutableGraph::freeze`].
    #[must_use]
    pub fn begin_mutation(&self) -> MutableGraph<N, E> {
        MutableGraph {
            data: self.data.clone(),
        }
    }

    /// Runs a mutation function inside a fresh scope and freezes the result.
    ///
    /// Equivalent to `begin_mutation`, applying `f`, then
    /// [`MutableGraph::freeze`]. Always produces a new `Graph` value, even
    /// when `f` does nothing.
    ///
    /// # Arguments
    ///
    /// * `f` - Mutation function applied to the scope's builder
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let next = graph.mutate(|g| {
    ///     let n = g.add_node("added");
    ///     g.remove_node(n); // net no-op, but `next` is still a new value
    /// });
    /// ```
    #[must_use]
    pub fn mutate<F>(&self, f: F) -> Graph<N, E>
    where
        F: FnOnce(&mut MutableGraph<N, E>),
    {
        let mut builder = self.begin_mutation();
        f(&mut builder);
        builder.freeze()
    }
}

impl<N: fmt::Display, E: fmt::Display> Graph<N, E> {
    /// Renders the graph as DOT text with default options.
    ///
    /// Node and edge labels are the payloads' `Display` forms and the graph
    /// is named `G`. See [`DotOptions`] for customization.
    #[must_use]
    pub fn to_graphviz(&self) -> String {
        dot::render(&self.data, &DotOptions::default())
    }

    /// Renders the graph as DOT text with the given options.
    #[must_use]
    pub fn to_graphviz_with(&self, options: &DotOptions<'_, N, E>) -> String {
        dot::render(&self.data, options)
    }
}

impl<N, E> Neighbors for Graph<N, E> {
    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.data.neighbors(node)
    }
}

//! The mutable graph view.
//!
//! This module provides [`MutableGraph`], the builder form of a graph used
//! inside one mutation scope. It owns a private deep copy of the backing
//! store made by [`Graph::begin_mutation`](crate::graph::Graph::begin_mutation),
//! applies structural edits in place, and is consumed by
//! [`freeze`](MutableGraph::freeze), which moves the storage into a new
//! immutable [`Graph`](crate::graph::Graph) without another copy.

use std::fmt;

use crate::{
    graph::{
        data::GraphData,
        dot::{self, DotOptions},
        walker::Neighbors,
        EdgeId, Graph, GraphKind, NodeId,
    },
    Result,
};

/// A graph builder confined to one mutation scope.
///
/// `MutableGraph` is the only place structural edits happen. It is obtained
/// from [`Graph::begin_mutation`] (or implicitly via [`Graph::mutate`]),
/// edited in place, and then frozen:
///
/// ```rust,ignore
/// use snapgraph::graph::Graph;
///
/// let graph: Graph<&str, u32> = Graph::directed();
/// let mut builder = graph.begin_mutation();
/// let a = builder.add_node("A");
/// let b = builder.add_node("B");
/// builder.add_edge(a, b, 1)?;
/// let graph = builder.freeze();
/// # Ok::<(), snapgraph::Error>(())
/// ```
///
/// Because the builder owns a private copy of the storage, nothing it does is
/// visible through the `Graph` it was created from. `freeze` consumes the
/// builder (Rust's move semantics stand in for a "do not reuse after ending
/// the scope" rule), and the resulting `Graph` takes over the storage without
/// copying it again.
///
/// Removal is forgiving: removing a node or edge id that is not (or no
/// longer) present is a no-op, so removal calls are idempotent. Only
/// [`add_edge`](MutableGraph::add_edge) can fail, when an endpoint does not
/// exist.
///
/// A `MutableGraph` must not be shared across threads while being edited; it
/// performs no internal locking. It still offers the full read-only query
/// surface so mutation code can inspect intermediate states.
#[derive(Debug)]
pub struct MutableGraph<N, E> {
    pub(crate) data: GraphData<N, E>,
}

impl<N, E> MutableGraph<N, E> {
    /// Ends the mutation scope, moving the storage into an immutable
    /// [`Graph`].
    ///
    /// No copy is made; the builder is consumed.
    #[must_use]
    pub fn freeze(self) -> Graph<N, E> {
        Graph { data: self.data }
    }

    // ---- mutation primitives ----

    /// Adds a node with the given payload and returns its id.
    ///
    /// Ids are handed out in increasing order (`0, 1, 2, ...` on a fresh
    /// graph); ids freed by removal are never reissued. Empty adjacency
    /// entries are created for the new node. Never fails, and leaves the
    /// acyclicity cache untouched: an isolated node cannot create a cycle.
    pub fn add_node(&mut self, data: N) -> NodeId {
        self.data.add_node(data)
    }

    /// Adds an edge from `source` to `target` with the given payload and
    /// returns its id.
    ///
    /// The new edge id is appended to `source`'s outgoing list and `target`'s
    /// incoming list; on undirected graphs the mirrored entries are appended
    /// too, so `has_edge(u, v)` and `has_edge(v, u)` agree. Invalidates the
    /// acyclicity cache.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceNodeMissing`](crate::Error::SourceNodeMissing)
    /// if `source` is not a live node, otherwise
    /// [`Error::TargetNodeMissing`](crate::Error::TargetNodeMissing) if
    /// `target` is not. A failed call changes nothing.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        self.data.add_edge(source, target, data)
    }

    /// Removes a node and every edge incident to it.
    ///
    /// Each incident edge - whether it appears in the node's outgoing list,
    /// its incoming list, or both - is removed with the same effect as
    /// [`remove_edge`](MutableGraph::remove_edge). The node's payload and
    /// adjacency entries are then deleted and its index is released to the
    /// allocator's free list. Removing an unknown id is a no-op.
    pub fn remove_node(&mut self, id: NodeId) {
        self.data.remove_node(id);
    }

    /// Removes an edge, unlinking it from both endpoints' adjacency lists.
    ///
    /// Removing an unknown id is a no-op, so removal is idempotent.
    /// Invalidates the acyclicity cache.
    pub fn remove_edge(&mut self, id: EdgeId) {
        self.data.remove_edge(id);
    }

    /// Returns a mutable reference to a node's payload, or `None` for an
    /// unknown id.
    ///
    /// Payload edits do not affect structure and leave the acyclicity cache
    /// alone.
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.data.node_mut(id)
    }

    // ---- queries (same surface as the immutable view) ----

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

    /// Returns `true` if some edge connects `source` to `target` (symmetric
    /// for undirected graphs).
    #[must_use]
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.data.has_edge(source, target)
    }

    /// Returns the neighbor nodes of `node` in adjacency-list order; an
    /// unknown node yields an empty vector.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.data.neighbors(node)
    }

    /// Returns the raw state of the acyclicity cache without computing.
    #[must_use]
    pub fn acyclic_hint(&self) -> Option<bool> {
        self.data.acyclic_hint()
    }
}

impl<N: fmt::Display, E: fmt::Display> MutableGraph<N, E> {
    /// Renders the graph as DOT text with default options.
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

impl<N, E> Neighbors for MutableGraph<N, E> {
    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.data.neighbors(node)
    }
}

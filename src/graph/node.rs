//! Node identifier implementation.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within a graph. The newtype wrapper provides type safety and prevents accidental
//! confusion between node indices and other integer values.

use std::fmt;

/// A strongly-typed identifier for nodes within a graph.
///
/// `NodeId` wraps a `usize` index, providing type safety to prevent accidental
/// mixing of node indices with edge indices or other integer values. Node IDs
/// are assigned sequentially starting from 0 when nodes are added to a
/// [`MutableGraph`](crate::graph::MutableGraph); indices freed by node removal
/// are never handed out again.
///
/// Two `NodeId`s compare equal exactly when their underlying indices are equal,
/// independent of which graph value they were obtained from. This makes them
/// usable as keys in hash maps and sets, and lets ids obtained inside a
/// mutation scope be used against the frozen graph that scope produces.
///
/// # Examples
///
/// ```rust,ignore
/// use snapgraph::graph::{Graph, NodeId};
///
/// let graph: Graph<&str, ()> = Graph::directed();
/// let graph = graph.mutate(|g| {
///     let a: NodeId = g.add_node("A");
///     let b: NodeId = g.add_node("B");
///     assert_ne!(a, b);
/// });
///
/// // NodeIds can be used as keys in collections
/// use std::collections::HashMap;
/// let mut depth: HashMap<NodeId, usize> = HashMap::new();
/// depth.insert(NodeId::new(0), 0);
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`], enabling efficient passing
/// between threads and use in concurrent data structures.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// This constructor is primarily intended for internal use and testing.
    /// Normal usage should obtain `NodeId` values from
    /// [`MutableGraph::add_node`](crate::graph::MutableGraph::add_node).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index (0-based)
    ///
    /// # Returns
    ///
    /// A new `NodeId` wrapping the provided index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    ///
    /// The index is a 0-based position that can be used to index into vectors
    /// or arrays that store per-node data.
    ///
    /// # Returns
    ///
    /// The underlying index value.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    /// Formats the node ID for debugging output.
    ///
    /// The format shows the type name and index value for clear identification
    /// in debug output and logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Formats the node ID for user display.
    ///
    /// The display format is the bare index. This is the rendering used for
    /// node names in DOT output and in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    /// Converts a raw `usize` index into a `NodeId`.
    ///
    /// This conversion is provided for convenience but should be used carefully
    /// to avoid creating ids that don't correspond to live nodes in a graph.
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    /// Extracts the raw index from a `NodeId`.
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

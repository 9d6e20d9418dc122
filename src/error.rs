use thiserror::Error;

use crate::graph::NodeId;

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// The graph API is deliberately forgiving: lookups of unknown ids return
/// `Option`/`bool`, and removing an id that is no longer present is a no-op.
/// The one place a caller can hand the library an impossible request is
/// [`MutableGraph::add_edge`](crate::graph::MutableGraph::add_edge), which
/// needs both endpoints to exist before the edge can be recorded. Those two
/// failure modes are the only variants here.
///
/// A failed `add_edge` leaves the graph untouched; there is no partial state
/// to clean up.
///
/// # Examples
///
/// ```rust,ignore
/// use snapgraph::{graph::{Graph, NodeId}, Error};
///
/// let graph: Graph<&str, ()> = Graph::directed();
/// let mut builder = graph.begin_mutation();
/// let a = builder.add_node("A");
///
/// match builder.add_edge(a, NodeId::new(7), ()) {
///     Err(Error::TargetNodeMissing(node)) => {
///         eprintln!("no such node: {node}");
///     }
///     other => {
///         other.expect("edge insertion");
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The source endpoint passed to `add_edge` is not a live node.
    ///
    /// Either the id was never allocated by this graph's lineage, or the node
    /// has since been removed. The edge is not recorded and no bookkeeping is
    /// touched.
    #[error("Source node {0} does not exist")]
    SourceNodeMissing(NodeId),

    /// The target endpoint passed to `add_edge` is not a live node.
    ///
    /// Checked after the source endpoint, so when both are missing the source
    /// error is the one reported.
    #[error("Target node {0} does not exist")]
    TargetNodeMissing(NodeId),
}

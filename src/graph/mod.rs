//! Arena-indexed graphs with an immutable/mutable duality.
//!
//! This module is the heart of the crate. A graph lives in one of two forms:
//!
//! - [`Graph`] - the frozen form: freely shareable, safe for unsynchronized
//!   concurrent reads, never modified in place.
//! - [`MutableGraph`] - the builder form: created by
//!   [`Graph::begin_mutation`] over a private deep copy of the storage,
//!   edited with the mutation primitives, and consumed by
//!   [`MutableGraph::freeze`], which moves (not copies) the storage into a
//!   new `Graph`.
//!
//! Nodes and edges carry arbitrary payloads and are addressed by
//! [`NodeId`]/[`EdgeId`] - plain integer indices with value equality, so they
//! work as hash-map keys and survive across mutation scopes. Indices are
//! allocated monotonically and never reused.
//!
//! # Components
//!
//! - [`Graph`], [`MutableGraph`]: the two views described above
//! - [`GraphKind`]: directed vs. undirected, fixed at construction
//! - [`NodeId`], [`EdgeId`], [`Edge`]: ids and the per-edge record
//! - [`DfsWalker`], [`BfsWalker`], [`walk_nodes`]: resumable traversal
//! - [`DotOptions`] and the `to_graphviz` methods: DOT export
//!
//! # Example
//!
//! ```rust,ignore
//! use snapgraph::graph::{walk_nodes, BfsWalker, Graph};
//!
//! let graph: Graph<&str, u32> = Graph::directed().mutate(|g| {
//!     let a = g.add_node("A");
//!     let b = g.add_node("B");
//!     let c = g.add_node("C");
//!     g.add_edge(a, b, 1).unwrap();
//!     g.add_edge(a, c, 2).unwrap();
//! });
//!
//! let mut walker = BfsWalker::new(snapgraph::graph::NodeId::new(0));
//! for node in walk_nodes(&graph, &mut walker) {
//!     println!("{node}: {}", graph.node(node).unwrap());
//! }
//!
//! println!("{}", graph.to_graphviz());
//! ```

mod alloc;
mod data;
mod dot;
mod edge;
mod immutable;
mod mutable;
mod node;
mod walker;

pub use data::GraphKind;
pub use dot::DotOptions;
pub use edge::{Edge, EdgeId};
pub use immutable::Graph;
pub use mutable::MutableGraph;
pub use node::NodeId;
pub use walker::{walk_nodes, BfsWalker, DfsWalker, Neighbors, NodeWalk, Walker};

//! # snapgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits from the snapgraph library. Import this module to get quick
//! access to the essential types for building and traversing graphs.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all snapgraph operations
pub use crate::Error;

/// The result type used throughout snapgraph
pub use crate::Result;

// ================================================================================================
// Graph Views
// ================================================================================================

/// The immutable, shareable graph form
pub use crate::graph::Graph;

/// The builder form used inside mutation scopes
pub use crate::graph::MutableGraph;

/// Directed vs. undirected, fixed at construction
pub use crate::graph::GraphKind;

// ================================================================================================
// Identifiers and Records
// ================================================================================================

/// Strongly-typed node and edge identifiers, and the per-edge record
pub use crate::graph::{Edge, EdgeId, NodeId};

// ================================================================================================
// Traversal
// ================================================================================================

/// Resumable traversal walkers and the iterator adapter
pub use crate::graph::{walk_nodes, BfsWalker, DfsWalker, Neighbors, NodeWalk, Walker};

// ================================================================================================
// Export
// ================================================================================================

/// Options for DOT (Graphviz) output
pub use crate::graph::DotOptions;

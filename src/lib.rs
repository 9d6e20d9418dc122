// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # snapgraph
//!
//! Generic, in-memory graphs with arena-style indices, an immutable-snapshot
//! mutation model, resumable traversal walkers, and DOT export.
//!
//! ## Features
//!
//! - **Directed and undirected graphs** with arbitrary node and edge payloads
//! - **Arena indices** - nodes and edges are addressed by small integer ids
//!   with value equality, usable as map keys and stable across mutation
//!   scopes (freed ids are never reused)
//! - **Snapshot mutation model** - an immutable [`graph::Graph`] is edited by
//!   opening a mutation scope over a private copy of its storage and freezing
//!   the result; readers of the original can never observe a half-applied
//!   change
//! - **Resumable walkers** - DFS and BFS as explicit state machines that can
//!   be paused, re-seeded, and reset, or adapted into plain iterators
//! - **DOT export** - byte-stable Graphviz output for diffing and rendering
//!
//! ## Quick Start
//!
//! Add `snapgraph` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! snapgraph = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust,no_run
//! use snapgraph::prelude::*;
//!
//! let graph: Graph<&str, u32> = Graph::directed().mutate(|g| {
//!     let a = g.add_node("A");
//!     let b = g.add_node("B");
//!     g.add_edge(a, b, 1).expect("both endpoints exist");
//! });
//!
//! let mut walker = BfsWalker::new(NodeId::new(0));
//! let order: Vec<NodeId> = walk_nodes(&graph, &mut walker).collect();
//! assert_eq!(order.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a single backing store per graph value and
//! two views over it:
//!
//! - [`graph`] - The graph data structure, mutation scopes, walkers, and the
//!   DOT exporter
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling (a single fallible operation:
//!   adding an edge with a missing endpoint)
//!
//! ### The mutation model
//!
//! All structural edits go through a *mutation scope*:
//!
//! ```rust,no_run
//! use snapgraph::graph::Graph;
//!
//! let v1: Graph<&str, ()> = Graph::directed();
//!
//! // Scoped form: clone storage, edit, freeze.
//! let mut builder = v1.begin_mutation();
//! let a = builder.add_node("A");
//! let v2 = builder.freeze();
//!
//! // Closure form, equivalent:
//! let v3 = v2.mutate(|g| {
//!     g.remove_node(a);
//! });
//! # let _ = v3;
//! ```
//!
//! Each scope deep-copies the node/edge maps, both adjacency maps, and the
//! index allocators, so `v1`, `v2`, and `v3` above are fully independent
//! values; freezing moves the edited storage without another copy. This makes
//! a published `Graph` safe to read from any number of threads while its
//! successors are being built.
//!
//! ### Derived state
//!
//! A graph caches whether it is acyclic. The cache is invalidated by any
//! operation that can change connectivity (adding or removing edges, removing
//! nodes) and recomputed on demand by [`graph::Graph::is_acyclic`]; adding
//! isolated nodes preserves it. The raw tri-state cache is observable via
//! [`graph::Graph::acyclic_hint`].

pub mod graph;
pub mod prelude;

mod error;

pub use error::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

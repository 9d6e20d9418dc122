//! Shared backing store for graph views.
//!
//! [`GraphData`] owns every piece of mutable state a graph has: the node and
//! edge payload maps, the forward and reverse adjacency maps, the two index
//! allocators, and the acyclicity cache. Both [`Graph`](crate::graph::Graph)
//! and [`MutableGraph`](crate::graph::MutableGraph) are thin views over one
//! `GraphData`; entering a mutation scope deep-clones it, freezing moves it.
//!
//! Invariants maintained here:
//! - every edge id in `adjacency[n]` / `reverse_adjacency[n]` refers to a
//!   live edge whose corresponding endpoint is `n`
//! - `adjacency` and `reverse_adjacency` hold an entry (possibly empty) for
//!   every live node, created by `add_node` and deleted by `remove_node`
//! - the acyclicity cache is unset whenever the edge set may have changed

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::OnceLock;

use crate::{
    graph::{alloc::IdAllocator, Edge, EdgeId, NodeId},
    Error, Result,
};

/// Whether a graph's edges are directed or undirected.
///
/// The kind is fixed when the graph is constructed and never changes. For
/// [`Undirected`](GraphKind::Undirected) graphs each edge is mirrored into
/// both endpoints' adjacency lists, so edge queries and traversal treat the
/// two endpoints symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Edges point from their source to their target.
    Directed,
    /// Edges connect their endpoints symmetrically.
    Undirected,
}

/// The backing store shared by the immutable and mutable graph views.
#[derive(Debug, Clone)]
pub(crate) struct GraphData<N, E> {
    pub(crate) kind: GraphKind,
    pub(crate) nodes: HashMap<NodeId, N>,
    pub(crate) edges: HashMap<EdgeId, Edge<E>>,
    pub(crate) adjacency: HashMap<NodeId, Vec<EdgeId>>,
    pub(crate) reverse_adjacency: HashMap<NodeId, Vec<EdgeId>>,
    pub(crate) node_ids: IdAllocator,
    pub(crate) edge_ids: IdAllocator,
    /// Tri-state acyclicity cache: set = known value, unset = invalidated.
    pub(crate) acyclic: OnceLock<bool>,
}

impl<N, E> GraphData<N, E> {
    /// Creates an empty store. An empty graph is trivially acyclic, so the
    /// cache starts out set to `true`.
    pub(crate) fn new(kind: GraphKind) -> Self {
        let acyclic = OnceLock::new();
        let _ = acyclic.set(true);
        Self {
            kind,
            nodes: HashMap::new(),
            edges: HashMap::new(),
            adjacency: HashMap::new(),
            reverse_adjacency: HashMap::new(),
            node_ids: IdAllocator::new(),
            edge_ids: IdAllocator::new(),
            acyclic,
        }
    }

    // ---- queries ----

    pub(crate) fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(&id)
    }

    pub(crate) fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(&id).map(|e| &e.data)
    }

    pub(crate) fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    pub(crate) fn edge_endpoints(&self, id: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(&id).map(|e| (e.source, e.target))
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True iff an edge connects `source` to `target`. For undirected graphs
    /// the match is symmetric in the endpoints.
    pub(crate) fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        let Some(list) = self.adjacency.get(&source) else {
            return false;
        };
        list.iter().any(|id| {
            let edge = &self.edges[id];
            match self.kind {
                GraphKind::Directed => edge.target == target,
                GraphKind::Undirected => {
                    (edge.source == source && edge.target == target)
                        || (edge.source == target && edge.target == source)
                }
            }
        })
    }

    /// Neighbor nodes of `node` in adjacency-list order.
    ///
    /// Directed graphs yield each outgoing edge's target; undirected graphs
    /// yield the other endpoint of each incident edge (the node itself for a
    /// self-loop). An unknown node yields an empty vector.
    pub(crate) fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        let Some(list) = self.adjacency.get(&node) else {
            return Vec::new();
        };
        list.iter()
            .map(|id| {
                let edge = &self.edges[id];
                match self.kind {
                    GraphKind::Directed => edge.target,
                    GraphKind::Undirected => {
                        if edge.source == node {
                            edge.target
                        } else {
                            edge.source
                        }
                    }
                }
            })
            .collect()
    }

    // ---- mutation ----

    /// Inserts a node, creating its (empty) adjacency entries.
    ///
    /// Never fails, and leaves the acyclicity cache alone: an isolated node
    /// cannot create a cycle.
    pub(crate) fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.node_ids.allocate());
        self.nodes.insert(id, data);
        self.adjacency.insert(id, Vec::new());
        self.reverse_adjacency.insert(id, Vec::new());
        id
    }

    /// Inserts an edge between two existing nodes.
    ///
    /// Both endpoints are validated before any field is touched, so a failed
    /// call leaves the store exactly as it was. The source is checked first.
    pub(crate) fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        if !self.nodes.contains_key(&source) {
            return Err(Error::SourceNodeMissing(source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(Error::TargetNodeMissing(target));
        }

        let id = EdgeId::new(self.edge_ids.allocate());
        self.edges.insert(
            id,
            Edge {
                source,
                target,
                data,
            },
        );
        self.adjacency.get_mut(&source).expect("live node has adjacency entry").push(id);
        self.reverse_adjacency
            .get_mut(&target)
            .expect("live node has adjacency entry")
            .push(id);
        if self.kind == GraphKind::Undirected {
            self.adjacency.get_mut(&target).expect("live node has adjacency entry").push(id);
            self.reverse_adjacency
                .get_mut(&source)
                .expect("live node has adjacency entry")
                .push(id);
        }
        self.invalidate_acyclic();
        Ok(id)
    }

    /// Removes a node and every edge incident to it. Unknown ids are a no-op.
    pub(crate) fn remove_node(&mut self, id: NodeId) {
        if !self.nodes.contains_key(&id) {
            return;
        }

        // An edge may appear in both lists (self-loops, undirected mirroring);
        // collect once so each incident edge is removed exactly once.
        let mut incident: Vec<EdgeId> = Vec::new();
        if let Some(list) = self.adjacency.get(&id) {
            incident.extend(list.iter().copied());
        }
        if let Some(list) = self.reverse_adjacency.get(&id) {
            incident.extend(list.iter().copied());
        }
        incident.sort_unstable();
        incident.dedup();
        for edge in incident {
            self.remove_edge(edge);
        }

        self.nodes.remove(&id);
        self.adjacency.remove(&id);
        self.reverse_adjacency.remove(&id);
        self.node_ids.release(id.index());
        self.invalidate_acyclic();
    }

    /// Removes an edge, unlinking it from both endpoints. Unknown ids are a
    /// no-op, which makes removal idempotent.
    pub(crate) fn remove_edge(&mut self, id: EdgeId) {
        let Some(edge) = self.edges.remove(&id) else {
            return;
        };

        if let Some(list) = self.adjacency.get_mut(&edge.source) {
            list.retain(|&e| e != id);
        }
        if let Some(list) = self.reverse_adjacency.get_mut(&edge.target) {
            list.retain(|&e| e != id);
        }
        if self.kind == GraphKind::Undirected {
            if let Some(list) = self.adjacency.get_mut(&edge.target) {
                list.retain(|&e| e != id);
            }
            if let Some(list) = self.reverse_adjacency.get_mut(&edge.source) {
                list.retain(|&e| e != id);
            }
        }
        self.edge_ids.release(id.index());
        self.invalidate_acyclic();
    }

    // ---- acyclicity cache ----

    /// Drops the cached acyclicity value; the next query recomputes it.
    fn invalidate_acyclic(&mut self) {
        self.acyclic = OnceLock::new();
    }

    /// The raw cache state: `Some` = known value, `None` = invalidated.
    pub(crate) fn acyclic_hint(&self) -> Option<bool> {
        self.acyclic.get().copied()
    }

    /// Returns whether the graph is acyclic, computing and caching the answer
    /// if the cache is unset.
    pub(crate) fn is_acyclic(&self) -> bool {
        *self.acyclic.get_or_init(|| self.compute_acyclic())
    }

    fn compute_acyclic(&self) -> bool {
        match self.kind {
            GraphKind::Directed => self.directed_acyclic(),
            GraphKind::Undirected => self.undirected_acyclic(),
        }
    }

    /// Kahn's algorithm: the graph is acyclic iff peeling zero-in-degree
    /// nodes consumes every node.
    fn directed_acyclic(&self) -> bool {
        let mut in_degree: HashMap<NodeId, usize> = self
            .nodes
            .keys()
            .map(|&n| (n, self.reverse_adjacency[&n].len()))
            .collect();

        let mut queue: VecDeque<NodeId> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&n, _)| n)
            .collect();

        let mut peeled = 0usize;
        while let Some(node) = queue.pop_front() {
            peeled += 1;
            for id in &self.adjacency[&node] {
                let target = self.edges[id].target;
                let degree = in_degree.get_mut(&target).expect("edge target is a live node");
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(target);
                }
            }
        }

        peeled == self.nodes.len()
    }

    /// An undirected graph is a forest iff every connected component has
    /// exactly one fewer edge than it has nodes; globally,
    /// `edges == nodes - components`. Self-loops and parallel edges both
    /// break the equality.
    fn undirected_acyclic(&self) -> bool {
        let mut visited: HashSet<NodeId> = HashSet::with_capacity(self.nodes.len());
        let mut components = 0usize;

        for &start in self.nodes.keys() {
            if visited.contains(&start) {
                continue;
            }
            components += 1;
            let mut stack = vec![start];
            visited.insert(start);
            while let Some(node) = stack.pop() {
                for next in self.neighbors(node) {
                    if visited.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        self.edges.len() == self.nodes.len() - components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed() -> GraphData<&'static str, i32> {
        GraphData::new(GraphKind::Directed)
    }

    fn undirected() -> GraphData<&'static str, i32> {
        GraphData::new(GraphKind::Undirected)
    }

    #[test]
    fn test_add_node_creates_adjacency_entries() {
        let mut data = directed();
        let a = data.add_node("A");

        assert_eq!(data.node_count(), 1);
        assert_eq!(data.adjacency[&a], Vec::<EdgeId>::new());
        assert_eq!(data.reverse_adjacency[&a], Vec::<EdgeId>::new());
    }

    #[test]
    fn test_add_edge_validates_source_before_target() {
        let mut data = directed();
        let a = data.add_node("A");
        let absent = NodeId::new(99);
        let also_absent = NodeId::new(98);

        // Both endpoints missing: the source error wins.
        match data.add_edge(absent, also_absent, 1) {
            Err(Error::SourceNodeMissing(n)) => assert_eq!(n, absent),
            result => panic!("expected SourceNodeMissing, got {result:?}"),
        }
        match data.add_edge(a, absent, 1) {
            Err(Error::TargetNodeMissing(n)) => assert_eq!(n, absent),
            result => panic!("expected TargetNodeMissing, got {result:?}"),
        }

        // A failed call must not have touched anything.
        assert_eq!(data.edge_count(), 0);
        assert!(data.adjacency[&a].is_empty());
        assert_eq!(data.acyclic_hint(), Some(true));
    }

    #[test]
    fn test_add_edge_links_both_directions() {
        let mut data = directed();
        let a = data.add_node("A");
        let b = data.add_node("B");
        let e = data.add_edge(a, b, 7).unwrap();

        assert_eq!(data.adjacency[&a], vec![e]);
        assert_eq!(data.reverse_adjacency[&b], vec![e]);
        assert!(data.adjacency[&b].is_empty());
        assert!(data.has_edge(a, b));
        assert!(!data.has_edge(b, a));
        assert_eq!(data.edge(e), Some(&7));
        assert_eq!(data.edge_endpoints(e), Some((a, b)));
    }

    #[test]
    fn test_undirected_edge_is_mirrored() {
        let mut data = undirected();
        let a = data.add_node("A");
        let b = data.add_node("B");
        let e = data.add_edge(a, b, 1).unwrap();

        assert_eq!(data.adjacency[&a], vec![e]);
        assert_eq!(data.adjacency[&b], vec![e]);
        assert!(data.has_edge(a, b));
        assert!(data.has_edge(b, a));
        assert_eq!(data.neighbors(a), vec![b]);
        assert_eq!(data.neighbors(b), vec![a]);
        // One record, mirrored bookkeeping.
        assert_eq!(data.edge_count(), 1);
    }

    #[test]
    fn test_remove_edge_unlinks_everywhere() {
        let mut data = undirected();
        let a = data.add_node("A");
        let b = data.add_node("B");
        let e = data.add_edge(a, b, 1).unwrap();

        data.remove_edge(e);
        assert_eq!(data.edge_count(), 0);
        assert!(data.adjacency[&a].is_empty());
        assert!(data.adjacency[&b].is_empty());
        assert!(data.reverse_adjacency[&a].is_empty());
        assert!(data.reverse_adjacency[&b].is_empty());

        // Second removal of the same id is a no-op.
        data.remove_edge(e);
        assert_eq!(data.edge_count(), 0);
    }

    #[test]
    fn test_remove_node_removes_incident_edges() {
        let mut data = directed();
        let a = data.add_node("A");
        let b = data.add_node("B");
        let c = data.add_node("C");
        data.add_edge(a, b, 1).unwrap();
        data.add_edge(b, c, 2).unwrap();
        data.add_edge(c, a, 3).unwrap();

        data.remove_node(b);

        assert_eq!(data.node_count(), 2);
        assert_eq!(data.edge_count(), 1);
        assert!(data.has_edge(c, a));
        assert!(!data.has_edge(a, b));
        assert!(data.adjacency.get(&b).is_none());
        assert!(data.reverse_adjacency.get(&b).is_none());

        // Unknown node: no-op.
        data.remove_node(b);
        assert_eq!(data.node_count(), 2);
    }

    #[test]
    fn test_remove_node_with_self_loop() {
        let mut data = directed();
        let a = data.add_node("A");
        data.add_edge(a, a, 0).unwrap();

        // The loop edge shows up in both lists but is removed exactly once.
        data.remove_node(a);
        assert_eq!(data.node_count(), 0);
        assert_eq!(data.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_neighbors_undirected() {
        let mut data = undirected();
        let a = data.add_node("A");
        data.add_edge(a, a, 0).unwrap();

        // Mirrored bookkeeping records the loop twice on the same node.
        assert_eq!(data.neighbors(a), vec![a, a]);
        assert!(data.has_edge(a, a));
    }

    #[test]
    fn test_neighbors_unknown_node() {
        let data = directed();
        assert_eq!(data.neighbors(NodeId::new(42)), Vec::<NodeId>::new());
    }

    #[test]
    fn test_acyclic_cache_transitions() {
        let mut data = directed();
        assert_eq!(data.acyclic_hint(), Some(true));

        let a = data.add_node("A");
        let b = data.add_node("B");
        // Node insertion cannot create a cycle.
        assert_eq!(data.acyclic_hint(), Some(true));

        let e = data.add_edge(a, b, 1).unwrap();
        assert_eq!(data.acyclic_hint(), None);

        assert!(data.is_acyclic());
        assert_eq!(data.acyclic_hint(), Some(true));

        data.remove_edge(e);
        assert_eq!(data.acyclic_hint(), None);
        data.is_acyclic();
        data.remove_node(b);
        assert_eq!(data.acyclic_hint(), None);
    }

    #[test]
    fn test_directed_cycle_detection() {
        let mut data = directed();
        let a = data.add_node("A");
        let b = data.add_node("B");
        let c = data.add_node("C");
        data.add_edge(a, b, 1).unwrap();
        data.add_edge(b, c, 2).unwrap();
        assert!(data.is_acyclic());

        data.add_edge(c, a, 3).unwrap();
        assert!(!data.is_acyclic());

        let mut looped = directed();
        let n = looped.add_node("N");
        looped.add_edge(n, n, 0).unwrap();
        assert!(!looped.is_acyclic());
    }

    #[test]
    fn test_undirected_cycle_detection() {
        let mut data = undirected();
        let a = data.add_node("A");
        let b = data.add_node("B");
        let c = data.add_node("C");
        data.add_edge(a, b, 1).unwrap();
        data.add_edge(b, c, 2).unwrap();
        // A path is a tree: acyclic.
        assert!(data.is_acyclic());

        // Closing the triangle creates a cycle.
        data.add_edge(c, a, 3).unwrap();
        assert!(!data.is_acyclic());

        // Parallel edges between two nodes are a cycle as well.
        let mut parallel = undirected();
        let u = parallel.add_node("U");
        let v = parallel.add_node("V");
        parallel.add_edge(u, v, 1).unwrap();
        parallel.add_edge(u, v, 2).unwrap();
        assert!(!parallel.is_acyclic());
    }

    #[test]
    fn test_clone_shares_no_storage() {
        let mut data = directed();
        let a = data.add_node("A");
        let b = data.add_node("B");
        data.add_edge(a, b, 1).unwrap();

        let mut copy = data.clone();
        let c = copy.add_node("C");
        copy.add_edge(b, c, 2).unwrap();
        copy.remove_node(a);

        assert_eq!(data.node_count(), 2);
        assert_eq!(data.edge_count(), 1);
        assert!(data.has_edge(a, b));
        assert_eq!(copy.node_count(), 2);
        assert!(copy.has_edge(b, c));
    }
}

//! Minimum spanning trees (Kruskal's and Prim's algorithms).
//!
//! Both algorithms return an explicit "no tree" outcome for disconnected
//! graphs instead of a partial tree. Kruskal grows a forest by draining a
//! global edge queue with union-find cycle detection; Prim grows a single
//! tree from a start vertex by absorbing the lightest frontier edge.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{DisjointSet, Edge, Graph, GraphError, Result, Vertex};

/// A spanning tree: its edges and their total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree<T> {
    /// Tree edges, in the order the algorithm accepted them.
    pub edges: Vec<Edge<T>>,
    pub total_weight: u64,
}

impl<T> SpanningTree<T> {
    /// The tree of a single-vertex (or empty) graph.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0,
        }
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Tests whether the tree touches `vertex`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool
    where
        T: PartialEq,
    {
        self.edges
            .iter()
            .any(|edge| edge.u == *vertex || edge.v == *vertex)
    }
}

impl<T> Default for SpanningTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Entry in the Kruskal edge queue.
#[derive(Debug, Clone)]
struct EdgeEntry<'g, T> {
    edge: &'g Edge<T>,
}

impl<T> PartialEq for EdgeEntry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.edge.weight == other.edge.weight
    }
}

impl<T> Eq for EdgeEntry<'_, T> {}

impl<T> Ord for EdgeEntry<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (lower weight = higher priority)
        other.edge.weight.cmp(&self.edge.weight)
    }
}

impl<T> PartialOrd for EdgeEntry<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Candidate edge in the Prim frontier.
#[derive(Debug, Clone)]
struct FrontierEdge<'g, T> {
    u: &'g Vertex<T>,
    v: &'g Vertex<T>,
    weight: u64,
}

impl<T> PartialEq for FrontierEdge<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl<T> Eq for FrontierEdge<'_, T> {}

impl<T> Ord for FrontierEdge<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (lower weight = higher priority)
        other.weight.cmp(&self.weight)
    }
}

impl<T> PartialOrd for FrontierEdge<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Graph<T> {
    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Pops edges lightest-first from a queue of the whole edge list and
    /// accepts each edge whose endpoints are still in different union-find
    /// sets. Returns `None` when the graph is disconnected, detected either
    /// by the up-front edge-count check (fewer than V-1 edges cannot span)
    /// or by the accepted-edge count after the queue drains. The empty and
    /// single-vertex graphs yield `Some` of an empty tree.
    ///
    /// Among equal-weight edges the queue order decides; repeated runs on
    /// an unmodified graph return the same tree.
    ///
    /// Time complexity: O(E log E).
    #[instrument(skip(self), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    #[must_use]
    pub fn minimum_spanning_tree_kruskal(&self) -> Option<SpanningTree<T>> {
        let required = self.vertex_count().saturating_sub(1);
        if self.edge_count() < required {
            return None;
        }

        let indices: HashMap<&Vertex<T>, usize> = self
            .vertices()
            .enumerate()
            .map(|(index, vertex)| (vertex, index))
            .collect();
        let mut sets = DisjointSet::with_sets(indices.len());

        let mut queue: BinaryHeap<EdgeEntry<'_, T>> =
            self.edges.iter().map(|edge| EdgeEntry { edge }).collect();

        let mut edges = Vec::new();
        let mut total_weight = 0u64;

        while let Some(EdgeEntry { edge }) = queue.pop() {
            // Self-loops and already-joined endpoints would close a cycle.
            if sets.union(indices[&edge.u], indices[&edge.v]) {
                total_weight = total_weight.saturating_add(edge.weight);
                edges.push(edge.clone());
            }
        }

        if edges.len() < required {
            return None;
        }

        Some(SpanningTree {
            edges,
            total_weight,
        })
    }

    /// Computes a minimum spanning tree with Prim's algorithm.
    ///
    /// Grows the tree from `start`, repeatedly absorbing the lightest
    /// frontier edge. A popped candidate is valid only when exactly one
    /// endpoint is already inside the tree; stale and duplicate candidates
    /// fail that test and are discarded. Absorbing a vertex pushes its
    /// whole adjacency list, so the frontier may hold entries for edges
    /// that later become internal. Disconnection checks and degenerate
    /// graphs behave as in [`Self::minimum_spanning_tree_kruskal`].
    ///
    /// Result edges are synthesized undirected, tree-side endpoint first.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] when `start` is not in the
    /// graph. Validation happens before any tree state is allocated.
    #[instrument(skip(self, start), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn minimum_spanning_tree_prim(
        &self,
        start: &Vertex<T>,
    ) -> Result<Option<SpanningTree<T>>> {
        let Some(start) = self.resolve(start) else {
            return Err(GraphError::VertexNotFound(format!("{:?}", start.payload())));
        };

        let required = self.vertex_count().saturating_sub(1);
        if self.edge_count() < required {
            return Ok(None);
        }

        let mut in_tree = HashSet::new();
        in_tree.insert(start);

        // Seed with the start's incidences; a self-loop is never a valid
        // frontier edge.
        let mut frontier = BinaryHeap::new();
        for neighbor in &self.adjacency[start] {
            if neighbor.vertex != *start {
                frontier.push(FrontierEdge {
                    u: start,
                    v: &neighbor.vertex,
                    weight: neighbor.weight,
                });
            }
        }

        let mut edges = Vec::new();
        let mut total_weight = 0u64;

        while let Some(FrontierEdge { u, v, weight }) = frontier.pop() {
            // Exactly one endpoint inside the tree: both inside is a cycle,
            // both outside is not yet reachable.
            if in_tree.contains(u) == in_tree.contains(v) {
                continue;
            }
            let (inside, absorbed) = if in_tree.contains(u) { (u, v) } else { (v, u) };

            in_tree.insert(absorbed);
            total_weight = total_weight.saturating_add(weight);
            edges.push(Edge::undirected(inside.clone(), absorbed.clone(), weight));

            for neighbor in &self.adjacency[absorbed] {
                frontier.push(FrontierEdge {
                    u: absorbed,
                    v: &neighbor.vertex,
                    weight: neighbor.weight,
                });
            }
        }

        if edges.len() < required {
            return Ok(None);
        }

        Ok(Some(SpanningTree {
            edges,
            total_weight,
        }))
    }
}

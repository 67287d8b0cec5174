// Pedantic lint configuration for graph_core
#![allow(clippy::module_name_repetitions)] // GraphError and DisjointSet keep their domain prefix
#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types

use std::{collections::HashMap, hash::Hash};

use serde::{Deserialize, Serialize};

pub mod algorithms;
mod disjoint_set;
mod distance;
mod error;
#[cfg(feature = "metrics")]
pub mod metrics;

pub use algorithms::{ShortestPaths, SpanningTree, WeightedPath};
pub use disjoint_set::DisjointSet;
pub use distance::Distance;
pub use error::{GraphError, Result};

/// A vertex identified by its payload.
///
/// Two vertices are the same vertex exactly when their payloads are equal;
/// the graph holds at most one vertex per payload value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex<T>(T);

impl<T> Vertex<T> {
    #[must_use]
    pub const fn new(payload: T) -> Self {
        Self(payload)
    }

    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.0
    }

    #[must_use]
    pub fn into_payload(self) -> T {
        self.0
    }
}

/// A weighted neighbor entry in an adjacency list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor<T> {
    pub vertex: Vertex<T>,
    pub weight: u64,
}

/// A weighted edge between two vertices.
///
/// `directed` edges connect `u` to `v` only; undirected edges connect both
/// ways. Weights are unsigned, so negative weights are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    pub u: Vertex<T>,
    pub v: Vertex<T>,
    pub weight: u64,
    pub directed: bool,
}

impl<T> Edge<T> {
    #[must_use]
    pub const fn new(u: Vertex<T>, v: Vertex<T>, weight: u64, directed: bool) -> Self {
        Self {
            u,
            v,
            weight,
            directed,
        }
    }

    /// Edge connecting `u` to `v` only.
    #[must_use]
    pub const fn directed(u: Vertex<T>, v: Vertex<T>, weight: u64) -> Self {
        Self::new(u, v, weight, true)
    }

    /// Edge connecting `u` and `v` in both directions.
    #[must_use]
    pub const fn undirected(u: Vertex<T>, v: Vertex<T>, weight: u64) -> Self {
        Self::new(u, v, weight, false)
    }

    /// Tests whether both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.u == self.v
    }
}

/// An in-memory weighted graph, directed or undirected per edge.
///
/// The adjacency map keys every vertex ever added, including isolated ones
/// and pure targets of directed edges; each undirected edge appears once in
/// the edge list and once in each endpoint's adjacency list. Algorithms
/// borrow the graph immutably, so concurrent read-only runs from several
/// threads are safe and mutation during a run is rejected at compile time.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(crate) adjacency: HashMap<Vertex<T>, Vec<Neighbor<T>>>,
    pub(crate) edges: Vec<Edge<T>>,
}

impl<T: Clone + Eq + Hash> Graph<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Adds an isolated vertex.
    ///
    /// Returns `false` when the vertex was already present; the graph is
    /// unchanged in that case.
    pub fn add_vertex(&mut self, vertex: Vertex<T>) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Adds an edge, registering both endpoints in the adjacency map.
    ///
    /// A directed edge contributes one adjacency entry (`u` to `v`); an
    /// undirected edge contributes one per direction. Parallel edges and
    /// self-loops are stored as given.
    pub fn add_edge(&mut self, edge: Edge<T>) {
        self.adjacency
            .entry(edge.u.clone())
            .or_default()
            .push(Neighbor {
                vertex: edge.v.clone(),
                weight: edge.weight,
            });

        let reverse = self.adjacency.entry(edge.v.clone()).or_default();
        if !edge.directed {
            reverse.push(Neighbor {
                vertex: edge.u.clone(),
                weight: edge.weight,
            });
        }

        self.edges.push(edge);
    }

    /// Tests whether the vertex is present.
    #[must_use]
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Adjacency list of a vertex, in insertion order.
    ///
    /// `None` when the vertex is not present; an empty slice when it has no
    /// outgoing entries.
    #[must_use]
    pub fn neighbors(&self, vertex: &Vertex<T>) -> Option<&[Neighbor<T>]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.adjacency.keys()
    }

    /// All edges, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Borrows the adjacency key equal to `vertex`, tied to the graph's
    /// lifetime. Algorithms use this to run on references instead of clones.
    pub(crate) fn resolve<'g>(&'g self, vertex: &Vertex<T>) -> Option<&'g Vertex<T>> {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }
}

impl<T: Clone + Eq + Hash> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<Edge<T>> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = Edge<T>>>(iter: I) -> Self {
        let mut graph = Self::new();
        for edge in iter {
            graph.add_edge(edge);
        }
        graph
    }
}

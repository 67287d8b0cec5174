//! Single-source shortest paths (Dijkstra's algorithm).
//!
//! Computes minimum total edge weight from a start vertex to every vertex
//! in the graph, plus point-to-point queries with path reconstruction.
//! Requires non-negative weights, which the `u64` edge weight guarantees.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Distance, Graph, GraphError, Result, Vertex};

/// Distances from a single start vertex to every vertex of the graph.
///
/// Every vertex of the graph the run was made on is present as a key;
/// vertices with no path from the start map to [`Distance::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths<T: Eq + Hash> {
    pub distances: HashMap<Vertex<T>, Distance>,
}

impl<T: Eq + Hash> ShortestPaths<T> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            distances: HashMap::new(),
        }
    }

    /// Distance of `vertex` from the start.
    ///
    /// Vertices that were not part of the graph report `Unreachable`.
    #[must_use]
    pub fn distance(&self, vertex: &Vertex<T>) -> Distance {
        self.distances.get(vertex).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_reachable(&self, vertex: &Vertex<T>) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Number of vertices with a finite distance, the start included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances
            .values()
            .filter(|distance| distance.is_finite())
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl<T: Eq + Hash> Default for ShortestPaths<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A start-to-goal path with its total edge weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedPath<T> {
    /// Vertices from start to goal inclusive.
    pub vertices: Vec<Vertex<T>>,
    pub total_weight: u64,
}

impl<T> WeightedPath<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges along the path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Entry in the Dijkstra priority queue.
#[derive(Debug, Clone)]
struct DijkstraEntry<'g, T> {
    vertex: &'g Vertex<T>,
    distance: Distance,
}

impl<T> PartialEq for DijkstraEntry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<T> Eq for DijkstraEntry<'_, T> {}

impl<T> Ord for DijkstraEntry<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (lower distance = higher priority)
        other.distance.cmp(&self.distance)
    }
}

impl<T> PartialOrd for DijkstraEntry<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Graph<T> {
    /// Computes the minimum total edge weight from `start` to every vertex.
    ///
    /// The result maps every vertex of the graph: `start` to zero,
    /// unreachable vertices to [`Distance::Unreachable`]. Superseded queue
    /// entries are tolerated and skipped when popped (lazy deletion), so no
    /// decrease-key operation is needed.
    ///
    /// Time complexity: O((V + E) log V).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] when `start` is not in the
    /// graph. Validation happens before any search state is allocated.
    #[instrument(skip(self, start), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn shortest_paths(&self, start: &Vertex<T>) -> Result<ShortestPaths<T>> {
        let Some(start) = self.resolve(start) else {
            return Err(GraphError::VertexNotFound(format!("{:?}", start.payload())));
        };

        let mut distances: HashMap<&Vertex<T>, Distance> = self
            .vertices()
            .map(|vertex| (vertex, Distance::Unreachable))
            .collect();
        distances.insert(start, Distance::ZERO);

        // Seed the queue with the start's adjacency. Improve-only insertion
        // picks the lightest of any parallel edges; a self-loop cannot
        // improve on zero and is skipped outright.
        let mut heap = BinaryHeap::new();
        for neighbor in &self.adjacency[start] {
            if neighbor.vertex == *start {
                continue;
            }
            let seeded = Distance::Finite(neighbor.weight);
            if seeded < distances[&neighbor.vertex] {
                distances.insert(&neighbor.vertex, seeded);
                heap.push(DijkstraEntry {
                    vertex: &neighbor.vertex,
                    distance: seeded,
                });
            }
        }

        while let Some(DijkstraEntry { vertex, distance }) = heap.pop() {
            if distance > distances[vertex] {
                continue; // superseded by a better relaxation
            }
            for neighbor in &self.adjacency[vertex] {
                let candidate = distance.plus(neighbor.weight);
                if candidate < distances[&neighbor.vertex] {
                    distances.insert(&neighbor.vertex, candidate);
                    heap.push(DijkstraEntry {
                        vertex: &neighbor.vertex,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(ShortestPaths {
            distances: distances
                .into_iter()
                .map(|(vertex, distance)| (vertex.clone(), distance))
                .collect(),
        })
    }

    /// Finds a minimum-weight path from `start` to `goal`.
    ///
    /// Returns `None` when the goal is unreachable. `start == goal` yields
    /// the single-vertex path of weight zero.
    ///
    /// Time complexity: O((V + E) log V), stopping early once the goal is
    /// settled.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] when either endpoint is not
    /// in the graph.
    #[instrument(skip(self, start, goal), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn shortest_path_between(
        &self,
        start: &Vertex<T>,
        goal: &Vertex<T>,
    ) -> Result<Option<WeightedPath<T>>> {
        let Some(start) = self.resolve(start) else {
            return Err(GraphError::VertexNotFound(format!("{:?}", start.payload())));
        };
        let Some(goal) = self.resolve(goal) else {
            return Err(GraphError::VertexNotFound(format!("{:?}", goal.payload())));
        };

        if start == goal {
            return Ok(Some(WeightedPath {
                vertices: vec![start.clone()],
                total_weight: 0,
            }));
        }

        let mut best: HashMap<&Vertex<T>, Distance> = HashMap::new();
        let mut came_from: HashMap<&Vertex<T>, (&Vertex<T>, u64)> = HashMap::new();
        let mut heap = BinaryHeap::new();

        best.insert(start, Distance::ZERO);
        heap.push(DijkstraEntry {
            vertex: start,
            distance: Distance::ZERO,
        });

        while let Some(DijkstraEntry { vertex, distance }) = heap.pop() {
            if distance > best.get(vertex).copied().unwrap_or_default() {
                continue;
            }
            if vertex == goal {
                return Ok(Some(Self::reconstruct(start, goal, &came_from)));
            }
            for neighbor in &self.adjacency[vertex] {
                let candidate = distance.plus(neighbor.weight);
                if candidate < best.get(&neighbor.vertex).copied().unwrap_or_default() {
                    best.insert(&neighbor.vertex, candidate);
                    came_from.insert(&neighbor.vertex, (vertex, neighbor.weight));
                    heap.push(DijkstraEntry {
                        vertex: &neighbor.vertex,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(None)
    }

    /// Walks the predecessor map from `goal` back to `start`.
    fn reconstruct<'g>(
        start: &'g Vertex<T>,
        goal: &'g Vertex<T>,
        came_from: &HashMap<&'g Vertex<T>, (&'g Vertex<T>, u64)>,
    ) -> WeightedPath<T> {
        let mut vertices = vec![goal.clone()];
        let mut total_weight = 0u64;
        let mut current = goal;

        while current != start {
            if let Some(&(parent, weight)) = came_from.get(current) {
                vertices.push(parent.clone());
                total_weight = total_weight.saturating_add(weight);
                current = parent;
            } else {
                break;
            }
        }

        vertices.reverse();
        WeightedPath {
            vertices,
            total_weight,
        }
    }
}

//! Breadth-first and depth-first traversal.
//!
//! Both traversals return vertices in first-discovery order and visit
//! exactly the set of vertices reachable from the start.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::instrument;

use crate::{Graph, GraphError, Result, Vertex};

impl<T: Clone + Eq + Hash + fmt::Debug> Graph<T> {
    /// Visits vertices outward from `start`, nearest first.
    ///
    /// Returns vertices in the order first discovered, beginning with
    /// `start`; each vertex's neighbors are taken in adjacency-list order.
    /// Vertices unreachable from `start` do not appear.
    ///
    /// Time complexity: O(V + E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] when `start` is not in the
    /// graph. Validation happens before any traversal state is allocated.
    #[instrument(skip(self, start), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn breadth_first_search(&self, start: &Vertex<T>) -> Result<Vec<Vertex<T>>> {
        let Some(start) = self.resolve(start) else {
            return Err(GraphError::VertexNotFound(format!("{:?}", start.payload())));
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex.clone());
            for neighbor in &self.adjacency[vertex] {
                if visited.insert(&neighbor.vertex) {
                    queue.push_back(&neighbor.vertex);
                }
            }
        }

        Ok(order)
    }

    /// Visits vertices in pre-order, descending into the first unvisited
    /// neighbor before returning to siblings.
    ///
    /// Output contract matches [`Self::breadth_first_search`]: discovery
    /// order, starting with `start`, reachable vertices only. The descent
    /// runs on an explicit stack of (vertex, next-neighbor-index) frames,
    /// bounding auxiliary memory to O(V) on deeply chained graphs instead
    /// of consuming call stack.
    ///
    /// Time complexity: O(V + E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] when `start` is not in the
    /// graph. Validation happens before any traversal state is allocated.
    #[instrument(skip(self, start), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn depth_first_search(&self, start: &Vertex<T>) -> Result<Vec<Vertex<T>>> {
        let Some(start) = self.resolve(start) else {
            return Err(GraphError::VertexNotFound(format!("{:?}", start.payload())));
        };

        let mut visited = HashSet::new();
        let mut stack = Vec::new();
        let mut order = Vec::new();

        visited.insert(start);
        order.push(start.clone());
        stack.push((start, 0));

        while let Some((vertex, next_index)) = stack.pop() {
            let neighbors = &self.adjacency[vertex];
            if next_index < neighbors.len() {
                // Resume this frame after the descent.
                stack.push((vertex, next_index + 1));
                let neighbor = &neighbors[next_index].vertex;
                if visited.insert(neighbor) {
                    order.push(neighbor.clone());
                    stack.push((neighbor, 0));
                }
            }
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;

    fn v(payload: &str) -> Vertex<String> {
        Vertex::new(payload.to_string())
    }

    /// Undirected graph a-b(1), b-c(2), a-c(4), c-d(1). Adjacency order:
    /// a: [b, c], b: [a, c], c: [b, a, d], d: [c].
    fn diamond_graph() -> Graph<String> {
        let mut graph = Graph::new();
        graph.add_edge(Edge::undirected(v("a"), v("b"), 1));
        graph.add_edge(Edge::undirected(v("b"), v("c"), 2));
        graph.add_edge(Edge::undirected(v("a"), v("c"), 4));
        graph.add_edge(Edge::undirected(v("c"), v("d"), 1));
        graph
    }

    fn payloads(order: &[Vertex<String>]) -> Vec<&str> {
        order.iter().map(|vertex| vertex.payload().as_str()).collect()
    }

    #[test]
    fn test_bfs_discovery_order() {
        let graph = diamond_graph();
        let order = graph.breadth_first_search(&v("a")).unwrap();
        assert_eq!(payloads(&order), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_dfs_preorder() {
        let graph = diamond_graph();
        let order = graph.depth_first_search(&v("a")).unwrap();
        assert_eq!(payloads(&order), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_bfs_dfs_differ_on_branching() {
        // a fans out to b and c; the chain continues below b.
        let mut graph = Graph::new();
        graph.add_edge(Edge::undirected(v("a"), v("b"), 1));
        graph.add_edge(Edge::undirected(v("a"), v("c"), 1));
        graph.add_edge(Edge::undirected(v("b"), v("d"), 1));

        let bfs = graph.breadth_first_search(&v("a")).unwrap();
        let dfs = graph.depth_first_search(&v("a")).unwrap();

        assert_eq!(payloads(&bfs), ["a", "b", "c", "d"]);
        assert_eq!(payloads(&dfs), ["a", "b", "d", "c"]);
    }

    #[test]
    fn test_traversals_visit_same_set() {
        use std::collections::HashSet;

        let mut graph = Graph::new();
        graph.add_edge(Edge::undirected(v("a"), v("b"), 1));
        graph.add_edge(Edge::undirected(v("a"), v("c"), 1));
        graph.add_edge(Edge::undirected(v("c"), v("d"), 1));
        graph.add_edge(Edge::undirected(v("d"), v("b"), 1));
        graph.add_edge(Edge::undirected(v("x"), v("y"), 1));

        let bfs: HashSet<_> = graph.breadth_first_search(&v("a")).unwrap().into_iter().collect();
        let dfs: HashSet<_> = graph.depth_first_search(&v("a")).unwrap().into_iter().collect();

        assert_eq!(bfs, dfs);
        assert_eq!(bfs.len(), 4);
        assert!(!bfs.contains(&v("x")));
    }

    #[test]
    fn test_bfs_visits_each_vertex_once() {
        // Dense cycle: every vertex reachable along several routes.
        let mut graph = Graph::new();
        graph.add_edge(Edge::undirected(v("a"), v("b"), 1));
        graph.add_edge(Edge::undirected(v("b"), v("c"), 1));
        graph.add_edge(Edge::undirected(v("c"), v("a"), 1));

        let order = graph.breadth_first_search(&v("a")).unwrap();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_bfs_skips_unreachable() {
        let mut graph = Graph::new();
        graph.add_edge(Edge::directed(v("a"), v("b"), 1));
        graph.add_vertex(v("island"));

        let order = graph.breadth_first_search(&v("a")).unwrap();
        assert_eq!(payloads(&order), ["a", "b"]);
    }

    #[test]
    fn test_dfs_skips_unreachable() {
        let mut graph = Graph::new();
        graph.add_edge(Edge::directed(v("a"), v("b"), 1));
        graph.add_vertex(v("island"));

        let order = graph.depth_first_search(&v("a")).unwrap();
        assert_eq!(payloads(&order), ["a", "b"]);
    }

    #[test]
    fn test_directed_edges_block_reverse_traversal() {
        let mut graph = Graph::new();
        graph.add_edge(Edge::directed(v("a"), v("b"), 1));

        let order = graph.breadth_first_search(&v("b")).unwrap();
        assert_eq!(payloads(&order), ["b"]);
    }

    #[test]
    fn test_bfs_single_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(v("only"));

        let order = graph.breadth_first_search(&v("only")).unwrap();
        assert_eq!(payloads(&order), ["only"]);
    }

    #[test]
    fn test_bfs_missing_start_is_error() {
        let graph = diamond_graph();
        let err = graph.breadth_first_search(&v("zz")).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound("\"zz\"".to_string()));
    }

    #[test]
    fn test_dfs_missing_start_is_error() {
        let graph = diamond_graph();
        let err = graph.depth_first_search(&v("zz")).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound(_)));
    }

    #[test]
    fn test_bfs_tolerates_self_loop() {
        let mut graph = Graph::new();
        graph.add_edge(Edge::undirected(v("a"), v("a"), 2));
        graph.add_edge(Edge::undirected(v("a"), v("b"), 1));

        let order = graph.breadth_first_search(&v("a")).unwrap();
        assert_eq!(payloads(&order), ["a", "b"]);
    }

    #[test]
    fn test_dfs_deep_chain_stays_iterative() {
        // Deep enough to overflow a recursive descent's call stack.
        let mut graph = Graph::new();
        for i in 0..50_000u32 {
            graph.add_edge(Edge::directed(Vertex::new(i), Vertex::new(i + 1), 1));
        }

        let order = graph.depth_first_search(&Vertex::new(0)).unwrap();
        assert_eq!(order.len(), 50_001);
        assert_eq!(*order.last().unwrap(), Vertex::new(50_000));
    }
}

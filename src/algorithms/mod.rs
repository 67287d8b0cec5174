//! Graph algorithms module.
//!
//! This module provides the core traversal and optimization algorithms:
//! - Breadth-first and depth-first traversal
//! - Single-source shortest paths (Dijkstra)
//! - Minimum spanning trees (Kruskal and Prim)

mod mst;
mod shortest_path;
mod traversal;

pub use mst::SpanningTree;
pub use shortest_path::{ShortestPaths, WeightedPath};

//! Error types for graph algorithm operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for graph algorithm operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphError {
    /// A vertex passed as an argument is not present in the graph.
    ///
    /// Carries the `Debug` rendering of the offending vertex.
    VertexNotFound(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound(vertex) => write!(f, "Vertex not found in graph: {vertex}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type alias for graph algorithm operations.
pub type Result<T> = std::result::Result<T, GraphError>;

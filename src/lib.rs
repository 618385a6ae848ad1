//! Min Route - minimum-cost routing over weighted directed graphs.
//!
//! This library computes the lowest-total-weight path between two nodes of a
//! directed graph using single-source shortest-path relaxation. Node
//! identifiers are generic (anything hashable and ordered), as are edge
//! weights (anything totally ordered with a zero and addition, e.g.
//! `OrderedFloat<f64>` or plain integers).
//!
//! Edge weights must be finite and non-negative. `AdjacencyGraph` enforces
//! this at construction time; the engines additionally fail fast if a custom
//! [`graph::Graph`] implementation hands them a negative weight.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, linear_scan::LinearScan, path::Route, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Start node {0} is not in the graph")]
    UnknownStartNode(String),

    #[error("End node {0} is not in the graph")]
    UnknownEndNode(String),

    #[error("No path from {0} to {1}")]
    PathNotFound(String, String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

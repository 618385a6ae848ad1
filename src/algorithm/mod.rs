pub mod dijkstra;
pub mod linear_scan;
pub mod path;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

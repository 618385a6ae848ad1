use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;

/// Trait representing a read-only weighted directed graph.
///
/// The shortest-path engines never mutate the graph, so a single instance
/// may be shared across concurrent queries. Weights must be finite and
/// non-negative; the engines' results are undefined for negative weights,
/// and they report [`crate::Error::InvalidWeight`] when they encounter one.
pub trait Graph<N, W>: Debug
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns an iterator over the outgoing edges of a node as
    /// `(neighbor, weight)` pairs. Empty for unknown nodes and for nodes
    /// with no outgoing edges.
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

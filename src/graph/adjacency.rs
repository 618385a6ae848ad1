use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A weighted directed graph backed by adjacency lists.
///
/// Nodes are registered explicitly with [`add_node`](Self::add_node) or
/// implicitly as edge endpoints. Negative edge weights are rejected at
/// insertion time, so a successfully built `AdjacencyGraph` always satisfies
/// the non-negativity precondition of the shortest-path engines.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    /// Outgoing edges for each node: node -> [(neighbor, weight)]
    edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            edges: HashMap::new(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// Fails with [`Error::InvalidWeight`] on the first negative weight.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Registers a node without any edges. Re-adding an existing node is a
    /// no-op that preserves its edges.
    pub fn add_node(&mut self, node: N) {
        self.edges.entry(node).or_default();
    }

    /// Adds a directed edge, registering both endpoints as nodes.
    ///
    /// An existing edge between the same pair has its weight replaced.
    /// Negative weights are rejected with [`Error::InvalidWeight`].
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(Error::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            });
        }

        self.edges.entry(to.clone()).or_default();
        let outgoing = self.edges.entry(from).or_default();
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        Ok(())
    }

    /// Returns an iterator over all node identifiers
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    fn default() -> Self {
        AdjacencyGraph::new()
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|edges| edges.len()).sum()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(edges) = self.edges.get(node) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_endpoints_become_nodes() {
        let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        graph.add_edge("a", "b", 3).unwrap();

        assert!(graph.contains_node(&"a"));
        assert!(graph.contains_node(&"b"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&"a", &"b"), Some(3));
    }

    #[test]
    fn readding_edge_replaces_weight() {
        let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        graph.add_edge("a", "b", 3).unwrap();
        graph.add_edge("a", "b", 7).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&"a", &"b"), Some(7));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut graph: AdjacencyGraph<&str, i64> = AdjacencyGraph::new();
        let err = graph.add_edge("a", "b", -1).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { .. }));

        // The failed insertion must not leave a partial edge behind.
        assert_eq!(graph.edge_weight(&"a", &"b"), None);
    }

    #[test]
    fn unknown_node_has_no_edges() {
        let graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        assert_eq!(graph.outgoing_edges(&"ghost").count(), 0);
        assert!(!graph.contains_node(&"ghost"));
    }
}

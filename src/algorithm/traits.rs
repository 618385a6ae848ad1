use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;

use crate::algorithm::path::{reconstruct_path, Route};
use crate::graph::Graph;
use crate::{Error, Result};

/// Distance and predecessor tables produced by a shortest-path engine.
///
/// Nodes absent from `distances` are unreachable from `start`; that is the
/// expected representation, not an error. A node's distance and predecessor
/// entries are always written together, so `predecessors` names the edge
/// that produced the recorded distance. The start node has distance zero
/// and no predecessor entry.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    /// Best known total cost from the start node, per reachable node
    pub distances: HashMap<N, W>,

    /// Predecessor of each reached node in the shortest-path tree
    pub predecessors: HashMap<N, N>,

    /// The start node the tables were computed from
    pub start: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    /// Total cost of the shortest path to `node`, if it is reachable
    pub fn distance_to(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Returns true if `node` was reached from the start node
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }
}

/// Trait for single-source shortest-path engines.
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Zero + Ord + Copy + Debug,
    G: Graph<N, W>,
{
    /// Get the name of the engine
    fn name(&self) -> &'static str;

    /// Compute shortest distances and predecessors from `start` to every
    /// reachable node. Fails with [`Error::UnknownStartNode`] if `start` is
    /// not in the graph, and with [`Error::InvalidWeight`] if a negative
    /// edge weight is encountered.
    fn compute_shortest_distances(
        &self,
        graph: &G,
        start: &N,
    ) -> Result<ShortestPathResult<N, W>>;

    /// Compute the minimum-cost route from `start` to `end`.
    ///
    /// A query with `start == end` yields the single-node route with cost
    /// zero. An unreachable `end` yields [`Error::PathNotFound`], never a
    /// truncated sequence.
    fn find_route(&self, graph: &G, start: &N, end: &N) -> Result<Route<N, W>> {
        if !graph.contains_node(start) {
            return Err(Error::UnknownStartNode(format!("{:?}", start)));
        }
        if !graph.contains_node(end) {
            return Err(Error::UnknownEndNode(format!("{:?}", end)));
        }
        if start == end {
            return Ok(Route {
                nodes: vec![start.clone()],
                cost: W::zero(),
            });
        }

        let result = self.compute_shortest_distances(graph, start)?;
        let cost = result
            .distance_to(end)
            .ok_or_else(|| Error::PathNotFound(format!("{:?}", start), format!("{:?}", end)))?;
        let nodes = reconstruct_path(&result, end)?;

        Ok(Route { nodes, cost })
    }
}

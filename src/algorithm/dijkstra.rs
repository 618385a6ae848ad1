use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::Zero;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::FrontierHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with a binary-heap frontier.
///
/// Relaxed nodes are re-pushed rather than re-prioritized; stale heap
/// entries are skipped on pop by comparing against the distance table.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Zero + Ord + Copy + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_distances(
        &self,
        graph: &G,
        start: &N,
    ) -> Result<ShortestPathResult<N, W>> {
        if !graph.contains_node(start) {
            return Err(Error::UnknownStartNode(format!("{:?}", start)));
        }

        debug!(
            "dijkstra from {:?}: {} nodes, {} edges",
            start,
            graph.node_count(),
            graph.edge_count()
        );

        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();

        distances.insert(start.clone(), W::zero());

        let mut frontier = FrontierHeap::new();
        frontier.push(start.clone(), W::zero());

        while let Some((node, cost)) = frontier.pop() {
            // A shorter path to this node was already settled; the entry is stale.
            if let Some(&best) = distances.get(&node) {
                if best < cost {
                    continue;
                }
            }

            for (next, weight) in graph.outgoing_edges(&node) {
                if weight < W::zero() {
                    return Err(Error::InvalidWeight {
                        from: format!("{:?}", node),
                        to: format!("{:?}", next),
                        weight: format!("{:?}", weight),
                    });
                }

                let candidate = cost + weight;
                let improved = match distances.get(&next) {
                    None => true,
                    Some(&current) => candidate < current,
                };

                if improved {
                    trace!("relax {:?} -> {:?} at {:?}", node, next, candidate);
                    distances.insert(next.clone(), candidate);
                    predecessors.insert(next.clone(), node.clone());
                    frontier.push(next, candidate);
                }
            }
        }

        debug!("dijkstra reached {} nodes from {:?}", distances.len(), start);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            start: start.clone(),
        })
    }
}

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::Zero;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear frontier scan.
///
/// Each iteration scans the distance table for the lowest-cost node not yet
/// in the processed set, making selection O(n) per step. That keeps the
/// engine free of heap bookkeeping and competitive on small graphs; use
/// [`crate::Dijkstra`] for anything large.
#[derive(Debug, Default)]
pub struct LinearScan;

impl LinearScan {
    /// Creates a new linear-scan engine instance
    pub fn new() -> Self {
        LinearScan
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for LinearScan
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Zero + Ord + Copy + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "LinearScan"
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
            "linear scan from {:?}: {} nodes, {} edges",
            start,
            graph.node_count(),
            graph.edge_count()
        );

        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();
        let mut processed: HashSet<N> = HashSet::new();

        distances.insert(start.clone(), W::zero());

        // Terminates when every node with a finite distance has been
        // processed; unreachable nodes never enter the distance table.
        loop {
            let selected = distances
                .iter()
                .filter(|(node, _)| !processed.contains(*node))
                .min_by_key(|&(_, &cost)| cost)
                .map(|(node, &cost)| (node.clone(), cost));

            let Some((node, cost)) = selected else {
                break;
            };

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
                    predecessors.insert(next.clone(), node.clone());
                    distances.insert(next, candidate);
                }
            }

            processed.insert(node);
        }

        debug!(
            "linear scan reached {} nodes from {:?}",
            distances.len(),
            start
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            start: start.clone(),
        })
    }
}

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;

use crate::algorithm::traits::ShortestPathResult;
use crate::{Error, Result};

/// A minimum-cost route: the node sequence from start to end inclusive,
/// plus its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<N, W> {
    /// Ordered node sequence, start first, end last
    pub nodes: Vec<N>,
    /// Sum of edge weights along `nodes`
    pub cost: W,
}

impl<N, W> Route<N, W> {
    /// Number of edges traversed by the route
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Walks predecessor links backward from `end` and reverses the result into
/// a start-to-end node sequence.
///
/// Fails with [`Error::PathNotFound`] when the predecessor chain does not
/// terminate at the start node: either `end` was never reached, or the
/// tables are malformed (a cycle, detected by bounding the walk at the
/// table size).
pub fn reconstruct_path<N, W>(result: &ShortestPathResult<N, W>, end: &N) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Ord + Copy + Debug,
{
    if *end == result.start {
        return Ok(vec![end.clone()]);
    }

    let not_found =
        || Error::PathNotFound(format!("{:?}", result.start), format!("{:?}", end));

    let mut path = vec![end.clone()];
    let mut current = end;
    loop {
        match result.predecessors.get(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
                if *current == result.start {
                    break;
                }
                if path.len() > result.predecessors.len() + 1 {
                    return Err(not_found());
                }
            }
            None => return Err(not_found()),
        }
    }

    path.reverse();
    Ok(path)
}

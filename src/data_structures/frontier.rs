use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-heap over `(cost, node)` pairs used as the frontier of the
/// shortest-path engines: `pop` yields the pending node with the lowest
/// cost. Stale duplicate entries are allowed; the engine discards them on
/// pop by comparing against the distance table.
#[derive(Debug)]
pub struct FrontierHeap<N, C>
where
    N: Clone + Eq + Ord + Debug,
    C: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(C, N)>>,
}

impl<N, C> FrontierHeap<N, C>
where
    N: Clone + Eq + Ord + Debug,
    C: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        FrontierHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of pending entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given cost onto the frontier
    pub fn push(&mut self, node: N, cost: C) {
        self.heap.push(Reverse((cost, node)));
    }

    /// Removes and returns the lowest-cost entry
    pub fn pop(&mut self) -> Option<(N, C)> {
        self.heap.pop().map(|Reverse((cost, node))| (node, cost))
    }

    /// Returns the lowest-cost entry without removing it
    pub fn peek(&self) -> Option<(N, C)> {
        self.heap.peek().map(|Reverse((cost, node))| (node.clone(), *cost))
    }
}

impl<N, C> Default for FrontierHeap<N, C>
where
    N: Clone + Eq + Ord + Debug,
    C: Copy + Ord + Debug,
{
    fn default() -> Self {
        FrontierHeap::new()
    }
}

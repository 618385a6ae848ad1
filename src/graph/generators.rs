use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::AdjacencyGraph;

/// Generates a random directed graph with `n` nodes (identified `0..n`) and
/// roughly `edges_per_node` outgoing edges per node, with weights drawn
/// uniformly from `1.0..100.0`.
///
/// Self-loops are skipped, so sparse inputs may end up with slightly fewer
/// edges than requested. Intended for randomized testing; connectivity is
/// not guaranteed.
pub fn random_graph(n: usize, edges_per_node: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    assert!(n > 1, "graph needs at least two nodes");

    let mut graph = AdjacencyGraph::new();
    let mut rng = rand::thread_rng();

    for node in 0..n {
        graph.add_node(node);
    }

    for from in 0..n {
        for _ in 0..edges_per_node {
            let to = rng.gen_range(0..n);
            if to == from {
                continue;
            }
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            // Weight is positive, insertion cannot fail.
            graph
                .add_edge(from, to, weight)
                .unwrap_or_else(|_| unreachable!());
        }
    }

    graph
}

/// Generates a directed path graph `0 -> 1 -> ... -> n-1` with unit weights.
/// Useful as a graph with a single, known shortest path.
pub fn path_graph(n: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new();
    for node in 0..n {
        graph.add_node(node);
    }
    for from in 0..n.saturating_sub(1) {
        graph
            .add_edge(from, from + 1, OrderedFloat(1.0))
            .unwrap_or_else(|_| unreachable!());
    }
    graph
}

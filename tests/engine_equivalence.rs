use min_route::graph::generators::{path_graph, random_graph};
use min_route::graph::Graph;
use min_route::{Dijkstra, LinearScan, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

// The heap engine and the linear-scan engine implement the same relaxation
// contract with different frontier selection, so their distance tables must
// be identical on any valid graph. Equal-cost routes may differ, but costs
// may not.
#[test]
fn engines_agree_on_random_graphs() {
    let dijkstra = Dijkstra::new();
    let linear = LinearScan::new();

    for _ in 0..10 {
        let graph = random_graph(60, 3);

        let heap_result = dijkstra.compute_shortest_distances(&graph, &0).unwrap();
        let scan_result = linear.compute_shortest_distances(&graph, &0).unwrap();

        assert_eq!(heap_result.distances, scan_result.distances);

        // Every reachable node gets a route whose hops are real edges and
        // whose weights sum to the reported cost.
        for node in 1..60 {
            if !heap_result.is_reachable(&node) {
                continue;
            }

            let route = dijkstra.find_route(&graph, &0, &node).unwrap();
            assert_eq!(Some(route.cost), heap_result.distance_to(&node));

            let mut total = OrderedFloat(0.0);
            for pair in route.nodes.windows(2) {
                let weight = graph
                    .edge_weight(&pair[0], &pair[1])
                    .expect("route must follow existing edges");
                total = total + weight;
            }
            assert_eq!(total, route.cost);
        }
    }
}

#[test]
fn engines_agree_on_a_path_graph() {
    let graph = path_graph(25);
    let dijkstra = Dijkstra::new();
    let linear = LinearScan::new();

    for target in 0..25 {
        let expected = OrderedFloat(target as f64);
        let heap_route = dijkstra.find_route(&graph, &0, &target).unwrap();
        let scan_route = linear.find_route(&graph, &0, &target).unwrap();

        // A path graph has exactly one route to each node.
        assert_eq!(heap_route.cost, expected);
        assert_eq!(heap_route.nodes, (0..=target).collect::<Vec<_>>());
        assert_eq!(scan_route.nodes, heap_route.nodes);
    }
}

//! Property-based tests for the trace generators.
//!
//! Randomized graphs and arrays check the algorithmic guarantees the UI
//! depends on: traced distances agree with an independent shortest-path
//! oracle, visited sets grow monotonically, quicksort emits a sorted
//! permutation, and binary search agrees with the standard library.

use proptest::prelude::*;

use petgraph::graph::UnGraph;
use stepviz_core::{GraphEdge, GraphNode};
use stepviz_trace::{dijkstra, search, sort};

/// Strategy: a small undirected graph with integer-valued weights (as f64)
/// so shortest-path sums stay exact in floating point.
fn graph_strategy() -> impl Strategy<Value = (Vec<GraphNode>, Vec<GraphEdge>)> {
    (2usize..7).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u32..=10), 0..=n * 2).prop_map(move |raw| {
            let nodes: Vec<GraphNode> = (0..n)
                .map(|i| GraphNode::at(format!("n{}", i), i as f64 * 40.0, 0.0))
                .collect();
            let edges: Vec<GraphEdge> = raw
                .iter()
                .enumerate()
                .map(|(k, &(a, b, w))| {
                    GraphEdge::new(
                        format!("e{}", k),
                        format!("n{}", a),
                        format!("n{}", b),
                        w as f64,
                    )
                })
                .collect();
            (nodes, edges)
        })
    })
}

/// Independent oracle: the same graph handed to petgraph's Dijkstra.
fn oracle_distances(
    node_count: usize,
    edges: &[GraphEdge],
) -> std::collections::HashMap<usize, f64> {
    let mut graph = UnGraph::<(), f64>::new_undirected();
    let indices: Vec<_> = (0..node_count).map(|_| graph.add_node(())).collect();
    for edge in edges {
        let a: usize = edge.source[1..].parse().unwrap();
        let b: usize = edge.target[1..].parse().unwrap();
        graph.add_edge(indices[a], indices[b], edge.weight);
    }
    petgraph::algo::dijkstra(&graph, indices[0], None, |e| *e.weight())
        .into_iter()
        .map(|(idx, dist)| (idx.index(), dist))
        .collect()
}

proptest! {
    #[test]
    fn traced_distances_match_petgraph_oracle((nodes, edges) in graph_strategy()) {
        let trace = dijkstra::run(&nodes, &edges, "n0").unwrap();
        let oracle = oracle_distances(nodes.len(), &edges);

        for (i, node) in nodes.iter().enumerate() {
            let traced = trace.distances[&node.id];
            match oracle.get(&i) {
                Some(&expected) => prop_assert_eq!(traced, expected),
                None => prop_assert!(traced.is_infinite()),
            }
        }
    }

    #[test]
    fn visited_sets_grow_monotonically((nodes, edges) in graph_strategy()) {
        let trace = dijkstra::run(&nodes, &edges, "n0").unwrap();

        for (i, step) in trace.steps.iter().enumerate() {
            prop_assert_eq!(step.visited.len(), i + 1);
            prop_assert!(step.visited.contains(&step.current_node));
            if i > 0 {
                let prev = &trace.steps[i - 1].visited;
                prop_assert!(prev.iter().all(|n| step.visited.contains(n)));
            }
        }
    }

    #[test]
    fn reconstructed_paths_span_source_to_target((nodes, edges) in graph_strategy()) {
        let trace = dijkstra::run(&nodes, &edges, "n0").unwrap();

        for node in &nodes {
            if trace.distances[&node.id].is_finite() {
                let path = dijkstra::shortest_path(&trace.predecessors, &node.id);
                prop_assert_eq!(path.first().map(String::as_str), Some("n0"));
                prop_assert_eq!(path.last().map(String::as_str), Some(node.id.as_str()));
            }
        }
    }

    #[test]
    fn steps_never_finalize_unreachable_nodes((nodes, edges) in graph_strategy()) {
        let trace = dijkstra::run(&nodes, &edges, "n0").unwrap();

        for node in &nodes {
            if trace.distances[&node.id].is_infinite() {
                prop_assert!(trace.steps.iter().all(|s| s.current_node != node.id));
                prop_assert_eq!(&trace.predecessors[&node.id], &None);
            }
        }
        prop_assert_eq!(
            trace.steps.len(),
            trace.distances.values().filter(|d| d.is_finite()).count()
        );
    }

    #[test]
    fn quicksort_emits_a_sorted_permutation(input in prop::collection::vec(-100i32..100, 0..12)) {
        let trace = sort::run(&input);

        let mut expected = input.clone();
        expected.sort_unstable();
        prop_assert_eq!(&trace.sorted_array, &expected);

        if !input.is_empty() {
            let last = trace.steps.last().unwrap();
            let mut sorted = last.sorted.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..input.len()).collect::<Vec<usize>>());
        }
    }

    #[test]
    fn quicksort_is_deterministic(input in prop::collection::vec(-100i32..100, 0..10)) {
        let a = sort::run(&input);
        let b = sort::run(&input);
        prop_assert_eq!(a.steps, b.steps);
    }

    #[test]
    fn binary_search_agrees_with_std(values in prop::collection::vec(0i32..200, 0..20), target in 0i32..200) {
        let mut array = values;
        array.sort_unstable();
        array.dedup();

        let trace = search::run(&array, target);
        prop_assert_eq!(trace.found, array.binary_search(&target).is_ok());
        match trace.found_index {
            Some(idx) => prop_assert_eq!(array[idx], target),
            None => prop_assert!(!trace.found),
        }
    }

    #[test]
    fn binary_search_probes_stay_in_bounds(values in prop::collection::vec(0i32..200, 1..20), target in 0i32..200) {
        let mut array = values;
        array.sort_unstable();
        array.dedup();

        let trace = search::run(&array, target);
        for step in &trace.steps {
            prop_assert!(step.mid < array.len());
            prop_assert!(step.left <= step.mid);
            prop_assert!(step.mid <= step.right);
        }
    }

    #[test]
    fn generated_sorted_arrays_hold_the_contract(size in 0usize..30, seed in any::<u64>()) {
        let array = search::generate_sorted_array(size, 100, seed).unwrap();
        prop_assert_eq!(array.len(), size);
        prop_assert!(array.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(array.iter().all(|&v| (1..=100).contains(&v)));
    }
}

//! Dijkstra's shortest-path tracer.
//!
//! Runs the classic algorithm with a binary-heap priority queue and lazy
//! deletion over an undirected, non-negatively weighted graph, recording one
//! [`AlgorithmStep`] per finalized vertex. Each step owns deep copies of the
//! live distance/predecessor maps and the visited set at that instant, so a
//! player can scrub forward and backward through the run without any step
//! being retroactively altered by later mutation.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use stepviz_core::{GraphEdge, GraphNode};

use crate::error::TraceError;
use crate::heap::MinHeap;

/// A neighbor's tentative distance improving during one vertex's relaxation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceUpdate {
    pub node: String,
    pub new_distance: f64,
}

/// An edge whose relaxation caused a distance update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelaxedEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Immutable snapshot taken immediately after one vertex is finalized.
///
/// `distances` has one entry per node (`f64::INFINITY` when unreached);
/// `predecessors` likewise (`None` when unreached). `visited` is cumulative,
/// in finalization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmStep {
    /// The vertex just extracted from the queue and finalized.
    pub current_node: String,
    /// All finalized vertices so far.
    pub visited: IndexSet<String>,
    /// Neighbors whose tentative distance improved during this relaxation.
    pub distance_updates: Vec<DistanceUpdate>,
    /// Edges that caused those updates.
    pub relaxed_edges: Vec<RelaxedEdge>,
    /// Full best-distance map at this instant.
    pub distances: IndexMap<String, f64>,
    /// Full predecessor map at this instant.
    pub predecessors: IndexMap<String, Option<String>>,
}

/// The complete result of a shortest-path run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraTrace {
    /// Final best distances, one entry per node.
    pub distances: IndexMap<String, f64>,
    /// Final predecessors, one entry per node.
    pub predecessors: IndexMap<String, Option<String>>,
    /// One step per finalized vertex, in finalization order.
    pub steps: Vec<AlgorithmStep>,
}

/// Rejects any edge with a negative weight before the run starts.
fn validate_edges(edges: &[GraphEdge]) -> Result<(), TraceError> {
    for edge in edges {
        if edge.weight < 0.0 {
            return Err(TraceError::NegativeWeight {
                source: edge.source.clone(),
                target: edge.target.clone(),
                weight: edge.weight,
            });
        }
    }
    Ok(())
}

/// Builds the adjacency map. Each edge contributes an entry in both
/// directions (the graph is undirected); edges referencing unknown nodes are
/// skipped rather than invented.
fn build_adjacency<'a>(
    nodes: &'a [GraphNode],
    edges: &'a [GraphEdge],
) -> HashMap<&'a str, Vec<(&'a str, f64)>> {
    let mut adjacency: HashMap<&str, Vec<(&str, f64)>> = HashMap::new();
    for node in nodes {
        adjacency.insert(&node.id, Vec::new());
    }
    for edge in edges {
        if !adjacency.contains_key(edge.source.as_str())
            || !adjacency.contains_key(edge.target.as_str())
        {
            continue;
        }
        if let Some(list) = adjacency.get_mut(edge.source.as_str()) {
            list.push((edge.target.as_str(), edge.weight));
        }
        if let Some(list) = adjacency.get_mut(edge.target.as_str()) {
            list.push((edge.source.as_str(), edge.weight));
        }
    }
    adjacency
}

/// Runs Dijkstra's algorithm from `source_id`, producing the full trace.
///
/// Preconditions are checked eagerly, before any computation: every edge
/// weight must be non-negative, and the source must exist among the nodes.
/// A caller never receives a partial trace for invalid input.
pub fn run(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    source_id: &str,
) -> Result<DijkstraTrace, TraceError> {
    validate_edges(edges)?;
    if !nodes.iter().any(|n| n.id == source_id) {
        return Err(TraceError::SourceNotFound {
            id: source_id.to_string(),
        });
    }

    let adjacency = build_adjacency(nodes, edges);

    let mut distances: IndexMap<String, f64> = nodes
        .iter()
        .map(|n| {
            let d = if n.id == source_id { 0.0 } else { f64::INFINITY };
            (n.id.clone(), d)
        })
        .collect();
    let mut predecessors: IndexMap<String, Option<String>> =
        nodes.iter().map(|n| (n.id.clone(), None)).collect();
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut steps: Vec<AlgorithmStep> = Vec::new();

    let mut queue = MinHeap::new();
    queue.insert(source_id.to_string(), 0.0);

    while let Some(entry) = queue.extract_min() {
        let current = entry.key;
        let current_distance = entry.priority;

        // Lazy deletion: relaxation inserts duplicates instead of an exact
        // decrease-key, so a node can surface again after finalization.
        // Stale entries are discarded without recording a step.
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        let mut distance_updates: Vec<DistanceUpdate> = Vec::new();
        let mut relaxed_edges: Vec<RelaxedEdge> = Vec::new();

        if let Some(neighbors) = adjacency.get(current.as_str()) {
            for &(neighbor, weight) in neighbors {
                if visited.contains(neighbor) {
                    continue;
                }

                let candidate = current_distance + weight;
                let best = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);

                if candidate < best {
                    distances.insert(neighbor.to_string(), candidate);
                    predecessors.insert(neighbor.to_string(), Some(current.clone()));
                    queue.insert(neighbor.to_string(), candidate);

                    distance_updates.push(DistanceUpdate {
                        node: neighbor.to_string(),
                        new_distance: candidate,
                    });
                    relaxed_edges.push(RelaxedEdge {
                        from: current.clone(),
                        to: neighbor.to_string(),
                        weight,
                    });
                }
            }
        }

        // Snapshot the live state; every map/set is deep-copied so later
        // relaxations cannot rewrite an already-recorded step.
        steps.push(AlgorithmStep {
            current_node: current,
            visited: visited.clone(),
            distance_updates,
            relaxed_edges,
            distances: distances.clone(),
            predecessors: predecessors.clone(),
        });
    }

    Ok(DijkstraTrace {
        distances,
        predecessors,
        steps,
    })
}

/// Walks the predecessor map backward from `target_id` and returns the path
/// in front-to-back order.
///
/// The walk stops at the first `None` predecessor. For an unreachable target
/// that happens immediately, yielding a single-element list that does NOT
/// start at the source -- callers must check reachability via the distance
/// map, not by trusting the path length.
pub fn shortest_path(
    predecessors: &IndexMap<String, Option<String>>,
    target_id: &str,
) -> Vec<String> {
    let mut path: Vec<String> = Vec::new();
    let mut current = Some(target_id.to_string());

    while let Some(node) = current {
        current = predecessors.get(&node).cloned().flatten();
        path.push(node);
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<GraphNode> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| GraphNode::at(*id, i as f64 * 50.0, 0.0))
            .collect()
    }

    fn edge(id: &str, source: &str, target: &str, weight: f64) -> GraphEdge {
        GraphEdge::new(id, source, target, weight)
    }

    #[test]
    fn line_graph_distances() {
        let nodes = nodes(&["A", "B", "C"]);
        let edges = vec![edge("e1", "A", "B", 2.0), edge("e2", "B", "C", 3.0)];

        let trace = run(&nodes, &edges, "A").unwrap();
        assert_eq!(trace.distances["A"], 0.0);
        assert_eq!(trace.distances["B"], 2.0);
        assert_eq!(trace.distances["C"], 5.0);
        assert_eq!(trace.predecessors["C"], Some("B".to_string()));
        assert_eq!(trace.predecessors["A"], None);
        assert_eq!(trace.steps.len(), 3);
    }

    #[test]
    fn shortcut_beats_direct_edge() {
        // A-C direct costs 10; A-B-C costs 3.
        let nodes = nodes(&["A", "B", "C"]);
        let edges = vec![
            edge("e1", "A", "C", 10.0),
            edge("e2", "A", "B", 1.0),
            edge("e3", "B", "C", 2.0),
        ];

        let trace = run(&nodes, &edges, "A").unwrap();
        assert_eq!(trace.distances["C"], 3.0);
        assert_eq!(trace.predecessors["C"], Some("B".to_string()));

        let path = shortest_path(&trace.predecessors, "C");
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn undirected_traversal_works_against_edge_direction() {
        // Edge declared C -> A, but the run from A must still reach C.
        let nodes = nodes(&["A", "C"]);
        let edges = vec![edge("e1", "C", "A", 4.0)];

        let trace = run(&nodes, &edges, "A").unwrap();
        assert_eq!(trace.distances["C"], 4.0);
    }

    #[test]
    fn negative_weight_rejected_before_any_step() {
        let nodes = nodes(&["A", "B"]);
        let edges = vec![edge("e1", "A", "B", -1.0)];

        match run(&nodes, &edges, "A") {
            Err(TraceError::NegativeWeight { source, target, weight }) => {
                assert_eq!(source, "A");
                assert_eq!(target, "B");
                assert_eq!(weight, -1.0);
            }
            other => panic!("expected NegativeWeight, got {:?}", other),
        }
    }

    #[test]
    fn unknown_source_rejected() {
        let nodes = nodes(&["A", "B"]);
        match run(&nodes, &[], "Z") {
            Err(TraceError::SourceNotFound { id }) => assert_eq!(id, "Z"),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_node_stays_at_infinity_and_never_finalizes() {
        let nodes = nodes(&["A", "B", "X"]);
        let edges = vec![edge("e1", "A", "B", 1.0)];

        let trace = run(&nodes, &edges, "A").unwrap();
        assert!(trace.distances["X"].is_infinite());
        assert_eq!(trace.predecessors["X"], None);
        assert!(trace.steps.iter().all(|s| s.current_node != "X"));
        assert_eq!(trace.steps.len(), 2);
    }

    #[test]
    fn visited_sets_grow_by_one_per_step() {
        let nodes = nodes(&["A", "B", "C", "D"]);
        let edges = vec![
            edge("e1", "A", "B", 1.0),
            edge("e2", "A", "C", 4.0),
            edge("e3", "B", "C", 2.0),
            edge("e4", "C", "D", 1.0),
        ];

        let trace = run(&nodes, &edges, "A").unwrap();
        for (i, step) in trace.steps.iter().enumerate() {
            assert_eq!(step.visited.len(), i + 1);
            if i > 0 {
                let prev = &trace.steps[i - 1].visited;
                assert!(prev.iter().all(|n| step.visited.contains(n)));
            }
            assert!(step.visited.contains(&step.current_node));
        }
    }

    #[test]
    fn recorded_steps_are_not_rewritten_by_later_relaxation() {
        // When B is finalized, C's distance is still the 4.0 seen through A;
        // the improved 3.0 only appears from the step that relaxes B-C.
        let nodes = nodes(&["A", "B", "C"]);
        let edges = vec![
            edge("e1", "A", "B", 1.0),
            edge("e2", "A", "C", 4.0),
            edge("e3", "B", "C", 2.0),
        ];

        let trace = run(&nodes, &edges, "A").unwrap();
        let first = &trace.steps[0];
        assert_eq!(first.current_node, "A");
        assert_eq!(first.distances["C"], 4.0);

        let second = &trace.steps[1];
        assert_eq!(second.current_node, "B");
        assert_eq!(second.distances["C"], 3.0);
        assert_eq!(
            second.distance_updates,
            vec![DistanceUpdate { node: "C".to_string(), new_distance: 3.0 }]
        );
        assert_eq!(
            second.relaxed_edges,
            vec![RelaxedEdge { from: "B".to_string(), to: "C".to_string(), weight: 2.0 }]
        );
    }

    #[test]
    fn source_step_comes_first_with_distance_zero() {
        let nodes = nodes(&["A", "B"]);
        let edges = vec![edge("e1", "A", "B", 7.0)];

        let trace = run(&nodes, &edges, "A").unwrap();
        let first = &trace.steps[0];
        assert_eq!(first.current_node, "A");
        assert_eq!(first.distances["A"], 0.0);
        assert_eq!(first.visited.len(), 1);
    }

    #[test]
    fn zero_weight_edges_are_valid() {
        let nodes = nodes(&["A", "B"]);
        let edges = vec![edge("e1", "A", "B", 0.0)];

        let trace = run(&nodes, &edges, "A").unwrap();
        assert_eq!(trace.distances["B"], 0.0);
    }

    #[test]
    fn single_node_graph() {
        let nodes = nodes(&["A"]);
        let trace = run(&nodes, &[], "A").unwrap();
        assert_eq!(trace.steps.len(), 1);
        assert_eq!(trace.distances["A"], 0.0);
        assert_eq!(shortest_path(&trace.predecessors, "A"), vec!["A"]);
    }

    #[test]
    fn path_to_unreachable_target_is_just_the_target() {
        let nodes = nodes(&["A", "X"]);
        let trace = run(&nodes, &[], "A").unwrap();
        let path = shortest_path(&trace.predecessors, "X");
        assert_eq!(path, vec!["X"]);
        assert!(trace.distances["X"].is_infinite());
    }

    #[test]
    fn trace_serializes_for_the_ui() {
        let nodes = nodes(&["A", "B"]);
        let edges = vec![edge("e1", "A", "B", 2.0)];

        let trace = run(&nodes, &edges, "A").unwrap();
        let json = serde_json::to_string(&trace).unwrap();
        let back: DijkstraTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, back);
    }

    #[test]
    fn parallel_edges_use_the_cheaper_one() {
        let nodes = nodes(&["A", "B"]);
        let edges = vec![edge("e1", "A", "B", 5.0), edge("e2", "A", "B", 2.0)];

        let trace = run(&nodes, &edges, "A").unwrap();
        assert_eq!(trace.distances["B"], 2.0);
    }
}

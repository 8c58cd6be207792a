//! Operation-count estimates for the complexity side panel.
//!
//! The UI shows the learner how the abstract bound relates to their
//! concrete graph: `O((V + E) log V)` next to an estimated operation count
//! computed from the actual node and edge counts.

use serde::{Deserialize, Serialize};

/// Complexity summary for a Dijkstra run over a concrete graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DijkstraComplexity {
    pub node_count: usize,
    pub edge_count: usize,
    /// `(V + E) * log2(V)` -- the binary-heap operation estimate. Zero for
    /// an empty graph.
    pub estimated_operations: f64,
}

impl DijkstraComplexity {
    /// Computes the estimate for a graph with `node_count` nodes and
    /// `edge_count` edges.
    pub fn analyze(node_count: usize, edge_count: usize) -> Self {
        let estimated_operations = if node_count > 0 {
            (node_count + edge_count) as f64 * (node_count as f64).log2()
        } else {
            0.0
        };
        DijkstraComplexity {
            node_count,
            edge_count,
            estimated_operations,
        }
    }

    /// The displayed time bound.
    pub fn time_complexity(&self) -> &'static str {
        "O((V + E) log V)"
    }

    /// The displayed space bound (distances and predecessors).
    pub fn space_complexity(&self) -> &'static str {
        "O(V)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_matches_the_formula() {
        let c = DijkstraComplexity::analyze(8, 12);
        assert_eq!(c.estimated_operations, 20.0 * 3.0);
        assert_eq!(c.time_complexity(), "O((V + E) log V)");
        assert_eq!(c.space_complexity(), "O(V)");
    }

    #[test]
    fn empty_graph_estimates_zero() {
        let c = DijkstraComplexity::analyze(0, 0);
        assert_eq!(c.estimated_operations, 0.0);
    }

    #[test]
    fn single_node_estimates_zero_operations() {
        // log2(1) == 0, so the estimate collapses to zero.
        let c = DijkstraComplexity::analyze(1, 0);
        assert_eq!(c.estimated_operations, 0.0);
    }
}

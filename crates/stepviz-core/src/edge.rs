//! Edge types for the visualizer graph.
//!
//! A [`GraphEdge`] is an unordered pair of node ids with a numeric weight.
//! The graph is undirected: every edge is traversable in both directions,
//! and `source`/`target` only record which endpoint the editor connected
//! first. Weights may be negative at construction time -- the shortest-path
//! tracer rejects them when a run starts, so the failure mode stays visible
//! to the learner instead of being hidden by the editor.

use serde::{Deserialize, Serialize};

/// A weighted, undirected edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Unique id.
    pub id: String,
    /// First endpoint node id.
    pub source: String,
    /// Second endpoint node id.
    pub target: String,
    /// Edge weight. Non-negative for shortest-path runs.
    pub weight: f64,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
    ) -> Self {
        GraphEdge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Returns `true` if either endpoint is `node_id`.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// Returns the endpoint opposite `node_id`, or `None` if `node_id` is
    /// not an endpoint of this edge.
    pub fn other_endpoint(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(&self.target)
        } else if self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touches_both_endpoints() {
        let edge = GraphEdge::new("e1", "A", "B", 3.0);
        assert!(edge.touches("A"));
        assert!(edge.touches("B"));
        assert!(!edge.touches("C"));
    }

    #[test]
    fn other_endpoint_is_symmetric() {
        let edge = GraphEdge::new("e1", "A", "B", 3.0);
        assert_eq!(edge.other_endpoint("A"), Some("B"));
        assert_eq!(edge.other_endpoint("B"), Some("A"));
        assert_eq!(edge.other_endpoint("C"), None);
    }

    #[test]
    fn serde_roundtrip() {
        let edge = GraphEdge::new("e2", "A", "C", 0.5);
        let json = serde_json::to_string(&edge).unwrap();
        let back: GraphEdge = serde_json::from_str(&json).unwrap();
        assert_eq!(edge, back);
    }
}

//! Node types for the visualizer graph.
//!
//! A [`GraphNode`] is what the editor places on the canvas: a unique string
//! id, a 2-D position, and a display label. The position is pure presentation
//! data -- the tracers never read it, but it round-trips through the graph
//! container so a stored graph re-renders where the user left it.

use serde::{Deserialize, Serialize};

/// 2-D canvas placement of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// A vertex in the visualizer graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique id, referenced by edge endpoints and trace output.
    pub id: String,
    /// Where the editor drew this node.
    pub position: Position,
    /// Display label shown on the canvas.
    pub label: String,
}

impl GraphNode {
    /// Creates a node with an explicit label.
    pub fn new(id: impl Into<String>, position: Position, label: impl Into<String>) -> Self {
        GraphNode {
            id: id.into(),
            position,
            label: label.into(),
        }
    }

    /// Creates a node at (x, y) whose label is its id.
    pub fn at(id: impl Into<String>, x: f64, y: f64) -> Self {
        let id = id.into();
        GraphNode {
            label: id.clone(),
            id,
            position: Position::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_uses_id_as_label() {
        let node = GraphNode::at("A", 10.0, 20.0);
        assert_eq!(node.id, "A");
        assert_eq!(node.label, "A");
        assert_eq!(node.position, Position::new(10.0, 20.0));
    }

    #[test]
    fn serde_roundtrip() {
        let node = GraphNode::new("B", Position::new(1.5, -2.0), "Node B");
        let json = serde_json::to_string(&node).unwrap();
        let back: GraphNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}

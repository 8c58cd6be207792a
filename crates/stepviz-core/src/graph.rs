//! Graph: the editor-facing container for nodes and edges.
//!
//! [`Graph`] is the single entry point for building the graph a learner
//! draws on the canvas. It enforces the structural invariants the tracers
//! rely on -- unique node/edge ids and edge endpoints that reference
//! existing nodes -- and provides read accessors for traversals and for
//! handing node/edge snapshots to the trace generators.
//!
//! Internally the topology lives in a petgraph `StableGraph` (undirected),
//! with id-to-index maps layered on top so the string ids used throughout
//! the UI and trace output resolve in O(1). The maps are insertion-ordered,
//! so `nodes()`/`edges()` return elements in the order the user created
//! them.

use indexmap::IndexMap;

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use crate::edge::GraphEdge;
use crate::error::CoreError;
use crate::node::GraphNode;

/// Per-edge payload stored in the underlying petgraph structure. Endpoints
/// are recoverable from the topology, so only the id and weight live here.
#[derive(Debug, Clone)]
struct EdgeAttr {
    id: String,
    weight: f64,
}

/// The undirected, weighted visualizer graph.
///
/// All mutations go through `Graph` methods to maintain the id-uniqueness
/// and endpoint-existence invariants. Every edge is traversable in both
/// directions.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Topology and payloads.
    inner: StableGraph<GraphNode, EdgeAttr, Undirected, u32>,
    /// Node id -> petgraph index, in insertion order.
    node_ids: IndexMap<String, NodeIndex<u32>>,
    /// Edge id -> petgraph index, in insertion order.
    edge_ids: IndexMap<String, EdgeIndex<u32>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Builds a graph from node and edge lists, validating every invariant.
    ///
    /// This is how a JSON document (or the UI's node/edge arrays) becomes a
    /// checked `Graph`.
    pub fn from_lists(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    ) -> Result<Self, CoreError> {
        let mut graph = Graph::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Adds a node. Errors if a node with the same id already exists.
    pub fn add_node(&mut self, node: GraphNode) -> Result<(), CoreError> {
        if self.node_ids.contains_key(&node.id) {
            return Err(CoreError::DuplicateNodeId { id: node.id });
        }
        let id = node.id.clone();
        let idx = self.inner.add_node(node);
        self.node_ids.insert(id, idx);
        Ok(())
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Errors if the edge id is taken or either endpoint is missing. The
    /// weight is accepted as-is: negative weights are a trace-time error,
    /// not a construction error.
    pub fn add_edge(&mut self, edge: GraphEdge) -> Result<(), CoreError> {
        if self.edge_ids.contains_key(&edge.id) {
            return Err(CoreError::DuplicateEdgeId { id: edge.id });
        }
        let source_idx = self.node_index(&edge.source).ok_or_else(|| {
            CoreError::EndpointNotFound {
                edge_id: edge.id.clone(),
                node_id: edge.source.clone(),
            }
        })?;
        let target_idx = self.node_index(&edge.target).ok_or_else(|| {
            CoreError::EndpointNotFound {
                edge_id: edge.id.clone(),
                node_id: edge.target.clone(),
            }
        })?;

        let attr = EdgeAttr {
            id: edge.id.clone(),
            weight: edge.weight,
        };
        let idx = self.inner.add_edge(source_idx, target_idx, attr);
        self.edge_ids.insert(edge.id, idx);
        Ok(())
    }

    /// Removes a node and all edges incident to it.
    ///
    /// Returns the removed node. Errors if the node is not found.
    pub fn remove_node(&mut self, id: &str) -> Result<GraphNode, CoreError> {
        let idx = self
            .node_index(id)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.to_string() })?;

        // Incident edges disappear with the node; drop their id entries too.
        let incident: Vec<String> = self
            .inner
            .edges(idx)
            .map(|e| e.weight().id.clone())
            .collect();
        for edge_id in incident {
            self.edge_ids.shift_remove(&edge_id);
        }

        let node = self
            .inner
            .remove_node(idx)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.to_string() })?;
        self.node_ids.shift_remove(id);
        Ok(node)
    }

    /// Removes an edge by id, returning it. Errors if the edge is not found.
    pub fn remove_edge(&mut self, id: &str) -> Result<GraphEdge, CoreError> {
        let idx = match self.edge_ids.get(id) {
            Some(&idx) => idx,
            None => return Err(CoreError::EdgeNotFound { id: id.to_string() }),
        };
        let edge = self
            .edge_by_index(idx)
            .ok_or_else(|| CoreError::EdgeNotFound { id: id.to_string() })?;
        self.inner.remove_edge(idx);
        self.edge_ids.shift_remove(id);
        Ok(edge)
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    /// Looks up a node by id.
    pub fn get_node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index(id).and_then(|idx| self.inner.node_weight(idx))
    }

    /// Looks up an edge by id, reconstructing its endpoints.
    pub fn get_edge(&self, id: &str) -> Option<GraphEdge> {
        let idx = *self.edge_ids.get(id)?;
        self.edge_by_index(idx)
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains_key(id)
    }

    /// Snapshot of all nodes, in insertion order.
    pub fn nodes(&self) -> Vec<GraphNode> {
        self.node_ids
            .values()
            .filter_map(|&idx| self.inner.node_weight(idx))
            .cloned()
            .collect()
    }

    /// Snapshot of all edges, in insertion order.
    pub fn edges(&self) -> Vec<GraphEdge> {
        self.edge_ids
            .values()
            .filter_map(|&idx| self.edge_by_index(idx))
            .collect()
    }

    /// Returns the `(neighbor id, weight)` pairs reachable from a node.
    /// Each undirected edge shows up from both of its endpoints.
    pub fn neighbors(&self, id: &str) -> Result<Vec<(String, f64)>, CoreError> {
        let idx = self
            .node_index(id)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.to_string() })?;
        Ok(self
            .inner
            .edges(idx)
            .filter_map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                self.inner
                    .node_weight(other)
                    .map(|n| (n.id.clone(), e.weight().weight))
            })
            .collect())
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn node_index(&self, id: &str) -> Option<NodeIndex<u32>> {
        self.node_ids.get(id).copied()
    }

    fn edge_by_index(&self, idx: EdgeIndex<u32>) -> Option<GraphEdge> {
        let attr = self.inner.edge_weight(idx)?;
        let (a, b) = self.inner.edge_endpoints(idx)?;
        let source = self.inner.node_weight(a)?;
        let target = self.inner.node_weight(b)?;
        Some(GraphEdge {
            id: attr.id.clone(),
            source: source.id.clone(),
            target: target.id.clone(),
            weight: attr.weight,
        })
    }
}

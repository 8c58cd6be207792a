//! Core error types for stepviz-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! all anticipated failure modes in the graph editor model.

use thiserror::Error;

/// Core errors produced by the stepviz-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attempting to add a node whose id is already present in the graph.
    #[error("duplicate node id: '{id}'")]
    DuplicateNodeId { id: String },

    /// Attempting to add an edge whose id is already present in the graph.
    #[error("duplicate edge id: '{id}'")]
    DuplicateEdgeId { id: String },

    /// An edge references an endpoint node that does not exist.
    #[error("edge '{edge_id}' references missing node '{node_id}'")]
    EndpointNotFound { edge_id: String, node_id: String },

    /// A node id was not found in the graph.
    #[error("node not found: '{id}'")]
    NodeNotFound { id: String },

    /// An edge id was not found in the graph.
    #[error("edge not found: '{id}'")]
    EdgeNotFound { id: String },
}

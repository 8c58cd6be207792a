//! Input error types for the trace generators.
//!
//! All validation happens eagerly at the start of a run, so a caller never
//! receives a partial trace alongside an error. These are input errors, not
//! transient conditions -- there is no retry logic anywhere in the tracers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors produced when a trace run rejects its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TraceError {
    /// An edge carries a negative weight. Dijkstra's algorithm does not
    /// support negative weights.
    NegativeWeight {
        source: String,
        target: String,
        weight: f64,
    },

    /// The requested source node does not exist in the graph.
    SourceNotFound { id: String },

    /// Asked to sample more distinct values than the range holds. Rejection
    /// sampling would loop forever, so this fails before drawing anything.
    InvalidSampleRange { size: usize, max_value: i32 },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::NegativeWeight {
                source,
                target,
                weight,
            } => write!(
                f,
                "negative weight {weight} on edge {source} -> {target}: Dijkstra's algorithm does not support negative weights"
            ),
            TraceError::SourceNotFound { id } => {
                write!(f, "source node '{id}' does not exist in the graph")
            }
            TraceError::InvalidSampleRange { size, max_value } => {
                write!(f, "cannot sample {size} distinct values from [1, {max_value}]")
            }
        }
    }
}

impl std::error::Error for TraceError {}

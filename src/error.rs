//! Error type shared by every fallible graph operation.

use std::fmt::Debug;

use crate::EdgeKey;

/// Errors reported by the graph container and by algorithms written against
/// [`GraphLike`](crate::GraphLike).
///
/// Node identifiers are stored in their `Debug` rendering so the error type
/// does not depend on the node type of the graph that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node required by the operation is not in the graph.
    #[error("The node {node} is not in the graph.")]
    NodeNotFound { node: String },

    /// No edge connects the two nodes.
    #[error("The edge {u}-{v} is not in the graph.")]
    EdgeNotFound { u: String, v: String },

    /// The two nodes are connected, but not by an edge with this key.
    #[error("The edge {u}-{v} with key {key} is not in the graph.")]
    EdgeKeyNotFound { u: String, v: String, key: EdgeKey },

    /// The operation does not support graphs with this capability, e.g.
    /// `"directed"` or `"multigraph"`.
    #[error("{operation} not implemented for {capability} type")]
    NotImplementedFor {
        operation: &'static str,
        capability: &'static str,
    },

    /// A parameter is malformed, such as a weight attribute that is not a
    /// number.
    #[error("{0}")]
    InvalidArgument(String),

    /// The operation is mathematically undefined for this input.
    #[error("{0}")]
    PointlessConcept(String),

    /// An internal invariant of the graph storage does not hold.
    #[error("graph invariant violated: {0}")]
    Inconsistent(String),
}

impl GraphError {
    pub fn node_not_found<N: Debug>(node: &N) -> Self {
        GraphError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }

    pub fn edge_not_found<N: Debug>(u: &N, v: &N) -> Self {
        GraphError::EdgeNotFound {
            u: format!("{:?}", u),
            v: format!("{:?}", v),
        }
    }

    pub fn edge_key_not_found<N: Debug>(u: &N, v: &N, key: EdgeKey) -> Self {
        GraphError::EdgeKeyNotFound {
            u: format!("{:?}", u),
            v: format!("{:?}", v),
            key,
        }
    }

    /// True for the structural "not found" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound { .. }
                | GraphError::EdgeNotFound { .. }
                | GraphError::EdgeKeyNotFound { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

//! Capability inspection and the entry checks algorithms use to reject
//! graph variants they do not support.

use crate::{
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    error::{GraphError, Result},
    graph_like::GraphLike,
};

/// The directedness and multiplicity of a graph variant.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Capabilities {
    pub directed: bool,
    pub multigraph: bool,
}

impl Capabilities {
    pub fn of<D: Directedness, M: EdgeMultiplicity>() -> Self {
        Self {
            directed: D::is_directed(),
            multigraph: M::allows_parallel_edges(),
        }
    }

    /// The conventional name of the variant, e.g. `"MultiDiGraph"`.
    pub fn describe(&self) -> &'static str {
        match (self.directed, self.multigraph) {
            (false, false) => "Graph",
            (true, false) => "DiGraph",
            (false, true) => "MultiGraph",
            (true, true) => "MultiDiGraph",
        }
    }
}

/// Fails with [`GraphError::NotImplementedFor`] on directed graphs.
pub fn ensure_undirected<G: GraphLike>(graph: &G, operation: &'static str) -> Result<()> {
    if graph.is_directed() {
        return Err(GraphError::NotImplementedFor {
            operation,
            capability: "directed",
        });
    }
    Ok(())
}

/// Fails with [`GraphError::NotImplementedFor`] on undirected graphs.
pub fn ensure_directed<G: GraphLike>(graph: &G, operation: &'static str) -> Result<()> {
    if !graph.is_directed() {
        return Err(GraphError::NotImplementedFor {
            operation,
            capability: "undirected",
        });
    }
    Ok(())
}

/// Fails with [`GraphError::NotImplementedFor`] on multigraphs.
pub fn ensure_simple<G: GraphLike>(graph: &G, operation: &'static str) -> Result<()> {
    if graph.is_multigraph() {
        return Err(GraphError::NotImplementedFor {
            operation,
            capability: "multigraph",
        });
    }
    Ok(())
}

/// Fails with [`GraphError::PointlessConcept`] on the graph with no nodes.
/// `concept` names what is undefined, e.g. `"Connectivity"`.
pub fn ensure_not_null<G: GraphLike>(graph: &G, concept: &str) -> Result<()> {
    if graph.number_of_nodes() == 0 {
        return Err(GraphError::PointlessConcept(format!(
            "{} is undefined for the null graph.",
            concept
        )));
    }
    Ok(())
}

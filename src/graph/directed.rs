//! Operations that only make sense for directed graphs.

use crate::{
    directedness::Directed,
    edge_multiplicity::EdgeMultiplicity,
    error::{GraphError, Result},
    node::NodeKey,
    views::{EdgeRef, Neighbors},
};

use super::{Graph, edges::count_edges};

impl<N, M> Graph<N, Directed, M>
where
    N: NodeKey,
    M: EdgeMultiplicity,
{
    /// Nodes reachable from `node` over one edge.
    pub fn successors(&self, node: &N) -> Result<Neighbors<'_, N, M>> {
        self.neighbors(node)
    }

    /// Nodes with an edge into `node`.
    pub fn predecessors(&self, node: &N) -> Result<Neighbors<'_, N, M>> {
        self.edges
            .predecessors(node)
            .map(Neighbors::new)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// True if there is an edge `u -> v`.
    pub fn has_successor(&self, u: &N, v: &N) -> bool {
        self.has_edge(u, v)
    }

    /// True if there is an edge `v -> u`.
    pub fn has_predecessor(&self, u: &N, v: &N) -> bool {
        self.has_edge(v, u)
    }

    pub fn out_degree(&self, node: &N) -> Result<usize> {
        self.edges
            .successors(node)
            .map(count_edges::<N, M>)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    pub fn in_degree(&self, node: &N) -> Result<usize> {
        self.edges
            .predecessors(node)
            .map(count_edges::<N, M>)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    pub fn out_degree_weighted(&self, node: &N, weight_key: &str) -> Result<f64> {
        let out = self
            .edges
            .successors(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        self.weight_sum(node, out, weight_key, true)
    }

    pub fn in_degree_weighted(&self, node: &N, weight_key: &str) -> Result<f64> {
        let incoming = self
            .edges
            .predecessors(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        self.weight_sum(node, incoming, weight_key, true)
    }

    /// Edges leaving `node`.
    pub fn out_edges<'g>(
        &'g self,
        node: &N,
    ) -> Result<impl Iterator<Item = EdgeRef<'g, N>> + use<'g, N, M>> {
        self.edges_of(node)
    }

    /// Edges entering `node`, reported with `node` as the target.
    pub fn in_edges<'g>(
        &'g self,
        node: &N,
    ) -> Result<impl Iterator<Item = EdgeRef<'g, N>> + use<'g, N, M>> {
        let target = self
            .nodes
            .key(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        let incoming = self
            .edges
            .predecessors(target)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        Ok(self.slot_edges(target, incoming, true))
    }
}

//! Read-only induced subgraph views.

use std::{borrow::Borrow, collections::HashSet, fmt::Debug};

use crate::{
    attrs::Attrs,
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    edge_slots::EdgeSlots,
    error::{GraphError, Result},
    graph::Graph,
    graph_like::GraphLike,
    node::NodeKey,
    views::EdgeRef,
};

/// The subgraph of a [`Graph`] induced by a node set, without copying.
///
/// Only nodes of the set are visible, and only edges with both endpoints in
/// the set.  Created by [`Graph::subgraph_view`]; materialize it with
/// [`to_graph`](Self::to_graph).
pub struct SubgraphView<'g, N, D, M: EdgeMultiplicity> {
    graph: &'g Graph<N, D, M>,
    included: HashSet<N>,
}

impl<'g, N, D, M> SubgraphView<'g, N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    pub(crate) fn new<I>(graph: &'g Graph<N, D, M>, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
    {
        let included = nodes
            .into_iter()
            .filter_map(|node| {
                let node = node.borrow();
                graph.has_node(node).then(|| node.clone())
            })
            .collect();
        Self { graph, included }
    }

    /// The graph this view looks into.
    pub fn parent(&self) -> &'g Graph<N, D, M> {
        self.graph
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.included.contains(node)
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.has_node(u) && self.has_node(v) && self.graph.has_edge(u, v)
    }

    /// Visible nodes, in the parent's insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &'g N> + '_ {
        self.graph
            .nodes()
            .filter(move |node| self.included.contains(*node))
    }

    pub fn number_of_nodes(&self) -> usize {
        self.included.len()
    }

    /// Visible edges, in the parent's edge order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'g, N>> + '_ {
        self.graph.edges().filter(move |edge| {
            self.included.contains(edge.source) && self.included.contains(edge.target)
        })
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges().count()
    }

    /// Visible neighbors of `node` (successors when directed).
    pub fn neighbors<'v>(
        &'v self,
        node: &N,
    ) -> Result<impl Iterator<Item = &'g N> + use<'g, 'v, N, D, M>> {
        if !self.has_node(node) {
            return Err(GraphError::node_not_found(node));
        }
        Ok(self
            .graph
            .neighbors(node)?
            .filter(move |neighbor| self.included.contains(*neighbor)))
    }

    /// Degree counted over visible edges only.
    pub fn degree(&self, node: &N) -> Result<usize> {
        if !self.has_node(node) {
            return Err(GraphError::node_not_found(node));
        }
        let adjacency = self.graph.adj(node)?;
        let mut degree: usize = adjacency
            .iter()
            .filter(|(other, _, _)| self.included.contains(*other))
            .map(|(other, _, _)| if !D::is_directed() && other == node { 2 } else { 1 })
            .sum();
        if D::is_directed() {
            degree += self.graph.predecessor_map(node).map_or(0, |incoming| {
                incoming
                    .iter()
                    .filter(|(other, _)| self.included.contains(*other))
                    .map(|(_, slots)| slots.len())
                    .sum()
            });
        }
        Ok(degree)
    }

    pub fn node_attrs(&self, node: &N) -> Result<&'g Attrs> {
        if !self.has_node(node) {
            return Err(GraphError::node_not_found(node));
        }
        self.graph.node_attrs(node)
    }

    /// Copies the visible part of the parent into an independent graph.
    pub fn to_graph(&self) -> Graph<N, D, M> {
        let mut graph = Graph::new();
        *graph.graph_attrs_mut() = self.graph.graph_attrs().clone();
        for (node, attrs) in self.graph.nodes_with_attrs() {
            if self.included.contains(node) {
                graph.add_node_with_attrs(node.clone(), attrs.clone());
            }
        }
        for edge in self.edges() {
            graph.insert_edge(
                edge.source.clone(),
                edge.target.clone(),
                Some(edge.key),
                edge.attrs.clone(),
            );
        }
        graph
    }
}

impl<N, D, M> GraphLike for SubgraphView<'_, N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    type Node = N;

    fn is_directed(&self) -> bool {
        D::is_directed()
    }

    fn is_multigraph(&self) -> bool {
        M::allows_parallel_edges()
    }

    fn number_of_nodes(&self) -> usize {
        SubgraphView::number_of_nodes(self)
    }

    fn number_of_edges(&self) -> usize {
        SubgraphView::number_of_edges(self)
    }

    fn has_node(&self, node: &N) -> bool {
        SubgraphView::has_node(self, node)
    }

    fn has_edge(&self, u: &N, v: &N) -> bool {
        SubgraphView::has_edge(self, u, v)
    }

    fn node_ids(&self) -> impl Iterator<Item = &N> {
        let included = &self.included;
        self.graph
            .nodes()
            .filter(move |node| included.contains(*node))
    }

    fn neighbor_ids(&self, node: &N) -> Result<impl Iterator<Item = &N>> {
        if !SubgraphView::has_node(self, node) {
            return Err(GraphError::node_not_found(node));
        }
        let included = &self.included;
        Ok(self
            .graph
            .neighbors(node)?
            .filter(move |neighbor| included.contains(*neighbor)))
    }

    fn degree(&self, node: &N) -> Result<usize> {
        SubgraphView::degree(self, node)
    }

    fn node_attributes(&self, node: &N) -> Result<&Attrs> {
        self.node_attrs(node)
    }
}

impl<N, D, M> Debug for SubgraphView<'_, N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubgraphView")
            .field("nodes", &self.nodes().collect::<Vec<_>>())
            .field("edges", &self.number_of_edges())
            .finish()
    }
}

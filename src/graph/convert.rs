//! Copies and conversions between graph variants.
//!
//! Every conversion produces an independent graph: attribute maps are deep
//! copied, so mutating the result never affects the source.

use std::{borrow::Borrow, collections::HashSet};

use crate::{
    directedness::{Directed, Directedness, Undirected},
    edge_multiplicity::EdgeMultiplicity,
    edge_slots::EdgeSlots,
    node::NodeKey,
    subgraph::SubgraphView,
    tracing_support::{debug, debug_span},
    views::EdgeRef,
};

use super::Graph;

impl<N, D, M> Graph<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    /// A deep copy; same as `clone()`.
    pub fn copy(&self) -> Self {
        let _span = debug_span!("copy").entered();
        let graph = self.clone();
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "copied graph"
        );
        graph
    }

    /// A directed copy.  Each undirected edge becomes a pair of opposite
    /// edges with their own attribute copies and the same key.
    pub fn to_directed(&self) -> Graph<N, Directed, M> {
        let _span = debug_span!("to_directed").entered();
        let mut graph = self.empty_like();
        for edge in self.edges() {
            graph.insert_edge(
                edge.source.clone(),
                edge.target.clone(),
                Some(edge.key),
                edge.attrs.clone(),
            );
            if !D::is_directed() && edge.source != edge.target {
                graph.insert_edge(
                    edge.target.clone(),
                    edge.source.clone(),
                    Some(edge.key),
                    edge.attrs.clone(),
                );
            }
        }
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "converted to directed"
        );
        graph
    }

    /// An undirected copy.  Opposite directed edges with the same key become
    /// one edge whose attributes are the union of both; where both define a
    /// key, the edge whose source is the greater node wins.
    pub fn to_undirected(&self) -> Graph<N, Undirected, M> {
        let _span = debug_span!("to_undirected").entered();
        let graph = self.undirected_from(|_| true);
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "converted to undirected"
        );
        graph
    }

    /// Like [`to_undirected`](Self::to_undirected), but only keeps edges that
    /// exist in both directions (with the same key in a multigraph).
    pub fn to_undirected_reciprocal(&self) -> Graph<N, Undirected, M> {
        let _span = debug_span!("to_undirected_reciprocal").entered();
        let graph = self.undirected_from(|edge| {
            self.edges
                .slots(edge.target, edge.source)
                .is_some_and(|slots| slots.get(edge.key).is_some())
        });
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "converted to reciprocal undirected"
        );
        graph
    }

    /// Builds the undirected graph from the edges accepted by `keep`.  Edges
    /// pointing from a smaller to a greater node go in first, so the opposite
    /// edge's attributes override them when both are present.
    fn undirected_from<F>(&self, keep: F) -> Graph<N, Undirected, M>
    where
        F: Fn(&EdgeRef<'_, N>) -> bool,
    {
        let mut graph = self.empty_like();
        let (forward, backward): (Vec<_>, Vec<_>) = self
            .edges()
            .filter(|edge| keep(edge))
            .partition(|edge| edge.source <= edge.target);
        for edge in forward.into_iter().chain(backward) {
            graph.insert_edge(
                edge.source.clone(),
                edge.target.clone(),
                Some(edge.key),
                edge.attrs.clone(),
            );
        }
        graph
    }

    /// The subgraph induced by `nodes`, as an independent graph.  Unknown
    /// nodes are ignored.
    pub fn subgraph<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
    {
        let _span = debug_span!("subgraph").entered();
        self.subgraph_view(nodes).to_graph()
    }

    /// A read-only view of the subgraph induced by `nodes`.  Unknown nodes
    /// are ignored.
    pub fn subgraph_view<I>(&self, nodes: I) -> SubgraphView<'_, N, D, M>
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
    {
        SubgraphView::new(self, nodes)
    }

    /// An independent graph holding the listed edges and their endpoints.
    /// Every parallel edge between a listed pair is included; pairs that are
    /// not edges are ignored.
    pub fn edge_subgraph<I>(&self, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let _span = debug_span!("edge_subgraph").entered();
        let wanted: HashSet<(N, N)> = edges
            .into_iter()
            .map(|(u, v)| {
                if D::is_directed() || u <= v {
                    (u, v)
                } else {
                    (v, u)
                }
            })
            .collect();
        let selected: Vec<_> = self
            .edges()
            .filter(|edge| {
                let pair = if D::is_directed() || edge.source <= edge.target {
                    (edge.source.clone(), edge.target.clone())
                } else {
                    (edge.target.clone(), edge.source.clone())
                };
                wanted.contains(&pair)
            })
            .collect();
        let endpoints: HashSet<&N> = selected
            .iter()
            .flat_map(|edge| [edge.source, edge.target])
            .collect();

        let mut graph = Self::new();
        graph.attrs = self.attrs.clone();
        for (node, attrs) in self.nodes.iter() {
            if endpoints.contains(node) {
                graph.add_node_with_attrs(node.clone(), attrs.clone());
            }
        }
        for edge in selected {
            graph.insert_edge(
                edge.source.clone(),
                edge.target.clone(),
                Some(edge.key),
                edge.attrs.clone(),
            );
        }
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "built edge subgraph"
        );
        graph
    }
}

impl<N, M> Graph<N, Directed, M>
where
    N: NodeKey,
    M: EdgeMultiplicity,
{
    /// A copy with every edge reversed.
    pub fn reverse(&self) -> Self {
        let _span = debug_span!("reverse").entered();
        let mut graph: Self = self.empty_like();
        for edge in self.edges() {
            graph.insert_edge(
                edge.target.clone(),
                edge.source.clone(),
                Some(edge.key),
                edge.attrs.clone(),
            );
        }
        graph
    }
}

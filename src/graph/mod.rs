//! The graph container.
//!
//! [`Graph`] is generic over its node type and two marker types: the
//! directedness `D` ([`Directed`] or [`Undirected`]) and the edge
//! multiplicity `M` ([`SingleEdge`] or [`MultipleEdges`]).  Operations shared
//! by every variant are defined here and in `edges.rs`; direction-only
//! operations are in `directed.rs` and key-based operations for multigraphs in
//! `multi.rs`, so calling them on the wrong variant does not compile.

mod convert;
mod directed;
mod edges;
mod multi;

use std::borrow::Borrow;

use derivative::Derivative;

use crate::{
    attrs::{AttrValue, Attrs},
    capability::Capabilities,
    directedness::{Directed, Directedness, Undirected},
    edge_multiplicity::{EdgeMultiplicity, MultipleEdges, SingleEdge},
    edge_slots::EdgeKey,
    edge_store::{EdgeStore, NeighborMap},
    error::{GraphError, Result},
    node::{NodeEntry, NodeKey, NodeStore},
    tracing_support::trace,
};

/// An in-memory graph with attribute maps on nodes, edges and the graph
/// itself.
///
/// Node and neighbor iteration follows insertion order.  Every edge's
/// attribute map is stored once; in an undirected graph `edge_attrs(u, v)`
/// and `edge_attrs(v, u)` are the same map.
///
/// ```
/// use netgraph::{UnGraph, attrs};
///
/// let mut g = UnGraph::new();
/// g.add_edge_with_attrs(1, 2, attrs! { "weight" => 3 });
/// g.add_edge(2, 3);
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.edge_attrs(&2, &1).unwrap()["weight"], 3);
/// assert_eq!(g.degree(&2).unwrap(), 2);
/// ```
#[derive(Derivative)]
#[derivative(Clone(bound = "N: Clone"), Default(bound = ""))]
pub struct Graph<N, D = Undirected, M: EdgeMultiplicity = SingleEdge> {
    attrs: Attrs,
    nodes: NodeStore<N>,
    edges: EdgeStore<N, D, M>,
}

/// Undirected graph without parallel edges.
pub type UnGraph<N> = Graph<N, Undirected, SingleEdge>;
/// Directed graph without parallel edges.
pub type DiGraph<N> = Graph<N, Directed, SingleEdge>;
/// Undirected graph with keyed parallel edges.
pub type MultiGraph<N> = Graph<N, Undirected, MultipleEdges>;
/// Directed graph with keyed parallel edges.
pub type MultiDiGraph<N> = Graph<N, Directed, MultipleEdges>;

const NAME_ATTR: &str = "name";

impl<N, D, M> Graph<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(u, v)` pairs, adding endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        graph.add_edges_from(edges);
        graph
    }

    /// Builds a graph from `(u, v, attrs)` triples.
    pub fn from_edges_with_attrs<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, Attrs)>,
    {
        let mut graph = Self::new();
        graph.add_edges_with_attrs_from(edges);
        graph
    }

    /// Builds a graph from an adjacency list: each node with the nodes it
    /// points to.  Every listed node is added, even one without neighbors.
    ///
    /// An undirected multigraph records each edge once even though an
    /// adjacency list names it from both ends.
    pub fn from_adjacency<I, A>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        let dedupe = !D::is_directed() && M::allows_parallel_edges();
        let mut seen = std::collections::HashSet::new();
        for (node, neighbors) in adjacency {
            graph.add_node(node.clone());
            for neighbor in neighbors {
                if !(dedupe && seen.contains(&neighbor)) {
                    graph.add_edge(node.clone(), neighbor);
                }
            }
            if dedupe {
                seen.insert(node);
            }
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        D::is_directed()
    }

    pub fn is_multigraph(&self) -> bool {
        M::allows_parallel_edges()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::of::<D, M>()
    }

    // ==================== Graph attributes ====================

    pub fn graph_attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn graph_attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// The graph's `"name"` attribute, or `""` when unset.
    pub fn name(&self) -> &str {
        self.attrs
            .get(NAME_ATTR)
            .and_then(AttrValue::as_str)
            .unwrap_or("")
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.attrs
            .insert(NAME_ATTR.to_string(), AttrValue::String(name.into()));
    }

    // ==================== Nodes ====================

    pub fn add_node(&mut self, node: N) {
        self.add_node_with_attrs(node, Attrs::new());
    }

    /// Adds `node`, or merges `attrs` into its attributes if it exists.
    pub fn add_node_with_attrs(&mut self, node: N, attrs: Attrs) {
        trace!(node = ?node, "add node");
        self.edges.add_node(&node);
        self.nodes.upsert(node, attrs);
    }

    /// Adds every node of `nodes`; items are bare nodes or `(node, attrs)`
    /// pairs.
    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator,
        I::Item: Into<NodeEntry<N>>,
    {
        for entry in nodes {
            let (node, attrs) = entry.into().into_parts();
            self.add_node_with_attrs(node, attrs);
        }
    }

    /// Removes `node` and all its edges, returning its attributes.
    pub fn remove_node(&mut self, node: &N) -> Result<Attrs> {
        let attrs = self
            .nodes
            .remove(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        let _removed_edges = self.edges.remove_node(node);
        trace!(node = ?node, removed_edges = _removed_edges, "remove node");
        self.debug_check();
        Ok(attrs)
    }

    /// Removes every listed node that is present; absent nodes are skipped.
    pub fn remove_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
    {
        for node in nodes {
            let node = node.borrow();
            if self.has_node(node) {
                self.remove_node(node).ok();
            }
        }
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Same as [`number_of_nodes`](Self::number_of_nodes).
    pub fn order(&self) -> usize {
        self.number_of_nodes()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + DoubleEndedIterator + Clone + '_ {
        self.nodes.keys()
    }

    pub fn nodes_with_attrs(&self) -> impl ExactSizeIterator<Item = (&N, &Attrs)> + '_ {
        self.nodes.iter()
    }

    pub fn node_attrs(&self, node: &N) -> Result<&Attrs> {
        self.nodes
            .attrs(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    pub fn node_attrs_mut(&mut self, node: &N) -> Result<&mut Attrs> {
        self.nodes
            .attrs_mut(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// The members of `nbunch` that are nodes of the graph, in `nbunch`
    /// order.
    pub fn nbunch_iter<'g, I>(&'g self, nbunch: I) -> impl Iterator<Item = &'g N> + 'g
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
        I::IntoIter: 'g,
    {
        nbunch
            .into_iter()
            .filter_map(move |node| self.nodes.key(node.borrow()))
    }

    // ==================== Consistency ====================

    /// Verifies the storage invariants: the node store and the adjacency
    /// agree on the node set, every edge is mirrored (under both endpoints
    /// when undirected, in the predecessor map when directed) and the
    /// number of stored edges matches the adjacency.
    pub fn check_consistency(&self) -> Result<()> {
        if !self.nodes.keys().eq(self.edges.nodes()) {
            return Err(GraphError::Inconsistent(
                "node store and adjacency disagree".to_string(),
            ));
        }
        self.edges.check().map_err(GraphError::Inconsistent)
    }

    fn debug_check(&self) {
        #[cfg(all(debug_assertions, not(feature = "unchecked")))]
        if let Err(err) = self.check_consistency() {
            panic!("{}", err);
        }
    }

    /// Incoming neighbor map of `node`; all neighbors when undirected.
    pub(crate) fn predecessor_map(&self, node: &N) -> Option<&NeighborMap<N, M>> {
        self.edges.predecessors(node)
    }

    /// Adds `node` with empty attributes unless present.
    fn ensure_node(&mut self, node: &N) {
        if !self.nodes.contains(node) {
            self.add_node(node.clone());
        }
    }

    /// Adds or updates the edge `(u, v, key)`, creating missing endpoints.
    pub(crate) fn insert_edge(&mut self, u: N, v: N, key: Option<EdgeKey>, attrs: Attrs) -> EdgeKey {
        self.ensure_node(&u);
        self.ensure_node(&v);
        let key = self.edges.upsert_edge(&u, &v, key, attrs);
        trace!(u = ?u, v = ?v, key, "add edge");
        key
    }

    /// A graph of any variant with this graph's attributes and nodes but no
    /// edges.
    pub(crate) fn empty_like<D2, M2>(&self) -> Graph<N, D2, M2>
    where
        D2: Directedness,
        M2: EdgeMultiplicity,
    {
        let mut graph = Graph::new();
        graph.attrs = self.attrs.clone();
        for (node, attrs) in self.nodes.iter() {
            graph.add_node_with_attrs(node.clone(), attrs.clone());
        }
        graph
    }
}

impl<N, D, M> PartialEq for Graph<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    /// Graphs are equal when they have the same graph attributes, the same
    /// nodes with the same attributes, and the same keyed edges with the same
    /// attributes.  Insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.attrs == other.attrs
            && self.nodes == other.nodes
            && self.number_of_edges() == other.number_of_edges()
            && self
                .edges()
                .all(|edge| other.edge_at(edge.source, edge.target, edge.key) == Some(edge.attrs))
    }
}

impl<N, D, M> FromIterator<(N, N)> for Graph<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

impl<N, D, M> Extend<(N, N)> for Graph<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        self.add_edges_from(edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use serde_json::json;

    #[test]
    fn test_new_graph_is_empty() {
        let g = UnGraph::<i32>::new();
        assert_eq!(g.number_of_nodes(), 0);
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.name(), "");
        assert!(!g.is_directed());
        assert!(!g.is_multigraph());
    }

    #[test]
    fn test_add_node_merges_attributes() {
        let mut g = UnGraph::new();
        g.add_node_with_attrs("a", attrs! { "color" => "red", "size" => 1 });
        g.add_node_with_attrs("a", attrs! { "color" => "blue" });
        assert_eq!(g.number_of_nodes(), 1);
        let attrs = g.node_attrs(&"a").unwrap();
        assert_eq!(attrs["color"], json!("blue"));
        assert_eq!(attrs["size"], json!(1));
    }

    #[test]
    fn test_add_nodes_from_mixed_entries() {
        let mut g = DiGraph::new();
        g.add_nodes_from([
            NodeEntry::Bare(1),
            NodeEntry::WithAttrs(2, attrs! { "x" => 1 }),
        ]);
        g.add_nodes_from(vec![3, 4]);
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(g.node_attrs(&2).unwrap()["x"], json!(1));
    }

    #[test]
    fn test_remove_missing_node() {
        let mut g = UnGraph::from_edges([(1, 2)]);
        assert_eq!(g.remove_node(&9), Err(GraphError::node_not_found(&9)));
        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn test_remove_nodes_from_skips_missing() {
        let mut g = UnGraph::from_edges([(1, 2), (2, 3)]);
        g.remove_nodes_from([2, 7]);
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.check_consistency(), Ok(()));
    }

    #[test]
    fn test_nbunch_iter_filters_absent() {
        let g = UnGraph::from_edges([(1, 2)]);
        assert_eq!(g.nbunch_iter([3, 2, 1]).copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_name() {
        let mut g = MultiDiGraph::<u8>::new();
        g.set_name("roads");
        assert_eq!(g.name(), "roads");
        assert_eq!(g.graph_attrs()["name"], json!("roads"));
    }

    #[test]
    fn test_from_adjacency() {
        let g = UnGraph::from_adjacency([(1, vec![2, 3]), (2, vec![1]), (3, vec![1]), (4, vec![])]);
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 2);

        let mg = MultiGraph::from_adjacency([(1, vec![2, 2]), (2, vec![1, 1])]);
        assert_eq!(mg.number_of_edges(), 2);

        let dg = DiGraph::from_adjacency([(1, vec![2]), (2, vec![1])]);
        assert_eq!(dg.number_of_edges(), 2);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut g: DiGraph<char> = [('a', 'b'), ('b', 'c')].into_iter().collect();
        g.extend([('c', 'a')]);
        assert_eq!(g.number_of_edges(), 3);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = UnGraph::from_edges([(1, 2), (2, 3)]);
        let b = UnGraph::from_edges([(3, 2), (2, 1)]);
        assert_eq!(a, b);
        let c = UnGraph::from_edges_with_attrs([(1, 2, attrs! { "w" => 1 }), (2, 3, attrs! {})]);
        assert_ne!(a, c);
    }
}

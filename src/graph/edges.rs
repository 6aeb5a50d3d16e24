//! Edge, adjacency and degree operations shared by every variant.

use crate::{
    attrs::{AttrValue, Attrs, edge_weight},
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    edge_slots::{EdgeKey, EdgeSlots},
    edge_store::NeighborMap,
    error::{GraphError, Result},
    node::NodeKey,
    tracing_support::trace,
    views::{AdjacencyView, EdgeRef, Neighbors},
};

use super::Graph;

impl<N, D, M> Graph<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    /// Adds an edge between `u` and `v`, adding missing endpoints.  In a
    /// simple graph an existing edge is kept as is; a multigraph gains a new
    /// parallel edge.  Returns the edge's key.
    pub fn add_edge(&mut self, u: N, v: N) -> EdgeKey {
        self.add_edge_with_attrs(u, v, Attrs::new())
    }

    /// Like [`add_edge`](Self::add_edge); in a simple graph `attrs` is merged
    /// into an existing edge.
    pub fn add_edge_with_attrs(&mut self, u: N, v: N, attrs: Attrs) -> EdgeKey {
        self.insert_edge(u, v, None, attrs)
    }

    pub fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    pub fn add_edges_with_attrs_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N, Attrs)>,
    {
        for (u, v, attrs) in edges {
            self.add_edge_with_attrs(u, v, attrs);
        }
    }

    /// Adds `(u, v, weight)` triples, storing each weight under `weight_key`.
    pub fn add_weighted_edges_from<I>(&mut self, edges: I, weight_key: &str)
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        for (u, v, weight) in edges {
            let mut attrs = Attrs::new();
            attrs.insert(weight_key.to_string(), AttrValue::from(weight));
            self.add_edge_with_attrs(u, v, attrs);
        }
    }

    /// Removes the edge between `u` and `v` and returns its attributes.  In a
    /// multigraph the most recently added parallel edge goes.
    pub fn remove_edge(&mut self, u: &N, v: &N) -> Result<Attrs> {
        let (_key, attrs) = self
            .edges
            .remove_edge(u, v, None)
            .ok_or_else(|| GraphError::edge_not_found(u, v))?;
        trace!(u = ?u, v = ?v, key = _key, "remove edge");
        self.debug_check();
        Ok(attrs)
    }

    /// Removes each listed edge that is present; absent ones are skipped.
    pub fn remove_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (u, v) in edges {
            if self.has_edge(&u, &v) {
                self.remove_edge(&u, &v).ok();
            }
        }
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.edges.slots(u, v).is_some()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.edge_count()
    }

    /// Same as [`number_of_edges`](Self::number_of_edges).
    pub fn size(&self) -> usize {
        self.number_of_edges()
    }

    /// Number of edges from `u` to `v` (either way when undirected).
    pub fn number_of_edges_between(&self, u: &N, v: &N) -> usize {
        self.edges.slots(u, v).map_or(0, |slots| slots.len())
    }

    /// Sum of the `weight_key` attribute over all edges; edges without it
    /// count as `1.0`.
    pub fn size_weighted(&self, weight_key: &str) -> Result<f64> {
        self.edges().try_fold(0.0, |total, edge| {
            Ok(total + edge_weight(edge.attrs, weight_key, edge.source, edge.target)?)
        })
    }

    /// Attributes of the edge between `u` and `v`; in a multigraph, of the
    /// earliest surviving parallel edge.
    pub fn edge_attrs(&self, u: &N, v: &N) -> Result<&Attrs> {
        self.edges
            .slots(u, v)
            .and_then(|slots| slots.first())
            .and_then(|(_, edge)| self.edges.attrs(edge))
            .ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    pub fn edge_attrs_mut(&mut self, u: &N, v: &N) -> Result<&mut Attrs> {
        let edge = self
            .edges
            .slots(u, v)
            .and_then(|slots| slots.first())
            .map(|(_, edge)| edge);
        edge.and_then(|edge| self.edges.attrs_mut(edge))
            .ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    /// Attributes of the edge `(u, v, key)`, if present.
    pub(crate) fn edge_at(&self, u: &N, v: &N, key: EdgeKey) -> Option<&Attrs> {
        let edge = self.edges.slots(u, v)?.get(key)?;
        self.edges.attrs(edge)
    }

    pub(crate) fn edge_at_mut(&mut self, u: &N, v: &N, key: EdgeKey) -> Option<&mut Attrs> {
        let edge = self.edges.slots(u, v)?.get(key)?;
        self.edges.attrs_mut(edge)
    }

    /// Every edge once.  Edges are listed by source node in node insertion
    /// order, then by neighbor in the order the neighbor was connected.  An
    /// undirected edge is listed from whichever endpoint was added first.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, N>> + '_ {
        self.edges
            .iter_edges()
            .filter_map(move |(source, target, key, edge)| {
                Some(EdgeRef {
                    source,
                    target,
                    key,
                    attrs: self.edges.attrs(edge)?,
                })
            })
    }

    /// The edges incident to `node` (its out-edges when directed), each
    /// reported with `node` as the source.
    pub fn edges_of<'g>(
        &'g self,
        node: &N,
    ) -> Result<impl Iterator<Item = EdgeRef<'g, N>> + use<'g, N, D, M>> {
        let source = self
            .nodes
            .key(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        let neighbors = self
            .edges
            .successors(source)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        Ok(self.slot_edges(source, neighbors, false))
    }

    /// Expands a neighbor map of `node` into edge references.  With
    /// `incoming`, `node` is reported as the target.
    pub(crate) fn slot_edges<'g>(
        &'g self,
        node: &'g N,
        neighbors: &'g NeighborMap<N, M>,
        incoming: bool,
    ) -> impl Iterator<Item = EdgeRef<'g, N>> + use<'g, N, D, M> {
        neighbors.iter().flat_map(move |(other, slots)| {
            slots.iter().filter_map(move |(key, edge)| {
                let (source, target) = if incoming { (other, node) } else { (node, other) };
                Some(EdgeRef {
                    source,
                    target,
                    key,
                    attrs: self.edges.attrs(edge)?,
                })
            })
        })
    }

    /// Neighbors of `node` in connection order; successors when directed.
    pub fn neighbors(&self, node: &N) -> Result<Neighbors<'_, N, M>> {
        self.edges
            .successors(node)
            .map(Neighbors::new)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// The adjacency of `node`: each neighbor (successor when directed) with
    /// the edge attributes leading to it.
    pub fn adj(&self, node: &N) -> Result<AdjacencyView<'_, N, M>> {
        self.edges
            .successors(node)
            .map(|neighbors| AdjacencyView::new(neighbors, self.edges.arena()))
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// Every node with its adjacency, in node insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&N, AdjacencyView<'_, N, M>)> + '_ {
        let arena = self.edges.arena();
        self.edges
            .adjacency()
            .map(move |(node, neighbors)| (node, AdjacencyView::new(neighbors, arena)))
    }

    /// Number of edge endpoints at `node`.  An undirected self-loop counts
    /// twice; a directed one once as outgoing and once as incoming.
    pub fn degree(&self, node: &N) -> Result<usize> {
        let out = self
            .edges
            .successors(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        if D::is_directed() {
            let incoming = self.edges.predecessors(node).map_or(0, count_edges::<N, M>);
            Ok(count_edges::<N, M>(out) + incoming)
        } else {
            Ok(out
                .iter()
                .map(|(other, slots)| if other == node { 2 * slots.len() } else { slots.len() })
                .sum())
        }
    }

    /// Sum of `weight_key` over the edges counted by [`degree`](Self::degree).
    pub fn degree_weighted(&self, node: &N, weight_key: &str) -> Result<f64> {
        let out = self
            .edges
            .successors(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        if D::is_directed() {
            let incoming = match self.edges.predecessors(node) {
                Some(incoming) => self.weight_sum(node, incoming, weight_key, true)?,
                None => 0.0,
            };
            Ok(self.weight_sum(node, out, weight_key, false)? + incoming)
        } else {
            self.weight_sum(node, out, weight_key, false)
        }
    }

    /// Sums weights over a neighbor map of `node`.  Undirected self-loops
    /// count twice unless `directed_side` is set.
    pub(crate) fn weight_sum(
        &self,
        node: &N,
        neighbors: &NeighborMap<N, M>,
        weight_key: &str,
        directed_side: bool,
    ) -> Result<f64> {
        let mut total = 0.0;
        for (other, slots) in neighbors {
            let factor = if !D::is_directed() && !directed_side && other == node {
                2.0
            } else {
                1.0
            };
            for (_, edge) in slots.iter() {
                if let Some(attrs) = self.edges.attrs(edge) {
                    total += factor * edge_weight(attrs, weight_key, node, other)?;
                }
            }
        }
        Ok(total)
    }

    /// `(node, degree)` for every node, in insertion order.
    pub fn degrees(&self) -> impl Iterator<Item = (&N, usize)> + '_ {
        self.nodes()
            .map(move |node| (node, self.degree(node).unwrap_or_default()))
    }

    /// Every self-loop, once.
    pub fn selfloop_edges(&self) -> impl Iterator<Item = EdgeRef<'_, N>> + '_ {
        self.edges.adjacency().flat_map(move |(node, neighbors)| {
            neighbors.get(node).into_iter().flat_map(move |slots| {
                slots.iter().filter_map(move |(key, edge)| {
                    Some(EdgeRef {
                        source: node,
                        target: node,
                        key,
                        attrs: self.edges.attrs(edge)?,
                    })
                })
            })
        })
    }

    pub fn number_of_selfloops(&self) -> usize {
        self.selfloop_edges().count()
    }

    pub fn nodes_with_selfloops(&self) -> impl Iterator<Item = &N> + '_ {
        self.edges
            .adjacency()
            .filter(|(node, neighbors)| neighbors.contains_key(*node))
            .map(|(node, _)| node)
    }

    /// Removes every node, edge and graph attribute.
    pub fn clear(&mut self) {
        self.attrs.clear();
        self.nodes.clear();
        self.edges.clear();
        trace!("clear graph");
    }

    /// Removes every edge, keeping nodes and all attributes of nodes and the
    /// graph.
    pub fn clear_edges(&mut self) {
        self.edges.clear_edges();
        trace!("clear edges");
    }

    /// Applies `update` to the attributes of every edge between `u` and `v`.
    /// Returns false if there is no such edge.
    pub(crate) fn update_parallel_edges(
        &mut self,
        u: &N,
        v: &N,
        mut update: impl FnMut(&mut Attrs),
    ) -> bool {
        let Some(slots) = self.edges.slots(u, v) else {
            return false;
        };
        let indices: Vec<_> = slots.iter().map(|(_, edge)| edge).collect();
        for edge in indices {
            if let Some(attrs) = self.edges.attrs_mut(edge) {
                update(attrs);
            }
        }
        true
    }
}

pub(crate) fn count_edges<N, M: EdgeMultiplicity>(neighbors: &NeighborMap<N, M>) -> usize {
    neighbors.values().map(|slots| slots.len()).sum()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{DiGraph, MultiDiGraph, MultiGraph, UnGraph, attrs, error::GraphError};

    #[test]
    fn test_add_edge_adds_nodes() {
        let mut g = UnGraph::new();
        assert_eq!(g.add_edge("a", "b"), 0);
        assert!(g.has_node(&"a") && g.has_node(&"b"));
        assert!(g.has_edge(&"b", &"a"));
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn test_edge_churn_keeps_attrs_reachable() {
        let mut g = MultiGraph::new();
        g.add_edge_with_attrs(0, 1, attrs! { "w" => 1 });
        for i in 0..1000 {
            g.add_edge_with_attrs(1, 2, attrs! { "w" => i });
            g.remove_edge(&2, &1).unwrap();
        }
        g.add_edge_with_attrs(2, 1, attrs! { "w" => 7 });
        assert_eq!(g.edges.arena_slots(), 2);

        let copy = g.clone();
        assert_eq!(copy.number_of_edges(), 2);
        assert_eq!(copy.edge_attrs(&1, &0).unwrap()["w"], json!(1));
        assert_eq!(copy.edge_attrs(&1, &2).unwrap()["w"], json!(7));
        assert_eq!(copy.check_consistency(), Ok(()));
    }

    #[test]
    fn test_simple_graph_merges_edge_attrs() {
        let mut g = UnGraph::new();
        g.add_edge_with_attrs(1, 2, attrs! { "w" => 1, "c" => "red" });
        g.add_edge_with_attrs(2, 1, attrs! { "w" => 5 });
        assert_eq!(g.number_of_edges(), 1);
        let attrs = g.edge_attrs(&1, &2).unwrap();
        assert_eq!(attrs["w"], json!(5));
        assert_eq!(attrs["c"], json!("red"));
    }

    #[test]
    fn test_undirected_attrs_are_shared() {
        let mut g = UnGraph::new();
        g.add_edge(1, 2);
        g.edge_attrs_mut(&1, &2)
            .unwrap()
            .insert("color".into(), json!("blue"));
        assert_eq!(g.edge_attrs(&2, &1).unwrap()["color"], json!("blue"));
        assert!(std::ptr::eq(
            g.edge_attrs(&1, &2).unwrap(),
            g.edge_attrs(&2, &1).unwrap()
        ));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = DiGraph::from_edges([(1, 2), (2, 1)]);
        assert!(g.remove_edge(&1, &2).is_ok());
        assert!(!g.has_edge(&1, &2));
        assert!(g.has_edge(&2, &1));
        assert_eq!(g.remove_edge(&1, &2), Err(GraphError::edge_not_found(&1, &2)));
        assert_eq!(g.number_of_nodes(), 2);
    }

    #[test]
    fn test_remove_edges_from_skips_missing() {
        let mut g = UnGraph::from_edges([(1, 2), (2, 3)]);
        g.remove_edges_from([(2, 1), (5, 6)]);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn test_self_loop_degree() {
        let mut g = UnGraph::new();
        g.add_edge(1, 1);
        g.add_edge(1, 2);
        assert_eq!(g.degree(&1), Ok(3));
        assert_eq!(g.number_of_selfloops(), 1);
        assert_eq!(g.nodes_with_selfloops().collect::<Vec<_>>(), vec![&1]);
        assert_eq!(g.neighbors(&1).unwrap().count(), 2);

        let mut d = DiGraph::new();
        d.add_edge(1, 1);
        assert_eq!(d.degree(&1), Ok(2));
        assert_eq!(d.number_of_edges(), 1);
    }

    #[test]
    fn test_weighted_degree_and_size() {
        let mut g = UnGraph::new();
        g.add_weighted_edges_from([(1, 2, 0.5), (2, 3, 1.5)], "weight");
        g.add_edge(3, 3);
        assert_eq!(g.degree_weighted(&2, "weight"), Ok(2.0));
        assert_eq!(g.degree_weighted(&3, "weight"), Ok(3.5));
        assert_eq!(g.size_weighted("weight"), Ok(3.0));

        g.add_edge_with_attrs(4, 5, attrs! { "weight" => "heavy" });
        assert!(matches!(
            g.size_weighted("weight"),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_edges_order_and_orientation() {
        let mut g = UnGraph::new();
        g.add_node(3);
        g.add_edge(1, 3);
        g.add_edge(2, 1);
        let edges: Vec<_> = g.edges().map(|e| (*e.source, *e.target)).collect();
        assert_eq!(edges, vec![(3, 1), (1, 2)]);
    }

    #[test]
    fn test_edges_of_and_adj() {
        let mut g = MultiGraph::new();
        g.add_edge_with_attrs(1, 2, attrs! { "k" => 0 });
        g.add_edge_with_attrs(1, 2, attrs! { "k" => 1 });
        g.add_edge(1, 3);
        assert_eq!(g.edges_of(&1).unwrap().count(), 3);
        assert!(g.edges_of(&1).unwrap().all(|e| *e.source == 1));

        let adj = g.adj(&1).unwrap();
        assert_eq!(adj.len(), 2);
        assert_eq!(adj.keys_of(&2), vec![0, 1]);
        assert_eq!(adj.get(&2).unwrap()["k"], json!(0));
        assert_eq!(adj.iter().count(), 3);
        assert!(g.adj(&9).is_err());
    }

    #[test]
    fn test_degrees_and_adjacency() {
        let g = UnGraph::from_edges([(1, 2), (2, 3)]);
        assert_eq!(
            g.degrees().map(|(n, d)| (*n, d)).collect::<Vec<_>>(),
            vec![(1, 1), (2, 2), (3, 1)]
        );
        let lens: Vec<_> = g.adjacency().map(|(n, adj)| (*n, adj.len())).collect();
        assert_eq!(lens, vec![(1, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_clear_and_clear_edges() {
        let mut g = MultiDiGraph::from_edges([(1, 2), (1, 2)]);
        g.set_name("x");
        g.clear_edges();
        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.name(), "x");
        g.clear();
        assert_eq!(g.number_of_nodes(), 0);
        assert_eq!(g.name(), "");
    }

    #[test]
    fn test_neighbors_missing_node() {
        let g = UnGraph::<i32>::new();
        assert_eq!(
            g.neighbors(&0).err(),
            Some(GraphError::node_not_found(&0))
        );
    }
}

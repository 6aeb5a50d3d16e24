//! Key-based operations on multigraphs.

use crate::{
    attrs::Attrs,
    directedness::Directedness,
    edge_multiplicity::MultipleEdges,
    edge_slots::{EdgeKey, EdgeSlots},
    error::{GraphError, Result},
    node::NodeKey,
    tracing_support::trace,
};

use super::Graph;

impl<N, D> Graph<N, D, MultipleEdges>
where
    N: NodeKey,
    D: Directedness,
{
    /// Adds the edge `(u, v, key)`, or merges `attrs` into it if it exists.
    pub fn add_edge_with_key(&mut self, u: N, v: N, key: EdgeKey, attrs: Attrs) -> EdgeKey {
        self.insert_edge(u, v, Some(key), attrs)
    }

    /// Removes the edge `(u, v, key)` and returns its attributes.
    pub fn remove_edge_with_key(&mut self, u: &N, v: &N, key: EdgeKey) -> Result<Attrs> {
        let (_, attrs) = self
            .edges
            .remove_edge(u, v, Some(key))
            .ok_or_else(|| GraphError::edge_key_not_found(u, v, key))?;
        trace!(u = ?u, v = ?v, key, "remove keyed edge");
        self.debug_check();
        Ok(attrs)
    }

    pub fn has_edge_with_key(&self, u: &N, v: &N, key: EdgeKey) -> bool {
        self.edge_at(u, v, key).is_some()
    }

    /// Keys of the parallel edges between `u` and `v`, oldest first.
    pub fn edge_keys<'g>(
        &'g self,
        u: &N,
        v: &N,
    ) -> Result<impl Iterator<Item = EdgeKey> + use<'g, N, D>> {
        let slots = self
            .edges
            .slots(u, v)
            .ok_or_else(|| GraphError::edge_not_found(u, v))?;
        Ok(slots.iter().map(|(key, _)| key))
    }

    pub fn edge_attrs_by_key(&self, u: &N, v: &N, key: EdgeKey) -> Result<&Attrs> {
        self.edge_at(u, v, key)
            .ok_or_else(|| GraphError::edge_key_not_found(u, v, key))
    }

    pub fn edge_attrs_by_key_mut(&mut self, u: &N, v: &N, key: EdgeKey) -> Result<&mut Attrs> {
        self.edge_at_mut(u, v, key)
            .ok_or_else(|| GraphError::edge_key_not_found(u, v, key))
    }

    /// The key [`add_edge`](Self::add_edge) would give the next edge between
    /// `u` and `v`.
    pub fn new_edge_key(&self, u: &N, v: &N) -> EdgeKey {
        self.edges.slots(u, v).map_or(0, |slots| slots.next_key())
    }
}

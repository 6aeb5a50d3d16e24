//! Adjacency storage shared by all graph variants.
//!
//! The store keeps a successor map `succ[u][v] -> slots` and, for directed
//! graphs, a predecessor map `pred[v][u] -> slots`.  Undirected graphs file
//! every non-loop edge under both `succ[u][v]` and `succ[v][u]`.  The slots
//! hold arena indices; an edge's attribute map lives in the arena exactly
//! once, so every adjacency entry naming the edge sees the same map.
//!
//! The store does not know about node attributes.  Callers are responsible
//! for adding endpoints (via [`EdgeStore::add_node`]) before linking edges.

use std::{collections::HashSet, fmt::Debug, marker::PhantomData};

use derivative::Derivative;
use indexmap::IndexMap;

use crate::{
    arena::{EdgeArena, EdgeIndex},
    attrs::{Attrs, merge_attrs},
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    edge_slots::{EdgeKey, EdgeSlots},
    node::NodeKey,
};

/// Neighbor map of one node.
pub(crate) type NeighborMap<N, M> = IndexMap<N, <M as EdgeMultiplicity>::Slots>;

type Adjacency<N, M> = IndexMap<N, NeighborMap<N, M>>;

#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Default(bound = ""),
    Debug(bound = "N: Debug")
)]
pub(crate) struct EdgeStore<N, D, M: EdgeMultiplicity> {
    succ: Adjacency<N, M>,
    /// Empty unless `D` is directed.
    pred: Adjacency<N, M>,
    arena: EdgeArena<Attrs>,
    #[derivative(Debug = "ignore")]
    directedness: PhantomData<D>,
}

impl<N, D, M> EdgeStore<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    /// Gives `node` an empty adjacency entry if it has none.
    pub fn add_node(&mut self, node: &N) {
        if !self.succ.contains_key(node) {
            self.succ.insert(node.clone(), IndexMap::new());
            if D::is_directed() {
                self.pred.insert(node.clone(), IndexMap::new());
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn arena_slots(&self) -> usize {
        self.arena.slot_count()
    }

    #[cfg(test)]
    fn contains_node(&self, node: &N) -> bool {
        self.succ.contains_key(node)
    }

    /// Removes `node` and every edge incident to it.  Returns the number of
    /// edges removed.
    pub fn remove_node(&mut self, node: &N) -> usize {
        let Some(out) = self.succ.shift_remove(node) else {
            return 0;
        };
        let mut removed = 0;
        for (target, slots) in &out {
            for (_, edge) in slots.iter() {
                self.arena.remove(edge);
                removed += 1;
            }
            if target != node {
                if D::is_directed() {
                    Self::drop_neighbor(&mut self.pred, target, node);
                } else {
                    Self::drop_neighbor(&mut self.succ, target, node);
                }
            }
        }
        if D::is_directed() {
            if let Some(incoming) = self.pred.shift_remove(node) {
                for (source, slots) in &incoming {
                    // Self-loops were released with the outgoing edges.
                    if source == node {
                        continue;
                    }
                    for (_, edge) in slots.iter() {
                        self.arena.remove(edge);
                        removed += 1;
                    }
                    Self::drop_neighbor(&mut self.succ, source, node);
                }
            }
        }
        removed
    }

    /// Adds the edge `(u, v, key)` or, if it exists, merges `attrs` into it.
    /// Without a key, the multiplicity decides: simple graphs reuse the
    /// existing edge, multigraphs pick a fresh key.  Both endpoints must
    /// already be present.  Returns the key of the edge.
    pub fn upsert_edge(&mut self, u: &N, v: &N, key: Option<EdgeKey>, attrs: Attrs) -> EdgeKey {
        let existing = self.slots(u, v);
        let key = key.unwrap_or_else(|| existing.map_or(0, |slots| slots.next_key()));
        if let Some(edge) = existing.and_then(|slots| slots.get(key)) {
            if let Some(target) = self.arena.get_mut(edge) {
                merge_attrs(target, attrs);
            }
            return key;
        }

        let edge = self.arena.insert(attrs);
        Self::slots_entry(&mut self.succ, u, v).insert(key, edge);
        if D::is_directed() {
            Self::slots_entry(&mut self.pred, v, u).insert(key, edge);
        } else if u != v {
            Self::slots_entry(&mut self.succ, v, u).insert(key, edge);
        }
        key
    }

    /// Removes the edge `(u, v, key)`, or the most recently added edge
    /// between `u` and `v` when `key` is `None`.  Returns the removed key and
    /// attributes, or `None` if there was no such edge.
    pub fn remove_edge(&mut self, u: &N, v: &N, key: Option<EdgeKey>) -> Option<(EdgeKey, Attrs)> {
        let slots = self.slots(u, v)?;
        let (key, edge) = match key {
            Some(key) => (key, slots.get(key)?),
            None => slots.last()?,
        };
        Self::unlink(&mut self.succ, u, v, key);
        if D::is_directed() {
            Self::unlink(&mut self.pred, v, u, key);
        } else if u != v {
            Self::unlink(&mut self.succ, v, u, key);
        }
        self.arena.remove(edge).map(|attrs| (key, attrs))
    }

    /// Drops every edge, keeping the nodes.
    pub fn clear_edges(&mut self) {
        for neighbors in self.succ.values_mut() {
            neighbors.clear();
        }
        for neighbors in self.pred.values_mut() {
            neighbors.clear();
        }
        self.arena.clear();
    }

    pub fn clear(&mut self) {
        self.succ.clear();
        self.pred.clear();
        self.arena.clear();
    }

    /// Outgoing neighbor map of `node` (all neighbors when undirected).
    pub fn successors(&self, node: &N) -> Option<&NeighborMap<N, M>> {
        self.succ.get(node)
    }

    /// Incoming neighbor map of `node` (all neighbors when undirected).
    pub fn predecessors(&self, node: &N) -> Option<&NeighborMap<N, M>> {
        if D::is_directed() {
            self.pred.get(node)
        } else {
            self.succ.get(node)
        }
    }

    pub fn slots(&self, u: &N, v: &N) -> Option<&M::Slots> {
        self.succ.get(u)?.get(v)
    }

    pub fn attrs(&self, edge: EdgeIndex) -> Option<&Attrs> {
        self.arena.get(edge)
    }

    pub fn attrs_mut(&mut self, edge: EdgeIndex) -> Option<&mut Attrs> {
        self.arena.get_mut(edge)
    }

    pub fn arena(&self) -> &EdgeArena<Attrs> {
        &self.arena
    }

    pub fn edge_count(&self) -> usize {
        self.arena.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.succ.keys()
    }

    pub fn adjacency(&self) -> impl Iterator<Item = (&N, &NeighborMap<N, M>)> + '_ {
        self.succ.iter()
    }

    /// Every edge once, as `(source, target, key, index)`.  Undirected edges
    /// are reported from the endpoint that was inserted first.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&N, &N, EdgeKey, EdgeIndex)> + '_ {
        self.succ
            .iter()
            .enumerate()
            .flat_map(move |(position, (source, neighbors))| {
                neighbors
                    .iter()
                    .filter(move |(target, _)| {
                        D::is_directed()
                            || self
                                .succ
                                .get_index_of(*target)
                                .is_some_and(|other| other >= position)
                    })
                    .flat_map(move |(target, slots)| {
                        slots
                            .iter()
                            .map(move |(key, edge)| (source, target, key, edge))
                    })
            })
    }

    /// Verifies the store's invariants, describing the first violation found.
    pub fn check(&self) -> std::result::Result<(), String> {
        let mut seen: HashSet<EdgeIndex> = HashSet::new();
        for (source, neighbors) in &self.succ {
            for (target, slots) in neighbors {
                if slots.is_empty() {
                    return Err(format!("empty adjacency entry {:?}-{:?}", source, target));
                }
                if !self.succ.contains_key(target) {
                    return Err(format!("edge {:?}-{:?} names a missing node", source, target));
                }
                let mirror = if D::is_directed() {
                    self.pred.get(target).and_then(|m| m.get(source))
                } else {
                    self.succ.get(target).and_then(|m| m.get(source))
                };
                for (key, edge) in slots.iter() {
                    if self.arena.get(edge).is_none() {
                        return Err(format!("edge {:?}-{:?} has no attributes", source, target));
                    }
                    if mirror.and_then(|m| m.get(key)) != Some(edge) {
                        return Err(format!(
                            "edge {:?}-{:?} key {} is not mirrored",
                            source, target, key
                        ));
                    }
                    seen.insert(edge);
                }
            }
        }
        if D::is_directed() {
            if !self.pred.keys().eq(self.succ.keys()) {
                return Err("predecessor and successor node sets differ".to_string());
            }
            for (target, neighbors) in &self.pred {
                for (source, slots) in neighbors {
                    let forward = self.succ.get(source).and_then(|m| m.get(target));
                    if forward.map(|f| f.len()) != Some(slots.len()) {
                        return Err(format!(
                            "predecessor entry {:?}<-{:?} has no successor entry",
                            target, source
                        ));
                    }
                }
            }
        } else if !self.pred.is_empty() {
            return Err("undirected graph has a predecessor map".to_string());
        }
        if seen.len() != self.arena.len() {
            return Err(format!(
                "{} edges reachable from adjacency but {} stored",
                seen.len(),
                self.arena.len()
            ));
        }
        Ok(())
    }

    fn slots_entry<'a>(adjacency: &'a mut Adjacency<N, M>, u: &N, v: &N) -> &'a mut M::Slots {
        adjacency
            .entry(u.clone())
            .or_default()
            .entry(v.clone())
            .or_default()
    }

    fn unlink(adjacency: &mut Adjacency<N, M>, u: &N, v: &N, key: EdgeKey) {
        if let Some(neighbors) = adjacency.get_mut(u) {
            if let Some(slots) = neighbors.get_mut(v) {
                slots.remove(key);
                if slots.is_empty() {
                    neighbors.shift_remove(v);
                }
            }
        }
    }

    fn drop_neighbor(adjacency: &mut Adjacency<N, M>, u: &N, v: &N) {
        if let Some(neighbors) = adjacency.get_mut(u) {
            neighbors.shift_remove(v);
        }
    }
}

//! Borrowed, read-only views onto a graph's current structure.
//!
//! Views hold shared borrows of the graph they were created from, so the
//! graph cannot be mutated while any view is alive.  Collect a view into an
//! owned container first when mutating based on its contents.

use std::fmt::Debug;

use derivative::Derivative;
use indexmap::map::Keys;

use crate::{
    arena::EdgeArena,
    attrs::Attrs,
    edge_multiplicity::EdgeMultiplicity,
    edge_slots::{EdgeKey, EdgeSlots},
    edge_store::NeighborMap,
    node::NodeKey,
};

/// An edge reported by the edge iterators of a graph.
///
/// For undirected graphs `source` is the endpoint the edge was reported from.
/// Simple graphs always report key `0`.
#[derive(Derivative)]
#[derivative(Debug(bound = "N: Debug"), PartialEq(bound = "N: PartialEq"))]
pub struct EdgeRef<'g, N> {
    pub source: &'g N,
    pub target: &'g N,
    pub key: EdgeKey,
    pub attrs: &'g Attrs,
}

impl<N> Clone for EdgeRef<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for EdgeRef<'_, N> {}

impl<'g, N> EdgeRef<'g, N> {
    pub fn ends(&self) -> (&'g N, &'g N) {
        (self.source, self.target)
    }

    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.source == self.target
    }

    /// Clones the endpoints out of the graph.
    pub fn to_owned_ends(&self) -> (N, N)
    where
        N: Clone,
    {
        (self.source.clone(), self.target.clone())
    }
}

/// Lazy iterator over the neighbors of one node, in the order the
/// neighbors were first connected.  A clone continues independently from the
/// same position.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = "N: Debug"))]
pub struct Neighbors<'g, N, M: EdgeMultiplicity> {
    keys: Keys<'g, N, M::Slots>,
}

impl<'g, N, M: EdgeMultiplicity> Neighbors<'g, N, M> {
    pub(crate) fn new(neighbors: &'g NeighborMap<N, M>) -> Self {
        Self {
            keys: neighbors.keys(),
        }
    }
}

impl<'g, N, M: EdgeMultiplicity> Iterator for Neighbors<'g, N, M> {
    type Item = &'g N;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<N, M: EdgeMultiplicity> ExactSizeIterator for Neighbors<'_, N, M> {}

impl<N, M: EdgeMultiplicity> DoubleEndedIterator for Neighbors<'_, N, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

/// The adjacency of one node: neighbor to the edge(s) joining them.
pub struct AdjacencyView<'g, N, M: EdgeMultiplicity> {
    neighbors: &'g NeighborMap<N, M>,
    arena: &'g EdgeArena<Attrs>,
}

impl<N, M: EdgeMultiplicity> Clone for AdjacencyView<'_, N, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, M: EdgeMultiplicity> Copy for AdjacencyView<'_, N, M> {}

impl<'g, N: NodeKey, M: EdgeMultiplicity> AdjacencyView<'g, N, M> {
    pub(crate) fn new(neighbors: &'g NeighborMap<N, M>, arena: &'g EdgeArena<Attrs>) -> Self {
        Self { neighbors, arena }
    }

    /// Number of distinct neighbors.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn contains(&self, neighbor: &N) -> bool {
        self.neighbors.contains_key(neighbor)
    }

    pub fn neighbors(&self) -> Neighbors<'g, N, M> {
        Neighbors::new(self.neighbors)
    }

    /// Attributes of the edge to `neighbor`; the earliest surviving one in a
    /// multigraph.
    pub fn get(&self, neighbor: &N) -> Option<&'g Attrs> {
        let (_, edge) = self.neighbors.get(neighbor)?.first()?;
        self.arena.get(edge)
    }

    pub fn get_by_key(&self, neighbor: &N, key: EdgeKey) -> Option<&'g Attrs> {
        let edge = self.neighbors.get(neighbor)?.get(key)?;
        self.arena.get(edge)
    }

    /// Keys of the edges to `neighbor`, empty if it is not adjacent.
    pub fn keys_of(&self, neighbor: &N) -> Vec<EdgeKey> {
        self.neighbors
            .get(neighbor)
            .map(|slots| slots.iter().map(|(key, _)| key).collect())
            .unwrap_or_default()
    }

    /// `(key, attributes)` of every edge to `neighbor`.
    pub fn edges_to(&self, neighbor: &N) -> Vec<(EdgeKey, &'g Attrs)> {
        let arena = self.arena;
        self.neighbors
            .get(neighbor)
            .map(|slots| {
                slots
                    .iter()
                    .filter_map(|(key, edge)| Some((key, arena.get(edge)?)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every `(neighbor, key, attributes)` triple.
    pub fn iter(&self) -> impl Iterator<Item = (&'g N, EdgeKey, &'g Attrs)> + use<'g, N, M> {
        let arena = self.arena;
        let neighbors = self.neighbors;
        neighbors.iter().flat_map(move |(neighbor, slots)| {
            slots
                .iter()
                .filter_map(move |(key, edge)| Some((neighbor, key, arena.get(edge)?)))
        })
    }
}

impl<N: NodeKey, M: EdgeMultiplicity> Debug for AdjacencyView<'_, N, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.neighbors.iter().map(|(neighbor, slots)| {
                let attrs: Vec<_> = slots
                    .iter()
                    .filter_map(|(_, edge)| self.arena.get(edge))
                    .collect();
                (neighbor, attrs)
            }))
            .finish()
    }
}

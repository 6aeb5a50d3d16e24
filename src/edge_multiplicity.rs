use std::{fmt::Debug, hash::Hash};

use crate::edge_slots::{EdgeSlots, KeyedSlots, SingleSlot};

/// Marker type representing single edges (no multiple edges between same nodes).
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SingleEdge;

/// Marker type representing multiple edges (multiple edges allowed between same nodes).
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MultipleEdges;

/// Trait defining the edge multiplicity behavior of graphs.
///
/// This trait is implemented by [`SingleEdge`] and [`MultipleEdges`] marker
/// types to provide compile-time specialization of graph behavior based on edge
/// multiplicity.  The associated `Slots` type is the per-neighbor container of
/// edges: at most one edge for simple graphs, a keyed collection for
/// multigraphs.
pub trait EdgeMultiplicity:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    type Slots: EdgeSlots;

    fn allows_parallel_edges() -> bool;
}

impl EdgeMultiplicity for SingleEdge {
    type Slots = SingleSlot;

    fn allows_parallel_edges() -> bool {
        false
    }
}

impl EdgeMultiplicity for MultipleEdges {
    type Slots = KeyedSlots;

    fn allows_parallel_edges() -> bool {
        true
    }
}

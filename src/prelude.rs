pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::edge_multiplicity::{EdgeMultiplicity, MultipleEdges, SingleEdge};
pub use crate::graph::{DiGraph, Graph, MultiDiGraph, MultiGraph, UnGraph};
pub use crate::graph_like::GraphLike;
pub use crate::{AttrValue, Attrs, EdgeKey, GraphError, NodeEntry, NodeKey};

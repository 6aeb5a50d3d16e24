//! In-memory graphs with attribute maps on nodes, edges and the graph itself.
//!
//! The central type is [`Graph`], available in four variants through the
//! aliases [`UnGraph`], [`DiGraph`], [`MultiGraph`] and [`MultiDiGraph`].
//! Algorithms consume graphs through the [`GraphLike`] trait and reject
//! unsupported variants with the checks in [`capability`].
//!
//! ```
//! use netgraph::{DiGraph, attrs};
//!
//! let mut g = DiGraph::new();
//! g.add_edge_with_attrs("a", "b", attrs! { "weight" => 2 });
//! g.add_edge("b", "c");
//! assert_eq!(g.successors(&"a").unwrap().collect::<Vec<_>>(), vec![&"b"]);
//! assert_eq!(g.to_undirected().number_of_edges(), 2);
//! ```

pub mod capability;
pub mod functions;
pub mod prelude;
pub mod search;
pub mod tracing_support;

mod arena;
mod attrs;
mod directedness;
mod edge_multiplicity;
mod edge_slots;
mod edge_store;
mod error;
mod format_debug;
mod graph;
mod graph_like;
mod node;
mod subgraph;
mod views;

#[doc(hidden)]
pub mod test_support;

pub use attrs::{AttrValue, Attrs, DEFAULT_WEIGHT, merge_attrs};
pub use capability::Capabilities;
pub use directedness::{Directed, Directedness, Undirected};
pub use edge_multiplicity::{EdgeMultiplicity, MultipleEdges, SingleEdge};
pub use edge_slots::{EdgeKey, EdgeSlots, KeyedSlots, SingleSlot};
pub use error::{GraphError, Result};
pub use graph::{DiGraph, Graph, MultiDiGraph, MultiGraph, UnGraph};
pub use graph_like::GraphLike;
pub use node::{NodeEntry, NodeKey};
pub use subgraph::SubgraphView;
pub use views::{AdjacencyView, EdgeRef, Neighbors};

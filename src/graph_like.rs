//! The read-only interface that graph algorithms are written against.

use crate::{
    attrs::Attrs,
    capability::Capabilities,
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    error::Result,
    graph::Graph,
    node::NodeKey,
    search::{Bfs, Dfs},
};

/// Anything that can be queried like a graph: a [`Graph`] or a borrowed
/// view of one such as a [`SubgraphView`](crate::SubgraphView).
///
/// Algorithms that only need to walk the structure should take a
/// `GraphLike` and check capabilities at entry with the helpers in
/// [`capability`](crate::capability).
pub trait GraphLike {
    type Node: NodeKey;

    fn is_directed(&self) -> bool;

    fn is_multigraph(&self) -> bool;

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            directed: self.is_directed(),
            multigraph: self.is_multigraph(),
        }
    }

    fn number_of_nodes(&self) -> usize;

    fn number_of_edges(&self) -> usize;

    fn has_node(&self, node: &Self::Node) -> bool;

    fn has_edge(&self, u: &Self::Node, v: &Self::Node) -> bool;

    fn node_ids(&self) -> impl Iterator<Item = &Self::Node>;

    /// Neighbors of `node`; successors in a directed graph.
    fn neighbor_ids(&self, node: &Self::Node) -> Result<impl Iterator<Item = &Self::Node>>;

    fn degree(&self, node: &Self::Node) -> Result<usize>;

    fn node_attributes(&self, node: &Self::Node) -> Result<&Attrs>;

    /// Breadth-first traversal from `start`.
    fn bfs(&self, start: Self::Node) -> Result<Bfs<'_, Self>>
    where
        Self: Sized,
    {
        Bfs::new(self, vec![start])
    }

    /// Depth-first traversal from `start`.
    fn dfs(&self, start: Self::Node) -> Result<Dfs<'_, Self>>
    where
        Self: Sized,
    {
        Dfs::new(self, vec![start])
    }
}

impl<N, D, M> GraphLike for Graph<N, D, M>
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
        Graph::number_of_nodes(self)
    }

    fn number_of_edges(&self) -> usize {
        Graph::number_of_edges(self)
    }

    fn has_node(&self, node: &N) -> bool {
        Graph::has_node(self, node)
    }

    fn has_edge(&self, u: &N, v: &N) -> bool {
        Graph::has_edge(self, u, v)
    }

    fn node_ids(&self) -> impl Iterator<Item = &N> {
        self.nodes()
    }

    fn neighbor_ids(&self, node: &N) -> Result<impl Iterator<Item = &N>> {
        self.neighbors(node)
    }

    fn degree(&self, node: &N) -> Result<usize> {
        Graph::degree(self, node)
    }

    fn node_attributes(&self, node: &N) -> Result<&Attrs> {
        self.node_attrs(node)
    }
}

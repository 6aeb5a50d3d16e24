//! Breadth- and depth-first traversal over any [`GraphLike`].

use std::collections::{HashSet, VecDeque};

use crate::{
    capability::{ensure_not_null, ensure_undirected},
    error::{GraphError, Result},
    graph_like::GraphLike,
};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Checks that every start node exists.
fn check_starts<G: GraphLike>(graph: &G, start: &[G::Node]) -> Result<()> {
    match start.iter().find(|node| !graph.has_node(node)) {
        Some(missing) => Err(GraphError::node_not_found(missing)),
        None => Ok(()),
    }
}

/// Visits nodes in breadth-first order, following successors in a directed
/// graph.  Each reachable node is yielded once.
pub struct Bfs<'g, G: GraphLike> {
    graph: &'g G,
    visited: HashSet<G::Node>,
    queue: VecDeque<G::Node>,
}

impl<'g, G: GraphLike> Bfs<'g, G> {
    pub fn new(graph: &'g G, start: Vec<G::Node>) -> Result<Self> {
        check_starts(graph, &start)?;
        Ok(Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue: start.into(),
        })
    }
}

impl<G: GraphLike> Iterator for Bfs<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(node) = self.queue.pop_front() {
            if !self.visited.insert(node.clone()) {
                continue;
            }
            if let Ok(neighbors) = graph.neighbor_ids(&node) {
                for neighbor in neighbors {
                    if !self.visited.contains(neighbor) {
                        self.queue.push_back(neighbor.clone());
                    }
                }
            }
            return Some(node);
        }
        None
    }
}

/// Visits nodes in depth-first preorder.  Neighbors are explored in the order
/// the graph reports them.
pub struct Dfs<'g, G: GraphLike> {
    graph: &'g G,
    visited: HashSet<G::Node>,
    stack: Vec<G::Node>,
}

impl<'g, G: GraphLike> Dfs<'g, G> {
    pub fn new(graph: &'g G, start: Vec<G::Node>) -> Result<Self> {
        check_starts(graph, &start)?;
        let mut stack = start;
        stack.reverse();
        Ok(Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        })
    }
}

impl<G: GraphLike> Iterator for Dfs<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(node) = self.stack.pop() {
            if !self.visited.insert(node.clone()) {
                continue;
            }
            if let Ok(neighbors) = graph.neighbor_ids(&node) {
                let mut pending: Vec<_> = neighbors
                    .filter(|neighbor| !self.visited.contains(*neighbor))
                    .cloned()
                    .collect();
                pending.reverse();
                self.stack.extend(pending);
            }
            return Some(node);
        }
        None
    }
}

/// True if every node is reachable from every other.  Only defined for
/// undirected graphs with at least one node.
pub fn is_connected<G: GraphLike>(graph: &G) -> Result<bool> {
    ensure_undirected(graph, "is_connected")?;
    ensure_not_null(graph, "Connectivity")?;
    let Some(first) = graph.node_ids().next().cloned() else {
        return Ok(false);
    };
    let reached = Bfs::new(graph, vec![first])?.count();
    Ok(reached == graph.number_of_nodes())
}

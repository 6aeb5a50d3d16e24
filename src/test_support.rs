//! Helpers for property tests: a random graph generator and a structural
//! consistency checker.

use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::{
    attrs,
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    graph::Graph,
    node::NodeKey,
    tracing_support::init_tracing,
};

const MAX_NODES: usize = 12;
const MAX_EDGES: usize = 40;

/// A random graph of any variant, built through the public mutation API.
/// Includes self-loops, repeated edges and a few node and edge removals.
#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<D, M> Arbitrary for ArbGraph<Graph<u8, D, M>>
where
    D: Directedness,
    M: EdgeMultiplicity,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % MAX_NODES;
        let num_edges = usize::arbitrary(g) % MAX_EDGES;
        let num_extra_self_loops = usize::arbitrary(g) % 4;
        let num_removals = usize::arbitrary(g) % 4;

        let mut graph = Graph::<u8, D, M>::new();
        for node in 0..num_nodes {
            graph.add_node_with_attrs(node as u8, attrs! { "label" => node });
        }
        if num_nodes > 0 {
            let pick = |g: &mut Gen| (usize::arbitrary(g) % num_nodes) as u8;
            for i in 0..num_edges {
                let (u, v) = (pick(g), pick(g));
                graph.add_edge_with_attrs(u, v, attrs! { "weight" => i % 7 });
                if i < num_extra_self_loops {
                    graph.add_edge(u, u);
                }
            }
            for _ in 0..num_removals {
                let (u, v) = (pick(g), pick(g));
                if bool::arbitrary(g) {
                    graph.remove_node(&u).ok();
                } else {
                    graph.remove_edge(&u, &v).ok();
                }
            }
        }
        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks a graph's storage invariants and the agreement between its query
/// methods, panicking on the first violation.
pub fn check_graph_consistency<N, D, M>(graph: &Graph<N, D, M>)
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    init_tracing();
    assert_eq!(graph.check_consistency(), Ok(()));
    assert!(!has_duplicates(graph.nodes()));
    assert_eq!(graph.nodes().count(), graph.number_of_nodes());
    assert_eq!(graph.edges().count(), graph.number_of_edges());

    for edge in graph.edges() {
        assert!(graph.has_node(edge.source) && graph.has_node(edge.target));
        assert!(graph.has_edge(edge.source, edge.target));
        if !graph.is_directed() {
            assert!(graph.has_edge(edge.target, edge.source));
            assert!(std::ptr::eq(
                graph.edge_at(edge.source, edge.target, edge.key).unwrap(),
                graph.edge_at(edge.target, edge.source, edge.key).unwrap()
            ));
        }
        if !graph.is_multigraph() {
            assert_eq!(graph.number_of_edges_between(edge.source, edge.target), 1);
            assert_eq!(edge.key, 0);
        }
    }

    let degree_sum: usize = graph.degrees().map(|(_, degree)| degree).sum();
    assert_eq!(degree_sum, 2 * graph.number_of_edges());

    for node in graph.nodes() {
        let neighbors: Vec<_> = graph.neighbors(node).unwrap().collect();
        assert!(!has_duplicates(neighbors.iter()));
        for neighbor in neighbors {
            assert!(graph.has_edge(node, neighbor));
        }
    }
}

//! Property tests run against every graph variant.

use std::collections::HashSet;

use netgraph::prelude::*;
use netgraph::test_support::{ArbGraph, check_graph_consistency, has_duplicates};

type TestGraph<D, M> = Graph<u8, D, M>;

fn prop_is_consistent<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    check_graph_consistency(&graph);
    true
}

fn prop_num_edges_is_correct<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let between: usize = graph
        .nodes()
        .flat_map(|u| graph.nodes().map(move |v| (u, v)))
        .filter(|(u, v)| graph.is_directed() || u <= v)
        .map(|(u, v)| graph.number_of_edges_between(u, v))
        .sum();
    graph.number_of_edges() == graph.edges().count() && graph.number_of_edges() == between
}

fn prop_degree_sum_is_twice_edges<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let total: usize = graph.degrees().map(|(_, degree)| degree).sum();
    total == 2 * graph.number_of_edges()
}

fn prop_edges_have_no_duplicates<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    !has_duplicates(graph.edges().map(|edge| {
        let (u, v) = (*edge.source, *edge.target);
        if graph.is_directed() || u <= v {
            (u, v, edge.key)
        } else {
            (v, u, edge.key)
        }
    }))
}

fn prop_edges_of_covers_every_edge<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    // Each edge is reported from its source; undirected edges also from
    // their other end unless they are self-loops.
    let reported: usize = graph
        .nodes()
        .map(|node| graph.edges_of(node).unwrap().count())
        .sum();
    let expected = if graph.is_directed() {
        graph.number_of_edges()
    } else {
        2 * graph.number_of_edges() - graph.number_of_selfloops()
    };
    reported == expected
}

fn prop_remove_node_removes_incident_edges<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { mut graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let Some(node) = graph.nodes().next().copied() else {
        return true;
    };
    let num_nodes = graph.number_of_nodes();
    let num_edges = graph.number_of_edges();
    let incident = graph
        .edges()
        .filter(|edge| *edge.source == node || *edge.target == node)
        .count();
    if graph.remove_node(&node).is_err() {
        return false;
    }
    check_graph_consistency(&graph);
    graph.number_of_nodes() == num_nodes - 1
        && graph.number_of_edges() == num_edges - incident
        && !graph.has_node(&node)
        && graph
            .nodes()
            .all(|other| graph.neighbors(other).unwrap().all(|n| *n != node))
}

fn prop_remove_edge_removes_one<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { mut graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let Some((u, v)) = graph.edges().next().map(|edge| (*edge.source, *edge.target)) else {
        return true;
    };
    let num_edges = graph.number_of_edges();
    let parallel = graph.number_of_edges_between(&u, &v);
    if graph.remove_edge(&u, &v).is_err() {
        return false;
    }
    check_graph_consistency(&graph);
    graph.number_of_edges() == num_edges - 1
        && graph.number_of_edges_between(&u, &v) == parallel - 1
        && graph.has_edge(&u, &v) == (parallel > 1)
}

fn prop_clear_removes_everything<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { mut graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    graph.clear();
    graph.number_of_nodes() == 0
        && graph.number_of_edges() == 0
        && graph.graph_attrs().is_empty()
        && graph.check_consistency().is_ok()
}

fn prop_clear_edges_keeps_nodes<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { mut graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let nodes: Vec<u8> = graph.nodes().copied().collect();
    graph.clear_edges();
    graph.number_of_edges() == 0
        && graph.nodes().copied().collect::<Vec<_>>() == nodes
        && graph.degrees().all(|(_, degree)| degree == 0)
}

fn prop_copy_is_equal_and_independent<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let mut copy = graph.copy();
    if copy != graph {
        return false;
    }
    copy.add_node(200);
    !graph.has_node(&200) && copy != graph
}

fn prop_subgraph_is_induced<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let keep: HashSet<u8> = graph.nodes().copied().filter(|n| n % 2 == 0).collect();
    let sub = graph.subgraph(keep.iter());
    let view = graph.subgraph_view(keep.iter());
    let expected_edges = graph
        .edges()
        .filter(|edge| keep.contains(edge.source) && keep.contains(edge.target))
        .count();
    check_graph_consistency(&sub);
    sub.number_of_nodes() == keep.len()
        && sub.number_of_edges() == expected_edges
        && view.number_of_edges() == expected_edges
        && view.to_graph() == sub
        && sub.edges().all(|edge| {
            graph
                .adj(edge.source)
                .unwrap()
                .get_by_key(edge.target, edge.key)
                == Some(edge.attrs)
        })
}

fn prop_to_directed_doubles_undirected_edges<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let directed = graph.to_directed();
    check_graph_consistency(&directed);
    let expected = if graph.is_directed() {
        graph.number_of_edges()
    } else {
        2 * graph.number_of_edges() - graph.number_of_selfloops()
    };
    directed.number_of_edges() == expected
}

fn prop_to_undirected_covers_every_pair<D: Directedness, M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<D, M>>,
) -> bool {
    let undirected = graph.to_undirected();
    check_graph_consistency(&undirected);
    graph
        .edges()
        .all(|edge| undirected.has_edge(edge.source, edge.target) && undirected.has_edge(edge.target, edge.source))
}

fn prop_undirected_round_trip<M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<Undirected, M>>,
) -> bool {
    graph.to_directed().to_undirected() == graph
}

fn prop_reverse_twice_is_identity<M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<Directed, M>>,
) -> bool {
    let reversed = graph.reverse();
    check_graph_consistency(&reversed);
    reversed.number_of_edges() == graph.number_of_edges() && reversed.reverse() == graph
}

fn prop_in_and_out_degrees_agree<M: EdgeMultiplicity>(
    ArbGraph { graph }: ArbGraph<TestGraph<Directed, M>>,
) -> bool {
    let out: usize = graph.nodes().map(|n| graph.out_degree(n).unwrap()).sum();
    let into: usize = graph.nodes().map(|n| graph.in_degree(n).unwrap()).sum();
    out == graph.number_of_edges()
        && into == graph.number_of_edges()
        && graph.nodes().all(|u| {
            graph
                .successors(u)
                .unwrap()
                .all(|v| graph.has_predecessor(v, u))
        })
}

macro_rules! graph_suite {
    ($name:ident, $directedness:ty, $multiplicity:ty $(; $($extra:ident),* $(,)?)?) => {
        mod $name {
            use super::*;

            macro_rules! quickcheck_test {
                ($test_name:ident) => {
                    #[test]
                    fn $test_name() {
                        let f: fn(ArbGraph<TestGraph<$directedness, $multiplicity>>) -> bool =
                            super::$test_name::<$directedness, $multiplicity>;
                        quickcheck::quickcheck(f);
                    }
                };
            }

            macro_rules! quickcheck_variant_test {
                ($test_name:ident) => {
                    #[test]
                    fn $test_name() {
                        let f: fn(ArbGraph<TestGraph<$directedness, $multiplicity>>) -> bool =
                            super::$test_name::<$multiplicity>;
                        quickcheck::quickcheck(f);
                    }
                };
            }

            quickcheck_test!(prop_is_consistent);
            quickcheck_test!(prop_num_edges_is_correct);
            quickcheck_test!(prop_degree_sum_is_twice_edges);
            quickcheck_test!(prop_edges_have_no_duplicates);
            quickcheck_test!(prop_edges_of_covers_every_edge);
            quickcheck_test!(prop_remove_node_removes_incident_edges);
            quickcheck_test!(prop_remove_edge_removes_one);
            quickcheck_test!(prop_clear_removes_everything);
            quickcheck_test!(prop_clear_edges_keeps_nodes);
            quickcheck_test!(prop_copy_is_equal_and_independent);
            quickcheck_test!(prop_subgraph_is_induced);
            quickcheck_test!(prop_to_directed_doubles_undirected_edges);
            quickcheck_test!(prop_to_undirected_covers_every_pair);
            $($(quickcheck_variant_test!($extra);)*)?
        }
    };
}

graph_suite!(undirected_single, Undirected, SingleEdge; prop_undirected_round_trip);
graph_suite!(undirected_multiple, Undirected, MultipleEdges; prop_undirected_round_trip);
graph_suite!(
    directed_single, Directed, SingleEdge;
    prop_reverse_twice_is_identity,
    prop_in_and_out_degrees_agree,
);
graph_suite!(
    directed_multiple, Directed, MultipleEdges;
    prop_reverse_twice_is_identity,
    prop_in_and_out_degrees_agree,
);

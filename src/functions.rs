//! Free functions over graphs: summary statistics, neighborhood queries and
//! bulk attribute access.

use indexmap::IndexMap;

use crate::{
    attrs::{AttrValue, edge_weight},
    capability::ensure_undirected,
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    edge_slots::EdgeKey,
    error::{GraphError, Result},
    graph::Graph,
    node::NodeKey,
};

/// Edges present divided by edges possible, ignoring self-loops in the count
/// of possible edges.  Zero for graphs with fewer than two nodes.
pub fn density<N, D, M>(graph: &Graph<N, D, M>) -> f64
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    let n = graph.number_of_nodes() as f64;
    let m = graph.number_of_edges() as f64;
    if m == 0.0 || n <= 1.0 {
        return 0.0;
    }
    let possible = n * (n - 1.0);
    if D::is_directed() { m / possible } else { 2.0 * m / possible }
}

/// `histogram[d]` is the number of nodes with degree `d`.
pub fn degree_histogram<N, D, M>(graph: &Graph<N, D, M>) -> Vec<usize>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    let mut histogram = Vec::new();
    for (_, degree) in graph.degrees() {
        if histogram.len() <= degree {
            histogram.resize(degree + 1, 0);
        }
        histogram[degree] += 1;
    }
    histogram
}

/// True if the graph has no edges.  It may still have nodes.
pub fn is_empty<N, D, M>(graph: &Graph<N, D, M>) -> bool
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    graph.number_of_edges() == 0
}

/// Nodes that are neither `node` nor one of its neighbors.
pub fn non_neighbors<'g, N, D, M>(
    graph: &'g Graph<N, D, M>,
    node: &'g N,
) -> Result<impl Iterator<Item = &'g N> + use<'g, N, D, M>>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    let adjacency = graph.adj(node)?;
    Ok(graph
        .nodes()
        .filter(move |other| *other != node && !adjacency.contains(other)))
}

/// Nodes adjacent to both `u` and `v`, other than `u` and `v` themselves, in
/// the order they neighbor `u`.  Undirected graphs only.
pub fn common_neighbors<'g, N, D, M>(graph: &'g Graph<N, D, M>, u: &N, v: &N) -> Result<Vec<&'g N>>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    ensure_undirected(graph, "common_neighbors")?;
    let of_v = graph.adj(v)?;
    Ok(graph
        .neighbors(u)?
        .filter(|w| *w != u && *w != v && of_v.contains(w))
        .collect())
}

/// Predecessors followed by successors in a directed graph; the neighbors in
/// an undirected one.  A node that is both is listed twice.
pub fn all_neighbors<'g, N, D, M>(graph: &'g Graph<N, D, M>, node: &N) -> Result<Vec<&'g N>>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    let successors = graph.neighbors(node)?;
    if !D::is_directed() {
        return Ok(successors.collect());
    }
    let predecessors = graph
        .predecessor_map(node)
        .ok_or_else(|| GraphError::node_not_found(node))?;
    Ok(predecessors.keys().chain(successors).collect())
}

/// Sets attribute `name` on each listed node.  Nodes not in the graph are
/// skipped.
pub fn set_node_attributes<N, D, M, I>(graph: &mut Graph<N, D, M>, name: &str, values: I)
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
    I: IntoIterator<Item = (N, AttrValue)>,
{
    for (node, value) in values {
        if let Ok(attrs) = graph.node_attrs_mut(&node) {
            attrs.insert(name.to_string(), value);
        }
    }
}

/// Attribute `name` of every node that has it, in node order.
pub fn get_node_attributes<N, D, M>(graph: &Graph<N, D, M>, name: &str) -> IndexMap<N, AttrValue>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    graph
        .nodes_with_attrs()
        .filter_map(|(node, attrs)| Some((node.clone(), attrs.get(name)?.clone())))
        .collect()
}

/// Sets attribute `name` on the edges between each listed pair; in a
/// multigraph on every parallel edge.  Pairs that are not edges are skipped.
pub fn set_edge_attributes<N, D, M, I>(graph: &mut Graph<N, D, M>, name: &str, values: I)
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
    I: IntoIterator<Item = ((N, N), AttrValue)>,
{
    for ((u, v), value) in values {
        graph.update_parallel_edges(&u, &v, |attrs| {
            attrs.insert(name.to_string(), value.clone());
        });
    }
}

/// Attribute `name` of every edge that has it, keyed by `(source, target,
/// key)` as [`Graph::edges`] reports them.
pub fn get_edge_attributes<N, D, M>(
    graph: &Graph<N, D, M>,
    name: &str,
) -> IndexMap<(N, N, EdgeKey), AttrValue>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    graph
        .edges()
        .filter_map(|edge| {
            let value = edge.attrs.get(name)?.clone();
            Some(((edge.source.clone(), edge.target.clone(), edge.key), value))
        })
        .collect()
}

/// With `edge`, whether that edge carries `weight_key`; otherwise whether the
/// graph has edges and all of them do.
pub fn is_weighted<N, D, M>(
    graph: &Graph<N, D, M>,
    edge: Option<(&N, &N)>,
    weight_key: &str,
) -> Result<bool>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    if let Some((u, v)) = edge {
        return Ok(graph.edge_attrs(u, v)?.contains_key(weight_key));
    }
    if is_empty(graph) {
        return Ok(false);
    }
    Ok(graph.edges().all(|edge| edge.attrs.contains_key(weight_key)))
}

/// With `edge`, whether that edge has a negative `weight_key`; otherwise
/// whether any edge does.  Weights must be numeric.
pub fn is_negatively_weighted<N, D, M>(
    graph: &Graph<N, D, M>,
    edge: Option<(&N, &N)>,
    weight_key: &str,
) -> Result<bool>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    if let Some((u, v)) = edge {
        let attrs = graph.edge_attrs(u, v)?;
        if !attrs.contains_key(weight_key) {
            return Ok(false);
        }
        return Ok(edge_weight(attrs, weight_key, u, v)? < 0.0);
    }
    for edge in graph.edges() {
        if edge.attrs.contains_key(weight_key)
            && edge_weight(edge.attrs, weight_key, edge.source, edge.target)? < 0.0
        {
            return Ok(true);
        }
    }
    Ok(false)
}

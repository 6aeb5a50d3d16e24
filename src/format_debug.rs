//! `Debug` output for graphs.
//!
//! A graph prints as its variant name with the graph attributes (when there
//! are any), the nodes with their attributes, and the edges with theirs:
//!
//! ```text
//! DiGraph { nodes: {1: {}, 2: {}}, edges: {1 -> 2: {"w": Number(3)}} }
//! ```
//!
//! Multigraph edges carry their key, as in `1 -- 2 #0`.

use std::fmt::{Debug, Formatter};

use crate::{
    directedness::Directedness, edge_multiplicity::EdgeMultiplicity, graph::Graph, node::NodeKey,
};

/// Debug-formats with a closure.
struct FormatDebugWith<F>(F);

impl<F> Debug for FormatDebugWith<F>
where
    F: Fn(&mut Formatter<'_>) -> std::fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        (self.0)(f)
    }
}

/// Debug-formats a string without quotes.
struct FormatDebugAs(String);

impl Debug for FormatDebugAs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn format_debug<N, D, M>(graph: &Graph<N, D, M>, fmt: &mut Formatter<'_>) -> std::fmt::Result
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    let arrow = if D::is_directed() { "->" } else { "--" };
    let edge_tag = |source: &N, target: &N, key| {
        let tag = if M::allows_parallel_edges() {
            format!("{:?} {} {:?} #{}", source, arrow, target, key)
        } else {
            format!("{:?} {} {:?}", source, arrow, target)
        };
        FormatDebugAs(tag)
    };

    let mut out = fmt.debug_struct(graph.capabilities().describe());
    if !graph.graph_attrs().is_empty() {
        out.field("attrs", graph.graph_attrs());
    }
    out.field(
        "nodes",
        &FormatDebugWith(|f: &mut Formatter<'_>| {
            f.debug_map().entries(graph.nodes_with_attrs()).finish()
        }),
    )
    .field(
        "edges",
        &FormatDebugWith(|f: &mut Formatter<'_>| {
            f.debug_map()
                .entries(
                    graph
                        .edges()
                        .map(|edge| (edge_tag(edge.source, edge.target, edge.key), edge.attrs)),
                )
                .finish()
        }),
    )
    .finish()
}

impl<N, D, M> Debug for Graph<N, D, M>
where
    N: NodeKey,
    D: Directedness,
    M: EdgeMultiplicity,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f)
    }
}

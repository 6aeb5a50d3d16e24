//! Example that builds a graph from an edge list given on the command line
//! and prints a summary.
//!
//! Usage:
//!   cargo run --example graph_summary -- --edges a-b,b-c,c-a
//!   cargo run --example graph_summary -- --edges 1-2:0.5,2-3:2 --directed
//!   cargo run --example graph_summary -- --edges 1-2,1-2,2-2 --multi

use std::process;

use clap::Parser;
use netgraph::{
    DEFAULT_WEIGHT, Directed, Directedness, EdgeMultiplicity, Graph, MultipleEdges, SingleEdge,
    Undirected, functions, search,
};

/// Build a graph from an edge list and print a summary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated edges `u-v`, optionally weighted as `u-v:w`
    #[arg(long, value_delimiter = ',', required = true)]
    edges: Vec<String>,

    /// Build a directed graph
    #[arg(long)]
    directed: bool,

    /// Allow parallel edges
    #[arg(long)]
    multi: bool,

    /// Log graph mutations to stderr
    #[arg(long)]
    verbose: bool,
}

type Edge = (String, String, Option<f64>);

fn parse_edge(text: &str) -> Result<Edge, String> {
    let (ends, weight) = match text.split_once(':') {
        Some((ends, weight)) => {
            let weight = weight
                .parse::<f64>()
                .map_err(|err| format!("bad weight in '{text}': {err}"))?;
            (ends, Some(weight))
        }
        None => (text, None),
    };
    match ends.split_once('-') {
        Some((u, v)) if !u.is_empty() && !v.is_empty() => {
            Ok((u.trim().to_string(), v.trim().to_string(), weight))
        }
        _ => Err(format!("edge '{text}' is not of the form u-v")),
    }
}

fn build<D: Directedness, M: EdgeMultiplicity>(edges: &[Edge]) -> Graph<String, D, M> {
    let mut graph = Graph::new();
    for (u, v, weight) in edges {
        match weight {
            Some(weight) => graph.add_weighted_edges_from(
                [(u.clone(), v.clone(), *weight)],
                DEFAULT_WEIGHT,
            ),
            None => {
                graph.add_edge(u.clone(), v.clone());
            }
        }
    }
    graph
}

fn print_summary<D: Directedness, M: EdgeMultiplicity>(graph: &Graph<String, D, M>) {
    println!("Graph kind: {}", graph.capabilities().describe());
    println!("Nodes: {}", graph.number_of_nodes());
    println!("Edges: {}", graph.number_of_edges());
    println!("Self-loops: {}", graph.number_of_selfloops());
    println!("Density: {:.4}", functions::density(graph));
    match graph.size_weighted(DEFAULT_WEIGHT) {
        Ok(total) => println!("Total weight: {total}"),
        Err(err) => println!("Total weight: unavailable ({err})"),
    }
    if !graph.is_directed() {
        match search::is_connected(graph) {
            Ok(connected) => println!("Connected: {connected}"),
            Err(err) => println!("Connected: {err}"),
        }
    }

    println!("\nDegrees:");
    for (node, degree) in graph.degrees() {
        println!("  {node}: {degree}");
    }

    println!("\nDegree histogram: {:?}", functions::degree_histogram(graph));
}

fn run<D: Directedness, M: EdgeMultiplicity>(edges: &[Edge]) {
    let graph = build::<D, M>(edges);
    print_summary(&graph);
}

fn main() {
    let args = Args::parse();
    if args.verbose && !netgraph::tracing_support::init_stderr_logging() {
        eprintln!("logging unavailable; built without the `tracing` feature?");
    }

    let edges: Vec<Edge> = match args.edges.iter().map(|text| parse_edge(text)).collect() {
        Ok(edges) => edges,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    match (args.directed, args.multi) {
        (false, false) => run::<Undirected, SingleEdge>(&edges),
        (true, false) => run::<Directed, SingleEdge>(&edges),
        (false, true) => run::<Undirected, MultipleEdges>(&edges),
        (true, true) => run::<Directed, MultipleEdges>(&edges),
    }
}

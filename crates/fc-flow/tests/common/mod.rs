//! Shared helpers for fc-flow integration tests.

#![allow(dead_code)]

use fc_graph::{Edge, Graph, GraphBuilder};

/// Route solver logs to the test harness; repeated calls are harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Six nodes, nine undirected links, each added as two opposite edges.
pub fn reference_network() -> Graph {
    GraphBuilder::new()
        .nodes(["1", "2", "3", "4", "5", "6"])
        .bidirectional("1", "2", 5.0)
        .bidirectional("1", "4", 13.0)
        .bidirectional("2", "4", 3.0)
        .bidirectional("2", "3", 12.0)
        .bidirectional("3", "4", 2.0)
        .bidirectional("3", "5", 3.0)
        .bidirectional("3", "6", 20.0)
        .bidirectional("4", "5", 14.0)
        .bidirectional("5", "6", 1.0)
        .build()
        .expect("reference network is well formed")
}

pub fn endpoint_names<'g, P>(graph: &'g Graph<P>, edges: &[&Edge]) -> Vec<(&'g str, &'g str)> {
    edges
        .iter()
        .map(|e| {
            (
                graph.node(e.from()).unwrap().name.as_str(),
                graph.node(e.to()).unwrap().name.as_str(),
            )
        })
        .collect()
}

pub fn capacity_sum(edges: &[&Edge]) -> f64 {
    edges.iter().map(|e| e.capacity()).sum()
}

//! End-to-end max-flow / min-cut on the six-node reference network.

mod common;

use common::{capacity_sum, endpoint_names, init_tracing, reference_network};
use fc_flow::{FlowConfig, MaxFlowExt, max_flow_with, minimum_cut};

#[test]
fn reference_max_flow() {
    init_tracing();
    let mut graph = reference_network();

    // Cut {1,4,5} | {2,3,6}: 1->2 (5) + 4->2 (3) + 4->3 (2) + 5->3 (3) + 5->6 (1).
    let value = graph.max_flow("1", "6").unwrap();
    assert_eq!(value, 14.0);
    graph.validate().unwrap();
}

#[test]
fn reference_min_cut_matches_flow() {
    init_tracing();
    let mut graph = reference_network();
    let value = graph.max_flow("1", "6").unwrap();

    let cut = graph.minimum_cut("1", "6").unwrap();
    assert_eq!(capacity_sum(&cut), value);
    assert_eq!(
        endpoint_names(&graph, &cut),
        [("1", "2"), ("4", "2"), ("4", "3"), ("5", "3"), ("5", "6")]
    );
    assert!(cut.iter().all(|e| e.remaining() == 0.0));
}

#[test]
fn reference_second_run_is_drained() {
    let mut graph = reference_network();
    assert_eq!(graph.max_flow("1", "6").unwrap(), 14.0);
    assert_eq!(graph.max_flow("1", "6").unwrap(), 0.0);

    // The drained residual still yields the same cut.
    let cut = minimum_cut(&graph, "1", "6").unwrap();
    assert_eq!(capacity_sum(&cut), 14.0);
}

#[test]
fn reference_flow_is_conserved() {
    let mut graph = reference_network();
    let solution = max_flow_with(&mut graph, "1", "6", &FlowConfig::default()).unwrap();
    assert!(solution.augmentations > 0);

    for node in graph.nodes() {
        let out: f64 = graph.outgoing(node.id).map(|e| e.flow()).sum();
        let inflow: f64 = graph.incoming(node.id).map(|e| e.flow()).sum();
        let net = out - inflow;
        match node.name.as_str() {
            "1" => assert_eq!(net, solution.value),
            "6" => assert_eq!(net, -solution.value),
            _ => assert_eq!(net, 0.0, "node {} leaks flow", node.name),
        }
    }
}

#[test]
fn reference_reverse_direction() {
    let mut graph = reference_network();
    // Every link is symmetric, so 6 -> 1 has the same value.
    assert_eq!(graph.max_flow("6", "1").unwrap(), 14.0);
    let cut = graph.minimum_cut("6", "1").unwrap();
    assert_eq!(capacity_sum(&cut), 14.0);
}

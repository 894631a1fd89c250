//! Graph validation logic.

use std::collections::HashSet;

use fc_core::{EdgeId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph};

/// Validate the graph structure: all references are live, adjacency is
/// consistent, and residual capacities are in range.
pub(crate) fn validate_structure<P>(graph: &Graph<P>) -> GraphResult<()> {
    validate_name_index(graph)?;
    validate_adjacency(graph)?;
    validate_residuals(graph)
}

/// The name index must map exactly the live nodes.
fn validate_name_index<P>(graph: &Graph<P>) -> GraphResult<()> {
    for (name, &id) in &graph.by_name {
        match graph.node(id) {
            Some(node) if node.name == *name => {}
            _ => {
                return Err(GraphError::StaleId {
                    what: "NodeId",
                    index: id.index(),
                });
            }
        }
    }
    if graph.nodes().count() != graph.by_name.len() {
        return Err(fc_core::FcError::Invariant {
            what: "name index out of sync with node arena",
        }
        .into());
    }
    Ok(())
}

/// Every listed edge must be live and touch the listing node on the right
/// side; every live edge must be listed exactly once on each side.
fn validate_adjacency<P>(graph: &Graph<P>) -> GraphResult<()> {
    let mut seen_out: HashSet<EdgeId> = HashSet::new();
    let mut seen_in: HashSet<EdgeId> = HashSet::new();

    for node in graph.nodes() {
        for &edge_id in node.outgoing() {
            check_endpoint(graph, edge_id, node.id, |e| e.from())?;
            if !seen_out.insert(edge_id) {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                });
            }
        }
        for &edge_id in node.incoming() {
            check_endpoint(graph, edge_id, node.id, |e| e.to())?;
            if !seen_in.insert(edge_id) {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    node: node.id,
                });
            }
        }
    }

    for edge in graph.edges() {
        if !seen_out.contains(&edge.id()) {
            return Err(GraphError::InconsistentAdjacency {
                edge: edge.id(),
                node: edge.from(),
            });
        }
        if !seen_in.contains(&edge.id()) {
            return Err(GraphError::InconsistentAdjacency {
                edge: edge.id(),
                node: edge.to(),
            });
        }
    }

    Ok(())
}

fn check_endpoint<P>(
    graph: &Graph<P>,
    edge_id: EdgeId,
    node: NodeId,
    endpoint: impl Fn(&Edge) -> NodeId,
) -> GraphResult<()> {
    let edge = graph.edge(edge_id).ok_or(GraphError::StaleId {
        what: "EdgeId",
        index: edge_id.index(),
    })?;
    if endpoint(edge) != node
        || graph.node(edge.from()).is_none()
        || graph.node(edge.to()).is_none()
    {
        return Err(GraphError::InconsistentAdjacency {
            edge: edge_id,
            node,
        });
    }
    Ok(())
}

fn validate_residuals<P>(graph: &Graph<P>) -> GraphResult<()> {
    for edge in graph.edges() {
        let remaining = edge.remaining();
        if !(0.0..=edge.capacity()).contains(&remaining) {
            return Err(GraphError::ResidualOutOfRange {
                edge: edge.id(),
                remaining,
                capacity: edge.capacity(),
            });
        }
    }
    Ok(())
}

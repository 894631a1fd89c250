//! Minimum cut extraction from a drained residual graph.

use fc_core::NodeId;
use fc_graph::{Edge, Graph};
use tracing::debug;

use crate::augment::FlowConfig;
use crate::error::{FlowError, FlowResult};
use crate::search::residual_reachable;

/// Minimum `source`/`sink` cut with the default configuration.
pub fn minimum_cut<'g, P>(
    graph: &'g Graph<P>,
    source: &str,
    sink: &str,
) -> FlowResult<Vec<&'g Edge>> {
    minimum_cut_with(graph, source, sink, &FlowConfig::default())
}

/// Saturated edges leaving the source's residual component.
///
/// Expects the residual state left by a completed max-flow run. The cut is
/// every positive-capacity edge `u -> v` with `u` reachable from `source` in
/// the residual graph and `v` not, listed in node order then edge-list order.
/// Its capacity sum equals the max-flow value.
///
/// `source == sink` and a sink that was never connected both give an empty
/// cut. A sink that is still reachable means the flow was not run to
/// completion and is reported as `FlowError::ResidualNotDrained`.
pub fn minimum_cut_with<'g, P>(
    graph: &'g Graph<P>,
    source: &str,
    sink: &str,
    config: &FlowConfig,
) -> FlowResult<Vec<&'g Edge>> {
    let source_id = graph.node_id(source)?;
    let sink_id = graph.node_id(sink)?;
    if source_id == sink_id {
        return Ok(Vec::new());
    }

    let tol = config.tolerances;
    let reachable = residual_reachable(graph, source_id, tol);
    let on_source_side = |id: NodeId| reachable.get(id.slot()).copied().unwrap_or(false);
    if on_source_side(sink_id) {
        return Err(FlowError::ResidualNotDrained {
            source_node: source.to_owned(),
            sink_node: sink.to_owned(),
        });
    }

    let cut: Vec<&Edge> = graph
        .nodes()
        .filter(|node| on_source_side(node.id))
        .flat_map(|node| graph.outgoing(node.id))
        .filter(|edge| {
            !on_source_side(edge.to()) && edge.capacity() > tol.abs && edge.is_saturated(tol)
        })
        .collect();

    debug!(
        source,
        sink,
        edges = cut.len(),
        capacity = cut.iter().map(|e| e.capacity()).sum::<f64>(),
        "minimum cut"
    );
    Ok(cut)
}

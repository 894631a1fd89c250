//! Edmonds-Karp flow augmentation.

use fc_core::{Real, Tolerances};
use fc_graph::Graph;
use tracing::{debug, info, warn};

use crate::error::{FlowError, FlowResult};
use crate::search::{AugmentingPath, Direction, augmenting_path};

/// Flow solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FlowConfig {
    /// Residuals at or below `max(abs, rel * capacity)` count as zero.
    pub tolerances: Tolerances,
    /// Cap on the number of augmentations; `None` runs to saturation.
    pub max_augmentations: Option<usize>,
}

/// Outcome of a completed max-flow run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSolution {
    /// Total flow pushed from source to sink.
    pub value: Real,
    /// Number of augmenting paths used.
    pub augmentations: usize,
}

/// Maximum flow value from `source` to `sink` with the default configuration.
///
/// The residual state is left in the graph: a second call on the same graph
/// returns 0 unless `Graph::reset_flow` runs in between.
pub fn max_flow<P>(graph: &mut Graph<P>, source: &str, sink: &str) -> FlowResult<Real> {
    max_flow_with(graph, source, sink, &FlowConfig::default()).map(|s| s.value)
}

/// Push flow along shortest augmenting paths until none is left.
pub fn max_flow_with<P>(
    graph: &mut Graph<P>,
    source: &str,
    sink: &str,
    config: &FlowConfig,
) -> FlowResult<FlowSolution> {
    let source_id = graph.node_id(source)?;
    let sink_id = graph.node_id(sink)?;
    let mut solution = FlowSolution::default();

    while let Some(path) = augmenting_path(graph, source_id, sink_id, config.tolerances) {
        if let Some(limit) = config.max_augmentations {
            if solution.augmentations >= limit {
                warn!(limit, value = solution.value, "augmentation limit reached");
                return Err(FlowError::IterationLimit {
                    limit,
                    value: solution.value,
                });
            }
        }

        let bottleneck = path.bottleneck(graph);
        augment(graph, &path, bottleneck);
        solution.value += bottleneck;
        solution.augmentations += 1;
        debug!(
            iteration = solution.augmentations,
            bottleneck,
            hops = path.len(),
            total = solution.value,
            "augmented"
        );
    }

    info!(
        source,
        sink,
        value = solution.value,
        augmentations = solution.augmentations,
        "max flow complete"
    );
    Ok(solution)
}

/// Apply `amount` along every step of `path`.
fn augment<P>(graph: &mut Graph<P>, path: &AugmentingPath, amount: Real) {
    for step in &path.steps {
        if let Some(edge) = graph.edge_mut(step.edge) {
            match step.direction {
                Direction::Forward => edge.push_flow(amount),
                Direction::Backward => edge.cancel_flow(amount),
            }
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: FlowConfig = serde_json::from_str(r#"{"max_augmentations": 10}"#).unwrap();
        assert_eq!(config.max_augmentations, Some(10));
        assert_eq!(config.tolerances, Tolerances::default());
    }

    #[test]
    fn solution_serializes_as_plain_fields() {
        let solution = FlowSolution {
            value: 14.0,
            augmentations: 5,
        };
        let json = serde_json::to_value(solution).unwrap();
        assert_eq!(json["value"], 14.0);
        assert_eq!(json["augmentations"], 5);
    }
}

//! Error types for flow computations.

use fc_core::Real;
use fc_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while computing a flow or a cut.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Augmentation limit {limit} reached with flow value {value}")]
    IterationLimit { limit: usize, value: Real },

    #[error("Residual graph still connects '{source_node}' to '{sink_node}'; run max_flow first")]
    ResidualNotDrained {
        source_node: String,
        sink_node: String,
    },
}

pub type FlowResult<T> = Result<T, FlowError>;

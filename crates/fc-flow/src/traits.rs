//! Method-style solve API on `Graph`.

use fc_core::Real;
use fc_graph::{Edge, Graph};

use crate::error::FlowResult;
use crate::{augment, cut};

/// Max-flow / min-cut as methods on a graph.
///
/// ```
/// use fc_flow::MaxFlowExt;
/// use fc_graph::GraphBuilder;
///
/// let mut graph = GraphBuilder::<()>::new()
///     .nodes(["s", "t"])
///     .edge("s", "t", 2.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.max_flow("s", "t").unwrap(), 2.5);
/// assert_eq!(graph.minimum_cut("s", "t").unwrap().len(), 1);
/// ```
pub trait MaxFlowExt {
    /// See [`augment::max_flow`].
    fn max_flow(&mut self, source: &str, sink: &str) -> FlowResult<Real>;

    /// See [`cut::minimum_cut`].
    fn minimum_cut(&self, source: &str, sink: &str) -> FlowResult<Vec<&Edge>>;
}

impl<P> MaxFlowExt for Graph<P> {
    fn max_flow(&mut self, source: &str, sink: &str) -> FlowResult<Real> {
        augment::max_flow(self, source, sink)
    }

    fn minimum_cut(&self, source: &str, sink: &str) -> FlowResult<Vec<&Edge>> {
        cut::minimum_cut(self, source, sink)
    }
}

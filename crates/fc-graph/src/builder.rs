//! Incremental graph builder.

use fc_core::Real;

use crate::error::GraphResult;
use crate::graph::Graph;

#[derive(Debug)]
enum Step<P> {
    Node { name: String, payload: Option<P> },
    Edge { from: String, to: String, capacity: Real },
    Bidirectional { a: String, b: String, capacity: Real },
}

/// Builder for constructing a graph declaratively.
///
/// Steps are recorded as given and replayed by `build()`, which stops at the
/// first failing step and validates the finished graph.
#[derive(Debug)]
pub struct GraphBuilder<P = ()> {
    steps: Vec<Step<P>>,
}

impl<P> Default for GraphBuilder<P> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<P> GraphBuilder<P> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without payload.
    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step::Node {
            name: name.into(),
            payload: None,
        });
        self
    }

    /// Add several payload-less nodes at once.
    pub fn nodes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self = self.node(name);
        }
        self
    }

    /// Add a node carrying `payload`.
    pub fn node_with(mut self, name: impl Into<String>, payload: P) -> Self {
        self.steps.push(Step::Node {
            name: name.into(),
            payload: Some(payload),
        });
        self
    }

    /// Add a directed edge.
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, capacity: Real) -> Self {
        self.steps.push(Step::Edge {
            from: from.into(),
            to: to.into(),
            capacity,
        });
        self
    }

    /// Add a pair of opposite edges with the same capacity.
    pub fn bidirectional(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        capacity: Real,
    ) -> Self {
        self.steps.push(Step::Bidirectional {
            a: a.into(),
            b: b.into(),
            capacity,
        });
        self
    }

    /// Replay the recorded steps and validate the result.
    pub fn build(self) -> GraphResult<Graph<P>> {
        let mut graph = Graph::new();
        for step in self.steps {
            match step {
                Step::Node {
                    name,
                    payload: Some(payload),
                } => {
                    graph.add_node_with(name, payload)?;
                }
                Step::Node {
                    name,
                    payload: None,
                } => {
                    graph.add_node(name)?;
                }
                Step::Edge { from, to, capacity } => {
                    graph.add_edge(&from, &to, capacity)?;
                }
                Step::Bidirectional { a, b, capacity } => {
                    graph.add_bidirectional_edge(&a, &b, capacity)?;
                }
            }
        }
        graph.validate()?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn builder_basic() {
        let graph: Graph = GraphBuilder::new()
            .node("s")
            .node("t")
            .edge("s", "t", 2.0)
            .build()
            .unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn builder_bidirectional_and_payload() {
        let graph = GraphBuilder::new()
            .node_with("s", "source")
            .node_with("t", "sink")
            .bidirectional("s", "t", 1.5)
            .build()
            .unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.find("t").unwrap().payload, Some("sink"));
    }

    #[test]
    fn builder_stops_at_first_error() {
        let err = GraphBuilder::<()>::new()
            .nodes(["a", "b"])
            .node("a")
            .edge("a", "missing", 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode { name: "a".into() });
    }
}

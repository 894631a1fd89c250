//! Breadth-first augmenting-path search over the residual graph.
//!
//! Every live edge `u -> v` contributes two residual arcs: forward `u -> v`
//! carrying `remaining`, and backward `v -> u` carrying the edge's current
//! flow (pushing along it cancels flow). A residual that is negligible
//! relative to the edge capacity is not traversable.
//!
//! Traversal state lives in a per-call `SearchState`, so searches only need
//! `&Graph` and never mutate it.

use std::collections::VecDeque;

use fc_core::{EdgeId, NodeId, Real, Tolerances, negligible};
use fc_graph::{Edge, Graph};

/// Which residual arc of an edge a path step uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along the edge, consuming `remaining`.
    Forward,
    /// Against the edge, cancelling flow.
    Backward,
}

/// One hop of an augmenting path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub edge: EdgeId,
    pub direction: Direction,
}

impl PathStep {
    /// Residual capacity available on this step.
    pub fn residual(&self, edge: &Edge) -> Real {
        match self.direction {
            Direction::Forward => edge.remaining(),
            Direction::Backward => edge.flow(),
        }
    }

    /// Node the step leaves from.
    pub fn tail(&self, edge: &Edge) -> NodeId {
        match self.direction {
            Direction::Forward => edge.from(),
            Direction::Backward => edge.to(),
        }
    }

    /// Node the step arrives at.
    pub fn head(&self, edge: &Edge) -> NodeId {
        match self.direction {
            Direction::Forward => edge.to(),
            Direction::Backward => edge.from(),
        }
    }
}

/// A source-to-sink path in the residual graph, ordered source first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    pub steps: Vec<PathStep>,
}

impl AugmentingPath {
    /// Number of hops.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for a path without hops.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Smallest residual along the path; the amount one augmentation pushes.
    pub fn bottleneck<P>(&self, graph: &Graph<P>) -> Real {
        self.steps
            .iter()
            .filter_map(|step| graph.edge(step.edge).map(|edge| step.residual(edge)))
            .fold(Real::INFINITY, Real::min)
    }

    /// Visited nodes from source to sink.
    pub fn nodes<P>(&self, graph: &Graph<P>) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.steps.len() + 1);
        for (i, step) in self.steps.iter().enumerate() {
            let Some(edge) = graph.edge(step.edge) else {
                continue;
            };
            if i == 0 {
                nodes.push(step.tail(edge));
            }
            nodes.push(step.head(edge));
        }
        nodes
    }
}

/// Visited flags, parent steps and the BFS queue for a single search.
struct SearchState {
    visited: Vec<bool>,
    parent: Vec<Option<PathStep>>,
    queue: VecDeque<NodeId>,
}

impl SearchState {
    fn new(slots: usize) -> Self {
        Self {
            visited: vec![false; slots],
            parent: vec![None; slots],
            queue: VecDeque::new(),
        }
    }

    /// Mark `node` visited and enqueue it. Returns false if it was already seen.
    fn visit(&mut self, node: NodeId, via: Option<PathStep>) -> bool {
        let slot = node.slot();
        if self.visited[slot] {
            return false;
        }
        self.visited[slot] = true;
        self.parent[slot] = via;
        self.queue.push_back(node);
        true
    }

    fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node.slot()).copied().unwrap_or(false)
    }
}

/// Traversable residual arcs leaving `node`: forward arcs in edge-list order,
/// then backward arcs over incoming edges.
fn residual_arcs<P>(
    graph: &Graph<P>,
    node: NodeId,
    tol: Tolerances,
) -> impl Iterator<Item = (PathStep, NodeId)> + '_ {
    let forward = graph
        .outgoing(node)
        .filter(move |e| !negligible(e.remaining(), e.capacity(), tol))
        .map(|e| {
            let step = PathStep {
                edge: e.id(),
                direction: Direction::Forward,
            };
            (step, e.to())
        });
    let backward = graph
        .incoming(node)
        .filter(move |e| !negligible(e.flow(), e.capacity(), tol))
        .map(|e| {
            let step = PathStep {
                edge: e.id(),
                direction: Direction::Backward,
            };
            (step, e.from())
        });
    forward.chain(backward)
}

/// Find a shortest (fewest hops) augmenting path from `source` to `sink`.
///
/// The search stops as soon as `sink` is discovered. Returns `None` when the
/// sink is unreachable, when either id is stale, or when `source == sink`.
pub fn augmenting_path<P>(
    graph: &Graph<P>,
    source: NodeId,
    sink: NodeId,
    tol: Tolerances,
) -> Option<AugmentingPath> {
    if source == sink || graph.node(source).is_none() || graph.node(sink).is_none() {
        return None;
    }

    let mut state = SearchState::new(graph.node_slots());
    state.visit(source, None);

    'search: while let Some(node) = state.queue.pop_front() {
        for (step, next) in residual_arcs(graph, node, tol) {
            if state.visit(next, Some(step)) && next == sink {
                break 'search;
            }
        }
    }

    if !state.is_visited(sink) {
        return None;
    }

    // Walk parent steps back from the sink; the source has no parent.
    let mut steps = Vec::new();
    let mut current = sink;
    while let Some(step) = state.parent[current.slot()] {
        let edge = graph.edge(step.edge)?;
        steps.push(step);
        current = step.tail(edge);
    }
    steps.reverse();
    Some(AugmentingPath { steps })
}

/// Nodes reachable from `source` in the residual graph, indexed by
/// `NodeId::slot`. Stale or out-of-range sources reach nothing.
pub fn residual_reachable<P>(graph: &Graph<P>, source: NodeId, tol: Tolerances) -> Vec<bool> {
    let mut state = SearchState::new(graph.node_slots());
    if graph.node(source).is_none() {
        return state.visited;
    }
    state.visit(source, None);
    while let Some(node) = state.queue.pop_front() {
        for (step, next) in residual_arcs(graph, node, tol) {
            state.visit(next, Some(step));
        }
    }
    state.visited
}

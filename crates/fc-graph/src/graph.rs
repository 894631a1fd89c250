//! Core graph data structures.

use std::collections::HashMap;
use std::fmt;

use fc_core::{EdgeId, NodeId, Real, Tolerances, ensure_non_negative, negligible};
use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::validate;

/// A named vertex in the flow graph.
///
/// Nodes own the id lists of their outgoing and incoming edges; the edges
/// themselves live in the graph's edge arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<P = ()> {
    pub id: NodeId,
    pub name: String,
    /// Opaque caller data; the flow algorithms never look at it.
    pub payload: Option<P>,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) incoming: Vec<EdgeId>,
}

impl<P> Node<P> {
    /// Outgoing edge ids in insertion (edge-list) order.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Incoming edge ids in insertion order.
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }
}

/// Prints the bare name; the payload needs `P: Display`, see [`Node::label`].
impl<P> fmt::Display for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<P: fmt::Display> Node<P> {
    /// `name(payload)` when a payload is attached, otherwise just `name`.
    pub fn label(&self) -> NodeLabel<'_, P> {
        NodeLabel(self)
    }
}

/// Display adapter returned by [`Node::label`].
pub struct NodeLabel<'a, P>(&'a Node<P>);

impl<P: fmt::Display> fmt::Display for NodeLabel<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.payload {
            Some(payload) => write!(f, "{}({payload})", self.0.name),
            None => f.write_str(&self.0.name),
        }
    }
}

/// A directed arc with a nominal capacity and a residual (`remaining`) capacity.
///
/// `0 <= remaining <= capacity` always holds: every mutator clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    capacity: Real,
    remaining: Real,
}

impl Edge {
    fn new(id: EdgeId, from: NodeId, to: NodeId, capacity: Real) -> Self {
        Self {
            id,
            from,
            to,
            capacity,
            remaining: capacity,
        }
    }

    /// Id of this edge in the graph's edge arena.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Origin node.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Destination node.
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Nominal capacity fixed at insertion.
    pub fn capacity(&self) -> Real {
        self.capacity
    }

    /// Residual capacity still available in the forward direction.
    pub fn remaining(&self) -> Real {
        self.remaining
    }

    /// Flow currently carried, i.e. `capacity - remaining`.
    pub fn flow(&self) -> Real {
        self.capacity - self.remaining
    }

    /// Whether the forward residual is used up (within tolerance).
    pub fn is_saturated(&self, tol: Tolerances) -> bool {
        negligible(self.remaining, self.capacity, tol)
    }

    /// Push `delta` more units of flow along the edge.
    pub fn push_flow(&mut self, delta: Real) {
        self.remaining = (self.remaining - delta).clamp(0.0, self.capacity);
    }

    /// Cancel `delta` units of previously pushed flow.
    pub fn cancel_flow(&mut self, delta: Real) {
        self.remaining = (self.remaining + delta).clamp(0.0, self.capacity);
    }

    /// Drop all flow: `remaining = capacity`.
    pub fn restore(&mut self) {
        self.remaining = self.capacity;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}/{})",
            self.from, self.to, self.remaining, self.capacity
        )
    }
}

/// The graph: arena-backed nodes and edges addressed by compact ids.
///
/// - Nodes and edges live in `Vec<Option<_>>` arenas; removal leaves a
///   tombstone so ids are never reused.
/// - Arena order is insertion order, which makes iteration deterministic.
/// - Node names are unique and indexed for O(1) lookup.
#[derive(Debug, Clone)]
pub struct Graph<P = ()> {
    pub(crate) nodes: Vec<Option<Node<P>>>,
    pub(crate) edges: Vec<Option<Edge>>,
    pub(crate) by_name: HashMap<String, NodeId>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<P> Graph<P> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without payload.
    pub fn add_node(&mut self, name: impl Into<String>) -> GraphResult<NodeId> {
        self.insert_node(name.into(), None)
    }

    /// Add a node carrying `payload`.
    pub fn add_node_with(&mut self, name: impl Into<String>, payload: P) -> GraphResult<NodeId> {
        self.insert_node(name.into(), Some(payload))
    }

    fn insert_node(&mut self, name: String, payload: Option<P>) -> GraphResult<NodeId> {
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateNode { name });
        }
        let id = NodeId::for_slot(self.nodes.len())?;
        trace!(node = %name, %id, "add node");
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Some(Node {
            id,
            name,
            payload,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }));
        Ok(id)
    }

    /// Remove a node together with every edge that touches it.
    ///
    /// Incident edges are unlinked from the neighbouring nodes as well, so no
    /// dangling edge is left behind. The removed node is returned with empty
    /// adjacency lists.
    pub fn remove_node(&mut self, name: &str) -> GraphResult<Node<P>> {
        let id = self.node_id(name)?;
        let mut node = self
            .nodes
            .get_mut(id.slot())
            .and_then(Option::take)
            .ok_or(GraphError::StaleId {
                what: "NodeId",
                index: id.index(),
            })?;
        self.by_name.remove(name);

        let incident: Vec<EdgeId> = node
            .outgoing
            .drain(..)
            .chain(node.incoming.drain(..))
            .collect();
        for edge_id in incident {
            // Self-loops show up in both lists; the second visit finds a tombstone.
            let Some(edge) = self.edges.get_mut(edge_id.slot()).and_then(Option::take) else {
                continue;
            };
            let other = if edge.from == id { edge.to } else { edge.from };
            if let Some(Some(neighbour)) = self.nodes.get_mut(other.slot()) {
                neighbour.outgoing.retain(|&e| e != edge_id);
                neighbour.incoming.retain(|&e| e != edge_id);
            }
            trace!(edge = %edge_id, "drop incident edge");
        }

        trace!(node = %name, %id, "remove node");
        Ok(node)
    }

    /// Add a directed edge `from -> to` with `remaining = capacity`.
    ///
    /// Both endpoints must exist and the capacity must be finite and
    /// non-negative; nothing is inserted otherwise.
    pub fn add_edge(&mut self, from: &str, to: &str, capacity: Real) -> GraphResult<EdgeId> {
        let from_id = self.node_id(from)?;
        let to_id = self.node_id(to)?;
        let capacity = ensure_non_negative(capacity, "edge capacity")?;
        let id = EdgeId::for_slot(self.edges.len())?;
        self.link(id, from_id, to_id, capacity);
        Ok(id)
    }

    /// Add `a -> b` and `b -> a`, each with `capacity`.
    ///
    /// The two edges are independent records; the residual model gives each
    /// one its own cancellation arc.
    pub fn add_bidirectional_edge(
        &mut self,
        a: &str,
        b: &str,
        capacity: Real,
    ) -> GraphResult<(EdgeId, EdgeId)> {
        let a_id = self.node_id(a)?;
        let b_id = self.node_id(b)?;
        let capacity = ensure_non_negative(capacity, "edge capacity")?;
        let forward = EdgeId::for_slot(self.edges.len())?;
        let backward = EdgeId::for_slot(self.edges.len() + 1)?;
        self.link(forward, a_id, b_id, capacity);
        self.link(backward, b_id, a_id, capacity);
        Ok((forward, backward))
    }

    /// `id` must be the next free edge slot.
    fn link(&mut self, id: EdgeId, from: NodeId, to: NodeId, capacity: Real) {
        debug_assert_eq!(id.slot(), self.edges.len());
        self.edges.push(Some(Edge::new(id, from, to, capacity)));
        if let Some(Some(node)) = self.nodes.get_mut(from.slot()) {
            node.outgoing.push(id);
        }
        if let Some(Some(node)) = self.nodes.get_mut(to.slot()) {
            node.incoming.push(id);
        }
        trace!(edge = %id, %from, %to, capacity, "add edge");
    }

    /// Look a node up by name.
    pub fn find(&self, name: &str) -> Option<&Node<P>> {
        self.by_name.get(name).and_then(|&id| self.node(id))
    }

    /// Resolve a node name to its id.
    pub fn node_id(&self, name: &str) -> GraphResult<NodeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound {
                name: name.to_owned(),
            })
    }

    /// Get a node by ID (None for removed or out-of-range ids).
    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id.slot()).and_then(Option::as_ref)
    }

    /// Get an edge by ID (None for removed or out-of-range ids).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot()).and_then(Option::as_ref)
    }

    /// Mutable access to an edge's residual (None for removed or out-of-range ids).
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.slot()).and_then(Option::as_mut)
    }

    /// Destination nodes of all outgoing edges of `name`, in edge-list order.
    pub fn neighbours(&self, name: &str) -> GraphResult<Vec<&Node<P>>> {
        let id = self.node_id(name)?;
        Ok(self.outgoing(id).filter_map(|e| self.node(e.to)).collect())
    }

    /// Outgoing edges of a node in edge-list order.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.node(id)
            .map(|n| n.outgoing.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&e| self.edge(e))
    }

    /// Incoming edges of a node in insertion order.
    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.node(id)
            .map(|n| n.incoming.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&e| self.edge(e))
    }

    /// Live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<P>> + '_ {
        self.nodes.iter().flatten()
    }

    /// Live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().flatten()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.by_name.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// True when the graph has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Number of node arena slots, tombstones included.
    ///
    /// Sizes search-local arrays indexed by `NodeId::slot`.
    pub fn node_slots(&self) -> usize {
        self.nodes.len()
    }

    /// Restore every edge to full residual capacity (zero flow).
    pub fn reset_flow(&mut self) {
        for edge in self.edges.iter_mut().flatten() {
            edge.restore();
        }
    }

    /// Check adjacency, name index and residual ranges for consistency.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_structure(self)
    }
}

//! Ordered in-memory store for the flow's nodes and edges.
//!
//! The store keeps both collections as plain ordered sequences, matching the
//! host diagram's own model: insertion order is rendering order, lookups are
//! linear scans by id, and no operation validates graph well-formedness.
//! Cycles, unreachable nodes and dangling edges are all representable.

mod id;

pub use id::NodeIdGenerator;

use serde_json::Value;

use crate::flow::{Connection, FlowEdge, FlowNode, FlowSnapshot, Viewport};

/// Result of an update-by-id operation.
///
/// A miss leaves the store untouched. Callers that do not care can ignore the
/// outcome; callers that do can match on it instead of getting a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Replaced,
    NotFound,
}

impl UpdateOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, UpdateOutcome::Replaced)
    }
}

/// In-memory ordered collection of nodes and edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with initial content, e.g. a host's seed diagram.
    pub fn with_content(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&FlowEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Appends a node. No validation, always succeeds; a duplicate id is the
    /// caller's problem and later id lookups will hit the first occurrence.
    pub fn add_node(&mut self, node: FlowNode) {
        self.nodes.push(node);
    }

    /// Replaces the first node whose id matches, wholesale (not merged).
    /// Positions of all other nodes are untouched.
    pub fn update_node(&mut self, node: FlowNode) -> UpdateOutcome {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(slot) => {
                *slot = node;
                UpdateOutcome::Replaced
            }
            None => UpdateOutcome::NotFound,
        }
    }

    /// Removes every node with the given id, preserving the relative order of
    /// the remaining nodes. Returns how many were removed (normally 0 or 1).
    pub fn delete_node(&mut self, id: &str) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        before - self.nodes.len()
    }

    /// Builds a decorated edge from a connect gesture and appends it.
    ///
    /// Repeating an identical gesture maps to the same edge id and is a no-op;
    /// the existing edge is returned in that case.
    pub fn add_edge(&mut self, connection: Connection) -> &FlowEdge {
        let id = connection.edge_id();
        let idx = match self.edges.iter().position(|e| e.id == id) {
            Some(existing) => existing,
            None => {
                self.edges.push(connection.into_edge());
                self.edges.len() - 1
            }
        };
        &self.edges[idx]
    }

    /// Appends an already-built edge without decoration or duplicate checks,
    /// e.g. when restoring host-provided content.
    pub fn push_edge(&mut self, edge: FlowEdge) {
        self.edges.push(edge);
    }

    /// Sets the parameter payload on the first edge whose id matches and stops
    /// scanning. Edge ids are expected to be unique, so at most one edge is
    /// ever touched even if duplicates slipped in.
    pub fn update_edge_param(&mut self, edge_id: &str, param: Value) -> UpdateOutcome {
        match self.edges.iter_mut().find(|e| e.id == edge_id) {
            Some(edge) => {
                edge.edge_param = Some(param);
                UpdateOutcome::Replaced
            }
            None => UpdateOutcome::NotFound,
        }
    }

    /// Replaces the full node and edge content, e.g. after a session restore.
    pub fn replace_all(&mut self, nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) {
        self.nodes = nodes;
        self.edges = edges;
    }

    /// Clones the current content into a serializable snapshot.
    pub fn snapshot(&self, viewport: Viewport) -> FlowSnapshot {
        FlowSnapshot::new(self.nodes.clone(), self.edges.clone(), viewport)
    }
}

impl From<FlowSnapshot> for GraphStore {
    fn from(snapshot: FlowSnapshot) -> Self {
        Self::with_content(snapshot.nodes, snapshot.edges)
    }
}

use serde::{Deserialize, Serialize};

use super::edge::FlowEdge;
use super::node::FlowNode;

/// Pan/zoom state of the diagram canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// The complete serializable state of the graph plus viewport.
///
/// This is the unit of both persistence and export. A missing viewport in
/// persisted text deserializes to the default `{0, 0, 1}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    #[serde(default)]
    pub viewport: Viewport,
}

impl FlowSnapshot {
    pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>, viewport: Viewport) -> Self {
        Self {
            nodes,
            edges,
            viewport,
        }
    }
}

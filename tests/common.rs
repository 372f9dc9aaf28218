//! Common test utilities for building flow nodes, edges and snapshots.
use zumen::prelude::*;

/// Creates a node with a display name derived from its id.
#[allow(dead_code)]
pub fn sample_node(id: &str, x: f64, y: f64) -> FlowNode {
    FlowNode::new(
        id,
        Position::new(x, y),
        NodePayload::named(format!("Node {}", id)),
    )
}

/// Creates a node carrying the payload fields the flat row export reads.
#[allow(dead_code)]
pub fn sample_step_node(id: &str, flow_node_id: i64, step: &str) -> FlowNode {
    let mut payload = NodePayload::named(format!("Node {}", id));
    payload.flow_node_id = Some(flow_node_id);
    payload.node_type = Some("FUNCTION".to_string());
    payload.step = Some(step.to_string());
    FlowNode::new(id, Position::new(0.0, 0.0), payload)
}

/// Creates a small two-node, one-edge snapshot with a non-default viewport.
#[allow(dead_code)]
pub fn sample_snapshot() -> FlowSnapshot {
    let mut store = GraphStore::new();
    store.add_node(sample_node("170000", 0.0, 0.0));
    store.add_node(sample_node("170001", 200.0, 80.0));
    store.add_edge(
        Connection::new("170000", "170001").with_handles("output-0", "input-0"),
    );
    store.snapshot(Viewport {
        x: 12.5,
        y: -40.0,
        zoom: 1.5,
    })
}

/// A scripted save prompt recording what it acknowledged.
#[allow(dead_code)]
pub struct ScriptedPrompt {
    pub confirm: bool,
    pub acknowledged: Vec<SaveOutcome>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn confirming() -> Self {
        Self {
            confirm: true,
            acknowledged: Vec::new(),
        }
    }

    pub fn declining() -> Self {
        Self {
            confirm: false,
            acknowledged: Vec::new(),
        }
    }
}

impl SessionPrompt for ScriptedPrompt {
    fn confirm_save(&mut self) -> bool {
        self.confirm
    }

    fn acknowledge(&mut self, outcome: SaveOutcome) {
        self.acknowledged.push(outcome);
    }
}

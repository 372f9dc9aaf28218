use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExportError;
use crate::flow::FlowSnapshot;

/// One node flattened to its application payload fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    #[serde(rename = "flowNodeId")]
    pub flow_node_id: Option<i64>,
    #[serde(rename = "flowId")]
    pub flow_id: Option<i64>,
    #[serde(rename = "nodeType")]
    pub node_type: Option<String>,
    #[serde(rename = "nodeName")]
    pub node_name: Option<String>,
    #[serde(rename = "subFlowId")]
    pub sub_flow_id: Option<i64>,
    #[serde(rename = "functionRef")]
    pub function_ref: Option<String>,
    #[serde(rename = "functionRefParam")]
    pub function_ref_param: Option<Value>,
    #[serde(rename = "defaultParam")]
    pub default_param: Option<Value>,
}

/// One edge flattened to a transition row. `step` is read off the target
/// node's payload, so the edge must resolve to a node in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    #[serde(rename = "flowEdgeId")]
    pub flow_edge_id: i64,
    pub step: Option<String>,
    #[serde(rename = "flowNodeId")]
    pub flow_node_id: String,
    #[serde(rename = "flowEdgeResult")]
    pub flow_edge_result: String,
}

/// The flat, relational view of a snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowTable {
    pub nodes: Vec<NodeRow>,
    pub edges: Vec<EdgeRow>,
}

/// Numeric form of the `<flowId><ordinal:03>` id scheme used for edge rows:
/// the ordinal occupies at least three digits and widens as needed, exactly as
/// the zero-padded string would.
fn edge_row_id(flow_id: u32, index: usize) -> i64 {
    let index = index as i64;
    let mut scale: i64 = 1_000;
    while index >= scale {
        scale *= 10;
    }
    i64::from(flow_id) * scale + index
}

/// Flattens a snapshot into node and edge rows.
///
/// Edge row ids follow the same `<flowId><ordinal:03>` scheme as node ids,
/// numbered by edge position and emitted numerically. Unlike the canvas
/// model, this view does resolve edge targets; an edge pointing at a missing
/// node is an error here.
pub fn flatten(snapshot: &FlowSnapshot, flow_id: u32) -> Result<FlowTable, ExportError> {
    let nodes = snapshot
        .nodes
        .iter()
        .map(|node| NodeRow {
            flow_node_id: node.data.flow_node_id,
            flow_id: node.data.flow_id,
            node_type: node.data.node_type.clone(),
            node_name: node.data.node_name.clone(),
            sub_flow_id: node.data.sub_flow_id,
            function_ref: node.data.function_ref.clone(),
            function_ref_param: node.data.function_ref_param.clone(),
            default_param: node.data.default_param.clone(),
        })
        .collect();

    let mut edges = Vec::with_capacity(snapshot.edges.len());
    for (index, edge) in snapshot.edges.iter().enumerate() {
        let target = snapshot
            .nodes
            .iter()
            .find(|n| n.id == edge.target)
            .ok_or_else(|| ExportError::DanglingEdge {
                edge_id: edge.id.clone(),
                node_id: edge.target.clone(),
            })?;
        edges.push(EdgeRow {
            flow_edge_id: edge_row_id(flow_id, index),
            step: target.data.step.clone(),
            flow_node_id: edge.source.clone(),
            flow_edge_result: edge.target.clone(),
        });
    }

    Ok(FlowTable { nodes, edges })
}

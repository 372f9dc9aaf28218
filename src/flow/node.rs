use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canvas position of a node, in host coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single vertex in the decision flow.
///
/// The `id` is expected to be unique at the time of insertion; the store never
/// re-checks it afterwards. `node_type` is the host's rendering tag and is
/// omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub node_type: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub data: NodePayload,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, position: Position, data: NodePayload) -> Self {
        Self {
            id: id.into(),
            node_type: None,
            position,
            data,
        }
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }
}

/// Application payload carried by a node.
///
/// The named fields are the ones the flow editor itself reads (display name,
/// function binding, flat-export identity); anything else the host attaches
/// round-trips untouched through `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodePayload {
    #[serde(rename = "flowNodeId", skip_serializing_if = "Option::is_none", default)]
    pub flow_node_id: Option<i64>,
    #[serde(rename = "flowId", skip_serializing_if = "Option::is_none", default)]
    pub flow_id: Option<i64>,
    #[serde(rename = "nodeType", skip_serializing_if = "Option::is_none", default)]
    pub node_type: Option<String>,
    #[serde(rename = "nodeName", skip_serializing_if = "Option::is_none", default)]
    pub node_name: Option<String>,
    #[serde(rename = "subFlowId", skip_serializing_if = "Option::is_none", default)]
    pub sub_flow_id: Option<i64>,
    #[serde(rename = "functionRef", skip_serializing_if = "Option::is_none", default)]
    pub function_ref: Option<String>,
    #[serde(
        rename = "functionRefParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub function_ref_param: Option<Value>,
    #[serde(
        rename = "defaultParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub default_param: Option<Value>,
    #[serde(rename = "step", skip_serializing_if = "Option::is_none", default)]
    pub step: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodePayload {
    /// Payload with only a display name set, the minimum a dialog collects.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            node_name: Some(name.into()),
            ..Self::default()
        }
    }
}

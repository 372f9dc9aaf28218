use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendering tag selecting how the host draws an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Edge rendered with an inline parameter-editing control.
    #[default]
    #[serde(rename = "buttonedge")]
    Button,
}

/// Arrowhead style at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerKind {
    #[default]
    #[serde(rename = "arrowclosed")]
    ArrowClosed,
    #[serde(rename = "arrow")]
    Arrow,
}

/// Marker metadata attached to the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeMarker {
    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

/// Stroke styling for a rendered edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self { stroke_width: 2.0 }
    }
}

/// A directed connection between two nodes.
///
/// Endpoints reference node ids but are never validated against the node set;
/// a dangling edge is representable and tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub source_handle: Option<String>,
    #[serde(
        rename = "targetHandle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub target_handle: Option<String>,
    #[serde(rename = "type", default)]
    pub edge_type: EdgeKind,
    #[serde(rename = "markerEnd", default)]
    pub marker_end: EdgeMarker,
    #[serde(default)]
    pub style: EdgeStyle,
    /// Auxiliary payload attached after creation through the edge's
    /// parameter-editing control.
    #[serde(rename = "edgeParam", skip_serializing_if = "Option::is_none", default)]
    pub edge_param: Option<Value>,
}

/// Description of a connect gesture between two nodes, as reported by the
/// host canvas. Handles identify which port on each node was used.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub source_handle: Option<String>,
    #[serde(
        rename = "targetHandle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub target_handle: Option<String>,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn with_handles(
        mut self,
        source_handle: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        self.source_handle = Some(source_handle.into());
        self.target_handle = Some(target_handle.into());
        self
    }

    /// Deterministic edge identity for this connection. Two identical connect
    /// gestures map to the same id, which is how duplicate connects are
    /// detected.
    pub fn edge_id(&self) -> String {
        format!(
            "edge-{}{}-{}{}",
            self.source,
            self.source_handle.as_deref().unwrap_or(""),
            self.target,
            self.target_handle.as_deref().unwrap_or("")
        )
    }

    /// Builds the decorated edge for this connection: fixed rendering type,
    /// closed-arrow marker and default stroke, with no parameter payload yet.
    pub fn into_edge(self) -> FlowEdge {
        let id = self.edge_id();
        FlowEdge {
            id,
            source: self.source,
            target: self.target,
            source_handle: self.source_handle,
            target_handle: self.target_handle,
            edge_type: EdgeKind::Button,
            marker_end: EdgeMarker::default(),
            style: EdgeStyle::default(),
            edge_param: None,
        }
    }
}

//! Snapshot export.
//!
//! Export is a pure formatting step: the snapshot is serialized as-is and
//! handed to whatever display surface the host provides. Nothing is written
//! to disk or the network here.

pub mod rows;

pub use rows::{EdgeRow, FlowTable, NodeRow, flatten};

use crate::error::ExportError;
use crate::flow::FlowSnapshot;

/// Serializes the snapshot to a compact JSON string, the copy-paste form shown
/// in an export dialog.
pub fn to_json(snapshot: &FlowSnapshot) -> Result<String, ExportError> {
    serde_json::to_string(snapshot).map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Serializes the snapshot with indentation, for human-facing output.
pub fn to_json_pretty(snapshot: &FlowSnapshot) -> Result<String, ExportError> {
    serde_json::to_string_pretty(snapshot).map_err(|e| ExportError::Serialize(e.to_string()))
}

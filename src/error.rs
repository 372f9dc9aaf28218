use thiserror::Error;

// Graph store operations never fail: misses surface as `UpdateOutcome` or a
// removed count, so there is no store-phase error enum.

/// Errors that can occur while saving or restoring a session slot.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage slot '{key}' is unavailable: {message}")]
    Storage { key: String, message: String },

    #[error("Failed to serialize session snapshot: {0}")]
    Serialize(String),
}

/// Errors that can occur while exporting a snapshot.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    #[error("Failed to serialize snapshot to JSON: {0}")]
    Serialize(String),

    #[error("Edge '{edge_id}' targets node '{node_id}', which is not in the snapshot")]
    DanglingEdge { edge_id: String, node_id: String },
}

/// Errors raised by the editor's dialog state machine.
#[derive(Error, Debug, Clone)]
pub enum EditorError {
    #[error("No node dialog is open; nothing to submit")]
    ModalClosed,

    #[error("Node '{node_id}' does not exist, so it cannot be edited")]
    UnknownNode { node_id: String },
}

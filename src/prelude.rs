//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the zumen crate so hosts can
//! pull in the whole editing surface with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use zumen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut editor = FlowEditor::new(170);
//!
//! editor.open_add();
//! let id = editor.next_node_id();
//! editor.submit_node(FlowNode::new(
//!     id,
//!     Position::new(0.0, 0.0),
//!     NodePayload::named("Start"),
//! ))?;
//!
//! println!("{}", editor.export_json()?);
//! # Ok(())
//! # }
//! ```

// Editor surface
pub use crate::editor::{
    AutoConfirm, EditorBuilder, FlowEditor, ModalState, SaveOutcome, SessionPrompt,
};

// Core data model
pub use crate::flow::{
    Connection, EdgeKind, EdgeMarker, EdgeStyle, FlowEdge, FlowNode, FlowSnapshot, MarkerKind,
    NodePayload, Position, Viewport,
};

// Store and identifiers
pub use crate::graph::{GraphStore, NodeIdGenerator, UpdateOutcome};

// Persistence
pub use crate::session::{FileStorage, MemoryStorage, SessionKey, SessionStore, SlotStorage};

// Export
pub use crate::export::{FlowTable, to_json, to_json_pretty};

// Error types
pub use crate::error::{EditorError, ExportError, SessionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

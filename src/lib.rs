//! # Zumen - Decision Flow Graph Editing Core
//!
//! **Zumen** is the in-memory model behind a node-and-edge decision flow
//! editor: node and edge creation, identity assignment, update-in-place
//! semantics, per-edge parameter metadata, keyed session persistence and JSON
//! export. It contains no rendering; a host canvas (desktop UI, web view,
//! script binding) drives it from its event loop and draws whatever the store
//! holds.
//!
//! ## Core Workflow
//!
//! 1.  **Build an editor**: `FlowEditor::builder(flow_id)` picks the storage
//!     backend, session key and any initial diagram content.
//! 2.  **Mutate through gestures**: the host maps its UI events onto editor
//!     calls — the Add/Edit dialog onto `open_add`/`open_edit` + `submit_node`,
//!     the connect gesture onto `connect`, the edge control onto
//!     `set_edge_param`.
//! 3.  **Persist and export**: `save_session`/`restore_session` move the full
//!     snapshot through one keyed storage slot; `export_json` hands the same
//!     snapshot to a display surface.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zumen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // An editor for flow 170, persisting under "Session-170" on disk.
//!     let storage = FileStorage::new("sessions")?;
//!     let mut editor = FlowEditor::builder(170)
//!         .with_storage(Box::new(storage))
//!         .build();
//!
//!     // Add two nodes through the dialog state machine.
//!     editor.open_add();
//!     let start_id = editor.next_node_id(); // "170000"
//!     editor.submit_node(FlowNode::new(
//!         start_id.clone(),
//!         Position::new(0.0, 0.0),
//!         NodePayload::named("Start"),
//!     ))?;
//!
//!     editor.open_add();
//!     let check_id = editor.next_node_id(); // "170001"
//!     editor.submit_node(FlowNode::new(
//!         check_id.clone(),
//!         Position::new(200.0, 0.0),
//!         NodePayload::named("Check"),
//!     ))?;
//!
//!     // Connect them and attach a parameter to the new edge.
//!     let edge_id = editor.connect(Connection::new(start_id, check_id)).id.clone();
//!     editor.set_edge_param(&edge_id, serde_json::json!({ "threshold": 25.0 }));
//!
//!     // Persist, then hand the JSON to a display surface.
//!     editor.save_session(&mut AutoConfirm)?;
//!     println!("{}", editor.export_json()?);
//!     Ok(())
//! }
//! ```
//!
//! The store itself never validates graph well-formedness: cycles, unreachable
//! nodes and dangling edges are all representable, exactly as a freehand
//! canvas allows. Update and delete by a non-matching id leave the store
//! unchanged, surfaced as an ignorable outcome value rather than an error.

pub mod editor;
pub mod error;
pub mod export;
pub mod flow;
pub mod graph;
pub mod prelude;
pub mod session;

#[cfg(feature = "python-bindings")]
mod python;

//! The orchestrating editor a host UI drives from its event loop.
//!
//! [`FlowEditor`] owns the graph store, the canvas viewport, the session
//! store and the node-dialog state machine. Every mutation is synchronous;
//! scheduling (and everything visual) belongs to the host.

use serde_json::Value;

use crate::error::{EditorError, ExportError, SessionError};
use crate::export;
use crate::flow::{Connection, FlowEdge, FlowNode, FlowSnapshot, Viewport};
use crate::graph::{GraphStore, NodeIdGenerator, UpdateOutcome};
use crate::session::{MemoryStorage, SessionKey, SessionStore, SlotStorage};

/// State of the node-editing dialog.
///
/// Only these three states exist: a dialog is either closed, open to add a
/// new node, or open to edit one specific existing node. Submit and delete
/// both land back in `Closed`; cancel closes without mutating the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    AddOpen,
    EditOpen {
        node_id: String,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

/// What a save request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Declined,
}

/// Collaborator deciding whether a save request goes through.
///
/// The host typically shows a yes/no dialog in `confirm_save` and a toast in
/// `acknowledge`. The editor never writes the session slot on a decline.
pub trait SessionPrompt {
    fn confirm_save(&mut self) -> bool;

    /// Called after the request is handled, with what happened. Default: ignore.
    fn acknowledge(&mut self, _outcome: SaveOutcome) {}
}

/// Prompt that confirms every save without asking, for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl SessionPrompt for AutoConfirm {
    fn confirm_save(&mut self) -> bool {
        true
    }
}

/// Builder for a [`FlowEditor`]; lets hosts seed initial content and pick the
/// storage backend and session key.
pub struct EditorBuilder {
    flow_id: u32,
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
    key: Option<SessionKey>,
    storage: Option<Box<dyn SlotStorage>>,
}

impl EditorBuilder {
    pub fn new(flow_id: u32) -> Self {
        Self {
            flow_id,
            nodes: Vec::new(),
            edges: Vec::new(),
            key: None,
            storage: None,
        }
    }

    /// Seeds the editor with initial nodes and edges.
    pub fn with_initial_content(mut self, nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        self.nodes = nodes;
        self.edges = edges;
        self
    }

    /// Overrides the session key derived from the flow id.
    pub fn with_session_key(mut self, key: SessionKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_storage(mut self, storage: Box<dyn SlotStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> FlowEditor {
        let key = self.key.unwrap_or_else(|| SessionKey::for_flow(self.flow_id));
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()));
        FlowEditor {
            ids: NodeIdGenerator::new(self.flow_id),
            store: GraphStore::with_content(self.nodes, self.edges),
            viewport: Viewport::default(),
            modal: ModalState::Closed,
            session: SessionStore::new(key, storage),
        }
    }
}

/// The in-memory model behind a decision-flow canvas.
pub struct FlowEditor {
    ids: NodeIdGenerator,
    store: GraphStore,
    viewport: Viewport,
    modal: ModalState,
    session: SessionStore,
}

impl FlowEditor {
    pub fn builder(flow_id: u32) -> EditorBuilder {
        EditorBuilder::new(flow_id)
    }

    /// Editor over in-memory storage with the conventional session key.
    pub fn new(flow_id: u32) -> Self {
        Self::builder(flow_id).build()
    }

    pub fn flow_id(&self) -> u32 {
        self.ids.flow_id()
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Identifier the Add dialog offers for the next node.
    pub fn next_node_id(&self) -> String {
        self.ids.next(self.store.node_count())
    }

    // --- Node dialog state machine ---

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn open_add(&mut self) {
        self.modal = ModalState::AddOpen;
    }

    /// Opens the Edit dialog for an existing node.
    pub fn open_edit(&mut self, node_id: &str) -> Result<(), EditorError> {
        if self.store.node(node_id).is_none() {
            return Err(EditorError::UnknownNode {
                node_id: node_id.to_string(),
            });
        }
        self.modal = ModalState::EditOpen {
            node_id: node_id.to_string(),
        };
        Ok(())
    }

    /// Closes the dialog without touching the store.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Commits the dialog's node and closes it.
    ///
    /// In Add mode the node is appended; in Edit mode the node with the same
    /// id is replaced wholesale. An edit whose id no longer matches anything
    /// leaves the store unchanged, same as the store's own update semantics.
    pub fn submit_node(&mut self, node: FlowNode) -> Result<(), EditorError> {
        match self.modal {
            ModalState::Closed => return Err(EditorError::ModalClosed),
            ModalState::AddOpen => self.store.add_node(node),
            ModalState::EditOpen { .. } => {
                let _ = self.store.update_node(node);
            }
        }
        self.modal = ModalState::Closed;
        Ok(())
    }

    /// Deletes a node from the dialog and closes it. Returns how many nodes
    /// were removed (0 when the id didn't match).
    pub fn delete_node(&mut self, node_id: &str) -> usize {
        let removed = self.store.delete_node(node_id);
        self.modal = ModalState::Closed;
        removed
    }

    // --- Canvas gestures ---

    /// Handles a connect gesture between two nodes.
    pub fn connect(&mut self, connection: Connection) -> &FlowEdge {
        self.store.add_edge(connection)
    }

    /// Entry point for the edge parameter dialog.
    pub fn set_edge_param(&mut self, edge_id: &str, param: Value) -> UpdateOutcome {
        log::debug!("edge parameter update: id={} param={}", edge_id, param);
        self.store.update_edge_param(edge_id, param)
    }

    // --- Persistence and export ---

    pub fn snapshot(&self) -> FlowSnapshot {
        self.store.snapshot(self.viewport)
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Asks the prompt for confirmation, then persists the current snapshot.
    /// A declined prompt performs no write.
    pub fn save_session(
        &mut self,
        prompt: &mut dyn SessionPrompt,
    ) -> Result<SaveOutcome, SessionError> {
        let outcome = if prompt.confirm_save() {
            let snapshot = self.snapshot();
            self.session.save(&snapshot)?;
            SaveOutcome::Saved
        } else {
            SaveOutcome::Declined
        };
        prompt.acknowledge(outcome);
        Ok(outcome)
    }

    /// Restores the persisted snapshot, replacing nodes, edges and viewport.
    ///
    /// Returns `true` when a snapshot was applied. An absent (or unparseable)
    /// slot leaves the editor exactly as it was.
    pub fn restore_session(&mut self) -> Result<bool, SessionError> {
        match self.session.restore()? {
            Some(snapshot) => {
                self.viewport = snapshot.viewport;
                self.store.replace_all(snapshot.nodes, snapshot.edges);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Serializes the current snapshot for an export dialog.
    pub fn export_json(&self) -> Result<String, ExportError> {
        export::to_json(&self.snapshot())
    }

    /// Flattens the current snapshot into the relational row view.
    pub fn export_rows(&self) -> Result<export::FlowTable, ExportError> {
        export::flatten(&self.snapshot(), self.flow_id())
    }
}

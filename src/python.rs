use pyo3::prelude::*;

use crate::editor::{AutoConfirm, FlowEditor};
use crate::flow::{Connection, FlowNode};

/// An in-memory decision flow graph editor.
///
/// The editor holds nodes, edges and the canvas viewport, persists them to a
/// keyed in-memory session slot, and exports the whole snapshot as JSON.
#[pyclass(name = "Zumen")]
struct ZumenPy {
    editor: FlowEditor,
}

#[pymethods]
impl ZumenPy {
    /// Creates an editor for the given flow id.
    ///
    /// Args:
    ///     flow_id (int): Numeric flow identifier; node ids and the session
    ///         key are derived from it.
    #[new]
    fn new(flow_id: u32) -> Self {
        ZumenPy {
            editor: FlowEditor::new(flow_id),
        }
    }

    /// Identifier the next added node will conventionally receive.
    fn next_node_id(&self) -> String {
        self.editor.next_node_id()
    }

    /// Adds a node described as a JSON object with `id`, `position` and `data`.
    ///
    /// Raises:
    ///     ValueError: If the JSON does not describe a valid node.
    fn add_node(&mut self, node_json: &str) -> PyResult<()> {
        let node: FlowNode = serde_json::from_str(node_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        self.editor.open_add();
        self.editor
            .submit_node(node)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// Removes every node with the given id; returns how many were removed.
    fn delete_node(&mut self, node_id: &str) -> usize {
        self.editor.delete_node(node_id)
    }

    /// Connects two nodes and returns the new (or existing) edge id.
    fn connect(&mut self, source: &str, target: &str) -> String {
        self.editor.connect(Connection::new(source, target)).id.clone()
    }

    /// Attaches a parameter payload to an edge.
    ///
    /// Returns:
    ///     bool: True when an edge with that id existed and was updated.
    ///
    /// Raises:
    ///     ValueError: If the parameter is not valid JSON.
    fn set_edge_param(&mut self, edge_id: &str, param_json: &str) -> PyResult<bool> {
        let param: serde_json::Value = serde_json::from_str(param_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(self.editor.set_edge_param(edge_id, param).is_replaced())
    }

    /// Persists the current snapshot into the session slot.
    fn save(&mut self) -> PyResult<()> {
        self.editor
            .save_session(&mut AutoConfirm)
            .map(|_| ())
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// Restores the persisted snapshot; returns True when one was applied.
    fn restore(&mut self) -> PyResult<bool> {
        self.editor
            .restore_session()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// Serializes the full snapshot (nodes, edges, viewport) to a JSON string.
    fn export_json(&self) -> PyResult<String> {
        self.editor
            .export_json()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }
}

/// Graph-editing core for node-based decision flow diagrams.
///
/// This module provides Python bindings to the zumen Rust library: an
/// embeddable in-memory model for building, persisting and exporting
/// node-and-edge decision flows.
#[pymodule]
fn zumen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ZumenPy>()?;
    Ok(())
}

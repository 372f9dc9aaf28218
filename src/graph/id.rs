/// Derives node identifiers from a flow id and the current node count.
///
/// The generated id is the flow id concatenated with the count zero-padded to
/// three digits: flow 170 with 5 nodes present yields `"170005"`. The scheme is
/// purely count-based, so deleting nodes and adding new ones can mint an id
/// that was used before. Hosts needing strict uniqueness across deletions can
/// assign their own ids instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeIdGenerator {
    flow_id: u32,
}

impl NodeIdGenerator {
    pub fn new(flow_id: u32) -> Self {
        Self { flow_id }
    }

    pub fn flow_id(&self) -> u32 {
        self.flow_id
    }

    /// Identifier for the next node given the current node count.
    pub fn next(&self, node_count: usize) -> String {
        format!("{}{:03}", self.flow_id, node_count)
    }
}

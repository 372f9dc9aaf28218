//! Keyed persistence for flow snapshots.
//!
//! A session is one storage slot holding the JSON text of a [`FlowSnapshot`].
//! The slot key is provided explicitly at construction instead of being a
//! module constant, so independent flows can persist side by side.

mod storage;

pub use storage::{FileStorage, MemoryStorage, SlotStorage};

use std::fmt;

use crate::error::SessionError;
use crate::flow::FlowSnapshot;

/// The storage slot key a session persists under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Conventional key for a flow id: flow 170 persists under `"Session-170"`.
    pub fn for_flow(flow_id: u32) -> Self {
        Self(format!("Session-{}", flow_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serializes snapshots into a single keyed slot and restores them.
pub struct SessionStore {
    key: SessionKey,
    storage: Box<dyn SlotStorage>,
}

impl SessionStore {
    pub fn new(key: SessionKey, storage: Box<dyn SlotStorage>) -> Self {
        Self { key, storage }
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    /// Writes the snapshot's JSON text to the session slot.
    pub fn save(&mut self, snapshot: &FlowSnapshot) -> Result<(), SessionError> {
        let text =
            serde_json::to_string(snapshot).map_err(|e| SessionError::Serialize(e.to_string()))?;
        self.storage.put(self.key.as_str(), &text)
    }

    /// Reads the session slot back into a snapshot.
    ///
    /// An absent slot yields `None`. Text that no longer parses is treated the
    /// same way: the corruption is logged and the caller's state stays as it
    /// was, rather than surfacing a failure the host has no answer for.
    pub fn restore(&self) -> Result<Option<FlowSnapshot>, SessionError> {
        let Some(text) = self.storage.get(self.key.as_str())? else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                log::warn!(
                    "session slot '{}' holds unparseable text, treating as absent: {}",
                    self.key,
                    e
                );
                Ok(None)
            }
        }
    }

    /// Drops the session slot, if present.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.storage.remove(self.key.as_str())
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

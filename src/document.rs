//! Host document contract.
//!
//! The orchestrator never touches a real DOM. It sees the hosting page through
//! this trait: embedded JSON payload elements and chart target elements, both
//! addressed by id. Hosts bridge it to whatever document technology they embed
//! the charts in.

use std::collections::{HashMap, HashSet};

/// Read-only view of the hosting page.
pub trait DocumentView {
    /// Text content of the payload element with this id, if present.
    fn embedded_text(&self, element_id: &str) -> Option<String>;

    /// Whether an element (canvas target) with this id exists in the document.
    fn has_element(&self, element_id: &str) -> bool;
}

/// In-memory document used by tests and headless hosts.
///
/// Canvas targets and payload elements are plain entries in maps, so a test
/// can simulate a fragment swap by inserting or removing entries between
/// render passes.
#[derive(Debug, Default, Clone)]
pub struct MapDocument {
    payloads: HashMap<String, String>,
    canvases: HashSet<String>,
}

impl MapDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_payload(&mut self, element_id: impl Into<String>, text: impl Into<String>) {
        self.payloads.insert(element_id.into(), text.into());
    }

    pub fn remove_payload(&mut self, element_id: &str) {
        self.payloads.remove(element_id);
    }

    pub fn insert_canvas(&mut self, element_id: impl Into<String>) {
        self.canvases.insert(element_id.into());
    }

    pub fn remove_canvas(&mut self, element_id: &str) {
        self.canvases.remove(element_id);
    }
}

impl DocumentView for MapDocument {
    fn embedded_text(&self, element_id: &str) -> Option<String> {
        self.payloads.get(element_id).cloned()
    }

    fn has_element(&self, element_id: &str) -> bool {
        self.canvases.contains(element_id)
    }
}

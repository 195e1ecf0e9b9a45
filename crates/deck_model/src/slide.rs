//! Slide node: an ordered element list plus a background

use crate::{unique_id, Element};
use serde::{Deserialize, Serialize};

/// Background color applied to freshly created slides.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// One slide of a presentation.
///
/// Element order is z-order: later entries render on top. The background is
/// optional; a missing value means the render surface applies its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Slide {
    /// Create an empty slide with a generated id and the default background
    pub fn new() -> Self {
        Self {
            id: unique_id(),
            elements: Vec::new(),
            background: Some(DEFAULT_BACKGROUND.to_string()),
        }
    }

    /// Create an empty slide with a caller-supplied id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
            background: None,
        }
    }

    /// Find an element by id
    pub fn element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == element_id)
    }

    /// Find an element by id, mutably
    pub fn element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == element_id)
    }

    /// Remove an element by id. Returns whether a match was removed.
    pub fn remove_element(&mut self, element_id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id() != element_id);
        self.elements.len() != before
    }

    /// A slide is well-formed when it carries a non-empty id.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

//! Ephemeral UI state: tool, selection, pending property edits
//!
//! Deliberately excluded from the document and from history: switching tools
//! or selecting an element is not an undoable document change. The state is
//! reset whenever the document is replaced wholesale (new/load).

use serde::{Deserialize, Serialize};

/// The tool the user currently has armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Text,
    Rect,
    Circle,
    Line,
    Image,
}

/// Pending property edits applied to the next created or currently selected
/// element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProperties {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub font_size: f64,
    pub font_family: String,
}

impl Default for ElementProperties {
    fn default() -> Self {
        Self {
            fill: "#000000".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            font_size: 16.0,
            font_family: "Arial".to_string(),
        }
    }
}

/// A partial update to [`ElementProperties`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPropertiesPatch {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
}

impl ElementProperties {
    /// Merge a partial update; unset fields keep their value.
    pub fn apply(&mut self, patch: &ElementPropertiesPatch) {
        if let Some(fill) = &patch.fill {
            self.fill = fill.clone();
        }
        if let Some(stroke) = &patch.stroke {
            self.stroke = stroke.clone();
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = width;
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
    }
}

/// Transient editor-session state outside the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    selected_tool: Tool,
    selected_element_id: Option<String>,
    element_properties: ElementProperties,
    show_image_upload: bool,
    show_color_picker: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    /// Arm a tool. Arming a drawing tool clears the element selection:
    /// a non-select tool and a selected element are mutually exclusive.
    pub fn set_selected_tool(&mut self, tool: Tool) {
        self.selected_tool = tool;
        if tool != Tool::Select {
            self.selected_element_id = None;
        }
    }

    pub fn selected_element_id(&self) -> Option<&str> {
        self.selected_element_id.as_deref()
    }

    pub fn set_selected_element(&mut self, element_id: Option<String>) {
        self.selected_element_id = element_id;
    }

    pub fn element_properties(&self) -> &ElementProperties {
        &self.element_properties
    }

    pub fn update_element_properties(&mut self, patch: &ElementPropertiesPatch) {
        self.element_properties.apply(patch);
    }

    pub fn show_image_upload(&self) -> bool {
        self.show_image_upload
    }

    pub fn set_show_image_upload(&mut self, show: bool) {
        self.show_image_upload = show;
    }

    pub fn show_color_picker(&self) -> bool {
        self.show_color_picker
    }

    pub fn set_show_color_picker(&mut self, show: bool) {
        self.show_color_picker = show;
    }

    /// Back to defaults after the document is replaced wholesale. Pending
    /// property edits survive the reset.
    pub fn reset(&mut self) {
        self.selected_tool = Tool::Select;
        self.selected_element_id = None;
        self.show_image_upload = false;
        self.show_color_picker = false;
    }
}

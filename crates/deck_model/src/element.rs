//! Canvas element types
//!
//! Elements are the visual objects placed on a slide. Each kind is its own
//! struct so a variant only carries the fields that mean something for it;
//! the serialized form stays the flat `{"type": ..., ...}` object the editor
//! has always written. Geometry and color fields beyond the bounding-box
//! origin are optional: the model stores exactly what was set and leaves
//! defaults to the render surface, so documents round-trip unchanged.

use crate::unique_id;
use serde::{Deserialize, Serialize};

/// One visual object on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text(TextElement),
    Rect(RectElement),
    Circle(CircleElement),
    Line(LineElement),
    Image(ImageElement),
}

/// A block of editable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: String,
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectElement {
    pub id: String,
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// A circle positioned by its bounding-box origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleElement {
    pub id: String,
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// A line segment. Endpoints are relative to the element origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineElement {
    pub id: String,
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// An image referenced by URL or embedded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub id: String,
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

macro_rules! positioned_new {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $ty {
            /// Create an element at the given position with no styling set.
            pub fn new(id: impl Into<String>, left: f64, top: f64) -> Self {
                Self {
                    id: id.into(),
                    left,
                    top,
                    $($field: None,)*
                }
            }
        }
    };
}

positioned_new!(TextElement { text, font_size, font_family, fill });
positioned_new!(RectElement { width, height, fill, stroke, stroke_width });
positioned_new!(CircleElement { radius, fill, stroke, stroke_width });
positioned_new!(LineElement { x1, y1, x2, y2, stroke, stroke_width });
positioned_new!(ImageElement { src, width, height });

// Required target field, Copy payload
macro_rules! merge {
    ($patch:ident, $el:ident, $($field:ident),*) => {
        $(if let Some(value) = $patch.$field {
            $el.$field = value;
        })*
    };
}

// Optional target field, Copy payload
macro_rules! merge_opt {
    ($patch:ident, $el:ident, $($field:ident),*) => {
        $(if $patch.$field.is_some() {
            $el.$field = $patch.$field;
        })*
    };
}

// Optional target field, owned payload
macro_rules! merge_clone {
    ($patch:ident, $el:ident, $($field:ident),*) => {
        $(if $patch.$field.is_some() {
            $el.$field = $patch.$field.clone();
        })*
    };
}

impl Element {
    /// Get the element's unique identifier
    pub fn id(&self) -> &str {
        match self {
            Element::Text(e) => &e.id,
            Element::Rect(e) => &e.id,
            Element::Circle(e) => &e.id,
            Element::Line(e) => &e.id,
            Element::Image(e) => &e.id,
        }
    }

    /// Assign a generated id if none was supplied by the creator.
    /// Returns the id in effect afterwards.
    pub fn ensure_id(&mut self) -> &str {
        if self.id().is_empty() {
            let id = unique_id();
            match self {
                Element::Text(e) => e.id = id,
                Element::Rect(e) => e.id = id,
                Element::Circle(e) => e.id = id,
                Element::Line(e) => e.id = id,
                Element::Image(e) => e.id = id,
            }
        }
        self.id()
    }

    /// The element kind as its wire tag
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::Rect(_) => "rect",
            Element::Circle(_) => "circle",
            Element::Line(_) => "line",
            Element::Image(_) => "image",
        }
    }

    /// Bounding-box origin x
    pub fn left(&self) -> f64 {
        match self {
            Element::Text(e) => e.left,
            Element::Rect(e) => e.left,
            Element::Circle(e) => e.left,
            Element::Line(e) => e.left,
            Element::Image(e) => e.left,
        }
    }

    /// Bounding-box origin y
    pub fn top(&self) -> f64 {
        match self {
            Element::Text(e) => e.top,
            Element::Rect(e) => e.top,
            Element::Circle(e) => e.top,
            Element::Line(e) => e.top,
            Element::Image(e) => e.top,
        }
    }

    /// Shallow-merge a partial update onto this element.
    ///
    /// Only the fields named in the patch change; fields the element's kind
    /// does not carry are ignored. The id is never patched.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        match self {
            Element::Text(e) => {
                merge!(patch, e, left, top);
                merge_clone!(patch, e, text, font_family, fill);
                merge_opt!(patch, e, font_size);
            }
            Element::Rect(e) => {
                merge!(patch, e, left, top);
                merge_opt!(patch, e, width, height, stroke_width);
                merge_clone!(patch, e, fill, stroke);
            }
            Element::Circle(e) => {
                merge!(patch, e, left, top);
                merge_opt!(patch, e, radius, stroke_width);
                merge_clone!(patch, e, fill, stroke);
            }
            Element::Line(e) => {
                merge!(patch, e, left, top);
                merge_opt!(patch, e, x1, y1, x2, y2, stroke_width);
                merge_clone!(patch, e, stroke);
            }
            Element::Image(e) => {
                merge!(patch, e, left, top);
                merge_opt!(patch, e, width, height);
                merge_clone!(patch, e, src);
            }
        }
    }
}

/// A partial element update: every updatable field, each optional.
///
/// This is the payload of the update-element operation. A field left `None`
/// keeps its current value on the target element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub text: Option<String>,
    pub src: Option<String>,
    pub radius: Option<f64>,
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
}

impl ElementPatch {
    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A patch that only moves the element.
    pub fn position(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            ..Default::default()
        }
    }

    /// Merge a later patch onto this one. Fields set in `later` win.
    pub fn merged_with(mut self, later: ElementPatch) -> ElementPatch {
        macro_rules! take_later {
            ($($field:ident),*) => {
                $(if later.$field.is_some() {
                    self.$field = later.$field;
                })*
            };
        }
        take_later!(
            left, top, width, height, fill, stroke, stroke_width, font_size, font_family, text,
            src, radius, x1, y1, x2, y2
        );
        self
    }
}

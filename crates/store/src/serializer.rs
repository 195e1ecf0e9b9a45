//! Presentation serialization
//!
//! The saved document is the bare JSON slide array, pretty-printed. Loading
//! is lenient per entry: anything in the array that does not parse as a
//! slide is skipped with a warning, so one malformed object does not sink
//! the whole file.

use crate::{Result, StoreError};
use deck_model::Slide;
use serde_json::Value;
use tracing::warn;

/// Serialize slides to the saved-file JSON shape
pub fn serialize_slides(slides: &[Slide]) -> Result<String> {
    let json = serde_json::to_string_pretty(slides)?;
    Ok(json)
}

/// Deserialize slides from a saved file.
///
/// The document must be a JSON array; entries that fail to parse as slides
/// (missing id, missing elements, unknown element kind) are filtered out.
/// The surviving list may be empty — the mutation layer decides whether an
/// empty load is acceptable.
pub fn deserialize_slides(json: &str) -> Result<Vec<Slide>> {
    let value: Value = serde_json::from_str(json)?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(StoreError::InvalidFormat(format!(
                "expected a slide array, got {}",
                type_name(&other)
            )));
        }
    };

    let mut slides = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Slide>(entry) {
            Ok(slide) => slides.push(slide),
            Err(err) => warn!(index, %err, "skipping malformed slide entry"),
        }
    }

    Ok(slides)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

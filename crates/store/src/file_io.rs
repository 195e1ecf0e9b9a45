//! File I/O operations

use crate::{Result, StoreError};
use chrono::NaiveDate;
use deck_model::Slide;
use std::path::Path;

/// Save a presentation to a file
pub async fn save_slides(slides: &[Slide], path: impl AsRef<Path>) -> Result<()> {
    let json = crate::serialize_slides(slides)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Load a presentation from a file
pub async fn load_slides(path: impl AsRef<Path>) -> Result<Vec<Slide>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = tokio::fs::read_to_string(path).await?;
    crate::deserialize_slides(&json)
}

/// Save a presentation synchronously
pub fn save_slides_sync(slides: &[Slide], path: impl AsRef<Path>) -> Result<()> {
    let json = crate::serialize_slides(slides)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a presentation synchronously
pub fn load_slides_sync(path: impl AsRef<Path>) -> Result<Vec<Slide>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    crate::deserialize_slides(&json)
}

/// The default download name for a saved presentation, e.g.
/// `presentation-2026-08-07.json`.
pub fn suggested_file_name(date: NaiveDate) -> String {
    format!("presentation-{}.json", date.format("%Y-%m-%d"))
}

//! Edit Engine - Mutation operations, snapshot history, and undo/redo
//!
//! This crate implements the sanctioned mutation surface over the
//! presentation model: every document change goes through [`EditorEngine`],
//! which records a snapshot into a bounded linear [`History`] before applying
//! it. Ephemeral UI state (tool, selection, pending properties) lives in
//! [`UiState`], deliberately outside both the document and the history.

mod coalesce;
mod engine;
mod error;
mod history;
mod load_gate;
mod ui_state;

pub use coalesce::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use load_gate::*;
pub use ui_state::*;

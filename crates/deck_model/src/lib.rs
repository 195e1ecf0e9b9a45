//! Deck Model - Core presentation structure and types
//!
//! This crate provides the foundational data model for the slide editor:
//! presentations, slides, typed canvas elements, and generated identifiers.

mod element;
mod error;
mod id;
mod presentation;
mod slide;

pub use element::*;
pub use error::*;
pub use id::*;
pub use presentation::*;
pub use slide::*;

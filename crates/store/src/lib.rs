//! Store - Presentation serialization and file I/O
//!
//! This crate handles the on-disk representation of presentations: the plain
//! JSON slide array the editor saves and loads, with lenient per-entry
//! validation on the way in.

mod error;
mod file_io;
mod serializer;

pub use error::*;
pub use file_io::*;
pub use serializer::*;

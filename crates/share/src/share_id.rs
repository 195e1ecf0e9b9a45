//! Share handle generation

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of a generated share handle.
const HANDLE_LEN: usize = 13;

/// The handle a shared presentation is stored under.
///
/// Short, random, and lowercase-alphanumeric. It is a casual sharing handle,
/// not a capability token: it is not guessable-safe and grants nothing
/// beyond read access to an expiring blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareId(String);

impl ShareId {
    /// Generate a fresh random handle.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..HANDLE_LEN].to_string())
    }

    /// Wrap a handle received from outside (a URL parameter, user input).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShareId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

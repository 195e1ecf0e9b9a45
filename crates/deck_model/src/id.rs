//! Identifier generation for slides and elements

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

// Single static counter shared by all id consumers in the process
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a process-unique string identifier.
///
/// The id combines a wall-clock timestamp, a monotonic counter, and a short
/// random token. The counter alone guarantees uniqueness within the process,
/// even for calls landing on the same clock tick; the timestamp and token
/// keep ids from colliding across sessions that exchange documents.
pub fn unique_id() -> String {
    let counter = NEXT_ID.fetch_add(1, Ordering::SeqCst);
    let millis = Utc::now().timestamp_millis();
    let token = random_token();
    format!("{millis}_{counter}_{token}")
}

/// A short random suffix drawn from a v4 UUID.
fn random_token() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..9].to_string()
}

//! Generation tokens for in-flight presentation loads
//!
//! Two loads started back to back can resolve out of order, and applying the
//! stale result last would silently clobber the newer document. The gate
//! issues a ticket per load; starting a new load invalidates every earlier
//! ticket, and a completion is applied only while its ticket is still the
//! newest.

use std::sync::atomic::{AtomicU64, Ordering};

/// Proof that a particular load was the most recently started one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Monotonic generation counter for load requests.
#[derive(Debug, Default)]
pub struct LoadGate {
    current: AtomicU64,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load. All previously issued tickets become stale.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether this ticket still names the newest load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

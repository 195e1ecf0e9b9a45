//! Coalescing of intermediate gesture frames
//!
//! The render surface reports drag/resize progress far more often than the
//! document should change: one snapshot per pixel of movement would flood
//! history. `UpdateCoalescer` implements trailing debounce over element
//! patches: frames within the window merge into a single pending update,
//! and only the settled result reaches the mutation API.

use deck_model::ElementPatch;
use std::time::{Duration, Instant};

/// Debounce window applied to intermediate frames.
pub const DEFAULT_COALESCE_WINDOW: Duration = Duration::from_millis(100);

/// A settled element update, ready for the mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate {
    pub slide_id: String,
    pub element_id: String,
    pub patch: ElementPatch,
}

/// Merges a stream of per-frame patches into per-gesture updates.
///
/// Deadlines are explicit [`Instant`]s passed by the caller, so the type is
/// driven by the host's frame clock and testable without sleeping.
#[derive(Debug)]
pub struct UpdateCoalescer {
    window: Duration,
    pending: Option<(PendingUpdate, Instant)>,
}

impl Default for UpdateCoalescer {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateCoalescer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_COALESCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Absorb one frame.
    ///
    /// Patches for the element already pending merge into it (later fields
    /// win) and re-arm the deadline. A frame targeting a *different* element
    /// ends the previous gesture: its pending update is returned and must be
    /// applied by the caller.
    pub fn push(
        &mut self,
        slide_id: &str,
        element_id: &str,
        patch: ElementPatch,
        now: Instant,
    ) -> Option<PendingUpdate> {
        let deadline = now + self.window;

        match self.pending.take() {
            Some((pending, _))
                if pending.slide_id == slide_id && pending.element_id == element_id =>
            {
                let merged = pending.patch.merged_with(patch);
                self.pending = Some((
                    PendingUpdate {
                        slide_id: pending.slide_id,
                        element_id: pending.element_id,
                        patch: merged,
                    },
                    deadline,
                ));
                None
            }
            previous => {
                self.pending = Some((
                    PendingUpdate {
                        slide_id: slide_id.to_string(),
                        element_id: element_id.to_string(),
                        patch,
                    },
                    deadline,
                ));
                previous.map(|(update, _)| update)
            }
        }
    }

    /// Release the pending update once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<PendingUpdate> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(update, _)| update)
            }
            _ => None,
        }
    }

    /// Release the pending update regardless of the window. Used when the
    /// gesture ends.
    pub fn flush(&mut self) -> Option<PendingUpdate> {
        self.pending.take().map(|(update, _)| update)
    }

    /// Whether an update is waiting for its window to elapse
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

//! The editing engine: the only sanctioned way to change a presentation
//!
//! Every mutating operation records a snapshot of the state it is about to
//! change, applies the change, and then either clears the engine's error
//! state or sets a descriptive error. Nothing here panics or returns `Err`
//! to the caller: failures are state, observable through
//! [`EditorEngine::last_error`], so a caller-side banner can render the last
//! failure and be dismissed or overwritten by the next successful operation.

use crate::{EditError, History, DEFAULT_MAX_HISTORY};
use deck_model::{DeckModelError, Element, ElementPatch, Presentation, Slide};
use tracing::{debug, warn};

/// Owns the live presentation, its undo history, and the editor-level
/// error/loading state.
///
/// The engine is single-owner: all mutations go through `&mut self`, so
/// operations are serialized by ownership and need no locking.
#[derive(Debug)]
pub struct EditorEngine {
    presentation: Presentation,
    history: History,
    last_error: Option<EditError>,
    loading: bool,
}

impl EditorEngine {
    /// Create an engine over a fresh single-slide presentation.
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create an engine with a custom history capacity.
    pub fn with_history_capacity(max_history: usize) -> Self {
        Self {
            presentation: Presentation::new(),
            history: History::with_capacity(max_history),
            last_error: None,
            loading: false,
        }
    }

    /// The live document
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// The currently active slide
    pub fn active_slide(&self) -> Option<&Slide> {
        self.presentation.active_slide()
    }

    /// The last captured failure, if it has not been cleared or overwritten
    pub fn last_error(&self) -> Option<&EditError> {
        self.last_error.as_ref()
    }

    /// Dismiss the current error banner.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Whether an asynchronous load/share operation is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set the in-flight flag. Not a history event.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether a step back through history is possible
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a step forward through history is possible
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Read access to the history, for inspection
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Append a new empty slide and make it active. Infallible.
    pub fn add_slide(&mut self) {
        self.snapshot();
        let slide = Slide::new();
        debug!(slide_id = %slide.id, "add slide");
        self.presentation.push_slide(slide);
        self.last_error = None;
    }

    /// Remove a slide by id.
    ///
    /// Deleting the last remaining slide re-seeds one empty slide; deleting
    /// the active slide moves the pointer to the first remaining one. An
    /// absent id is a silent no-op and leaves the error state untouched.
    pub fn delete_slide(&mut self, slide_id: &str) {
        self.snapshot();
        if self.presentation.remove_slide(slide_id) {
            debug!(slide_id, "delete slide");
            if self.presentation.slide_count() == 0 {
                self.presentation.push_slide(Slide::new());
            }
            self.presentation.repair_active_slide();
            self.last_error = None;
        }
    }

    /// Point the active-slide reference at an existing slide.
    /// A selection change, not a document change: no snapshot is taken.
    pub fn set_active_slide(&mut self, slide_id: &str) {
        let result = self.presentation.set_active_slide(slide_id);
        self.finish("set active slide", result);
    }

    /// Append an element to a slide, assigning a generated id if the element
    /// arrived without one.
    pub fn add_element(&mut self, slide_id: &str, element: Element) {
        self.snapshot();
        let result = self.try_add_element(slide_id, element);
        self.finish("add element", result);
    }

    fn try_add_element(
        &mut self,
        slide_id: &str,
        mut element: Element,
    ) -> Result<(), DeckModelError> {
        let slide = self
            .presentation
            .slide_mut(slide_id)
            .ok_or(DeckModelError::SlideNotFound)?;
        element.ensure_id();
        debug!(slide_id, element_id = %element.id(), kind = element.kind(), "add element");
        slide.elements.push(element);
        Ok(())
    }

    /// Shallow-merge a partial update onto one element.
    pub fn update_element(&mut self, slide_id: &str, element_id: &str, patch: &ElementPatch) {
        self.snapshot();
        let result = self.try_update_element(slide_id, element_id, patch);
        self.finish("update element", result);
    }

    fn try_update_element(
        &mut self,
        slide_id: &str,
        element_id: &str,
        patch: &ElementPatch,
    ) -> Result<(), DeckModelError> {
        let slide = self
            .presentation
            .slide_mut(slide_id)
            .ok_or(DeckModelError::SlideNotFound)?;
        let element = slide
            .element_mut(element_id)
            .ok_or(DeckModelError::ElementNotFound)?;
        element.apply_patch(patch);
        Ok(())
    }

    /// Remove an element from a slide. An absent element id is a silent
    /// no-op; an absent slide is an error.
    pub fn delete_element(&mut self, slide_id: &str, element_id: &str) {
        self.snapshot();
        let result = self.try_delete_element(slide_id, element_id);
        self.finish("delete element", result);
    }

    fn try_delete_element(
        &mut self,
        slide_id: &str,
        element_id: &str,
    ) -> Result<(), DeckModelError> {
        let slide = self
            .presentation
            .slide_mut(slide_id)
            .ok_or(DeckModelError::SlideNotFound)?;
        slide.remove_element(element_id);
        Ok(())
    }

    /// Set a slide's background color.
    pub fn update_slide_background(&mut self, slide_id: &str, background: &str) {
        self.snapshot();
        let result = self.try_update_background(slide_id, background);
        self.finish("update slide background", result);
    }

    fn try_update_background(
        &mut self,
        slide_id: &str,
        background: &str,
    ) -> Result<(), DeckModelError> {
        let slide = self
            .presentation
            .slide_mut(slide_id)
            .ok_or(DeckModelError::SlideNotFound)?;
        slide.background = Some(background.to_string());
        Ok(())
    }

    /// Replace the whole document with externally supplied slides.
    ///
    /// A load is a hard reset, not an undoable step: on success the history
    /// is reseeded from the new document, indistinguishable from a fresh
    /// session. On failure the document and history are left untouched.
    pub fn load_presentation(&mut self, slides: Vec<Slide>) {
        match Presentation::from_slides(slides) {
            Ok(deck) => {
                debug!(slides = deck.slide_count(), "load presentation");
                self.presentation = deck;
                self.history.reset();
                self.last_error = None;
            }
            Err(err) => {
                warn!(%err, "load presentation rejected");
                self.last_error = Some(err.into());
            }
        }
    }

    /// Replace the document with a single fresh empty slide. Infallible,
    /// resets the history.
    pub fn clear_presentation(&mut self) {
        debug!("clear presentation");
        self.presentation = Presentation::new();
        self.history.reset();
        self.last_error = None;
    }

    /// Step back one history entry. Returns `false` when there is nothing to
    /// undo; the error state is untouched either way except on success.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.presentation.slides()) {
            Some(slides) => {
                self.presentation.replace_slides(slides);
                self.presentation.repair_active_slide();
                self.last_error = None;
                true
            }
            None => false,
        }
    }

    /// Step forward one history entry. Returns `false` when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.presentation.slides()) {
            Some(slides) => {
                self.presentation.replace_slides(slides);
                self.presentation.repair_active_slide();
                self.last_error = None;
                true
            }
            None => false,
        }
    }

    /// Record an explicit snapshot of the current state, making it the undo
    /// target of whatever follows. Used before handing the document to an
    /// external consumer that may mutate through gestures.
    pub fn checkpoint(&mut self) {
        self.snapshot();
    }

    /// Record the pre-mutation state. Called first by every mutating
    /// operation, before any validation, matching the snapshot-first policy.
    fn snapshot(&mut self) {
        self.history.record(self.presentation.slides());
    }

    /// Record an operation outcome into the error state.
    fn finish(&mut self, op: &'static str, result: Result<(), DeckModelError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                warn!(%err, "{op} failed");
                self.last_error = Some(err.into());
            }
        }
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Presentation root: the ordered slide sequence and the active-slide pointer

use crate::{DeckModelError, Result, Slide};
use serde::{Deserialize, Serialize};

/// The full document: a non-empty ordered sequence of slides plus the
/// currently active slide.
///
/// Invariant: whenever `active_slide_id` is set it references a slide present
/// in the sequence. Operations that can break the reference call
/// [`Presentation::repair_active_slide`] afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    slides: Vec<Slide>,
    active_slide_id: Option<String>,
}

impl Presentation {
    /// Create a presentation holding one fresh empty slide, which is active.
    pub fn new() -> Self {
        let slide = Slide::new();
        let active = slide.id.clone();
        Self {
            slides: vec![slide],
            active_slide_id: Some(active),
        }
    }

    /// Build a presentation from externally supplied slides.
    ///
    /// Empty input is rejected outright; entries without an id are filtered;
    /// if nothing survives the filter the input shape was valid but useless.
    /// The first surviving slide becomes active.
    pub fn from_slides(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckModelError::InvalidData);
        }

        let valid: Vec<Slide> = slides.into_iter().filter(Slide::is_well_formed).collect();
        if valid.is_empty() {
            return Err(DeckModelError::InvalidFormat);
        }

        let active = valid[0].id.clone();
        Ok(Self {
            slides: valid,
            active_slide_id: Some(active),
        })
    }

    /// The slide sequence, in order
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The active slide's id, if any
    pub fn active_slide_id(&self) -> Option<&str> {
        self.active_slide_id.as_deref()
    }

    /// The active slide, if the pointer is set
    pub fn active_slide(&self) -> Option<&Slide> {
        let id = self.active_slide_id.as_deref()?;
        self.slide(id)
    }

    /// Find a slide by id
    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Find a slide by id, mutably
    pub fn slide_mut(&mut self, id: &str) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    /// Whether a slide with this id exists
    pub fn contains_slide(&self, id: &str) -> bool {
        self.slides.iter().any(|s| s.id == id)
    }

    /// Append a slide and make it active.
    pub fn push_slide(&mut self, slide: Slide) {
        self.active_slide_id = Some(slide.id.clone());
        self.slides.push(slide);
    }

    /// Remove a slide by id. Returns whether a match was removed.
    ///
    /// Does not re-seed or repair the active pointer; the mutation layer
    /// owns those rules.
    pub fn remove_slide(&mut self, id: &str) -> bool {
        let before = self.slides.len();
        self.slides.retain(|s| s.id != id);
        self.slides.len() != before
    }

    /// Point the active reference at an existing slide.
    pub fn set_active_slide(&mut self, id: &str) -> Result<()> {
        if !self.contains_slide(id) {
            return Err(DeckModelError::SlideNotFound);
        }
        self.active_slide_id = Some(id.to_string());
        Ok(())
    }

    /// Replace the slide sequence wholesale, keeping the active pointer
    /// (callers repair it afterwards).
    pub fn replace_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
    }

    /// Re-establish the active-slide invariant: if the pointer no longer
    /// resolves, fall back to the first slide, or clear it when no slides
    /// remain.
    pub fn repair_active_slide(&mut self) {
        let resolves = self
            .active_slide_id
            .as_deref()
            .is_some_and(|id| self.contains_slide(id));
        if !resolves {
            self.active_slide_id = self.slides.first().map(|s| s.id.clone());
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_presentation_has_one_active_slide() {
        let deck = Presentation::new();
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.active_slide_id(), Some(deck.slides()[0].id.as_str()));
    }

    #[test]
    fn test_from_slides_rejects_empty_input() {
        assert_eq!(
            Presentation::from_slides(vec![]),
            Err(DeckModelError::InvalidData)
        );
    }

    #[test]
    fn test_from_slides_filters_slides_without_id() {
        let slides = vec![Slide::with_id(""), Slide::with_id("s1"), Slide::with_id("")];
        let deck = Presentation::from_slides(slides).unwrap();
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.active_slide_id(), Some("s1"));
    }

    #[test]
    fn test_from_slides_with_nothing_surviving_is_a_format_error() {
        let slides = vec![Slide::with_id(""), Slide::with_id("")];
        assert_eq!(
            Presentation::from_slides(slides),
            Err(DeckModelError::InvalidFormat)
        );
    }

    #[test]
    fn test_set_active_requires_existing_slide() {
        let mut deck = Presentation::new();
        assert_eq!(
            deck.set_active_slide("missing"),
            Err(DeckModelError::SlideNotFound)
        );

        let id = deck.slides()[0].id.clone();
        assert!(deck.set_active_slide(&id).is_ok());
        assert_eq!(deck.active_slide_id(), Some(id.as_str()));
    }

    #[test]
    fn test_repair_active_falls_back_to_first_slide() {
        let mut deck =
            Presentation::from_slides(vec![Slide::with_id("a"), Slide::with_id("b")]).unwrap();
        deck.set_active_slide("b").unwrap();

        deck.remove_slide("b");
        deck.repair_active_slide();
        assert_eq!(deck.active_slide_id(), Some("a"));
    }

    #[test]
    fn test_repair_active_clears_when_no_slides_remain() {
        let mut deck = Presentation::from_slides(vec![Slide::with_id("a")]).unwrap();
        deck.remove_slide("a");
        deck.repair_active_slide();
        assert_eq!(deck.active_slide_id(), None);
    }

    #[test]
    fn test_repair_active_keeps_a_valid_pointer() {
        let mut deck =
            Presentation::from_slides(vec![Slide::with_id("a"), Slide::with_id("b")]).unwrap();
        deck.set_active_slide("b").unwrap();
        deck.repair_active_slide();
        assert_eq!(deck.active_slide_id(), Some("b"));
    }
}

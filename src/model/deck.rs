use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::patch::SlidePatch;
use super::slide::{Slide, SlideId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("A deck must contain at least one slide")]
    Empty,
}

/// Ordered, never-empty sequence of slides with unique ids.
///
/// Every structural helper returns a new `Deck` and leaves `self` untouched,
/// so callers can hand the old value to the history manager as the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slide>", into = "Vec<Slide>")]
pub struct Deck {
    slides: Vec<Slide>,
}

impl TryFrom<Vec<Slide>> for Deck {
    type Error = DeckError;

    fn try_from(mut slides: Vec<Slide>) -> Result<Self, Self::Error> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::new();
        for slide in &mut slides {
            if !seen.insert(slide.id.clone()) {
                let fresh = SlideId::generate();
                tracing::warn!(
                    "Duplicate slide id '{}' replaced with '{}'",
                    slide.id,
                    fresh
                );
                slide.id = fresh.clone();
                seen.insert(fresh);
            }
        }

        Ok(Self { slides })
    }
}

impl From<Deck> for Vec<Slide> {
    fn from(deck: Deck) -> Self {
        deck.slides
    }
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        Self::try_from(slides)
    }

    /// Wrap a literal, known non-empty list with unique ids.
    pub(super) fn from_trusted(slides: Vec<Slide>) -> Self {
        debug_assert!(!slides.is_empty());
        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    pub fn position_of(&self, id: &SlideId) -> Option<usize> {
        self.slides.iter().position(|slide| &slide.id == id)
    }

    /// Clamp an index into `0..len`.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.slides.len() - 1)
    }

    /// Replace the slide at `index`, keeping the id already in that slot.
    /// Out-of-range indexes yield `None`.
    pub fn with_slide_replaced(&self, index: usize, mut slide: Slide) -> Option<Deck> {
        let kept = self.slides.get(index)?.id.clone();
        slide.id = kept;
        let mut slides = self.slides.clone();
        slides[index] = slide;
        Some(Deck { slides })
    }

    pub fn with_slide_appended(&self, slide: Slide) -> Deck {
        let mut slides = self.slides.clone();
        slides.push(slide);
        Deck { slides }
    }

    /// Insert a deep copy (fresh id) right after `index`.
    pub fn with_slide_duplicated(&self, index: usize) -> Option<Deck> {
        let copy = self.slides.get(index)?.duplicate();
        let mut slides = self.slides.clone();
        slides.insert(index + 1, copy);
        Some(Deck { slides })
    }

    /// Remove the slide at `index`.
    ///
    /// Refused (`None`) when it is the last remaining slide or the index is
    /// out of range.
    pub fn with_slide_removed(&self, index: usize) -> Option<Deck> {
        if self.slides.len() <= 1 || index >= self.slides.len() {
            return None;
        }
        let mut slides = self.slides.clone();
        slides.remove(index);
        Some(Deck { slides })
    }

    /// Merge the patch into every slide.
    pub fn with_patch_applied(&self, patch: &SlidePatch) -> Deck {
        Deck {
            slides: self.slides.iter().map(|slide| patch.apply(slide)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::slide::Layout;

    fn slide(id: &str) -> Slide {
        Slide::new(SlideId::new(id), Layout::Content, id)
    }

    fn deck(ids: &[&str]) -> Deck {
        Deck::new(ids.iter().map(|id| slide(id)).collect()).unwrap()
    }

    #[test]
    fn replaced_slot_keeps_its_id() {
        let next = deck(&["a", "b"])
            .with_slide_replaced(1, slide("a").with_title("Edited"))
            .unwrap();
        let ids: Vec<_> = next.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(next.slides()[1].title, "Edited");
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Deck::new(Vec::new()), Err(DeckError::Empty));
    }

    #[test]
    fn duplicate_ids_are_repaired() {
        let deck = deck(&["a", "a", "b"]);
        let ids: HashSet<_> = deck.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(deck.slides()[0].id.as_str(), "a");
    }

    #[test]
    fn removing_last_slide_is_refused() {
        let single = deck(&["only"]);
        assert!(single.with_slide_removed(0).is_none());
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn remove_and_duplicate_leave_original_untouched() {
        let original = deck(&["a", "b"]);
        let removed = original.with_slide_removed(0).unwrap();
        let duplicated = original.with_slide_duplicated(1).unwrap();
        assert_eq!(original.len(), 2);
        assert_eq!(removed.slides()[0].id.as_str(), "b");
        assert_eq!(duplicated.len(), 3);
        assert_eq!(duplicated.slides()[2].title, "b");
        assert_ne!(duplicated.slides()[2].id, duplicated.slides()[1].id);
    }

    #[test]
    fn clamp_index_stays_in_bounds() {
        let deck = deck(&["a", "b", "c"]);
        assert_eq!(deck.clamp_index(1), 1);
        assert_eq!(deck.clamp_index(9), 2);
    }

    #[test]
    fn empty_json_list_fails_to_deserialize() {
        assert!(serde_json::from_str::<Deck>("[]").is_err());
    }
}

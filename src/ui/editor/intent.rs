use crate::model::{Deck, Slide, SlidePatch};
use crate::ui::mvi::Intent;

/// Editing actions. Every variant except `Select`, `Undo` and `Redo` is one
/// history commit when it changes the deck.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Replace the current slide with an edited copy.
    UpdateSlide(Slide),
    /// Merge the patch into every slide.
    ApplyToAll(SlidePatch),
    /// Append a blank Content slide and select it.
    AddSlide,
    /// Insert a copy after `index` and select it.
    DuplicateSlide(usize),
    /// Remove the slide at `index`; refused for the last remaining slide.
    DeleteSlide(usize),
    Select(usize),
    Undo,
    Redo,
    /// Swap in a whole new deck (reset, import).
    ReplaceDeck(Deck),
}

impl EditorIntent {
    pub fn name(&self) -> &'static str {
        match self {
            EditorIntent::UpdateSlide(_) => "update_slide",
            EditorIntent::ApplyToAll(_) => "apply_to_all",
            EditorIntent::AddSlide => "add_slide",
            EditorIntent::DuplicateSlide(_) => "duplicate_slide",
            EditorIntent::DeleteSlide(_) => "delete_slide",
            EditorIntent::Select(_) => "select",
            EditorIntent::Undo => "undo",
            EditorIntent::Redo => "redo",
            EditorIntent::ReplaceDeck(_) => "replace_deck",
        }
    }
}

impl Intent for EditorIntent {}

use std::collections::HashMap;

use crate::model::SlideId;
use crate::ui::mvi::UiState;

/// Active entry per carousel slide. Lives beside the deck, never in it, so
/// flipping through images is not an undoable edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselState {
    positions: HashMap<SlideId, usize>,
}

impl UiState for CarouselState {}

impl CarouselState {
    /// Position for `slide`; 0 when it was never moved.
    pub fn index_of(&self, slide: &SlideId) -> usize {
        self.positions.get(slide).copied().unwrap_or(0)
    }

    pub(super) fn set(&mut self, slide: SlideId, index: usize) {
        if index == 0 {
            self.positions.remove(&slide);
        } else {
            self.positions.insert(slide, index);
        }
    }

    pub(super) fn forget(&mut self, slide: &SlideId) {
        self.positions.remove(slide);
    }

    pub(super) fn retain(&mut self, ids: &[SlideId]) {
        self.positions.retain(|id, _| ids.contains(id));
    }

    pub fn tracked(&self) -> usize {
        self.positions.len()
    }
}

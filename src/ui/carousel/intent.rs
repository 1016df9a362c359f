use crate::model::SlideId;
use crate::ui::mvi::Intent;

/// Carousel navigation. `len` is the entry count the slide currently shows.
#[derive(Debug, Clone)]
pub enum CarouselIntent {
    Next { slide: SlideId, len: usize },
    Prev { slide: SlideId, len: usize },
    /// Jump to a dot. Ignored when `index >= len`.
    Select {
        slide: SlideId,
        len: usize,
        index: usize,
    },
    /// Drop the position of a deleted slide.
    Forget(SlideId),
    /// Keep only positions for slides still in the deck.
    Retain(Vec<SlideId>),
}

impl Intent for CarouselIntent {}

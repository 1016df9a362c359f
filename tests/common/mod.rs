//! Shared builders for integration tests.

#![allow(dead_code, unused_imports)]

use slidegen::model::{Deck, Layout, Slide, SlideId, SlideItem};
use slidegen::store::DeckStore;
use tempfile::TempDir;

pub const ALL_LAYOUTS: [Layout; 13] = [
    Layout::Title,
    Layout::SectionHeader,
    Layout::TitleOnly,
    Layout::Content,
    Layout::TwoColumn,
    Layout::ImageLeft,
    Layout::ImageRight,
    Layout::Table,
    Layout::Timeline,
    Layout::Quote,
    Layout::BigNumber,
    Layout::Gallery,
    Layout::ImageCarousel,
];

/// Slide with only id, layout and title.
pub fn bare(layout: Layout, title: &str) -> Slide {
    Slide::new(SlideId::new(format!("{}-slide", layout.as_str())), layout, title)
}

pub fn items(count: usize) -> Vec<SlideItem> {
    (1..=count)
        .map(|n| SlideItem::new(n.to_string(), format!("Item {}", n), format!("Desc {}", n)))
        .collect()
}

/// Deck of `count` Content slides titled "S1", "S2", …
pub fn deck_of(count: usize) -> Deck {
    let slides = (1..=count)
        .map(|n| Slide::new(SlideId::new(format!("s{}", n)), Layout::Content, format!("S{}", n)))
        .collect();
    Deck::new(slides).expect("non-empty deck")
}

pub fn titles(deck: &Deck) -> Vec<String> {
    deck.iter().map(|slide| slide.title.clone()).collect()
}

pub fn temp_store() -> (TempDir, DeckStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = DeckStore::open(dir.path().join("store")).expect("Failed to open store");
    (dir, store)
}

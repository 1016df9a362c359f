//! Slide data model: slides, decks and the edits that produce new values.

mod deck;
mod edit;
mod patch;
mod slide;
mod starter;
mod token;

pub use deck::{Deck, DeckError};
pub use edit::{data_url, parse_table_text, table_text, ItemField, NumberingField, PointList};
pub use patch::SlidePatch;
pub use slide::{
    FontFamily, FontSize, Layout, NumberFormat, NumberPosition, Slide, SlideId, SlideItem,
    SlideNumbering, TablePadding, TextAlign, ThemeMode, TitleAnimation,
};
pub use starter::starter_deck;

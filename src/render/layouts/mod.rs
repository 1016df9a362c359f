//! One strategy per layout tag.

mod data;
mod fallback;
mod figure;
mod headline;
mod media;
mod text;

pub use data::EMPTY_TABLE;
pub use fallback::UNRECOGNIZED_MESSAGE;
pub use text::RIGHT_COLUMN_PLACEHOLDER;

use crate::model::Layout;

use super::context::RenderContext;
use super::node::Element;

/// Layout output before the shared chrome is wrapped around it.
pub struct Body {
    pub element: Element,
    /// Entries a fixed-slot layout had no room for.
    pub hidden_items: usize,
}

impl From<Element> for Body {
    fn from(element: Element) -> Self {
        Self {
            element,
            hidden_items: 0,
        }
    }
}

pub type Strategy = fn(&RenderContext) -> Body;

/// The strategy for a layout tag. Unrecognized tags get the fallback.
pub fn strategy(layout: &Layout) -> Strategy {
    match layout {
        Layout::Title => headline::title,
        Layout::SectionHeader => headline::section_header,
        Layout::TitleOnly => headline::title_only,
        Layout::Content => text::content,
        Layout::TwoColumn => text::two_column,
        Layout::ImageLeft => figure::image_left,
        Layout::ImageRight => figure::image_right,
        Layout::Table => data::table,
        Layout::Timeline => data::timeline,
        Layout::Quote => headline::quote,
        Layout::BigNumber => figure::big_number,
        Layout::Gallery => media::gallery,
        Layout::ImageCarousel => media::image_carousel,
        Layout::Unrecognized(_) => fallback::unrecognized,
    }
}

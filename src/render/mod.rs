//! Layout rendering engine.
//!
//! `render` is a pure function of a slide and its position in the deck.
//! It dispatches on the layout tag to exactly one strategy, wraps the result
//! in the chrome every slide shares (background image, overlay, slide
//! number) and never fails: every missing field has a fallback and unknown
//! tags use the fallback strategy.

mod context;
mod fields;
mod layouts;
mod node;
mod style;
mod theme;

use crate::markup::escape_html;
use crate::model::{Deck, Layout, NumberFormat, Slide};

use context::RenderContext;

pub use fields::{
    gallery_fallback_image, CAROUSEL_IMAGE_FALLBACK, DEFAULT_EPIGRAPH, DEFAULT_FIGURE,
    DEFAULT_FIGURE_CAPTION, GALLERY_SLOTS, IMAGE_LEFT_FALLBACK, IMAGE_RIGHT_FALLBACK,
    TIMELINE_SLOTS,
};
pub use layouts::{EMPTY_TABLE, RIGHT_COLUMN_PLACEHOLDER, UNRECOGNIZED_MESSAGE};
pub use node::{Element, Node, TextBlock, ROLE_ATTR};
pub use style::{
    overlay_opacity, size_class, Fonts, DEFAULT_OVERLAY_OPACITY, MAX_OVERLAY_OPACITY,
};
pub use theme::{Palette, Theme, BRI, BRI_ACCENT, BRI_PRIMARY, BRI_SECONDARY, LIGHT};

/// Logical page size shared by preview, presentation and export.
pub const PAGE_WIDTH: u32 = 960;
pub const PAGE_HEIGHT: u32 = 540;

/// Paint-level summary of a slide for rasterizers that do not lay out HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub fill: String,
    pub ink: String,
    pub image: Option<String>,
    /// Black overlay drawn over `image`; zero when there is no image.
    pub overlay_opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    pub root: Element,
    pub surface: Surface,
    /// Items a fixed-slot layout (Timeline, Gallery) could not show.
    pub hidden_items: usize,
}

impl RenderedSlide {
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    pub fn text_blocks(&self) -> Vec<String> {
        self.root.text_blocks()
    }

    pub fn role_blocks(&self) -> Vec<TextBlock> {
        self.root.role_blocks()
    }
}

/// Render with the carousel on its first entry.
pub fn render(slide: &Slide, index: usize, total: usize) -> RenderedSlide {
    render_at(slide, index, total, 0)
}

/// Render a slide at 1-based `index` of `total`, showing carousel entry
/// `carousel_index` if the slide is a carousel.
pub fn render_at(slide: &Slide, index: usize, total: usize, carousel_index: usize) -> RenderedSlide {
    let ctx = RenderContext::new(slide, index, total, carousel_index);
    let body = layouts::strategy(&slide.layout)(&ctx);
    if body.hidden_items > 0 {
        tracing::debug!(
            slide = %slide.id,
            layout = %slide.layout,
            hidden = body.hidden_items,
            "Items beyond the layout's slots are not shown"
        );
    }

    let surface = surface(&ctx);
    let background = background(&ctx);
    let root = Element::div()
        .role("slide")
        .attr("data-layout", slide.layout.as_str())
        .attr("data-slide-id", slide.id.as_str())
        .class(format!(
            "slide theme-{} bg-white overflow-hidden relative",
            ctx.theme.palette.name
        ))
        .style("width", format!("{}px", PAGE_WIDTH))
        .style("height", format!("{}px", PAGE_HEIGHT))
        .maybe_child(background)
        .maybe_child(slide_number(&ctx))
        .child(
            Element::div()
                .class("relative z-10 w-full h-full")
                .child(body.element),
        );

    RenderedSlide {
        root,
        surface,
        hidden_items: body.hidden_items,
    }
}

fn draws_background(ctx: &RenderContext) -> Option<String> {
    if ctx.slide.layout == Layout::ImageCarousel {
        return None;
    }
    ctx.slide.background_image().map(str::to_string)
}

fn background(ctx: &RenderContext) -> Option<Element> {
    let url = draws_background(ctx)?;
    Some(
        Element::div()
            .role("background")
            .class("absolute inset-0 z-0")
            .child(
                Element::new("img")
                    .attr("src", url)
                    .attr("alt", "Slide Background")
                    .class("w-full h-full object-cover"),
            )
            .child(
                Element::div()
                    .role("background-overlay")
                    .class("absolute inset-0")
                    .style("background-color", "black")
                    .style("opacity", overlay_opacity(ctx.slide).to_string()),
            ),
    )
}

fn slide_number(ctx: &RenderContext) -> Option<Element> {
    let numbering = ctx.slide.slide_numbering.as_ref().filter(|n| n.enabled)?;
    let label = match numbering.format {
        NumberFormat::PageOf => format!("{} / {}", style::pad2(ctx.index), style::pad2(ctx.total)),
        _ => style::pad2(ctx.index),
    };
    let mut stamp = Element::div()
        .role("slide-number")
        .class(format!(
            "absolute {} text-xs {} tracking-widest opacity-40 z-20",
            style::corner_class(&numbering.position),
            ctx.fonts.mono
        ))
        .text(label);
    if let Some(color) = ctx.theme.text_override() {
        stamp = stamp.style("color", color);
    }
    Some(stamp)
}

fn surface(ctx: &RenderContext) -> Surface {
    let palette = ctx.theme.palette;
    let (fill, ink) = match ctx.slide.layout {
        Layout::SectionHeader => (
            palette.inverted_page,
            ctx.theme.explicit_color().unwrap_or(palette.inverted_ink),
        ),
        Layout::ImageCarousel => ("#f4f4f5", "#ffffff"),
        _ => (palette.page, ctx.theme.ink()),
    };

    let image = match ctx.slide.layout {
        Layout::ImageCarousel => {
            let entries = fields::carousel(ctx.slide);
            entries
                .get(ctx.carousel_index % entries.len().max(1))
                .map(|item| fields::carousel_image(item).to_string())
        }
        _ => draws_background(ctx),
    };
    let overlay_opacity = match (&ctx.slide.layout, &image) {
        (_, None) | (Layout::ImageCarousel, _) => 0.0,
        _ => overlay_opacity(ctx.slide),
    };

    Surface {
        fill: fill.to_string(),
        ink: ink.to_string(),
        image,
        overlay_opacity,
    }
}

/// Number of entries an ImageCarousel slide cycles through, sample entries
/// included.
pub fn carousel_len(slide: &Slide) -> usize {
    fields::carousel(slide).len()
}

/// Standalone HTML document with one fixed-size section per slide.
pub fn deck_html(deck: &Deck) -> String {
    let total = deck.len();
    let sections: String = deck
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            format!(
                "<section class=\"page\">{}</section>\n",
                render(slide, i + 1, total).to_html()
            )
        })
        .collect();
    let title = deck
        .get(0)
        .map(|slide| crate::markup::plain_text(&slide.title))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\
         .page {{ width: {}px; height: {}px; margin: 0 auto 24px; }}\
         </style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(&title),
        PAGE_WIDTH,
        PAGE_HEIGHT,
        sections
    )
}

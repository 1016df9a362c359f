//! Glyph painting for exported pages.
//!
//! Text blocks of the rendered tree are flowed top to bottom inside the page
//! margins, sized by role and word-wrapped to the content width. Blocks that
//! no longer fit above the bottom margin are dropped. The slide number is
//! stamped in its own corner instead of joining the flow.

use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::model::{Layout, NumberPosition, Slide, TextAlign};
use crate::render::{RenderedSlide, TextBlock};

use super::raster::RasterError;

static SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static SANS_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
static SERIF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif.ttf");

/// Logical page margins, scaled with the page.
const MARGIN_X: f32 = 64.0;
const MARGIN_Y: f32 = 48.0;
const LINE_SPACING: f32 = 1.3;
const BLOCK_GAP: f32 = 0.45;

pub(super) struct Fonts {
    sans: FontRef<'static>,
    bold: FontRef<'static>,
    serif: FontRef<'static>,
}

impl Fonts {
    pub(super) fn load() -> Result<Self, RasterError> {
        Ok(Self {
            sans: FontRef::try_from_slice(SANS)?,
            bold: FontRef::try_from_slice(SANS_BOLD)?,
            serif: FontRef::try_from_slice(SERIF)?,
        })
    }
}

#[derive(Clone, Copy)]
enum Face {
    Sans,
    Bold,
    Serif,
}

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
    Right,
}

/// Logical pixel size and face for a role.
fn typeset(role: &str, layout: &Layout) -> (f32, Face) {
    match role {
        "title" if *layout == Layout::Quote => (34.0, Face::Serif),
        "title" => (40.0, Face::Bold),
        "quote-mark" => (48.0, Face::Serif),
        "subtitle" | "epigraph" => (24.0, Face::Sans),
        "table-header-cell" | "timeline-title" | "gallery-title" | "carousel-title" => {
            (18.0, Face::Bold)
        }
        "kicker" | "meta" | "badge" | "caption" | "bullet-index" | "timeline-marker"
        | "carousel-counter" | "attribution" => (14.0, Face::Sans),
        "table-cell" | "timeline-description" | "table-empty" => (16.0, Face::Sans),
        _ => (20.0, Face::Sans),
    }
}

fn alignment(slide: &Slide) -> Align {
    match slide.text_align {
        Some(TextAlign::Left) => Align::Left,
        Some(TextAlign::Center) => Align::Center,
        Some(TextAlign::Right) => Align::Right,
        _ => match slide.layout {
            Layout::Title
            | Layout::TitleOnly
            | Layout::SectionHeader
            | Layout::Quote
            | Layout::BigNumber => Align::Center,
            Layout::ImageRight => Align::Right,
            _ => Align::Left,
        },
    }
}

/// Paint the rendered slide's text onto `page`. `scale` maps logical
/// pixels to page pixels.
pub(super) fn paint_text(
    page: &mut RgbImage,
    fonts: &Fonts,
    slide: &Slide,
    rendered: &RenderedSlide,
    ink: Rgb<u8>,
    scale: f32,
) {
    let (width, height) = page.dimensions();
    let left = MARGIN_X * scale;
    let right = width as f32 - MARGIN_X * scale;
    let bottom = height as f32 - MARGIN_Y * scale;
    let align = alignment(slide);
    let mut y = MARGIN_Y * scale;

    for block in rendered.role_blocks() {
        let role = block.role.as_deref().unwrap_or_default();
        if role == "slide-number" {
            stamp_number(page, fonts, slide, &block, ink, scale);
            continue;
        }

        let (size, face) = typeset(role, &slide.layout);
        let px = PxScale::from(size * scale);
        let font = match face {
            Face::Sans => &fonts.sans,
            Face::Bold => &fonts.bold,
            Face::Serif => &fonts.serif,
        };
        let line_height = size * scale * LINE_SPACING;

        for line in wrap(&block.text, font, px, right - left) {
            if y + line_height > bottom {
                return;
            }
            let (line_width, _) = text_size(px, font, &line);
            let x = match align {
                Align::Left => left,
                Align::Center => (left + right - line_width as f32) / 2.0,
                Align::Right => right - line_width as f32,
            };
            draw_text_mut(page, ink, x.round() as i32, y.round() as i32, px, font, &line);
            y += line_height;
        }
        y += size * scale * BLOCK_GAP;
    }
}

fn stamp_number(
    page: &mut RgbImage,
    fonts: &Fonts,
    slide: &Slide,
    block: &TextBlock,
    ink: Rgb<u8>,
    scale: f32,
) {
    let (width, height) = page.dimensions();
    let px = PxScale::from(12.0 * scale);
    let (text_width, text_height) = text_size(px, &fonts.sans, &block.text);
    let inset = 24.0 * scale;
    let position = slide.slide_numbering.as_ref().map(|numbering| &numbering.position);
    let (from_right, from_bottom) = match position {
        Some(NumberPosition::TopLeft) => (false, false),
        Some(NumberPosition::TopRight) => (true, false),
        Some(NumberPosition::BottomLeft) => (false, true),
        _ => (true, true),
    };
    let x = if from_right {
        width as f32 - inset - text_width as f32
    } else {
        inset
    };
    let y = if from_bottom {
        height as f32 - inset - text_height as f32
    } else {
        inset
    };
    draw_text_mut(page, ink, x.round() as i32, y.round() as i32, px, &fonts.sans, &block.text);
}

/// Greedy word wrap. A word wider than the line is kept whole on its own line.
fn wrap(text: &str, font: &FontRef<'_>, px: PxScale, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", line, word);
            if text_size(px, font, &candidate).0 as f32 <= max_width {
                line = candidate;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fonts_parse() {
        assert!(Fonts::load().is_ok());
    }

    #[test]
    fn long_text_wraps_within_width() {
        let fonts = Fonts::load().unwrap();
        let px = PxScale::from(20.0);
        let text = "word ".repeat(80);
        let lines = wrap(&text, &fonts.sans, px, 400.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_size(px, &fonts.sans, line).0 <= 400);
        }
        assert_eq!(lines.join(" ").split_whitespace().count(), 80);
    }

    #[test]
    fn explicit_alignment_wins_over_layout_default() {
        let mut slide = Slide::new(crate::model::SlideId::new("a"), Layout::Title, "T");
        assert!(alignment(&slide) == Align::Center);
        slide.text_align = Some(TextAlign::Left);
        assert!(alignment(&slide) == Align::Left);
    }
}

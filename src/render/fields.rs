//! Projection of the positional `points` list (and `items`) into the named
//! fields each layout actually reads. All positional meaning lives here.

use crate::model::{Slide, SlideItem};

pub const DEFAULT_EPIGRAPH: &str =
    "Architecture is the learned game, correct and magnificent, of forms assembled in the light.";
pub const DEFAULT_FIGURE: &str = "98%";
pub const DEFAULT_FIGURE_CAPTION: &str = "Growth metric analysis.";

pub const IMAGE_LEFT_FALLBACK: &str =
    "https://images.unsplash.com/photo-1487958449943-2429e8be8625?auto=format&fit=crop&q=80&w=800";
pub const IMAGE_RIGHT_FALLBACK: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=800";
pub const CAROUSEL_IMAGE_FALLBACK: &str =
    "https://images.unsplash.com/photo-15160?auto=format&fit=crop&w=800&q=80";

pub const TIMELINE_SLOTS: usize = 4;
pub const GALLERY_SLOTS: usize = 6;

fn point(slide: &Slide, index: usize) -> Option<&str> {
    slide
        .points
        .get(index)
        .map(String::as_str)
        .filter(|text| !text.is_empty())
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.filter(|url| !url.trim().is_empty())
}

/// Footer line of the Title layout.
pub fn epigraph(slide: &Slide) -> &str {
    point(slide, 0).unwrap_or(DEFAULT_EPIGRAPH)
}

/// Attribution line of the Quote layout.
pub fn attribution(slide: &Slide) -> Option<&str> {
    point(slide, 0)
}

pub struct BigFigure<'a> {
    pub figure: &'a str,
    pub caption: &'a str,
}

pub fn big_figure(slide: &Slide) -> BigFigure<'_> {
    BigFigure {
        figure: point(slide, 0).unwrap_or(DEFAULT_FIGURE),
        caption: point(slide, 1).unwrap_or(DEFAULT_FIGURE_CAPTION),
    }
}

/// Image pane source for ImageLeft / ImageRight.
pub fn pane_image<'a>(slide: &'a Slide, fallback: &'static str) -> &'a str {
    non_blank(slide.image_url.as_deref()).unwrap_or(fallback)
}

/// Right-column paragraphs, empty when absent.
pub fn right_column(slide: &Slide) -> &[String] {
    slide.right_column_points.as_deref().unwrap_or(&[])
}

/// Header row and body rows, or `None` when there is no table at all.
pub fn table(slide: &Slide) -> Option<(&[String], &[Vec<String>])> {
    let rows = slide.table_data.as_deref().filter(|rows| !rows.is_empty())?;
    let (header, body) = rows.split_first()?;
    Some((header, body))
}

/// Entries selected for a fixed-slot layout plus how many were dropped.
pub struct Slots<T> {
    pub entries: Vec<T>,
    pub hidden: usize,
}

impl<T> Slots<T> {
    fn take(all: Vec<T>, slots: usize) -> Self {
        let hidden = all.len().saturating_sub(slots);
        let entries = all.into_iter().take(slots).collect();
        Self { entries, hidden }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Timeline steps from `items`, else one `PHASE n` step per point.
pub fn timeline(slide: &Slide) -> Slots<TimelineStep> {
    let all: Vec<TimelineStep> = match slide.non_empty_items() {
        Some(items) => items
            .iter()
            .map(|item| TimelineStep {
                title: item.title.clone(),
                description: item.description.clone(),
                image_url: non_blank(item.image_url.as_deref()).map(str::to_string),
            })
            .collect(),
        None => slide
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| TimelineStep {
                title: format!("PHASE {}", i + 1),
                description: point.clone(),
                image_url: None,
            })
            .collect(),
    };
    Slots::take(all, TIMELINE_SLOTS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryCell {
    pub title: String,
    pub image_url: String,
}

pub fn gallery_fallback_image(position: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w=400&q=80",
        15160 + position
    )
}

/// Gallery cells from `items`, else six `IMG n` placeholders.
pub fn gallery(slide: &Slide) -> Slots<GalleryCell> {
    let titled: Vec<(String, Option<String>)> = match slide.non_empty_items() {
        Some(items) => items
            .iter()
            .map(|item| (item.title.clone(), item.image_url.clone()))
            .collect(),
        None => (1..=GALLERY_SLOTS)
            .map(|n| (format!("IMG {}", n), None))
            .collect(),
    };
    let all = titled
        .into_iter()
        .enumerate()
        .map(|(i, (title, url))| GalleryCell {
            title,
            image_url: non_blank(url.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| gallery_fallback_image(i)),
        })
        .collect();
    Slots::take(all, GALLERY_SLOTS)
}

/// Carousel entries from `items`, else the two built-in samples.
pub fn carousel(slide: &Slide) -> Vec<SlideItem> {
    match slide.non_empty_items() {
        Some(items) => items.to_vec(),
        None => vec![
            SlideItem::new("1", "Sample 1", "Sample Desc").with_image(IMAGE_LEFT_FALLBACK),
            SlideItem::new("2", "Sample 2", "Sample Desc").with_image(IMAGE_RIGHT_FALLBACK),
        ],
    }
}

pub fn carousel_image(item: &SlideItem) -> &str {
    non_blank(item.image_url.as_deref()).unwrap_or(CAROUSEL_IMAGE_FALLBACK)
}

use serde::{Deserialize, Serialize};

use super::token::string_token;

/// Opaque, stable slide identifier.
///
/// Fresh ids are UUID v4 strings, so an id is never handed out twice even
/// after the slide that carried it has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(String);

impl SlideId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

string_token! {
    /// Rendering strategy a slide selects.
    pub enum Layout (Unrecognized) {
        Title => "title",
        SectionHeader => "section_header",
        TitleOnly => "title_only",
        Content => "content",
        TwoColumn => "two_column",
        ImageLeft => "image_left",
        ImageRight => "image_right",
        Table => "table",
        Timeline => "timeline",
        Quote => "quote",
        BigNumber => "big_number",
        Gallery => "gallery",
        ImageCarousel => "image_carousel",
    }
}

string_token! {
    pub enum TextAlign (Other) {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

string_token! {
    /// Built-in palette selector. `Bri` is the secondary corporate palette.
    pub enum ThemeMode (Other) {
        Light => "light",
        Bri => "bri",
    }
}

string_token! {
    pub enum FontSize (Other) {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
        Xl5 => "5xl",
        Xl6 => "6xl",
        Xl7 => "7xl",
        Xl8 => "8xl",
    }
}

string_token! {
    pub enum TablePadding (Other) {
        Compact => "compact",
        Normal => "normal",
        Spacious => "spacious",
    }
}

string_token! {
    pub enum TitleAnimation (Other) {
        None => "none",
        Fade => "fade",
        SlideTop => "slide-top",
        Zoom => "zoom",
    }
}

string_token! {
    /// Font family override. `Auto` keeps the per-context defaults.
    pub enum FontFamily (Other) {
        Auto => "auto",
        Inter => "inter",
        Grotesk => "grotesk",
        Serif => "serif",
        Mono => "mono",
    }
}

string_token! {
    pub enum NumberPosition (Other) {
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
    }
}

string_token! {
    pub enum NumberFormat (Other) {
        Numeric => "numeric",
        PageOf => "page-of",
    }
}

/// Slide-number stamp settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideNumbering {
    pub enabled: bool,
    pub position: NumberPosition,
    pub format: NumberFormat,
}

impl Default for SlideNumbering {
    fn default() -> Self {
        Self {
            enabled: false,
            position: NumberPosition::BottomRight,
            format: NumberFormat::Numeric,
        }
    }
}

/// Record used by the Timeline, Gallery and ImageCarousel layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SlideItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// One slide: content plus layout and style metadata.
///
/// `title`, `subtitle` and the point lists may carry the `<b>`, `<i>` and
/// `<u>` inline tags. `points` is deliberately loose: its meaning depends on
/// the layout, and the renderer projects it into named fields before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub layout: Layout,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_column_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_data: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_padding: Option<TablePadding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_animation: Option<TitleAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SlideItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_overlay_opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_numbering: Option<SlideNumbering>,
}

impl Slide {
    /// A bare slide: only id, layout and title set.
    pub fn new(id: SlideId, layout: Layout, title: impl Into<String>) -> Self {
        Self {
            id,
            layout,
            title: title.into(),
            subtitle: None,
            points: Vec::new(),
            right_column_points: None,
            image_url: None,
            table_data: None,
            text_align: None,
            theme_mode: None,
            font_size: None,
            title_font_size: None,
            table_padding: None,
            title_animation: None,
            items: None,
            background_image_url: None,
            background_overlay_opacity: None,
            text_color: None,
            font_family: None,
            slide_numbering: None,
        }
    }

    /// Deep copy carrying a freshly generated id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: SlideId::generate(),
            ..self.clone()
        }
    }

    /// Non-empty background image URL, if any.
    pub fn background_image(&self) -> Option<&str> {
        self.background_image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// `items` when present and non-empty.
    pub fn non_empty_items(&self) -> Option<&[SlideItem]> {
        self.items.as_deref().filter(|items| !items.is_empty())
    }
}

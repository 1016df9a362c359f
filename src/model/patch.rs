//! Partial field-set merged into every slide of a deck in one commit.

use serde::{Deserialize, Serialize};

use super::slide::{
    FontFamily, FontSize, Slide, SlideNumbering, TablePadding, TextAlign, ThemeMode,
    TitleAnimation,
};

/// Style fields that can be pushed to every slide at once.
///
/// `Some` overwrites the slide's value, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlidePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_numbering: Option<SlideNumbering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_animation: Option<TitleAnimation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_padding: Option<TablePadding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_overlay_opacity: Option<f32>,
}

impl SlidePatch {
    /// Patch carrying the given slide's font family, if it has one.
    pub fn font_family_of(slide: &Slide) -> Option<Self> {
        slide.font_family.clone().map(|family| Self {
            font_family: Some(family),
            ..Self::default()
        })
    }

    /// Patch carrying the given slide's numbering settings, if it has any.
    pub fn numbering_of(slide: &Slide) -> Option<Self> {
        slide.slide_numbering.clone().map(|numbering| Self {
            slide_numbering: Some(numbering),
            ..Self::default()
        })
    }

    /// Patch carrying the given slide's body and title sizes, if set.
    pub fn font_sizes_of(slide: &Slide) -> Option<Self> {
        if slide.font_size.is_none() && slide.title_font_size.is_none() {
            return None;
        }
        Some(Self {
            font_size: slide.font_size.clone(),
            title_font_size: slide.title_font_size.clone(),
            ..Self::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// New slide with every `Some` field of the patch written over it.
    pub fn apply(&self, slide: &Slide) -> Slide {
        let mut next = slide.clone();
        if let Some(value) = &self.font_family {
            next.font_family = Some(value.clone());
        }
        if let Some(value) = &self.font_size {
            next.font_size = Some(value.clone());
        }
        if let Some(value) = &self.title_font_size {
            next.title_font_size = Some(value.clone());
        }
        if let Some(value) = &self.slide_numbering {
            next.slide_numbering = Some(value.clone());
        }
        if let Some(value) = &self.theme_mode {
            next.theme_mode = Some(value.clone());
        }
        if let Some(value) = &self.text_align {
            next.text_align = Some(value.clone());
        }
        if let Some(value) = &self.text_color {
            next.text_color = Some(value.clone());
        }
        if let Some(value) = &self.title_animation {
            next.title_animation = Some(value.clone());
        }
        if let Some(value) = &self.table_padding {
            next.table_padding = Some(value.clone());
        }
        if let Some(value) = &self.background_image_url {
            next.background_image_url = Some(value.clone());
        }
        if let Some(value) = self.background_overlay_opacity {
            next.background_overlay_opacity = Some(value);
        }
        next
    }
}

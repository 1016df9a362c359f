use crate::model::Slide;

use super::node::Element;
use super::style::{align_class, animation_class, size_class, Fonts};
use super::theme::Theme;

/// Everything a layout strategy may read. Built once per render call.
pub struct RenderContext<'a> {
    pub slide: &'a Slide,
    /// 1-based position in the deck.
    pub index: usize,
    pub total: usize,
    pub carousel_index: usize,
    pub theme: Theme,
    pub fonts: Fonts,
}

impl<'a> RenderContext<'a> {
    pub fn new(slide: &'a Slide, index: usize, total: usize, carousel_index: usize) -> Self {
        Self {
            slide,
            index,
            total,
            carousel_index,
            theme: Theme::for_slide(slide),
            fonts: Fonts::for_family(slide.font_family.as_ref()),
        }
    }

    pub fn has_background(&self) -> bool {
        self.slide.background_image().is_some()
    }

    pub fn title_size(&self, default: &'static str) -> &'static str {
        size_class(self.slide.title_font_size.as_ref(), default)
    }

    pub fn body_size(&self, default: &'static str) -> &'static str {
        size_class(self.slide.font_size.as_ref(), default)
    }

    pub fn align(&self) -> &'static str {
        align_class(self.slide.text_align.as_ref())
    }

    /// Layout root: palette fill and ink unless a background image shows
    /// through, then the text colour override on top.
    pub fn page(&self, classes: &str) -> Element {
        let mut page = Element::div().class(classes);
        if !self.has_background() {
            page = page
                .style("background-color", self.theme.palette.page)
                .style("color", self.theme.palette.ink);
        }
        if let Some(color) = self.theme.text_override() {
            page = page.style("color", color);
        }
        page
    }

    /// The slide title as a heading carrying size, font and animation.
    pub fn heading(&self, tag: &'static str, default_size: &'static str, classes: &str) -> Element {
        self.heading_from(tag, default_size, self.fonts.heading, classes, &self.slide.title)
    }

    /// Title-styled heading over arbitrary markup.
    pub fn heading_from(
        &self,
        tag: &'static str,
        default_size: &'static str,
        font: &'static str,
        classes: &str,
        source: &str,
    ) -> Element {
        Element::new(tag)
            .role("title")
            .class(self.title_size(default_size))
            .class(font)
            .class(classes)
            .class(animation_class(self.slide.title_animation.as_ref()).unwrap_or_default())
            .markup(source)
    }

    /// Top-right metadata stamp.
    pub fn meta(&self, label: &str) -> Element {
        let mut meta = Element::div().role("meta").class(format!(
            "absolute top-6 right-6 text-[10px] {} tracking-widest uppercase opacity-40 flex gap-4",
            self.fonts.mono
        ));
        if let Some(color) = self.theme.text_override() {
            meta = meta.style("color", color);
        }
        meta.child(Element::new("span").text(self.theme.stamp(label)))
            .child(Element::new("span").text("2024"))
    }

    /// Horizontal or vertical rule tinted with the palette's rule colour.
    pub fn rule(&self, classes: &str) -> Element {
        let rule = Element::div().role("rule").class(classes);
        if self.theme.palette.is_bri() {
            rule.style("background-color", self.theme.palette.rule)
        } else {
            rule.class("bg-current")
        }
    }
}

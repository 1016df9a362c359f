//! Built-in palettes and the per-slide theme resolved from them.

use crate::model::{Slide, ThemeMode};

/// Colour set one palette contributes to every layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    /// Page fill.
    pub page: &'static str,
    /// Default text colour.
    pub ink: &'static str,
    /// Rules, dividers and accent borders.
    pub rule: &'static str,
    /// Bullet indices and small highlights.
    pub accent: &'static str,
    /// Inverted page used by section headers.
    pub inverted_page: &'static str,
    pub inverted_ink: &'static str,
    /// Replaces every metadata stamp label when set.
    pub stamp: Option<&'static str>,
}

pub const LIGHT: Palette = Palette {
    name: "light",
    page: "#ffffff",
    ink: "#111111",
    rule: "currentColor",
    accent: "currentColor",
    inverted_page: "#18181b",
    inverted_ink: "#ffffff",
    stamp: None,
};

pub const BRI: Palette = Palette {
    name: "bri",
    page: "#ffffff",
    ink: "#0857C3",
    rule: "#307FE2",
    accent: "#71C5E8",
    inverted_page: "#0857C3",
    inverted_ink: "#ffffff",
    stamp: Some("Corporate Deck"),
};

pub const BRI_PRIMARY: &str = "#0857C3";
pub const BRI_SECONDARY: &str = "#307FE2";
pub const BRI_ACCENT: &str = "#71C5E8";

impl Palette {
    /// Unknown modes use the light palette.
    pub fn for_mode(mode: Option<&ThemeMode>) -> &'static Palette {
        match mode {
            Some(ThemeMode::Bri) => &BRI,
            _ => &LIGHT,
        }
    }

    pub fn is_bri(&self) -> bool {
        self.name == BRI.name
    }
}

/// Palette plus the slide's explicit text colour, which always wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: &'static Palette,
    text_color: Option<String>,
}

impl Theme {
    pub fn for_slide(slide: &Slide) -> Self {
        let text_color = slide
            .text_color
            .as_deref()
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .map(str::to_string);
        Self {
            palette: Palette::for_mode(slide.theme_mode.as_ref()),
            text_color,
        }
    }

    /// Effective default text colour.
    pub fn ink(&self) -> &str {
        self.text_color.as_deref().unwrap_or(self.palette.ink)
    }

    pub fn explicit_color(&self) -> Option<&str> {
        self.text_color.as_deref()
    }

    /// Explicit colour for text blocks: the override, else the bri ink.
    /// `None` means inherit.
    pub fn text_override(&self) -> Option<&str> {
        match &self.text_color {
            Some(color) => Some(color),
            None if self.palette.is_bri() => Some(self.palette.ink),
            None => None,
        }
    }

    /// Stamp label, replaced by the palette's own when it has one.
    pub fn stamp<'a>(&self, label: &'a str) -> &'a str {
        match self.palette.stamp {
            Some(stamp) => stamp,
            None => label,
        }
    }

    /// Border colour class for rules.
    pub fn rule_class(&self, strength: u8) -> String {
        if self.palette.is_bri() {
            format!("border-[{}]/{}", self.palette.rule, strength)
        } else {
            format!("border-current/{}", strength)
        }
    }
}

//! Token → class mappings shared by every layout.

use crate::model::{
    FontFamily, FontSize, NumberPosition, Slide, TablePadding, TextAlign, TitleAnimation,
};

pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.5;
pub const MAX_OVERLAY_OPACITY: f32 = 0.9;

/// Heading / body / mono font classes for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    pub heading: &'static str,
    pub body: &'static str,
    pub mono: &'static str,
    /// True when an explicit family replaced the defaults.
    pub overridden: bool,
}

impl Fonts {
    pub fn for_family(family: Option<&FontFamily>) -> Self {
        let single = match family {
            Some(FontFamily::Inter) => Some("font-sans"),
            Some(FontFamily::Grotesk) => Some("font-grotesk"),
            Some(FontFamily::Serif) => Some("font-serif-display"),
            Some(FontFamily::Mono) => Some("font-mono"),
            _ => None,
        };
        match single {
            Some(class) => Self {
                heading: class,
                body: class,
                mono: class,
                overridden: true,
            },
            None => Self {
                heading: "font-grotesk",
                body: "font-inter",
                mono: "font-mono",
                overridden: false,
            },
        }
    }
}

/// Size class for a token, or `default` when unset or unknown.
pub fn size_class(size: Option<&FontSize>, default: &'static str) -> &'static str {
    match size {
        Some(FontSize::Xs) => "text-xs",
        Some(FontSize::Sm) => "text-sm",
        Some(FontSize::Md) => "text-base",
        Some(FontSize::Lg) => "text-lg",
        Some(FontSize::Xl) => "text-xl",
        Some(FontSize::Xl2) => "text-2xl",
        Some(FontSize::Xl3) => "text-3xl",
        Some(FontSize::Xl4) => "text-4xl",
        Some(FontSize::Xl5) => "text-5xl",
        Some(FontSize::Xl6) => "text-6xl",
        Some(FontSize::Xl7) => "text-7xl",
        Some(FontSize::Xl8) => "text-8xl",
        Some(FontSize::Other(_)) | None => default,
    }
}

pub fn animation_class(animation: Option<&TitleAnimation>) -> Option<&'static str> {
    match animation {
        Some(TitleAnimation::Fade) => Some("anim-fade"),
        Some(TitleAnimation::SlideTop) => Some("anim-slide-top"),
        Some(TitleAnimation::Zoom) => Some("anim-zoom"),
        _ => None,
    }
}

/// Alignment classes for a text container; left when unset or unknown.
pub fn align_class(align: Option<&TextAlign>) -> &'static str {
    match align {
        Some(TextAlign::Center) => "text-center items-center",
        Some(TextAlign::Right) => "text-right items-end",
        _ => "text-left items-start",
    }
}

/// Cell padding for table layouts; normal when unset or unknown.
pub fn cell_padding_class(padding: Option<&TablePadding>) -> &'static str {
    match padding {
        Some(TablePadding::Compact) => "py-1 px-2",
        Some(TablePadding::Spacious) => "py-5 px-6",
        _ => "py-3 px-4",
    }
}

pub fn corner_class(position: &NumberPosition) -> &'static str {
    match position {
        NumberPosition::TopLeft => "top-6 left-6",
        NumberPosition::TopRight => "top-6 right-6",
        NumberPosition::BottomLeft => "bottom-6 left-6",
        _ => "bottom-6 right-6",
    }
}

/// Overlay opacity clamped to `[0, 0.9]`; unset or non-finite gives 0.5.
pub fn overlay_opacity(slide: &Slide) -> f32 {
    match slide.background_overlay_opacity {
        Some(value) if value.is_finite() => value.clamp(0.0, MAX_OVERLAY_OPACITY),
        _ => DEFAULT_OVERLAY_OPACITY,
    }
}

/// Two-digit, zero-padded position label.
pub fn pad2(value: usize) -> String {
    format!("{:02}", value)
}

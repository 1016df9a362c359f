//! Text-heavy layouts: Content and TwoColumn.

use crate::render::context::RenderContext;
use crate::render::fields;
use crate::render::node::Element;
use crate::render::style::pad2;

use super::Body;

pub const RIGHT_COLUMN_PLACEHOLDER: &str = "Add content to the right column in the editor...";

pub fn content(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let bri = ctx.theme.palette.is_bri();
    let rule_strength = if bri { 30 } else { 20 };

    let header = Element::div()
        .class(format!(
            "mb-12 border-b {} pb-6 flex justify-between items-end",
            ctx.theme.rule_class(rule_strength)
        ))
        .child(ctx.heading("h2", "text-4xl", &format!("font-bold uppercase {}", ctx.align())))
        .maybe_child(ctx.slide.subtitle.as_deref().map(|subtitle| {
            Element::new("span")
                .role("subtitle")
                .class(format!("{} text-xs opacity-50", fonts.mono))
                .markup(subtitle)
        }));

    let bullets = ctx.slide.points.iter().enumerate().map(|(i, point)| {
        let mut index = Element::new("span")
            .role("bullet-index")
            .class(format!("{} text-xs opacity-40", fonts.mono))
            .text(format!("{}.", pad2(i + 1)));
        if bri {
            index = index.style("color", ctx.theme.palette.accent);
        }

        let mut text = Element::div().class(format!(
            "flex-1 {} leading-relaxed {}",
            fonts.body,
            ctx.body_size("text-lg")
        ));
        if !bri {
            text = text.class("text-zinc-700");
        }
        if let Some(color) = ctx.theme.text_override() {
            text = text.style("color", color);
        }

        Element::new("li")
            .role("bullet")
            .class("flex gap-6 items-baseline")
            .child(index)
            .child(text.markup(point))
    });

    ctx.page("flex flex-col h-full p-16 relative")
        .child(ctx.meta("Details"))
        .child(header)
        .child(
            Element::div()
                .class(format!("flex-1 pl-4 {}", ctx.align()))
                .child(Element::new("ul").class("space-y-6").children(bullets)),
        )
        .into()
}

pub fn two_column(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;

    let left_entries = ctx.slide.points.iter().map(|point| {
        Element::div()
            .role("left-column-entry")
            .class(format!("{} text-xl font-medium leading-tight", fonts.heading))
            .child(Element::div().markup(point))
    });
    let left = Element::div()
        .class("w-5/12 flex flex-col pt-12")
        .child(ctx.heading("h2", "text-5xl", "font-bold uppercase mb-8 leading-[0.9]"))
        .child(ctx.rule("w-12 h-1 mb-12"))
        .child(Element::div().class("space-y-6").children(left_entries));

    let right_points = fields::right_column(ctx.slide);
    let paragraphs: Vec<Element> = if right_points.is_empty() {
        vec![Element::new("p")
            .role("right-column-placeholder")
            .class("opacity-40 italic")
            .text(RIGHT_COLUMN_PLACEHOLDER)]
    } else {
        right_points
            .iter()
            .map(|point| Element::new("p").role("right-column-paragraph").markup(point))
            .collect()
    };
    let right = Element::div().class("flex-1 pt-12 flex flex-col").child(
        Element::div()
            .class(format!(
                "{} opacity-70 leading-relaxed space-y-4 text-justify {}",
                fonts.body,
                ctx.body_size("text-sm")
            ))
            .children(paragraphs),
    );

    ctx.page("flex h-full p-16 relative gap-16")
        .child(left)
        .child(ctx.rule("w-px opacity-10 h-full mt-4"))
        .child(right)
        .into()
}

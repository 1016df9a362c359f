//! Split layouts: ImageLeft, ImageRight and BigNumber.

use crate::render::context::RenderContext;
use crate::render::fields::{self, IMAGE_LEFT_FALLBACK, IMAGE_RIGHT_FALLBACK};
use crate::render::node::Element;

use super::Body;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn image_pane(ctx: &RenderContext, side: Side) -> Element {
    let fallback = match side {
        Side::Left => IMAGE_LEFT_FALLBACK,
        Side::Right => IMAGE_RIGHT_FALLBACK,
    };
    Element::div()
        .role("image-pane")
        .class("w-1/2 h-full bg-zinc-100 relative overflow-hidden")
        .child(
            Element::new("img")
                .attr("src", fields::pane_image(ctx.slide, fallback))
                .attr("alt", "Architecture")
                .class("w-full h-full object-cover grayscale"),
        )
}

fn text_pane(ctx: &RenderContext, side: Side) -> Element {
    let fonts = ctx.fonts;
    let kicker = match side {
        Side::Left => "Figure 06",
        Side::Right => "Figure 07",
    };
    let align = if side == Side::Right && ctx.slide.text_align.is_none() {
        "text-right items-end"
    } else {
        ctx.align()
    };
    let separator = match side {
        Side::Left => format!("border-b {} pb-4 last:border-0", ctx.theme.rule_class(10)),
        Side::Right => String::new(),
    };

    let paragraphs = ctx.slide.points.iter().map(|point| {
        Element::new("p")
            .role("paragraph")
            .class(format!(
                "{} {} opacity-70 leading-7 {}",
                ctx.body_size("text-sm"),
                fonts.body,
                separator
            ))
            .markup(point)
    });

    Element::div()
        .role("text-pane")
        .class(format!("w-1/2 p-16 flex flex-col justify-center {}", align))
        .child(
            Element::div()
                .role("kicker")
                .class(format!("{} text-xs uppercase tracking-widest opacity-40 mb-4", fonts.mono))
                .text(kicker),
        )
        .child(ctx.heading("h2", "text-4xl", "font-bold uppercase mb-8 leading-none"))
        .child(Element::div().class("space-y-6").children(paragraphs))
}

pub fn image_left(ctx: &RenderContext) -> Body {
    ctx.page("flex h-full w-full")
        .child(image_pane(ctx, Side::Left))
        .child(text_pane(ctx, Side::Left))
        .into()
}

/// Mirror of ImageLeft: text first, right-aligned unless an explicit
/// alignment is set, no rule separators.
pub fn image_right(ctx: &RenderContext) -> Body {
    ctx.page("flex h-full w-full")
        .child(text_pane(ctx, Side::Right))
        .child(image_pane(ctx, Side::Right))
        .into()
}

pub fn big_number(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let figure = fields::big_figure(ctx.slide);

    let left = Element::div()
        .class(format!(
            "w-1/2 flex items-center justify-center border-r {} bg-zinc-50",
            ctx.theme.rule_class(10)
        ))
        .child(
            Element::new("span")
                .role("figure")
                .class(format!(
                    "text-[180px] {} font-bold leading-none tracking-tighter opacity-90",
                    fonts.heading
                ))
                .text(figure.figure),
        );

    let right = Element::div()
        .class("w-1/2 p-20 flex flex-col justify-center")
        .child(ctx.heading("h2", "text-5xl", "font-bold uppercase mb-6 leading-tight"))
        .child(
            Element::new("p")
                .role("caption")
                .class(format!("text-lg {} opacity-60 leading-relaxed", fonts.body))
                .markup(figure.caption),
        );

    ctx.page("flex h-full").child(left).child(right).into()
}

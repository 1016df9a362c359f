//! Title-led layouts: Title, SectionHeader, TitleOnly and Quote.

use crate::render::context::RenderContext;
use crate::render::fields;
use crate::render::node::Element;
use crate::render::style::pad2;

use super::Body;

pub fn title(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let page = ctx
        .page(&format!("flex flex-col h-full relative p-16 justify-between {}", ctx.align()))
        .child(ctx.rule("w-full h-px opacity-20 absolute top-12 left-0 right-0"))
        .child(ctx.rule("w-full h-px opacity-20 absolute bottom-12 left-0 right-0"))
        .child(
            Element::div()
                .role("kicker")
                .class(format!("{} text-xs uppercase tracking-widest pt-8", fonts.mono))
                .text("Presentation Deck"),
        );

    let subtitle = ctx.slide.subtitle.as_deref().map(|subtitle| {
        Element::div()
            .class("flex items-center gap-4")
            .child(ctx.rule("h-px w-12"))
            .child(
                Element::new("h2")
                    .role("subtitle")
                    .class(format!("text-sm {} tracking-widest uppercase", fonts.mono))
                    .markup(subtitle),
            )
    });

    let headline = Element::div()
        .class("flex flex-col")
        .child(ctx.heading(
            "h1",
            "text-8xl",
            "font-bold uppercase leading-[0.85] tracking-tight mb-8",
        ))
        .maybe_child(subtitle);

    let footer = Element::div()
        .class("flex justify-between items-end pb-4")
        .child(
            Element::div()
                .role("epigraph")
                .class(format!(
                    "text-xs {} opacity-60 max-w-sm leading-relaxed",
                    fonts.body
                ))
                .markup(fields::epigraph(ctx.slide)),
        )
        .child(
            Element::div()
                .role("badge")
                .class("text-xs font-bold uppercase tracking-widest border border-current px-3 py-1")
                .text("Start"),
        );

    page.child(headline).child(footer).into()
}

pub fn section_header(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let palette = ctx.theme.palette;
    let mut page = ctx.page("flex flex-col h-full relative justify-center items-center text-center p-20");
    if !ctx.has_background() {
        page = page
            .style("background-color", palette.inverted_page)
            .style(
                "color",
                ctx.theme.explicit_color().unwrap_or(palette.inverted_ink),
            );
    }

    let subtitle = ctx.slide.subtitle.as_deref().map(|subtitle| {
        Element::div()
            .class("border-t border-white/20 pt-6 max-w-lg")
            .child(
                Element::new("p")
                    .role("subtitle")
                    .class("text-lg font-serif-display italic text-white/80")
                    .markup(subtitle),
            )
    });

    page.child(Element::div().class("absolute top-0 left-1/2 -translate-x-1/2 w-px h-24 bg-white/20"))
        .child(
            Element::new("h2")
                .role("kicker")
                .class(format!(
                    "{} text-xs uppercase tracking-[0.3em] mb-6 text-white/50",
                    fonts.mono
                ))
                .text(format!("Section {}", pad2(ctx.index))),
        )
        .child(ctx.heading("h1", "text-7xl", "font-bold uppercase tracking-tight mb-8"))
        .maybe_child(subtitle)
        .child(Element::div().class("absolute bottom-0 left-1/2 -translate-x-1/2 w-px h-24 bg-white/20"))
        .into()
}

pub fn title_only(ctx: &RenderContext) -> Body {
    ctx.page("flex flex-col h-full justify-center items-center p-12 text-center relative")
        .child(ctx.meta("Concept"))
        .child(
            Element::div()
                .class(format!("flex-1 flex flex-col justify-center {}", ctx.align()))
                .child(ctx.heading("h1", "text-6xl", "font-bold uppercase tracking-tight"))
                .child(ctx.rule("w-24 h-1 mt-8")),
        )
        .into()
}

pub fn quote(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let font = if fonts.overridden {
        fonts.heading
    } else {
        "font-serif-display"
    };
    let quoted = format!("\"{}\"", ctx.slide.title);

    let attribution = fields::attribution(ctx.slide).map(|attribution| {
        Element::div()
            .class("flex items-center gap-4")
            .child(ctx.rule("w-8 h-px opacity-30"))
            .child(
                Element::new("span")
                    .role("attribution")
                    .class(format!("{} text-xs uppercase tracking-widest opacity-60", fonts.mono))
                    .markup(attribution),
            )
            .child(ctx.rule("w-8 h-px opacity-30"))
    });

    let heading = ctx.heading_from(
        "h2",
        "text-4xl",
        font,
        "italic leading-snug mb-8 opacity-90",
        &quoted,
    );

    ctx.page("flex flex-col h-full justify-center items-center p-24 text-center")
        .child(
            Element::div()
                .role("quote-mark")
                .class("mb-8 opacity-20 text-5xl font-serif-display")
                .text("\u{201c}"),
        )
        .child(heading)
        .maybe_child(attribution)
        .into()
}

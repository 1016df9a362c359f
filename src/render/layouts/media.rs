//! Image-led layouts: Gallery and ImageCarousel.

use crate::render::context::RenderContext;
use crate::render::fields;
use crate::render::node::Element;

use super::Body;

pub fn gallery(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let slots = fields::gallery(ctx.slide);

    let cells = slots.entries.iter().map(|cell| {
        Element::div()
            .role("gallery-cell")
            .class("relative group bg-zinc-100 overflow-hidden w-full h-full border border-current/10")
            .child(
                Element::new("img")
                    .attr("src", cell.image_url.as_str())
                    .attr("alt", cell.title.as_str())
                    .class("w-full h-full object-cover grayscale transition-all duration-700 group-hover:grayscale-0 group-hover:scale-110"),
            )
            .child(
                Element::div()
                    .role("gallery-overlay")
                    .class("absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center")
                    .child(
                        Element::new("span")
                            .role("gallery-title")
                            .class("text-white font-mono text-xs uppercase tracking-widest")
                            .text(cell.title.as_str()),
                    ),
            )
    });

    let header = Element::div()
        .class("flex justify-between items-center mb-6")
        .child(ctx.heading("h2", "text-2xl", "font-bold uppercase"))
        .child(
            Element::new("span")
                .role("kicker")
                .class(format!("{} text-[10px] opacity-40", fonts.mono))
                .text("VISUAL INDEX"),
        );

    Body {
        element: ctx
            .page("flex flex-col h-full p-12")
            .child(header)
            .child(
                Element::div()
                    .class("flex-1 grid grid-cols-3 grid-rows-2 gap-4")
                    .children(cells),
            ),
        hidden_items: slots.hidden,
    }
}

/// Full-bleed carousel. The active entry is `carousel_index` modulo the
/// entry count, so a stale index from a longer item list still lands on a
/// valid entry.
pub fn image_carousel(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let entries = fields::carousel(ctx.slide);
    let count = entries.len();
    let active_index = ctx.carousel_index % count.max(1);
    let Some(active) = entries.get(active_index) else {
        return ctx.page("flex h-full w-full").into();
    };

    let caption = Element::div()
        .class("absolute bottom-12 left-12 right-12 text-white")
        .child(
            Element::div().class("flex justify-between items-end").child(
                Element::div()
                    .child(
                        Element::new("span")
                            .role("title")
                            .class(format!("{} text-[10px] uppercase tracking-widest opacity-60 mb-1 block", fonts.mono))
                            .markup(&ctx.slide.title),
                    )
                    .child(
                        Element::new("span")
                            .role("carousel-counter")
                            .class(format!("{} text-xs uppercase tracking-widest opacity-60 mb-2 block", fonts.mono))
                            .text(format!("{} / {}", active_index + 1, count)),
                    )
                    .child(
                        ctx.heading_from(
                            "h2",
                            "text-4xl",
                            fonts.heading,
                            "font-bold uppercase mb-2",
                            &active.title,
                        )
                        .role("carousel-title"),
                    )
                    .child(
                        Element::new("p")
                            .role("carousel-description")
                            .class(format!("{} text-sm opacity-80 max-w-lg", fonts.body))
                            .text(active.description.as_str()),
                    ),
            ),
        );

    let controls = Element::div()
        .class("absolute inset-0 flex items-center justify-between p-4 opacity-0 group-hover:opacity-100 transition-opacity")
        .child(
            Element::new("button")
                .role("carousel-prev")
                .class("p-3 rounded-full bg-white/10 hover:bg-white/20 backdrop-blur text-white border border-white/20 transition-all")
                .text("\u{2039}"),
        )
        .child(
            Element::new("button")
                .role("carousel-next")
                .class("p-3 rounded-full bg-white/10 hover:bg-white/20 backdrop-blur text-white border border-white/20 transition-all")
                .text("\u{203a}"),
        );

    let dots = (0..count).map(|i| {
        let dot = Element::new("button")
            .role("carousel-dot")
            .attr("data-index", i.to_string())
            .class("w-1.5 h-1.5 rounded-full transition-all");
        if i == active_index {
            dot.attr("data-active", "true").class("bg-white w-4")
        } else {
            dot.class("bg-white/30 hover:bg-white/50")
        }
    });

    ctx.page("flex h-full w-full relative bg-zinc-100 overflow-hidden group")
        .child(
            Element::new("img")
                .role("carousel-image")
                .attr("src", fields::carousel_image(active))
                .attr("alt", crate::markup::plain_text(&active.title))
                .class("w-full h-full object-cover transition-transform duration-500"),
        )
        .child(
            Element::div()
                .role("carousel-gradient")
                .class("absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent opacity-80"),
        )
        .child(caption)
        .child(controls)
        .child(
            Element::div()
                .role("carousel-dots")
                .class("absolute bottom-6 left-1/2 -translate-x-1/2 flex gap-2")
                .children(dots),
        )
        .into()
}

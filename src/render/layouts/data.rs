//! Structured-data layouts: Table and Timeline.

use crate::render::context::RenderContext;
use crate::render::fields;
use crate::render::node::Element;
use crate::render::style::cell_padding_class;
use crate::render::theme::BRI_PRIMARY;

use super::Body;

pub const EMPTY_TABLE: &str = "NO DATA PROVIDED";

pub fn table(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let bri = ctx.theme.palette.is_bri();
    let padding = cell_padding_class(ctx.slide.table_padding.as_ref());

    let header = Element::div()
        .class(format!("mb-10 {}", ctx.align()))
        .child(ctx.heading("h2", "text-3xl", "font-bold uppercase"))
        .maybe_child(ctx.slide.subtitle.as_deref().map(|subtitle| {
            Element::new("p")
                .role("subtitle")
                .class(format!("text-sm {} opacity-50 mt-2", fonts.mono))
                .markup(subtitle)
        }));

    let body = match fields::table(ctx.slide) {
        Some((head, rows)) => {
            let head_cells = head.iter().map(|cell| {
                Element::new("th")
                    .role("table-header-cell")
                    .class(format!(
                        "{} {} text-xs uppercase tracking-wider opacity-80 font-bold border-r {} last:border-r-0",
                        padding,
                        fonts.mono,
                        ctx.theme.rule_class(20)
                    ))
                    .text(cell.as_str())
            });
            let head_row = Element::new("tr")
                .class(format!("border-b {}", ctx.theme.rule_class(if bri { 30 } else { 20 })))
                .class(if bri {
                    format!("bg-[{}]/5", BRI_PRIMARY)
                } else {
                    "bg-current/5".to_string()
                })
                .children(head_cells);

            let body_rows = rows.iter().map(|row| {
                let cells = row.iter().map(|cell| {
                    Element::new("td")
                        .role("table-cell")
                        .class(format!(
                            "{} {} text-sm opacity-80 border-r {} last:border-r-0",
                            padding,
                            fonts.body,
                            ctx.theme.rule_class(10)
                        ))
                        .text(cell.as_str())
                });
                Element::new("tr")
                    .role("table-row")
                    .class(format!(
                        "border-b hover:bg-black/5 transition-colors {}",
                        ctx.theme.rule_class(10)
                    ))
                    .children(cells)
            });

            Element::new("table")
                .class(format!(
                    "w-full text-left border-collapse border {}",
                    ctx.theme.rule_class(if bri { 30 } else { 20 })
                ))
                .child(Element::new("thead").child(head_row))
                .child(Element::new("tbody").children(body_rows))
        }
        None => Element::div()
            .role("table-empty")
            .class(format!(
                "w-full h-32 flex items-center justify-center border border-dashed {} mt-4 opacity-40 {} text-xs",
                ctx.theme.rule_class(20),
                fonts.mono
            ))
            .text(EMPTY_TABLE),
    };

    ctx.page("flex flex-col h-full p-16")
        .child(ctx.meta("Data Analysis"))
        .child(header)
        .child(Element::div().class("flex-1 w-full overflow-hidden").child(body))
        .into()
}

pub fn timeline(ctx: &RenderContext) -> Body {
    let fonts = ctx.fonts;
    let bri = ctx.theme.palette.is_bri();
    let slots = fields::timeline(ctx.slide);

    let steps = slots.entries.iter().enumerate().map(|(i, step)| {
        let marker = Element::div()
            .role("timeline-marker")
            .class("w-8 h-8 rounded-full border bg-white flex items-center justify-center mb-6 text-[10px] font-bold")
            .class(if bri {
                format!("border-[{0}] text-[{0}]", BRI_PRIMARY)
            } else {
                "border-current".to_string()
            })
            .text((i + 1).to_string());

        let image = step.image_url.as_deref().map(|url| {
            Element::div()
                .class("mt-4 w-16 h-16 bg-gray-100 rounded-full overflow-hidden border border-current/20")
                .child(
                    Element::new("img")
                        .attr("src", url)
                        .attr("alt", "icon")
                        .class("w-full h-full object-cover"),
                )
        });

        Element::div()
            .role("timeline-item")
            .class("relative flex flex-col items-center text-center w-1/4 px-2 z-10")
            .child(marker)
            .child(
                Element::new("h3")
                    .role("timeline-title")
                    .class(format!("{} font-bold text-sm uppercase mb-2", fonts.heading))
                    .text(step.title.as_str()),
            )
            .child(
                Element::new("p")
                    .role("timeline-description")
                    .class(format!(
                        "{} {} opacity-60 leading-relaxed",
                        fonts.body,
                        ctx.body_size("text-sm")
                    ))
                    .text(step.description.as_str()),
            )
            .maybe_child(image)
    });

    let stepper = Element::div()
        .class("relative flex justify-between items-start w-full px-8")
        .child(ctx.rule("absolute top-[15px] left-0 w-full h-px opacity-20"))
        .children(steps);

    Body {
        element: ctx
            .page("flex flex-col h-full p-16 justify-center")
            .child(ctx.heading("h2", "text-3xl", "font-bold uppercase mb-16 text-center"))
            .child(stepper),
        hidden_items: slots.hidden,
    }
}

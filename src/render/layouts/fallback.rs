use crate::render::context::RenderContext;
use crate::render::node::Element;

use super::Body;

pub const UNRECOGNIZED_MESSAGE: &str = "Layout not recognized.";

/// Raw title text plus a notice. Tags in the title are shown literally.
pub fn unrecognized(ctx: &RenderContext) -> Body {
    ctx.page("flex flex-col h-full justify-center items-center p-20 text-center")
        .child(
            Element::new("h1")
                .role("title")
                .class("text-4xl font-bold mb-4")
                .text(ctx.slide.title.as_str()),
        )
        .child(
            Element::new("p")
                .role("unrecognized")
                .text(UNRECOGNIZED_MESSAGE),
        )
        .into()
}

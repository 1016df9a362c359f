use crate::render::RenderedSlide;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, page_rect};
use crate::ui::theme::{css_color, CHROME_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let carousel = app.carousel_position();

    let layout_name = app
        .slide()
        .map(|slide| slide.layout.as_str().to_string())
        .unwrap_or_default();
    let mut header_widget = Header::new(app.index() + 1, app.total(), &layout_name);
    if let Some((active, len)) = carousel {
        header_widget = header_widget.with_carousel(active, len);
    }
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    if let Some(rendered) = app.rendered() {
        frame.render_widget(slide_widget(&rendered), page_rect(body));
    }

    frame.render_widget(Footer::new(carousel.is_some()).widget(footer), footer);
}

/// Text projection of a rendered slide: the title block bold, every other
/// text block on its own line, painted with the slide's surface colours.
fn slide_widget(rendered: &RenderedSlide) -> Paragraph<'static> {
    let mut page_style = Style::default();
    if let Some(fill) = css_color(&rendered.surface.fill) {
        page_style = page_style.bg(fill);
    }
    if let Some(ink) = css_color(&rendered.surface.ink) {
        page_style = page_style.fg(ink);
    }

    let title = rendered
        .root
        .find_role("title")
        .map(|title| title.text_content().trim().to_string());

    let mut lines = Vec::new();
    for block in rendered.text_blocks() {
        let style = if Some(&block) == title.as_ref() {
            page_style.add_modifier(Modifier::BOLD)
        } else {
            page_style
        };
        lines.push(Line::from(Span::styled(block, style)));
        lines.push(Line::default());
    }

    Paragraph::new(lines)
        .style(page_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CHROME_BORDER)),
        )
}

use crate::ui::theme::{CHROME_BORDER, CHROME_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    carousel: bool,
}

impl Footer {
    pub fn new(carousel: bool) -> Self {
        Self { carousel }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.carousel {
            " →/Space: Next │ ←: Prev │ ↑/↓, 1-9: Image │ Click: Left/Right third │ Esc: Exit"
        } else {
            " →/Space: Next │ ←: Prev │ Click: Left/Right third │ Esc: Exit"
        };
        let version = format!("v{} ", VERSION);

        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(CHROME_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(CHROME_BORDER)),
            )
    }
}

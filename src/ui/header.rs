use crate::ui::theme::{CHROME_ACCENT, CHROME_BORDER, CHROME_SEPARATOR, CHROME_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Deck position and layout of the slide on screen.
pub struct Header<'a> {
    position: usize,
    total: usize,
    layout: &'a str,
    carousel: Option<(usize, usize)>,
}

impl<'a> Header<'a> {
    pub fn new(position: usize, total: usize, layout: &'a str) -> Self {
        Self {
            position,
            total,
            layout,
            carousel: None,
        }
    }

    pub fn with_carousel(mut self, active: usize, len: usize) -> Self {
        self.carousel = Some((active, len));
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(CHROME_TEXT);
        let separator_style = Style::default().fg(CHROME_SEPARATOR);
        let accent_style = Style::default()
            .fg(CHROME_ACCENT)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                format!("{:02} / {:02}", self.position, self.total),
                accent_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.layout.to_string(), text_style),
        ];
        if let Some((active, len)) = self.carousel {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("image {} / {}", active + 1, len), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(CHROME_BORDER)),
        )
    }
}

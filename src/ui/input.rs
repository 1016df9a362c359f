use crate::ui::app::App;
use crate::ui::present::PresentIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char(' ') => {
            app.on_present(PresentIntent::Next)
        }
        KeyCode::Left | KeyCode::PageUp => app.on_present(PresentIntent::Prev),
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Down => app.on_carousel_step(true),
        KeyCode::Up => app.on_carousel_step(false),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(n) = digit.to_digit(10) {
                app.on_carousel_select(n as usize - 1);
            }
        }
        _ => {}
    }
}

/// Left-button presses navigate by screen third.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, width: u16) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_present(PresentIntent::Click {
            column: mouse.column,
            width,
        });
    }
}

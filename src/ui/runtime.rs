use crate::model::Deck;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Present `deck` full-screen starting at `from`. Returns the index of the
/// last slide shown.
pub fn present(deck: Deck, from: usize) -> io::Result<usize> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(deck, from);
    let events = EventHandler::new(tick_rate);
    let mut width = crossterm::terminal::size().map(|(cols, _)| cols).unwrap_or(0);
    tracing::info!(from = app.index(), total = app.total(), "Presentation started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, width),
            Ok(AppEvent::Resize(cols)) => width = cols,
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(at = app.index(), "Presentation ended");
    Ok(app.index())
}

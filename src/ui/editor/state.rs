use crate::history::History;
use crate::model::{starter_deck, Deck, Slide};
use crate::ui::mvi::UiState;

/// Live deck, selected slide and the undo history behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub deck: Deck,
    /// Always a valid index into `deck`.
    pub current: usize,
    pub history: History<Deck>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(starter_deck(), 0)
    }
}

impl UiState for EditorState {}

impl EditorState {
    /// Fresh state with an empty history; `current` is clamped.
    pub fn new(deck: Deck, current: usize) -> Self {
        let current = deck.clamp_index(current);
        Self {
            deck,
            current,
            history: History::new(),
        }
    }

    /// State resumed from a saved session.
    pub fn with_history(deck: Deck, current: usize, history: History<Deck>) -> Self {
        Self {
            history,
            ..Self::new(deck, current)
        }
    }

    pub fn current_slide(&self) -> &Slide {
        let index = self.deck.clamp_index(self.current);
        &self.deck.slides()[index]
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

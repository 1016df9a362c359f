use crate::history::History;
use crate::model::Deck;
use crate::store::{DeckStore, StoreError};
use crate::ui::mvi::dispatch;

use super::intent::EditorIntent;
use super::reducer::EditorReducer;
use super::state::EditorState;

/// Editor state bound to a store: every dispatch that changes the deck or
/// the selection is written through, and the undo history with it, so undo
/// reaches across runs.
pub struct EditorSession {
    state: EditorState,
    store: DeckStore,
}

impl EditorSession {
    /// Load the persisted deck (or the starter deck) and its history. A
    /// substituted starter deck starts with an empty history.
    pub fn open(store: DeckStore) -> Self {
        let loaded = store.load();
        let history = if loaded.restored {
            store.load_history()
        } else {
            History::new()
        };
        Self {
            state: EditorState::with_history(loaded.deck, loaded.current, history),
            store,
        }
    }

    pub fn dispatch(&mut self, intent: EditorIntent) -> Result<(), StoreError> {
        let label = intent.name();
        tracing::debug!(intent = label, "Editor dispatch");

        let before_deck = self.state.deck.clone();
        let before_current = self.state.current;
        dispatch::<EditorReducer>(&mut self.state, intent);

        let deck_changed = self.state.deck != before_deck;
        if deck_changed {
            tracing::info!(
                intent = label,
                slides = self.state.deck.len(),
                current = self.state.current,
                "Deck changed"
            );
        }
        if deck_changed || self.state.current != before_current {
            self.store.save(&self.state.deck, self.state.current)?;
        }
        if deck_changed {
            self.store.save_history(&self.state.history)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.state.deck
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn store(&self) -> &DeckStore {
        &self.store
    }
}

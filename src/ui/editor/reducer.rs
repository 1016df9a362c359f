use crate::model::{Deck, Layout, Slide, SlideId};
use crate::ui::mvi::Reducer;

use super::intent::EditorIntent;
use super::state::EditorState;

pub struct EditorReducer;

impl EditorReducer {
    fn commit(mut state: EditorState, next: Deck, current: usize) -> EditorState {
        state.history.record_and_apply(&mut state.deck, next);
        state.current = state.deck.clamp_index(current);
        tracing::debug!(
            slides = state.deck.len(),
            current = state.current,
            undo_depth = state.history.past_len(),
            "Deck committed"
        );
        state
    }

    fn new_slide(state: &EditorState) -> Slide {
        let mut slide = Slide::new(SlideId::generate(), Layout::Content, "New Slide");
        slide.points = vec!["Point 1...".to_string()];
        slide.theme_mode = state.current_slide().theme_mode.clone();
        slide
    }
}

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::UpdateSlide(mut slide) => {
                slide.id = state.current_slide().id.clone();
                if state.current_slide() == &slide {
                    return state;
                }
                match state.deck.with_slide_replaced(state.current, slide) {
                    Some(next) => {
                        let current = state.current;
                        Self::commit(state, next, current)
                    }
                    None => state,
                }
            }

            EditorIntent::ApplyToAll(patch) => {
                if patch.is_empty() {
                    return state;
                }
                let next = state.deck.with_patch_applied(&patch);
                let current = state.current;
                Self::commit(state, next, current)
            }

            EditorIntent::AddSlide => {
                let next = state.deck.with_slide_appended(Self::new_slide(&state));
                let current = next.len() - 1;
                Self::commit(state, next, current)
            }

            EditorIntent::DuplicateSlide(index) => match state.deck.with_slide_duplicated(index) {
                Some(next) => Self::commit(state, next, index + 1),
                None => state,
            },

            EditorIntent::DeleteSlide(index) => match state.deck.with_slide_removed(index) {
                Some(next) => {
                    let current = state.current;
                    Self::commit(state, next, current)
                }
                None => {
                    tracing::debug!(index, slides = state.deck.len(), "Delete refused");
                    state
                }
            },

            EditorIntent::Select(index) => {
                let current = state.deck.clamp_index(index);
                EditorState { current, ..state }
            }

            EditorIntent::Undo => {
                let mut state = state;
                if state.history.undo(&mut state.deck) {
                    state.current = state.deck.clamp_index(state.current);
                }
                state
            }

            EditorIntent::Redo => {
                let mut state = state;
                if state.history.redo(&mut state.deck) {
                    state.current = state.deck.clamp_index(state.current);
                }
                state
            }

            EditorIntent::ReplaceDeck(deck) => {
                if deck == state.deck {
                    return state;
                }
                Self::commit(state, deck, 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{starter_deck, SlidePatch, ThemeMode};

    fn reduce(state: EditorState, intent: EditorIntent) -> EditorState {
        EditorReducer::reduce(state, intent)
    }

    #[test]
    fn add_inherits_theme_and_selects_new_slide() {
        let mut deck = starter_deck();
        deck = deck.with_patch_applied(&SlidePatch {
            theme_mode: Some(ThemeMode::Bri),
            ..SlidePatch::default()
        });
        let state = reduce(EditorState::new(deck, 0), EditorIntent::AddSlide);
        assert_eq!(state.deck.len(), 4);
        assert_eq!(state.current, 3);
        let added = state.current_slide();
        assert_eq!(added.title, "New Slide");
        assert_eq!(added.points, vec!["Point 1..."]);
        assert_eq!(added.theme_mode, Some(ThemeMode::Bri));
        assert_eq!(state.history.past_len(), 1);
    }

    #[test]
    fn select_is_not_recorded() {
        let state = reduce(EditorState::default(), EditorIntent::Select(9));
        assert_eq!(state.current, 2);
        assert!(!state.can_undo());
    }

    #[test]
    fn unchanged_update_is_not_recorded() {
        let state = EditorState::default();
        let same = state.current_slide().clone();
        let state = reduce(state, EditorIntent::UpdateSlide(same));
        assert!(!state.can_undo());
    }

    #[test]
    fn delete_clamps_current() {
        let state = reduce(EditorState::default(), EditorIntent::Select(2));
        let state = reduce(state, EditorIntent::DeleteSlide(2));
        assert_eq!(state.deck.len(), 2);
        assert_eq!(state.current, 1);
    }
}

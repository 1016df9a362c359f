mod common;

use common::{deck_of, titles};
use slidegen::history::{History, MAX_HISTORY};
use slidegen::model::Deck;
use slidegen::ui::editor::{EditorIntent, EditorReducer, EditorState};
use slidegen::ui::mvi::Reducer;

#[test]
fn undo_restores_previous_deck_and_clamps_index() {
    // D1 has three slides, D2 one; undo from D2 must bring D1 back.
    let d1 = deck_of(3);
    let state = EditorState::new(d1.clone(), 0);
    let state = EditorReducer::reduce(state, EditorIntent::ReplaceDeck(deck_of(1)));
    assert_eq!(state.deck.len(), 1);

    let state = EditorReducer::reduce(state, EditorIntent::Undo);
    assert_eq!(state.deck, d1);
    assert!(state.current < state.deck.len());
}

#[test]
fn undo_of_add_clamps_current() {
    let state = EditorState::new(deck_of(3), 0);
    let state = EditorReducer::reduce(state, EditorIntent::AddSlide);
    assert_eq!(state.current, 3);

    let state = EditorReducer::reduce(state, EditorIntent::Undo);
    assert_eq!(state.deck.len(), 3);
    assert_eq!(state.current, 2);

    let state = EditorReducer::reduce(state, EditorIntent::Redo);
    assert_eq!(state.deck.len(), 4);
    assert_eq!(state.current, 2);
}

#[test]
fn commit_empties_future() {
    let mut history: History<Deck> = History::new();
    let mut live = deck_of(1);
    history.record_and_apply(&mut live, deck_of(2));
    history.undo(&mut live);
    assert_eq!(history.future_len(), 1);

    history.record_and_apply(&mut live, deck_of(3));
    assert_eq!(history.future_len(), 0);
    assert!(!history.redo(&mut live));
    assert_eq!(live.len(), 3);
}

#[test]
fn past_never_exceeds_bound() {
    let mut state = EditorState::new(deck_of(1), 0);
    for _ in 0..(MAX_HISTORY + 10) {
        state = EditorReducer::reduce(state, EditorIntent::AddSlide);
        assert!(state.history.past_len() <= MAX_HISTORY);
    }
    assert_eq!(state.history.past_len(), MAX_HISTORY);

    let mut undone = 0;
    while state.can_undo() {
        state = EditorReducer::reduce(state, EditorIntent::Undo);
        undone += 1;
    }
    assert_eq!(undone, MAX_HISTORY);
    // The oldest reachable deck is the one from after the tenth add.
    assert_eq!(state.deck.len(), 11);
}

#[test]
fn undo_redo_walk_is_exact() {
    let mut state = EditorState::new(deck_of(2), 0);
    let mut snapshots = vec![titles(&state.deck)];
    for intent in [
        EditorIntent::AddSlide,
        EditorIntent::DuplicateSlide(0),
        EditorIntent::DeleteSlide(1),
    ] {
        state = EditorReducer::reduce(state, intent);
        snapshots.push(titles(&state.deck));
    }

    for expected in snapshots.iter().rev().skip(1) {
        state = EditorReducer::reduce(state, EditorIntent::Undo);
        assert_eq!(&titles(&state.deck), expected);
    }
    for expected in snapshots.iter().skip(1) {
        state = EditorReducer::reduce(state, EditorIntent::Redo);
        assert_eq!(&titles(&state.deck), expected);
    }
}

use crate::ui::mvi::Reducer;

use super::intent::PresentIntent;
use super::state::PresentState;

pub struct PresentReducer;

impl PresentReducer {
    fn step(state: PresentState, forward: bool) -> PresentState {
        match state {
            PresentState::Presenting { index, total } => {
                let index = if forward {
                    (index + 1).min(total.saturating_sub(1))
                } else {
                    index.saturating_sub(1)
                };
                PresentState::Presenting { index, total }
            }
            PresentState::Idle => state,
        }
    }
}

impl Reducer for PresentReducer {
    type State = PresentState;
    type Intent = PresentIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PresentIntent::Start { from, total } => {
                if total == 0 {
                    return PresentState::Idle;
                }
                PresentState::Presenting {
                    index: from.min(total - 1),
                    total,
                }
            }
            PresentIntent::Next => Self::step(state, true),
            PresentIntent::Prev => Self::step(state, false),
            PresentIntent::Click { column, width } => {
                if width == 0 {
                    return state;
                }
                let third = u32::from(width) / 3;
                let column = u32::from(column);
                if column < third {
                    Self::step(state, false)
                } else if column >= u32::from(width) - third {
                    Self::step(state, true)
                } else {
                    state
                }
            }
            PresentIntent::Exit => PresentState::Idle,
        }
    }
}

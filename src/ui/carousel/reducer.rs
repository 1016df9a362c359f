use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::CarouselState;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Next { slide, len } => {
                if len > 0 {
                    let current = state.index_of(&slide) % len;
                    state.set(slide, (current + 1) % len);
                }
            }
            CarouselIntent::Prev { slide, len } => {
                if len > 0 {
                    let current = state.index_of(&slide) % len;
                    state.set(slide, (current + len - 1) % len);
                }
            }
            CarouselIntent::Select { slide, len, index } => {
                if index < len {
                    state.set(slide, index);
                }
            }
            CarouselIntent::Forget(slide) => state.forget(&slide),
            CarouselIntent::Retain(ids) => state.retain(&ids),
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlideId;

    #[test]
    fn zero_len_is_noop() {
        let id = SlideId::new("c");
        let state = CarouselReducer::reduce(
            CarouselState::default(),
            CarouselIntent::Next { slide: id.clone(), len: 0 },
        );
        assert_eq!(state.index_of(&id), 0);
        assert_eq!(state.tracked(), 0);
    }

    #[test]
    fn stale_position_is_reduced_before_stepping() {
        let id = SlideId::new("c");
        let mut state = CarouselState::default();
        state.set(id.clone(), 4);
        let state = CarouselReducer::reduce(state, CarouselIntent::Next { slide: id.clone(), len: 3 });
        assert_eq!(state.index_of(&id), 2);
    }
}

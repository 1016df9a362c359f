use super::intent::Intent;
use super::state::UiState;

/// Pure transition function `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `intent` through `R`, replacing the state in place.
pub fn dispatch<R: Reducer>(state: &mut R::State, intent: R::Intent) {
    *state = R::reduce(std::mem::take(state), intent);
}

//! Full-screen presentation navigation.

mod intent;
mod reducer;
mod state;

pub use intent::PresentIntent;
pub use reducer::PresentReducer;
pub use state::PresentState;

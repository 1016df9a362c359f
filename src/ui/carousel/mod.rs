//! Per-slide carousel positions.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::CarouselState;

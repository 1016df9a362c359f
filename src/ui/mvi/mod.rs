//! Model-View-Intent primitives shared by the editor, carousel and
//! presentation state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render / persist
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! Reducers are the only place state changes. Side effects (writing the
//! store, drawing a frame) happen in the caller around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;

//! Editor state machine: every deck mutation goes through one reducer.

mod intent;
mod reducer;
mod session;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use session::EditorSession;
pub use state::EditorState;

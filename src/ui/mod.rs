//! Editor and presenter state machines, and the terminal presenter that
//! drives the latter.

pub mod carousel;
pub mod editor;
pub mod mvi;
pub mod present;

mod app;
mod events;
mod footer;
mod header;
mod input;
mod layout;
mod render;
mod runtime;
mod terminal_guard;
mod theme;

pub use runtime::present;

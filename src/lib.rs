//! Slide-deck core: data model, layout rendering engine, undo/redo history,
//! persisted store, export pipeline and terminal presentation mode.

pub mod config;
pub mod export;
pub mod history;
pub mod logging;
pub mod markup;
pub mod model;
pub mod render;
pub mod store;
pub mod ui;

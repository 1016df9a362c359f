use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentIntent {
    /// Enter presentation mode on slide `from` of `total`.
    Start { from: usize, total: usize },
    Next,
    Prev,
    /// Pointer press at `column` of a surface `width` columns wide.
    Click { column: u16, width: u16 },
    Exit,
}

impl Intent for PresentIntent {}

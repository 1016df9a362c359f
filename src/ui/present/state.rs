use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentState {
    #[default]
    Idle,
    Presenting {
        /// 0-based, always `< total`.
        index: usize,
        total: usize,
    },
}

impl UiState for PresentState {}

impl PresentState {
    pub fn is_presenting(&self) -> bool {
        matches!(self, PresentState::Presenting { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            PresentState::Presenting { index, .. } => Some(*index),
            PresentState::Idle => None,
        }
    }
}

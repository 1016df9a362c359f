/// Marker for reducer state.
///
/// `Default` doubles as the placeholder left behind while a reducer owns the
/// state, so it must be cheap enough to build on every dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

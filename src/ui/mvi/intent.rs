/// Marker for values a reducer consumes: editing actions, navigation keys,
/// carousel clicks.
pub trait Intent: Send + 'static {}

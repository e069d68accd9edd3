//! Base trait for intents (state mutation requests).

/// Marker trait for intent objects.
///
/// Intents represent view actions (add, delete, open a dialog) and are
/// processed by reducers to produce new states.
pub trait Intent: Send + 'static {}

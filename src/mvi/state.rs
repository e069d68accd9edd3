//! Base trait for store state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states and snapshots)
/// - Self-contained (all data a view needs to render)
/// - Comparable (PartialEq so views can detect changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

//! Marker trait for reducer-owned state.

/// State that a [`Reducer`](super::Reducer) transforms.
///
/// `Default` is the session-start state; `Clone` is how snapshots are taken.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

//! Marker trait for intents.

/// An event that can drive a state transition.
///
/// Intents come from the user (edits, submit) or from the runtime
/// (timer expiry). They carry everything the reducer needs, including the
/// current time, so that reducers stay deterministic.
pub trait Intent: Send + 'static {}

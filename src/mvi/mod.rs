//! Unidirectional state primitives shared by the form and the terminal shell.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Snapshot ──→ render
//!    ↑                                            │
//!    └────────── keystroke / submit / timer ──────┘
//! ```
//!
//! - **State**: plain data, cloned into snapshots for rendering
//! - **Intent**: a single external event (field edit, submit, expiry)
//! - **Reducer**: the only place a transition happens

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

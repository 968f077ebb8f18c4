//! Spidr Air Fryer interest form.
//!
//! - [`mask`]: phone and PIN input masks
//! - [`form`]: the form session (validation, timed messages, reset)
//! - [`ui`]: terminal front end driving the session

pub mod config;
pub mod form;
pub mod logging;
pub mod mask;
pub mod mvi;
pub mod ui;

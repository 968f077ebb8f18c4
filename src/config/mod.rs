//! Configuration loading.
//!
//! The config file is optional; every key falls back to a default that
//! reproduces the stock form behavior.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, TimingConfig, UiConfig};
